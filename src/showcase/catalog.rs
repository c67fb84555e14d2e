//! Static vehicle catalogue and the asset paths derived from it.

use std::fmt;

use crate::config;

pub const DEFAULT_OPTION: &str = "complete-body";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Passenger,
    Commercial,
}

impl Category {
    /// Prefix used in video file names.
    pub fn asset_prefix(self) -> &'static str {
        match self {
            Category::Passenger => "Passenger",
            Category::Commercial => "Commercial",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Passenger => "Passenger vehicles",
            Category::Commercial => "Commercial vehicles",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Category::Passenger => "Revving up innovation from interior to exterior.",
            Category::Commercial => "Advancing engineering for heavy-duty vehicles.",
        }
    }

    pub fn options(self) -> &'static [VehicleOption] {
        match self {
            Category::Passenger => PASSENGER_OPTIONS,
            Category::Commercial => COMMERCIAL_OPTIONS,
        }
    }

    pub fn find_option(self, id: &str) -> Option<&'static VehicleOption> {
        self.options().iter().find(|option| option.id == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Passenger => f.write_str("passenger"),
            Category::Commercial => f.write_str("commercial"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehicleOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const PASSENGER_OPTIONS: &[VehicleOption] = &[
    VehicleOption { id: "complete-body", name: "Complete body", description: "Full vehicle assembly" },
    VehicleOption { id: "front", name: "Front", description: "Front section components" },
    VehicleOption { id: "cabin", name: "Cabin", description: "Interior cabin solutions" },
    VehicleOption { id: "trunk", name: "Trunk", description: "Rear storage compartment" },
    VehicleOption { id: "exterior", name: "Exterior", description: "External body parts" },
];

pub const COMMERCIAL_OPTIONS: &[VehicleOption] = &[
    VehicleOption { id: "complete-body", name: "Complete body", description: "Full commercial vehicle assembly" },
    VehicleOption { id: "engine", name: "Engine", description: "Engine components and systems" },
    VehicleOption { id: "cabin", name: "Cabin", description: "Commercial cabin solutions" },
];

pub fn video_source(category: Category, option_id: &str) -> String {
    format!("{}/{}-{}.mp4", config::VIDEO_DIR, category.asset_prefix(), option_id)
}

/// Option ids that have a dedicated thumbnail. Everything else shows the fallback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageCatalog {
    available: Vec<String>,
    fallback: String,
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self::new(["complete-body", "front", "trunk", "exterior"], DEFAULT_OPTION)
    }
}

impl ImageCatalog {
    pub fn new<I, S>(available: I, fallback_id: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
            fallback: image_path(fallback_id),
        }
    }

    pub fn image_source(&self, option_id: &str) -> String {
        if self.available.iter().any(|id| id == option_id) {
            image_path(option_id)
        } else {
            self.fallback.clone()
        }
    }

    /// Replacement after a failed image load. `None` once the fallback itself has failed.
    pub fn substitute_for(&self, failed_src: &str) -> Option<&str> {
        if failed_src.ends_with(self.fallback.as_str()) {
            None
        } else {
            Some(&self.fallback)
        }
    }
}

fn image_path(id: &str) -> String {
    format!("{}/{}.png", config::IMAGE_DIR, id)
}
