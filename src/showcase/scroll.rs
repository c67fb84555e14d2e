//! Scroll geometry to showcase state, with no DOM access.

use super::catalog::Category;

/// One sample of the page geometry, in CSS pixels relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Bottom edge of the title section.
    pub title_bottom: f64,
    /// Top edge of the oversized pinned region.
    pub region_top: f64,
    /// Bottom edge of the pinned region.
    pub region_bottom: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Fraction of a viewport the pinned region has scrolled past its top.
    pub fn scroll_progress(&self) -> f64 {
        if self.viewport_height <= 0.0 {
            return 0.0;
        }
        self.region_top.abs() / self.viewport_height
    }

    fn region_pinned(&self) -> bool {
        self.region_top <= 0.0 && self.region_bottom > self.viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThresholds {
    /// Progress above which the commercial tab is selected.
    pub commercial_above: f64,
    /// Progress below which the passenger tab is selected.
    pub passenger_below: f64,
    /// The pinned header shows once the title's bottom edge is above this offset.
    pub header_offset: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            commercial_above: 0.7,
            passenger_below: 0.3,
            header_offset: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollDerivation {
    pub active_tab: Category,
    pub show_header_at_top: bool,
}

/// Derives tab and header visibility from one scroll sample.
///
/// Between the two progress thresholds the current tab is kept, so small scroll
/// jitter around a boundary cannot flip the tab back and forth.
pub fn derive_showcase_state(
    metrics: &ScrollMetrics,
    current: Category,
    thresholds: &ScrollThresholds,
) -> ScrollDerivation {
    let mut show_header_at_top = metrics.title_bottom < thresholds.header_offset;
    let mut active_tab = current;

    if metrics.region_pinned() {
        let progress = metrics.scroll_progress();
        if progress > thresholds.commercial_above {
            active_tab = Category::Commercial;
        } else if progress < thresholds.passenger_below {
            active_tab = Category::Passenger;
        }
    } else if metrics.region_top > 0.0 {
        active_tab = Category::Passenger;
        show_header_at_top = false;
    }

    ScrollDerivation {
        active_tab,
        show_header_at_top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn pinned_at(progress: f64) -> ScrollMetrics {
        let top = -progress * VIEWPORT;
        ScrollMetrics {
            title_bottom: -VIEWPORT,
            region_top: top,
            region_bottom: top + 2.0 * VIEWPORT,
            viewport_height: VIEWPORT,
        }
    }

    fn run(samples: &[ScrollMetrics], start: Category) -> Vec<Category> {
        let thresholds = ScrollThresholds::default();
        let mut tab = start;
        samples
            .iter()
            .map(|sample| {
                tab = derive_showcase_state(sample, tab, &thresholds).active_tab;
                tab
            })
            .collect()
    }

    #[test]
    fn dead_zone_keeps_previous_tab() {
        let tabs = run(&[pinned_at(0.1), pinned_at(0.5), pinned_at(0.8)], Category::Passenger);
        assert_eq!(tabs, [Category::Passenger, Category::Passenger, Category::Commercial]);

        let tabs = run(&[pinned_at(0.8), pinned_at(0.5), pinned_at(0.2)], Category::Passenger);
        assert_eq!(tabs, [Category::Commercial, Category::Commercial, Category::Passenger]);
    }

    #[test]
    fn region_below_viewport_top_resets_everything() {
        let metrics = ScrollMetrics {
            title_bottom: 50.0,
            region_top: 120.0,
            region_bottom: 120.0 + 2.0 * VIEWPORT,
            viewport_height: VIEWPORT,
        };
        let derived = derive_showcase_state(&metrics, Category::Commercial, &ScrollThresholds::default());
        assert_eq!(derived.active_tab, Category::Passenger);
        assert!(!derived.show_header_at_top);
    }

    #[test]
    fn header_pins_once_title_leaves() {
        let thresholds = ScrollThresholds::default();
        let mut metrics = pinned_at(0.0);
        metrics.title_bottom = 99.0;
        assert!(derive_showcase_state(&metrics, Category::Passenger, &thresholds).show_header_at_top);
        metrics.title_bottom = 100.0;
        assert!(!derive_showcase_state(&metrics, Category::Passenger, &thresholds).show_header_at_top);
    }

    #[test]
    fn past_the_region_leaves_tab_alone() {
        // Region bottom has scrolled above the viewport's bottom edge
        let metrics = ScrollMetrics {
            title_bottom: -2000.0,
            region_top: -1700.0,
            region_bottom: -100.0,
            viewport_height: VIEWPORT,
        };
        let derived = derive_showcase_state(&metrics, Category::Commercial, &ScrollThresholds::default());
        assert_eq!(derived.active_tab, Category::Commercial);
        assert!(derived.show_header_at_top);
    }

    #[test]
    fn zero_height_viewport_reads_as_no_progress() {
        let metrics = ScrollMetrics {
            title_bottom: 0.0,
            region_top: -10.0,
            region_bottom: 10.0,
            viewport_height: 0.0,
        };
        assert_eq!(metrics.scroll_progress(), 0.0);
    }
}
