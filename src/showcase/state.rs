use std::f64::consts::PI;
use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::catalog::{Category, ImageCatalog, DEFAULT_OPTION};
use super::scroll::{derive_showcase_state, ScrollMetrics, ScrollThresholds};

pub const PROGRESS_RING_RADIUS: f64 = 18.0;

/// How long a manual tab click is protected from scroll-driven recomputation.
///
/// Zero means the next scroll sample may immediately override the click.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TabOverridePolicy {
    pub suppress_scroll_ms: f64,
}

impl TabOverridePolicy {
    pub fn scroll_may_switch(&self, manual_at: Option<f64>, now_ms: f64) -> bool {
        match manual_at {
            Some(at) if self.suppress_scroll_ms > 0.0 => now_ms - at >= self.suppress_scroll_ms,
            _ => true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseConfig {
    pub thresholds: ScrollThresholds,
    pub images: ImageCatalog,
    pub tab_override: TabOverridePolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShowcaseAction {
    ScrollSampled { metrics: ScrollMetrics, now_ms: f64 },
    SelectTab { category: Category, now_ms: f64 },
    SelectOption(String),
    /// The play/pause control issued a command to the video element.
    PlaybackCommanded(PlaybackCommand),
    /// The browser refused to start playback.
    PlaybackRejected,
    TimeUpdate { current_time: f64, duration: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseState {
    pub active_tab: Category,
    pub selected_option: &'static str,
    pub is_video_playing: bool,
    /// Percentage in [0, 100].
    pub video_progress: f64,
    pub show_header_at_top: bool,
    manual_tab_at: Option<f64>,
    thresholds: ScrollThresholds,
    tab_override: TabOverridePolicy,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new(&ShowcaseConfig::default())
    }
}

impl ShowcaseState {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            active_tab: Category::Passenger,
            selected_option: DEFAULT_OPTION,
            is_video_playing: true,
            video_progress: 0.0,
            show_header_at_top: false,
            manual_tab_at: None,
            thresholds: config.thresholds,
            tab_override: config.tab_override,
        }
    }

    /// Command the play/pause control should send to the video element.
    pub fn toggle_command(&self) -> PlaybackCommand {
        if self.is_video_playing {
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        }
    }

    pub fn selected_name(&self) -> &'static str {
        self.active_tab
            .find_option(self.selected_option)
            .map(|option| option.name)
            .unwrap_or_default()
    }

    /// Key for the video element; changing it remounts the player.
    pub fn video_key(&self) -> String {
        format!("{}-{}", self.active_tab, self.selected_option)
    }

    fn switch_tab(&mut self, category: Category) {
        if self.active_tab == category {
            return;
        }
        debug!("Showcase tab {} -> {}", self.active_tab, category);
        self.active_tab = category;
        self.selected_option = DEFAULT_OPTION;
        self.video_progress = 0.0;
        // The remounted element autoplays
        self.is_video_playing = true;
    }
}

/// Converts a media time-update sample to a percentage. Ignores samples with no usable duration.
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    if !duration.is_finite() || duration <= 0.0 || !current_time.is_finite() {
        return None;
    }
    Some((current_time / duration * 100.0).clamp(0.0, 100.0))
}

/// `stroke-dashoffset` for the circular progress indicator.
pub fn progress_ring_offset(progress: f64) -> f64 {
    let circumference = 2.0 * PI * PROGRESS_RING_RADIUS;
    circumference * (1.0 - progress.clamp(0.0, 100.0) / 100.0)
}

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ShowcaseAction::ScrollSampled { metrics, now_ms } => {
                let derived = derive_showcase_state(&metrics, self.active_tab, &self.thresholds);
                next.show_header_at_top = derived.show_header_at_top;
                // Leaving the region upwards always resets; only the threshold switch is suppressible
                if metrics.region_top > 0.0
                    || self.tab_override.scroll_may_switch(self.manual_tab_at, now_ms)
                {
                    next.switch_tab(derived.active_tab);
                }
            }
            ShowcaseAction::SelectTab { category, now_ms } => {
                next.manual_tab_at = Some(now_ms);
                next.switch_tab(category);
            }
            ShowcaseAction::SelectOption(id) => {
                let Some(option) = self.active_tab.find_option(&id) else {
                    return self;
                };
                next.selected_option = option.id;
                next.is_video_playing = true;
                next.video_progress = 0.0;
            }
            ShowcaseAction::PlaybackCommanded(command) => {
                next.is_video_playing = command == PlaybackCommand::Play;
            }
            ShowcaseAction::PlaybackRejected => {
                next.is_video_playing = false;
            }
            ShowcaseAction::TimeUpdate { current_time, duration } => {
                let Some(progress) = progress_percent(current_time, duration) else {
                    return self;
                };
                next.video_progress = progress;
            }
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    fn pinned_at(progress: f64) -> ScrollMetrics {
        let top = -progress * VIEWPORT;
        ScrollMetrics {
            title_bottom: -VIEWPORT,
            region_top: top,
            region_bottom: top + 2.0 * VIEWPORT,
            viewport_height: VIEWPORT,
        }
    }

    fn above_region() -> ScrollMetrics {
        ScrollMetrics {
            title_bottom: 400.0,
            region_top: 400.0,
            region_bottom: 400.0 + 2.0 * VIEWPORT,
            viewport_height: VIEWPORT,
        }
    }

    fn scroll(state: Rc<ShowcaseState>, metrics: ScrollMetrics, now_ms: f64) -> Rc<ShowcaseState> {
        state.reduce(ShowcaseAction::ScrollSampled { metrics, now_ms })
    }

    #[test]
    fn starts_on_passenger_default_option() {
        let state = ShowcaseState::default();
        assert_eq!(state.active_tab, Category::Passenger);
        assert_eq!(state.selected_option, "complete-body");
        assert!(state.is_video_playing);
        assert_eq!(state.video_progress, 0.0);
        assert!(!state.show_header_at_top);
        assert_eq!(state.video_key(), "passenger-complete-body");
    }

    #[test]
    fn switching_tab_resets_option_and_progress() {
        let state = Rc::new(ShowcaseState::default());
        let state = state.reduce(ShowcaseAction::SelectOption("trunk".to_string()));
        let state = state.reduce(ShowcaseAction::TimeUpdate { current_time: 3.0, duration: 10.0 });
        assert_eq!(state.selected_option, "trunk");
        assert!((state.video_progress - 30.0).abs() < 1e-9);

        let state = state.reduce(ShowcaseAction::SelectTab { category: Category::Commercial, now_ms: 0.0 });
        assert_eq!(state.active_tab, Category::Commercial);
        assert_eq!(state.selected_option, "complete-body");
        assert_eq!(state.video_progress, 0.0);
        assert_eq!(state.selected_name(), "Complete body");
    }

    #[test]
    fn scroll_switch_also_resets_option() {
        let state = Rc::new(ShowcaseState::default());
        let state = state.reduce(ShowcaseAction::SelectOption("exterior".to_string()));
        let state = scroll(state, pinned_at(0.9), 10.0);
        assert_eq!(state.active_tab, Category::Commercial);
        assert_eq!(state.selected_option, "complete-body");
    }

    #[test]
    fn option_from_other_category_is_rejected() {
        let state = Rc::new(ShowcaseState::default());
        let after = state.clone().reduce(ShowcaseAction::SelectOption("engine".to_string()));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn selecting_option_restarts_playback() {
        let state = Rc::new(ShowcaseState::default());
        let state = state.reduce(ShowcaseAction::PlaybackCommanded(PlaybackCommand::Pause));
        let state = state.reduce(ShowcaseAction::TimeUpdate { current_time: 5.0, duration: 10.0 });
        let state = state.reduce(ShowcaseAction::SelectOption("cabin".to_string()));
        assert!(state.is_video_playing);
        assert_eq!(state.video_progress, 0.0);
        assert_eq!(state.video_key(), "passenger-cabin");
    }

    #[test]
    fn scroll_sequence_with_dead_zone() {
        let mut state = Rc::new(ShowcaseState::default());
        let mut tabs = Vec::new();
        for (i, progress) in [0.1, 0.5, 0.8].into_iter().enumerate() {
            state = scroll(state, pinned_at(progress), i as f64);
            tabs.push(state.active_tab);
        }
        assert_eq!(tabs, [Category::Passenger, Category::Passenger, Category::Commercial]);
        assert!(state.show_header_at_top);
    }

    #[test]
    fn scrolling_back_above_region_forces_passenger_and_hides_header() {
        let state = scroll(Rc::new(ShowcaseState::default()), pinned_at(0.9), 0.0);
        assert_eq!(state.active_tab, Category::Commercial);
        assert!(state.show_header_at_top);

        let state = scroll(state, above_region(), 1.0);
        assert_eq!(state.active_tab, Category::Passenger);
        assert!(!state.show_header_at_top);
    }

    #[test]
    fn manual_click_can_be_overridden_without_suppression() {
        let state = scroll(Rc::new(ShowcaseState::default()), pinned_at(0.1), 0.0);
        let state = state.reduce(ShowcaseAction::SelectTab { category: Category::Commercial, now_ms: 100.0 });
        assert_eq!(state.active_tab, Category::Commercial);
        let state = scroll(state, pinned_at(0.1), 101.0);
        assert_eq!(state.active_tab, Category::Passenger);
    }

    #[test]
    fn suppression_window_protects_manual_click() {
        let config = ShowcaseConfig {
            tab_override: TabOverridePolicy { suppress_scroll_ms: 500.0 },
            ..ShowcaseConfig::default()
        };
        let state = Rc::new(ShowcaseState::new(&config));
        let state = state.reduce(ShowcaseAction::SelectTab { category: Category::Commercial, now_ms: 1_000.0 });

        let state = scroll(state, pinned_at(0.1), 1_200.0);
        assert_eq!(state.active_tab, Category::Commercial);
        assert!(state.show_header_at_top);

        let state = scroll(state, pinned_at(0.1), 1_500.0);
        assert_eq!(state.active_tab, Category::Passenger);
    }

    #[test]
    fn leaving_region_upwards_resets_even_inside_suppression_window() {
        let config = ShowcaseConfig {
            tab_override: TabOverridePolicy { suppress_scroll_ms: 500.0 },
            ..ShowcaseConfig::default()
        };
        let state = Rc::new(ShowcaseState::new(&config));
        let state = state.reduce(ShowcaseAction::SelectTab { category: Category::Commercial, now_ms: 1_000.0 });
        assert_eq!(state.active_tab, Category::Commercial);

        let state = scroll(state, above_region(), 1_100.0);
        assert_eq!(state.active_tab, Category::Passenger);
        assert!(!state.show_header_at_top);
    }

    #[test]
    fn toggle_mirrors_issued_command() {
        let state = Rc::new(ShowcaseState::default());
        assert_eq!(state.toggle_command(), PlaybackCommand::Pause);
        let command = state.toggle_command();
        let state = state.reduce(ShowcaseAction::PlaybackCommanded(command));
        assert!(!state.is_video_playing);
        assert_eq!(state.toggle_command(), PlaybackCommand::Play);
        let command = state.toggle_command();
        let state = state.reduce(ShowcaseAction::PlaybackCommanded(command));
        assert!(state.is_video_playing);
    }

    #[test]
    fn rejected_playback_shows_paused() {
        let state = Rc::new(ShowcaseState::default());
        let state = state.reduce(ShowcaseAction::PlaybackRejected);
        assert!(!state.is_video_playing);
    }

    #[test]
    fn progress_ignores_unknown_duration_and_clamps() {
        assert_eq!(progress_percent(1.0, 0.0), None);
        assert_eq!(progress_percent(1.0, f64::NAN), None);
        assert_eq!(progress_percent(1.0, f64::INFINITY), None);
        assert_eq!(progress_percent(12.0, 10.0), Some(100.0));
        assert_eq!(progress_percent(2.5, 10.0), Some(25.0));

        let state = Rc::new(ShowcaseState::default());
        let after = state.clone().reduce(ShowcaseAction::TimeUpdate { current_time: 1.0, duration: f64::NAN });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn ring_offset_spans_full_circumference() {
        let circumference = 2.0 * PI * 18.0;
        assert!((progress_ring_offset(0.0) - circumference).abs() < 1e-9);
        assert!(progress_ring_offset(100.0).abs() < 1e-9);
        assert!((progress_ring_offset(50.0) - circumference / 2.0).abs() < 1e-9);
    }
}
