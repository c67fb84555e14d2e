use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlMediaElement;

/// Asks the element to play. Browsers may refuse (autoplay policy); that is logged and
/// reported through `on_rejected`, never surfaced to the user.
pub fn start_playback<F>(media: &HtmlMediaElement, label: &str, on_rejected: F)
where
    F: FnOnce() + 'static,
{
    match media.play() {
        Ok(promise) => {
            let label = label.to_string();
            spawn_local(async move {
                if let Err(reason) = JsFuture::from(promise).await {
                    warn!("Playback of {} did not start", label);
                    gloo_console::warn!("Autoplay failed:", reason);
                    on_rejected();
                }
            });
        }
        Err(reason) => {
            warn!("Playback of {} could not be requested", label);
            gloo_console::warn!("Autoplay failed:", reason);
            on_rejected();
        }
    }
}

/// Rewinds and plays from the start.
pub fn restart_playback<F>(media: &HtmlMediaElement, label: &str, on_rejected: F)
where
    F: FnOnce() + 'static,
{
    media.set_current_time(0.0);
    start_playback(media, label, on_rejected);
}
