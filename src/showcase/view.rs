use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, HtmlImageElement, HtmlMediaElement};
use yew::prelude::*;

use super::catalog::{video_source, Category};
use super::scroll::ScrollMetrics;
use super::state::{
    progress_ring_offset, PlaybackCommand, ShowcaseAction, ShowcaseConfig, ShowcaseState,
    PROGRESS_RING_RADIUS,
};
use crate::config;
use crate::media::{restart_playback, start_playback};

fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

fn sample_metrics(title: &NodeRef, region: &NodeRef) -> Option<ScrollMetrics> {
    let title = title.cast::<Element>()?.get_bounding_client_rect();
    let region = region.cast::<Element>()?.get_bounding_client_rect();
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    Some(ScrollMetrics {
        title_bottom: title.bottom(),
        region_top: region.top(),
        region_bottom: region.bottom(),
        viewport_height,
    })
}

#[derive(Properties, PartialEq)]
pub struct VehicleShowcaseProps {
    #[prop_or_default]
    pub config: ShowcaseConfig,
}

#[function_component(VehicleShowcase)]
pub fn vehicle_showcase(props: &VehicleShowcaseProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_reducer(move || ShowcaseState::new(&config))
    };
    let title_ref = use_node_ref();
    let region_ref = use_node_ref();
    let video_ref = use_node_ref();

    // Scroll sampling: passive listener, trailing-edge throttle, one eager sample on mount
    {
        let dispatcher = state.dispatcher();
        let title_ref = title_ref.clone();
        let region_ref = region_ref.clone();
        use_effect_with_deps(
            move |_| {
                let sample: Rc<dyn Fn()> = Rc::new(move || {
                    if let Some(metrics) = sample_metrics(&title_ref, &region_ref) {
                        dispatcher.dispatch(ShowcaseAction::ScrollSampled {
                            metrics,
                            now_ms: now_ms(),
                        });
                    }
                });
                let pending = Rc::new(Cell::new(false));
                let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                let on_scroll = {
                    let sample = sample.clone();
                    let timer = timer.clone();
                    Closure::wrap(Box::new(move || {
                        if pending.replace(true) {
                            return;
                        }
                        let sample = sample.clone();
                        let pending = pending.clone();
                        *timer.borrow_mut() = Some(Timeout::new(config::SCROLL_THROTTLE_MS, move || {
                            pending.set(false);
                            sample();
                        }));
                    }) as Box<dyn FnMut()>)
                };

                let window = web_sys::window();
                if let Some(window) = &window {
                    let mut options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        error!("Failed to register scroll listener: {:?}", e);
                    }
                }

                // Initial check
                sample();

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // A new key means a freshly mounted video element; start it from the top
    {
        let video_ref = video_ref.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |key: &String| {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    restart_playback(&video, key, move || {
                        dispatcher.dispatch(ShowcaseAction::PlaybackRejected)
                    });
                }
                || ()
            },
            state.video_key(),
        );
    }

    let select_tab = {
        let state = state.clone();
        Callback::from(move |category: Category| {
            state.dispatch(ShowcaseAction::SelectTab {
                category,
                now_ms: now_ms(),
            });
        })
    };

    let select_option = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |id: &'static str| {
            // Same option keeps its key, so rewind the current element by hand
            if id == state.selected_option {
                if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                    let dispatcher = state.dispatcher();
                    restart_playback(&video, &state.video_key(), move || {
                        dispatcher.dispatch(ShowcaseAction::PlaybackRejected)
                    });
                }
            }
            state.dispatch(ShowcaseAction::SelectOption(id.to_string()));
        })
    };

    let toggle_playback = {
        let state = state.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            let command = state.toggle_command();
            match command {
                PlaybackCommand::Pause => {
                    if let Err(e) = video.pause() {
                        warn!("Pausing showcase video failed: {:?}", e);
                    }
                }
                PlaybackCommand::Play => {
                    let dispatcher = state.dispatcher();
                    start_playback(&video, &state.video_key(), move || {
                        dispatcher.dispatch(ShowcaseAction::PlaybackRejected)
                    });
                }
            }
            state.dispatch(ShowcaseAction::PlaybackCommanded(command));
        })
    };

    let ontimeupdate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(video) = e.target_dyn_into::<HtmlMediaElement>() {
                dispatcher.dispatch(ShowcaseAction::TimeUpdate {
                    current_time: video.current_time(),
                    duration: video.duration(),
                });
            }
        })
    };

    let source = video_source(state.active_tab, state.selected_option);

    let on_video_error = {
        let source = source.clone();
        Callback::from(move |_: Event| error!("Video failed to load: {}", source))
    };

    let on_video_loaded = {
        let source = source.clone();
        Callback::from(move |_: Event| debug!("Video loaded: {}", source))
    };

    let on_image_error = {
        let images = props.config.images.clone();
        Callback::from(move |e: Event| {
            if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
                if let Some(substitute) = images.substitute_for(&img.src()) {
                    img.set_src(substitute);
                }
            }
        })
    };

    let tab = |category: Category| {
        let onclick = select_tab.reform(move |_: MouseEvent| category);
        let active = state.active_tab == category;
        html! {
            <div class={classes!("showcase-tab", active.then(|| "active"))} onclick={onclick}>
                <div class="showcase-tab-body">
                    <h3>{category.title()}</h3>
                    <p>{category.tagline()}</p>
                </div>
            </div>
        }
    };

    let circumference = 2.0 * PI * PROGRESS_RING_RADIUS;

    html! {
        <>
            <style>
                {r#"
                    .showcase-title {
                        position: relative;
                        height: 100vh;
                        background: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .showcase-title h2 { font-size: 4rem; font-weight: 300; line-height: 1.2; max-width: 56rem; }
                    .accent { color: #22d3ee; font-weight: 500; }
                    .showcase-region { position: relative; height: 200vh; background: #000; }
                    .showcase-pinned-header {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 20;
                        padding: 1.5rem 1rem;
                        text-align: center;
                        background: rgba(0, 0, 0, 0.95);
                        border-bottom: 1px solid rgba(31, 41, 55, 0.3);
                        opacity: 0;
                        transform: translateY(-100%);
                        transition: all 0.5s;
                    }
                    .showcase-pinned-header.visible { opacity: 1; transform: translateY(0); }
                    .showcase-pinned-header h2 { color: #fff; font-size: 2rem; font-weight: 300; margin: 0; }
                    .showcase-sticky { position: sticky; top: 0; height: 100vh; display: flex; background: #000; }
                    .showcase-tabs { width: 35%; display: flex; flex-direction: column; justify-content: center; padding: 0 3rem; }
                    .showcase-tab { cursor: pointer; opacity: 0.6; margin-bottom: 4rem; transition: all 0.5s; }
                    .showcase-tab:hover { opacity: 0.8; }
                    .showcase-tab.active { opacity: 1; transform: scale(1.05); }
                    .showcase-tab-body { border-left: 4px solid #fff; padding-left: 2rem; }
                    .showcase-tab h3 { font-size: 2.5rem; font-weight: 300; color: #6b7280; margin: 0 0 1rem; }
                    .showcase-tab p { color: #4b5563; line-height: 1.6; }
                    .showcase-tab.active h3 { color: #fff; }
                    .showcase-tab.active p { color: #d1d5db; }
                    .showcase-stage { width: 65%; display: flex; flex-direction: column; justify-content: center; padding: 2rem 0; transition: padding 0.7s; }
                    .showcase-stage.under-header { padding-top: 6rem; }
                    .showcase-video { width: 100%; max-height: 60vh; object-fit: contain; background: transparent; outline: none; border: none; }
                    .showcase-controls { display: flex; align-items: center; justify-content: center; gap: 1.5rem; margin-top: 1.5rem; }
                    .showcase-options { display: flex; gap: 0.75rem; }
                    .showcase-option { position: relative; display: flex; flex-direction: column; align-items: center; background: none; border: 0; color: #9ca3af; cursor: pointer; transition: all 0.3s; }
                    .showcase-option.selected { color: #fff; transform: scale(1.1); }
                    .showcase-thumb { width: 4rem; height: 3rem; border: 2px solid #4b5563; border-radius: 8px; overflow: hidden; margin-bottom: 0.5rem; }
                    .showcase-option.selected .showcase-thumb { border-color: #22d3ee; background: rgba(34, 211, 238, 0.1); }
                    .showcase-thumb img { width: 100%; height: 100%; object-fit: cover; }
                    .showcase-dot { position: absolute; bottom: -0.25rem; width: 6px; height: 6px; border-radius: 50%; background: #22d3ee; }
                    .showcase-play { position: relative; width: 3.5rem; height: 3.5rem; }
                    .showcase-play svg { position: absolute; inset: 0; width: 100%; height: 100%; transform: rotate(-90deg); }
                    .ring-track { color: #374151; }
                    .ring-progress { color: #22d3ee; stroke-linecap: round; transition: stroke-dashoffset 0.3s; }
                    .showcase-play button { position: relative; width: 100%; height: 100%; border-radius: 50%; border: 1px solid #4b5563; background: rgba(0, 0, 0, 0.6); color: #fff; cursor: pointer; }
                    .showcase-caption { text-align: center; margin-top: 1rem; font-size: 0.875rem; color: #9ca3af; }
                "#}
            </style>

            <section ref={title_ref} class="showcase-title">
                <h2>
                    {"Evolving the drive with "}
                    <span class="accent">{"360-degree"}</span>
                    <br />
                    {"comprehensive solutions"}
                </h2>
            </section>

            <div ref={region_ref} class="showcase-region">
                <div class={classes!("showcase-pinned-header", state.show_header_at_top.then(|| "visible"))}>
                    <h2>
                        {"Evolving the drive with "}
                        <span class="accent">{"360-degree"}</span>
                        {" comprehensive solutions"}
                    </h2>
                </div>

                <div class="showcase-sticky">
                    <div class="showcase-tabs">
                        { tab(Category::Passenger) }
                        { tab(Category::Commercial) }
                    </div>

                    <div class={classes!("showcase-stage", state.show_header_at_top.then(|| "under-header"))}>
                        <video
                            key={state.video_key()}
                            ref={video_ref}
                            class="showcase-video"
                            autoplay={true}
                            muted={true}
                            loop={true}
                            playsinline={true}
                            ontimeupdate={ontimeupdate}
                            onerror={on_video_error}
                            onloadeddata={on_video_loaded}
                        >
                            <source src={source} type="video/mp4" />
                        </video>

                        <div class="showcase-controls">
                            <div class="showcase-options">
                                {
                                    for state.active_tab.options().iter().map(|option| {
                                        let id = option.id;
                                        let selected = id == state.selected_option;
                                        let onclick = select_option.reform(move |_: MouseEvent| id);
                                        html! {
                                            <button
                                                key={format!("{}-{}", state.active_tab, id)}
                                                class={classes!("showcase-option", selected.then(|| "selected"))}
                                                title={option.description}
                                                onclick={onclick}
                                            >
                                                <div class="showcase-thumb">
                                                    <img
                                                        src={props.config.images.image_source(id)}
                                                        alt={option.name}
                                                        onerror={on_image_error.clone()}
                                                    />
                                                </div>
                                                <span>{option.name}</span>
                                                if selected {
                                                    <div class="showcase-dot"></div>
                                                }
                                            </button>
                                        }
                                    })
                                }
                            </div>

                            <div class="showcase-play">
                                <svg viewBox="0 0 48 48">
                                    <circle class="ring-track" cx="24" cy="24" r={PROGRESS_RING_RADIUS.to_string()}
                                        stroke="currentColor" stroke-width="2" fill="none" />
                                    <circle class="ring-progress" cx="24" cy="24" r={PROGRESS_RING_RADIUS.to_string()}
                                        stroke="currentColor" stroke-width="2" fill="none"
                                        stroke-dasharray={circumference.to_string()}
                                        stroke-dashoffset={progress_ring_offset(state.video_progress).to_string()} />
                                </svg>
                                <button onclick={toggle_playback} aria-label={if state.is_video_playing { "Pause" } else { "Play" }}>
                                    { if state.is_video_playing { "❚❚" } else { "▶" } }
                                </button>
                            </div>
                        </div>

                        <p class="showcase-caption">
                            {format!("{} Vehicle - {}", state.active_tab.asset_prefix(), state.selected_name())}
                        </p>
                    </div>
                </div>
            </div>
        </>
    }
}
