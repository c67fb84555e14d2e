use gloo_timers::callback::Timeout;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::config;
use crate::media::start_playback;

/// What the hero renders. The video only exists once the component has mounted on the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroPhase {
    Placeholder,
    Video,
}

impl HeroPhase {
    pub fn for_ready(ready: bool) -> Self {
        if ready {
            HeroPhase::Video
        } else {
            HeroPhase::Placeholder
        }
    }
}

fn headline() -> Html {
    html! {
        <div class="hero-copy">
            <p class="hero-kicker">{"Driven by performance"}</p>
            <h1>
                {"Soft trims and "}
                <span class="accent">{"NVH solutions"}</span>
            </h1>
            <p class="hero-tail">{"for seamless rides"}</p>
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let ready = use_state(|| false);
    let video_ref = use_node_ref();

    {
        let ready = ready.clone();
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                ready.set(true);
                let timeout = Timeout::new(config::HERO_AUTOPLAY_DELAY_MS, move || {
                    if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                        start_playback(&video, config::HERO_VIDEO, || ());
                    }
                });
                // Dropping the handle clears the timer if we unmount first
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, #1e3a8a, #111827);
                    }
                    .hero-video {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        z-index: 1;
                        filter: brightness(0.4) contrast(1.1);
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .hero-copy { text-align: center; color: #fff; padding: 0 1rem; max-width: 56rem; }
                    .hero-kicker { font-size: 1.5rem; font-weight: 300; letter-spacing: 0.025em; opacity: 0.9; margin-bottom: 1rem; }
                    .hero-copy h1 { font-size: 3.75rem; font-weight: 300; line-height: 1.2; margin: 0 0 0.5rem; }
                    .hero-tail { font-size: 3rem; font-weight: 300; opacity: 0.9; margin: 0; }
                    .accent { color: #22d3ee; font-weight: 500; }
                "#}
            </style>
            {
                match HeroPhase::for_ready(*ready) {
                    HeroPhase::Placeholder => html! {
                        <div class="hero-backdrop"></div>
                    },
                    HeroPhase::Video => html! {
                        <video
                            ref={video_ref}
                            class="hero-video"
                            autoplay={true}
                            muted={true}
                            loop={true}
                            playsinline={true}
                        >
                            <source src={config::HERO_VIDEO} type="video/mp4" />
                        </video>
                    },
                }
            }
            <div class="hero-overlay">
                { headline() }
            </div>
        </section>
    }
}
