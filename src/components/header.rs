use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Primary navigation, shared by the desktop bar and the mobile drawer.
pub const NAV_LINKS: [&str; 5] = ["Home", "About Us", "Services", "Projects", "Careers"];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header { background: #fff; border-bottom: 1px solid #f3f4f6; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
                    .header-bar {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-logo img { height: 40px; width: auto; object-fit: contain; }
                    .header-nav { display: flex; gap: 2rem; }
                    .header-nav a, .header-drawer a { color: #374151; font-weight: 500; text-decoration: none; }
                    .header-nav a:hover, .header-drawer a:hover { color: #2563eb; }
                    .header-actions { display: flex; align-items: center; gap: 1rem; }
                    .header-lang { font-size: 0.875rem; font-weight: 500; color: #374151; }
                    .header-contact {
                        background: #22d3ee;
                        color: #fff;
                        border: 0;
                        border-radius: 9999px;
                        padding: 0.5rem 1.5rem;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .burger-menu { display: none; background: none; border: 0; font-size: 1.5rem; color: #374151; cursor: pointer; }
                    .header-drawer { border-top: 1px solid #f3f4f6; padding: 1rem; display: flex; flex-direction: column; gap: 1rem; }
                    .header-drawer-footer { display: flex; justify-content: space-between; border-top: 1px solid #f3f4f6; padding-top: 1rem; font-size: 0.875rem; color: #4b5563; }
                    @media (max-width: 1024px) {
                        .header-nav { display: none; }
                        .burger-menu { display: block; }
                    }
                "#}
            </style>
            <div class="header-bar">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src={config::LOGO_IMAGE} alt="Supreme Group Logo" width="120" height="40" />
                </Link<Route>>

                <nav class="header-nav">
                    {
                        for NAV_LINKS.iter().map(|label| html! {
                            <Link<Route> to={Route::Home}>{*label}</Link<Route>>
                        })
                    }
                </nav>

                <div class="header-actions">
                    <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        {"in"}
                    </a>
                    <span class="header-lang">{"ENG"}</span>
                    <a href="#contact" class="header-contact">{"Contact Us"}</a>
                    <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            if *menu_open {
                <nav class="header-drawer">
                    {
                        for NAV_LINKS.iter().map(|label| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Home}>{*label}</Link<Route>>
                            </div>
                        })
                    }
                    <div class="header-drawer-footer">
                        <span>{"Language: ENG"}</span>
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                </nav>
            }
        </header>
    }
}
