use chrono::Datelike;
use yew::prelude::*;

use crate::config;

pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "APPLICATIONS",
        links: &[
            FooterLink { name: "Apparel", href: "#" },
            FooterLink { name: "Automotive", href: "#" },
            FooterLink { name: "Filtration", href: "#" },
            FooterLink { name: "Customised Nonwoven", href: "#" },
        ],
    },
    FooterSection {
        title: "COMPANY",
        links: &[
            FooterLink { name: "Who We Are", href: "#" },
            FooterLink { name: "Global Competency", href: "#" },
            FooterLink { name: "Innovation", href: "#" },
            FooterLink { name: "ESG Impact", href: "#" },
        ],
    },
    FooterSection {
        title: "MORE",
        links: &[
            FooterLink { name: "Contact Us", href: "#contact" },
            FooterLink { name: "Careers", href: "#" },
        ],
    },
    FooterSection {
        title: "FOLLOW US",
        links: &[FooterLink { name: "LinkedIn", href: config::LINKEDIN_URL }],
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("©{}. All Rights Reserved.", year)
}

fn footer_link(link: &FooterLink) -> Html {
    if link.is_external() {
        html! {
            <a href={link.href} target="_blank" rel="noopener noreferrer" class="footer-link external">
                {link.name}
            </a>
        }
    } else {
        html! { <a href={link.href} class="footer-link">{link.name}</a> }
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { position: relative; min-height: 600px; }
                    .footer-background {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, #eff6ff, #dbeafe);
                        background-size: cover;
                        background-position: center;
                        background-repeat: no-repeat;
                    }
                    .footer-veil { position: absolute; inset: 0; background: rgba(255, 255, 255, 0.4); }
                    .footer-content { position: relative; z-index: 10; min-height: 600px; display: flex; flex-direction: column; justify-content: space-between; }
                    .footer-main { max-width: 72rem; width: 100%; margin: 0 auto; padding: 5rem 2rem; }
                    .footer-logo { width: 9rem; height: 6rem; object-fit: contain; }
                    .footer-columns { display: grid; grid-template-columns: repeat(4, 1fr); gap: 4rem; }
                    .footer-columns h3 { font-size: 1rem; font-weight: 700; color: #111827; letter-spacing: 0.025em; margin-bottom: 1.5rem; }
                    .footer-columns ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; }
                    .footer-link { color: #374151; font-weight: 500; text-decoration: none; }
                    .footer-link:hover { color: #111827; }
                    .footer-link.external:hover { text-decoration: underline; }
                    .footer-bottom { border-top: 1px solid rgba(156, 163, 175, 0.3); }
                    .footer-bottom-inner { max-width: 72rem; margin: 0 auto; padding: 2rem; display: flex; justify-content: space-between; font-weight: 600; color: #374151; }
                    @media (max-width: 768px) {
                        .footer-columns { grid-template-columns: 1fr; text-align: center; }
                        .footer-bottom-inner { flex-direction: column; align-items: center; gap: 1rem; }
                    }
                "#}
            </style>
            <div class="footer-background" style={format!("background-image: url({});", config::FOOTER_BACKGROUND)}></div>
            <div class="footer-veil"></div>
            <div class="footer-content">
                <div class="footer-main">
                    <img class="footer-logo" src={config::LOGO_IMAGE} alt="Supreme Group" />
                    <div class="footer-columns">
                        {
                            for FOOTER_SECTIONS.iter().map(|section| html! {
                                <div key={section.title}>
                                    <h3>{section.title}</h3>
                                    <ul>
                                        {
                                            for section.links.iter().map(|link| html! {
                                                <li key={link.name}>{ footer_link(link) }</li>
                                            })
                                        }
                                    </ul>
                                </div>
                            })
                        }
                    </div>
                </div>
                <div class="footer-bottom">
                    <div class="footer-bottom-inner">
                        <span>{copyright_line(year)}</span>
                        <span>{format!("Supreme House, {}", config::COMPANY_ADDRESS)}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
