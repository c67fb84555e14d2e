use yew::prelude::*;

use crate::components::{
    footer::Footer,
    hero::HeroSection,
    layout::Layout,
};
use crate::contact::form::ContactForm;
use crate::showcase::view::VehicleShowcase;

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top so the showcase scroll state begins from a known position
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <Layout>
            <HeroSection />
            <VehicleShowcase />
            <ContactForm />
            <Footer />
        </Layout>
    }
}
