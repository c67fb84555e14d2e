use yew::prelude::*;

use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <>
            <Header />
            <main class="page-main">
                { for props.children.iter() }
            </main>
        </>
    }
}
