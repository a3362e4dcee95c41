use web_sys::window;
use yew::prelude::*;

use crate::background::NeuralBackground;
use crate::hero::Hero;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <NeuralBackground />
            <Hero />
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
