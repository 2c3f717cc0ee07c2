use yew::prelude::*;

use crate::components::layout::{Btn, ScriptLabel};
use crate::navigation::{use_navigator, Page};
use crate::theme::Backdrop;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigate = use_navigator();
    let go_home = Callback::from(move |_: MouseEvent| navigate.emit(Page::Home));

    html! {
        <section class={classes!("page-hero", Backdrop::GridWhite.class())} style="min-height: 70vh;">
            <ScriptLabel size={22} centered={true}>{"well, this is awkward"}</ScriptLabel>
            <h1>{"this page wandered off 🏖️"}</h1>
            <p class="body-text">{"it's probably at the beach. let's get you somewhere useful."}</p>
            <Btn onclick={go_home}>{"take me home →"}</Btn>
        </section>
    }
}
