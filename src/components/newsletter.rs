use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::layout::{Btn, ButtonVariant};
use crate::forms::{submit_newsletter, NewsletterAction, NewsletterState, SubmissionStatus};
use crate::intake::use_intake;

pub const CSS: &str = r#"
    .newsletter { display: flex; gap: 12px; flex-wrap: wrap; }
    .newsletter.stacked { flex-direction: column; max-width: 400px; }
    .newsletter.compact { flex-direction: row; max-width: 500px; }
    .newsletter input {
        font-family: 'Rubik', sans-serif;
        font-size: 15px;
        border: 1.5px solid var(--sand);
        border-radius: 50px;
        padding: 13px 22px;
        outline: none;
        background: var(--white);
        width: 100%;
    }
    .newsletter.compact input { flex: 1; min-width: 200px; width: auto; }
    .newsletter.compact .btn { white-space: nowrap; }
    .newsletter input[aria-invalid="true"] { border-color: var(--warm-tan); }
    .form-error { font-size: 13px; color: #B0533C; width: 100%; }
    .newsletter-done { text-align: center; padding: 16px; }
    .newsletter-done .emoji { font-size: 28px; }
    .newsletter-done p { font-size: 15px; margin-top: 8px; }
"#;

#[derive(Properties, PartialEq)]
pub struct NewsletterFormProps {
    /// Single-row variant without the name field.
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(NewsletterForm)]
pub fn newsletter_form(props: &NewsletterFormProps) -> Html {
    let state = use_reducer(NewsletterState::default);
    let intake = use_intake();

    let on_name = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(NewsletterAction::SetName(input.value()));
        })
    };

    let on_email = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(NewsletterAction::SetEmail(input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let state = state.clone();
            let intake = intake.clone();
            spawn_local(async move {
                let snapshot = (*state).clone();
                submit_newsletter(&snapshot, &*intake, |action| state.dispatch(action)).await;
            });
        })
    };

    if state.status == SubmissionStatus::Done {
        return html! {
            <div class="newsletter-done">
                <span class="emoji">{"🎉"}</span>
                <p>{"you're in! check your inbox."}</p>
            </div>
        };
    }

    let sending = state.status == SubmissionStatus::Sending;
    let invalid = state.error.is_some();
    let layout = if props.compact { "compact" } else { "stacked" };

    html! {
        <div class={classes!("newsletter", layout)}>
            if !props.compact {
                <input
                    placeholder="first name"
                    value={state.name.clone()}
                    oninput={on_name}
                    disabled={sending}
                />
            }
            <input
                type="email"
                placeholder="email address"
                value={state.email.clone()}
                oninput={on_email}
                disabled={sending}
                aria-invalid={if invalid { "true" } else { "false" }}
            />
            <Btn variant={ButtonVariant::Primary} onclick={on_submit} disabled={sending}>
                {
                    match &state.status {
                        SubmissionStatus::Sending => "signing you up...",
                        SubmissionStatus::Failed(_) => "try again →",
                        _ => "sign me up →",
                    }
                }
            </Btn>
            if let Some(error) = &state.error {
                <p class="form-error" role="alert">{error.to_string()}</p>
            }
            if let SubmissionStatus::Failed(message) = &state.status {
                <p class="form-error" role="alert">{message.clone()}</p>
            }
        </div>
    }
}
