use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::layout::{Btn, PullQuote, ScriptLabel, SectionWrap};
use crate::components::newsletter::NewsletterForm;
use crate::forms::{
    submit_contact, ContactAction, ContactField, ContactState, SubmissionStatus, INTEREST_OPTIONS,
    SOURCE_OPTIONS,
};
use crate::intake::use_intake;
use crate::theme::Backdrop;

pub const CSS: &str = r#"
    .sent-view {
        min-height: 80vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 120px 20px;
    }
    .sent-view .sent-inner { text-align: center; max-width: 440px; }
    .sent-view .emoji { font-size: 48px; }
    .sent-view h2 { font-size: 28px; margin: 16px 0 8px; }

    .contact-card {
        background: var(--white);
        border-radius: 24px;
        padding: clamp(24px, 4vw, 44px);
        border: 1px solid var(--sand);
    }
    .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px 24px; }
    .contact-grid .wide { grid-column: 1 / -1; }
    .contact-grid label {
        font-weight: 600;
        font-size: 14px;
        color: var(--charcoal);
        display: block;
        margin-bottom: 6px;
    }
    .contact-grid input, .contact-grid select, .contact-grid textarea {
        font-family: 'Rubik', sans-serif;
        font-size: 15px;
        border: 1.5px solid var(--sand);
        border-radius: 12px;
        padding: 13px 18px;
        outline: none;
        background: var(--white);
        width: 100%;
    }
    .contact-grid textarea { resize: vertical; line-height: 1.6; }
    .contact-grid .actions { display: flex; flex-direction: column; gap: 10px; align-items: flex-start; }

    .aside-card { margin-top: 28px; background: var(--white); border-radius: 16px; padding: 22px 24px; border: 1px solid var(--sand); }
    .aside-card h3 { font-size: 15px; margin-bottom: 6px; }
    .aside-card p { font-size: 14px; }
    .while-here { margin-top: 36px; text-align: center; }
    .while-here p { font-size: 14px; margin-bottom: 16px; }
    .while-here .newsletter { margin: 0 auto; }

    @media (max-width: 640px) {
        .contact-grid { grid-template-columns: 1fr; }
    }
"#;

fn set_field(state: &UseReducerHandle<ContactState>, field: ContactField, value: String) {
    state.dispatch(ContactAction::Set(field, value));
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer(ContactState::default);
    let intake = use_intake();

    let on_input = |field: ContactField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field(&state, field, input.value());
        })
    };

    let on_select = |field: ContactField| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field(&state, field, select.value());
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            set_field(&state, ContactField::Message, area.value());
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let state = state.clone();
            let intake = intake.clone();
            spawn_local(async move {
                let snapshot = (*state).clone();
                submit_contact(&snapshot, &*intake, |action| state.dispatch(action)).await;
            });
        })
    };

    if state.status == SubmissionStatus::Done {
        return html! {
            <section class={classes!("sent-view", Backdrop::GridWhite.class())}>
                <div class="sent-inner">
                    <span class="emoji">{"🎉"}</span>
                    <h2>{"sent!"}</h2>
                    <p class="body-text">
                        {"i'll get back to you within 48 hours (business days). if you don't hear from me, check your spam—sometimes my emails get lost in the sauce."}
                    </p>
                </div>
            </section>
        };
    }

    let sending = state.status == SubmissionStatus::Sending;
    let options = |choices: &[&'static str], current: &str| {
        html! {
            <>
                <option value="" selected={current.is_empty()}>{"select one..."}</option>
                { for choices.iter().map(|&choice| html! {
                    <option key={choice} value={choice} selected={current == choice}>{choice}</option>
                }) }
            </>
        }
    };

    html! {
        <>
            <section class={classes!("page-hero", Backdrop::GridWhite.class())}>
                <h1>{"let's chat 💬"}</h1>
                <p class="hero-script">{"not sure where to start? tell me what's going on and we'll figure it out together"}</p>
            </section>

            <SectionWrap backdrop={Backdrop::GridSand} py={64}>
                <div class="narrow">
                    <div class="contact-card">
                        <div class="contact-grid">
                            <div class="wide">
                                <label for="contact-interest">{"what are you interested in?"}</label>
                                <select id="contact-interest" onchange={on_select(ContactField::Interest)} disabled={sending}>
                                    { options(&INTEREST_OPTIONS[..], &state.interest) }
                                </select>
                            </div>
                            <div>
                                <label for="contact-name">{"your name"}</label>
                                <input
                                    id="contact-name"
                                    value={state.name.clone()}
                                    oninput={on_input(ContactField::Name)}
                                    disabled={sending}
                                />
                            </div>
                            <div>
                                <label for="contact-email">{"email"}</label>
                                <input
                                    id="contact-email"
                                    type="email"
                                    value={state.email.clone()}
                                    oninput={on_input(ContactField::Email)}
                                    disabled={sending}
                                />
                            </div>
                            <div class="wide">
                                <label for="contact-message">{"what's going on?"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="5"
                                    value={state.message.clone()}
                                    oninput={on_message}
                                    disabled={sending}
                                    placeholder="\"my client onboarding is chaos\" or \"our team engagement scores are tanking\""
                                />
                            </div>
                            <div>
                                <label for="contact-source">{"how'd you find me?"}</label>
                                <select id="contact-source" onchange={on_select(ContactField::Source)} disabled={sending}>
                                    { options(&SOURCE_OPTIONS[..], &state.source) }
                                </select>
                            </div>
                            <div>
                                <label for="contact-extra">{"anything else?"}</label>
                                <input
                                    id="contact-extra"
                                    value={state.extra.clone()}
                                    oninput={on_input(ContactField::Extra)}
                                    disabled={sending}
                                />
                            </div>
                            <div class="wide actions">
                                <Btn onclick={on_submit} disabled={sending}>
                                    {
                                        match &state.status {
                                            SubmissionStatus::Sending => "sending...",
                                            SubmissionStatus::Failed(_) => "try again →",
                                            _ => "send it →",
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
                        </div>
                    </div>

                    <div class="aside-card">
                        <h3>{"prefer email?"}</h3>
                        <p>
                            {"for brand partnerships, speaking inquiries, or collabs: "}
                            <strong>{"sam@bysamanthabrown.com"}</strong>
                        </p>
                    </div>

                    <div class="while-here">
                        <ScriptLabel centered={true}>{"while you're here"}</ScriptLabel>
                        <p>{"join the cabana club for bi-weekly insights on life-first business building."}</p>
                        <NewsletterForm compact={true} />
                    </div>
                </div>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Charcoal} py={48}>
                <PullQuote quote="Start before you're ready." author={Some(AttrValue::from("steven pressfield"))} />
            </SectionWrap>
        </>
    }
}
