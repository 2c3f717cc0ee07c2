use yew::prelude::*;

use crate::assets::asset_url;
use crate::components::fade_in::FadeIn;
use crate::theme::Backdrop;

pub const CSS: &str = r#"
    .section-wrap { padding: var(--py, 80px) clamp(20px, 5vw, 56px); }
    .section-inner { max-width: 1140px; margin: 0 auto; }

    .script-label {
        font-family: 'Caveat', cursive;
        font-weight: 600;
        display: block;
        margin-bottom: 8px;
    }

    .btn {
        font-family: 'Rubik', sans-serif;
        font-weight: 600;
        font-size: 14px;
        border-radius: 50px;
        padding: 14px 34px;
        cursor: pointer;
        transition: all 0.3s ease;
        display: inline-flex;
        align-items: center;
        gap: 8px;
        letter-spacing: 0.2px;
    }
    .btn:hover:not(:disabled) { transform: translateY(-2px); box-shadow: 0 4px 12px rgba(0,0,0,0.1); }
    .btn:disabled { cursor: wait; opacity: 0.6; }
    .btn.small { padding: 10px 24px; font-size: 13px; }
    .btn-primary { background: var(--charcoal); color: var(--cream); border: 2px solid var(--charcoal); }
    .btn-outline { background: transparent; color: var(--charcoal); border: 2px solid var(--charcoal); }
    .btn-ocean { background: var(--ocean-blue); color: var(--white); border: 2px solid var(--ocean-blue); }
    .btn-yellow { background: var(--yellow); color: var(--charcoal); border: 2px solid var(--charcoal); }

    .photo-block {
        width: 100%;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 8px;
        overflow: hidden;
    }
    .photo-block .emoji { font-size: 48px; }
    .photo-block img { width: 100%; height: 100%; object-fit: cover; }
    .photo-block .photo-label { font-family: 'Caveat', cursive; font-size: 16px; color: var(--warm-tan); }

    .process-step {
        display: flex;
        gap: 18px;
        align-items: flex-start;
        padding: 22px 0;
        border-bottom: 1px solid var(--sand);
    }
    .process-step .step-num {
        width: 40px;
        height: 40px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        font-size: 15px;
        color: var(--white);
        flex-shrink: 0;
    }
    .process-step p { font-size: 15px; line-height: 1.7; margin: 0; }

    .fit-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 20px; }
    .fit-col { border-radius: 16px; padding: 28px 24px; border: 1px solid var(--sand); }
    .fit-col.perfect { background: var(--white); }
    .fit-col.not-fit { background: var(--warm-white); }
    .fit-col h4 { font-size: 15px; margin: 0 0 16px; }
    .fit-item { display: flex; gap: 10px; margin-bottom: 8px; font-size: 14px; line-height: 1.55; }
    .fit-col.perfect .fit-item span { color: var(--ocean-blue); flex-shrink: 0; }
    .fit-col.not-fit .fit-item { color: var(--muted); }

    .pull-quote {
        border-radius: 20px;
        padding: clamp(36px, 5vw, 56px);
        text-align: center;
        margin: 0 auto;
        max-width: 800px;
    }
    .pull-quote .quote-text {
        font-family: 'Caveat', cursive;
        font-size: clamp(24px, 3.5vw, 36px);
        color: var(--sand);
        line-height: 1.4;
        margin: 0 0 14px;
    }
    .pull-quote .quote-author { font-size: 13px; color: rgba(221, 208, 190, 0.55); margin: 0; }
    .pull-quote.dark { background: var(--charcoal); }
    .pull-quote.muted { background: rgba(155, 139, 107, 0.08); }
"#;

#[derive(Properties, PartialEq)]
pub struct SectionWrapProps {
    pub backdrop: Backdrop,
    #[prop_or(80)]
    pub py: u32,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionWrap)]
pub fn section_wrap(props: &SectionWrapProps) -> Html {
    html! {
        <section class={classes!("section-wrap", props.backdrop.class())} style={format!("--py: {}px;", props.py)}>
            <div class="section-inner">{ for props.children.iter() }</div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScriptLabelProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(crate::theme::WARM_TAN)]
    pub color: &'static str,
    #[prop_or(20)]
    pub size: u32,
    #[prop_or(false)]
    pub centered: bool,
}

#[function_component(ScriptLabel)]
pub fn script_label(props: &ScriptLabelProps) -> Html {
    let align = if props.centered { " text-align: center;" } else { "" };
    html! {
        <span class="script-label" style={format!("font-size: {}px; color: {};{}", props.size, props.color, align)}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ocean,
    Yellow,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ocean => "btn-ocean",
            ButtonVariant::Yellow => "btn-yellow",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BtnProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(Btn)]
pub fn btn(props: &BtnProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("btn", props.variant.class(), props.class.clone())}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct PhotoBlockProps {
    #[prop_or("📸")]
    pub emoji: &'static str,
    #[prop_or_default]
    pub label: Option<&'static str>,
    /// Bundled image to show instead of the emoji placeholder.
    #[prop_or_default]
    pub asset: Option<&'static str>,
    #[prop_or(320)]
    pub height: u32,
    #[prop_or(crate::theme::SAND_LIGHT)]
    pub background: &'static str,
    #[prop_or(16)]
    pub radius: u32,
}

#[function_component(PhotoBlock)]
pub fn photo_block(props: &PhotoBlockProps) -> Html {
    let style = format!(
        "height: {}px; background: {}; border-radius: {}px;",
        props.height, props.background, props.radius
    );
    let alt = props.label.unwrap_or("");

    html! {
        <div class="photo-block" style={style}>
            {
                match props.asset {
                    Some(id) => html! { <img src={asset_url(id)} alt={alt} loading="lazy" /> },
                    None => html! {
                        <>
                            <span class="emoji">{props.emoji}</span>
                            if let Some(label) = props.label {
                                <span class="photo-label">{label}</span>
                            }
                        </>
                    },
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessStepProps {
    pub num: usize,
    pub text: AttrValue,
    #[prop_or(crate::theme::OCEAN_BLUE)]
    pub accent: &'static str,
}

#[function_component(ProcessStep)]
pub fn process_step(props: &ProcessStepProps) -> Html {
    html! {
        <div class="process-step">
            <div class="step-num" style={format!("background: {};", props.accent)}>{props.num.to_string()}</div>
            <p>{props.text.clone()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TwoColFitProps {
    pub perfect: &'static [&'static str],
    pub not_fit: &'static [&'static str],
}

#[function_component(TwoColFit)]
pub fn two_col_fit(props: &TwoColFitProps) -> Html {
    html! {
        <div class="fit-grid">
            <div class="fit-col perfect">
                <h4>{"perfect if you:"}</h4>
                { for props.perfect.iter().map(|item| html! {
                    <div class="fit-item"><span>{"✦"}</span>{*item}</div>
                }) }
            </div>
            <div class="fit-col not-fit">
                <h4>{"not a fit if you:"}</h4>
                { for props.not_fit.iter().map(|item| html! {
                    <div class="fit-item"><span>{"—"}</span>{*item}</div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PullQuoteProps {
    pub quote: AttrValue,
    #[prop_or_default]
    pub author: Option<AttrValue>,
    /// Dark card on light sections, translucent card on dark ones.
    #[prop_or(false)]
    pub dark: bool,
}

#[function_component(PullQuote)]
pub fn pull_quote(props: &PullQuoteProps) -> Html {
    let tone = if props.dark { "dark" } else { "muted" };
    html! {
        <FadeIn>
            <div class={classes!("pull-quote", tone)}>
                <p class="quote-text">{format!("\"{}\"", props.quote)}</p>
                if let Some(author) = &props.author {
                    <p class="quote-author">{format!("— {}", author)}</p>
                }
            </div>
        </FadeIn>
    }
}
