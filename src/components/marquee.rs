use yew::prelude::*;

use crate::theme;

pub const CSS: &str = r#"
    .marquee {
        overflow: hidden;
        padding: 14px 0;
        white-space: nowrap;
        position: relative;
    }
    .marquee-track { display: inline-flex; }
    .marquee-item {
        font-weight: 500;
        font-size: 14px;
        letter-spacing: 0.5px;
        text-transform: lowercase;
        padding: 0 32px;
        display: inline-flex;
        align-items: center;
        gap: 32px;
    }
    .marquee-item .spark { color: var(--yellow); font-size: 10px; }
"#;

/// Copies of the label per track. Two tracks run back to back so the loop
/// point never shows.
const REPEATS: usize = 8;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub text: AttrValue,
    #[prop_or(theme::CHARCOAL)]
    pub background: &'static str,
    #[prop_or(theme::SAND)]
    pub color: &'static str,
    #[prop_or(30)]
    pub speed_secs: u32,
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track = |copy: &'static str| {
        html! {
            <div
                class="marquee-track"
                aria-hidden={if copy == "dup" { "true" } else { "false" }}
                style={format!("animation: marquee {}s linear infinite;", props.speed_secs)}
            >
                { for (0..REPEATS).map(|i| html! {
                    <span key={format!("{}-{}", copy, i)} class="marquee-item" style={format!("color: {};", props.color)}>
                        {props.text.clone()}
                        <span class="spark">{"✦"}</span>
                    </span>
                }) }
            </div>
        }
    };

    html! {
        <div class="marquee" style={format!("background: {};", props.background)}>
            { track("main") }
            { track("dup") }
        </div>
    }
}
