use yew::prelude::*;

use crate::visibility::use_in_view;

pub const FADE_THRESHOLD: f64 = 0.05;
pub const FADE_DURATION_MS: u32 = 700;
pub const FADE_EASING: &str = "cubic-bezier(.22,.61,.36,1)";

pub fn fade_style(seen: bool, delay_ms: u32, offset_px: u32) -> String {
    let (opacity, transform) = if seen {
        ("1".to_string(), "translateY(0)".to_string())
    } else {
        ("0".to_string(), format!("translateY({}px)", offset_px))
    };
    format!(
        "opacity: {opacity}; transform: {transform}; transition: opacity {d}ms {e} {delay_ms}ms, transform {d}ms {e} {delay_ms}ms;",
        d = FADE_DURATION_MS,
        e = FADE_EASING,
    )
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(28)]
    pub offset_px: u32,
    #[prop_or(FADE_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone(), props.threshold);

    html! {
        <div ref={node} class={props.class.clone()} style={fade_style(seen, props.delay_ms, props.offset_px)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_seen() {
        let style = fade_style(false, 0, 28);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(28px)"));
    }

    #[test]
    fn settles_at_origin_once_seen() {
        let style = fade_style(true, 0, 28);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("translateY(0)"));
        assert!(!style.contains("28px"));
    }

    #[test]
    fn delay_staggers_both_transitions() {
        let style = fade_style(true, 240, 28);
        assert!(style.contains("opacity 700ms cubic-bezier(.22,.61,.36,1) 240ms"));
        assert!(style.contains("transform 700ms cubic-bezier(.22,.61,.36,1) 240ms"));
    }
}
