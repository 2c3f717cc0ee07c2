use yew::prelude::*;

pub const CSS: &str = r#"
    .h-scroll {
        display: flex;
        overflow-x: auto;
        scroll-snap-type: x mandatory;
        padding: 8px 0 20px;
        scrollbar-width: thin;
        scrollbar-color: var(--sand) transparent;
        -webkit-overflow-scrolling: touch;
    }
    .h-scroll > * { flex-shrink: 0; scroll-snap-align: start; }
"#;

#[derive(Properties, PartialEq)]
pub struct HorizontalScrollProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(20)]
    pub gap: u32,
}

/// Single scrollable row; each child snaps to the start edge.
#[function_component(HorizontalScroll)]
pub fn horizontal_scroll(props: &HorizontalScrollProps) -> Html {
    html! {
        <div class="h-scroll" style={format!("gap: {}px;", props.gap)}>
            { for props.children.iter() }
        </div>
    }
}
