use yew::prelude::*;

// Palette. Exposed as CSS custom properties by `GlobalStyle` and used
// directly where a component needs a value in an inline style.
pub const CHARCOAL: &str = "#2D2D2D";
pub const WARM_TAN: &str = "#9B8B6B";
pub const SAND: &str = "#DDD0BE";
pub const SAND_LIGHT: &str = "#EDE5D8";
pub const LAVENDER: &str = "#D5CEE3";
pub const LAVENDER_LIGHT: &str = "#EDE8F4";
pub const YELLOW: &str = "#E0E24A";
pub const CREAM: &str = "#FAF7F2";
pub const WHITE: &str = "#FFFFFF";
pub const WARM_WHITE: &str = "#FDF9F3";
pub const PINK_SOFT: &str = "#F5E6DC";
pub const OCEAN_BLUE: &str = "#7BA7B3";
pub const OCEAN_LIGHT: &str = "#D6E8EC";
pub const BODY: &str = "#555550";
pub const MUTED: &str = "#999990";

/// Grid-paper backgrounds, one per section tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Cream,
    White,
    Charcoal,
    GridWhite,
    GridSand,
    GridOcean,
    GridLavender,
}

impl Backdrop {
    pub fn class(self) -> &'static str {
        match self {
            Backdrop::Cream => "bg-cream",
            Backdrop::White => "bg-white",
            Backdrop::Charcoal => "bg-charcoal",
            Backdrop::GridWhite => "bg-grid-white",
            Backdrop::GridSand => "bg-grid-sand",
            Backdrop::GridOcean => "bg-grid-ocean",
            Backdrop::GridLavender => "bg-grid-lavender",
        }
    }
}

fn grid_paper(fill: &str, stroke: &str, opacity: &str) -> String {
    format!(
        "url(\"data:image/svg+xml,%3Csvg width='40' height='40' xmlns='http://www.w3.org/2000/svg'%3E%3Cpath d='M0 0h40v40H0z' fill='%23{}'/%3E%3Cpath d='M40 0v40M0 40h40' stroke='%23{}' stroke-width='0.5' fill='none' opacity='{}'/%3E%3C/svg%3E\")",
        fill, stroke, opacity
    )
}

fn palette_css() -> String {
    format!(
        r#"
        :root {{
            --charcoal: {CHARCOAL};
            --warm-tan: {WARM_TAN};
            --sand: {SAND};
            --sand-light: {SAND_LIGHT};
            --lavender: {LAVENDER};
            --lavender-light: {LAVENDER_LIGHT};
            --yellow: {YELLOW};
            --cream: {CREAM};
            --white: {WHITE};
            --warm-white: {WARM_WHITE};
            --pink-soft: {PINK_SOFT};
            --ocean-blue: {OCEAN_BLUE};
            --ocean-light: {OCEAN_LIGHT};
            --body: {BODY};
            --muted: {MUTED};
        }}
        .bg-cream {{ background: var(--cream); }}
        .bg-white {{ background: var(--white); }}
        .bg-charcoal {{ background: var(--charcoal); }}
        .bg-grid-white {{ background: {}; }}
        .bg-grid-sand {{ background: {}; }}
        .bg-grid-ocean {{ background: {}; }}
        .bg-grid-lavender {{ background: {}; }}
        "#,
        grid_paper("FAF7F2", "DDD0BE", "0.5"),
        grid_paper("EDE5D8", "DDD0BE", "0.6"),
        grid_paper("D6E8EC", "7BA7B3", "0.3"),
        grid_paper("EDE8F4", "D5CEE3", "0.5"),
    )
}

const BASE_CSS: &str = r#"
    *, *::before, *::after { margin: 0; padding: 0; box-sizing: border-box; }
    html { scroll-behavior: smooth; -webkit-font-smoothing: antialiased; }
    body { background: var(--cream); overflow-x: hidden; font-family: 'Rubik', sans-serif; color: var(--body); }
    ::selection { background: var(--ocean-light); color: var(--charcoal); }
    input::placeholder, textarea::placeholder { font-family: 'Rubik', sans-serif; color: var(--muted); }
    button:hover { opacity: 0.93; }

    h1, h2, h3, h4 { color: var(--charcoal); font-weight: 700; }
    .page-hero {
        padding: 130px clamp(20px, 5vw, 56px) 56px;
        text-align: center;
    }
    .page-hero h1 {
        font-size: clamp(36px, 6vw, 62px);
        line-height: 1.02;
        margin: 0 0 12px;
        letter-spacing: -1px;
    }
    .page-hero .hero-script {
        font-family: 'Caveat', cursive;
        font-size: 20px;
        color: var(--warm-tan);
    }
    .section-title {
        font-size: clamp(26px, 3.5vw, 40px);
        line-height: 1.1;
        margin: 0 0 16px;
    }
    .section-title.light { color: var(--cream); }
    .body-text {
        font-size: 15px;
        line-height: 1.75;
        margin-bottom: 16px;
    }
    .narrow { max-width: 700px; margin: 0 auto; }
    .centered { text-align: center; }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 20px;
    }
    .pill {
        font-weight: 600;
        font-size: 12px;
        padding: 5px 16px;
        border-radius: 50px;
        display: inline-block;
    }
    .pill.yellow { background: var(--yellow); color: var(--charcoal); }
    .pill.ocean { background: var(--ocean-light); color: var(--ocean-blue); }

    ::-webkit-scrollbar { height: 6px; width: 6px; }
    ::-webkit-scrollbar-track { background: transparent; }
    ::-webkit-scrollbar-thumb { background: var(--sand); border-radius: 10px; }

    @keyframes marquee {
        0% { transform: translateX(0); }
        100% { transform: translateX(-100%); }
    }

    @media (max-width: 640px) {
        select, input, textarea { font-size: 16px !important; }
    }
    @media (prefers-reduced-motion: reduce) {
        *, *::before, *::after { animation-duration: 0.01ms !important; transition-duration: 0.01ms !important; }
    }
"#;

/// Every stylesheet the site ships, in cascade order.
pub fn stylesheet() -> String {
    use crate::components::{carousel, footer, header, layout, marquee, newsletter};
    use crate::pages::{about, contact, home, resources, service_detail, services};

    let sheets = [
        BASE_CSS,
        layout::CSS,
        carousel::CSS,
        marquee::CSS,
        newsletter::CSS,
        header::CSS,
        footer::CSS,
        home::CSS,
        services::CSS,
        service_detail::CSS,
        about::CSS,
        resources::CSS,
        contact::CSS,
    ];
    let mut css = palette_css();
    for sheet in sheets {
        css.push_str(sheet);
    }
    css
}

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    let css = use_memo(|_| stylesheet(), ());
    html! {
        <style>{(*css).clone()}</style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_backdrop_class_is_defined() {
        let css = palette_css();
        for backdrop in [
            Backdrop::Cream,
            Backdrop::White,
            Backdrop::Charcoal,
            Backdrop::GridWhite,
            Backdrop::GridSand,
            Backdrop::GridOcean,
            Backdrop::GridLavender,
        ] {
            assert!(css.contains(&format!(".{} ", backdrop.class())), "{:?}", backdrop);
        }
    }

    #[test]
    fn stylesheet_covers_shell_and_pages() {
        let css = stylesheet();
        for selector in [".site-header", ".site-footer", ".marquee", ".h-scroll", ".btn-ocean", ".path-card", ".contact-grid"] {
            assert!(css.contains(selector), "{}", selector);
        }
        assert!(css.starts_with("\n        :root"));
    }

    #[test]
    fn grid_paper_escapes_colors_for_data_urls() {
        let url = grid_paper("FAF7F2", "DDD0BE", "0.5");
        assert!(url.contains("fill='%23FAF7F2'"));
        assert!(url.contains("stroke='%23DDD0BE'"));
        assert!(!url.contains('#'));
    }
}
