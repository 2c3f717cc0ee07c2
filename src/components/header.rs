use yew::prelude::*;

use crate::components::layout::{Btn, ButtonVariant};
use crate::navigation::{use_navigator, NavAction, NavContext, NavState, Page};
use crate::viewport::use_compact_layout;

pub const CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 1000;
        background: transparent;
        transition: all 0.4s;
        padding: 0 clamp(16px, 4vw, 48px);
    }
    .site-header.scrolled {
        background: rgba(250, 247, 242, 0.96);
        backdrop-filter: blur(14px);
        border-bottom: 1px solid var(--sand);
    }
    .header-bar {
        max-width: 1200px;
        margin: 0 auto;
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 66px;
        transition: height 0.3s;
    }
    .site-header.scrolled .header-bar { height: 56px; }
    .site-header button.plain {
        font-family: 'Rubik', sans-serif;
        color: var(--charcoal);
        background: none;
        border: none;
        cursor: pointer;
    }
    .brand { font-weight: 700; font-size: 17px; letter-spacing: -0.3px; }
    .dsk-nav { display: flex; gap: 28px; align-items: center; }
    .nav-link {
        font-size: 14px;
        font-weight: 400;
        padding: 6px 2px;
        border-bottom: 2px solid transparent;
        transition: all 0.3s;
        letter-spacing: 0.2px;
    }
    .nav-link.active { font-weight: 600; border-bottom-color: var(--ocean-blue); }
    .services-menu { position: relative; }
    .dropdown {
        position: absolute;
        top: 100%;
        left: -8px;
        background: var(--white);
        border: 1px solid var(--sand);
        border-radius: 14px;
        padding: 8px 0;
        min-width: 240px;
        box-shadow: 0 12px 32px rgba(0,0,0,0.08);
    }
    .dropdown button {
        display: block;
        width: 100%;
        text-align: left;
        font-size: 14px;
        padding: 10px 20px;
    }
    .mob-toggle { font-size: 24px; }
    .mob-menu {
        background: var(--cream);
        padding: 12px 20px 24px;
        border-top: 1px solid var(--sand);
        display: flex;
        flex-direction: column;
        gap: 6px;
    }
    .mob-menu button { font-size: 15px; text-align: left; padding: 8px 0; }
    .mob-menu button.active { font-weight: 700; }
"#;

pub const DROPDOWN_PAGES: [Page; 5] = [
    Page::Services,
    Page::Audit,
    Page::Implementation,
    Page::Fractional,
    Page::Corporate,
];

pub const MOBILE_PAGES: [Page; 9] = [
    Page::Home,
    Page::Services,
    Page::Audit,
    Page::Implementation,
    Page::Fractional,
    Page::Corporate,
    Page::About,
    Page::Resources,
    Page::Contact,
];

fn dropdown_label(page: Page) -> &'static str {
    match page {
        Page::Services => "all services",
        _ => page.label(),
    }
}

/// Detail pages sit indented under "services" in the burger menu.
fn mobile_label(page: Page) -> String {
    if page.is_service_section() && page != Page::Services {
        format!("— {}", page.label())
    } else {
        page.label().to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scrolled: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav = use_context::<NavContext>();
    let navigate = use_navigator();
    let compact = use_compact_layout();

    // The burger menu only exists in the compact layout.
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |compact| {
                if !*compact {
                    if let Some(nav) = nav {
                        nav.dispatch(NavAction::CloseMenu);
                    }
                }
                || ()
            },
            compact,
        );
    }

    let Some(nav) = nav else {
        return html! {};
    };
    let NavState { page, menu_open, dropdown_open } = (*nav).clone();

    let go = |target: Page| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target))
    };

    let set_dropdown = |open: bool| {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::SetDropdown(open)))
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let toggle_dropdown = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleDropdown))
    };

    let nav_link = |target: Page| {
        html! {
            <button
                class={classes!("plain", "nav-link", (page == target).then(|| "active"))}
                onclick={go(target)}
            >
                {target.label()}
            </button>
        }
    };

    html! {
        <header class={classes!("site-header", props.scrolled.then(|| "scrolled"))}>
            <div class="header-bar">
                <button class="plain brand" onclick={go(Page::Home)}>{"by samantha brown"}</button>

                if compact {
                    <button class="plain mob-toggle" onclick={toggle_menu} aria-expanded={menu_open.to_string()}>
                        { if menu_open { "✕" } else { "☰" } }
                    </button>
                } else {
                    <nav class="dsk-nav">
                        { nav_link(Page::Home) }
                        <div
                            class="services-menu"
                            onmouseenter={set_dropdown(true)}
                            onmouseleave={set_dropdown(false)}
                        >
                            <button
                                class={classes!("plain", "nav-link", page.is_service_section().then(|| "active"))}
                                onclick={toggle_dropdown}
                                aria-expanded={dropdown_open.to_string()}
                            >
                                {"services ▾"}
                            </button>
                            if dropdown_open {
                                <div class="dropdown">
                                    { for DROPDOWN_PAGES.iter().map(|&target| html! {
                                        <button key={target.id()} class="plain" onclick={go(target)}>{dropdown_label(target)}</button>
                                    }) }
                                </div>
                            }
                        </div>
                        { nav_link(Page::About) }
                        { nav_link(Page::Resources) }
                        { nav_link(Page::Contact) }
                        <Btn variant={ButtonVariant::Ocean} class={classes!("small")} onclick={go(Page::Services)}>
                            {"work with me"}
                        </Btn>
                    </nav>
                }
            </div>

            if compact && menu_open {
                <div class="mob-menu">
                    { for MOBILE_PAGES.iter().map(|&target| html! {
                        <button
                            key={target.id()}
                            class={classes!("plain", (page == target).then(|| "active"))}
                            onclick={go(target)}
                        >
                            {mobile_label(target)}
                        </button>
                    }) }
                </div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_lists_every_service_page() {
        assert!(DROPDOWN_PAGES.iter().all(|page| page.is_service_section()));
        assert_eq!(DROPDOWN_PAGES.len(), 5);
        assert_eq!(dropdown_label(Page::Services), "all services");
        assert_eq!(dropdown_label(Page::Corporate), "workshops & training");
    }

    #[test]
    fn mobile_menu_reaches_every_real_page() {
        for page in Page::ALL {
            let listed = MOBILE_PAGES.contains(&page);
            assert_eq!(listed, page != Page::NotFound, "{}", page);
        }
    }

    #[test]
    fn detail_pages_are_indented_in_the_burger_menu() {
        assert_eq!(mobile_label(Page::Services), "services");
        assert_eq!(mobile_label(Page::Audit), "— brand experience audit");
        assert_eq!(mobile_label(Page::About), "about");
    }
}
