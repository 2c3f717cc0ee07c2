use chrono::Datelike;
use yew::prelude::*;

use crate::components::layout::ScriptLabel;
use crate::navigation::{use_navigator, Page};
use crate::theme;

pub const CSS: &str = r#"
    .site-footer { background: var(--charcoal); padding: 56px clamp(20px, 5vw, 48px) 28px; }
    .footer-grid {
        max-width: 1100px;
        margin: 0 auto 40px;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
        gap: 32px;
    }
    .footer-brand { font-weight: 700; font-size: 16px; color: var(--cream); margin-bottom: 8px; }
    .footer-col { display: flex; flex-direction: column; gap: 6px; }
    .footer-heading {
        font-weight: 600;
        font-size: 12px;
        color: var(--sand);
        letter-spacing: 1px;
        text-transform: uppercase;
        margin-bottom: 4px;
    }
    .footer-col button, .footer-col a {
        font-family: 'Rubik', sans-serif;
        font-size: 14px;
        color: rgba(221, 208, 190, 0.73);
        background: none;
        border: none;
        cursor: pointer;
        padding: 3px 0;
        text-align: left;
        text-decoration: none;
    }
    .footer-col .plain-text { font-size: 14px; color: rgba(221, 208, 190, 0.47); padding: 3px 0; }
    .footer-bottom { border-top: 1px solid rgba(155, 139, 107, 0.13); padding-top: 20px; text-align: center; }
    .footer-bottom p { font-size: 11px; color: rgba(221, 208, 190, 0.33); }
"#;

const EXPLORE: [(&str, Page); 4] = [
    ("work with me", Page::Services),
    ("the cabana club", Page::Resources),
    ("about", Page::About),
    ("contact", Page::Contact),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_navigator();
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"by samantha brown"}</div>
                    <ScriptLabel color={theme::SAND} size={18}>{"built with intention, not perfection"}</ScriptLabel>
                </div>
                <div class="footer-col">
                    <span class="footer-heading">{"explore"}</span>
                    { for EXPLORE.iter().map(|&(label, target)| {
                        let navigate = navigate.clone();
                        html! {
                            <button key={target.id()} onclick={Callback::from(move |_: MouseEvent| navigate.emit(target))}>
                                {label}
                            </button>
                        }
                    }) }
                </div>
                <div class="footer-col">
                    <span class="footer-heading">{"connect"}</span>
                    <a href="https://www.linkedin.com" target="_blank" rel="noopener noreferrer">{"linkedin"}</a>
                    <a href="https://www.instagram.com" target="_blank" rel="noopener noreferrer">{"instagram"}</a>
                    <span class="plain-text">{"sam@bysamanthabrown.com"}</span>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} by samantha brown | built with intention, not perfection", year)}</p>
            </div>
        </footer>
    }
}
