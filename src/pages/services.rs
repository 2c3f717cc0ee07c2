use yew::prelude::*;

use crate::catalog::CREATOR_SERVICES;
use crate::components::fade_in::FadeIn;
use crate::components::layout::{Btn, ButtonVariant, PullQuote, ScriptLabel, SectionWrap, TwoColFit};
use crate::components::marquee::Marquee;
use crate::navigation::{use_navigator, Page};
use crate::theme::{self, Backdrop};

pub const CSS: &str = r#"
    .hub-lede { font-size: 16px; max-width: 460px; margin: 0 auto; }
    .offer-grid { margin-bottom: 40px; }
    .offer-card {
        background: var(--white);
        border-radius: 20px;
        overflow: hidden;
        border: 1px solid var(--sand);
        cursor: pointer;
        transition: transform 0.3s, box-shadow 0.3s;
        height: 100%;
    }
    .offer-card:hover { transform: translateY(-6px); box-shadow: 0 12px 32px rgba(0,0,0,0.08); }
    .offer-card .offer-num { padding: 32px 24px 24px; font-weight: 700; font-size: 48px; color: rgba(45, 45, 45, 0.13); }
    .offer-card .offer-body { padding: 24px 22px 28px; }
    .offer-card h3 { font-size: 18px; margin: 12px 0 10px; }
    .offer-card p { font-size: 14px; line-height: 1.65; margin: 0 0 16px; }
    .offer-card .learn-more { font-weight: 600; font-size: 14px; color: var(--ocean-blue); }

    .dark-copy { font-size: 15px; color: rgba(221, 208, 190, 0.8); line-height: 1.75; max-width: 600px; margin-bottom: 28px; }
    .corp-list { display: flex; flex-direction: column; gap: 12px; margin-bottom: 28px; }
    .corp-item {
        background: rgba(155, 139, 107, 0.08);
        border-radius: 14px;
        padding: 18px 22px;
        border: 1px solid rgba(155, 139, 107, 0.15);
    }
    .corp-item h4 { font-weight: 600; font-size: 16px; color: var(--yellow); }

    .brand-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-bottom: 28px; }
    .brand-tile { background: var(--white); border-radius: 16px; padding: 24px 20px; text-align: center; border: 1px solid var(--lavender); }
    .brand-tile .icon { font-size: 32px; display: block; margin-bottom: 8px; }
    .brand-tile h4 { font-size: 14px; }
    .quote-gap { margin-top: 48px; }
"#;

const CREATOR_FIT: &[&str] = &[
    "have an established community (even if it's small but mighty)",
    "are ready to expand beyond your current revenue streams",
    "want to build an email list that actually converts",
    "need backend systems that can handle growth",
    "value strategic support over just \"here's another template\"",
];

const CREATOR_NOT_FIT: &[&str] = &[
    "are just getting started (like, first 10 followers started)",
    "want someone to tell you exactly what to do without collaboration",
    "aren't ready to invest in your business infrastructure",
];

const CORPORATE_OFFERS: [&str; 3] = [
    "team engagement workshops",
    "leadership consulting for managers",
    "custom training programs",
];

const BRAND_OFFERS: [(&str, &str); 3] = [
    ("🎤", "speaking engagements"),
    ("🤝", "brand collaborations"),
    ("📱", "ugc & content creation"),
];

#[function_component(Services)]
pub fn services() -> Html {
    let navigate = use_navigator();
    let go = |target: Page| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target))
    };

    html! {
        <>
            <section class={classes!("page-hero", Backdrop::GridWhite.class())}>
                <ScriptLabel size={22} centered={true}>{"find your fit"}</ScriptLabel>
                <h1>{"choose your path"}</h1>
                <p class="hub-lede">{"not sure where to start? no worries—let's break it down."}</p>
            </section>

            <Marquee text="systems that actually work" background={theme::SAND} color={theme::CHARCOAL} />

            <SectionWrap backdrop={Backdrop::Cream} py={72}>
                <FadeIn>
                    <ScriptLabel size={22}>{"for the creators & service providers"}</ScriptLabel>
                    <h2 class="section-title">{"systems that don't require you to be a different person"}</h2>
                    <p class="body-text">
                        {"you didn't start your business to spend hours wrestling with dubsado, notion, or whatever \"game-changing\" tool someone sold you on. you started it because you're really good at what you do. but now your backend is held together with duct tape and desperate energy. that's where i come in."}
                    </p>
                </FadeIn>

                <div class="card-grid offer-grid">
                    { for CREATOR_SERVICES.iter().enumerate().map(|(i, card)| html! {
                        <FadeIn key={card.num} delay_ms={i as u32 * 100}>
                            <div class="offer-card" onclick={go(card.target)}>
                                <div class="offer-num" style={format!("background: {};", card.tint)}>{card.num}</div>
                                <div class="offer-body">
                                    <span class="pill ocean">{card.price}</span>
                                    <h3>{card.title}</h3>
                                    <p>{card.body}</p>
                                    <span class="learn-more">{"learn more →"}</span>
                                </div>
                            </div>
                        </FadeIn>
                    }) }
                </div>

                <FadeIn>
                    <TwoColFit perfect={CREATOR_FIT} not_fit={CREATOR_NOT_FIT} />
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Charcoal} py={72}>
                <FadeIn>
                    <ScriptLabel size={22} color={theme::SAND}>{"for the corporate folks"}</ScriptLabel>
                    <h2 class="section-title light">{"leadership development that doesn't feel like corporate theater"}</h2>
                    <p class="dark-copy">
                        {"i'm here to help you build teams that don't need constant hand-holding and systems that actually get adopted—not just rolled out and ignored."}
                    </p>
                    <div class="corp-list">
                        { for CORPORATE_OFFERS.iter().map(|offer| html! {
                            <div key={*offer} class="corp-item"><h4>{*offer}</h4></div>
                        }) }
                    </div>
                    <Btn variant={ButtonVariant::Yellow} onclick={go(Page::Corporate)}>{"explore workshops →"}</Btn>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridLavender} py={72}>
                <FadeIn>
                    <ScriptLabel size={22} color={theme::OCEAN_BLUE}>{"for brands & organizations"}</ScriptLabel>
                    <h2 class="section-title">{"partnerships for people who value authenticity"}</h2>
                    <p class="body-text">
                        {"i'm not here to post a perfectly curated flat lay. i'm here to create content that actually converts, partnerships that feel aligned, and collaborations your audience will genuinely care about."}
                    </p>
                    <div class="brand-grid">
                        { for BRAND_OFFERS.iter().map(|&(icon, title)| html! {
                            <div key={title} class="brand-tile">
                                <span class="icon">{icon}</span>
                                <h4>{title}</h4>
                            </div>
                        }) }
                    </div>
                    <Btn onclick={go(Page::Contact)}>{"let's collaborate →"}</Btn>
                </FadeIn>
                <div class="quote-gap">
                    <PullQuote
                        quote="The most courageous act is still to think for yourself. Aloud."
                        author={Some(AttrValue::from("coco chanel"))}
                        dark={true}
                    />
                </div>
            </SectionWrap>
        </>
    }
}
