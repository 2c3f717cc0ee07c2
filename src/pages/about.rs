use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::layout::{Btn, ButtonVariant, PhotoBlock, PullQuote, ScriptLabel, SectionWrap};
use crate::components::marquee::Marquee;
use crate::navigation::{use_navigator, Page};
use crate::theme::{self, Backdrop};

pub const CSS: &str = r#"
    .about-hero { padding: 130px clamp(20px, 5vw, 56px) 56px; }
    .about-hero .split-inner {
        max-width: 1000px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 48px;
        align-items: center;
    }
    .about-hero h1 { font-size: clamp(34px, 5vw, 52px); line-height: 1.05; margin-bottom: 8px; }
    .about-hero .tagline { font-family: 'Caveat', cursive; font-size: 19px; color: var(--ocean-blue); margin-bottom: 20px; }
    .belief { padding: 22px 0; border-bottom: 1px solid rgba(155, 139, 107, 0.13); }
    .belief:last-child { border-bottom: none; }
    .belief h3 { font-size: 17px; color: var(--yellow); margin-bottom: 8px; }
    .belief p { font-size: 14.5px; color: rgba(221, 208, 190, 0.8); line-height: 1.65; }
    .lifestyle-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 14px; }
    .lifestyle-item {
        background: var(--white);
        border-radius: 14px;
        padding: 16px 18px;
        border: 1px solid var(--lavender);
        font-size: 14px;
        line-height: 1.5;
    }
    .button-row { display: flex; gap: 14px; justify-content: center; flex-wrap: wrap; }
"#;

const BELIEFS: [(&str, &str); 4] = [
    (
        "energy management > time management",
        "you can't calendar your way out of exhaustion. sustainable business is about protecting your capacity, not squeezing more into your day.",
    ),
    (
        "the best system is the one you'll actually use",
        "i don't care how beautiful someone's notion template is—if it doesn't match your brain, you won't use it.",
    ),
    (
        "sustainable growth beats hustle culture every time",
        "quick wins are fun. building something that lasts without burning out? that's the real flex.",
    ),
    (
        "you don't need to be \"always on\" to be successful",
        "i'm literally building a consulting business while working corporate 4 days a week. proof of concept, baby.",
    ),
];

const LIFESTYLE: [&str; 6] = [
    "☕ getting iced oat lattes in ridiculous cloud cups",
    "🏖️ walking the beach in san diego",
    "🧘‍♀️ at pilates (moving my body >> grinding)",
    "💅 getting polka dot nails (it's a vibe)",
    "🐕 hanging with bentley (my coworker)",
    "✈️ planning trips (30th birthday in italy & spain!)",
];

#[function_component(About)]
pub fn about() -> Html {
    let navigate = use_navigator();
    let go = |target: Page| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target))
    };

    html! {
        <>
            <section class={classes!("about-hero", Backdrop::GridWhite.class())}>
                <div class="split-inner">
                    <PhotoBlock emoji="👋" label="hi, i'm sam" height={440} background={theme::PINK_SOFT} radius={20} />
                    <div>
                        <ScriptLabel size={22}>{"a little about me"}</ScriptLabel>
                        <h1>{"hi, i'm sam 👋"}</h1>
                        <p class="tagline">{"global team leader, fractional consultant, certified notion nerd, and part-time mermaid"}</p>
                        <p class="body-text">
                            {"currently managing teams across 8 regions from my home office in san diego (usually with an iced oat latte in an anthropologie cloud cup and my dog bentley judging my meetings from his bed)."}
                        </p>
                    </div>
                </div>
            </section>

            <Marquee
                text="systems that don't suck · sustainable growth · feel-good ops"
                background={theme::OCEAN_BLUE}
                color={theme::WHITE}
            />

            <SectionWrap backdrop={Backdrop::GridSand} py={72}>
                <FadeIn class={classes!("narrow")}>
                    <ScriptLabel size={22}>{"the backstory"}</ScriptLabel>
                    <h2 class="section-title">{"credibility without the stuffiness"}</h2>
                    <p class="body-text">
                        {"i've spent 6+ years building high-performing teams in performance marketing—the kind that don't need micromanaging, consistently hit 8.9+/10 engagement scores, and actually want to show up on mondays."}
                    </p>
                    <p class="body-text">
                        {"but here's what those achievements don't show: the burnout i went through to get there. checking teams at 10pm. working through weekends \"just to catch up.\" saying yes to everything because i thought that's what good leaders did."}
                    </p>
                    <p class="body-text">
                        {"i hit a wall. and when i did, i realized: this isn't sustainable. so i rebuilt everything—my systems, my boundaries, my entire approach. now i help you skip the burnout part and go straight to what actually works."}
                    </p>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Charcoal} py={72}>
                <FadeIn class={classes!("narrow")}>
                    <ScriptLabel size={22} color={theme::SAND}>{"what i believe"}</ScriptLabel>
                    { for BELIEFS.iter().map(|&(belief, detail)| html! {
                        <div key={belief} class="belief">
                            <h3>{belief}</h3>
                            <p>{detail}</p>
                        </div>
                    }) }
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridLavender} py={72}>
                <FadeIn class={classes!("narrow")}>
                    <ScriptLabel size={22} color={theme::OCEAN_BLUE}>{"when i'm not consulting"}</ScriptLabel>
                    <div class="lifestyle-grid">
                        { for LIFESTYLE.iter().map(|item| html! { <div key={*item} class="lifestyle-item">{*item}</div> }) }
                    </div>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Charcoal} py={56}>
                <PullQuote
                    quote="The question isn't who's going to let me; it's who's going to stop me."
                    author={Some(AttrValue::from("ayn rand"))}
                />
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Cream} py={48}>
                <div class="button-row">
                    <Btn onclick={go(Page::Services)}>{"work with me →"}</Btn>
                    <Btn variant={ButtonVariant::Ocean} onclick={go(Page::Resources)}>{"join the cabana club →"}</Btn>
                </div>
            </SectionWrap>
        </>
    }
}
