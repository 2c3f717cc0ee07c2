use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::carousel::HorizontalScroll;
use crate::components::fade_in::{FadeIn, FADE_EASING};
use crate::components::layout::{Btn, ButtonVariant, PhotoBlock, PullQuote, ScriptLabel, SectionWrap};
use crate::components::marquee::Marquee;
use crate::components::newsletter::NewsletterForm;
use crate::navigation::{use_navigator, Page};
use crate::theme::{self, Backdrop};

pub const CSS: &str = r#"
    .home-hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        padding: 120px clamp(20px, 5vw, 56px) 40px;
        text-align: center;
    }
    .home-hero .hero-inner { max-width: 820px; }
    .home-hero h1 {
        font-size: clamp(40px, 7vw, 80px);
        line-height: 1.02;
        margin: 0 0 28px;
        letter-spacing: -1.5px;
    }
    .home-hero .lede {
        font-size: clamp(15px, 1.8vw, 18px);
        line-height: 1.65;
        max-width: 620px;
        margin: 0 auto 36px;
    }
    .home-hero .hero-actions { display: flex; gap: 14px; justify-content: center; flex-wrap: wrap; }

    .split { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; align-items: center; }
    .accent-line { font-size: 16px; color: var(--ocean-blue); font-weight: 600; margin-bottom: 16px; }

    .path-card {
        min-width: 320px;
        max-width: 360px;
        flex-shrink: 0;
        scroll-snap-align: start;
        background: var(--white);
        border-radius: 20px;
        overflow: hidden;
        border: 1px solid var(--sand);
        transition: transform 0.3s;
        cursor: pointer;
        display: flex;
        flex-direction: column;
    }
    .path-card:hover { transform: translateY(-6px); }
    .path-card .card-body { padding: 24px 22px 28px; display: flex; flex-direction: column; flex: 1; }
    .path-card h3 { font-size: 18px; margin: 0 0 10px; line-height: 1.2; }
    .path-card p { font-size: 14px; line-height: 1.65; margin: 0 0 16px; }
    .path-card .card-cta { font-weight: 600; font-size: 14px; color: var(--ocean-blue); margin-top: auto; }

    .stat-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(190px, 1fr)); gap: 16px; margin-bottom: 36px; }
    .stat-card {
        background: var(--white);
        border-radius: 16px;
        padding: 28px 20px;
        text-align: center;
        border: 1px solid var(--ocean-light);
        height: 100%;
        display: flex;
        flex-direction: column;
        justify-content: center;
        transition: all 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
        box-shadow: 0 4px 12px rgba(123, 167, 179, 0.05);
    }
    .stat-card:hover { transform: translateY(-8px) scale(1.02); box-shadow: 0 20px 40px rgba(123, 167, 179, 0.15); }
    .stat-card .stat { font-weight: 700; font-size: 36px; color: var(--ocean-blue); margin-bottom: 8px; }
    .stat-card p { font-size: 12.5px; line-height: 1.5; margin: 0; }
    .badges { display: flex; gap: 8px; justify-content: center; margin-bottom: 18px; flex-wrap: wrap; }

    .testimonial { position: relative; padding-left: 28px; }
    .testimonial .mark {
        font-family: 'Caveat', cursive;
        font-size: 72px;
        color: var(--lavender);
        position: absolute;
        top: -20px;
        left: -4px;
        line-height: 1;
    }
    .testimonial .attribution { font-size: 13px; color: var(--warm-tan); font-weight: 500; }
    .closing-script { font-family: 'Caveat', cursive; font-size: 22px; color: var(--warm-tan); margin-bottom: 32px; }
"#;

/// Delay before the hero starts revealing itself after mount.
pub const HERO_REVEAL_DELAY_MS: u32 = 100;
const HERO_TRANSITION_MS: u32 = 900;

/// Hero lines arrive one after another, each from a little less far down.
pub fn hero_reveal_style(loaded: bool, delay_ms: u32, offset_px: u32) -> String {
    let (opacity, transform) = if loaded {
        ("1", "none".to_string())
    } else {
        ("0", format!("translateY({}px)", offset_px))
    };
    format!(
        "opacity: {}; transform: {}; transition: all {}ms {} {}ms;",
        opacity, transform, HERO_TRANSITION_MS, FADE_EASING, delay_ms
    )
}

struct PathCard {
    emoji: &'static str,
    label: &'static str,
    title: &'static str,
    body: &'static str,
    cta: &'static str,
    target: Page,
    tint: &'static str,
}

const PATHS: [PathCard; 3] = [
    PathCard {
        emoji: "🏖️",
        label: "systems & strategy",
        title: "for creators & service providers",
        body: "your backend shouldn't feel like a full-time job. and your income shouldn't rely on just one thing. let's build something that scales without burning you out—whether that's finally launching that email list, planning your first in-person event, or creating new income streams that actually fit your life.",
        cta: "explore services →",
        target: Page::Services,
        tint: theme::PINK_SOFT,
    },
    PathCard {
        emoji: "🤝",
        label: "leadership & teams",
        title: "for corporate teams & leaders",
        body: "high-performing teams don't need micromanaging—they need systems that make collaboration easy and leaders who've learned (often the hard way) how to build sustainability into their approach.",
        cta: "explore workshops →",
        target: Page::Corporate,
        tint: theme::OCEAN_LIGHT,
    },
    PathCard {
        emoji: "✨",
        label: "partnerships",
        title: "for brands & organizations",
        body: "collaborations for brands who value authenticity over aesthetics. let's create something people actually want to engage with.",
        cta: "let's collaborate →",
        target: Page::Contact,
        tint: theme::LAVENDER_LIGHT,
    },
];

const STATS: [(&str, &str); 5] = [
    ("6+", "years building & leading high-performing teams across 8 global regions"),
    ("8.9+", "/10 team engagement scores (consistently, not just once)"),
    ("15+", "hires onboarded & trained, 5 now in leadership roles"),
    ("94%", "adoption rate for Asana across distributed teams"),
    ("96%", "adoption rate for major platform transitions"),
];

const BADGES: [&str; 3] = ["certified asana ambassador", "notion certified", "4-day corporate week"];

/// Served from the asset directory; see `assets::asset_url`.
const WELCOME_PHOTO: &str = "beach-horizon.svg";

#[function_component(Home)]
pub fn home() -> Html {
    let navigate = use_navigator();
    let loaded = use_state(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_REVEAL_DELAY_MS, move || loaded.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let go = |target: Page| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(target))
    };

    html! {
        <>
            <section class={classes!("home-hero", Backdrop::GridWhite.class())}>
                <div class="hero-inner">
                    <div style={hero_reveal_style(*loaded, 150, 36)}>
                        <h1>{"your business should fit your life, not hijack it"}</h1>
                    </div>
                    <div style={hero_reveal_style(*loaded, 350, 28)}>
                        <p class="lede">
                            {"feel-good systems, revenue expansion & brand experiences for established creators, service providers & leaders who are done choosing between growth and their sanity"}
                        </p>
                    </div>
                    <div class="hero-actions" style={hero_reveal_style(*loaded, 550, 20)}>
                        <Btn onclick={go(Page::Services)}>{"work with me"}</Btn>
                        <Btn variant={ButtonVariant::Outline} onclick={go(Page::Contact)}>{"brand partnerships"}</Btn>
                    </div>
                </div>
            </section>

            <Marquee text="feel-good systems" />

            <SectionWrap backdrop={Backdrop::GridSand} py={72}>
                <div class="split">
                    <FadeIn>
                        <PhotoBlock emoji="🏖️" label="your new ops partner" asset={Some(WELCOME_PHOTO)} height={400} background={theme::OCEAN_LIGHT} radius={20} />
                    </FadeIn>
                    <FadeIn delay_ms={120}>
                        <ScriptLabel size={22}>{"welcome to by samantha brown"}</ScriptLabel>
                        <h2 class="section-title">{"the permission slip you didn't know you needed"}</h2>
                        <p class="body-text">
                            {"if you're tired of forcing yourself into someone else's 5am routine, having all your income tied to one stream, downloading notion templates that immediately collect dust, and feeling like you need to be \"on\" 24/7 to be successful..."}
                        </p>
                        <p class="accent-line">{"you're in the right place."}</p>
                        <p class="body-text">
                            {"no hustle culture. no cookie-cutter frameworks. just systems that work with how you actually operate and support from someone who's been through the burnout and rebuilt differently."}
                        </p>
                    </FadeIn>
                </div>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Cream}>
                <FadeIn class={classes!("centered")}>
                    <ScriptLabel size={22} centered={true}>{"how we'll work together"}</ScriptLabel>
                    <h2 class="section-title">{"choose your path"}</h2>
                </FadeIn>
                <HorizontalScroll gap={24}>
                    { for PATHS.iter().map(|card| html! {
                        <div key={card.title} class="path-card" onclick={go(card.target)}>
                            <PhotoBlock emoji={card.emoji} label={card.label} height={220} background={card.tint} radius={0} />
                            <div class="card-body">
                                <h3>{card.title}</h3>
                                <p>{card.body}</p>
                                <span class="card-cta">{card.cta}</span>
                            </div>
                        </div>
                    }) }
                </HorizontalScroll>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridOcean}>
                <FadeIn class={classes!("centered")}>
                    <ScriptLabel size={22} color={theme::OCEAN_BLUE} centered={true}>{"the proof"}</ScriptLabel>
                    <h2 class="section-title">{"proof this actually works"}</h2>
                </FadeIn>
                <div class="stat-grid">
                    { for STATS.iter().enumerate().map(|(i, &(stat, label))| html! {
                        <FadeIn key={stat} delay_ms={i as u32 * 80}>
                            <div class="stat-card">
                                <div class="stat">{stat}</div>
                                <p>{label}</p>
                            </div>
                        </FadeIn>
                    }) }
                </div>
                <FadeIn delay_ms={400} class={classes!("centered")}>
                    <div class="badges">
                        { for BADGES.iter().map(|badge| html! { <span key={*badge} class="pill yellow">{*badge}</span> }) }
                    </div>
                    <p class="body-text narrow">
                        {"but here's the real story: i got here by burning out first, then rebuilding everything—my systems, my boundaries, my entire approach. now i help you skip the burnout part."}
                    </p>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Cream} py={72}>
                <FadeIn>
                    <div class="split">
                        <PhotoBlock emoji="💼" label="martech transformation" height={340} background={theme::LAVENDER_LIGHT} radius={20} />
                        <div>
                            <ScriptLabel>{"kind words"}</ScriptLabel>
                            <div class="testimonial">
                                <span class="mark">{"\""}</span>
                                <p class="body-text">
                                    {"Sam consistently demonstrated excellent communication skills, ensuring both my team and I were fully informed. She was particularly adept at identifying and highlighting key areas that required our attention, which was critical to the project's success. Her pragmatic approach to decision-making and remarkable ability to see the big picture allowed her to make well-considered decisions that balanced immediate needs with long-term strategic goals."}
                                </p>
                                <p class="attribution">{"— cross-functional project lead, martech transformation"}</p>
                            </div>
                        </div>
                    </div>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridLavender} py={72}>
                <FadeIn class={classes!("narrow", "centered")}>
                    <ScriptLabel size={24} color={theme::OCEAN_BLUE} centered={true}>{"every wednesday in your inbox"}</ScriptLabel>
                    <h2 class="section-title">{"join the cabana club 🏖️"}</h2>
                    <p class="body-text">
                        {"bi-weekly insights on building a business that doesn't require you to be a different person. no productivity guilt, no \"monetize your mornings\" bs. just real talk about systems, revenue expansion, and growing sustainably."}
                    </p>
                    <div class="newsletter-slot"><NewsletterForm /></div>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Charcoal} py={72}>
                <PullQuote
                    quote="Almost everything will work again if you unplug it for a few minutes, including you."
                    author={Some(AttrValue::from("anne lamott"))}
                />
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridWhite} py={72}>
                <FadeIn class={classes!("narrow", "centered")}>
                    <p class="body-text">
                        {"this isn't about doing more. it's about building smarter so you can actually enjoy what you've created. whether you're a creator ready to expand your income streams, a service provider who needs backend systems that don't make you want to cry, a leader trying to stop the burnout cycle, or a brand looking for partnerships that feel authentic—welcome."}
                    </p>
                    <p class="closing-script">{"grab an iced latte, pull up a chair, and let's figure this out together. ☕"}</p>
                    <Btn onclick={go(Page::Services)}>{"let's work together →"}</Btn>
                </FadeIn>
            </SectionWrap>

            <Marquee text="feel-good systems" background={theme::OCEAN_BLUE} color={theme::WHITE} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_waits_below_its_resting_place() {
        let style = hero_reveal_style(false, 150, 36);
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translateY(36px)"));
    }

    #[test]
    fn hero_lines_keep_their_stagger_once_loaded() {
        let style = hero_reveal_style(true, 550, 20);
        assert!(style.contains("transform: none;"));
        assert!(style.ends_with("900ms cubic-bezier(.22,.61,.36,1) 550ms;"));
    }

    #[test]
    fn paths_lead_to_real_pages() {
        let targets: Vec<Page> = PATHS.iter().map(|card| card.target).collect();
        assert_eq!(targets, vec![Page::Services, Page::Corporate, Page::Contact]);
    }

    #[test]
    fn welcome_photo_ships_with_the_site() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join(WELCOME_PHOTO);
        assert!(path.is_file(), "{}", path.display());
        assert_eq!(crate::assets::asset_url(WELCOME_PHOTO), "/assets/beach-horizon.svg");
    }
}
