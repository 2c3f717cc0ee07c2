use yew::prelude::*;

use crate::components::carousel::HorizontalScroll;
use crate::components::fade_in::FadeIn;
use crate::components::layout::{Btn, ButtonVariant, PullQuote, ScriptLabel, SectionWrap};
use crate::components::marquee::Marquee;
use crate::components::newsletter::NewsletterForm;
use crate::theme::{self, Backdrop};

pub const CSS: &str = r#"
    .resource-card {
        min-width: 300px;
        max-width: 340px;
        flex-shrink: 0;
        scroll-snap-align: start;
        background: var(--white);
        border-radius: 20px;
        overflow: hidden;
        border: 1px solid var(--sand);
        transition: transform 0.3s;
    }
    .resource-card:hover { transform: translateY(-4px); }
    .resource-card .resource-num {
        padding: 36px 24px;
        text-align: center;
        font-weight: 700;
        font-size: 56px;
        color: rgba(45, 45, 45, 0.09);
    }
    .resource-card .resource-body { padding: 22px 22px 26px; }
    .resource-card h3 { font-size: 17px; margin-bottom: 8px; }
    .resource-card p { font-size: 14px; line-height: 1.6; margin-bottom: 16px; }

    .blog-row { margin-top: 24px; }
    .blog-card {
        min-width: 260px;
        max-width: 280px;
        flex-shrink: 0;
        scroll-snap-align: start;
        background: var(--white);
        border-radius: 18px;
        overflow: hidden;
        border: 1px solid var(--sand);
        cursor: pointer;
        transition: transform 0.3s;
    }
    .blog-card:hover { transform: translateY(-3px); }
    .blog-card .blog-cover { height: 140px; }
    .blog-card .blog-body { padding: 18px 18px 22px; }
    .blog-card h4 { font-size: 15px; margin-bottom: 8px; line-height: 1.3; }
    .blog-card p { font-size: 13px; line-height: 1.6; margin-bottom: 10px; }
    .blog-card .read-more { font-size: 12px; color: var(--ocean-blue); font-weight: 600; }
"#;

struct Resource {
    num: &'static str,
    title: &'static str,
    desc: &'static str,
    tint: &'static str,
}

const FREE_RESOURCES: [Resource; 3] = [
    Resource {
        num: "01",
        title: "the timesplit framework guide",
        desc: "how to structure your week so you're not just reacting to fires. strategic 20% | operational 60% | ad-hoc 20%.",
        tint: theme::PINK_SOFT,
    },
    Resource {
        num: "02",
        title: "client outreach templates",
        desc: "the dating (not cold-calling) method. my exact templates for warming up prospects and crafting personalized pitches.",
        tint: theme::OCEAN_LIGHT,
    },
    Resource {
        num: "03",
        title: "the feel-good systems starter kit",
        desc: "5 plug-and-play notion templates: weekly planning, content batching, client onboarding, project tracker, and win log.",
        tint: theme::LAVENDER_LIGHT,
    },
];

const POSTS: [(&str, &str, &str); 4] = [
    (
        "how i built a consulting business while working corporate",
        "the honest breakdown of managing teams across 8 regions on a 4-day week. spoiler: systems > willpower.",
        theme::OCEAN_LIGHT,
    ),
    (
        "why your notion workspace is a graveyard",
        "you downloaded 47 templates and use exactly zero. here's why—and what to do instead.",
        theme::PINK_SOFT,
    ),
    (
        "the timesplit framework",
        "strategic 20%, operational 60%, ad-hoc 20%. the breakdown that changed how i manage my time.",
        theme::LAVENDER_LIGHT,
    ),
    (
        "energy management for women",
        "time management is a myth. energy management is the answer. here's how to protect your capacity.",
        theme::SAND_LIGHT,
    ),
];

#[function_component(Resources)]
pub fn resources() -> Html {
    html! {
        <>
            <section class={classes!("page-hero", Backdrop::GridWhite.class())}>
                <h1>{"welcome to the cabana club 🏖️"}</h1>
                <p class="hero-script">{"your corner of the internet for feel-good systems and doing things differently"}</p>
            </section>

            <Marquee
                text="real talk · no productivity guilt · systems that work"
                background={theme::SAND}
                color={theme::CHARCOAL}
            />

            <SectionWrap backdrop={Backdrop::GridOcean} py={72}>
                <FadeIn class={classes!("narrow", "centered")}>
                    <ScriptLabel size={24} color={theme::OCEAN_BLUE} centered={true}>{"the newsletter"}</ScriptLabel>
                    <h2 class="section-title">{"every wednesday in your inbox"}</h2>
                    <p class="body-text">
                        {"real talk about building businesses that don't own you, systems & strategy for sustainable growth, revenue expansion ideas, behind-the-scenes of building while working corporate, and permission slips you didn't know you needed. no \"monetize your mornings\" bs."}
                    </p>
                    <div class="newsletter-slot"><NewsletterForm /></div>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Cream} py={72}>
                <FadeIn class={classes!("centered")}>
                    <ScriptLabel size={22} centered={true}>{"the free stuff"}</ScriptLabel>
                    <h2 class="section-title">{"free resources"}</h2>
                    <p class="body-text">{"because not everything needs a price tag"}</p>
                </FadeIn>
                <HorizontalScroll gap={20}>
                    { for FREE_RESOURCES.iter().map(|resource| html! {
                        <div key={resource.num} class="resource-card">
                            <div class="resource-num" style={format!("background: {};", resource.tint)}>{resource.num}</div>
                            <div class="resource-body">
                                <h3>{resource.title}</h3>
                                <p>{resource.desc}</p>
                                // TODO: wire to the download service once the guides are hosted
                                <Btn variant={ButtonVariant::Outline} class={classes!("small")}>{"download →"}</Btn>
                            </div>
                        </div>
                    }) }
                </HorizontalScroll>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridSand} py={72}>
                <FadeIn>
                    <ScriptLabel size={22}>{"from the blog"}</ScriptLabel>
                    <h2 class="section-title">{"real experiences, real lessons, zero fluff"}</h2>
                </FadeIn>
                <div class="blog-row">
                    <HorizontalScroll gap={18}>
                        { for POSTS.iter().map(|&(title, preview, tint)| html! {
                            <div key={title} class="blog-card">
                                <div class="blog-cover" style={format!("background: {};", tint)} />
                                <div class="blog-body">
                                    <h4>{title}</h4>
                                    <p>{preview}</p>
                                    <span class="read-more">{"read more →"}</span>
                                </div>
                            </div>
                        }) }
                    </HorizontalScroll>
                </div>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Charcoal} py={56}>
                <PullQuote
                    quote="You can't use up creativity. The more you use, the more you have."
                    author={Some(AttrValue::from("maya angelou"))}
                />
            </SectionWrap>
        </>
    }
}
