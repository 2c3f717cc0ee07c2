use yew::prelude::*;

use crate::catalog::ServiceDetail;
use crate::components::fade_in::FadeIn;
use crate::components::layout::{Btn, ProcessStep, PullQuote, ScriptLabel, SectionWrap, TwoColFit};
use crate::navigation::{use_navigator, Page};
use crate::theme::{self, Backdrop};

pub const CSS: &str = r#"
    .price-badge {
        font-weight: 600;
        font-size: 13px;
        color: var(--white);
        background: var(--ocean-blue);
        padding: 6px 20px;
        border-radius: 50px;
        display: inline-block;
        margin-bottom: 16px;
    }
    .detail-hero h1 { font-size: clamp(30px, 5vw, 52px); line-height: 1.05; margin-bottom: 8px; letter-spacing: -0.8px; }
    .problem-text { font-size: 15px; color: rgba(221, 208, 190, 0.87); line-height: 1.75; }
    .include-item { display: flex; gap: 10px; align-items: flex-start; margin-bottom: 7px; }
    .include-item .spark { color: var(--ocean-blue); flex-shrink: 0; padding-top: 2px; }
    .include-item span { font-size: 14px; line-height: 1.6; }
    .timeline { display: flex; gap: 10px; margin-top: 20px; flex-wrap: wrap; }
"#;

#[derive(Properties, PartialEq)]
pub struct ServiceDetailPageProps {
    pub detail: &'static ServiceDetail,
}

/// One template for every offer page; only the record differs.
#[function_component(ServiceDetailPage)]
pub fn service_detail_page(props: &ServiceDetailPageProps) -> Html {
    let navigate = use_navigator();
    let detail = props.detail;

    let to_contact = Callback::from(move |_: MouseEvent| navigate.emit(Page::Contact));

    html! {
        <>
            <section class={classes!("page-hero", "detail-hero", Backdrop::GridWhite.class())}>
                <span class="price-badge">{detail.price}</span>
                <h1>{detail.title}</h1>
                <p class="hero-script">{detail.subtitle}</p>
            </section>

            <SectionWrap backdrop={Backdrop::Charcoal} py={56}>
                <FadeIn class={classes!("narrow")}>
                    <ScriptLabel color={theme::SAND}>{"the problem"}</ScriptLabel>
                    <p class="problem-text">{detail.problem}</p>
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::GridWhite} py={64}>
                <FadeIn class={classes!("narrow")}>
                    <ScriptLabel>{"what this is"}</ScriptLabel>
                    <p class="body-text">{detail.what_intro}</p>
                    { for detail.includes.iter().map(|item| html! {
                        <div class="include-item">
                            <span class="spark">{"✦"}</span>
                            <span>{*item}</span>
                        </div>
                    }) }
                    if !detail.timeline.is_empty() {
                        <div class="timeline">
                            { for detail.timeline.iter().map(|item| html! {
                                <span key={*item} class="pill yellow">{*item}</span>
                            }) }
                        </div>
                    }
                </FadeIn>
            </SectionWrap>

            <SectionWrap backdrop={Backdrop::Cream} py={64}>
                <FadeIn class={classes!("narrow")}>
                    <ScriptLabel>{"the process"}</ScriptLabel>
                    { for detail.process.iter().enumerate().map(|(i, step)| html! {
                        <ProcessStep num={i + 1} text={*step} />
                    }) }
                </FadeIn>
            </SectionWrap>

            if let Some(fit) = &detail.fit {
                <SectionWrap backdrop={Backdrop::GridSand} py={64}>
                    <FadeIn class={classes!("narrow")}>
                        <ScriptLabel>{"who this is for"}</ScriptLabel>
                        <TwoColFit perfect={fit.perfect} not_fit={fit.not_fit} />
                    </FadeIn>
                </SectionWrap>
            }

            if let Some(different) = detail.different {
                <SectionWrap backdrop={Backdrop::White} py={64}>
                    <FadeIn class={classes!("narrow")}>
                        <ScriptLabel>{"what makes this different"}</ScriptLabel>
                        <p class="body-text">{different}</p>
                    </FadeIn>
                </SectionWrap>
            }

            if let Some(quote) = &detail.quote {
                <SectionWrap backdrop={Backdrop::Charcoal} py={56}>
                    <PullQuote quote={quote.text} author={Some(AttrValue::from(quote.author))} />
                </SectionWrap>
            }

            <SectionWrap backdrop={Backdrop::Cream} py={48}>
                <div class="centered">
                    <Btn onclick={to_contact}>{detail.cta_label()}</Btn>
                </div>
            </SectionWrap>
        </>
    }
}
