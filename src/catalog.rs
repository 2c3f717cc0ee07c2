//! Offer data. The four service detail pages are rendered from these records
//! by one template; the hub cards point at them.

use crate::navigation::Page;
use crate::theme;

pub const DEFAULT_CTA: &str = "let's do this →";

#[derive(Debug, PartialEq)]
pub struct Fit {
    pub perfect: &'static [&'static str],
    pub not_fit: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceDetail {
    pub price: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub problem: &'static str,
    pub what_intro: &'static str,
    pub includes: &'static [&'static str],
    pub timeline: &'static [&'static str],
    pub process: &'static [&'static str],
    pub fit: Option<Fit>,
    pub different: Option<&'static str>,
    pub quote: Option<Quote>,
    pub cta: Option<&'static str>,
}

impl ServiceDetail {
    pub fn cta_label(&self) -> &'static str {
        self.cta.unwrap_or(DEFAULT_CTA)
    }
}

pub fn service_detail(page: Page) -> Option<&'static ServiceDetail> {
    match page {
        Page::Audit => Some(&AUDIT),
        Page::Implementation => Some(&IMPLEMENTATION),
        Page::Fractional => Some(&FRACTIONAL),
        Page::Corporate => Some(&CORPORATE),
        _ => None,
    }
}

pub static AUDIT: ServiceDetail = ServiceDetail {
    price: "$350",
    title: "the brand experience audit",
    subtitle: "the deep dive",
    problem: "you know something's not working, but you can't quite put your finger on it. maybe it's clients asking the same questions over and over, all your income coming from one source and that starting to feel really risky, everyone telling you to \"build your email list\" but you haven't because overwhelm, or spending hours on admin tasks that should take 10 minutes. you can't fix what you can't see clearly. and you definitely can't scale what's barely holding together right now.",
    what_intro: "a no-bs audit of your entire client journey & backend systems, delivered in a detailed loom walkthrough + written action plan.",
    includes: &[
        "deep dive into your current client experience (from inquiry to offboarding)",
        "analysis of your backend systems (or lack thereof)",
        "revenue stream evaluation & expansion opportunities",
        "identification of what's working, what's broken, and what's missing",
        "prioritized recommendations (because \"do everything\" isn't a strategy)",
        "30-minute debrief call to walk through findings & answer questions",
    ],
    timeline: &["timeline: 1 week", "investment: $350"],
    process: &[
        "you fill out the intake form — tell me what's going on, what you've tried, where you're stuck",
        "i audit everything — client touchpoints, automation, workflows, templates, revenue streams, the whole backend",
        "you get a loom walkthrough — i walk you through exactly what i found & why it matters",
        "we debrief — 30-minute call to answer questions & prioritize next steps",
    ],
    fit: Some(Fit {
        perfect: &[
            "know your backend is a mess but don't know where to start",
            "want an outside perspective before investing in a full buildout",
            "are DIY-ing your systems but keep getting stuck",
            "need validation that you're not crazy for thinking things could be better",
            "are considering expanding income streams but need strategic direction",
        ],
        not_fit: &[
            "want someone to just build it for you (that's the full implementation)",
            "aren't ready to actually implement changes",
            "are looking for a \"quick fix\" without putting in any work",
        ],
    }),
    different: None,
    quote: None,
    cta: Some("let's do this →"),
};

pub static IMPLEMENTATION: ServiceDetail = ServiceDetail {
    price: "starting at $1.5k",
    title: "the brand experience",
    subtitle: "full implementation — everyone starts with the audit",
    problem: "you're really good at what you do. but every time you bring on a new client, you're copying & pasting from 17 different google docs, forgetting to send that one email, manually doing tasks that should be automated, and feeling like your business owns you instead of the other way around. they don't have more time. they just have better systems.",
    what_intro: "the \"do it for me\" option. i build your entire brand experience & backend systems from scratch—or burn down what's not working and rebuild it properly.",
    includes: &[
        "the audit (we always start here—no skipping)",
        "full client journey mapping (inquiry → onboarding → delivery → offboarding)",
        "custom workflows & automation",
        "templates for every client touchpoint (emails, contracts, welcome guides, questionnaires)",
        "revenue expansion strategy & income stream planning",
        "email marketing setup & strategy",
        "event/community coordination systems",
        "notion workspace setup (or whatever platform fits your brain)",
        "loom walkthrough of how everything works",
        "2 weeks of post-launch support",
    ],
    timeline: &["timeline: 3-4 weeks", "starting at $1.5k"],
    process: &[
        "we start with the audit — gotta know what we're working with",
        "strategy session — we map out your ideal client journey, revenue expansion & backend setup",
        "i build everything — you get async updates, i ask clarifying questions, you live your life",
        "walkthrough & training — i show you how everything works (via loom + live call)",
        "post-launch support — 2 weeks of 'hey quick question' access while you settle in",
    ],
    fit: Some(Fit {
        perfect: &[
            "don't have the time (or desire) to DIY your systems",
            "want a client experience that feels professional without feeling sterile",
            "are ready to invest in your business infrastructure",
            "value your time more than saving a few hundred bucks",
            "are ready to expand beyond your current revenue model",
        ],
        not_fit: &[
            "just want templates you can plug & play",
            "aren't ready to invest at this level",
            "want to control every single detail of the buildout",
        ],
    }),
    different: Some("i'm not handing you a template and calling it custom. i'm building something that works with your brain (not against it), doesn't require you to change who you are, your clients will feel (in the best way), you can maintain without hiring a VA, and supports multiple income streams without multiplying your workload. the goal isn't to make your business look good. it's to make it feel sustainable."),
    quote: None,
    cta: Some("let's start with the audit →"),
};

pub static FRACTIONAL: ServiceDetail = ServiceDetail {
    price: "$2,200/month · 3 clients/quarter max",
    title: "fractional consulting",
    subtitle: "your business bestie who actually knows what they're talking about",
    problem: "you don't need a full-time consultant or an agency retainer. but you do need someone who gets it, a second brain for the strategic stuff, accountability that doesn't feel like shame, troubleshooting help when things break, permission to do things differently, and support while you figure out new income streams or plan that first event. basically, you need a business bestie who actually knows what they're talking about.",
    what_intro: "ongoing support without the agency retainer or the \"you're on your own\" vibe of a one-off project.",
    includes: &[
        "monthly 90-minute strategy sessions (via zoom or loom, your choice)",
        "async access via slack or email for quick questions",
        "support for whatever you're working on: expanding income streams, launching that email list, planning events, building systems",
        "system audits & optimization as needed",
        "accountability check-ins (the kind that feel supportive, not judgey)",
        "access to my templates, frameworks, and resources",
    ],
    timeline: &["minimum 3-month commitment", "$2,200/month"],
    process: &[
        "application — tell me what's going on, what you need, what you've tried",
        "intro call — let's make sure we're a good fit (chemistry matters)",
        "kickoff — we set goals, establish communication rhythms, and map out priorities",
        "monthly sessions — we strategize, troubleshoot, optimize, repeat",
        "async support — you send questions, i respond within 48 hours (business days)",
    ],
    fit: Some(Fit {
        perfect: &[
            "are past the \"just getting started\" phase but not at the \"hire a full team\" phase",
            "want strategic support, not just task execution",
            "value having someone in your corner who sees the full picture",
            "are implementing systems but need guidance & accountability",
            "are exploring new revenue streams and want strategic input",
        ],
        not_fit: &[
            "need someone to execute tasks for you (this is consulting, not a VA service)",
            "want instant responses 24/7",
            "aren't ready to commit to at least 3 months",
        ],
    }),
    different: Some("i'm not here to tell you what you \"should\" be doing. i'm here to help you build a business that actually works for your life. no shame if you didn't do the thing you said you'd do. no cookie-cutter advice. systems designed for your brain. support that feels like texting a friend who gets it. sustainable growth > hustle culture every single time."),
    quote: Some(Quote {
        text: "Taking on a client is easy. Taking on the right client is an investment.",
        author: "seth godin",
    }),
    cta: Some("apply now →"),
};

pub static CORPORATE: ServiceDetail = ServiceDetail {
    price: "custom pricing",
    title: "workshops & training for corporate teams",
    subtitle: "leadership development that doesn't feel like corporate theater",
    problem: "your team engagement scores are... not great. your managers are drowning in admin work, firefighting constantly, and heading toward burnout. onboarding is basically \"here's your login, figure it out.\" you rolled out a new platform 6 months ago and adoption is sitting at 30%. sound familiar? i've been there. led teams through it. burned out from it. then figured out how to fix it.",
    what_intro: "workshops & training programs that actually create change—not just check a box on someone's quarterly goals.",
    includes: &[
        "building high-performing teams without micromanaging (8.9+/10 engagement scores)",
        "platform adoption that actually sticks (94-96% adoption rates)",
        "energy management for leaders (you can't time-manage your way out of burnout)",
        "custom programs designed for your team's specific challenges",
        "certified asana ambassador & notion expert credentials",
    ],
    timeline: &["custom program design", "ongoing consulting available"],
    process: &[
        "discovery call — what's going on, what've you tried, what does success look like",
        "proposal — custom program design based on your needs",
        "delivery — workshop, training series, or ongoing consulting",
        "follow-up — because real change doesn't happen in a 2-hour session",
    ],
    fit: Some(Fit {
        perfect: &[
            "are tired of workshops that feel like corporate theater",
            "want actionable strategies, not just motivational speeches",
            "value retention & engagement over \"just hire more people\"",
            "need someone who's actually done this (not just read about it)",
        ],
        not_fit: &[
            "want a one-hour motivational talk with no substance",
            "aren't ready to actually implement changes",
            "are looking for the cheapest option",
        ],
    }),
    different: Some("i'm currently leading teams across 8 global regions while building a fractional consulting business on a 4-day work week. but i didn't start here. i started checking teams at 10pm, working weekends, and thinking that's just what good leaders do. i burned out. then i rebuilt everything. this isn't theory. this is what actually works."),
    quote: None,
    cta: Some("let's talk →"),
};

/// A clickable offer card on the home page or services hub.
#[derive(Debug, PartialEq)]
pub struct ServiceCard {
    pub num: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub body: &'static str,
    pub target: Page,
    pub tint: &'static str,
}

pub static CREATOR_SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        num: "01",
        title: "the brand experience audit",
        price: "$350",
        body: "an unbiased look at your current client journey, backend systems, revenue streams, and where things are breaking down. detailed action plan + priority recommendations.",
        target: Page::Audit,
        tint: theme::PINK_SOFT,
    },
    ServiceCard {
        num: "02",
        title: "the brand experience (full implementation)",
        price: "starting at $1.5k",
        body: "the \"do it for me\" option. we start with the audit, then i build your entire backend—client onboarding, workflows, automation, templates, email marketing, the whole thing.",
        target: Page::Implementation,
        tint: theme::OCEAN_LIGHT,
    },
    ServiceCard {
        num: "03",
        title: "fractional consulting",
        price: "limited spots",
        body: "ongoing support without the agency retainer. think: a business bestie who actually knows what they're talking about. monthly strategy sessions + async access.",
        target: Page::Fractional,
        tint: theme::LAVENDER_LIGHT,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_four_pages_use_the_detail_template() {
        let detailed: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|&page| service_detail(page).is_some())
            .collect();
        assert_eq!(
            detailed,
            vec![Page::Audit, Page::Implementation, Page::Fractional, Page::Corporate]
        );
    }

    #[test]
    fn audit_record_carries_its_badge_and_title() {
        let audit = service_detail(Page::Audit).unwrap();
        assert_eq!(audit.price, "$350");
        assert_eq!(audit.title, "the brand experience audit");
    }

    #[test]
    fn every_record_is_complete_enough_to_render() {
        for page in [Page::Audit, Page::Implementation, Page::Fractional, Page::Corporate] {
            let detail = service_detail(page).unwrap();
            assert!(!detail.price.is_empty(), "{}", page);
            assert!(!detail.title.is_empty(), "{}", page);
            assert!(!detail.problem.is_empty(), "{}", page);
            assert!(!detail.includes.is_empty(), "{}", page);
            assert!(!detail.process.is_empty(), "{}", page);
        }
    }

    #[test]
    fn cta_falls_back_to_default() {
        let detail = ServiceDetail {
            price: "",
            title: "",
            subtitle: "",
            problem: "",
            what_intro: "",
            includes: &[],
            timeline: &[],
            process: &[],
            fit: None,
            different: None,
            quote: None,
            cta: None,
        };
        assert_eq!(detail.cta_label(), DEFAULT_CTA);
        assert_eq!(FRACTIONAL.cta_label(), "apply now →");
    }

    #[test]
    fn only_fractional_has_a_quote() {
        assert!(FRACTIONAL.quote.is_some());
        assert!(AUDIT.quote.is_none());
        assert!(IMPLEMENTATION.quote.is_none());
        assert!(CORPORATE.quote.is_none());
    }

    #[test]
    fn creator_offers_link_to_detail_pages() {
        for offer in &CREATOR_SERVICES {
            assert!(service_detail(offer.target).is_some(), "{}", offer.title);
        }
        assert_eq!(CREATOR_SERVICES[0].price, AUDIT.price);
    }
}
