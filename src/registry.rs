use log::trace;
use yew::prelude::*;

use crate::catalog::service_detail;
use crate::navigation::Page;
use crate::pages::{
    about::About, contact::Contact, home::Home, not_found::NotFound, resources::Resources,
    service_detail::ServiceDetailPage, services::Services,
};

/// Content for the main region. Every page has exactly one view.
pub fn resolve(page: Page) -> Html {
    trace!("Rendering {} page", page);
    match page {
        Page::Home => html! { <Home /> },
        Page::Services => html! { <Services /> },
        Page::Audit | Page::Implementation | Page::Fractional | Page::Corporate => {
            match service_detail(page) {
                Some(detail) => html! { <ServiceDetailPage key={page.id()} detail={detail} /> },
                None => html! { <NotFound /> },
            }
        }
        Page::About => html! { <About /> },
        Page::Resources => html! { <Resources /> },
        Page::Contact => html! { <Contact /> },
        Page::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_resolves_to_a_component() {
        for page in Page::ALL {
            assert!(matches!(resolve(page), Html::VComp(_)), "{}", page);
        }
    }

    #[test]
    fn unknown_ids_land_on_the_fallback_view() {
        let page = Page::resolve_id("pricing");
        assert_eq!(page, Page::NotFound);
        assert!(matches!(resolve(page), Html::VComp(_)));
    }
}
