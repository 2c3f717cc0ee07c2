use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const DEFAULT_THRESHOLD: f64 = 0.08;

/// One-way latch: `Unseen` flips to `Seen` on the first qualifying
/// intersection and stays there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Unseen,
    Seen,
}

impl Visibility {
    /// Feeds one intersection report into the latch. Returns true only for
    /// the report that caused the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (Visibility::Unseen, true) => {
                *self = Visibility::Seen;
                true
            }
            _ => false,
        }
    }

    pub fn is_seen(self) -> bool {
        self == Visibility::Seen
    }
}

/// Observer thresholds must be ratios; anything else gets the default.
pub fn effective_threshold(threshold: f64) -> f64 {
    if (0.0..=1.0).contains(&threshold) {
        threshold
    } else {
        DEFAULT_THRESHOLD
    }
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Whether the referenced element has ever been on screen with at least
/// `threshold` of its area visible. The observer is dropped as soon as the
/// latch fires or the component goes away, whichever comes first.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let threshold = effective_threshold(threshold);
    let latch = use_mut_ref(|| {
        if prefers_reduced_motion() {
            Visibility::Seen
        } else {
            Visibility::Unseen
        }
    });
    let seen = use_state({
        let latch = latch.clone();
        move || latch.borrow().is_seen()
    });

    {
        let latch = latch.clone();
        let seen = seen.clone();
        use_effect_with_deps(
            move |(node, threshold)| {
                let mut destructor: Box<dyn FnOnce()> = Box::new(|| ());

                if !latch.borrow().is_seen() {
                    if let Some(element) = node.cast::<Element>() {
                        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
                            let latch = latch.clone();
                            let seen = seen.clone();
                            let element = element.clone();
                            move |entries: Array, observer: IntersectionObserver| {
                                let intersecting = entries.iter().any(|entry| {
                                    entry
                                        .dyn_into::<IntersectionObserverEntry>()
                                        .map(|entry| entry.is_intersecting())
                                        .unwrap_or(false)
                                });
                                if latch.borrow_mut().observe(intersecting) {
                                    debug!("Element entered the viewport, revealing");
                                    observer.unobserve(&element);
                                    seen.set(true);
                                }
                            }
                        });

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(*threshold));

                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                destructor = Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                });
                            }
                            Err(e) => {
                                // No observer support: show the content instead of hiding it forever.
                                warn!("IntersectionObserver unavailable: {:?}", e);
                                latch.borrow_mut().observe(true);
                                seen.set(true);
                            }
                        }
                    }
                }

                move || destructor()
            },
            (node, threshold),
        );
    }

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_thresholds_fall_back() {
        assert_eq!(effective_threshold(0.05), 0.05);
        assert_eq!(effective_threshold(1.0), 1.0);
        assert_eq!(effective_threshold(1.5), DEFAULT_THRESHOLD);
        assert_eq!(effective_threshold(-0.1), DEFAULT_THRESHOLD);
        assert_eq!(effective_threshold(f64::NAN), DEFAULT_THRESHOLD);
    }

    #[test]
    fn starts_unseen() {
        assert!(!Visibility::default().is_seen());
    }

    #[test]
    fn misses_do_not_trip_the_latch() {
        let mut latch = Visibility::Unseen;
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert_eq!(latch, Visibility::Unseen);
    }

    #[test]
    fn first_hit_transitions_exactly_once() {
        let mut latch = Visibility::Unseen;
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(true));
        assert!(latch.is_seen());
    }

    #[test]
    fn seen_survives_leaving_the_viewport() {
        let mut latch = Visibility::Unseen;
        let reports = [false, true, false, false, true, false];
        let mut transitions = 0;
        for intersecting in reports {
            if latch.observe(intersecting) {
                transitions += 1;
            }
            if transitions > 0 {
                assert!(latch.is_seen());
            }
        }
        assert_eq!(transitions, 1);
        assert!(latch.is_seen());
    }
}
