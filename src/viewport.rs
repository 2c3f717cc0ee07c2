use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;
use yew_hooks::use_window_size;

/// Past this offset the header switches to its solid, shorter look.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Widths at or below this get the burger menu instead of the inline nav.
pub const COMPACT_BREAKPOINT: f64 = 768.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD
}

pub fn is_compact(width: f64) -> bool {
    width <= COMPACT_BREAKPOINT
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
        .max(0.0)
}

/// Whether the document is scrolled past [`SCROLLED_THRESHOLD`]. Every scroll
/// event is read, but the caller only re-renders when the answer flips.
/// The listener lives exactly as long as the calling component.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| is_scrolled(current_scroll_y()));

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || scrolled.set(is_scrolled(current_scroll_y()))
                    });

                    let options = AddEventListenerOptions::new();
                    options.set_passive(true);
                    if let Err(e) = window
                        .add_event_listener_with_callback_and_add_event_listener_options(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                            &options,
                        )
                    {
                        warn!("Could not attach scroll listener: {:?}", e);
                    }
                    // Pick up any scroll that happened before the listener existed.
                    scrolled.set(is_scrolled(current_scroll_y()));

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    *scrolled
}

#[hook]
pub fn use_compact_layout() -> bool {
    let (width, _) = use_window_size();
    is_compact(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_strictly_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn scrolled_follows_the_last_reported_offset() {
        let reports = [0.0, 120.0, 30.0, 51.0, 0.0];
        let states: Vec<bool> = reports.iter().map(|&y| is_scrolled(y)).collect();
        assert_eq!(states, vec![false, true, false, true, false]);
    }

    #[test]
    fn a_long_gesture_flips_the_signal_only_at_the_threshold() {
        // 0, 8, 16, ... 400 and back down again.
        let down = (0..=50).map(|i| f64::from(i) * 8.0);
        let up = (0..=50).rev().map(|i| f64::from(i) * 8.0);
        let mut current = false;
        let mut flips = 0;
        for offset in down.chain(up) {
            let next = is_scrolled(offset);
            if next != current {
                flips += 1;
                current = next;
            }
        }
        assert_eq!(flips, 2);
        assert!(!current);
    }

    #[test]
    fn compact_breakpoint_is_inclusive() {
        assert!(is_compact(375.0));
        assert!(is_compact(768.0));
        assert!(!is_compact(769.0));
        assert!(!is_compact(1440.0));
    }
}
