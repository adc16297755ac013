//! Scroll plumbing: smooth in-page navigation under a fixed navbar, the
//! scroll-spy that drives nav highlighting, and the "past the hero yet"
//! signal shared by the navbar backdrop and the back-to-top button.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollToOptions,
};
use yew::prelude::*;

/// Height of the fixed navbar; anchor targets land just below it.
pub const NAV_CLEARANCE_PX: f64 = 72.0;

/// A section counts as "in view" while it crosses the band between 20% from
/// the viewport top and 40% from the bottom.
const SPY_ROOT_MARGIN: &str = "-20% 0px -60% 0px";

/// Absolute scroll position for an element whose bounding rect starts at
/// `rect_top` while the page is scrolled to `scroll_y`.
pub fn scroll_target(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - NAV_CLEARANCE_PX
}

fn behavior_for(reduced_motion: bool) -> ScrollBehavior {
    if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

fn scroll_window_to(top: f64, reduced_motion: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(behavior_for(reduced_motion));
    window.scroll_to_with_scroll_to_options(&options);
}

/// Scroll to the section with the given id (a leading `#` is accepted).
/// Unknown ids are a silent no-op; every anchor on this page is deployed
/// together with the nav that points at it.
pub fn navigate_to(section_id: &str, reduced_motion: bool) {
    let id = section_id.trim_start_matches('#');
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = scroll_target(element.get_bounding_client_rect().top(), scroll_y);
    scroll_window_to(top, reduced_motion);
}

pub fn scroll_to_top(reduced_motion: bool) {
    scroll_window_to(0.0, reduced_motion);
}

/// Scroll-spy over every `section[id]` on the page. Reports the id of the
/// most recently intersecting section; the value is sticky while nothing
/// intersects the activation band. Starts out empty. If the environment has
/// no `IntersectionObserver` the value simply never updates.
#[hook]
pub fn use_active_section() -> String {
    let active = use_state(String::new);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let mut watcher: Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>)> =
                    None;

                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                // Last write in the batch wins; no priority
                                // between simultaneously visible sections.
                                active.set(entry.target().id());
                            }
                        }
                    })
                        as Box<dyn FnMut(js_sys::Array)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(SPY_ROOT_MARGIN);

                    if let Ok(observer) = IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        if let Ok(sections) = document.query_selector_all("section[id]") {
                            for index in 0..sections.length() {
                                if let Some(section) =
                                    sections.item(index).and_then(|n| n.dyn_into().ok())
                                {
                                    observer.observe(&section);
                                }
                            }
                        }
                        watcher = Some((observer, callback));
                    }
                }

                move || {
                    if let Some((observer, _callback)) = watcher {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    (*active).clone()
}

/// True once the hero section's bottom edge has scrolled above the viewport.
#[hook]
pub fn use_past_hero() -> bool {
    let past = use_state(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |_| {
                let check = {
                    let past = past.clone();
                    move || {
                        let hero = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|d| d.get_element_by_id("hero"));
                        if let Some(hero) = hero {
                            past.set(hero.get_bounding_client_rect().bottom() < 0.0);
                        }
                    }
                };

                // Initial state, before the first scroll event arrives.
                check();

                let listener = web_sys::window().and_then(|window| {
                    let callback =
                        Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .ok()?;
                    Some((window, callback))
                });

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *past
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_clears_the_fixed_navbar() {
        assert_eq!(scroll_target(400.0, 0.0), 328.0);
        assert_eq!(scroll_target(120.5, 1000.0), 120.5 + 1000.0 - 72.0);
    }

    #[test]
    fn target_above_the_fold_can_go_negative() {
        // The browser clamps; the math stays honest.
        assert_eq!(scroll_target(10.0, 0.0), -62.0);
    }
}
