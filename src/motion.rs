//! Reduced-motion gate.
//!
//! One process-wide boolean read from the OS accessibility preference and
//! kept live through a media-query subscription. It is provided once at the
//! app root via a `ContextProvider` and consumed read-only by every animated
//! component; nothing else writes it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

use crate::reveal::MOBILE_BREAKPOINT_PX;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MotionPreference {
    pub reduced: bool,
}

fn media_matches(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok()?
}

/// Snapshot of the preference. Environments without `matchMedia` get the
/// animated branch.
pub fn prefers_reduced_motion() -> bool {
    media_matches(REDUCED_MOTION_QUERY)
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Whether the viewport currently counts as mobile for the demo widgets.
pub fn is_mobile_viewport() -> bool {
    media_matches(&format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX))
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Owns the media-query subscription. Call once, at the app root, and hand
/// the value down through context.
#[hook]
pub fn use_motion_preference() -> MotionPreference {
    let reduced = use_state(prefers_reduced_motion);

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = media_matches(REDUCED_MOTION_QUERY).and_then(|mql| {
                    let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                        reduced.set(event.matches());
                    })
                        as Box<dyn FnMut(MediaQueryListEvent)>);
                    mql.add_event_listener_with_callback(
                        "change",
                        callback.as_ref().unchecked_ref(),
                    )
                    .ok()?;
                    Some((mql, callback))
                });

                move || {
                    if let Some((mql, callback)) = subscription {
                        let _ = mql.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    MotionPreference { reduced: *reduced }
}

/// Read the gate from context. Components rendered outside the provider
/// (tests, detached mounts) fall back to the animated branch.
#[hook]
pub fn use_reduced_motion() -> bool {
    use_context::<MotionPreference>().unwrap_or_default().reduced
}
