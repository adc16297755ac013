use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod i18n;
mod motion;
mod reveal;
mod scroll;
mod components {
    pub mod backgrounds;
    pub mod chat_demo;
    pub mod scroll_top;
    pub mod terminal;
}
mod pages {
    pub mod landing;
}

use i18n::Lang;
use motion::{use_motion_preference, use_reduced_motion, MotionPreference};
use pages::landing::Landing;
use scroll::navigate_to;

/// Every `section[id]` the page renders, in document order.
pub const SECTION_IDS: &[&str] = &[
    "hero",
    "logos",
    "solutions",
    "services",
    "demo",
    "about",
    "integrations",
    "use-cases",
    "security",
    "cases",
    "testimonials",
    "faq",
    "contact",
];

/// The subset of sections the navbar links to, in menu order.
pub const NAV_HASHES: &[&str] = &[
    "solutions",
    "demo",
    "about",
    "integrations",
    "security",
    "cases",
];

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub language: Lang,
    pub on_language_toggle: Callback<()>,
    pub active_section: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let t = &i18n::translations(props.language).nav;
    let reduced = use_reduced_motion();
    let scrolled = scroll::use_past_hero();
    let menu_open = use_state(|| false);

    // Close the overlay menu if the viewport grows into the desktop layout
    // while it is open.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let callback = Closure::wrap(Box::new(move || {
                        let wide = web_sys::window()
                            .and_then(|w| w.inner_width().ok())
                            .and_then(|v| v.as_f64())
                            .map(|w| w >= 768.0)
                            .unwrap_or(false);
                        if wide {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .ok()?;
                    Some((window, callback))
                });
                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let labels = [
        t.solutions,
        t.live_demo,
        t.about_us,
        t.integrations,
        t.security,
        t.outcomes,
    ];

    let nav_link = |hash: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let active = props.active_section == hash;
        let onclick = Callback::from(move |_| {
            navigate_to(hash, reduced);
            menu_open.set(false);
        });
        html! {
            <button
                class={classes!("nav-link", active.then_some("active"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    let toggle_language = {
        let on_language_toggle = props.on_language_toggle.clone();
        Callback::from(move |_| on_language_toggle.emit(()))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let book_demo = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            navigate_to("contact", reduced);
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    height: 72px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 24px;
                    border-bottom: 1px solid transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                }
                .navbar.scrolled {
                    background: rgba(10, 14, 20, 0.85);
                    backdrop-filter: blur(12px);
                    border-bottom-color: rgba(255, 255, 255, 0.08);
                }
                .navbar-brand {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    background: linear-gradient(90deg, #2DE0CB, #5B7CEF);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    cursor: pointer;
                }
                .navbar-links {
                    display: flex;
                    align-items: center;
                    gap: 4px;
                }
                .nav-link {
                    background: none;
                    border: none;
                    padding: 8px 12px;
                    border-radius: 8px;
                    font-size: 0.875rem;
                    color: #94a3b8;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: #fff; }
                .nav-link.active { color: #2DE0CB; }
                .navbar-actions {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                }
                .lang-toggle {
                    background: none;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    border-radius: 8px;
                    padding: 6px 10px;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #cbd5e1;
                    cursor: pointer;
                }
                .lang-toggle:hover { border-color: #5B7CEF; }
                .nav-cta {
                    border: none;
                    border-radius: 8px;
                    padding: 8px 16px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    background: linear-gradient(90deg, #2DE0CB, #5B7CEF);
                    color: #0A0E14;
                    cursor: pointer;
                }
                .nav-burger {
                    display: none;
                    background: none;
                    border: none;
                    color: #cbd5e1;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .navbar-menu { display: none; }
                @media (max-width: 767px) {
                    .navbar-links, .nav-cta { display: none; }
                    .nav-burger { display: block; }
                    .navbar-menu.open {
                        display: flex;
                        flex-direction: column;
                        position: fixed;
                        top: 72px;
                        left: 0;
                        right: 0;
                        background: rgba(10, 14, 20, 0.97);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 16px 24px 24px;
                        gap: 4px;
                    }
                    .navbar-menu .nav-link { text-align: left; padding: 12px; }
                    .navbar-menu .nav-cta { display: block; margin-top: 12px; }
                }
                "#}
            </style>
            <div class="navbar-brand" onclick={{
                let menu_open = menu_open.clone();
                Callback::from(move |_| {
                    scroll::scroll_to_top(reduced);
                    menu_open.set(false);
                })
            }}>
                {"YUYAY"}
            </div>
            <div class="navbar-links">
                { for NAV_HASHES.iter().copied().zip(labels).map(|(hash, label)| nav_link(hash, label)) }
            </div>
            <div class="navbar-actions">
                <button class="lang-toggle" onclick={toggle_language.clone()}>
                    { props.language.toggle_label() }
                </button>
                <button class="nav-cta" onclick={book_demo.clone()}>{ t.book_demo }</button>
                <button class="nav-burger" onclick={toggle_menu} aria-label="Menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class={classes!("navbar-menu", menu_open.then_some("open"))}>
                { for NAV_HASHES.iter().copied().zip(labels).map(|(hash, label)| nav_link(hash, label)) }
                <button class="nav-cta" onclick={book_demo}>{ t.book_demo }</button>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let motion = use_motion_preference();
    let language = use_state(|| Lang::En);

    let on_language_toggle = {
        let language = language.clone();
        Callback::from(move |_| {
            let next = language.toggled();
            info!("switching language to {}", next.code());
            language.set(next);
        })
    };

    html! {
        <ContextProvider<MotionPreference> context={motion}>
            <Landing language={*language} {on_language_toggle} />
        </ContextProvider<MotionPreference>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing logger");
    info!("starting app");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique() {
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
    }

    #[test]
    fn every_nav_hash_has_a_section() {
        for hash in NAV_HASHES {
            assert!(SECTION_IDS.contains(hash), "no section for nav hash {hash}");
        }
    }

    #[test]
    fn nav_labels_match_nav_hashes() {
        // One label per menu entry, in both languages.
        for lang in [Lang::En, Lang::Es] {
            let t = &i18n::translations(lang).nav;
            let labels = [
                t.solutions,
                t.live_demo,
                t.about_us,
                t.integrations,
                t.security,
                t.outcomes,
            ];
            assert_eq!(labels.len(), NAV_HASHES.len());
        }
    }
}
