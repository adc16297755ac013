use yew::prelude::*;

use crate::motion::use_reduced_motion;
use crate::scroll::{scroll_to_top, use_past_hero};

/// Floating back-to-top button, mounted only once the hero has scrolled out.
#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_past_hero();
    let reduced = use_reduced_motion();

    if !visible {
        return Html::default();
    }

    let onclick = Callback::from(move |_| scroll_to_top(reduced));

    html! {
        <button class="scroll-top" {onclick} aria-label="Scroll to top">
            <style>
                {r#"
                .scroll-top {
                    position: fixed;
                    bottom: 32px;
                    right: 32px;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(10, 14, 20, 0.8);
                    backdrop-filter: blur(8px);
                    color: #cbd5e1;
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                .scroll-top:hover {
                    background: rgba(25, 35, 51, 0.8);
                    color: #fff;
                }
                "#}
            </style>
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <polyline points="18 15 12 9 6 15"></polyline>
            </svg>
        </button>
    }
}
