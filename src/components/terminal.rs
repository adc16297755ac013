//! Scripted terminal mockup for the live-demo section.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::{is_mobile_viewport, use_reduced_motion};
use crate::reveal::{typewriter_step, TypewriterStep};

const SCRIPT: &str = "$ yuyay agents upgrade --env=prod > Checking versioning, pulling latest...\n\n> Integrations connected: CRM, Billing API, Knowledge Hub, Observability...";

/// Types the deployment script out one character at a time, holds the result
/// for a few seconds and starts over. Small viewports get a single pass, and
/// with reduced motion on the full text renders immediately.
#[function_component(MockTerminal)]
pub fn mock_terminal() -> Html {
    let reduced = use_reduced_motion();
    let total = SCRIPT.chars().count();
    let shown = use_state(|| if reduced { total } else { 0 });

    {
        let deps = (*shown, reduced);
        let shown = shown.clone();
        use_effect_with_deps(
            move |&(current, reduced)| {
                let timer = if reduced {
                    // Preference can flip mid-reveal; snap to the full text.
                    if current < total {
                        shown.set(total);
                    }
                    None
                } else {
                    typewriter_step(current, total, is_mobile_viewport()).map(|step| match step {
                        TypewriterStep::Reveal { delay_ms, shown: next } => {
                            let shown = shown.clone();
                            Timeout::new(delay_ms, move || shown.set(next))
                        }
                        TypewriterStep::Restart { delay_ms } => {
                            let shown = shown.clone();
                            Timeout::new(delay_ms, move || shown.set(0))
                        }
                    })
                };
                // Dropping the handle cancels the pending callback.
                move || drop(timer)
            },
            deps,
        );
    }

    let text: String = SCRIPT.chars().take(*shown).collect();
    let typing = *shown < total;

    html! {
        <div class="mock-terminal">
            <style>
                {r#"
                .mock-terminal {
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    background: #0B1220;
                    padding: 16px;
                }
                .mock-terminal-dots {
                    display: flex;
                    gap: 4px;
                    margin-bottom: 12px;
                }
                .mock-terminal-dots span {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                }
                .mock-terminal-dots span:nth-child(1) { background: rgba(248, 113, 113, 0.7); }
                .mock-terminal-dots span:nth-child(2) { background: rgba(253, 224, 71, 0.7); }
                .mock-terminal-dots span:nth-child(3) { background: rgba(74, 222, 128, 0.7); }
                .mock-terminal pre {
                    margin: 0;
                    white-space: pre-wrap;
                    font-size: 0.75rem;
                    line-height: 1.6;
                    color: #cbd5e1;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                }
                .mock-terminal-cursor {
                    display: inline-block;
                    width: 6px;
                    height: 14px;
                    margin-left: 2px;
                    background: #cbd5e1;
                    vertical-align: text-bottom;
                    animation: terminal-blink 1s ease-in-out infinite;
                }
                @keyframes terminal-blink {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.2; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .mock-terminal-cursor { animation: none; }
                }
                "#}
            </style>
            <div class="mock-terminal-dots">
                <span></span><span></span><span></span>
            </div>
            <pre>
                { text }
                if typing {
                    <span class="mock-terminal-cursor"></span>
                }
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{TYPE_CHAR_DELAY_MS, TYPE_RESTART_HOLD_MS};

    // Walks the same (shown, total) pairs the render effect re-runs with.
    #[test]
    fn script_schedule_advances_one_char_then_restarts() {
        let total = SCRIPT.chars().count();
        assert!(total > 0);
        assert_eq!(
            typewriter_step(0, total, false),
            Some(TypewriterStep::Reveal {
                delay_ms: TYPE_CHAR_DELAY_MS,
                shown: 1
            })
        );
        assert_eq!(
            typewriter_step(total, total, false),
            Some(TypewriterStep::Restart {
                delay_ms: TYPE_RESTART_HOLD_MS
            })
        );
        assert_eq!(typewriter_step(total, total, true), None);
    }
}
