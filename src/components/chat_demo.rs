//! Looping chat conversation inside a phone mockup.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::use_reduced_motion;
use crate::reveal::{chat_schedule, ChatStep};

struct ChatMessage {
    from_user: bool,
    text: &'static str,
}

const MESSAGES: &[ChatMessage] = &[
    ChatMessage {
        from_user: false,
        text: "Hello! I'm your AI business assistant. How can I help optimize your operations today?",
    },
    ChatMessage {
        from_user: true,
        text: "I need help automating our customer support workflow",
    },
    ChatMessage {
        from_user: false,
        text: "I can help with that! I'll analyze your current support tickets, identify common patterns, and suggest automation opportunities. Would you like me to start?",
    },
    ChatMessage {
        from_user: true,
        text: "Yes, please show me what you can do",
    },
    ChatMessage {
        from_user: false,
        text: "Perfect! I've identified 3 key areas: FAQ deflection (64% of tickets), intelligent routing, and automated follow-ups. Let me create a custom workflow for you.",
    },
];

/// Replays a scripted support conversation: a pause, a typing indicator,
/// then the next bubble, looping once the thread completes. With reduced
/// motion on the whole conversation is shown at once and nothing loops.
#[function_component(ChatDemo)]
pub fn chat_demo() -> Html {
    let reduced = use_reduced_motion();
    let visible = use_state(|| if reduced { MESSAGES.len() } else { 0 });
    let typing = use_state(|| false);

    {
        let deps = (*visible, reduced);
        let visible = visible.clone();
        let typing = typing.clone();
        use_effect_with_deps(
            move |&(current, reduced)| {
                // The lead timer hands off to a follow-up timer while the
                // indicator shows; both share one slot so unmounting in
                // either window cancels whatever is pending.
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

                if reduced {
                    // Preference can flip mid-conversation; show everything.
                    if current < MESSAGES.len() {
                        typing.set(false);
                        visible.set(MESSAGES.len());
                    }
                } else {
                    match chat_schedule(current, MESSAGES.len()) {
                        Some(ChatStep::Advance { lead_ms, typing_ms }) => {
                            let slot = pending.clone();
                            *pending.borrow_mut() = Some(Timeout::new(lead_ms, move || {
                                typing.set(true);
                                let visible = visible.clone();
                                let typing = typing.clone();
                                *slot.borrow_mut() = Some(Timeout::new(typing_ms, move || {
                                    typing.set(false);
                                    visible.set(current + 1);
                                }));
                            }));
                        }
                        Some(ChatStep::Reset { delay_ms }) => {
                            *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || {
                                typing.set(false);
                                visible.set(0);
                            }));
                        }
                        None => {}
                    }
                }

                move || drop(pending.borrow_mut().take())
            },
            deps,
        );
    }

    let bubbles = MESSAGES
        .iter()
        .take(*visible)
        .map(|msg| {
            let class = if msg.from_user {
                "chat-row chat-row-user"
            } else {
                "chat-row chat-row-ai"
            };
            html! {
                <div class={class}>
                    <div class="chat-bubble">{ msg.text }</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="chat-demo">
            <style>
                {r#"
                .chat-demo {
                    position: relative;
                    margin: 0 auto;
                    width: 100%;
                    max-width: 340px;
                }
                .chat-phone {
                    position: relative;
                    background: #1e293b;
                    border-radius: 24px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .chat-phone-button {
                    position: absolute;
                    width: 3px;
                    background: #334155;
                }
                .chat-phone-button.vol-up { left: -3px; top: 120px; height: 28px; border-radius: 0 2px 2px 0; }
                .chat-phone-button.vol-down { left: -3px; top: 160px; height: 28px; border-radius: 0 2px 2px 0; }
                .chat-phone-button.action { left: -3px; top: 200px; height: 50px; border-radius: 0 2px 2px 0; }
                .chat-phone-button.power { right: -3px; top: 180px; height: 70px; border-radius: 2px 0 0 2px; }
                .chat-island {
                    position: absolute;
                    top: 8px;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 10;
                    width: 120px;
                    height: 35px;
                    background: #000;
                    border-radius: 20px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 8px;
                }
                .chat-island span { border-radius: 50%; }
                .chat-island span:first-child { width: 10px; height: 10px; background: #1e293b; }
                .chat-island span:last-child { width: 8px; height: 8px; background: #0f172a; }
                .chat-screen {
                    background: #fff;
                    height: 640px;
                    display: flex;
                    flex-direction: column;
                }
                .chat-status-bar {
                    height: 50px;
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    padding: 0 24px 16px;
                    font-size: 15px;
                    font-weight: 600;
                    color: #0f172a;
                }
                .chat-header {
                    border-bottom: 1px solid #e2e8f0;
                    padding: 12px 16px;
                    display: flex;
                    align-items: center;
                    gap: 12px;
                }
                .chat-avatar {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #2DE0CB, #5B7CEF);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #fff;
                    font-size: 18px;
                }
                .chat-header-name { font-size: 0.875rem; font-weight: 600; color: #0f172a; }
                .chat-header-status { font-size: 0.75rem; color: #16a34a; }
                .chat-thread {
                    flex: 1;
                    overflow-y: auto;
                    padding: 16px;
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    background: #f8fafc;
                }
                .chat-row { display: flex; }
                .chat-row-user { justify-content: flex-end; }
                .chat-row-ai { justify-content: flex-start; }
                .chat-bubble {
                    max-width: 75%;
                    border-radius: 16px;
                    padding: 10px 16px;
                    font-size: 0.875rem;
                    animation: chat-bubble-in 0.3s ease-out;
                }
                .chat-row-user .chat-bubble {
                    background: #0f172a;
                    color: #fff;
                    border-bottom-right-radius: 2px;
                }
                .chat-row-ai .chat-bubble {
                    background: #fff;
                    color: #0f172a;
                    border: 1px solid #e2e8f0;
                    border-bottom-left-radius: 2px;
                }
                @keyframes chat-bubble-in {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .chat-typing {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    border-bottom-left-radius: 2px;
                    padding: 12px 16px;
                    display: flex;
                    gap: 4px;
                }
                .chat-typing span {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #94a3b8;
                    animation: chat-typing-pulse 1s ease-in-out infinite;
                }
                .chat-typing span:nth-child(2) { animation-delay: 0.2s; }
                .chat-typing span:nth-child(3) { animation-delay: 0.4s; }
                @keyframes chat-typing-pulse {
                    0%, 100% { opacity: 0.3; }
                    50% { opacity: 1; }
                }
                .chat-input {
                    border-top: 1px solid #e2e8f0;
                    padding: 12px 12px 24px;
                    display: flex;
                    align-items: center;
                    gap: 8px;
                }
                .chat-input-pill {
                    flex: 1;
                    background: #f1f5f9;
                    border-radius: 9999px;
                    padding: 8px 16px;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .chat-input button {
                    width: 32px;
                    height: 32px;
                    border-radius: 50%;
                    border: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: default;
                }
                .chat-input button.attach { background: #f1f5f9; color: #475569; }
                .chat-input button.send {
                    background: linear-gradient(90deg, #2DE0CB, #5B7CEF);
                    color: #fff;
                }
                @media (prefers-reduced-motion: reduce) {
                    .chat-bubble { animation: none; }
                    .chat-typing span { animation: none; opacity: 0.6; }
                }
                "#}
            </style>
            <div class="chat-phone">
                <div class="chat-phone-button vol-up"></div>
                <div class="chat-phone-button vol-down"></div>
                <div class="chat-phone-button action"></div>
                <div class="chat-phone-button power"></div>
                <div class="chat-island"><span></span><span></span></div>
                <div class="chat-screen">
                    <div class="chat-status-bar">
                        <div>{"9:41"}</div>
                        <div>{"📶"}</div>
                    </div>
                    <div class="chat-header">
                        <div class="chat-avatar">{"✦"}</div>
                        <div>
                            <div class="chat-header-name">{"Business Assistant"}</div>
                            <div class="chat-header-status">{"Online"}</div>
                        </div>
                    </div>
                    <div class="chat-thread">
                        { bubbles }
                        if *typing {
                            <div class="chat-row chat-row-ai">
                                <div class="chat-typing">
                                    <span></span><span></span><span></span>
                                </div>
                            </div>
                        }
                    </div>
                    <div class="chat-input">
                        <button class="attach">{"+"}</button>
                        <div class="chat-input-pill">{"Type your message..."}</div>
                        <button class="send">{"→"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Walks the same (visible, total) pairs the render effect re-runs with.
    #[test]
    fn script_schedule_advances_each_message_then_resets() {
        use crate::reveal::{CHAT_FIRST_DELAY_MS, CHAT_NEXT_DELAY_MS, CHAT_RESET_HOLD_MS};

        let total = MESSAGES.len();
        for visible in 0..total {
            let expected_lead = if visible == 0 {
                CHAT_FIRST_DELAY_MS
            } else {
                CHAT_NEXT_DELAY_MS
            };
            match chat_schedule(visible, total) {
                Some(ChatStep::Advance { lead_ms, .. }) => assert_eq!(lead_ms, expected_lead),
                other => panic!("expected an advance at {visible}, got {other:?}"),
            }
        }
        assert_eq!(
            chat_schedule(total, total),
            Some(ChatStep::Reset {
                delay_ms: CHAT_RESET_HOLD_MS
            })
        );
    }

    #[test]
    fn script_alternates_and_starts_with_the_assistant() {
        assert_eq!(MESSAGES.len(), 5);
        assert!(!MESSAGES[0].from_user);
        for pair in MESSAGES.windows(2) {
            assert_ne!(pair[0].from_user, pair[1].from_user);
        }
    }
}
