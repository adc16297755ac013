//! Timed-reveal scheduling for the fake "live" demos.
//!
//! The widgets (mock terminal, chat mockup) own their `gloo_timers` handles;
//! everything time-related is decided here so the pacing can be unit tested
//! without a browser. Each widget instance is independent and its pending
//! timer is dropped (cancelled) when the owning component unmounts.

/// Per-character delay for the terminal typing effect.
pub const TYPE_CHAR_DELAY_MS: u32 = 30;
/// How long the finished terminal output stays on screen before clearing.
pub const TYPE_RESTART_HOLD_MS: u32 = 5_000;
/// Below this viewport width the terminal types out once and stops.
pub const MOBILE_BREAKPOINT_PX: u32 = 840;

/// Delay before the very first chat message starts "typing".
pub const CHAT_FIRST_DELAY_MS: u32 = 500;
/// Thinking pause before each subsequent message.
pub const CHAT_NEXT_DELAY_MS: u32 = 2_000;
/// How long the typing indicator shows before the message lands.
pub const CHAT_TYPING_MS: u32 = 1_500;
/// How long the full conversation stays on screen before the thread clears.
pub const CHAT_RESET_HOLD_MS: u32 = 3_000;

/// Where a reveal widget currently is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Revealing,
    Holding,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterStep {
    /// Show `shown` characters after the delay.
    Reveal { delay_ms: u32, shown: usize },
    /// Hold the finished text, then clear back to zero characters.
    Restart { delay_ms: u32 },
}

/// Next timer for the typewriter, given how many of `total` characters are
/// on screen. `None` means no timer gets scheduled: either there is nothing
/// to type, or a small viewport keeps the finished text up for good.
pub fn typewriter_step(shown: usize, total: usize, mobile: bool) -> Option<TypewriterStep> {
    if total == 0 {
        return None;
    }
    if shown < total {
        return Some(TypewriterStep::Reveal {
            delay_ms: TYPE_CHAR_DELAY_MS,
            shown: shown + 1,
        });
    }
    if mobile {
        // One full pass only on small screens.
        return None;
    }
    Some(TypewriterStep::Restart {
        delay_ms: TYPE_RESTART_HOLD_MS,
    })
}

pub fn typewriter_phase(shown: usize, total: usize, mobile: bool) -> RevealPhase {
    if total == 0 {
        RevealPhase::Idle
    } else if shown < total {
        RevealPhase::Revealing
    } else if mobile {
        RevealPhase::Stopped
    } else {
        RevealPhase::Holding
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStep {
    /// Show the typing indicator after `lead_ms`, then reveal the next
    /// message `typing_ms` later.
    Advance { lead_ms: u32, typing_ms: u32 },
    /// Every message is on screen; clear the thread after the hold.
    Reset { delay_ms: u32 },
}

/// Next timer for the chat mockup, given how many of `total` messages are
/// visible. Unlike the typewriter this loop never checks the viewport; the
/// conversation replays on mobile too (matching the shipped behavior, which
/// product has not asked to change).
pub fn chat_schedule(visible: usize, total: usize) -> Option<ChatStep> {
    if total == 0 {
        return None;
    }
    if visible >= total {
        return Some(ChatStep::Reset {
            delay_ms: CHAT_RESET_HOLD_MS,
        });
    }
    let lead_ms = if visible == 0 {
        CHAT_FIRST_DELAY_MS
    } else {
        CHAT_NEXT_DELAY_MS
    };
    Some(ChatStep::Advance {
        lead_ms,
        typing_ms: CHAT_TYPING_MS,
    })
}

pub fn chat_phase(visible: usize, total: usize) -> RevealPhase {
    if total == 0 {
        RevealPhase::Idle
    } else if visible >= total {
        RevealPhase::Holding
    } else {
        RevealPhase::Revealing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_reveals_one_char_per_tick() {
        let mut shown = 0;
        let mut elapsed = 0u64;
        loop {
            match typewriter_step(shown, 10, false) {
                Some(TypewriterStep::Reveal { delay_ms, shown: next }) => {
                    assert_eq!(next, shown + 1);
                    elapsed += u64::from(delay_ms);
                    shown = next;
                }
                other => {
                    assert_eq!(
                        other,
                        Some(TypewriterStep::Restart {
                            delay_ms: TYPE_RESTART_HOLD_MS
                        })
                    );
                    break;
                }
            }
        }
        assert_eq!(shown, 10);
        assert_eq!(elapsed, 10 * u64::from(TYPE_CHAR_DELAY_MS));
    }

    #[test]
    fn typewriter_restarts_on_desktop_only() {
        assert_eq!(
            typewriter_step(10, 10, false),
            Some(TypewriterStep::Restart {
                delay_ms: TYPE_RESTART_HOLD_MS
            })
        );
        assert_eq!(typewriter_step(10, 10, true), None);
        assert_eq!(typewriter_phase(10, 10, true), RevealPhase::Stopped);
        assert_eq!(typewriter_phase(10, 10, false), RevealPhase::Holding);
    }

    #[test]
    fn typewriter_keeps_typing_on_mobile_until_done() {
        // The breakpoint only matters once the full text is out.
        assert_eq!(
            typewriter_step(3, 10, true),
            Some(TypewriterStep::Reveal {
                delay_ms: TYPE_CHAR_DELAY_MS,
                shown: 4
            })
        );
    }

    #[test]
    fn empty_script_never_schedules() {
        assert_eq!(typewriter_step(0, 0, false), None);
        assert_eq!(typewriter_phase(0, 0, false), RevealPhase::Idle);
        assert_eq!(chat_schedule(0, 0), None);
        assert_eq!(chat_phase(0, 0), RevealPhase::Idle);
    }

    #[test]
    fn chat_first_message_has_short_lead() {
        assert_eq!(
            chat_schedule(0, 5),
            Some(ChatStep::Advance {
                lead_ms: CHAT_FIRST_DELAY_MS,
                typing_ms: CHAT_TYPING_MS
            })
        );
    }

    #[test]
    fn chat_later_messages_pause_longer() {
        for visible in 1..5 {
            assert_eq!(
                chat_schedule(visible, 5),
                Some(ChatStep::Advance {
                    lead_ms: CHAT_NEXT_DELAY_MS,
                    typing_ms: CHAT_TYPING_MS
                })
            );
        }
    }

    #[test]
    fn chat_resets_after_hold_and_loops() {
        assert_eq!(
            chat_schedule(5, 5),
            Some(ChatStep::Reset {
                delay_ms: CHAT_RESET_HOLD_MS
            })
        );
        assert_eq!(chat_phase(5, 5), RevealPhase::Holding);
        // After the reset the cycle starts over from the short lead.
        assert_eq!(
            chat_schedule(0, 5),
            Some(ChatStep::Advance {
                lead_ms: CHAT_FIRST_DELAY_MS,
                typing_ms: CHAT_TYPING_MS
            })
        );
    }

    #[test]
    fn chat_full_cycle_duration_matches_script() {
        // N messages: 500 + 1500 for the first, then (2000 + 1500) each.
        let total = 5usize;
        let mut visible = 0;
        let mut elapsed = 0u64;
        while let Some(ChatStep::Advance { lead_ms, typing_ms }) = chat_schedule(visible, total) {
            elapsed += u64::from(lead_ms) + u64::from(typing_ms);
            visible += 1;
        }
        assert_eq!(visible, total);
        let expected = u64::from(CHAT_FIRST_DELAY_MS)
            + u64::from(CHAT_TYPING_MS)
            + (total as u64 - 1) * u64::from(CHAT_NEXT_DELAY_MS + CHAT_TYPING_MS);
        assert_eq!(elapsed, expected);
    }
}
