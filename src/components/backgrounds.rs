//! Decorative background layers.
//!
//! Everything here is aria-hidden eye candy. The reduced-motion gate removes
//! the moving layers entirely rather than freezing them mid-animation; the
//! static radial glow stays so the page keeps its depth.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::motion::use_reduced_motion;

const AQUA: &str = "rgba(45,224,203,0.4)";
const BLUE: &str = "rgba(91,124,239,0.4)";

struct Dot {
    left: f64,
    top: f64,
    delay: f64,
}

struct Particle {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
    duration: f64,
    x_offset: f64,
    y_offset: f64,
}

fn random_dots(count: usize) -> Vec<Dot> {
    (0..count)
        .map(|_| Dot {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            delay: Math::random() * 4.0,
        })
        .collect()
}

fn random_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            size: Math::random() * 3.0 + 1.0,
            delay: Math::random() * 5.0,
            duration: Math::random() * 10.0 + 15.0,
            x_offset: (Math::random() - 0.5) * 100.0,
            y_offset: (Math::random() - 0.5) * 100.0,
        })
        .collect()
}

/// Fixed full-viewport backdrop behind the whole page: parallax orbs, a hex
/// grid, drifting fog, sparkles and a glow that trails the cursor. Mouse
/// position feeds the layers through CSS custom properties on the root node
/// so pointer movement never re-renders the tree.
#[function_component(AmbientBackdrop)]
pub fn ambient_backdrop() -> Html {
    let reduced = use_reduced_motion();
    let root = use_node_ref();
    let dots = use_memo(|_| random_dots(40), ());

    {
        let root = root.clone();
        use_effect_with_deps(
            move |&reduced| {
                let listener = if reduced {
                    None
                } else {
                    web_sys::window().and_then(|window| {
                        let inner_w = window.inner_width().ok()?.as_f64().unwrap_or(1.0);
                        let inner_h = window.inner_height().ok()?.as_f64().unwrap_or(1.0);
                        let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                            let Some(element) = root.cast::<web_sys::HtmlElement>() else {
                                return;
                            };
                            let x = f64::from(event.client_x());
                            let y = f64::from(event.client_y());
                            let nx = (x - inner_w / 2.0) / (inner_w / 2.0).max(1.0);
                            let ny = (y - inner_h / 2.0) / (inner_h / 2.0).max(1.0);
                            let style = element.style();
                            let _ = style.set_property("--mx", &format!("{x}px"));
                            let _ = style.set_property("--my", &format!("{y}px"));
                            let _ = style.set_property("--nx", &format!("{nx:.4}"));
                            let _ = style.set_property("--ny", &format!("{ny:.4}"));
                        })
                            as Box<dyn FnMut(MouseEvent)>);
                        window
                            .add_event_listener_with_callback(
                                "mousemove",
                                callback.as_ref().unchecked_ref(),
                            )
                            .ok()?;
                        Some((window, callback))
                    })
                };

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            reduced,
        );
    }

    let sparkles = if reduced {
        Html::default()
    } else {
        dots.iter()
            .map(|d| {
                let style = format!(
                    "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
                    d.left, d.top, d.delay
                );
                html! { <span class="backdrop-sparkle" style={style}></span> }
            })
            .collect::<Html>()
    };

    html! {
        <div ref={root} aria-hidden="true" class="ambient-backdrop">
            <style>
                {r#"
                .ambient-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    pointer-events: none;
                    overflow: hidden;
                    --mx: 50vw;
                    --my: 40vh;
                    --nx: 0;
                    --ny: 0;
                }
                .backdrop-orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    background:
                        radial-gradient(circle at 30% 30%, rgba(45,224,203,0.35), transparent 55%),
                        radial-gradient(circle at 70% 70%, rgba(91,124,239,0.30), transparent 55%);
                    transition: transform 0.6s ease-out;
                }
                .backdrop-orb.depth-12 {
                    width: 900px; height: 900px;
                    left: calc(50% - 450px); top: calc(40% - 450px);
                    opacity: 0.18;
                    transform: translate(calc(var(--nx) * 12px), calc(var(--ny) * 12px));
                }
                .backdrop-orb.depth-20 {
                    width: 700px; height: 700px;
                    left: calc(50% - 350px); top: calc(40% - 350px);
                    opacity: 0.14;
                    transform: translate(calc(var(--nx) * 20px), calc(var(--ny) * 20px));
                }
                .backdrop-orb.depth-32 {
                    width: 520px; height: 520px;
                    left: calc(50% - 260px); top: calc(40% - 260px);
                    opacity: 0.12;
                    transform: translate(calc(var(--nx) * 32px), calc(var(--ny) * 32px));
                }
                .backdrop-hex {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.08;
                    transition: transform 0.6s ease-out;
                    transform: translate(calc(var(--nx) * 8px), calc(var(--ny) * 8px));
                }
                .backdrop-fog {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    background: radial-gradient(circle, rgba(255,255,255,0.04), transparent 60%);
                    animation: fog-drift ease-in-out infinite alternate;
                }
                .backdrop-fog.one {
                    width: 1200px; height: 1200px;
                    left: -20%; top: -10%;
                    animation-duration: 12s;
                }
                .backdrop-fog.two {
                    width: 900px; height: 900px;
                    left: 60%; top: 70%;
                    animation-duration: 16s;
                }
                @keyframes fog-drift {
                    from { transform: translateY(-15px); opacity: 0.25; }
                    to { transform: translateY(20px); opacity: 0.3; }
                }
                .backdrop-sparkle {
                    position: absolute;
                    width: 2px;
                    height: 2px;
                    border-radius: 50%;
                    background: radial-gradient(circle, #fff, rgba(255,255,255,0));
                    animation: sparkle-pulse 3.2s ease-in-out infinite;
                }
                @keyframes sparkle-pulse {
                    0%, 100% { opacity: 0.1; transform: scale(0.8); }
                    50% { opacity: 0.6; transform: scale(1.1); }
                }
                .backdrop-static-glow {
                    position: absolute;
                    top: -96px;
                    left: 50%;
                    width: 60rem;
                    height: 60rem;
                    transform: translateX(-50%);
                    border-radius: 50%;
                    opacity: 0.2;
                    filter: blur(64px);
                    background:
                        radial-gradient(closest-side, rgba(45,224,203,0.20), transparent 70%),
                        radial-gradient(closest-side, rgba(91,124,239,0.18), transparent 70%);
                }
                .backdrop-cursor-glow {
                    position: absolute;
                    width: 256px;
                    height: 256px;
                    left: calc(var(--mx) - 128px);
                    top: calc(var(--my) - 128px);
                    border-radius: 50%;
                    filter: blur(32px);
                    opacity: 0.5;
                    background: radial-gradient(circle, rgba(45,224,203,0.20), rgba(91,124,239,0.20), transparent 70%);
                }
                "#}
            </style>
            if !reduced {
                <div class="backdrop-orb depth-12"></div>
                <div class="backdrop-orb depth-20"></div>
                <div class="backdrop-orb depth-32"></div>
                <svg class="backdrop-hex" viewBox="0 0 100 100" preserveAspectRatio="none">
                    <defs>
                        <pattern id="hex-grid" width="8" height="13.856" patternUnits="userSpaceOnUse">
                            <polygon
                                points="4,0 8,2.309 8,6.928 4,9.237 0,6.928 0,2.309"
                                fill="none"
                                stroke="url(#hex-stroke)"
                                stroke-width="0.3"
                            />
                        </pattern>
                        <linearGradient id="hex-stroke" x1="0" y1="0" x2="1" y2="1">
                            <stop offset="0%" stop-color="#2DE0CB" />
                            <stop offset="100%" stop-color="#5B7CEF" />
                        </linearGradient>
                    </defs>
                    <rect x="0" y="0" width="100%" height="100%" fill="url(#hex-grid)" />
                </svg>
                <div class="backdrop-fog one"></div>
                <div class="backdrop-fog two"></div>
                { sparkles }
            }
            <div class="backdrop-static-glow"></div>
            if !reduced {
                <div class="backdrop-cursor-glow"></div>
            }
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Aqua,
    Blue,
    Mixed,
}

impl ParticleColor {
    fn at(self, index: usize) -> &'static str {
        match self {
            ParticleColor::Aqua => AQUA,
            ParticleColor::Blue => BLUE,
            ParticleColor::Mixed => {
                if index % 2 == 0 {
                    AQUA
                } else {
                    BLUE
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub color: ParticleColor,
}

/// Drifting particle layer behind a single section. Skipped entirely when
/// motion is reduced.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let reduced = use_reduced_motion();
    let particles = use_memo(|_| random_particles(60), ());

    if reduced {
        return Html::default();
    }

    let color = props.color;
    let field = particles
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let style = format!(
                "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; \
                 background: radial-gradient(circle, {}, transparent); \
                 animation-duration: {:.1}s; animation-delay: {:.1}s; \
                 --px: {:.1}px; --py: {:.1}px;",
                p.left,
                p.top,
                p.size,
                p.size,
                color.at(index),
                p.duration,
                p.delay,
                p.x_offset,
                p.y_offset,
            );
            html! { <div class="particle" style={style}></div> }
        })
        .collect::<Html>();

    html! {
        <div aria-hidden="true" class="particle-field">
            <style>
                {r#"
                .particle-field {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }
                .particle {
                    position: absolute;
                    border-radius: 50%;
                    animation-name: particle-drift;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                }
                @keyframes particle-drift {
                    0%, 100% { transform: translate(0, 0); opacity: 0.2; }
                    50% { transform: translate(var(--px), var(--py)); opacity: 0.6; }
                }
                "#}
            </style>
            { field }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_palette_alternates() {
        assert_eq!(ParticleColor::Mixed.at(0), AQUA);
        assert_eq!(ParticleColor::Mixed.at(1), BLUE);
        assert_eq!(ParticleColor::Aqua.at(7), AQUA);
        assert_eq!(ParticleColor::Blue.at(4), BLUE);
    }
}
