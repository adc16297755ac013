use gloo_console::log as console_log;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::backgrounds::{AmbientBackdrop, ParticleColor, ParticleField};
use crate::components::chat_demo::ChatDemo;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::terminal::MockTerminal;
use crate::i18n::{translations, CtaText, FaqText, Lang, ServiceIcon, Translations};
use crate::motion::use_reduced_motion;
use crate::scroll::{navigate_to, use_active_section};
use crate::{Navbar, SECTION_IDS};

const LOGOS: &[&str] = &["AURELIA", "NEXUS", "PRAGMA", "ALVIO", "ZENDA", "CAELUM"];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub language: Lang,
    pub on_language_toggle: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let t = translations(props.language);
    let reduced = use_reduced_motion();
    let active_section = use_active_section();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Every nav hash must resolve to a rendered section; a miss here is a
    // markup regression, so flag it loudly during development.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    for id in SECTION_IDS {
                        if document.get_element_by_id(id).is_none() {
                            log::warn!("landing: no section with id '{id}' in the DOM");
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing">
            { page_styles() }
            <AmbientBackdrop />
            <Navbar
                language={props.language}
                on_language_toggle={props.on_language_toggle.clone()}
                active_section={active_section}
            />
            <ScrollTopButton />
            { hero(t, reduced) }
            <section id="logos" class="section section-tight">
                { logos(t) }
            </section>
            <section id="solutions" class="section">
                { solutions(t) }
            </section>
            <section id="services" class="section">
                { services(t) }
            </section>
            <section id="demo" class="section">
                { live_demo(t) }
            </section>
            <section id="about" class="section">
                { about(t) }
            </section>
            <section class="section">
                { leadership(t) }
            </section>
            <section id="integrations" class="section">
                { integrations(t) }
            </section>
            <section id="use-cases" class="section">
                { use_cases(t) }
            </section>
            <section id="security" class="section">
                <ParticleField color={ParticleColor::Blue} />
                { security(t) }
            </section>
            <section id="cases" class="section">
                { outcomes(t) }
            </section>
            <section id="testimonials" class="section">
                { testimonials(t) }
            </section>
            <section id="faq" class="section">
                <Faq lang={props.language} />
            </section>
            <section id="contact" class="section">
                <ParticleField color={ParticleColor::Mixed} />
                { contact(t, props.language) }
            </section>
            { footer(t) }
        </main>
    }
}

fn section_header(kicker: &'static str, title: &'static str) -> Html {
    html! {
        <div class="section-header">
            <h2 class="section-kicker">{ kicker }</h2>
            <p class="section-title">{ title }</p>
        </div>
    }
}

fn hero(t: &'static Translations, reduced: bool) -> Html {
    let book_demo = Callback::from(move |_| navigate_to("contact", reduced));
    let see_solutions = Callback::from(move |_| navigate_to("solutions", reduced));

    html! {
        <section id="hero" class="section hero">
            <div class="hero-inner">
                <div class="hero-badge">
                    <span class="hero-badge-spark">{"✦"}</span>
                    <span>{ t.hero.badge }</span>
                </div>
                <h1 class="hero-title">{ t.hero.title }</h1>
                <p class="hero-description">{ t.hero.description }</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={book_demo}>
                        { t.hero.book_demo }{" ↗"}
                    </button>
                    <button class="btn btn-outline" onclick={see_solutions}>
                        { t.hero.see_use_cases }
                    </button>
                </div>
            </div>
            <div class="hero-panel">
                <div class="hero-panel-frame">
                    <div class="hero-panel-grid">
                        <MockTerminal />
                        { architecture_card() }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn architecture_card() -> Html {
    let stages = ["Connect", "Orchestrate", "Govern", "Deploy", "Measure"];
    html! {
        <div class="arch-card">
            <div class="arch-card-title">{"High‑level Architecture"}</div>
            <div class="arch-card-stages">
                { for stages.iter().map(|s| html! { <div class="arch-stage">{ *s }</div> }) }
            </div>
            <div class="arch-card-plane">
                <div>{"Secure data plane · Tooling · Policies"}</div>
            </div>
        </div>
    }
}

fn logos(t: &'static Translations) -> Html {
    // The track holds three copies of the list; translating by a third of
    // its width loops seamlessly.
    let strip = || {
        LOGOS
            .iter()
            .map(|name| html! { <span class="logo-item">{ *name }</span> })
            .collect::<Html>()
    };
    html! {
        <div class="social-proof">
            <p class="social-proof-label">{ t.trusted_by }</p>
            <div class="logo-marquee">
                <div class="logo-fade logo-fade-left"></div>
                <div class="logo-fade logo-fade-right"></div>
                <div class="logo-track">
                    { strip() }{ strip() }{ strip() }
                </div>
            </div>
        </div>
    }
}

fn solutions(t: &'static Translations) -> Html {
    let cards = t
        .solutions
        .items
        .iter()
        .map(|item| {
            html! {
                <div class="card solution-card">
                    <h3>{ item.title }</h3>
                    <p>{ item.desc }</p>
                    <div class="tag-row">
                        { for item.tags.iter().map(|tag| html! {
                            <span class="tag">{ *tag }</span>
                        }) }
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="container">
            { section_header(t.solutions.title, t.solutions.subtitle) }
            <div class="grid grid-3">{ cards }</div>
        </div>
    }
}

fn service_icon(icon: ServiceIcon) -> Html {
    let path = match icon {
        ServiceIcon::Network => {
            "M12 3v3m0 12v3m9-9h-3M6 12H3m13.5-6.5l-2 2m-7 7l-2 2m11 0l-2-2m-7-7l-2-2M12 9a3 3 0 100 6 3 3 0 000-6z"
        }
        ServiceIcon::Robot => {
            "M9 3h6m-3 0v3m-6 3a2 2 0 012-2h8a2 2 0 012 2v8a2 2 0 01-2 2H8a2 2 0 01-2-2V9zm3 3h.01M15 12h.01M9 16h6"
        }
        ServiceIcon::Chatbot => {
            "M8 10h.01M12 10h.01M16 10h.01M21 12a8 8 0 01-8 8H5l-2 2V12a8 8 0 018-8h2a8 8 0 018 8z"
        }
        ServiceIcon::Analytics => "M4 20V10m5 10V4m5 16v-7m5 7V8",
        ServiceIcon::Platform => {
            "M4 5a1 1 0 011-1h14a1 1 0 011 1v10a1 1 0 01-1 1H5a1 1 0 01-1-1V5zm4 15h8m-4-4v4"
        }
        ServiceIcon::Education => {
            "M12 4L2 9l10 5 10-5-10-5zm-6 8v4c0 1.5 2.7 3 6 3s6-1.5 6-3v-4"
        }
    };
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5"
            stroke-linecap="round" stroke-linejoin="round">
            <path d={path} />
        </svg>
    }
}

fn services(t: &'static Translations) -> Html {
    let cards = t
        .services
        .categories
        .iter()
        .map(|cat| {
            html! {
                <div class="card service-card">
                    <div class="service-icon">{ service_icon(cat.icon) }</div>
                    <h3>{ cat.title }</h3>
                    <p>{ cat.description }</p>
                    <ul>
                        { for cat.details.iter().map(|d| html! { <li>{ *d }</li> }) }
                    </ul>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="container">
            { section_header(t.services.title, t.services.subtitle) }
            <div class="grid grid-3">{ cards }</div>
        </div>
    }
}

fn live_demo(t: &'static Translations) -> Html {
    html! {
        <div class="container">
            { section_header("Intelligent Automation", t.demo.subtitle) }
            <div class="bento">
                <div class="bento-card bento-tall">
                    <p class="bento-title">{ t.demo.realtime.title }</p>
                    <p class="bento-desc">{ t.demo.realtime.description }</p>
                    <div class="bento-body">
                        <ChatDemo />
                    </div>
                </div>
                <div class="bento-card">
                    <p class="bento-title">{ t.demo.deployment.title }</p>
                    <p class="bento-desc">{ t.demo.deployment.description }</p>
                    <div class="bento-body">
                        <MockTerminal />
                    </div>
                </div>
                <div class="bento-card">
                    <p class="bento-title">{ t.demo.security.title }</p>
                    <p class="bento-desc">{ t.demo.security.description }</p>
                    <div class="bento-body bento-badges">
                        <div class="mini-badge">
                            <div class="mini-badge-icon aqua">{"🛡"}</div>
                            <span>{"SOC 2"}</span>
                        </div>
                        <div class="mini-badge">
                            <div class="mini-badge-icon blue">{"🔒"}</div>
                            <span>{"Encrypted"}</span>
                        </div>
                    </div>
                </div>
                <div class="bento-card bento-tall">
                    <p class="bento-title">{ t.demo.architecture.title }</p>
                    <p class="bento-desc">{ t.demo.architecture.description }</p>
                    <div class="bento-body">
                        { architecture_card() }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn about(t: &'static Translations) -> Html {
    html! {
        <div class="container">
            { section_header(t.about.title, t.about.subtitle) }
            <div class="grid grid-2 about-blocks">
                <div class="card">
                    <h3>{ t.about.mission.title }</h3>
                    <p>{ t.about.mission.desc }</p>
                </div>
                <div class="card">
                    <h3>{ t.about.approach.title }</h3>
                    <p>{ t.about.approach.desc }</p>
                </div>
            </div>
            <div class="grid grid-4 about-values">
                { for t.about.values.iter().map(|v| html! {
                    <div class="card value-card">
                        <h4>{ v.title }</h4>
                        <p>{ v.desc }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn leadership(t: &'static Translations) -> Html {
    let initials = |name: &str| -> String {
        name.split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    };
    html! {
        <div class="container">
            { section_header(t.leadership.title, t.leadership.subtitle) }
            <div class="grid grid-2 leadership-grid">
                { for t.leadership.members.iter().map(|m| html! {
                    <div class="card leader-card">
                        <div class="leader-avatar">{ initials(m.name) }</div>
                        <h3>{ m.name }</h3>
                        <div class="leader-role">{ m.role }</div>
                        <p>{ m.description }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn integrations(t: &'static Translations) -> Html {
    let categories: &[(&str, &[&str])] = &[
        ("CRMs", &["Salesforce", "HubSpot", "Pipedrive"]),
        ("Helpdesks", &["Zendesk", "Intercom", "Freshdesk"]),
        ("Data", &["Snowflake", "BigQuery", "Databricks"]),
        ("AI/ML", &["OpenAI", "Anthropic", "Pinecone"]),
    ];
    html! {
        <div class="container">
            { section_header(t.integrations.title, t.integrations.subtitle) }
            <div class="grid grid-4">
                { for categories.iter().map(|(name, tools)| html! {
                    <div class="card integration-card">
                        <h3>{ *name }</h3>
                        <div class="integration-tiles">
                            { for tools.iter().map(|tool| html! {
                                <div class="integration-tile">{ *tool }</div>
                            }) }
                        </div>
                    </div>
                }) }
            </div>
            <p class="integrations-more">{ t.integrations.more }</p>
        </div>
    }
}

fn use_cases(t: &'static Translations) -> Html {
    html! {
        <div class="container">
            { section_header(t.use_cases.title, t.use_cases.subtitle) }
            <div class="grid grid-3">
                { for t.use_cases.cases.iter().map(|case| html! {
                    <div class="card use-case-card">
                        <h3>{ case.title }</h3>
                        <ul>
                            { for case.points.iter().map(|p| html! { <li>{ *p }</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </div>
    }
}

fn security(t: &'static Translations) -> Html {
    let chips = [
        "🔒 End-to-end encryption",
        "✓ Zero-retention options",
        "🛡️ Penetration tested",
        "📋 Regular audits",
    ];
    html! {
        <div class="container">
            { section_header(t.security.title, t.security.subtitle) }
            <div class="grid grid-4">
                { for t.security.items.iter().map(|item| html! {
                    <div class="card security-card">
                        <h3>{ item.title }</h3>
                        <p>{ item.desc }</p>
                    </div>
                }) }
            </div>
            <div class="chip-row">
                { for chips.iter().map(|chip| html! { <div class="chip">{ *chip }</div> }) }
            </div>
        </div>
    }
}

fn outcomes(t: &'static Translations) -> Html {
    html! {
        <div class="container">
            { section_header(t.outcomes.title, t.outcomes.subtitle) }
            <div class="outcome-grid">
                { for t.outcomes.tiles.iter().enumerate().map(|(i, tile)| {
                    let class = if i == 0 {
                        "card outcome-tile outcome-featured"
                    } else {
                        "card outcome-tile"
                    };
                    html! {
                        <div class={class}>
                            <div class="outcome-kpi">{ tile.kpi }</div>
                            <h3>{ tile.title }</h3>
                            <p>{ tile.desc }</p>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn testimonials(t: &'static Translations) -> Html {
    let ratings = [5usize, 5, 4];
    html! {
        <div class="container">
            { section_header(t.testimonials.title, t.testimonials.subtitle) }
            <div class="grid grid-3">
                { for t.testimonials.items.iter().zip(ratings).map(|(item, stars)| html! {
                    <div class="card testimonial-card">
                        <div class="stars">
                            { for (0..5).map(|i| html! {
                                <span class={if i < stars { "star filled" } else { "star" }}>{"★"}</span>
                            }) }
                        </div>
                        <blockquote>{ format!("\u{201c}{}\u{201d}", item.quote) }</blockquote>
                        <div class="testimonial-meta">
                            <div class="testimonial-name">{ item.name }</div>
                            <div class="testimonial-role">
                                { format!("{}, {}", item.role, item.company) }
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_| {
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                { props.question }
                <span class="toggle-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            if *is_open {
                <div class="faq-answer">{ props.answer }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqProps {
    lang: Lang,
}

#[function_component(Faq)]
fn faq(props: &FaqProps) -> Html {
    let t: &FaqText = &translations(props.lang).faq;
    html! {
        <div class="container container-narrow">
            { section_header(t.title, t.subtitle) }
            <div class="faq-list">
                { for t.items.iter().map(|entry| html! {
                    <FaqItem question={entry.q} answer={entry.a} />
                }) }
            </div>
        </div>
    }
}

#[derive(Serialize, Default, Clone, PartialEq)]
struct ContactRequest {
    name: String,
    email: String,
    company: String,
    message: String,
    accepts_terms: bool,
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    lang: Lang,
}

#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let t: &CtaText = &translations(props.lang).cta;
    let request = use_state(ContactRequest::default);
    let submitted = use_state(|| false);

    let on_input = |field: fn(&mut ContactRequest, String)| {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*request).clone();
                field(&mut next, input.value());
                request.set(next);
            }
        })
    };

    let on_message = {
        let request = request.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*request).clone();
                next.message = area.value();
                request.set(next);
            }
        })
    };

    let on_terms = {
        let request = request.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                let mut next = (*request).clone();
                next.accepts_terms = input.checked();
                request.set(next);
            }
        })
    };

    let onsubmit = {
        let request = request.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // TODO: post to the booking endpoint once the backend ships.
            match serde_json::to_string(&*request) {
                Ok(payload) => console_log!("demo request:", payload),
                Err(err) => log::error!("failed to serialize demo request: {err}"),
            }
            submitted.set(true);
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="text"
                placeholder={t.form.name}
                value={request.name.clone()}
                oninput={on_input(|r, v| r.name = v)}
                required=true
            />
            <input
                type="email"
                placeholder={t.form.email}
                value={request.email.clone()}
                oninput={on_input(|r, v| r.email = v)}
                required=true
            />
            <input
                type="text"
                placeholder={t.form.company}
                value={request.company.clone()}
                oninput={on_input(|r, v| r.company = v)}
            />
            <textarea
                placeholder={t.form.message}
                value={request.message.clone()}
                oninput={on_message}
                rows="4"
            />
            <label class="contact-terms">
                <input type="checkbox" checked={request.accepts_terms} onchange={on_terms} />
                <span>{ t.form.terms }</span>
            </label>
            <button type="submit" class="btn btn-primary" disabled={*submitted}>
                { if *submitted { "✓" } else { t.form.submit } }
            </button>
        </form>
    }
}

fn contact(t: &'static Translations, lang: Lang) -> Html {
    html! {
        <div class="container">
            { section_header(t.cta.title, t.cta.subtitle) }
            <div class="contact-grid">
                <div class="card contact-card">
                    <ContactForm {lang} />
                </div>
                <div class="card contact-why">
                    <h3>{ t.cta.why_title }</h3>
                    <ul>
                        { for t.cta.why_items.iter().map(|item| html! { <li>{ *item }</li> }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}

fn footer(t: &'static Translations) -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();
    let column = |title: &'static str, links: &'static [&'static str]| {
        html! {
            <div class="footer-column">
                <h4>{ title }</h4>
                <ul>
                    { for links.iter().map(|link| html! { <li>{ *link }</li> }) }
                </ul>
            </div>
        }
    };
    html! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="footer-logo">{"YUYAY"}</div>
                    <p>{ t.footer.tagline }</p>
                </div>
                { column(t.footer.solutions, t.footer.solution_links) }
                { column(t.footer.company, t.footer.company_links) }
                { column(t.footer.legal, t.footer.legal_links) }
            </div>
            <div class="footer-bottom">
                { format!("© {} YUYAY. {}", year, t.footer.copyright) }
            </div>
        </footer>
    }
}

fn page_styles() -> Html {
    html! {
        <style>
            {r#"
            * { box-sizing: border-box; }
            body {
                margin: 0;
                background: #0A0E14;
                color: #cbd5e1;
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            .landing { position: relative; min-height: 100vh; }
            .section {
                position: relative;
                padding: 96px 0;
            }
            .section-tight { padding: 48px 0; }
            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 24px;
            }
            .container-narrow { max-width: 800px; }
            .section-header {
                text-align: center;
                max-width: 768px;
                margin: 0 auto 48px;
            }
            .section-kicker {
                margin: 0;
                font-size: 1rem;
                font-weight: 600;
                color: #2DE0CB;
            }
            .section-title {
                margin: 8px auto 0;
                max-width: 32rem;
                font-size: 1.875rem;
                font-weight: 500;
                letter-spacing: -0.02em;
                color: #fff;
            }
            .grid { display: grid; gap: 24px; }
            .grid-2 { grid-template-columns: repeat(2, 1fr); }
            .grid-3 { grid-template-columns: repeat(3, 1fr); }
            .grid-4 { grid-template-columns: repeat(4, 1fr); }
            @media (max-width: 960px) {
                .grid-3, .grid-4 { grid-template-columns: repeat(2, 1fr); }
            }
            @media (max-width: 640px) {
                .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
            }
            .card {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 16px;
                background: rgba(255, 255, 255, 0.05);
                padding: 24px;
                transition: border-color 200ms ease, box-shadow 200ms ease;
            }
            .card:hover {
                border-color: #5B7CEF;
                box-shadow: 0 0 0 1px rgba(91, 124, 239, 0.5), 0 0 24px rgba(91, 124, 239, 0.18);
            }
            .card h3 { margin: 0 0 8px; color: #f1f5f9; font-size: 1.125rem; }
            .card p { margin: 0; color: #94a3b8; font-size: 0.875rem; line-height: 1.6; }
            .card ul {
                margin: 12px 0 0;
                padding-left: 18px;
                color: #94a3b8;
                font-size: 0.875rem;
                line-height: 1.7;
            }
            .btn {
                display: inline-flex;
                align-items: center;
                gap: 4px;
                border-radius: 8px;
                padding: 10px 20px;
                font-size: 0.875rem;
                font-weight: 600;
                cursor: pointer;
                border: 1px solid transparent;
            }
            .btn-primary {
                background: linear-gradient(90deg, #2DE0CB, #5B7CEF);
                color: #0A0E14;
            }
            .btn-outline {
                background: transparent;
                border-color: rgba(255, 255, 255, 0.2);
                color: #e2e8f0;
            }
            .btn-outline:hover { background: rgba(255, 255, 255, 0.05); }

            /* Hero */
            .hero { padding-top: 128px; padding-bottom: 40px; overflow: hidden; }
            .hero-inner {
                max-width: 768px;
                margin: 0 auto;
                padding: 0 24px;
                text-align: center;
            }
            .hero-badge {
                display: inline-flex;
                align-items: center;
                gap: 8px;
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 9999px;
                background: rgba(255, 255, 255, 0.05);
                padding: 4px 12px;
                font-size: 0.75rem;
                color: #cbd5e1;
                margin-bottom: 16px;
            }
            .hero-badge-spark { color: #2DE0CB; }
            .hero-title {
                margin: 0 auto;
                max-width: 48rem;
                font-size: clamp(2.25rem, 6vw, 3.75rem);
                font-weight: 500;
                letter-spacing: -0.03em;
                color: #fff;
            }
            .hero-description {
                margin: 16px auto 0;
                max-width: 42rem;
                font-size: 1.125rem;
                color: #94a3b8;
            }
            .hero-actions {
                margin-top: 32px;
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                justify-content: center;
                gap: 12px;
            }
            .hero-panel { max-width: 1024px; margin: 48px auto 0; padding: 0 24px; }
            .hero-panel-frame {
                border-radius: 16px;
                padding: 2px;
                background: linear-gradient(135deg, rgba(45,224,203,0.4), rgba(91,124,239,0.4), rgba(45,224,203,0.4));
            }
            .hero-panel-grid {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 24px;
                border-radius: 14px;
                border: 1px solid rgba(255, 255, 255, 0.1);
                background: #0C111B;
                padding: 24px;
            }
            @media (max-width: 768px) {
                .hero-panel-grid { grid-template-columns: 1fr; }
            }

            /* Architecture card */
            .arch-card {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 12px;
                background: rgba(255, 255, 255, 0.05);
                padding: 16px;
                width: 100%;
            }
            .arch-card-title { margin-bottom: 16px; color: #cbd5e1; }
            .arch-card-stages { display: grid; gap: 12px; }
            .arch-stage {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 8px;
                background: #0C111B;
                padding: 12px;
                text-align: center;
                color: #cbd5e1;
                font-size: 0.875rem;
            }
            .arch-card-plane {
                margin-top: 16px;
                border-radius: 6px;
                padding: 1px;
                background: linear-gradient(90deg, rgba(45,224,203,0.3), rgba(91,124,239,0.3));
            }
            .arch-card-plane > div {
                border-radius: 6px;
                background: #0C111B;
                padding: 12px;
                text-align: center;
                color: #94a3b8;
                font-size: 0.8rem;
            }

            /* Logo marquee */
            .social-proof { text-align: center; }
            .social-proof-label {
                margin: 0 0 24px;
                font-size: 0.875rem;
                color: #64748b;
            }
            .logo-marquee { position: relative; overflow: hidden; }
            .logo-fade {
                position: absolute;
                top: 0;
                bottom: 0;
                width: 96px;
                z-index: 10;
                pointer-events: none;
            }
            .logo-fade-left { left: 0; background: linear-gradient(to right, #0A0E14, transparent); }
            .logo-fade-right { right: 0; background: linear-gradient(to left, #0A0E14, transparent); }
            .logo-track {
                display: flex;
                gap: 64px;
                width: max-content;
                animation: logo-scroll 20s linear infinite;
            }
            .logo-marquee:hover .logo-track { animation-play-state: paused; }
            @keyframes logo-scroll {
                from { transform: translateX(0); }
                to { transform: translateX(calc(-100% / 3)); }
            }
            @media (prefers-reduced-motion: reduce) {
                .logo-track { animation: none; }
            }
            .logo-item {
                flex-shrink: 0;
                font-size: 0.875rem;
                font-weight: 600;
                letter-spacing: 0.1em;
                color: #fff;
                white-space: nowrap;
            }
            .logo-item:hover { color: #2DE0CB; }

            /* Solutions, services */
            .tag-row { margin-top: 16px; display: flex; flex-wrap: wrap; gap: 8px; }
            .tag {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 9999px;
                padding: 2px 10px;
                font-size: 0.75rem;
                color: #94a3b8;
            }
            .service-icon {
                width: 48px;
                height: 48px;
                margin-bottom: 16px;
                border-radius: 12px;
                background: linear-gradient(135deg, rgba(45,224,203,0.15), rgba(91,124,239,0.15));
                display: flex;
                align-items: center;
                justify-content: center;
                color: #2DE0CB;
            }
            .service-icon svg { width: 24px; height: 24px; }

            /* Demo bento */
            .bento {
                display: grid;
                gap: 16px;
                grid-template-columns: repeat(3, 1fr);
                grid-template-rows: repeat(2, auto);
            }
            .bento-tall { grid-row: span 2; }
            @media (max-width: 960px) {
                .bento { grid-template-columns: 1fr; }
                .bento-tall { grid-row: auto; }
            }
            .bento-card {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 24px;
                background: linear-gradient(135deg, rgba(255,255,255,0.05), transparent);
                padding: 32px;
                display: flex;
                flex-direction: column;
            }
            .bento-title { margin: 0; font-size: 1.125rem; font-weight: 500; color: #fff; }
            .bento-desc { margin: 8px 0 24px; font-size: 0.875rem; color: #94a3b8; }
            .bento-body { flex: 1; display: flex; align-items: center; justify-content: center; }
            .bento-body > * { width: 100%; }
            .bento-badges { gap: 16px; }
            .bento-badges > * { width: auto; }
            .mini-badge {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                font-size: 0.75rem;
                color: #94a3b8;
            }
            .mini-badge-icon {
                width: 64px;
                height: 64px;
                border-radius: 16px;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 28px;
            }
            .mini-badge-icon.aqua { background: linear-gradient(135deg, rgba(45,224,203,0.2), rgba(91,124,239,0.2)); }
            .mini-badge-icon.blue { background: linear-gradient(135deg, rgba(91,124,239,0.2), rgba(45,224,203,0.2)); }

            /* About, leadership */
            .about-blocks { margin-bottom: 24px; }
            .value-card h4 { margin: 0 0 8px; color: #f1f5f9; font-size: 1rem; }
            .leadership-grid { max-width: 800px; margin: 0 auto; }
            .leader-card { text-align: center; }
            .leader-avatar {
                width: 72px;
                height: 72px;
                margin: 0 auto 16px;
                border-radius: 50%;
                background: linear-gradient(135deg, #2DE0CB, #5B7CEF);
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 1.25rem;
                font-weight: 600;
                color: #0A0E14;
            }
            .leader-role { margin-bottom: 8px; font-size: 0.875rem; color: #2DE0CB; }

            /* Integrations */
            .integration-tiles { margin-top: 12px; display: grid; gap: 8px; }
            .integration-tile {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 8px;
                background: #0C111B;
                padding: 10px;
                text-align: center;
                font-size: 0.875rem;
                color: #cbd5e1;
            }
            .integrations-more {
                margin-top: 32px;
                text-align: center;
                font-size: 0.875rem;
                color: #64748b;
            }

            /* Security */
            .chip-row {
                margin-top: 48px;
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                justify-content: center;
                gap: 16px;
            }
            .chip {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 9999px;
                background: rgba(255, 255, 255, 0.05);
                padding: 8px 16px;
                font-size: 0.875rem;
                color: #cbd5e1;
            }

            /* Outcomes */
            .outcome-grid {
                display: grid;
                gap: 24px;
                grid-template-columns: repeat(3, 1fr);
            }
            .outcome-featured { grid-column: span 2; grid-row: span 2; }
            @media (max-width: 960px) {
                .outcome-grid { grid-template-columns: 1fr; }
                .outcome-featured { grid-column: auto; grid-row: auto; }
            }
            .outcome-kpi {
                font-size: 2.25rem;
                font-weight: 600;
                background: linear-gradient(90deg, #2DE0CB, #5B7CEF);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
                margin-bottom: 8px;
            }

            /* Testimonials */
            .stars { margin-bottom: 12px; }
            .star { color: #334155; }
            .star.filled { color: #fbbf24; }
            .testimonial-card blockquote {
                margin: 0 0 16px;
                color: #e2e8f0;
                font-size: 0.95rem;
                line-height: 1.6;
            }
            .testimonial-name { color: #f1f5f9; font-weight: 600; font-size: 0.875rem; }
            .testimonial-role { color: #64748b; font-size: 0.8rem; }

            /* FAQ */
            .faq-list { display: flex; flex-direction: column; gap: 12px; }
            .faq-item {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 12px;
                background: rgba(255, 255, 255, 0.03);
                overflow: hidden;
            }
            .faq-item.open { border-color: rgba(255, 255, 255, 0.2); }
            .faq-question {
                width: 100%;
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                background: none;
                border: none;
                padding: 16px 20px;
                text-align: left;
                font-size: 0.95rem;
                font-weight: 500;
                color: #f1f5f9;
                cursor: pointer;
            }
            .toggle-icon { color: #2DE0CB; font-size: 1.25rem; }
            .faq-answer {
                padding: 0 20px 16px;
                font-size: 0.875rem;
                color: #94a3b8;
                line-height: 1.6;
            }

            /* Contact */
            .contact-grid {
                display: grid;
                gap: 24px;
                grid-template-columns: 2fr 1fr;
            }
            @media (max-width: 768px) {
                .contact-grid { grid-template-columns: 1fr; }
            }
            .contact-form { display: flex; flex-direction: column; gap: 12px; }
            .contact-form input[type="text"],
            .contact-form input[type="email"],
            .contact-form textarea {
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 8px;
                background: #0C111B;
                padding: 10px 14px;
                font-size: 0.875rem;
                color: #e2e8f0;
                font-family: inherit;
            }
            .contact-form input:focus, .contact-form textarea:focus {
                outline: 1px solid #5B7CEF;
            }
            .contact-terms {
                display: flex;
                align-items: center;
                gap: 8px;
                font-size: 0.8rem;
                color: #94a3b8;
            }
            .contact-why ul {
                list-style: none;
                padding: 0;
                margin: 12px 0 0;
                display: flex;
                flex-direction: column;
                gap: 10px;
            }
            .contact-why li { color: #cbd5e1; font-size: 0.875rem; }
            .contact-why li::before { content: "✓ "; color: #2DE0CB; }

            /* Footer */
            .footer {
                border-top: 1px solid rgba(255, 255, 255, 0.08);
                padding: 48px 0 24px;
            }
            .footer-grid {
                display: grid;
                gap: 32px;
                grid-template-columns: 2fr 1fr 1fr 1fr;
            }
            @media (max-width: 768px) {
                .footer-grid { grid-template-columns: 1fr 1fr; }
            }
            .footer-logo {
                font-size: 1.25rem;
                font-weight: 700;
                letter-spacing: 0.1em;
                background: linear-gradient(90deg, #2DE0CB, #5B7CEF);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
                margin-bottom: 8px;
            }
            .footer-brand p { margin: 0; font-size: 0.875rem; color: #64748b; max-width: 280px; }
            .footer-column h4 {
                margin: 0 0 12px;
                font-size: 0.8rem;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                color: #94a3b8;
            }
            .footer-column ul { list-style: none; margin: 0; padding: 0; }
            .footer-column li {
                margin-bottom: 8px;
                font-size: 0.875rem;
                color: #64748b;
                cursor: pointer;
            }
            .footer-column li:hover { color: #cbd5e1; }
            .footer-bottom {
                margin-top: 40px;
                padding-top: 24px;
                border-top: 1px solid rgba(255, 255, 255, 0.05);
                text-align: center;
                font-size: 0.8rem;
                color: #475569;
            }
            "#}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_strip_is_six_brands() {
        assert_eq!(LOGOS.len(), 6);
        assert!(LOGOS
            .iter()
            .all(|l| l.chars().all(|c| c.is_ascii_uppercase())));
    }

    #[test]
    fn contact_request_serializes_every_field() {
        let request = ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            message: "Pilot for support automation".into(),
            accepts_terms: true,
        };
        let json = serde_json::to_string(&request).unwrap();
        for key in ["name", "email", "company", "message", "accepts_terms"] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }
}
