//! Static EN/ES copy for the whole page.
//!
//! The interaction layer never looks inside this module; switching language
//! swaps the dictionary and nothing else. Both dictionaries are structurally
//! identical by construction (same types), and the tests below pin the list
//! lengths so a translation can't silently drop an item.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    pub fn toggled(self) -> Lang {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Label shown on the language toggle (names the *other* language).
    pub fn toggle_label(self) -> &'static str {
        match self {
            Lang::En => "ES",
            Lang::Es => "EN",
        }
    }
}

#[derive(PartialEq)]
pub struct NavText {
    pub solutions: &'static str,
    pub about_us: &'static str,
    pub integrations: &'static str,
    pub security: &'static str,
    pub outcomes: &'static str,
    pub book_demo: &'static str,
    pub live_demo: &'static str,
}

#[derive(PartialEq)]
pub struct HeroText {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub book_demo: &'static str,
    pub see_use_cases: &'static str,
}

#[derive(PartialEq)]
pub struct SolutionItem {
    pub title: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct SolutionsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [SolutionItem],
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Network,
    Robot,
    Chatbot,
    Analytics,
    Platform,
    Education,
}

#[derive(PartialEq)]
pub struct ServiceCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
    pub details: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct ServicesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories: &'static [ServiceCategory],
}

#[derive(PartialEq)]
pub struct DemoFeature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(PartialEq)]
pub struct DemoText {
    pub subtitle: &'static str,
    pub realtime: DemoFeature,
    pub deployment: DemoFeature,
    pub security: DemoFeature,
    pub architecture: DemoFeature,
}

#[derive(PartialEq)]
pub struct AboutBlock {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(PartialEq)]
pub struct AboutText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub mission: AboutBlock,
    pub approach: AboutBlock,
    pub values: &'static [AboutBlock],
}

#[derive(PartialEq)]
pub struct LeadershipMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

#[derive(PartialEq)]
pub struct LeadershipText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub members: &'static [LeadershipMember],
}

#[derive(PartialEq)]
pub struct IntegrationsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub more: &'static str,
}

#[derive(PartialEq)]
pub struct UseCase {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct UseCasesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cases: &'static [UseCase],
}

#[derive(PartialEq)]
pub struct SecurityItem {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(PartialEq)]
pub struct SecurityText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [SecurityItem],
}

#[derive(PartialEq)]
pub struct OutcomeTile {
    pub kpi: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(PartialEq)]
pub struct OutcomesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tiles: &'static [OutcomeTile],
}

#[derive(PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

#[derive(PartialEq)]
pub struct TestimonialsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [Testimonial],
}

#[derive(PartialEq)]
pub struct FaqEntry {
    pub q: &'static str,
    pub a: &'static str,
}

#[derive(PartialEq)]
pub struct FaqText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: &'static [FaqEntry],
}

#[derive(PartialEq)]
pub struct CtaFormText {
    pub name: &'static str,
    pub email: &'static str,
    pub company: &'static str,
    pub message: &'static str,
    pub terms: &'static str,
    pub submit: &'static str,
}

#[derive(PartialEq)]
pub struct CtaText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: CtaFormText,
    pub why_title: &'static str,
    pub why_items: &'static [&'static str],
}

#[derive(PartialEq)]
pub struct FooterText {
    pub tagline: &'static str,
    pub solutions: &'static str,
    pub solution_links: &'static [&'static str],
    pub company: &'static str,
    pub company_links: &'static [&'static str],
    pub legal: &'static str,
    pub legal_links: &'static [&'static str],
    pub copyright: &'static str,
}

#[derive(PartialEq)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub trusted_by: &'static str,
    pub solutions: SolutionsText,
    pub services: ServicesText,
    pub demo: DemoText,
    pub about: AboutText,
    pub leadership: LeadershipText,
    pub integrations: IntegrationsText,
    pub use_cases: UseCasesText,
    pub security: SecurityText,
    pub outcomes: OutcomesText,
    pub testimonials: TestimonialsText,
    pub faq: FaqText,
    pub cta: CtaText,
    pub footer: FooterText,
}

pub fn translations(lang: Lang) -> &'static Translations {
    match lang {
        Lang::En => &EN,
        Lang::Es => &ES,
    }
}

static EN: Translations = Translations {
    nav: NavText {
        solutions: "Solutions",
        about_us: "About Us",
        integrations: "Integrations",
        security: "Security",
        outcomes: "Outcomes",
        book_demo: "Book a demo",
        live_demo: "Live Demo",
    },
    hero: HeroText {
        badge: "Drive productivity and measurable impact",
        title: "Smart AI Agents Built for Modern Business",
        description: "YUYAY designs intelligent systems that augment teams, automate workflows, and deliver measurable outcomes—without the startup noise.",
        book_demo: "Book a demo",
        see_use_cases: "See use cases",
    },
    trusted_by: "Trusted by forward-thinking teams",
    solutions: SolutionsText {
        title: "What We Build",
        subtitle: "End-to-end intelligent agents designed to drive real impact.",
        items: &[
            SolutionItem {
                title: "Support Agents",
                desc: "Resolve queries, triage tickets, and deflect FAQs with verified knowledge.",
                tags: &["Retrieval", "Tools", "Guardrails", "HITL"],
            },
            SolutionItem {
                title: "Sales Agents",
                desc: "Qualify leads, answer product questions, and book meetings across channels.",
                tags: &["CRM", "Sequencing", "Analytics"],
            },
            SolutionItem {
                title: "Ops Automation",
                desc: "Orchestrate back-office tasks and data pipelines across systems.",
                tags: &["API", "Orchestration", "Workflow"],
            },
            SolutionItem {
                title: "Research Agents",
                desc: "Aggregate, summarize, and synthesize information from internal or external sources.",
                tags: &["RAG", "Summarization", "Synthesis"],
            },
            SolutionItem {
                title: "Custom Workflows",
                desc: "Build multi-step, multi-agent systems tailored to your use case.",
                tags: &["Chain-of-Thought", "Modular", "Scalable"],
            },
        ],
    },
    services: ServicesText {
        title: "Our Services",
        subtitle: "Comprehensive AI solutions tailored to your business needs",
        categories: &[
            ServiceCategory {
                title: "AI Consulting & Strategy",
                description: "Strategic guidance for AI adoption and implementation",
                icon: ServiceIcon::Network,
                details: &[
                    "AI maturity audits and readiness assessments",
                    "Corporate AI strategy aligned with business objectives",
                    "Ethics and regulatory compliance advisory",
                    "Economic impact evaluation and ROI measurement",
                ],
            },
            ServiceCategory {
                title: "Custom Agentic Solutions",
                description: "Tailored AI models and intelligent systems",
                icon: ServiceIcon::Robot,
                details: &[
                    "Predictive machine learning models",
                    "Computer vision for quality control and automation",
                    "Natural language processing and chatbots",
                    "Intelligent automation (RPA + AI) with self-learning capabilities",
                ],
            },
            ServiceCategory {
                title: "Generative AI Products",
                description: "Conversational AI and content generation systems",
                icon: ServiceIcon::Chatbot,
                details: &[
                    "Enterprise chatbots integrated with CRM systems",
                    "AI-powered content generation for text, images, and video",
                    "Intelligent translation and localization",
                    "Voice and vision agents for customer service",
                ],
            },
            ServiceCategory {
                title: "Advanced Analytics & Data Science",
                description: "Data-driven insights and predictive modeling",
                icon: ServiceIcon::Analytics,
                details: &[
                    "Predictive models and customer segmentation",
                    "Anomaly detection for security and operations",
                    "Data mining, cleansing, and structuring",
                    "Real-time dashboards and analysis systems",
                ],
            },
            ServiceCategory {
                title: "AI-Integrated Web & Mobile Platforms",
                description: "Intelligent applications and user interfaces",
                icon: ServiceIcon::Platform,
                details: &[
                    "Real-time intelligent dashboards",
                    "Mobile apps with voice, text, and image recognition",
                    "Interactive interfaces with integrated chatbots",
                    "API integrations with GPT, Vision, and Speech models",
                ],
            },
            ServiceCategory {
                title: "AI Training & Education",
                description: "Upskilling teams for the AI-driven future",
                icon: ServiceIcon::Education,
                details: &[
                    "Customized enterprise workshops and bootcamps",
                    "Executive presentations on AI trends and ethics",
                    "Technical training in ML, deep learning, and data analysis",
                    "Online courses and personalized learning resources",
                ],
            },
        ],
    },
    demo: DemoText {
        subtitle: "See how YUYAY agents think, act, and learn—in real time.",
        realtime: DemoFeature {
            title: "Real-time Conversations",
            description: "Watch AI agents respond naturally, understand context, and provide accurate answers in milliseconds.",
        },
        deployment: DemoFeature {
            title: "Instant Deployment",
            description: "Deploy agents across channels in minutes with our streamlined workflow.",
        },
        security: DemoFeature {
            title: "Enterprise Security",
            description: "SOC 2 compliant with end-to-end encryption and role-based access controls.",
        },
        architecture: DemoFeature {
            title: "Modular Architecture",
            description: "Flexible components that connect to your existing tools and scale with your needs.",
        },
    },
    about: AboutText {
        title: "About YUYAY",
        subtitle: "Your trusted partner in AI transformation",
        mission: AboutBlock {
            title: "Our Mission",
            desc: "Yuyay is a company specialized in the development of intelligent agents and artificial intelligence (AI) solutions adapted to the needs of each industry. His approach combines strategic consulting, data engineering and digital experience design to drive the technological transformation of organizations.",
        },
        approach: AboutBlock {
            title: "Our Approach",
            desc: "No cookie-cutter solutions. We take the time to understand your workflows, challenges, and goals. Every agent we build is tailored to your data, your tools, and your team—backed by rigorous testing, compliance standards, and ongoing support.",
        },
        values: &[
            AboutBlock {
                title: "Boutique Quality",
                desc: "Hands-on, personalized delivery for every client.",
            },
            AboutBlock {
                title: "Security First",
                desc: "SOC 2, GDPR, and enterprise-grade protection built in.",
            },
            AboutBlock {
                title: "Measurable Impact",
                desc: "We track real outcomes, not vanity metrics.",
            },
            AboutBlock {
                title: "Expert Team",
                desc: "Industry veterans from top tech companies.",
            },
        ],
    },
    leadership: LeadershipText {
        title: "Leadership",
        subtitle: "Meet the visionaries behind YUYAY",
        members: &[
            LeadershipMember {
                name: "Alejandro Ramirez",
                role: "Chief Executive Officer",
                description: "Visionary leader with 15+ years driving AI innovation and digital transformation.",
            },
            LeadershipMember {
                name: "Miklos Lukacs",
                role: "Chief Technology Officer",
                description: "Expert technologist specializing in enterprise AI solutions and scalable architectures.",
            },
        ],
    },
    integrations: IntegrationsText {
        title: "Integrations",
        subtitle: "Connect to the tools your teams already trust.",
        more: "+ 50 more integrations including ERPs, Analytics, Messaging, and Custom APIs",
    },
    use_cases: UseCasesText {
        title: "Use Cases",
        subtitle: "Solutions that Yuyay can develop for you.",
        cases: &[
            UseCase {
                title: "Automated Regulatory Compliance System",
                points: &[
                    "Identifies incomplete or non-compliant clauses.",
                    "Summarizes, classifies documents by risk, and generates alerts.",
                ],
            },
            UseCase {
                title: "Dynamic Credit Risk Predictive Model",
                points: &[
                    "Predicts defaults using ML models.",
                    "Integrates with unstructured data (comments, complaints).",
                ],
            },
            UseCase {
                title: "Financial Conversational Assistant",
                points: &[
                    "Integrates real customer data (balance, transactions, loans).",
                    "Answers frequent questions and provides digital assistance.",
                ],
            },
            UseCase {
                title: "Operational Intelligence Assistant (Processes)",
                points: &[
                    "Based on observation of real work patterns.",
                    "Integrates adaptive RPA with AI and generates improvement suggestions.",
                ],
            },
            UseCase {
                title: "Internal Financial Assistant for Analysts (Copilot)",
                points: &[
                    "Integrated with spreadsheets, ERP, and databases.",
                    "Converses in natural language and facilitates reading for internal productivity.",
                ],
            },
            UseCase {
                title: "Intelligent IVR System with Voice Agent",
                points: &[
                    "Understands natural language, avoiding button presses for redirection.",
                    "Integrates authentication and automatic interaction logging.",
                ],
            },
        ],
    },
    security: SecurityText {
        title: "Security & Compliance",
        subtitle: "Secure by design. Privacy-first deployment options.",
        items: &[
            SecurityItem {
                title: "SOC 2",
                desc: "Enterprise security controls and audits.",
            },
            SecurityItem {
                title: "GDPR",
                desc: "Data rights, portability, and erasure.",
            },
            SecurityItem {
                title: "Data Residency",
                desc: "Regional storage options and isolation.",
            },
            SecurityItem {
                title: "RBAC",
                desc: "Role-based access and approvals.",
            },
        ],
    },
    outcomes: OutcomesText {
        title: "Outcomes",
        subtitle: "Results our clients care about.",
        tiles: &[
            OutcomeTile {
                kpi: "+64%",
                title: "Resolution speed",
                desc: "Automated triage and guided workflows.",
            },
            OutcomeTile {
                kpi: "-42%",
                title: "Cost to serve",
                desc: "Self‑serve deflection and smart routing.",
            },
            OutcomeTile {
                kpi: "3.1×",
                title: "Automation throughput",
                desc: "Agent orchestration across systems.",
            },
            OutcomeTile {
                kpi: "+55%",
                title: "Lead qualification",
                desc: "Context‑aware sales agents.",
            },
            OutcomeTile {
                kpi: "< 2w",
                title: "Pilot to impact",
                desc: "Fast, scoped deployments.",
            },
        ],
    },
    testimonials: TestimonialsText {
        title: "Testimonials",
        subtitle: "Calm, credible proof—not hype.",
        items: &[
            Testimonial {
                quote: "YUYAY delivered measurable ROI in weeks.",
                name: "Sarah Mitchell",
                role: "CTO",
                company: "TechCorp Global",
            },
            Testimonial {
                quote: "Agents that actually understand our data.",
                name: "James Rodriguez",
                role: "VP of Operations",
                company: "Innovate Solutions",
            },
            Testimonial {
                quote: "From prototype to deployment—fast and safe.",
                name: "Emily Chen",
                role: "Head of Engineering",
                company: "DataFlow Inc",
            },
        ],
    },
    faq: FaqText {
        title: "FAQ",
        subtitle: "Everything you need to know about YUYAY AI Agents",
        items: &[
            FaqEntry {
                q: "How do you handle data privacy?",
                a: "We support SOC 2, GDPR, RBAC, and optional zero-retention deployments.",
            },
            FaqEntry {
                q: "Are agents custom or off‑the‑shelf?",
                a: "We tailor agents to your data, tools, and workflows with configurable guardrails.",
            },
            FaqEntry {
                q: "How long to integrate?",
                a: "Typical pilots run 2–4 weeks; full rollouts vary by scope and systems.",
            },
            FaqEntry {
                q: "What about accuracy and oversight?",
                a: "We implement evals, HITL review, and policy constraints for reliability.",
            },
            FaqEntry {
                q: "Pricing model?",
                a: "Fixed-scope pilots and tiered retainers for production with transparent usage costs.",
            },
        ],
    },
    cta: CtaText {
        title: "Let's build your AI advantage",
        subtitle: "Tell us about your goals. We'll propose a focused pilot within days.",
        form: CtaFormText {
            name: "Full name",
            email: "Work email",
            company: "Company",
            message: "What would you like to build?",
            terms: "I agree to the terms.",
            submit: "Book a demo",
        },
        why_title: "Why YUYAY",
        why_items: &[
            "Boutique, hands‑on delivery",
            "Secure by design",
            "Outcomes over vanity metrics",
            "Fast, focused pilots",
        ],
    },
    footer: FooterText {
        tagline: "Boutique AI agents, engineered for measurable outcomes.",
        solutions: "Solutions",
        solution_links: &["Support", "Sales", "Ops", "R&D"],
        company: "Company",
        company_links: &["How we work", "Outcomes", "FAQ"],
        legal: "Legal",
        legal_links: &["Privacy", "Terms"],
        copyright: "All rights reserved.",
    },
};

static ES: Translations = Translations {
    nav: NavText {
        solutions: "Soluciones",
        about_us: "Nosotros",
        integrations: "Integraciones",
        security: "Seguridad",
        outcomes: "Resultados",
        book_demo: "Reservar demo",
        live_demo: "Demo en Vivo",
    },
    hero: HeroText {
        badge: "Impulsar la productividad y el impacto medible",
        title: "Agentes de IA inteligentes diseñados para empresas",
        description: "YUYAY diseña sistemas inteligentes que aumentan equipos, automatizan flujos de trabajo y entregan resultados medibles—sin el ruido de las startups.",
        book_demo: "Reservar demo",
        see_use_cases: "Ver casos de uso",
    },
    trusted_by: "Confiado por equipos visionarios",
    solutions: SolutionsText {
        title: "Lo Que Construimos",
        subtitle: "Agentes inteligentes de extremo a extremo diseñados para generar impacto.",
        items: &[
            SolutionItem {
                title: "Agentes de Soporte",
                desc: "Resuelve consultas, clasifica tickets y desvía preguntas frecuentes con conocimiento verificado.",
                tags: &["Recuperación", "Herramientas", "Barreras", "HITL"],
            },
            SolutionItem {
                title: "Agentes de Ventas",
                desc: "Califica prospectos, responde preguntas de productos y agenda reuniones en todos los canales.",
                tags: &["CRM", "Secuenciación", "Analítica"],
            },
            SolutionItem {
                title: "Automatización de Ops",
                desc: "Orquesta tareas de back-office y pipelines de datos entre sistemas.",
                tags: &["API", "Orquestación", "Flujo"],
            },
            SolutionItem {
                title: "Agentes de Investigación",
                desc: "Agrega, resume y sintetiza información de fuentes internas o externas.",
                tags: &["RAG", "Resumen", "Síntesis"],
            },
            SolutionItem {
                title: "Flujos Personalizados",
                desc: "Construye sistemas multi-agente y multi-paso adaptados a tu caso de uso.",
                tags: &["Cadena de Pensamiento", "Modular", "Escalable"],
            },
        ],
    },
    services: ServicesText {
        title: "Nuestros Servicios",
        subtitle: "Soluciones integrales de IA adaptadas a las necesidades de su negocio",
        categories: &[
            ServiceCategory {
                title: "Consultoría y Estrategia en IA",
                description: "Orientación estratégica para la adopción e implementación de IA",
                icon: ServiceIcon::Network,
                details: &[
                    "Auditorías de madurez tecnológica y diagnósticos de preparación",
                    "Diseño de estrategias de IA alineadas con objetivos de negocio",
                    "Asesoramiento en ética y cumplimiento regulatorio",
                    "Evaluación de impacto económico y medición de ROI",
                ],
            },
            ServiceCategory {
                title: "Desarrollo de Soluciones Agénticas Personalizadas",
                description: "Modelos de IA y sistemas inteligentes a medida",
                icon: ServiceIcon::Robot,
                details: &[
                    "Modelos de machine learning predictivos",
                    "Visión por computadora para control de calidad y automatización",
                    "Procesamiento de lenguaje natural y chatbots",
                    "Automatización inteligente (RPA + IA) con auto-aprendizaje",
                ],
            },
            ServiceCategory {
                title: "Productos Conversacionales Generativos",
                description: "IA conversacional y sistemas de generación de contenido",
                icon: ServiceIcon::Chatbot,
                details: &[
                    "Chatbots empresariales integrados con sistemas CRM",
                    "Generación de contenido con IA para texto, imagen y video",
                    "Traducción y localización inteligente",
                    "Agentes de voz y visión para atención al cliente",
                ],
            },
            ServiceCategory {
                title: "Analítica Avanzada y Ciencia de Datos",
                description: "Insights basados en datos y modelado predictivo",
                icon: ServiceIcon::Analytics,
                details: &[
                    "Modelos predictivos y segmentación de clientes",
                    "Detección de anomalías para seguridad y operaciones",
                    "Minería, limpieza y estructuración de datos",
                    "Dashboards y sistemas de análisis en tiempo real",
                ],
            },
            ServiceCategory {
                title: "Plataformas Web y Apps con IA Integrada",
                description: "Aplicaciones inteligentes e interfaces de usuario",
                icon: ServiceIcon::Platform,
                details: &[
                    "Dashboards inteligentes en tiempo real",
                    "Apps móviles con reconocimiento de voz, texto e imágenes",
                    "Interfaces interactivas con chatbots integrados",
                    "Integraciones con APIs de GPT, Vision y Speech",
                ],
            },
            ServiceCategory {
                title: "Formación y Divulgación en Inteligencia Artificial",
                description: "Capacitación de equipos para el futuro impulsado por IA",
                icon: ServiceIcon::Education,
                details: &[
                    "Talleres empresariales personalizados y bootcamps técnicos",
                    "Charlas ejecutivas sobre tendencias de IA y ética",
                    "Entrenamiento técnico en ML, deep learning y análisis de datos",
                    "Cursos en línea y recursos educativos personalizados",
                ],
            },
        ],
    },
    demo: DemoText {
        subtitle: "Ve cómo los agentes de YUYAY piensan, actúan y aprenden—en tiempo real.",
        realtime: DemoFeature {
            title: "Conversaciones en Tiempo Real",
            description: "Observa cómo los agentes de IA responden naturalmente, comprenden el contexto y proporcionan respuestas precisas en milisegundos.",
        },
        deployment: DemoFeature {
            title: "Despliegue Instantáneo",
            description: "Despliega agentes en todos los canales en minutos con nuestro flujo de trabajo simplificado.",
        },
        security: DemoFeature {
            title: "Seguridad Empresarial",
            description: "Cumplimiento SOC 2 con cifrado de extremo a extremo y controles de acceso basados en roles.",
        },
        architecture: DemoFeature {
            title: "Arquitectura Modular",
            description: "Componentes flexibles que se conectan a tus herramientas existentes y escalan según tus necesidades.",
        },
    },
    about: AboutText {
        title: "Acerca de YUYAY",
        subtitle: "Tu socio de confianza en transformación de IA",
        mission: AboutBlock {
            title: "Nuestra Misión",
            desc: "Yuyay es una empresa especializada en el desarrollo de agentes inteligentes y soluciones de inteligencia artificial (IA) adaptadas a las necesidades de cada industria. Su enfoque combina la consultoría estratégica, la ingeniería de datos y el diseño de experiencias digitales para impulsar la transformación tecnológica de las organizaciones.",
        },
        approach: AboutBlock {
            title: "Nuestro Enfoque",
            desc: "Sin soluciones genéricas. Nos tomamos el tiempo para entender tus flujos de trabajo, desafíos y objetivos. Cada agente que construimos está adaptado a tus datos, tus herramientas y tu equipo, respaldado por pruebas rigurosas, estándares de cumplimiento y soporte continuo.",
        },
        values: &[
            AboutBlock {
                title: "Calidad Boutique",
                desc: "Entrega personalizada y práctica para cada cliente.",
            },
            AboutBlock {
                title: "Seguridad Primero",
                desc: "SOC 2, GDPR y protección de nivel empresarial integrada.",
            },
            AboutBlock {
                title: "Impacto Medible",
                desc: "Rastreamos resultados reales, no métricas de vanidad.",
            },
            AboutBlock {
                title: "Equipo Experto",
                desc: "Veteranos de la industria de las principales empresas tecnológicas.",
            },
        ],
    },
    leadership: LeadershipText {
        title: "Liderazgo",
        subtitle: "Conoce a los visionarios detrás de YUYAY",
        members: &[
            LeadershipMember {
                name: "Alejandro Ramirez",
                role: "Director Ejecutivo",
                description: "Líder visionario con más de 15 años impulsando la innovación en IA y transformación digital.",
            },
            LeadershipMember {
                name: "Miklos Lukacs",
                role: "Director de Tecnología",
                description: "Tecnólogo experto especializado en soluciones de IA empresarial y arquitecturas escalables.",
            },
        ],
    },
    integrations: IntegrationsText {
        title: "Integraciones",
        subtitle: "Conéctate a las herramientas en las que tus equipos ya confían.",
        more: "+ 50 integraciones más incluyendo ERPs, Analítica, Mensajería y APIs personalizadas",
    },
    use_cases: UseCasesText {
        title: "Casos de Uso",
        subtitle: "Soluciones que Yuyay puede desarrollar para ti.",
        cases: &[
            UseCase {
                title: "Sistema de Cumplimiento Normativo Automatizado",
                points: &[
                    "Identifica cláusulas incompletas o fuera de norma.",
                    "Resume, clasifica documentos según su riesgo y genera alertas.",
                ],
            },
            UseCase {
                title: "Modelo Predictivo de Riesgo Crediticio Dinámico",
                points: &[
                    "Predicción de impagos con modelos ML.",
                    "Integración con datos no estructurados (comentarios, reclamos).",
                ],
            },
            UseCase {
                title: "Asistente Conversacional Financiero",
                points: &[
                    "Integra datos reales del cliente (saldo, movimientos, préstamos).",
                    "Responde a preguntas frecuentes y asistencia digital.",
                ],
            },
            UseCase {
                title: "Asistente de Inteligencia Operativa (Procesos)",
                points: &[
                    "Basado en observación de patrones de trabajo reales.",
                    "Integra RPA con IA adaptativa y genera sugerencias de mejora.",
                ],
            },
            UseCase {
                title: "Asistente Financiero Interno para Analistas (Copiloto)",
                points: &[
                    "Integrado a hojas de cálculo, ERP y bases de datos.",
                    "Conversa en lenguaje natural y facilita lectura para productividad interna.",
                ],
            },
            UseCase {
                title: "Sistema IVR Inteligente con Agente de Voz",
                points: &[
                    "Entiende lenguaje natural evitando presionar botones para redirigir.",
                    "Integra autenticación y registro automático de interacciones.",
                ],
            },
        ],
    },
    security: SecurityText {
        title: "Seguridad y Cumplimiento",
        subtitle: "Seguro por diseño. Opciones de implementación que priorizan la privacidad.",
        items: &[
            SecurityItem {
                title: "SOC 2",
                desc: "Controles de seguridad empresarial y auditorías.",
            },
            SecurityItem {
                title: "GDPR",
                desc: "Derechos de datos, portabilidad y eliminación.",
            },
            SecurityItem {
                title: "Residencia de Datos",
                desc: "Opciones de almacenamiento regional y aislamiento.",
            },
            SecurityItem {
                title: "RBAC",
                desc: "Acceso basado en roles y aprobaciones.",
            },
        ],
    },
    outcomes: OutcomesText {
        title: "Resultados",
        subtitle: "Resultados que importan a nuestros clientes.",
        tiles: &[
            OutcomeTile {
                kpi: "+64%",
                title: "Velocidad de resolución",
                desc: "Clasificación automatizada y flujos de trabajo guiados.",
            },
            OutcomeTile {
                kpi: "-42%",
                title: "Costo de servicio",
                desc: "Desviación de autoservicio y enrutamiento inteligente.",
            },
            OutcomeTile {
                kpi: "3.1×",
                title: "Rendimiento de automatización",
                desc: "Orquestación de agentes entre sistemas.",
            },
            OutcomeTile {
                kpi: "+55%",
                title: "Calificación de prospectos",
                desc: "Agentes de ventas conscientes del contexto.",
            },
            OutcomeTile {
                kpi: "< 2s",
                title: "Piloto a impacto",
                desc: "Despliegues rápidos y enfocados.",
            },
        ],
    },
    testimonials: TestimonialsText {
        title: "Testimonios",
        subtitle: "Prueba tranquila y creíble—sin exageraciones.",
        items: &[
            Testimonial {
                quote: "YUYAY entregó ROI medible en semanas.",
                name: "Sarah Mitchell",
                role: "CTO",
                company: "TechCorp Global",
            },
            Testimonial {
                quote: "Agentes que realmente entienden nuestros datos.",
                name: "James Rodriguez",
                role: "VP de Operaciones",
                company: "Innovate Solutions",
            },
            Testimonial {
                quote: "Del prototipo al despliegue—rápido y seguro.",
                name: "Emily Chen",
                role: "Directora de Ingeniería",
                company: "DataFlow Inc",
            },
        ],
    },
    faq: FaqText {
        title: "Preguntas Frecuentes",
        subtitle: "Everything you need to know about YUYAY AI Agents",
        items: &[
            FaqEntry {
                q: "¿Cómo manejan la privacidad de datos?",
                a: "Soportamos SOC 2, GDPR, RBAC y despliegues opcionales de retención cero.",
            },
            FaqEntry {
                q: "¿Los agentes son personalizados o predefinidos?",
                a: "Adaptamos los agentes a tus datos, herramientas y flujos de trabajo con barreras configurables.",
            },
            FaqEntry {
                q: "¿Cuánto tiempo toma integrar?",
                a: "Los pilotos típicos duran 2–4 semanas; los despliegues completos varían según el alcance y los sistemas.",
            },
            FaqEntry {
                q: "¿Qué hay de la precisión y supervisión?",
                a: "Implementamos evaluaciones, revisión HITL y restricciones de políticas para confiabilidad.",
            },
            FaqEntry {
                q: "¿Modelo de precios?",
                a: "Pilotos de alcance fijo y retenciones escalonadas para producción con costos de uso transparentes.",
            },
        ],
    },
    cta: CtaText {
        title: "Construyamos tu ventaja de IA",
        subtitle: "Cuéntanos sobre tus objetivos. Propondremos un piloto enfocado en días.",
        form: CtaFormText {
            name: "Nombre completo",
            email: "Correo de trabajo",
            company: "Empresa",
            message: "¿Qué te gustaría construir?",
            terms: "Acepto los términos.",
            submit: "Reservar demo",
        },
        why_title: "Por qué YUYAY",
        why_items: &[
            "Entrega boutique y práctica",
            "Seguro por diseño",
            "Resultados sobre métricas de vanidad",
            "Pilotos rápidos y enfocados",
        ],
    },
    footer: FooterText {
        tagline: "Agentes de IA boutique, diseñados para resultados medibles.",
        solutions: "Soluciones",
        solution_links: &["Soporte", "Ventas", "Ops", "I+D"],
        company: "Empresa",
        company_links: &["Cómo trabajamos", "Resultados", "Preguntas Frecuentes"],
        legal: "Legal",
        legal_links: &["Privacidad", "Términos"],
        copyright: "Todos los derechos reservados.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Lang::En.toggled(), Lang::Es);
        assert_eq!(Lang::Es.toggled(), Lang::En);
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Es.code(), "es");
    }

    #[test]
    fn dictionaries_are_structurally_parallel() {
        let en = translations(Lang::En);
        let es = translations(Lang::Es);

        assert_eq!(en.solutions.items.len(), es.solutions.items.len());
        for (a, b) in en.solutions.items.iter().zip(es.solutions.items) {
            assert_eq!(a.tags.len(), b.tags.len());
        }
        assert_eq!(en.services.categories.len(), es.services.categories.len());
        for (a, b) in en.services.categories.iter().zip(es.services.categories) {
            assert_eq!(a.details.len(), b.details.len());
            assert!(a.icon == b.icon);
        }
        assert_eq!(en.about.values.len(), es.about.values.len());
        assert_eq!(en.leadership.members.len(), es.leadership.members.len());
        assert_eq!(en.use_cases.cases.len(), es.use_cases.cases.len());
        assert_eq!(en.security.items.len(), es.security.items.len());
        assert_eq!(en.outcomes.tiles.len(), es.outcomes.tiles.len());
        assert_eq!(en.testimonials.items.len(), es.testimonials.items.len());
        assert_eq!(en.faq.items.len(), es.faq.items.len());
        assert_eq!(en.cta.why_items.len(), es.cta.why_items.len());
        assert_eq!(en.footer.solution_links.len(), es.footer.solution_links.len());
        assert_eq!(en.footer.company_links.len(), es.footer.company_links.len());
        assert_eq!(en.footer.legal_links.len(), es.footer.legal_links.len());
    }

    #[test]
    fn outcome_tiles_cover_the_five_kpis() {
        assert_eq!(translations(Lang::En).outcomes.tiles.len(), 5);
    }
}
