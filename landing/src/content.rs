// Static page copy and the embedded testimonial list

use omw_carousel::ItemRepository;

const TESTIMONIALS_JSON: &str = include_str!("../content/testimonials.json");

/// Parse the testimonials embedded at compile time.
pub fn testimonials() -> omw_carousel::Result<ItemRepository> {
    ItemRepository::from_json_str(TESTIMONIALS_JSON)
}

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Work", href: "#work" },
    NavLink { label: "Process", href: "#process" },
    NavLink { label: "Reviews", href: "#reviews" },
    NavLink { label: "FAQ", href: "#faq" },
];

pub const CTA_LABEL: &str = "Start Your Growth Plan";

/// Floating metric card next to the hero headline.
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
    /// Parallax travel over the first 500 px of scroll
    pub travel: f64,
}

pub const METRICS: &[Metric] = &[
    Metric { value: "+42%", label: "Revenue Growth", caption: "QoQ", travel: 150.0 },
    Metric { value: "3.2x", label: "Ad Performance", caption: "ROAS", travel: 80.0 },
    Metric { value: "94%", label: "Targeting Precision", caption: "Accuracy", travel: 50.0 },
];

pub struct Move {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MOVES: &[Move] = &[
    Move {
        title: "ALIGN",
        description: "Pinpoint your ideal buyer. Stop shouting into the void.",
    },
    Move {
        title: "OPTIMISE",
        description: "Autopilot campaigns. Smarter budgets. Less waste.",
    },
    Move {
        title: "GROW",
        description: "Unified revenue engine. Sales + Marketing = one force.",
    },
];

pub struct Service {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct ServiceGroup {
    pub category: &'static str,
    pub services: &'static [Service],
}

pub const SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        category: "B2C",
        services: &[
            Service { title: "Social Ads", subtitle: "short-form that converts" },
            Service { title: "Video Production", subtitle: "snackable, cinematic content" },
            Service { title: "Outdoor & Transit", subtitle: "bold mass visibility" },
            Service { title: "Influencers", subtitle: "strategic matchmaking" },
        ],
    },
    ServiceGroup {
        category: "MarTech",
        services: &[
            Service { title: "Landing Pages", subtitle: "instant conversion funnels" },
            Service { title: "CRM + Automations", subtitle: "follow-ups that close" },
            Service { title: "AI Funnels", subtitle: "intent-driven flows" },
            Service { title: "Analytics", subtitle: "clear numbers, clear moves" },
        ],
    },
    ServiceGroup {
        category: "B2B",
        services: &[
            Service { title: "Lead Magnets", subtitle: "webinars, playbooks" },
            Service { title: "Nurture Streams", subtitle: "multi-touch cadence" },
            Service { title: "Meeting Automation", subtitle: "no missed demos" },
            Service { title: "Retargeting", subtitle: "bring buyers back" },
        ],
    },
];

pub const BRANDS: &[&str] = &[
    "TechVision",
    "GrowthWorks",
    "ScaleUp",
    "Innovate",
    "CloudSync",
    "DataFlow",
    "NextWave",
    "Velocity",
    "PulseMedia",
    "Vertex",
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What industries do you serve?",
        answer: "D2C, Health, Fintech, SaaS, Retail — we adapt fast.",
    },
    Faq {
        question: "Do you manage ad spend?",
        answer: "Yes, if you want us to — performance included.",
    },
    Faq {
        question: "How fast will we see impact?",
        answer: "Clarity in 2–4 weeks. Momentum compounds after cycles.",
    },
    Faq {
        question: "What makes you different?",
        answer: "We align strategy, tech, and execution. No silos. Just growth.",
    },
];
