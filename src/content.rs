//! The résumé itself. Static text, rendered by the panels.

pub const NAME: &str = "BRANDON HAN";
pub const INITIALS: &str = "BH";
pub const TAGLINE: &str = "RESEARCH LAB MANAGER & ASPIRING ML ENGINEER";
pub const AVATAR: &str = "/assets/avatar.png";
pub const FOOTER: &str =
    "\u{a9} 2025 BRANDON HAN - RESUME ARCADE - INSERT COIN TO CONTINUE";

pub const SUMMARY: &str = "Research Lab Manager with 4+ years experience at \
    UCLA, transitioning into an ML Engineering career after completing my \
    Master's in Computer Science.";

pub const FOCUS: &str = "I specialize in building AI-powered data \
    processing systems and have developed numerous web applications and ML \
    models to solve complex problems in healthcare and research.";

pub const PLAYER_STATS: &[&str] = &[
    "Expertise in Python, ML/DS Libraries, and Web Development",
    "Secured $1.2M+ in funding for AI infrastructure development",
    "Managed 120+ lab members and clients across multiple projects",
    "Implemented AI-powered pipelines for data processing and analysis",
    "Currently pursuing MS in Computer Science at USC (Expected Dec 2025)",
];

pub struct SkillGroup {
    pub title: &'static str,
    /// Items with a 0..=100 power level, drawn as a bar.
    pub items: &'static [(&'static str, u8)],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "LANGUAGES",
        items: &[("Python", 95), ("SQL", 80), ("JavaScript / TypeScript", 75)],
    },
    SkillGroup {
        title: "ML / DATA",
        items: &[
            ("PyTorch", 80),
            ("scikit-learn", 85),
            ("pandas / NumPy", 90),
            ("LLM pipelines", 75),
        ],
    },
    SkillGroup {
        title: "WEB & INFRA",
        items: &[("React", 75), ("REST APIs", 80), ("Cloud & GPU servers", 70)],
    },
];

pub struct Role {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        title: "MS, Computer Science",
        place: "University of Southern California",
        period: "Expected Dec 2025",
        highlights: &["Coursework focused on machine learning and systems."],
    },
    Role {
        title: "Research Lab Manager",
        place: "UCLA",
        period: "4+ years",
        highlights: &[
            "Secured $1.2M+ in funding for AI infrastructure development.",
            "Managed 120+ lab members and clients across multiple projects.",
            "Built AI-powered pipelines for data processing and analysis.",
            "Developed web applications and ML models for healthcare research.",
        ],
    },
];

pub struct Channel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT: &[Channel] = &[
    Channel {
        label: "EMAIL",
        value: "brandon.han@example.com",
        href: "mailto:brandon.han@example.com",
    },
    Channel {
        label: "LINKEDIN",
        value: "linkedin.com/in/brandon-han",
        href: "https://linkedin.com/in/brandon-han",
    },
    Channel {
        label: "GITHUB",
        value: "github.com/brandon-han",
        href: "https://github.com/brandon-han",
    },
];
