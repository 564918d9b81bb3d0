use portfolio_models::content::skill::{Proficiency, SkillArea, SkillGroup};

pub static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        area: SkillArea::Backend,
        skills: &[
            "Node.js",
            "TypeScript",
            "NestJS",
            "Go Fiber",
            "Gin",
            "Laravel",
            "PHP",
            "Python",
            "FastAPI",
        ],
    },
    SkillGroup {
        area: SkillArea::Frontend,
        skills: &[
            "React",
            "Next.js",
            "Tailwind CSS",
            "Redux Toolkit",
            "Alpine.js",
            "Livewire",
            "HTML/CSS",
        ],
    },
    SkillGroup {
        area: SkillArea::Databases,
        skills: &[
            "PostgreSQL",
            "MySQL",
            "MongoDB",
            "SQLite",
            "Redis",
            "Database Design",
        ],
    },
    SkillGroup {
        area: SkillArea::CloudDevops,
        skills: &[
            "AWS",
            "Docker",
            "CI/CD",
            "Kubernetes",
            "GitHub Actions",
            "Linux",
        ],
    },
    SkillGroup {
        area: SkillArea::Payments,
        skills: &[
            "Telebirr", "CBE Birr", "Chapa", "Stripe", "PayPal", "Amole", "Wise",
        ],
    },
    SkillGroup {
        area: SkillArea::Architecture,
        skills: &[
            "Microservices",
            "Event-Driven",
            "RESTful APIs",
            "GraphQL",
            "gRPC",
            "System Design",
        ],
    },
    SkillGroup {
        area: SkillArea::VersionControl,
        skills: &["Git", "GitHub", "GitLab", "Jira", "Agile", "SDLC"],
    },
    SkillGroup {
        area: SkillArea::Security,
        skills: &[
            "JWT",
            "OAuth 2.0",
            "RBAC",
            "Data Protection",
            "API Security",
        ],
    },
];

pub static PROFICIENCIES: &[Proficiency] = &[
    Proficiency {
        name: "Node.js / TypeScript",
        level: 95,
    },
    Proficiency {
        name: "React / Next.js",
        level: 90,
    },
    Proficiency {
        name: "Go (Fiber/Gin)",
        level: 85,
    },
    Proficiency {
        name: "Laravel / PHP",
        level: 90,
    },
    Proficiency {
        name: "PostgreSQL / MySQL",
        level: 88,
    },
    Proficiency {
        name: "AWS / Docker",
        level: 82,
    },
    Proficiency {
        name: "Payment Integration",
        level: 95,
    },
    Proficiency {
        name: "System Design",
        level: 85,
    },
];
