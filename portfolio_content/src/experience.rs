use portfolio_models::content::experience::{Education, Period, Position};

pub static POSITIONS: &[Position] = &[
    Position {
        title: "Full Stack Developer / Laravel Heavily",
        company: "Tibeb Technology PLC",
        period: Period {
            start: "October 2024",
            end: None,
        },
        description: "Collaborating with stakeholders to gather requirements, documenting \
                      technical specifications, and designing web applications using Laravel \
                      with PostgreSQL and MySQL. Implementing responsive frontend solutions and \
                      maintaining awareness of current design trends in the Ethiopian market.",
        technologies: &[
            "Laravel",
            "PostgreSQL",
            "MySQL",
            "PHP",
            "Frontend Technologies",
        ],
    },
    Position {
        title: "Fintech Manager / Payment Gateway Manager",
        company: "Kegeberew Technology Solutions",
        period: Period {
            start: "July 2024",
            end: Some("October 2024"),
        },
        description: "Designed and implemented software architecture for fintech solutions, \
                      enhancing payment gateway efficiency and regulatory compliance. Led \
                      microservices development and data analytics initiatives to drive business \
                      growth in agile project management environment.",
        technologies: &[
            "Microservices",
            "Payment Gateways",
            "API Design",
            "Agile",
            "Data Analytics",
        ],
    },
    Position {
        title: "Backend Developer",
        company: "PurposeBlack Eth",
        period: Period {
            start: "January 2024",
            end: Some("June 2024"),
        },
        description: "Enhanced client satisfaction by resolving operational issues and \
                      integrating third-party payment APIs. Built secure, scalable cloud-based \
                      architectures and reusable code libraries while collaborating with \
                      cross-functional teams to optimize payment processing.",
        technologies: &[
            "Node.js",
            "AWS",
            "Third-party APIs",
            "Security",
            "Cloud Architecture",
        ],
    },
    Position {
        title: "Full Stack Software Developer",
        company: "Hikel Technologies LLC",
        period: Period {
            start: "May 2022",
            end: Some("December 2023"),
        },
        description: "Enhanced user experience through responsive designs and robust back-end \
                      systems. Integrated payment gateways, mentored junior developers, and \
                      contributed to scalable cloud solutions. Participated extensively in code \
                      reviews, debugging, and database design.",
        technologies: &[
            "React",
            "Node.js",
            "Payment Integration",
            "PostgreSQL",
            "Cloud Solutions",
        ],
    },
];

pub static EDUCATION: Education = Education {
    degree: "Bachelor of Science in Information Systems",
    institution: "Gondar University",
    description: "Comprehensive program covering coding, programming, system design, and project \
                  management. Equipped with technical skills necessary to develop and optimize \
                  complex software systems and applications.",
};
