use portfolio_models::content::profile::{
    Availability, ContactChannel, ContactChannelKind, Highlight, Profile, SocialLink,
    SocialPlatform, Stat,
};

pub static PROFILE: Profile = Profile {
    name: "Melak Sisay",
    headline: "Full Stack Developer",
    summary: "Full Stack Developer specializing in modern web technologies, payment systems, and \
              scalable microservices architecture.",
    location: "Addis Ababa, Ethiopia",
    resume_url: "https://qtrypzzcjebvfcihiynt.supabase.co/storage/v1/object/public/base44-prod/\
                 public/user_69367d07bfcde9a09dd882f1/57ab486c6_MelakProfessionalResumev2.pdf",
    availability: Availability {
        title: "Available for Freelance & Contract Work",
        description: "I'm currently accepting new projects. Let's work together to build \
                      something amazing!",
    },
    stats: &[
        Stat {
            value: "3+",
            label: "Years Experience",
        },
        Stat {
            value: "20+",
            label: "Projects Completed",
        },
        Stat {
            value: "10+",
            label: "Payment Integrations",
        },
        Stat {
            value: "100%",
            label: "Client Satisfaction",
        },
    ],
    highlights: &[
        Highlight {
            title: "Clean Code Advocate",
            description: "I believe in writing maintainable, scalable code that stands the test \
                          of time.",
        },
        Highlight {
            title: "Problem Solver",
            description: "Complex challenges excite me. I thrive on finding elegant solutions to \
                          difficult problems.",
        },
        Highlight {
            title: "Continuous Learner",
            description: "Technology evolves rapidly, and I'm committed to staying at the \
                          forefront of innovation.",
        },
        Highlight {
            title: "Team Player",
            description: "I value collaboration and believe great products are built by great \
                          teams.",
        },
    ],
    contact_channels: &[
        ContactChannel {
            kind: ContactChannelKind::Email,
            value: "melakesisay@gmail.com",
            link: Some("mailto:melakesisay@gmail.com"),
        },
        ContactChannel {
            kind: ContactChannelKind::Phone,
            value: "+251 935 587 112",
            link: Some("tel:+251935587112"),
        },
        ContactChannel {
            kind: ContactChannelKind::Location,
            value: "Addis Ababa, Ethiopia",
            link: None,
        },
    ],
    social_links: &[
        SocialLink {
            platform: SocialPlatform::GitHub,
            url: "https://github.com/mel-ak",
        },
        SocialLink {
            platform: SocialPlatform::LinkedIn,
            url: "https://www.linkedin.com/in/melake-sisay-ab6a3a105/",
        },
    ],
};
