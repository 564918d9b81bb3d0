use portfolio_models::content::service::{ProcessStep, Service};

pub static SERVICES: &[Service] = &[
    Service {
        title: "Backend Development",
        description: "Scalable, secure backend systems with modern frameworks and best practices.",
        features: &[
            "RESTful & GraphQL API design",
            "Microservices architecture",
            "Database design & optimization",
            "Authentication & authorization",
            "Real-time communication",
        ],
        tech: &["Node.js", "NestJS", "Go", "Laravel"],
    },
    Service {
        title: "Payment Integration",
        description: "Expert integration of payment gateways with secure transaction handling.",
        features: &[
            "Multiple payment provider integration",
            "PCI DSS compliance",
            "Webhook management",
            "Subscription billing",
            "Fraud prevention",
        ],
        tech: &["Stripe", "PayPal", "Telebirr", "CBE Birr"],
    },
    Service {
        title: "Full Stack Development",
        description: "Complete web applications from frontend to backend with modern \
                      technologies.",
        features: &[
            "Responsive UI/UX design",
            "Single Page Applications",
            "Progressive Web Apps",
            "Real-time features",
            "Third-party integrations",
        ],
        tech: &["React", "Next.js", "TypeScript", "Tailwind"],
    },
    Service {
        title: "System Architecture",
        description: "Designing scalable, maintainable system architectures for complex \
                      applications.",
        features: &[
            "Microservices design",
            "Event-driven architecture",
            "API gateway patterns",
            "Service mesh implementation",
            "System documentation",
        ],
        tech: &["Docker", "Kubernetes", "RabbitMQ", "Redis"],
    },
    Service {
        title: "Cloud & DevOps",
        description: "Cloud infrastructure setup, deployment automation, and CI/CD pipelines.",
        features: &[
            "AWS infrastructure setup",
            "CI/CD pipeline configuration",
            "Container orchestration",
            "Monitoring & logging",
            "Auto-scaling configuration",
        ],
        tech: &["AWS", "Docker", "GitHub Actions", "Terraform"],
    },
    Service {
        title: "API Development",
        description: "Secure, well-documented APIs with comprehensive testing and monitoring.",
        features: &[
            "RESTful API design",
            "GraphQL implementation",
            "API documentation",
            "Rate limiting & throttling",
            "API versioning",
        ],
        tech: &["OpenAPI", "Swagger", "Postman", "GraphQL"],
    },
];

pub static PROCESS: &[ProcessStep] = &[
    ProcessStep {
        step: 1,
        title: "Discovery & Planning",
        description: "Understanding your requirements, technical needs, and business goals.",
    },
    ProcessStep {
        step: 2,
        title: "Architecture & Design",
        description: "Designing scalable system architecture with best practices and patterns.",
    },
    ProcessStep {
        step: 3,
        title: "Development & Testing",
        description: "Building robust solutions with comprehensive testing and quality assurance.",
    },
    ProcessStep {
        step: 4,
        title: "Deployment & Support",
        description: "Smooth deployment to production with ongoing maintenance and support.",
    },
];
