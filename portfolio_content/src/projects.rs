use portfolio_models::content::project::{Project, ProjectCategory};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Kpay Payment Gateway",
        category: ProjectCategory::Payment,
        description: "Comprehensive payment gateway system supporting multiple African payment \
                      providers including Telebirr, CBE Birr, and Chapa.",
        features: &[
            "Multi-provider payment integration",
            "Real-time transaction processing",
            "Webhook management",
            "Merchant dashboard",
            "Compliance and security standards",
        ],
        tech: &["Node.js", "NestJS", "PostgreSQL", "Redis", "AWS"],
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
    },
    Project {
        title: "MojoPay Microservices System",
        category: ProjectCategory::Microservices,
        description: "Scalable microservices-based payment processing platform with event-driven \
                      architecture.",
        features: &[
            "Microservices architecture",
            "Event-driven communication",
            "Distributed transaction handling",
            "Service orchestration",
            "High availability design",
        ],
        tech: &[
            "Go Fiber",
            "Node.js",
            "RabbitMQ",
            "PostgreSQL",
            "Docker",
            "Kubernetes",
        ],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
    },
    Project {
        title: "Marketplace-as-a-Service Platform",
        category: ProjectCategory::Fullstack,
        description: "White-label e-commerce platform enabling businesses to launch their own \
                      marketplaces quickly.",
        features: &[
            "Multi-tenant architecture",
            "Vendor management system",
            "Product catalog management",
            "Order processing & fulfillment",
            "Payment gateway integration",
        ],
        tech: &[
            "React",
            "Next.js",
            "Node.js",
            "PostgreSQL",
            "Stripe",
            "AWS S3",
        ],
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&q=80",
    },
    Project {
        title: "ERP Reporting System",
        category: ProjectCategory::Fullstack,
        description: "Enterprise resource planning system with advanced reporting and analytics \
                      for textile manufacturing.",
        features: &[
            "Real-time data analytics",
            "Custom report generation",
            "Inventory management",
            "Production tracking",
            "Financial reporting",
        ],
        tech: &["Laravel", "Vue.js", "MySQL", "Chart.js", "Redis"],
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
    },
    Project {
        title: "Centwork Job & Engagement Platform",
        category: ProjectCategory::Fullstack,
        description: "Comprehensive platform connecting employers with talent, featuring job \
                      listings and engagement tools.",
        features: &[
            "Job posting and search",
            "Applicant tracking system",
            "Real-time messaging",
            "Profile management",
            "Matching algorithm",
        ],
        tech: &["React", "Node.js", "MongoDB", "Socket.io", "AWS"],
        image: "https://images.unsplash.com/photo-1521737711867-e3b97375f902?w=800&q=80",
    },
    Project {
        title: "Ethiopian Calendar Library",
        category: ProjectCategory::Tools,
        description: "Open-source NPM package for Ethiopian calendar conversion and date \
                      manipulation.",
        features: &[
            "Gregorian to Ethiopian conversion",
            "Date manipulation utilities",
            "Localization support",
            "TypeScript support",
            "Comprehensive documentation",
        ],
        tech: &["TypeScript", "Node.js", "Jest", "NPM"],
        image: "https://images.unsplash.com/photo-1506784983877-45594efa4cbe?w=800&q=80",
    },
];
