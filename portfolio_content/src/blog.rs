use std::sync::LazyLock;

use chrono::NaiveDate;
use portfolio_models::content::blog::{BlogPost, BlogTag};

const AUTHOR: &str = "Melake Sisay";

pub static BLOG_POSTS: LazyLock<Vec<BlogPost>> = LazyLock::new(|| {
    vec![
        BlogPost {
            slug: "scalable-microservices-nodejs-nestjs",
            title: "Building Scalable Microservices with Node.js and NestJS",
            excerpt: "Learn how to design and implement a microservices architecture that scales \
                      with your business needs.",
            summary: "In this comprehensive guide, we explore the fundamentals of microservices \
                      architecture and how to implement it using Node.js and NestJS...",
            published: date(2024, 12, 15),
            read_time_minutes: 8,
            tags: &[BlogTag::Backend, BlogTag::Microservices],
            author: AUTHOR,
            image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&q=80",
        },
        BlogPost {
            slug: "payment-gateway-integration-best-practices",
            title: "Payment Gateway Integration: Best Practices",
            excerpt: "A deep dive into integrating payment gateways securely and efficiently in \
                      your applications.",
            summary: "Payment integration is critical for any e-commerce or fintech application. \
                      This article covers security, compliance, and implementation strategies...",
            published: date(2024, 12, 10),
            read_time_minutes: 10,
            tags: &[BlogTag::Payments, BlogTag::Backend],
            author: AUTHOR,
            image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
        },
        BlogPost {
            slug: "docker-kubernetes-for-backend-developers",
            title: "Docker and Kubernetes for Backend Developers",
            excerpt: "Understanding containerization and orchestration for modern backend \
                      applications.",
            summary: "Containerization has revolutionized how we deploy applications. Learn the \
                      essentials of Docker and Kubernetes...",
            published: date(2024, 12, 5),
            read_time_minutes: 12,
            tags: &[BlogTag::Devops, BlogTag::Backend],
            author: AUTHOR,
            image: "https://images.unsplash.com/photo-1605745341112-85968b19335b?w=800&q=80",
        },
        BlogPost {
            slug: "event-driven-architectures",
            title: "Building Event-Driven Architectures",
            excerpt: "Design patterns and implementation strategies for event-driven systems.",
            summary: "Event-driven architecture is essential for building responsive, scalable \
                      systems. This guide walks through implementation patterns...",
            published: date(2024, 11, 28),
            read_time_minutes: 9,
            tags: &[BlogTag::Microservices, BlogTag::Backend],
            author: AUTHOR,
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        },
        BlogPost {
            slug: "database-design-for-high-performance",
            title: "Database Design for High Performance",
            excerpt: "Optimizing database schemas and queries for maximum performance.",
            summary: "Database performance is crucial for application success. Learn optimization \
                      techniques and design patterns...",
            published: date(2024, 11, 20),
            read_time_minutes: 11,
            tags: &[BlogTag::Backend, BlogTag::Tutorial],
            author: AUTHOR,
            image: "https://images.unsplash.com/photo-1544383835-bda2bc66a55d?w=800&q=80",
        },
        BlogPost {
            slug: "ci-cd-pipelines-with-github-actions",
            title: "Implementing CI/CD Pipelines with GitHub Actions",
            excerpt: "Automating your deployment process for faster and more reliable releases.",
            summary: "Continuous Integration and Deployment are essential for modern development \
                      workflows. This tutorial shows how to set up CI/CD...",
            published: date(2024, 11, 15),
            read_time_minutes: 7,
            tags: &[BlogTag::Devops, BlogTag::Tutorial],
            author: AUTHOR,
            image: "https://images.unsplash.com/photo-1618401479427-c8ef9465fbe1?w=800&q=80",
        },
    ]
});

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
