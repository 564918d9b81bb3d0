//! The content rendered by the pages of the site.
//!
//! Everything in here is authored by hand and trusted; nothing is validated.

use std::sync::LazyLock;

use portfolio_models::content::{page::Page, Catalog};

pub mod blog;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod services;
pub mod skills;

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    profile: &profile::PROFILE,
    pages: Page::ALL,
    skill_groups: skills::SKILL_GROUPS,
    proficiencies: skills::PROFICIENCIES,
    experience: experience::POSITIONS,
    education: &experience::EDUCATION,
    projects: projects::PROJECTS,
    services: services::SERVICES,
    process: services::PROCESS,
    blog_posts: blog::BLOG_POSTS.as_slice(),
});
