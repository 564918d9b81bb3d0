use std::cmp::Reverse;

use portfolio_core_content_contracts::ContentService;
use portfolio_models::content::{
    blog::{BlogPost, BlogTag},
    experience::{Education, Position},
    page::Page,
    profile::Profile,
    project::{Project, ProjectFilter},
    service::{ProcessStep, Service},
    skill::{Proficiency, SkillGroup},
    Catalog,
};

#[derive(Debug, Clone, Copy)]
pub struct ContentServiceImpl {
    catalog: Catalog,
}

impl ContentServiceImpl {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl ContentService for ContentServiceImpl {
    fn profile(&self) -> &'static Profile {
        self.catalog.profile
    }

    fn pages(&self) -> &'static [Page] {
        self.catalog.pages
    }

    fn skill_groups(&self) -> &'static [SkillGroup] {
        self.catalog.skill_groups
    }

    fn proficiencies(&self) -> &'static [Proficiency] {
        self.catalog.proficiencies
    }

    fn experience(&self) -> &'static [Position] {
        self.catalog.experience
    }

    fn education(&self) -> &'static Education {
        self.catalog.education
    }

    fn projects(&self, filter: &ProjectFilter) -> Vec<Project> {
        let search = filter
            .search
            .as_deref()
            .map(|search| search.trim().to_lowercase())
            .filter(|search| !search.is_empty());

        self.catalog
            .projects
            .iter()
            .filter(|project| filter.category.map_or(true, |c| project.category == c))
            .filter(|project| {
                search
                    .as_deref()
                    .map_or(true, |search| matches_search(project, search))
            })
            .copied()
            .collect()
    }

    fn services(&self) -> &'static [Service] {
        self.catalog.services
    }

    fn process(&self) -> &'static [ProcessStep] {
        self.catalog.process
    }

    fn blog_posts(&self, tag: Option<BlogTag>) -> Vec<BlogPost> {
        let mut posts = self
            .catalog
            .blog_posts
            .iter()
            .filter(|post| tag.map_or(true, |tag| post.has_tag(tag)))
            .copied()
            .collect::<Vec<_>>();
        posts.sort_by_key(|post| Reverse(post.published));
        if tag.is_none() && !posts.is_empty() {
            // shown above the listing as the featured post
            posts.remove(0);
        }
        posts
    }

    fn featured_post(&self, tag: Option<BlogTag>) -> Option<BlogPost> {
        if tag.is_some() {
            return None;
        }

        self.catalog
            .blog_posts
            .iter()
            .max_by_key(|post| post.published)
            .copied()
    }

    fn blog_post(&self, slug: &str) -> Option<BlogPost> {
        self.catalog
            .blog_posts
            .iter()
            .find(|post| post.slug == slug)
            .copied()
    }
}

/// `search` must already be lowercase.
fn matches_search(project: &Project, search: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(search);
    contains(project.title)
        || contains(project.description)
        || project.tech.iter().any(|&tech| contains(tech))
}
