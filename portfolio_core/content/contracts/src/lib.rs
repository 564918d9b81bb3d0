use portfolio_models::content::{
    blog::{BlogPost, BlogTag},
    experience::{Education, Position},
    page::Page,
    profile::Profile,
    project::{Project, ProjectFilter},
    service::{ProcessStep, Service},
    skill::{Proficiency, SkillGroup},
};

/// Read-only access to the content rendered by the pages of the site.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContentService: Send + Sync + 'static {
    fn profile(&self) -> &'static Profile;

    /// Returns the navigable pages in navigation order.
    fn pages(&self) -> &'static [Page];

    fn skill_groups(&self) -> &'static [SkillGroup];

    fn proficiencies(&self) -> &'static [Proficiency];

    /// Returns the professional positions, most recent first.
    fn experience(&self) -> &'static [Position];

    fn education(&self) -> &'static Education;

    /// Returns the projects matching the filter in catalog order.
    fn projects(&self, filter: &ProjectFilter) -> Vec<Project>;

    fn services(&self) -> &'static [Service];

    fn process(&self) -> &'static [ProcessStep];

    /// Returns the blog posts with the given tag, newest first. Without a tag
    /// all posts except the featured one are returned.
    fn blog_posts(&self, tag: Option<BlogTag>) -> Vec<BlogPost>;

    /// Returns the post highlighted above the listing. It is only shown if
    /// no tag is selected.
    fn featured_post(&self, tag: Option<BlogTag>) -> Option<BlogPost>;

    fn blog_post(&self, slug: &str) -> Option<BlogPost>;
}

#[cfg(feature = "mock")]
impl MockContentService {
    pub fn with_projects(mut self, filter: ProjectFilter, result: Vec<Project>) -> Self {
        self.expect_projects()
            .once()
            .with(mockall::predicate::eq(filter))
            .return_once(move |_| result);
        self
    }

    pub fn with_blog_posts(mut self, tag: Option<BlogTag>, result: Vec<BlogPost>) -> Self {
        self.expect_blog_posts()
            .once()
            .with(mockall::predicate::eq(tag))
            .return_once(move |_| result);
        self
    }

    pub fn with_featured_post(mut self, tag: Option<BlogTag>, result: Option<BlogPost>) -> Self {
        self.expect_featured_post()
            .once()
            .with(mockall::predicate::eq(tag))
            .return_once(move |_| result);
        self
    }

    pub fn with_blog_post(mut self, slug: String, result: Option<BlogPost>) -> Self {
        self.expect_blog_post()
            .once()
            .with(mockall::predicate::eq(slug))
            .return_once(move |_| result);
        self
    }
}
