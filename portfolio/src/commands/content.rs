use std::fmt::Write;

use anyhow::Context;
use clap::Subcommand;
use portfolio_core_content_contracts::ContentService;
use portfolio_models::{
    contact::ContactField,
    content::{blog::BlogPost, parse_filter, project::ProjectFilter},
};
use serde_json::json;

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// List the pages of the site
    Pages,
    /// Show the landing page
    Home,
    /// Show the about page
    About,
    /// Show skill groups and proficiency levels
    Skills,
    /// Show professional experience and education
    #[command(aliases(["exp"]))]
    Experience,
    /// Show projects
    Projects {
        /// Only show projects of this category (payment, microservices,
        /// fullstack, tools or all)
        #[arg(short, long)]
        category: Option<String>,
        /// Only show projects whose title, description or tech stack contain
        /// this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show services and the engagement process
    Services,
    /// Show blog posts
    Blog {
        /// Only show posts with this tag (backend, payments, microservices,
        /// devops, tutorial or all)
        #[arg(short, long)]
        tag: Option<String>,
        /// Show a single post
        slug: Option<String>,
    },
    /// Show the ways to get in touch
    Contact,
}

impl ContentCommand {
    pub fn invoke(self, content: &impl ContentService, json: bool) -> anyhow::Result<()> {
        let output = if json {
            self.render_json(content)?
        } else {
            self.render_text(content)?
        };
        println!("{output}");
        Ok(())
    }

    pub fn render_json(self, content: &impl ContentService) -> anyhow::Result<String> {
        let value = match self {
            Self::Pages => json!(content
                .pages()
                .iter()
                .map(|page| json!({"page": page, "name": page.name(), "path": page.path()}))
                .collect::<Vec<_>>()),
            Self::Home | Self::About => json!(content.profile()),
            Self::Skills => json!({
                "groups": content.skill_groups(),
                "proficiencies": content.proficiencies(),
            }),
            Self::Experience => json!({
                "positions": content.experience(),
                "education": content.education(),
            }),
            Self::Projects { category, search } => {
                json!(content.projects(&project_filter(category, search)?))
            }
            Self::Services => json!({
                "services": content.services(),
                "process": content.process(),
            }),
            Self::Blog {
                slug: Some(slug), ..
            } => json!(find_post(content, &slug)?),
            Self::Blog { tag, slug: None } => {
                let tag = tag.as_deref().map(parse_filter).transpose()?.flatten();
                json!({
                    "featured": content.featured_post(tag),
                    "posts": content.blog_posts(tag),
                })
            }
            Self::Contact => json!({
                "channels": content.profile().contact_channels,
                "social_links": content.profile().social_links,
            }),
        };

        serde_json::to_string_pretty(&value).context("Failed to serialize content")
    }

    pub fn render_text(self, content: &impl ContentService) -> anyhow::Result<String> {
        let mut out = String::new();
        let profile = content.profile();

        match self {
            Self::Pages => {
                for page in content.pages() {
                    writeln!(out, "{:<12} {}", page.name(), page.path())?;
                }
            }
            Self::Home => {
                writeln!(out, "{}\n{}\n", profile.name, profile.headline)?;
                writeln!(out, "{}\n", profile.summary)?;
                writeln!(
                    out,
                    "{}: {}\n",
                    profile.availability.title, profile.availability.description
                )?;
                for stat in profile.stats {
                    writeln!(out, "  {:>5}  {}", stat.value, stat.label)?;
                }
            }
            Self::About => {
                writeln!(out, "About {}\n", profile.name)?;
                writeln!(out, "{}\n", profile.summary)?;
                for highlight in profile.highlights {
                    writeln!(out, "* {}\n  {}", highlight.title, highlight.description)?;
                }
                writeln!(out, "\nLocation: {}", profile.location)?;
                writeln!(out, "Resume: {}", profile.resume_url)?;
            }
            Self::Skills => {
                for group in content.skill_groups() {
                    writeln!(out, "{}", group.area.title())?;
                    writeln!(out, "  {}\n", group.skills.join(", "))?;
                }
                writeln!(out, "Proficiency")?;
                for proficiency in content.proficiencies() {
                    let filled = usize::from(proficiency.level.min(100)) / 5;
                    writeln!(
                        out,
                        "  {:<28} {}{} {:>3}%",
                        proficiency.name,
                        "#".repeat(filled),
                        ".".repeat(20 - filled),
                        proficiency.level
                    )?;
                }
            }
            Self::Experience => {
                for position in content.experience() {
                    writeln!(out, "{} at {}", position.title, position.company)?;
                    writeln!(out, "  {}", position.period)?;
                    writeln!(out, "  {}", position.description)?;
                    writeln!(out, "  {}\n", position.technologies.join(", "))?;
                }
                let education = content.education();
                writeln!(out, "Education")?;
                writeln!(out, "  {}, {}", education.degree, education.institution)?;
                writeln!(out, "  {}", education.description)?;
            }
            Self::Projects { category, search } => {
                let projects = content.projects(&project_filter(category, search)?);
                if projects.is_empty() {
                    writeln!(out, "No projects found")?;
                }
                for project in projects {
                    writeln!(out, "{} [{}]", project.title, project.category.name())?;
                    writeln!(out, "  {}", project.description)?;
                    for feature in project.features {
                        writeln!(out, "  - {feature}")?;
                    }
                    writeln!(out, "  {}\n", project.tech.join(", "))?;
                }
            }
            Self::Services => {
                for service in content.services() {
                    writeln!(out, "{}", service.title)?;
                    writeln!(out, "  {}", service.description)?;
                    for feature in service.features {
                        writeln!(out, "  - {feature}")?;
                    }
                    writeln!(out, "  {}\n", service.tech.join(", "))?;
                }
                writeln!(out, "Process")?;
                for step in content.process() {
                    writeln!(out, "  {:02} {}: {}", step.step, step.title, step.description)?;
                }
            }
            Self::Blog {
                slug: Some(slug), ..
            } => {
                let post = find_post(content, &slug)?;
                write_post(&mut out, &post)?;
                writeln!(out, "\n{}", post.summary)?;
            }
            Self::Blog { tag, slug: None } => {
                let tag = tag.as_deref().map(parse_filter).transpose()?.flatten();
                if let Some(featured) = content.featured_post(tag) {
                    writeln!(out, "Featured Post")?;
                    write_post(&mut out, &featured)?;
                    writeln!(out)?;
                }
                for post in content.blog_posts(tag) {
                    write_post(&mut out, &post)?;
                }
            }
            Self::Contact => {
                for channel in profile.contact_channels {
                    writeln!(out, "{:<9} {}", channel.kind.title(), channel.value)?;
                }
                for link in profile.social_links {
                    writeln!(out, "{:<9} {}", link.platform.name(), link.url)?;
                }
                writeln!(out, "\nSend a message with `portfolio contact`:")?;
                for field in ContactField::ALL {
                    writeln!(out, "  {:<14} {}", field.label(), field.placeholder())?;
                }
            }
        }

        Ok(out.trim_end().to_owned())
    }
}

fn project_filter(
    category: Option<String>,
    search: Option<String>,
) -> anyhow::Result<ProjectFilter> {
    Ok(ProjectFilter {
        category: category.as_deref().map(parse_filter).transpose()?.flatten(),
        search,
    })
}

fn find_post(content: &impl ContentService, slug: &str) -> anyhow::Result<BlogPost> {
    content
        .blog_post(slug)
        .with_context(|| format!("Blog post not found: {slug}"))
}

fn write_post(out: &mut String, post: &BlogPost) -> std::fmt::Result {
    let tags = post
        .tags
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{} ({})", post.title, post.slug)?;
    writeln!(
        out,
        "  {} | {} min read | {} | {}",
        post.published, post.read_time_minutes, post.author, tags
    )?;
    writeln!(out, "  {}", post.excerpt)
}
