use portfolio_models::content::{
    blog::BlogPost,
    experience::{Education, Position},
    page::Page,
    project::Project,
    service::{ProcessStep, Service},
    skill::{Proficiency, SkillArea, SkillGroup},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ApiPage {
    pub page: Page,
    pub name: &'static str,
    pub path: &'static str,
}

impl From<Page> for ApiPage {
    fn from(value: Page) -> Self {
        Self {
            page: value,
            name: value.name(),
            path: value.path(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiSkills {
    pub groups: Vec<ApiSkillGroup>,
    pub proficiencies: &'static [Proficiency],
}

#[derive(Debug, Serialize)]
pub struct ApiSkillGroup {
    pub area: SkillArea,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

impl From<&SkillGroup> for ApiSkillGroup {
    fn from(value: &SkillGroup) -> Self {
        Self {
            area: value.area,
            title: value.area.title(),
            skills: value.skills,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiExperience {
    pub positions: Vec<ApiPosition>,
    pub education: &'static Education,
}

#[derive(Debug, Serialize)]
pub struct ApiPosition {
    #[serde(flatten)]
    pub position: Position,
    /// The period formatted for display, e.g. `October 2024 - Present`.
    pub duration: String,
    pub current: bool,
}

impl From<&Position> for ApiPosition {
    fn from(value: &Position) -> Self {
        Self {
            position: *value,
            duration: value.period.to_string(),
            current: value.period.is_current(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiProject {
    #[serde(flatten)]
    pub project: Project,
    pub category_name: &'static str,
}

impl From<Project> for ApiProject {
    fn from(value: Project) -> Self {
        Self {
            project: value,
            category_name: value.category.name(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiServices {
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
}

#[derive(Debug, Serialize)]
pub struct ApiBlog {
    /// Only present if no tag is selected.
    pub featured: Option<BlogPost>,
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Deserialize)]
pub struct ApiProjectsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiBlogQuery {
    pub tag: Option<String>,
}

