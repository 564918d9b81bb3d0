use serde::{Deserialize, Serialize};

use super::keyword_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Payment,
    Microservices,
    Fullstack,
    Tools,
}

keyword_enum!(ProjectCategory, "project category", {
    Payment => "payment",
    Microservices => "microservices",
    Fullstack => "fullstack",
    Tools => "tools",
});

impl ProjectCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Payment => "Payment Systems",
            Self::Microservices => "Microservices",
            Self::Fullstack => "Full Stack",
            Self::Tools => "Developer Tools",
        }
    }
}

/// Narrows the project listing. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: Option<ProjectCategory>,
    pub search: Option<String>,
}
