use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::keyword_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub summary: &'static str,
    pub published: NaiveDate,
    pub read_time_minutes: u8,
    pub tags: &'static [BlogTag],
    pub author: &'static str,
    pub image: &'static str,
}

impl BlogPost {
    pub fn has_tag(&self, tag: BlogTag) -> bool {
        self.tags.contains(&tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogTag {
    Backend,
    Payments,
    Microservices,
    Devops,
    Tutorial,
}

keyword_enum!(BlogTag, "blog tag", {
    Backend => "backend",
    Payments => "payments",
    Microservices => "microservices",
    Devops => "devops",
    Tutorial => "tutorial",
});
