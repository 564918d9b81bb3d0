use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub area: SkillArea,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillArea {
    Backend,
    Frontend,
    Databases,
    CloudDevops,
    Payments,
    Architecture,
    VersionControl,
    Security,
}

impl SkillArea {
    pub fn title(self) -> &'static str {
        match self {
            Self::Backend => "Backend Development",
            Self::Frontend => "Frontend Development",
            Self::Databases => "Databases",
            Self::CloudDevops => "Cloud & DevOps",
            Self::Payments => "Payment Integration",
            Self::Architecture => "Architecture",
            Self::VersionControl => "Version Control & PM",
            Self::Security => "Security & Auth",
        }
    }
}

/// Self-assessed proficiency in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Proficiency {
    pub name: &'static str,
    pub level: u8,
}
