use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub resume_url: &'static str,
    pub availability: Availability,
    pub stats: &'static [Stat],
    pub highlights: &'static [Highlight],
    pub contact_channels: &'static [ContactChannel],
    pub social_links: &'static [SocialLink],
}

impl Profile {
    /// The address visitors are pointed to when the contact form fails.
    pub fn email(&self) -> Option<&'static str> {
        self.contact_channels
            .iter()
            .find(|channel| channel.kind == ContactChannelKind::Email)
            .map(|channel| channel.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub kind: ContactChannelKind,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannelKind {
    Email,
    Phone,
    Location,
}

impl ContactChannelKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialPlatform {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "linkedin")]
    LinkedIn,
}

impl SocialPlatform {
    pub fn name(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
        }
    }
}
