use serde::Serialize;

use super::keyword_enum;

/// The routed pages of the site, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Services,
    Blog,
    Contact,
}

keyword_enum!(Page, "page", {
    Home => "home",
    About => "about",
    Skills => "skills",
    Experience => "experience",
    Projects => "projects",
    Services => "services",
    Blog => "blog",
    Contact => "contact",
});

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Services => "Services",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Skills => "/skills",
            Self::Experience => "/experience",
            Self::Projects => "/projects",
            Self::Services => "/services",
            Self::Blog => "/blog",
            Self::Contact => "/contact",
        }
    }
}
