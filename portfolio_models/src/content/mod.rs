use std::str::FromStr;

use thiserror::Error;

use self::{
    blog::BlogPost,
    experience::{Education, Position},
    page::Page,
    profile::Profile,
    project::Project,
    service::{ProcessStep, Service},
    skill::{Proficiency, SkillGroup},
};

pub mod blog;
pub mod experience;
pub mod page;
pub mod profile;
pub mod project;
pub mod service;
pub mod skill;

/// Everything rendered by the pages of the site.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub profile: &'static Profile,
    pub pages: &'static [Page],
    pub skill_groups: &'static [SkillGroup],
    pub proficiencies: &'static [Proficiency],
    pub experience: &'static [Position],
    pub education: &'static Education,
    pub projects: &'static [Project],
    pub services: &'static [Service],
    pub process: &'static [ProcessStep],
    pub blog_posts: &'static [BlogPost],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} {value:?}, expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Parses the value of a listing filter. Empty and `all` select everything.
pub fn parse_filter<T>(value: &str) -> Result<Option<T>, UnknownVariant>
where
    T: FromStr<Err = UnknownVariant>,
{
    match value.trim() {
        "" | "all" => Ok(None),
        value => value.parse().map(Some),
    }
}

/// Implements `as_str`, `Display` and `FromStr` for a fieldless enum using the
/// same identifiers as its serde representation.
macro_rules! keyword_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $key:literal),* $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
            const KEYS: &'static [&'static str] = &[$($key),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)*
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::content::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Self::$variant),)*
                    _ => Err($crate::content::UnknownVariant {
                        kind: $kind,
                        value: s.into(),
                        expected: Self::KEYS,
                    }),
                }
            }
        }
    };
}

pub(crate) use keyword_enum;
