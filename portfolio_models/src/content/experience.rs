use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub title: &'static str,
    pub company: &'static str,
    pub period: Period,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

/// Employment period; an open end means the position is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: &'static str,
    pub end: Option<&'static str>,
}

impl Period {
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end.unwrap_or("Present"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
}
