use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
}

/// One step of the engagement process shown on the services page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
}
