//! Fake implementations of the external services used by the portfolio.

pub mod emailjs;
