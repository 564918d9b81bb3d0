pub mod blog;
pub mod health;
pub mod pages;
pub mod projects;
