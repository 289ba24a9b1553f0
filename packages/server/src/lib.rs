// Siteforge - Generation Service Core
//
// This crate provides the backend pipeline that turns a small site
// specification into a downloadable archive: inference attempt, template
// fallback, zip packaging, and job registration.

pub mod common;
pub mod config;
pub mod generation;
pub mod server;

pub use config::*;
