//! Showroom - content index builder for a car dealership static site.
//!
//! Markdown files with YAML frontmatter under `content/cars` and
//! `content/contacts` become `data/cars-index.json` and
//! `data/contacts-index.json`, the two files the site reads at runtime.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod utils;
