//! Configuration module for deadlink-crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; missing values fall back to the defaults in
//! [`Config::default`].
//!
//! # Example
//!
//! ```no_run
//! use deadlink_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Crawling everything under: {}", config.site.domain);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, OutputConfig, SiteConfig, DEFAULT_DOMAIN, DEFAULT_EXCLUDED_SUBPATH,
    DEFAULT_PLACEHOLDER_HOST,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
