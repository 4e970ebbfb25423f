#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod report;
pub mod selectors;
pub mod store;
pub mod tools;
pub mod types;


pub use config::ScraperConfig;
pub use engine::*;
pub use error::*;
pub use types::*;
