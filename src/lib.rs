#![forbid(unsafe_code)]

pub mod clone_service;
pub mod cloner;
pub mod config;
pub mod error;
pub mod folder_name;
pub mod locator;
pub mod logging;
pub mod models;
pub mod registry;
pub mod report;
pub mod scanner;
pub mod text_extract;
pub mod utils;

pub use clone_service::CloneService;
pub use cloner::{Cloner, GitCloner};
pub use config::AppConfig;
pub use locator::RepositoryLocator;
pub use report::RunSummary;
