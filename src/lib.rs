// Fabric Template Maker - scaffolds new Fabric mod projects
//
// This is the library crate containing the version model and the generation engine.
// The binary crate (main.rs) provides the command line entry point.

pub mod config;
pub mod generator;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod resources;
pub mod versions;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use generator::{GenerationError, GenerationObserver, GenerationReport, TemplateMaker};
pub use models::{License, LoomVersion, ModConfig, ProjectVersions};
pub use versions::{ApiVersion, MappingVersion, MinecraftVersion, RankedApiVersion};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
