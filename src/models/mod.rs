//! Data models for the template maker.
//!
//! - [`ModConfig`]: the immutable description of the mod to generate, loaded by
//!   [`ConfigManager`](crate::config::ConfigManager) or built by the caller
//! - [`License`], [`LoomVersion`], [`ProjectVersions`]: the choices it carries
//! - [`ModDescriptor`] / [`MixinsDescriptor`]: JSON files derived from it

pub mod descriptors;
pub mod mod_config;

pub use descriptors::{Contact, Entrypoints, MixinsDescriptor, ModDescriptor};
pub use mod_config::{
    ApiDependency, ConfigError, GradleBundle, License, LoomVersion, ModConfig, ProjectVersions,
};
