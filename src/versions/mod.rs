//! Version metadata for the dependencies of a generated project.
//!
//! Upstream listings describe Fabric API releases with loosely structured
//! display names (`[1.18/1.18.1] Fabric API 0.46.1 build 2`) and jar file
//! names that changed convention over time. This module turns them into
//! comparable records:
//!
//! - [`ApiVersion`]: a parsed Fabric API release ([`VersionParseError`] on malformed input)
//! - [`RankedApiVersion`]: an API release ranked against a [`MinecraftVersion`] catalog
//! - [`MappingVersion`]: a Yarn mappings release
//!
//! Fetching the listings is left to the caller.

pub mod api;
pub mod mapping;
pub mod ranked;

pub use api::{ApiFileShape, ApiVersion, VersionParseError};
pub use mapping::MappingVersion;
pub use ranked::{MinecraftVersion, RankedApiVersion, latest_for_game, rank_all};
