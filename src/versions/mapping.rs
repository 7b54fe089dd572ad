use serde::{Deserialize, Serialize};
use std::fmt;

/// A Yarn mappings release.
///
/// Unlike [`ApiVersion`](super::ApiVersion) there is nothing to parse here;
/// the listing already provides every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingVersion {
    pub name: String,
    pub maven: String,
    pub mc_version: String,
    pub build: u32,
    pub has_v2_mappings: bool,
}

impl MappingVersion {
    pub fn new(
        name: impl Into<String>,
        maven: impl Into<String>,
        mc_version: impl Into<String>,
        build: u32,
        has_v2_mappings: bool,
    ) -> Self {
        Self {
            name: name.into(),
            maven: maven.into(),
            mc_version: mc_version.into(),
            build,
            has_v2_mappings,
        }
    }
}

impl fmt::Display for MappingVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Highest-build mappings release for a game version.
pub fn latest_for_game<'a>(
    mappings: &'a [MappingVersion],
    minecraft: &str,
) -> Option<&'a MappingVersion> {
    mappings
        .iter()
        .filter(|m| m.mc_version == minecraft)
        .max_by_key(|m| m.build)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yarn(mc: &str, build: u32) -> MappingVersion {
        MappingVersion::new(
            format!("{}+build.{}", mc, build),
            format!("net.fabricmc:yarn:{}+build.{}", mc, build),
            mc,
            build,
            true,
        )
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(yarn("1.18", 1).to_string(), "1.18+build.1");
    }

    #[test]
    fn test_latest_for_game_picks_highest_build() {
        let mappings = vec![yarn("1.18", 1), yarn("1.18", 12), yarn("1.17.1", 60), yarn("1.18", 4)];

        let latest = latest_for_game(&mappings, "1.18").unwrap();
        assert_eq!(latest.build, 12);
        assert!(latest_for_game(&mappings, "1.16").is_none());
    }
}
