use super::api::ApiVersion;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Deref;

/// An entry of the known Minecraft version catalog, newest first.
///
/// Deserializes from the upstream game version listing (`{"version": "1.18", "stable": true}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinecraftVersion {
    #[serde(rename = "version")]
    pub name: String,
    #[serde(default)]
    pub stable: bool,
}

impl MinecraftVersion {
    pub fn new(name: impl Into<String>, stable: bool) -> Self {
        Self {
            name: name.into(),
            stable,
        }
    }
}

/// An [`ApiVersion`] positioned against a Minecraft version catalog.
///
/// Orders by catalog rank (earlier entries first), then by build number
/// (newer builds first). Versions targeting a game version the catalog does
/// not know all share the sentinel rank `catalog.len()` and sort last.
#[derive(Debug, Clone, Serialize)]
pub struct RankedApiVersion {
    #[serde(flatten)]
    pub version: ApiVersion,
    pub rank: usize,
}

impl RankedApiVersion {
    pub fn rank(version: ApiVersion, catalog: &[MinecraftVersion]) -> Self {
        let rank = catalog
            .iter()
            .position(|mc| mc.name == version.mc_version)
            .unwrap_or(catalog.len());
        Self { version, rank }
    }

    /// Whether the catalog knew this version's game version
    pub fn is_known(&self, catalog: &[MinecraftVersion]) -> bool {
        self.rank < catalog.len()
    }

    pub fn into_inner(self) -> ApiVersion {
        self.version
    }
}

impl Deref for RankedApiVersion {
    type Target = ApiVersion;

    fn deref(&self) -> &ApiVersion {
        &self.version
    }
}

impl Ord for RankedApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| other.version.build.cmp(&self.version.build))
    }
}

impl PartialOrd for RankedApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality follows the ordering so that Eq and Ord agree.
impl PartialEq for RankedApiVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedApiVersion {}

/// Rank every version against the catalog and sort them (stable).
pub fn rank_all(
    versions: impl IntoIterator<Item = ApiVersion>,
    catalog: &[MinecraftVersion],
) -> Vec<RankedApiVersion> {
    let mut ranked: Vec<RankedApiVersion> = versions
        .into_iter()
        .map(|v| RankedApiVersion::rank(v, catalog))
        .collect();
    ranked.sort();
    ranked
}

/// First entry of an already sorted list targeting `minecraft`.
///
/// Because builds sort newest first within a rank, this is the newest
/// Fabric API build for that game version.
pub fn latest_for_game<'a>(
    ranked: &'a [RankedApiVersion],
    minecraft: &str,
) -> Option<&'a RankedApiVersion> {
    ranked.iter().find(|v| v.mc_version == minecraft)
}
