use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Maven coordinates used by Fabric API releases published after the rename.
pub const NEW_API_LOCATION: &str = "net.fabricmc.fabric-api:fabric-api";

/// Maven coordinates used by the early `fabric-<version>.jar` releases.
pub const OLD_API_LOCATION: &str = "net.fabricmc:fabric";

/// Matches `[1.18]` or `[1.18/1.18.1]`; group 1 is the display token, group 2 the primary version.
static MC_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(([^/\]]+)(?:/[^\]]+)?)\]").expect("Invalid Minecraft version regex")
});

static BUILD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"build ([0-9]+)").expect("Invalid build number regex"));

static NEW_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^fabric-api-(.+)\.jar$").expect("Invalid new file name regex"));

static OLD_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^fabric-(.+)\.jar$").expect("Invalid old file name regex"));

/// Errors raised while parsing a Fabric API release listing entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("The name '{0}' doesn't seem to have the Minecraft version")]
    MissingVersionToken(String),

    #[error("The name '{0}' doesn't seem to have the build number")]
    MissingBuildNumber(String),

    #[error("The build number in '{0}' is out of range")]
    BuildNumberOutOfRange(String),

    #[error("The file name '{0}' doesn't seem to be of the right format")]
    UnrecognizedFilenameShape(String),
}

/// Which historical naming convention a release jar follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFileShape<'a> {
    /// `fabric-api-<version>.jar`
    New(&'a str),
    /// `fabric-<version>.jar`
    Old(&'a str),
    Unrecognized,
}

impl<'a> ApiFileShape<'a> {
    /// Classify a release file name. The new shape is tried first since
    /// `fabric-api-x.jar` also satisfies the old pattern.
    pub fn classify(file_name: &'a str) -> Self {
        if let Some(version) = NEW_FILE_PATTERN.captures(file_name).and_then(|c| c.get(1)) {
            return ApiFileShape::New(version.as_str());
        }
        if let Some(version) = OLD_FILE_PATTERN.captures(file_name).and_then(|c| c.get(1)) {
            return ApiFileShape::Old(version.as_str());
        }
        ApiFileShape::Unrecognized
    }

    /// Maven group:artifact for this shape, if recognized
    pub fn location(&self) -> Option<&'static str> {
        match self {
            ApiFileShape::New(_) => Some(NEW_API_LOCATION),
            ApiFileShape::Old(_) => Some(OLD_API_LOCATION),
            ApiFileShape::Unrecognized => None,
        }
    }
}

/// A single Fabric API release, parsed from its display name and jar file name.
///
/// Release names look like `[1.18/1.18.1] Fabric API 0.44.0 build 12`: the
/// bracketed token names the targeted Minecraft version(s) and `build N`
/// carries the build number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiVersion {
    pub name: String,
    /// Full bracketed token, e.g. `1.18/1.18.1`
    pub display_mc_version: String,
    /// Part of the token before any slash, e.g. `1.18`
    pub mc_version: String,
    pub build: u32,
    pub maven_location: String,
    pub maven_version: String,
}

impl ApiVersion {
    pub fn parse(name: &str, file_name: &str) -> Result<Self, VersionParseError> {
        let mc_captures = MC_VERSION_PATTERN
            .captures(name)
            .ok_or_else(|| VersionParseError::MissingVersionToken(name.to_string()))?;
        let display_mc_version = mc_captures[1].to_string();
        let mc_version = mc_captures[2].to_string();

        let build_captures = BUILD_PATTERN
            .captures(name)
            .ok_or_else(|| VersionParseError::MissingBuildNumber(name.to_string()))?;
        let build = build_captures[1]
            .parse::<u32>()
            .map_err(|_| VersionParseError::BuildNumberOutOfRange(name.to_string()))?;

        let shape = ApiFileShape::classify(file_name);
        let (maven_location, maven_version) = match shape {
            ApiFileShape::New(version) => (NEW_API_LOCATION, version),
            ApiFileShape::Old(version) => (OLD_API_LOCATION, version),
            ApiFileShape::Unrecognized => {
                return Err(VersionParseError::UnrecognizedFilenameShape(
                    file_name.to_string(),
                ));
            }
        };

        tracing::debug!(
            "Parsed Fabric API version '{}': mc={}, build={}, maven={}:{}",
            name,
            mc_version,
            build,
            maven_location,
            maven_version
        );

        Ok(Self {
            name: name.to_string(),
            display_mc_version,
            mc_version,
            build,
            maven_location: maven_location.to_string(),
            maven_version: maven_version.to_string(),
        })
    }

    /// Full maven coordinate, `group:artifact:version`
    pub fn maven(&self) -> String {
        format!("{}:{}", self.maven_location, self.maven_version)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_shape() {
        let version = ApiVersion::parse("[1.18] build 12", "fabric-api-0.44.0+1.18.jar").unwrap();

        assert_eq!(version.mc_version, "1.18");
        assert_eq!(version.display_mc_version, "1.18");
        assert_eq!(version.build, 12);
        assert_eq!(version.maven_location, NEW_API_LOCATION);
        assert_eq!(version.maven_version, "0.44.0+1.18");
        assert_eq!(version.maven(), "net.fabricmc.fabric-api:fabric-api:0.44.0+1.18");
    }

    #[test]
    fn test_parse_old_shape() {
        let version =
            ApiVersion::parse("[1.14.4] Fabric API 0.3.2 build 230", "fabric-0.3.2+build.230-1.14.jar")
                .unwrap();

        assert_eq!(version.maven_location, OLD_API_LOCATION);
        assert_eq!(version.maven_version, "0.3.2+build.230-1.14");
        assert_eq!(version.build, 230);
    }

    #[test]
    fn test_slash_separated_token() {
        let version =
            ApiVersion::parse("[1.18/1.18.1] Fabric API 0.46.1 build 2", "fabric-api-0.46.1+1.18.jar")
                .unwrap();

        assert_eq!(version.display_mc_version, "1.18/1.18.1");
        assert_eq!(version.mc_version, "1.18");
    }

    #[test]
    fn test_missing_version_token() {
        let err = ApiVersion::parse("Fabric API build 3", "fabric-api-1.0.jar").unwrap_err();
        assert_eq!(
            err,
            VersionParseError::MissingVersionToken("Fabric API build 3".to_string())
        );
    }

    #[test]
    fn test_missing_build_number() {
        let err = ApiVersion::parse("[1.16] Fabric API", "fabric-api-1.0.jar").unwrap_err();
        assert!(matches!(err, VersionParseError::MissingBuildNumber(_)));
    }

    #[test]
    fn test_build_number_overflow() {
        let err = ApiVersion::parse("[1.16] build 99999999999", "fabric-api-1.0.jar").unwrap_err();
        assert!(matches!(err, VersionParseError::BuildNumberOutOfRange(_)));
    }

    #[test]
    fn test_build_number_skips_non_ascii_digits() {
        let version =
            ApiVersion::parse("[1.18] build \u{0663} build 5", "fabric-api-1.0.jar").unwrap();
        assert_eq!(version.build, 5);

        let err = ApiVersion::parse("[1.18] build \u{0663}", "fabric-api-1.0.jar").unwrap_err();
        assert!(matches!(err, VersionParseError::MissingBuildNumber(_)));
    }

    #[test]
    fn test_unrecognized_file_name() {
        let err = ApiVersion::parse("[1.16] build 1", "something-else.zip").unwrap_err();
        assert_eq!(
            err,
            VersionParseError::UnrecognizedFilenameShape("something-else.zip".to_string())
        );
    }

    #[test]
    fn test_classify_prefers_new_shape() {
        assert_eq!(
            ApiFileShape::classify("fabric-api-0.5.0.jar"),
            ApiFileShape::New("0.5.0")
        );
        assert_eq!(ApiFileShape::classify("fabric-0.5.0.jar"), ApiFileShape::Old("0.5.0"));
        assert_eq!(ApiFileShape::classify("fabric-0.5.0.jar.sha1"), ApiFileShape::Unrecognized);
        assert_eq!(ApiFileShape::Unrecognized.location(), None);
    }
}
