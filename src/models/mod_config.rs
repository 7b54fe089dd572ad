use crate::resources::{self, TemplateSource};
use crate::versions::{ApiVersion, MappingVersion};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static MOD_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_-]{1,63}$").expect("Invalid mod id regex"));

static JAVA_IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid Java identifier regex")
});

static LOOM_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)").expect("Invalid Loom version regex"));

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

/// Errors found while validating a [`ModConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Mod id '{0}' must be 2-64 characters of a-z, 0-9, '-' or '_' and start with a letter")]
    InvalidModId(String),

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("'{0}' is not a valid Java package segment")]
    InvalidPackageSegment(String),

    #[error("'{0}' is not a valid Java class name")]
    InvalidClassName(String),

    #[error("Fabric API is enabled but no Fabric API version was selected")]
    MissingFabricApiVersion,

    #[error("Loom version '{0}' has no bundled Gradle wrapper")]
    UnsupportedLoomVersion(String),
}

/// Licenses offered for new projects.
///
/// Only some of them ship with a bundled text; choosing one without text is
/// valid and simply produces no `LICENSE` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "ISC")]
    Isc,
    #[serde(rename = "BSD-2-Clause")]
    Bsd2Clause,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "Unlicense")]
    Unlicense,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "LGPL-3.0")]
    Lgpl3,
    #[serde(rename = "MPL-2.0")]
    Mpl2,
    #[serde(rename = "CC0-1.0")]
    Cc0,
    #[serde(rename = "All-Rights-Reserved")]
    AllRightsReserved,
}

impl License {
    pub const ALL: [License; 11] = [
        License::Mit,
        License::Isc,
        License::Bsd2Clause,
        License::Bsd3Clause,
        License::Unlicense,
        License::Apache2,
        License::Gpl3,
        License::Lgpl3,
        License::Mpl2,
        License::Cc0,
        License::AllRightsReserved,
    ];

    /// Identifier written to `fabric.mod.json`
    pub fn spdx(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Isc => "ISC",
            License::Bsd2Clause => "BSD-2-Clause",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Unlicense => "Unlicense",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Lgpl3 => "LGPL-3.0",
            License::Mpl2 => "MPL-2.0",
            License::Cc0 => "CC0-1.0",
            License::AllRightsReserved => "All-Rights-Reserved",
        }
    }

    /// License text template bundled with the generator, if any
    pub fn bundled_text(&self) -> Option<&'static TemplateSource> {
        match self {
            License::Mit => Some(&resources::LICENSE_MIT),
            License::Isc => Some(&resources::LICENSE_ISC),
            License::Bsd2Clause => Some(&resources::LICENSE_BSD_2),
            License::Bsd3Clause => Some(&resources::LICENSE_BSD_3),
            License::Unlicense => Some(&resources::LICENSE_UNLICENSE),
            License::Apache2
            | License::Gpl3
            | License::Lgpl3
            | License::Mpl2
            | License::Cc0
            | License::AllRightsReserved => None,
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spdx())
    }
}

/// Gradle wrapper bundles shipped with the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradleBundle {
    Gradle7,
    Gradle8,
}

/// Fabric Loom (build plugin) version, e.g. `1.6-SNAPSHOT` or `0.12.12`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoomVersion(pub String);

impl LoomVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pick the wrapper bundle matching this Loom release line.
    ///
    /// Loom 0.10 through 0.12 run on the Gradle 7 bundle, Loom 1.0 through 1.7
    /// on the Gradle 8.8 bundle. Later Loom releases need a newer Gradle than
    /// any bundle ships and are rejected.
    pub fn gradle_bundle(&self) -> Result<GradleBundle, ConfigError> {
        let unsupported = || ConfigError::UnsupportedLoomVersion(self.0.clone());
        let captures = LOOM_VERSION_PATTERN.captures(&self.0).ok_or_else(unsupported)?;
        let major: u32 = captures[1].parse().map_err(|_| unsupported())?;
        let minor: u32 = captures[2].parse().map_err(|_| unsupported())?;

        match (major, minor) {
            (0, 10..=12) => Ok(GradleBundle::Gradle7),
            (1, 0..=7) => Ok(GradleBundle::Gradle8),
            _ => Err(unsupported()),
        }
    }
}

impl fmt::Display for LoomVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maven coordinates of the selected Fabric API release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDependency {
    pub location: String,
    pub version: String,
}

impl From<&ApiVersion> for ApiDependency {
    fn from(api: &ApiVersion) -> Self {
        Self {
            location: api.maven_location.clone(),
            version: api.maven_version.clone(),
        }
    }
}

/// Dependency versions baked into the generated build files.
///
/// These are opaque strings by the time they reach the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVersions {
    pub minecraft: String,
    pub yarn: String,
    #[serde(default)]
    pub yarn_v2: bool,
    pub loader: String,
    #[serde(default)]
    pub fabric_api: Option<ApiDependency>,
}

impl ProjectVersions {
    pub fn select(
        minecraft: &str,
        mappings: &MappingVersion,
        loader: &str,
        api: Option<&ApiVersion>,
    ) -> Self {
        Self {
            minecraft: minecraft.to_string(),
            yarn: mappings.name.clone(),
            yarn_v2: mappings.has_v2_mappings,
            loader: loader.to_string(),
            fabric_api: api.map(ApiDependency::from),
        }
    }
}

/// Everything needed to generate a mod project.
///
/// Built once by the caller and never modified by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModConfig {
    pub mod_id: String,
    pub mod_name: String,
    pub mod_description: String,
    pub author: String,
    pub license: License,
    #[serde(default)]
    pub sources: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    pub main_package: Vec<String>,
    pub main_class: String,
    #[serde(default)]
    pub uses_mixins: bool,
    #[serde(default)]
    pub uses_fabric_api: bool,
    pub loom: LoomVersion,
    pub versions: ProjectVersions,
    #[serde(default)]
    pub copyright_year: Option<u16>,
}

impl ModConfig {
    pub fn main_package_dotted(&self) -> String {
        self.main_package.join(".")
    }

    pub fn main_package_path(&self) -> String {
        self.main_package.join("/")
    }

    /// Fully qualified name of the generated initializer class
    pub fn entrypoint(&self) -> String {
        format!("{}.{}", self.main_package_dotted(), self.main_class)
    }

    pub fn maven_group(&self) -> String {
        self.main_package_dotted()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !MOD_ID_PATTERN.is_match(&self.mod_id) {
            return Err(ConfigError::InvalidModId(self.mod_id.clone()));
        }
        if self.mod_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("mod_name"));
        }
        if self.author.trim().is_empty() {
            return Err(ConfigError::EmptyField("author"));
        }
        if self.main_package.is_empty() {
            return Err(ConfigError::EmptyField("main_package"));
        }
        if let Some(segment) = self.main_package.iter().find(|s| !is_java_identifier(s)) {
            return Err(ConfigError::InvalidPackageSegment(segment.clone()));
        }
        if !is_java_identifier(&self.main_class) {
            return Err(ConfigError::InvalidClassName(self.main_class.clone()));
        }
        if self.uses_fabric_api && self.versions.fabric_api.is_none() {
            return Err(ConfigError::MissingFabricApiVersion);
        }
        self.loom.gradle_bundle()?;
        Ok(())
    }
}

fn is_java_identifier(s: &str) -> bool {
    JAVA_IDENTIFIER_PATTERN.is_match(s) && !JAVA_KEYWORDS.contains(&s)
}
