use super::GenerationError;
use crate::models::{MixinsDescriptor, ModConfig, ModDescriptor, descriptors};
use crate::resources::{self, StaticResource, TemplateSource};

/// Destination of the Gradle wrapper jar. The bundled jar only carries a
/// manifest; `gradle wrapper` must be run once to replace it.
pub const WRAPPER_JAR_PATH: &str = "gradle/wrapper/gradle-wrapper.jar";

/// What to do for one artifact
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactAction {
    Copy(StaticResource),
    CopyExecutable(StaticResource),
    Render(TemplateSource),
    Json(Descriptor),
}

/// In-memory JSON descriptors written by the generator
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Mod(Box<ModDescriptor>),
    Mixins(MixinsDescriptor),
}

impl Descriptor {
    /// Pretty-printed JSON, keys in declaration order, no HTML escaping
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        match self {
            Descriptor::Mod(descriptor) => serde_json::to_string_pretty(descriptor),
            Descriptor::Mixins(descriptor) => serde_json::to_string_pretty(descriptor),
        }
    }
}

/// One file of a generated project
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    /// Destination path relative to the project root, `/` separated
    pub path: String,
    pub action: ArtifactAction,
}

impl Artifact {
    fn new(path: impl Into<String>, action: ArtifactAction) -> Self {
        Self {
            path: path.into(),
            action,
        }
    }
}

/// Build the ordered list of artifacts for a configuration.
///
/// The order is fixed; the configuration only decides whether the mixins
/// descriptor and the license file are included, and which Gradle wrapper
/// bundle is copied.
pub fn build(config: &ModConfig) -> Result<Vec<Artifact>, GenerationError> {
    let wrapper = resources::wrapper_bundle(config.loom.gradle_bundle()?);

    let mut artifacts = vec![
        Artifact::new(".gitignore", ArtifactAction::Copy(resources::GITIGNORE)),
        Artifact::new("settings.gradle", ArtifactAction::Copy(resources::SETTINGS_GRADLE)),
        Artifact::new("gradlew", ArtifactAction::CopyExecutable(wrapper.script)),
        Artifact::new("gradlew.bat", ArtifactAction::Copy(wrapper.batch)),
        Artifact::new(WRAPPER_JAR_PATH, ArtifactAction::Copy(wrapper.jar)),
        Artifact::new(
            "gradle/wrapper/gradle-wrapper.properties",
            ArtifactAction::Copy(wrapper.properties),
        ),
        Artifact::new("gradle.properties", ArtifactAction::Render(resources::GRADLE_PROPERTIES)),
        Artifact::new("build.gradle", ArtifactAction::Render(resources::BUILD_GRADLE)),
        Artifact::new(
            format!(
                "src/main/java/{}/{}.java",
                config.main_package_path(),
                config.main_class
            ),
            ArtifactAction::Render(resources::MAIN_CLASS),
        ),
        Artifact::new(
            format!("src/main/resources/{}", descriptors::icon_path(config)),
            ArtifactAction::Copy(resources::ICON),
        ),
        Artifact::new(
            "src/main/resources/fabric.mod.json",
            ArtifactAction::Json(Descriptor::Mod(Box::new(ModDescriptor::from_config(config)))),
        ),
    ];

    if config.uses_mixins {
        artifacts.push(Artifact::new(
            format!("src/main/resources/{}", descriptors::mixins_file_name(config)),
            ArtifactAction::Json(Descriptor::Mixins(MixinsDescriptor::from_config(config))),
        ));
    }

    if let Some(text) = config.license.bundled_text() {
        artifacts.push(Artifact::new("LICENSE", ArtifactAction::Render(*text)));
    }

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{License, LoomVersion, ProjectVersions};

    fn config() -> ModConfig {
        ModConfig {
            mod_id: "examplemod".to_string(),
            mod_name: "Example Mod".to_string(),
            mod_description: "An example".to_string(),
            author: "Alex".to_string(),
            license: License::AllRightsReserved,
            sources: None,
            homepage: None,
            main_package: vec!["net".to_string(), "example".to_string()],
            main_class: "ExampleMod".to_string(),
            uses_mixins: false,
            uses_fabric_api: false,
            loom: LoomVersion::new("0.12.12"),
            versions: ProjectVersions {
                minecraft: "1.19.2".to_string(),
                yarn: "1.19.2+build.28".to_string(),
                yarn_v2: true,
                loader: "0.14.21".to_string(),
                fabric_api: None,
            },
            copyright_year: None,
        }
    }

    fn paths(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|a| a.path.as_str()).collect()
    }

    #[test]
    fn test_base_manifest_order() {
        let artifacts = build(&config()).unwrap();

        assert_eq!(
            paths(&artifacts),
            vec![
                ".gitignore",
                "settings.gradle",
                "gradlew",
                "gradlew.bat",
                "gradle/wrapper/gradle-wrapper.jar",
                "gradle/wrapper/gradle-wrapper.properties",
                "gradle.properties",
                "build.gradle",
                "src/main/java/net/example/ExampleMod.java",
                "src/main/resources/assets/examplemod/icon.png",
                "src/main/resources/fabric.mod.json",
            ]
        );
    }

    #[test]
    fn test_optional_artifacts_are_appended() {
        let mut config = config();
        config.uses_mixins = true;
        config.license = License::Mit;

        let artifacts = build(&config).unwrap();
        let paths = paths(&artifacts);

        assert_eq!(
            &paths[paths.len() - 2..],
            &["src/main/resources/examplemod.mixins.json", "LICENSE"]
        );
        assert_eq!(
            artifacts.last().unwrap().action,
            ArtifactAction::Render(resources::LICENSE_MIT)
        );
    }

    #[test]
    fn test_gradlew_is_executable_copy() {
        let artifacts = build(&config()).unwrap();
        let gradlew = artifacts.iter().find(|a| a.path == "gradlew").unwrap();
        assert!(matches!(gradlew.action, ArtifactAction::CopyExecutable(_)));
    }

    #[test]
    fn test_wrapper_bundle_follows_loom() {
        let gradle7 = build(&config()).unwrap();
        let mut config = config();
        config.loom = LoomVersion::new("1.6-SNAPSHOT");
        let gradle8 = build(&config).unwrap();

        let properties = |artifacts: &[Artifact]| match &artifacts[5].action {
            ArtifactAction::Copy(resource) => resource.name,
            other => panic!("unexpected action {:?}", other),
        };
        assert_eq!(properties(&gradle7), "gradle7/gradle-wrapper.properties");
        assert_eq!(properties(&gradle8), "gradle8/gradle-wrapper.properties");
    }

    #[test]
    fn test_unsupported_loom_is_config_error() {
        let mut config = config();
        config.loom = LoomVersion::new("0.2.7");
        assert!(matches!(build(&config), Err(GenerationError::Config(_))));
    }
}
