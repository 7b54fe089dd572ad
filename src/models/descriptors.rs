use super::ModConfig;
use indexmap::IndexMap;
use serde::Serialize;

/// Placeholder substituted by the project's own `processResources` task
pub const VERSION_PLACEHOLDER: &str = "${version}";

/// Minimum Fabric Loader version every generated mod depends on
pub const MIN_LOADER_VERSION: &str = ">=0.4.0";

/// Shape of `fabric.mod.json`
///
/// Field order here is the key order in the written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModDescriptor {
    pub schema_version: u32,
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Contact::is_empty")]
    pub contact: Contact,
    pub license: String,
    pub icon: String,
    pub environment: String,
    pub entrypoints: Entrypoints,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,
    pub depends: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.sources.is_none() && self.homepage.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entrypoints {
    pub main: Vec<String>,
}

impl ModDescriptor {
    pub fn from_config(config: &ModConfig) -> Self {
        let mut depends = IndexMap::new();
        depends.insert("fabricloader".to_string(), MIN_LOADER_VERSION.to_string());
        if config.uses_fabric_api {
            depends.insert("fabric".to_string(), "*".to_string());
        }

        let mixins = if config.uses_mixins {
            vec![mixins_file_name(config)]
        } else {
            Vec::new()
        };

        Self {
            schema_version: 1,
            id: config.mod_id.clone(),
            version: VERSION_PLACEHOLDER.to_string(),
            name: config.mod_name.clone(),
            description: config.mod_description.clone(),
            authors: vec![config.author.clone()],
            contact: Contact {
                sources: config.sources.clone(),
                homepage: config.homepage.clone(),
            },
            license: config.license.spdx().to_string(),
            icon: icon_path(config),
            environment: "*".to_string(),
            entrypoints: Entrypoints {
                main: vec![config.entrypoint()],
            },
            mixins,
            depends,
        }
    }
}

/// Shape of `<modid>.mixins.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MixinsDescriptor {
    pub package: String,
}

impl MixinsDescriptor {
    pub fn from_config(config: &ModConfig) -> Self {
        Self {
            package: format!("{}.mixin", config.main_package_dotted()),
        }
    }
}

/// Icon path relative to the resources root
pub fn icon_path(config: &ModConfig) -> String {
    format!("assets/{}/icon.png", config.mod_id)
}

pub fn mixins_file_name(config: &ModConfig) -> String {
    format!("{}.mixins.json", config.mod_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApiDependency, License, LoomVersion, ProjectVersions};

    fn config() -> ModConfig {
        ModConfig {
            mod_id: "examplemod".to_string(),
            mod_name: "Example Mod".to_string(),
            mod_description: "An <example> & more".to_string(),
            author: "Alex".to_string(),
            license: License::Mit,
            sources: None,
            homepage: None,
            main_package: vec!["net".to_string(), "example".to_string()],
            main_class: "ExampleMod".to_string(),
            uses_mixins: false,
            uses_fabric_api: false,
            loom: LoomVersion::new("1.6-SNAPSHOT"),
            versions: ProjectVersions {
                minecraft: "1.20.4".to_string(),
                yarn: "1.20.4+build.3".to_string(),
                yarn_v2: true,
                loader: "0.15.7".to_string(),
                fabric_api: Some(ApiDependency {
                    location: "net.fabricmc.fabric-api:fabric-api".to_string(),
                    version: "0.96.4+1.20.4".to_string(),
                }),
            },
            copyright_year: None,
        }
    }

    #[test]
    fn test_minimal_descriptor_json() {
        let json = serde_json::to_value(ModDescriptor::from_config(&config())).unwrap();

        assert_eq!(json["version"], "${version}");
        assert_eq!(json["icon"], "assets/examplemod/icon.png");
        assert_eq!(json["entrypoints"]["main"][0], "net.example.ExampleMod");
        assert_eq!(json["depends"]["fabricloader"], ">=0.4.0");
        assert!(json.get("contact").is_none());
        assert!(json.get("mixins").is_none());
        assert!(json["depends"].get("fabric").is_none());
    }

    #[test]
    fn test_full_descriptor_json() {
        let mut config = config();
        config.uses_mixins = true;
        config.uses_fabric_api = true;
        config.sources = Some("https://github.com/alex/examplemod".to_string());

        let json = serde_json::to_value(ModDescriptor::from_config(&config)).unwrap();

        assert_eq!(json["contact"]["sources"], "https://github.com/alex/examplemod");
        assert!(json["contact"].get("homepage").is_none());
        assert_eq!(json["mixins"][0], "examplemod.mixins.json");
        assert_eq!(json["depends"]["fabric"], "*");
    }

    #[test]
    fn test_key_order_is_stable() {
        let mut config = config();
        config.uses_fabric_api = true;
        let text = serde_json::to_string_pretty(&ModDescriptor::from_config(&config)).unwrap();

        let id = text.find("\"id\"").unwrap();
        let license = text.find("\"license\"").unwrap();
        let loader = text.find("\"fabricloader\"").unwrap();
        let fabric = text.find("\"fabric\":").unwrap();
        assert!(text.starts_with("{\n  \"schemaVersion\": 1"));
        assert!(id < license);
        assert!(loader < fabric);
        assert!(text.contains("An <example> & more"));
    }

    #[test]
    fn test_mixins_package() {
        assert_eq!(MixinsDescriptor::from_config(&config()).package, "net.example.mixin");
    }
}
