use crate::models::{License, LoomVersion, ModConfig, ProjectVersions};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, Environment, File, FileFormat};
use std::fs;

/// Prefix of environment variables overriding file values,
/// e.g. `TEMPLATEMAKER_MOD_NAME` or `TEMPLATEMAKER_VERSIONS__MINECRAFT`.
pub const ENV_PREFIX: &str = "TEMPLATEMAKER";

/// Loads and saves the YAML description of a mod project.
///
/// Values from the file can be overridden by `TEMPLATEMAKER_*` environment
/// variables; nested keys use `__` as separator.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a manager for the configuration file at `config_path`.
    pub fn new<P: AsRef<Utf8Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load and validate the mod configuration.
    pub fn load_mod_config(&self) -> Result<ModConfig> {
        self.load_with_env(Some(Environment::with_prefix(ENV_PREFIX)))
    }

    /// Load and validate the mod configuration, ignoring the environment.
    pub fn load_mod_config_from_file(&self) -> Result<ModConfig> {
        self.load_with_env(None)
    }

    fn load_with_env(&self, environment: Option<Environment>) -> Result<ModConfig> {
        if !self.config_path.exists() {
            anyhow::bail!("Mod config file not found at {}", self.config_path);
        }

        let mut builder = Config::builder().add_source(
            File::from(self.config_path.as_std_path()).format(FileFormat::Yaml),
        );
        if let Some(environment) = environment {
            builder = builder.add_source(environment.prefix_separator("_").separator("__"));
        }

        let config: ModConfig = builder
            .build()
            .with_context(|| format!("Failed to read mod config: {}", self.config_path))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse mod config: {}", self.config_path))?;

        config
            .validate()
            .with_context(|| format!("Invalid mod config: {}", self.config_path))?;

        tracing::info!("Loaded mod config from {}", self.config_path);
        Ok(config)
    }

    /// Save the mod configuration, creating parent directories as needed.
    pub fn save_mod_config(&self, config: &ModConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {}", parent))?;
            }
        }

        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize mod config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write mod config: {}", self.config_path))?;

        tracing::info!("Saved mod config to {}", self.config_path);
        Ok(())
    }

    /// Starter configuration written by `templatemaker init`.
    pub fn default_mod_config() -> ModConfig {
        ModConfig {
            mod_id: "modid".to_string(),
            mod_name: "Example Mod".to_string(),
            mod_description: "This is an example description! Tell everyone what your mod is about!"
                .to_string(),
            author: "Me!".to_string(),
            license: License::Cc0,
            sources: None,
            homepage: None,
            main_package: vec![
                "net".to_string(),
                "fabricmc".to_string(),
                "example".to_string(),
            ],
            main_class: "ExampleMod".to_string(),
            uses_mixins: true,
            uses_fabric_api: false,
            loom: LoomVersion::new("1.6-SNAPSHOT"),
            versions: ProjectVersions {
                minecraft: "1.20.4".to_string(),
                yarn: "1.20.4+build.3".to_string(),
                yarn_v2: true,
                loader: "0.15.7".to_string(),
                fabric_api: None,
            },
            copyright_year: None,
        }
    }

    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(dir.join("templatemaker.yaml"));
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let (manager, _temp_dir) = create_test_config_manager();
        assert!(manager.load_mod_config_from_file().is_err());
    }

    #[test]
    fn test_save_and_load_default_config() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = ConfigManager::default_mod_config();
        manager.save_mod_config(&config).unwrap();

        let loaded = manager.load_mod_config_from_file().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigManager::default_mod_config().validate().is_ok());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(dir.join("nested").join("mod.yaml"));

        manager
            .save_mod_config(&ConfigManager::default_mod_config())
            .unwrap();
        assert!(manager.config_path().exists());
    }
}
