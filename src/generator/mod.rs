//! Project generation engine.
//!
//! [`TemplateMaker`] walks the fixed artifact manifest built by
//! [`manifest::build`] and, for each entry, copies an embedded asset, renders
//! a Handlebars template against the [`ModConfig`], or writes a JSON
//! descriptor. Progress is reported through a [`GenerationObserver`].
//!
//! # Guarantees
//!
//! - Artifacts are written sequentially in manifest order.
//! - Files are created with create-new semantics: an existing file at any
//!   manifest path aborts the run with [`GenerationError::Collision`].
//! - The first error aborts the run. Files already written are left in place.
//! - Two runs with the same configuration into empty directories produce
//!   byte-identical trees.
//!
//! # Usage Example
//!
//! ```ignore
//! use templatemaker::generator::{LoggingObserver, TemplateMaker};
//!
//! let maker = TemplateMaker::new();
//! let report = maker.generate_with_observer(&config, dest, &mut LoggingObserver)?;
//! println!("{} files written", report.artifacts.len());
//! ```

pub mod error;
pub mod manifest;
pub mod observer;
pub mod templates;

pub use error::{GenerationError, GenerationErrorKind};
pub use manifest::{Artifact, ArtifactAction, Descriptor};
pub use observer::{CallbackObserver, GenerationObserver, LoggingObserver, NoopObserver};
pub use templates::{TemplateCache, TemplateFailure};

use crate::metrics::GenerationMetrics;
use crate::models::ModConfig;
use camino::Utf8Path;
use serde::Serialize;
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::Instant;

/// Values available to templates: the configuration plus derived names
#[derive(Serialize)]
struct TemplateContext<'a> {
    #[serde(flatten)]
    config: &'a ModConfig,
    main_package_dotted: String,
    main_package_path: String,
    entrypoint: String,
    maven_group: String,
}

impl<'a> TemplateContext<'a> {
    fn new(config: &'a ModConfig) -> Self {
        Self {
            config,
            main_package_dotted: config.main_package_dotted(),
            main_package_path: config.main_package_path(),
            entrypoint: config.entrypoint(),
            maven_group: config.maven_group(),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Destination-relative paths, in the order they were written
    pub artifacts: Vec<String>,
    pub bytes_written: u64,
    /// Follow-up steps the generated project needs before it builds
    pub warnings: Vec<String>,
}

/// The generator. Cheap to share: one instance can serve concurrent runs
/// into distinct destination directories.
pub struct TemplateMaker {
    templates: TemplateCache,
    metrics: GenerationMetrics,
}

impl TemplateMaker {
    pub fn new() -> Self {
        Self {
            templates: TemplateCache::new(),
            metrics: GenerationMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &GenerationMetrics {
        &self.metrics
    }

    pub fn templates(&self) -> &TemplateCache {
        &self.templates
    }

    /// Generate a project into `dest` without progress reporting
    pub fn generate(
        &self,
        config: &ModConfig,
        dest: &Utf8Path,
    ) -> Result<GenerationReport, GenerationError> {
        self.generate_with_observer(config, dest, &mut NoopObserver)
    }

    /// Generate a project into `dest`, reporting each artifact to `observer`
    pub fn generate_with_observer(
        &self,
        config: &ModConfig,
        dest: &Utf8Path,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationReport, GenerationError> {
        self.metrics.record_generation_started();
        let start = Instant::now();

        let result = self.run(config, dest, observer);

        match &result {
            Ok(report) => {
                self.metrics.record_generation_completed(start.elapsed());
                tracing::info!(
                    "Generated '{}' into {} ({} files, {} bytes) in {:.2}s",
                    config.mod_id,
                    dest,
                    report.artifacts.len(),
                    report.bytes_written,
                    start.elapsed().as_secs_f32()
                );
            }
            Err(e) => {
                self.metrics.record_generation_failed();
                tracing::error!("Generation of '{}' failed: {}", config.mod_id, e);
            }
        }

        result
    }

    fn run(
        &self,
        config: &ModConfig,
        dest: &Utf8Path,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationReport, GenerationError> {
        config.validate()?;
        let artifacts = manifest::build(config)?;
        let context = TemplateContext::new(config);

        tracing::info!(
            "Generating '{}' into {} ({} artifacts)",
            config.mod_id,
            dest,
            artifacts.len()
        );

        let mut report = GenerationReport::default();
        for artifact in &artifacts {
            observer.artifact_started(&artifact.path);
            let written = self.write_artifact(&context, dest, artifact)?;
            self.metrics.record_artifact(written);
            report.artifacts.push(artifact.path.clone());
            report.bytes_written += written;
            observer.artifact_finished(&artifact.path);

            if artifact.path == manifest::WRAPPER_JAR_PATH {
                let warning = format!(
                    "{} is a placeholder; run `gradle wrapper` in {} before `./gradlew`",
                    artifact.path, dest
                );
                report.warnings.push(warning);
            }
        }

        Ok(report)
    }

    fn write_artifact(
        &self,
        context: &TemplateContext<'_>,
        dest: &Utf8Path,
        artifact: &Artifact,
    ) -> Result<u64, GenerationError> {
        let target = dest.join(&artifact.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| GenerationError::io(&artifact.path, e))?;
        }

        let contents: Cow<'static, [u8]> = match &artifact.action {
            ArtifactAction::Copy(resource) | ArtifactAction::CopyExecutable(resource) => {
                Cow::Borrowed(resource.bytes)
            }
            ArtifactAction::Render(template) => {
                let rendered = self
                    .templates
                    .render(template, context, &self.metrics)
                    .map_err(|source| GenerationError::Template {
                        path: artifact.path.clone(),
                        source,
                    })?;
                Cow::Owned(rendered.into_bytes())
            }
            ArtifactAction::Json(descriptor) => {
                let json = descriptor
                    .to_pretty_json()
                    .map_err(|source| GenerationError::Json {
                        path: artifact.path.clone(),
                        source,
                    })?;
                Cow::Owned(json.into_bytes())
            }
        };

        write_new_file(&target, &contents).map_err(|e| GenerationError::io(&artifact.path, e))?;

        if let ArtifactAction::CopyExecutable(_) = artifact.action {
            self.make_executable(&target);
        }

        tracing::debug!("Wrote {} ({} bytes)", artifact.path, contents.len());
        Ok(contents.len() as u64)
    }

    /// Best effort `rwxr-xr-x`; filesystems without permission bits are skipped.
    #[cfg(unix)]
    fn make_executable(&self, target: &Utf8Path) {
        use std::os::unix::fs::PermissionsExt;

        if let Err(e) = fs::set_permissions(target, fs::Permissions::from_mode(0o755)) {
            self.metrics.record_permission_fallback();
            tracing::debug!("Could not mark {} executable: {}", target, e);
        }
    }

    #[cfg(not(unix))]
    fn make_executable(&self, target: &Utf8Path) {
        self.metrics.record_permission_fallback();
        tracing::debug!("Permission bits unsupported, leaving {} as is", target);
    }
}

impl Default for TemplateMaker {
    fn default() -> Self {
        Self::new()
    }
}

fn write_new_file(target: &Utf8Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)?;
    file.write_all(contents)?;
    file.flush()
}
