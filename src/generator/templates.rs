use crate::metrics::GenerationMetrics;
use crate::resources::TemplateSource;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateFailure {
    #[error("template '{name}' has a syntax error: {source}")]
    Syntax {
        name: &'static str,
        #[source]
        source: Box<TemplateError>,
    },

    #[error("template '{name}' failed to render: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: Box<RenderError>,
    },
}

/// Lazily compiled, never invalidated template registry.
///
/// Templates are compiled the first time they are rendered and reused for
/// every later render. Rendering in strict mode turns references to fields the
/// context lacks into errors. Output is not HTML escaped.
pub struct TemplateCache {
    registry: RwLock<Handlebars<'static>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            registry: RwLock::new(registry),
        }
    }

    pub fn is_cached(&self, name: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .has_template(name)
    }

    pub fn render<T: Serialize>(
        &self,
        template: &TemplateSource,
        context: &T,
        metrics: &GenerationMetrics,
    ) -> Result<String, TemplateFailure> {
        self.ensure_compiled(template, metrics)?;

        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .render(template.name, context)
            .map_err(|e| TemplateFailure::Render {
                name: template.name,
                source: Box::new(e),
            })
    }

    fn ensure_compiled(
        &self,
        template: &TemplateSource,
        metrics: &GenerationMetrics,
    ) -> Result<(), TemplateFailure> {
        if self.is_cached(template.name) {
            metrics.record_template_cache_hit();
            return Ok(());
        }

        let mut registry = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another run may have compiled it while we waited for the lock.
        if registry.has_template(template.name) {
            metrics.record_template_cache_hit();
            return Ok(());
        }

        registry
            .register_template_string(template.name, template.source)
            .map_err(|e| TemplateFailure::Syntax {
                name: template.name,
                source: Box::new(e),
            })?;
        metrics.record_template_cache_miss();
        tracing::debug!("Compiled template {}", template.name);
        Ok(())
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}
