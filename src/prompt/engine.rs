use crate::error::PromptError;
use tera::Tera;

/// Tera-backed template engine for building structured prompts.
///
/// Templates are registered under names without an `.html` suffix, so
/// Tera's autoescaping never touches interpolated text.
pub struct TeraEngine {
    tera: Tera,
}

impl TeraEngine {
    /// Create with inline templates (no filesystem).
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Register a template from a string.
    pub fn add_template(&mut self, name: &'static str, content: &str) -> Result<(), PromptError> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|source| PromptError::Compile { name, source })
    }

    /// Render a named template with the given context.
    ///
    /// Tera is strict: a variable referenced by the template but missing
    /// from `context` is an error, never an empty string.
    pub fn render(
        &self,
        name: &'static str,
        context: &tera::Context,
    ) -> Result<String, PromptError> {
        self.tera
            .render(name, context)
            .map_err(|source| PromptError::Render { name, source })
    }
}
