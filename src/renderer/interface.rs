use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Parses a template without rendering it.
    ///
    /// # Arguments
    /// * `name` - Name of the template (used in error messages)
    /// * `template` - Template source
    ///
    /// # Returns
    /// * `Result<()>` - `Error::TemplateParseError` if the source is malformed
    fn check(&self, name: &str, template: &str) -> Result<()>;

    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of the template (used in error messages)
    /// * `template` - Template source
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string, `Error::TemplateParseError` if the
    ///   source is malformed or `Error::TemplateExecError` if rendering fails
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String>;
}
