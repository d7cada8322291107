use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Undefined variables, attributes and functions are errors, nothing is
/// auto-escaped and trailing newlines are kept, so a template body renders
/// byte-for-byte apart from its expressions.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the base template language only.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        Self { env }
    }

    fn compile(&self, name: &str, template: &str) -> Result<Environment<'static>> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string()).map_err(
            |source| Error::TemplateParseError { name: name.to_string(), source },
        )?;
        Ok(env)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn check(&self, name: &str, template: &str) -> Result<()> {
        self.compile(name, template).map(|_| ())
    }

    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        let env = self.compile(name, template)?;
        let exec_error =
            |source| Error::TemplateExecError { name: name.to_string(), source };

        let tmpl = env.get_template(name).map_err(exec_error)?;
        tmpl.render(context).map_err(exec_error)
    }
}
