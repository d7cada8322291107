//! Template rendering used for file bodies, output paths and shell scripts.

pub mod interface;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;

/// Returns the renderer used by the generator and the validator.
pub fn get_template_engine() -> MiniJinjaRenderer {
    MiniJinjaRenderer::new()
}
