//! CLI commands

pub mod generate;
pub mod templates;

pub use generate::{GenerateArgs, handle_generate};
pub use templates::{TemplatesArgs, handle_templates};
