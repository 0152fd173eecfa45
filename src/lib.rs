// ABOUTME: Main library module for goforge, a Go project scaffolder
// ABOUTME: Exports the template engine, scaffold planner/executor, and CLI

pub mod cli;
pub mod scaffold;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use scaffold::{
    scaffold, Configuration, Plan, ScaffoldExecutor, ScaffoldPlanner, ScaffoldReport,
};
pub use template::{ProjectKind, RenderContext, TemplateCatalog, TemplateEngine, TemplateKey, TemplateRole};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
