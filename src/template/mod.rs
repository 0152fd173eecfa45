// ABOUTME: Template module: bundled catalog, compiled engine, and render context
// ABOUTME: Provides the (kind, role) keyed templates scaffolds are rendered from

pub mod catalog;
pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;
pub mod key;

pub use catalog::{TemplateCatalog, TemplateEntry, CATALOG_VERSION};
pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use error::{CompileError, LoadError, RenderError, RenderFailure, Result, TemplateError};
pub use key::{ProjectKind, TemplateKey, TemplateRole};
