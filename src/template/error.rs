// ABOUTME: Error types for template catalog loading, compilation, and rendering
// ABOUTME: Each error carries the template key it concerns so callers can branch on it

use thiserror::Error;

use super::key::TemplateKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Template {key} is listed in the manifest but resource '{resource}' is not bundled")]
    MissingResource { key: TemplateKey, resource: String },

    #[error("Duplicate template key in catalog: {key}")]
    DuplicateKey { key: TemplateKey },
}

#[derive(Error, Debug)]
#[error("Failed to compile template {key}: {cause}")]
pub struct CompileError {
    pub key: TemplateKey,
    #[source]
    pub cause: handlebars::TemplateError,
}

#[derive(Error, Debug)]
#[error("Failed to render template {key}: {cause}")]
pub struct RenderError {
    pub key: TemplateKey,
    #[source]
    pub cause: RenderFailure,
}

#[derive(Error, Debug)]
pub enum RenderFailure {
    #[error("template is not registered with the engine")]
    UnknownTemplate,

    #[error("{0}")]
    Expansion(#[from] handlebars::RenderError),

    #[error("rendered output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template catalog error: {0}")]
    Load(#[from] LoadError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
