// ABOUTME: Error types for scaffold planning and plan execution
// ABOUTME: Config errors name the offending field; execution errors name the failing step

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::template::{RenderError, TemplateKey};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: String,
}

impl ConfigError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Directory,
    Render(TemplateKey),
}

/// Identifies one plan step: directory steps are numbered first, render steps after them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor {
    pub index: usize,
    pub kind: StepKind,
    pub path: PathBuf,
}

impl fmt::Display for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StepKind::Directory => {
                write!(f, "#{} create directory {}", self.index, self.path.display())
            }
            StepKind::Render(key) => {
                write!(f, "#{} render {} -> {}", self.index, key, self.path.display())
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum StepFailure {
    #[error("could not create directory: {0}")]
    CreateDirectory(#[source] std::io::Error),

    #[error("path exists and is not a directory")]
    NotADirectory,

    #[error("{0}")]
    Render(#[source] RenderError),

    #[error("could not write output file: {0}")]
    Write(#[source] std::io::Error),

    #[error("path is outside the project root")]
    OutsideRoot,

    #[error("path passes through symlink {}", .0.display())]
    SymlinkedPath(PathBuf),
}

#[derive(Error, Debug)]
#[error("Scaffold step {step} failed: {cause}")]
pub struct ExecutionError {
    pub step: StepDescriptor,
    #[source]
    pub cause: StepFailure,
}

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
