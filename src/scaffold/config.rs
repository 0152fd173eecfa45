// ABOUTME: Caller-supplied scaffold configuration
// ABOUTME: Holds raw inputs; the planner validates and interprets them

use serde::{Deserialize, Serialize};

use crate::template::{ProjectKind, RenderContext};

pub const DEFAULT_KIND: &str = "api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub project_name: String,
    pub kind: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub auth: Option<String>,
    pub runtime_version: String,
}

impl Configuration {
    /// New configuration for the default project kind
    pub fn new(project_name: impl Into<String>, runtime_version: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            kind: DEFAULT_KIND.to_string(),
            database: None,
            auth: None,
            runtime_version: runtime_version.into(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn with_auth(mut self, auth: impl Into<String>) -> Self {
        self.auth = Some(auth.into());
        self
    }

    /// Bindings for rendering, once the kind has been resolved
    pub fn render_context(&self, kind: ProjectKind) -> RenderContext {
        RenderContext::new(&self.project_name, kind, &self.runtime_version)
            .with_database(self.database.clone())
            .with_auth(self.auth.clone())
    }
}
