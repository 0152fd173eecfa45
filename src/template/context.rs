// ABOUTME: Variable bindings exposed to templates during rendering
// ABOUTME: Built deterministically from a scaffold configuration; no clock, host, or env data

use serde::Serialize;

use super::key::ProjectKind;

/// Values a template can reference, by the names used in the bundled sources
///
/// `database` and `auth` are always serialized, as `null` when unset, so strict
/// rendering can test them with `{{#if}}` without tripping a missing-variable error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub project_name: String,
    pub kind: ProjectKind,
    pub database: Option<String>,
    pub auth: Option<String>,
    pub runtime_version: String,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>, kind: ProjectKind, runtime_version: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            kind,
            database: None,
            auth: None,
            runtime_version: runtime_version.into(),
        }
    }

    pub fn with_database(mut self, database: Option<String>) -> Self {
        self.database = database;
        self
    }

    pub fn with_auth(mut self, auth: Option<String>) -> Self {
        self.auth = auth;
        self
    }

    /// Convert context to JSON, the shape handlebars sees
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_json_shape() {
        let context = RenderContext::new("demo", ProjectKind::Api, "1.21")
            .with_database(Some("postgres".to_string()));
        let json = context.to_json().unwrap();

        assert_eq!(json["project_name"], "demo");
        assert_eq!(json["kind"], "api");
        assert_eq!(json["database"], "postgres");
        assert!(json["auth"].is_null());
        assert!(json.as_object().unwrap().contains_key("auth"));
        assert_eq!(json["runtime_version"], "1.21");
    }

    #[test]
    fn test_same_inputs_same_context() {
        let a = RenderContext::new("demo", ProjectKind::Cli, "1.22");
        let b = RenderContext::new("demo", ProjectKind::Cli, "1.22");
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}
