// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Compiles every catalog entry once, then renders by key into any io::Write sink

use handlebars::Handlebars;
use std::io::Write;
use tracing::debug;

use super::catalog::TemplateCatalog;
use super::context::RenderContext;
use super::error::{CompileError, RenderError, RenderFailure, Result};
use super::helpers;
use super::key::TemplateKey;

/// Compiled, read-only template set
///
/// Cheap to share: rendering takes `&self`, and the registry is `Send + Sync`,
/// so one engine can serve concurrent scaffold runs.
#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    keys: Vec<TemplateKey>,
}

impl TemplateEngine {
    /// Compile every entry of a catalog; the first parse failure aborts construction
    pub fn compile(catalog: &TemplateCatalog) -> std::result::Result<Self, CompileError> {
        let mut handlebars = Handlebars::new();

        // Unresolved references must fail instead of rendering as empty text
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        // Output is Go source, env files and Makefiles, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars);

        let mut keys = Vec::with_capacity(catalog.len());
        for entry in catalog.entries() {
            handlebars
                .register_template_string(&entry.key.to_string(), &entry.source)
                .map_err(|cause| CompileError {
                    key: entry.key,
                    cause,
                })?;
            keys.push(entry.key);
        }

        debug!("Compiled {} templates", keys.len());

        Ok(Self { handlebars, keys })
    }

    /// Load and compile the catalog bundled with this binary
    pub fn bundled() -> Result<Self> {
        let catalog = TemplateCatalog::load()?;
        Ok(Self::compile(&catalog)?)
    }

    /// Render one template into the given sink
    pub fn render<W: Write>(
        &self,
        key: TemplateKey,
        context: &RenderContext,
        sink: W,
    ) -> std::result::Result<(), RenderError> {
        if !self.has_template(key) {
            return Err(RenderError {
                key,
                cause: RenderFailure::UnknownTemplate,
            });
        }

        self.handlebars
            .render_to_write(&key.to_string(), context, sink)
            .map_err(|e| RenderError {
                key,
                cause: RenderFailure::Expansion(e),
            })
    }

    /// Render one template into a new string
    pub fn render_to_string(
        &self,
        key: TemplateKey,
        context: &RenderContext,
    ) -> std::result::Result<String, RenderError> {
        let mut buffer = Vec::new();
        self.render(key, context, &mut buffer)?;
        decode_output(key, buffer)
    }

    pub fn has_template(&self, key: TemplateKey) -> bool {
        self.keys.contains(&key)
    }

    /// Compiled keys, in catalog order
    pub fn keys(&self) -> &[TemplateKey] {
        &self.keys
    }
}

fn decode_output(key: TemplateKey, buffer: Vec<u8>) -> std::result::Result<String, RenderError> {
    String::from_utf8(buffer).map_err(|e| RenderError {
        key,
        cause: RenderFailure::InvalidUtf8(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::key::{ProjectKind, TemplateRole};

    fn key(kind: ProjectKind, role: TemplateRole) -> TemplateKey {
        TemplateKey::new(kind, role)
    }

    fn demo_context() -> RenderContext {
        RenderContext::new("demo", ProjectKind::Api, "1.21")
    }

    #[test]
    fn test_bundled_engine_compiles_every_entry() {
        let catalog = TemplateCatalog::load().unwrap();
        let engine = TemplateEngine::compile(&catalog).unwrap();
        assert_eq!(engine.keys().len(), catalog.len());
        for entry in catalog.entries() {
            assert!(engine.has_template(entry.key));
        }
    }

    #[test]
    fn test_basic_template_rendering() {
        let engine = TemplateEngine::bundled().unwrap();
        let output = engine
            .render_to_string(key(ProjectKind::Api, TemplateRole::Manifest), &demo_context())
            .unwrap();

        assert!(output.contains("module demo"));
        assert!(output.contains("go 1.21"));
    }

    #[test]
    fn test_render_into_sink() {
        let engine = TemplateEngine::bundled().unwrap();
        let mut sink = Vec::new();
        engine
            .render(
                key(ProjectKind::Api, TemplateRole::ContainerBuild),
                &demo_context(),
                &mut sink,
            )
            .unwrap();

        let text = String::from_utf8(sink).unwrap();
        assert!(text.starts_with("FROM golang:1.21-alpine"));
        assert!(text.contains("./cmd/demo"));
    }

    #[test]
    fn test_optional_fields_drive_conditionals() {
        let engine = TemplateEngine::bundled().unwrap();
        let env_key = key(ProjectKind::Api, TemplateRole::EnvFile);

        let bare = engine.render_to_string(env_key, &demo_context()).unwrap();
        assert!(bare.contains("APP_NAME=demo"));
        assert!(!bare.contains("DATABASE_DRIVER"));
        assert!(!bare.contains("AUTH_STRATEGY"));

        let context = demo_context()
            .with_database(Some("postgres".to_string()))
            .with_auth(Some("jwt".to_string()));
        let full = engine.render_to_string(env_key, &context).unwrap();
        assert!(full.contains("DATABASE_DRIVER=postgres"));
        assert!(full.contains("AUTH_STRATEGY=jwt"));
    }

    #[test]
    fn test_no_html_escaping() {
        let catalog = TemplateCatalog::from_entries([(
            key(ProjectKind::Api, TemplateRole::Readme),
            "<{{project_name}}> & \"{{runtime_version}}\"",
        )])
        .unwrap();
        let engine = TemplateEngine::compile(&catalog).unwrap();
        let context = RenderContext::new("a&b", ProjectKind::Api, "1.21");

        let output = engine
            .render_to_string(key(ProjectKind::Api, TemplateRole::Readme), &context)
            .unwrap();
        assert_eq!(output, "<a&b> & \"1.21\"");
    }

    #[test]
    fn test_missing_variable_is_render_error() {
        let readme = key(ProjectKind::Cli, TemplateRole::Readme);
        let catalog =
            TemplateCatalog::from_entries([(readme, "# {{project_name}} by {{author}}")]).unwrap();
        let engine = TemplateEngine::compile(&catalog).unwrap();

        let err = engine.render_to_string(readme, &demo_context()).unwrap_err();
        assert_eq!(err.key, readme);
        assert!(matches!(err.cause, RenderFailure::Expansion(_)));
    }

    #[test]
    fn test_unknown_key_is_render_error() {
        let engine = TemplateEngine::bundled().unwrap();
        let missing = key(ProjectKind::Api, TemplateRole::Readme);

        let err = engine.render_to_string(missing, &demo_context()).unwrap_err();
        assert_eq!(err.key, missing);
        assert!(matches!(err.cause, RenderFailure::UnknownTemplate));
    }

    #[test]
    fn test_invalid_utf8_output_is_render_error() {
        let readme = key(ProjectKind::Cli, TemplateRole::Readme);

        let err = decode_output(readme, vec![b'o', b'k', 0xff, 0xfe]).unwrap_err();
        assert_eq!(err.key, readme);
        assert!(matches!(err.cause, RenderFailure::InvalidUtf8(_)));

        assert_eq!(decode_output(readme, b"ok".to_vec()).unwrap(), "ok");
    }

    #[test]
    fn test_syntax_error_names_offending_key() {
        let good = key(ProjectKind::Cli, TemplateRole::Manifest);
        let broken = key(ProjectKind::Cli, TemplateRole::BuildAutomation);
        let catalog = TemplateCatalog::from_entries([
            (good, "module {{project_name}}"),
            (broken, "build: {{project_name}"),
        ])
        .unwrap();

        let err = TemplateEngine::compile(&catalog).err().unwrap();
        assert_eq!(err.key, broken);
    }
}
