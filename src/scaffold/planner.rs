// ABOUTME: Turns a scaffold configuration into an ordered, validated plan
// ABOUTME: Planning only reads its inputs; nothing touches the filesystem until execution

use std::path::{Component, Path, PathBuf};
use tracing::{debug, instrument};

use super::config::Configuration;
use super::error::ConfigError;
use super::layout::resolve_segments;
use super::plan::{DirectoryStep, Plan, RenderStep};
use crate::template::{ProjectKind, TemplateKey};

const MAX_PROJECT_NAME_LEN: usize = 255;

#[derive(Debug, Clone)]
pub struct ScaffoldPlanner {
    base_dir: PathBuf,
}

impl Default for ScaffoldPlanner {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ScaffoldPlanner {
    /// Planner that places projects under `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[instrument(skip(self, config), fields(project = %config.project_name, kind = %config.kind))]
    pub fn plan(&self, config: &Configuration) -> Result<Plan, ConfigError> {
        validate_project_name(&config.project_name)?;
        let kind = parse_kind(&config.kind)?;

        if config.runtime_version.trim().is_empty() {
            return Err(ConfigError::new("runtime_version", "must not be empty"));
        }

        let layout = kind.layout();
        if layout.files.is_empty() {
            return Err(ConfigError::new(
                "kind",
                format!("project kind '{}' has no registered templates", kind),
            ));
        }

        let base = std::path::absolute(&self.base_dir).map_err(|e| {
            ConfigError::new(
                "base_dir",
                format!("cannot resolve '{}': {}", self.base_dir.display(), e),
            )
        })?;
        let root = base.join(&config.project_name);

        let directories = layout
            .directories
            .iter()
            .map(|segments| {
                let path = root.join(resolve_segments(segments, &config.project_name));
                ensure_within(&root, &path).map(|_| DirectoryStep { path })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let renders = layout
            .files
            .iter()
            .map(|file| {
                let output_path = root.join(resolve_segments(file.path, &config.project_name));
                ensure_within(&root, &output_path).map(|_| RenderStep {
                    key: TemplateKey::new(kind, file.role),
                    output_path,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Planned {} directories and {} files under {}",
            directories.len(),
            renders.len(),
            root.display()
        );

        Ok(Plan {
            root,
            directories,
            renders,
            context: config.render_context(kind),
        })
    }
}

fn parse_kind(raw: &str) -> Result<ProjectKind, ConfigError> {
    raw.parse::<ProjectKind>()
        .map_err(|_| ConfigError::new("kind", format!("unknown project kind '{}'", raw)))
}

/// A project name must be exactly one plain path component
fn validate_project_name(name: &str) -> Result<(), ConfigError> {
    let reject = |reason: &str| Err(ConfigError::new("project_name", reason));

    if name.is_empty() {
        return reject("must not be empty");
    }
    if name.len() > MAX_PROJECT_NAME_LEN {
        return reject("must be at most 255 bytes");
    }
    if name.contains(['/', '\\']) {
        return reject("must not contain path separators");
    }
    if name.chars().any(char::is_control) {
        return reject("must not contain control characters");
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => reject("must name a single directory, not '.', '..' or a root"),
    }
}

fn ensure_within(root: &Path, path: &Path) -> Result<(), ConfigError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| ConfigError::new("project_name", "output path escapes the project root"))?;

    let plain = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if relative.as_os_str().is_empty() || !plain {
        return Err(ConfigError::new(
            "project_name",
            format!("output path '{}' escapes the project root", path.display()),
        ));
    }

    Ok(())
}
