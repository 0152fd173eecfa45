// ABOUTME: Applies a scaffold plan to the filesystem
// ABOUTME: Fail-fast: stops at the first failing step and leaves completed steps in place

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

use super::error::{ExecutionError, StepDescriptor, StepFailure, StepKind};
use super::plan::Plan;
use crate::template::TemplateEngine;

/// Outcome of a fully applied plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    /// Directory and file paths in the order they were applied
    pub created_paths: Vec<PathBuf>,
    pub directories: usize,
    pub files: usize,
}

pub struct ScaffoldExecutor<'a> {
    engine: &'a TemplateEngine,
}

impl<'a> ScaffoldExecutor<'a> {
    pub fn new(engine: &'a TemplateEngine) -> Self {
        Self { engine }
    }

    /// Execute every step of the plan in order
    ///
    /// Nothing is rolled back on failure: the returned error names the step that
    /// failed, and every earlier step has already been applied.
    #[instrument(skip(self, plan), fields(root = %plan.root.display()))]
    pub fn execute(&self, plan: &Plan) -> Result<ScaffoldReport, ExecutionError> {
        if let Some(step) = plan.first_escaping_step() {
            error!("Refusing to apply plan: {} is outside the root", step);
            return Err(ExecutionError {
                step,
                cause: StepFailure::OutsideRoot,
            });
        }

        // An existing symlink below the root could redirect writes outside it
        for step in plan.descriptors() {
            if let Some(link) = symlinked_component(&plan.root, &step.path) {
                error!(
                    "Refusing to apply plan: {} passes through symlink {}",
                    step,
                    link.display()
                );
                return Err(ExecutionError {
                    step,
                    cause: StepFailure::SymlinkedPath(link),
                });
            }
        }

        let mut report = ScaffoldReport {
            root: plan.root.clone(),
            created_paths: Vec::with_capacity(plan.total_steps()),
            directories: 0,
            files: 0,
        };

        for (position, step) in plan.directories.iter().enumerate() {
            let fail = |cause| ExecutionError {
                step: StepDescriptor {
                    index: position,
                    kind: StepKind::Directory,
                    path: step.path.clone(),
                },
                cause,
            };

            if step.path.exists() && !step.path.is_dir() {
                return Err(fail(StepFailure::NotADirectory));
            }
            fs::create_dir_all(&step.path).map_err(|e| fail(StepFailure::CreateDirectory(e)))?;

            debug!("Created directory {}", step.path.display());
            report.created_paths.push(step.path.clone());
            report.directories += 1;
        }

        for (position, step) in plan.renders.iter().enumerate() {
            let fail = |cause| ExecutionError {
                step: StepDescriptor {
                    index: plan.directories.len() + position,
                    kind: StepKind::Render(step.key),
                    path: step.output_path.clone(),
                },
                cause,
            };

            // Render fully before opening the destination so a failed render leaves no file
            let mut buffer = Vec::new();
            self.engine
                .render(step.key, &plan.context, &mut buffer)
                .map_err(|e| fail(StepFailure::Render(e)))?;

            fs::write(&step.output_path, &buffer).map_err(|e| fail(StepFailure::Write(e)))?;

            debug!("Rendered {} to {}", step.key, step.output_path.display());
            report.created_paths.push(step.output_path.clone());
            report.files += 1;
        }

        info!(
            "Scaffolded {} directories and {} files under {}",
            report.directories,
            report.files,
            report.root.display()
        );

        Ok(report)
    }
}

/// First existing component between `root` and `path` (inclusive) that is a symlink
fn symlinked_component(root: &Path, path: &Path) -> Option<PathBuf> {
    let relative = path.strip_prefix(root).ok()?;
    let mut current = root.to_path_buf();

    for component in relative.components() {
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => return Some(current),
            Ok(_) => {}
            // Nothing below a missing component exists yet
            Err(_) => return None,
        }
    }

    None
}
