// ABOUTME: Ordered filesystem operations derived from one scaffold configuration
// ABOUTME: Directory steps come first, then render steps, all rooted at the project root

use std::path::{Path, PathBuf};

use super::error::{StepDescriptor, StepKind};
use crate::template::{RenderContext, TemplateKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStep {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStep {
    pub key: TemplateKey,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Plan {
    pub root: PathBuf,
    pub directories: Vec<DirectoryStep>,
    pub renders: Vec<RenderStep>,
    pub context: RenderContext,
}

impl Plan {
    pub fn total_steps(&self) -> usize {
        self.directories.len() + self.renders.len()
    }

    pub fn directory_descriptor(&self, position: usize) -> Option<StepDescriptor> {
        self.directories.get(position).map(|step| StepDescriptor {
            index: position,
            kind: StepKind::Directory,
            path: step.path.clone(),
        })
    }

    pub fn render_descriptor(&self, position: usize) -> Option<StepDescriptor> {
        self.renders.get(position).map(|step| StepDescriptor {
            index: self.directories.len() + position,
            kind: StepKind::Render(step.key),
            path: step.output_path.clone(),
        })
    }

    /// Every step in execution order
    pub fn descriptors(&self) -> Vec<StepDescriptor> {
        (0..self.directories.len())
            .filter_map(|i| self.directory_descriptor(i))
            .chain((0..self.renders.len()).filter_map(|i| self.render_descriptor(i)))
            .collect()
    }

    pub fn output_paths(&self) -> impl Iterator<Item = &Path> {
        self.renders.iter().map(|step| step.output_path.as_path())
    }

    /// True when `path` is a strict descendant of the root
    pub fn contains(&self, path: &Path) -> bool {
        path != self.root && path.starts_with(&self.root)
    }

    /// First step whose target is not strictly inside the root
    pub fn first_escaping_step(&self) -> Option<StepDescriptor> {
        self.descriptors()
            .into_iter()
            .find(|descriptor| !self.contains(&descriptor.path))
    }

    /// Whether every file lands in a directory the plan creates first
    ///
    /// Directories are created recursively, so a file's parent counts as created
    /// when it equals a directory step or is an ancestor of one.
    pub fn is_ordered(&self) -> bool {
        let parents_first = self.directories.iter().enumerate().all(|(i, dir)| {
            self.directories[i + 1..]
                .iter()
                .all(|later| later.path == dir.path || !dir.path.starts_with(&later.path))
        });

        let files_covered = self.renders.iter().all(|render| match render.output_path.parent() {
            Some(parent) => self
                .directories
                .iter()
                .any(|dir| dir.path.starts_with(parent)),
            None => false,
        });

        parents_first && files_covered
    }
}
