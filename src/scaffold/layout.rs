// ABOUTME: Static per-kind project layouts: directories to create and files to render
// ABOUTME: Adding a project kind means adding a table here, not new planner branches

use std::path::PathBuf;

use crate::template::{ProjectKind, TemplateKey, TemplateRole};

/// One component of a path relative to the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Literal(&'static str),
    ProjectName,
}

use PathSegment::{Literal, ProjectName};

#[derive(Debug, Clone, Copy)]
pub struct FileLayout {
    pub role: TemplateRole,
    pub path: &'static [PathSegment],
}

#[derive(Debug)]
pub struct KindLayout {
    pub kind: ProjectKind,
    /// Ordered parent-before-child
    pub directories: &'static [&'static [PathSegment]],
    pub files: &'static [FileLayout],
}

static API_LAYOUT: KindLayout = KindLayout {
    kind: ProjectKind::Api,
    directories: &[
        &[Literal("cmd"), ProjectName],
        &[Literal("pkg")],
        &[Literal("internal"), Literal("api")],
        &[Literal("configs")],
    ],
    files: &[
        FileLayout {
            role: TemplateRole::Manifest,
            path: &[Literal("go.mod")],
        },
        FileLayout {
            role: TemplateRole::Entrypoint,
            path: &[Literal("cmd"), ProjectName, Literal("main.go")],
        },
        FileLayout {
            role: TemplateRole::EnvFile,
            path: &[Literal(".env")],
        },
        FileLayout {
            role: TemplateRole::ContainerBuild,
            path: &[Literal("Dockerfile")],
        },
    ],
};

static CLI_LAYOUT: KindLayout = KindLayout {
    kind: ProjectKind::Cli,
    directories: &[
        &[Literal("cmd"), ProjectName],
        &[Literal("internal"), Literal("cli")],
        &[Literal("internal"), Literal("cli"), Literal("commands")],
        &[Literal("pkg")],
    ],
    files: &[
        FileLayout {
            role: TemplateRole::Manifest,
            path: &[Literal("go.mod")],
        },
        FileLayout {
            role: TemplateRole::Entrypoint,
            path: &[Literal("cmd"), ProjectName, Literal("main.go")],
        },
        FileLayout {
            role: TemplateRole::CommandRegistration,
            path: &[Literal("internal"), Literal("cli"), Literal("root.go")],
        },
        FileLayout {
            role: TemplateRole::Commands,
            path: &[
                Literal("internal"),
                Literal("cli"),
                Literal("commands"),
                Literal("commands.go"),
            ],
        },
        FileLayout {
            role: TemplateRole::Readme,
            path: &[Literal("README.md")],
        },
        FileLayout {
            role: TemplateRole::BuildAutomation,
            path: &[Literal("Makefile")],
        },
    ],
};

impl ProjectKind {
    pub fn layout(self) -> &'static KindLayout {
        match self {
            ProjectKind::Api => &API_LAYOUT,
            ProjectKind::Cli => &CLI_LAYOUT,
        }
    }
}

impl KindLayout {
    /// Template keys this kind renders, in file order
    pub fn template_keys(&self) -> impl Iterator<Item = TemplateKey> + '_ {
        self.files
            .iter()
            .map(move |file| TemplateKey::new(self.kind, file.role))
    }
}

/// Join segments into a root-relative path
pub fn resolve_segments(segments: &[PathSegment], project_name: &str) -> PathBuf {
    segments
        .iter()
        .map(|segment| match segment {
            Literal(text) => *text,
            ProjectName => project_name,
        })
        .collect()
}
