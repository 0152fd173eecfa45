// ABOUTME: Identifiers for bundled templates: project kinds, file roles, and their pairing
// ABOUTME: A TemplateKey is the stable name a template is registered and looked up under

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Project archetype selecting which files a scaffold produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Api,
    Cli,
}

/// Logical role a file plays inside a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TemplateRole {
    Manifest,
    Entrypoint,
    EnvFile,
    ContainerBuild,
    CommandRegistration,
    Commands,
    Readme,
    BuildAutomation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateKey {
    pub kind: ProjectKind,
    pub role: TemplateRole,
}

impl TemplateKey {
    pub const fn new(kind: ProjectKind, role: TemplateRole) -> Self {
        Self { kind, role }
    }

    /// Every key that could exist, whether or not the catalog ships it
    pub fn all() -> impl Iterator<Item = TemplateKey> {
        ProjectKind::iter()
            .flat_map(|kind| TemplateRole::iter().map(move |role| TemplateKey::new(kind, role)))
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.role)
    }
}
