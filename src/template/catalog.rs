// ABOUTME: Bundled template catalog keyed by (project kind, file role)
// ABOUTME: Template sources are embedded at compile time and checked against a versioned manifest

use indexmap::IndexMap;
use tracing::debug;

use super::error::LoadError;
use super::key::{ProjectKind, TemplateKey, TemplateRole};

/// Bumped whenever the set of bundled templates changes shape
pub const CATALOG_VERSION: u32 = 1;

/// One manifest line: the key a template is published under and the bundled resource it reads
#[derive(Debug, Clone, Copy)]
pub struct ManifestEntry {
    pub key: TemplateKey,
    pub resource: &'static str,
}

const fn entry(kind: ProjectKind, role: TemplateRole, resource: &'static str) -> ManifestEntry {
    ManifestEntry {
        key: TemplateKey::new(kind, role),
        resource,
    }
}

pub const MANIFEST: &[ManifestEntry] = &[
    entry(ProjectKind::Api, TemplateRole::Manifest, "api/go.mod.tmpl"),
    entry(ProjectKind::Api, TemplateRole::Entrypoint, "api/main.go.tmpl"),
    entry(ProjectKind::Api, TemplateRole::EnvFile, "api/env.tmpl"),
    entry(ProjectKind::Api, TemplateRole::ContainerBuild, "api/Dockerfile.tmpl"),
    entry(ProjectKind::Cli, TemplateRole::Manifest, "cli/go.mod.tmpl"),
    entry(ProjectKind::Cli, TemplateRole::Entrypoint, "cli/main.go.tmpl"),
    entry(ProjectKind::Cli, TemplateRole::CommandRegistration, "cli/root.go.tmpl"),
    entry(ProjectKind::Cli, TemplateRole::Commands, "cli/commands.go.tmpl"),
    entry(ProjectKind::Cli, TemplateRole::Readme, "cli/README.md.tmpl"),
    entry(ProjectKind::Cli, TemplateRole::BuildAutomation, "cli/Makefile.tmpl"),
];

/// Template sources compiled into the binary, keyed by resource name
pub const BUNDLED_RESOURCES: &[(&str, &str)] = &[
    ("api/go.mod.tmpl", include_str!("../../templates/api/go.mod.tmpl")),
    ("api/main.go.tmpl", include_str!("../../templates/api/main.go.tmpl")),
    ("api/env.tmpl", include_str!("../../templates/api/env.tmpl")),
    ("api/Dockerfile.tmpl", include_str!("../../templates/api/Dockerfile.tmpl")),
    ("cli/go.mod.tmpl", include_str!("../../templates/cli/go.mod.tmpl")),
    ("cli/main.go.tmpl", include_str!("../../templates/cli/main.go.tmpl")),
    ("cli/root.go.tmpl", include_str!("../../templates/cli/root.go.tmpl")),
    ("cli/commands.go.tmpl", include_str!("../../templates/cli/commands.go.tmpl")),
    ("cli/README.md.tmpl", include_str!("../../templates/cli/README.md.tmpl")),
    ("cli/Makefile.tmpl", include_str!("../../templates/cli/Makefile.tmpl")),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub key: TemplateKey,
    pub resource: String,
    pub source: String,
}

/// Immutable set of template sources, iterated in manifest order
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    version: u32,
    entries: IndexMap<TemplateKey, TemplateEntry>,
}

impl TemplateCatalog {
    /// Load the catalog bundled with this binary
    pub fn load() -> Result<Self, LoadError> {
        Self::from_parts(MANIFEST, BUNDLED_RESOURCES)
    }

    /// Resolve every manifest entry against a resource table
    pub fn from_parts(manifest: &[ManifestEntry], resources: &[(&str, &str)]) -> Result<Self, LoadError> {
        let mut entries = IndexMap::with_capacity(manifest.len());

        for item in manifest {
            let source = resources
                .iter()
                .find(|(name, _)| *name == item.resource)
                .map(|(_, source)| *source)
                .ok_or_else(|| LoadError::MissingResource {
                    key: item.key,
                    resource: item.resource.to_string(),
                })?;

            let entry = TemplateEntry {
                key: item.key,
                resource: item.resource.to_string(),
                source: source.to_string(),
            };

            if entries.insert(item.key, entry).is_some() {
                return Err(LoadError::DuplicateKey { key: item.key });
            }
        }

        debug!(
            "Loaded template catalog v{} with {} entries",
            CATALOG_VERSION,
            entries.len()
        );

        Ok(Self {
            version: CATALOG_VERSION,
            entries,
        })
    }

    /// Build a catalog straight from sources; the resource name defaults to the key
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (TemplateKey, S)>,
        S: Into<String>,
    {
        let mut map = IndexMap::new();
        for (key, source) in entries {
            let entry = TemplateEntry {
                key,
                resource: key.to_string(),
                source: source.into(),
            };
            if map.insert(key, entry).is_some() {
                return Err(LoadError::DuplicateKey { key });
            }
        }

        Ok(Self {
            version: CATALOG_VERSION,
            entries: map,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn get(&self, key: TemplateKey) -> Option<&TemplateEntry> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: TemplateKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn entries(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    /// Keys registered under one project kind, in manifest order
    pub fn keys_for(&self, kind: ProjectKind) -> impl Iterator<Item = TemplateKey> + '_ {
        self.entries.keys().copied().filter(move |key| key.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
