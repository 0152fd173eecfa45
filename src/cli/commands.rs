// ABOUTME: Command implementations for the goforge CLI
// ABOUTME: Handles the init and templates commands on top of the scaffold library

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use super::config::Config;
use super::toolchain;
use crate::scaffold::{Configuration, Plan, ScaffoldExecutor, ScaffoldPlanner};
use crate::template::{TemplateCatalog, TemplateEngine};

/// Options gathered from `goforge init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub project_name: String,
    pub template: Option<String>,
    pub db: Option<String>,
    pub auth: Option<String>,
    pub go_version: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// Fill unset options from flags, then config, then detection
pub fn resolve_configuration(options: &InitOptions, config: &Config) -> Configuration {
    let kind = options
        .template
        .clone()
        .unwrap_or_else(|| config.default_template.clone());

    let go_version = options
        .go_version
        .clone()
        .or_else(|| config.default_go_version.clone())
        .unwrap_or_else(toolchain::detect_go_version_or_default);

    let mut configuration = Configuration::new(&options.project_name, go_version).with_kind(kind);
    configuration.database = options.db.clone().filter(|db| !db.is_empty());
    configuration.auth = options.auth.clone().filter(|auth| !auth.is_empty());
    configuration
}

/// Scaffold a new project
pub fn init_project(options: InitOptions, config: &Config) -> Result<()> {
    let configuration = resolve_configuration(&options, config);

    let base_dir = options
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    info!(
        "Initializing {} project '{}' in {}",
        configuration.kind,
        configuration.project_name,
        base_dir.display()
    );

    let engine = TemplateEngine::bundled().context("Error initializing template engine")?;

    let planner = ScaffoldPlanner::new(base_dir);
    let plan = planner.plan(&configuration)?;

    if options.dry_run {
        print_plan(&plan);
        info!("Dry run - no files were written");
        return Ok(());
    }

    let report = ScaffoldExecutor::new(&engine)
        .execute(&plan)
        .with_context(|| {
            format!(
                "Scaffold stopped; files created before the failure were left in {}",
                plan.root.display()
            )
        })?;

    info!(
        "Created {} directories and {} files",
        report.directories, report.files
    );

    println!(
        "Project {} created successfully with template: {}, db: {}, auth: {}",
        configuration.project_name,
        configuration.kind,
        configuration.database.as_deref().unwrap_or(""),
        configuration.auth.as_deref().unwrap_or("")
    );

    Ok(())
}

/// Print every bundled template, marking the configured default kind
pub fn list_templates(config: &Config) -> Result<()> {
    let catalog = TemplateCatalog::load().context("Error loading template catalog")?;

    println!("Template catalog v{}", catalog.version());
    for line in template_listing(&catalog, &config.default_template) {
        println!("{}", line);
    }

    Ok(())
}

fn template_listing(catalog: &TemplateCatalog, default_kind: &str) -> Vec<String> {
    catalog
        .entries()
        .map(|entry| {
            let marker = if entry.key.kind.to_string() == default_kind {
                " (default)"
            } else {
                ""
            };
            format!("  {:<28} {}{}", entry.key.to_string(), entry.resource, marker)
        })
        .collect()
}

fn print_plan(plan: &Plan) {
    println!("Project root: {}", plan.root.display());
    for step in plan.descriptors() {
        println!("  {}", step);
    }
}
