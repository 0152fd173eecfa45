// ABOUTME: Scaffold module: configuration, planning, and plan execution
// ABOUTME: Decides which directories and files a project gets, then writes them

pub mod config;
pub mod error;
pub mod executor;
pub mod layout;
pub mod plan;
pub mod planner;

pub use config::{Configuration, DEFAULT_KIND};
pub use error::{
    ConfigError, ExecutionError, Result, ScaffoldError, StepDescriptor, StepFailure, StepKind,
};
pub use executor::{ScaffoldExecutor, ScaffoldReport};
pub use layout::{FileLayout, KindLayout, PathSegment};
pub use plan::{DirectoryStep, Plan, RenderStep};
pub use planner::ScaffoldPlanner;

use crate::template::TemplateEngine;

/// Plan and execute in one call
pub fn scaffold(
    engine: &TemplateEngine,
    planner: &ScaffoldPlanner,
    config: &Configuration,
) -> Result<ScaffoldReport> {
    let plan = planner.plan(config)?;
    Ok(ScaffoldExecutor::new(engine).execute(&plan)?)
}
