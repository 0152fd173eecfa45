// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for goforge

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goforge")]
#[command(about = "GoForge: A CLI for scaffolding Go applications")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new Go project
    Init {
        #[arg(help = "Name of the project directory to create")]
        project_name: String,

        #[arg(short, long, help = "Template type (api, cli)")]
        template: Option<String>,

        #[arg(short, long, help = "Database (sqlite, postgres, mongodb, mysql, oracle)")]
        db: Option<String>,

        #[arg(short, long, help = "Authentication (jwt, oauth2)")]
        auth: Option<String>,

        #[arg(short, long, help = "Go version to use (auto-detected if not specified)")]
        go_version: Option<String>,

        #[arg(short, long, help = "Directory to create the project in")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Print the plan without touching the filesystem")]
        dry_run: bool,
    },

    /// List the bundled templates
    Templates,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_init_with_flags() {
        let args = Args::try_parse_from([
            "goforge", "init", "demo", "-t", "cli", "-d", "postgres", "-a", "jwt", "-g", "1.22",
        ])
        .unwrap();

        match args.command {
            Commands::Init {
                project_name,
                template,
                db,
                auth,
                go_version,
                output_dir,
                dry_run,
            } => {
                assert_eq!(project_name, "demo");
                assert_eq!(template.as_deref(), Some("cli"));
                assert_eq!(db.as_deref(), Some("postgres"));
                assert_eq!(auth.as_deref(), Some("jwt"));
                assert_eq!(go_version.as_deref(), Some("1.22"));
                assert!(output_dir.is_none());
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_init_requires_project_name() {
        assert!(Args::try_parse_from(["goforge", "init"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Args::try_parse_from(["goforge", "templates", "--verbose", "--no-color"]).unwrap();
        assert!(args.verbose);
        assert!(args.no_color);
        assert!(matches!(args.command, Commands::Templates));
    }
}
