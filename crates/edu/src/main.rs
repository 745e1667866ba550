//! EduGenius CLI - study portal for school students.
//!
//! Provides commands for:
//! - `classes`, `subjects`, `topics`: browse the curriculum
//! - `render`: render Markdown to an HTML fragment
//! - `generate`: generate notes, past questions, a summary or a quiz
//! - `resources`: list, view, upload, delete and export topic resources

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use edu_curriculum::Curriculum;
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, RenderArgs, ResourcesCommand, SubjectsArgs, TopicsArgs};
use output::Output;

/// EduGenius - AI study portal.
#[derive(Parser)]
#[command(name = "edu", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover edu.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List class levels.
    Classes,
    /// List subjects for a class.
    Subjects(SubjectsArgs),
    /// List topics for a subject.
    Topics(TopicsArgs),
    /// Render Markdown to HTML.
    Render(RenderArgs),
    /// Generate study material for a topic.
    Generate(GenerateArgs),
    /// Topic resource commands.
    #[command(subcommand)]
    Resources(ResourcesCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let curriculum = Curriculum::builtin();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Classes => {
            commands::browse::list_classes(&curriculum);
            Ok(())
        }
        Commands::Subjects(args) => args.execute(&curriculum),
        Commands::Topics(args) => args.execute(&curriculum),
        Commands::Render(args) => args.execute(config_path),
        Commands::Generate(args) => args.execute(config_path),
        Commands::Resources(cmd) => cmd.execute(config_path),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "edu",
            "generate",
            "Class 10",
            "math",
            "real-numbers",
            "PYQ",
            "--html",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_content_type() {
        let result = Cli::try_parse_from(["edu", "generate", "Class 10", "math", "t", "essay"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_add_requires_content_or_file() {
        let result = Cli::try_parse_from([
            "edu",
            "resources",
            "add",
            "Class 10",
            "math",
            "real-numbers",
            "--title",
            "Sheet",
            "--category",
            "notes",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_add_file_without_title() {
        let cli = Cli::try_parse_from([
            "edu",
            "resources",
            "add",
            "Class 10",
            "math",
            "real-numbers",
            "--category",
            "pdf",
            "--file",
            "paper.pdf",
            "--admin",
        ]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_add_content_requires_title() {
        let result = Cli::try_parse_from([
            "edu",
            "resources",
            "add",
            "Class 10",
            "math",
            "real-numbers",
            "--category",
            "link",
            "--content",
            "https://ncert.nic.in",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["edu", "classes", "--verbose", "-c", "edu.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("edu.toml")));
    }
}
