//! `edu render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use edu_config::Config;
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (reads stdin when omitted).
    file: Option<PathBuf>,

    /// Wrap the fragment in a `<div>` with the configured class.
    #[arg(long)]
    wrap: bool,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(config_path, None)?;

        let markdown = match &self.file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let renderer = super::renderer(&config);
        let html = if self.wrap {
            renderer.render_wrapped(&markdown)
        } else {
            renderer.render(&markdown)
        };
        debug!(
            "Rendered {} bytes of Markdown into {} bytes of HTML",
            markdown.len(),
            html.len()
        );

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.document(&html),
        }
        Ok(())
    }
}
