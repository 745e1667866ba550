//! CLI command implementations.

pub(crate) mod browse;
pub(crate) mod generate;
pub(crate) mod render;
pub(crate) mod resources;

use std::path::{Path, PathBuf};

use edu_config::Config;
use edu_renderer::MarkdownRenderer;
use edu_storage::Export;

pub(crate) use browse::{SubjectsArgs, TopicsArgs};
pub(crate) use generate::GenerateArgs;
pub(crate) use render::RenderArgs;
pub(crate) use resources::ResourcesCommand;

use crate::error::CliError;

/// Renderer configured from `[render]`.
fn renderer(config: &Config) -> MarkdownRenderer {
    MarkdownRenderer::new().with_wrapper_class(config.render.wrapper_class.as_str())
}

/// Write an export into `dir`, creating it if needed. Returns the file path.
fn write_export(dir: &Path, export: &Export) -> Result<PathBuf, CliError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_export_creates_dir() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("downloads");
        let export = edu_storage::export_generated("Real Numbers", "notes", "# Notes");

        let path = write_export(&dir, &export).unwrap();

        assert_eq!(path, dir.join("Real_Numbers_notes_generated.md"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Notes");
    }

    #[test]
    fn test_renderer_uses_configured_class() {
        let config = Config::default();
        assert_eq!(
            renderer(&config).render_wrapped("# Hi"),
            r#"<div class="markdown-body"><h1>Hi</h1></div>"#
        );
    }
}
