//! `edu generate` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use edu_config::{CliSettings, Config, GenAiConfig};
use edu_curriculum::{Curriculum, NavigationView, Navigator};
use edu_genai::{ContentType, GeminiClient, GeminiConfig, StudyContentService, StudyRequest};
use edu_storage::export_generated;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Class level name (e.g., "Class 10").
    class: String,

    /// Subject id (e.g., "math").
    subject: String,

    /// Topic id (e.g., "real-numbers").
    topic: String,

    /// What to generate: notes, pyq, summary or quiz.
    content_type: ContentType,

    /// Print rendered HTML instead of Markdown.
    #[arg(long)]
    html: bool,

    /// Also save the Markdown into this directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Model name (overrides config).
    #[arg(long)]
    model: Option<String>,

    /// API key (overrides config and `GEMINI_API_KEY`).
    #[arg(long)]
    api_key: Option<String>,
}

impl GenerateArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        let curriculum = Curriculum::builtin();
        let request = self.resolve_request(&curriculum)?;

        let service = build_service(&config.genai);
        if !service.is_configured() {
            output.warning("No API key configured. Set GEMINI_API_KEY or genai.api_key in edu.toml.");
        }

        output.info(&format!(
            "Generating {} for {}...",
            self.content_type.title(),
            request.topic_name
        ));
        let markdown = service.generate(&request);

        if let Some(dir) = &self.output {
            let export = export_generated(&request.topic_name, self.content_type.as_str(), &markdown);
            let path = super::write_export(dir, &export)?;
            output.success(&format!("Saved {}", path.display()));
        }

        if self.html {
            output.document(&super::renderer(&config).render_wrapped(&markdown));
        } else {
            output.document(&markdown);
        }
        Ok(())
    }

    /// Look up display names for the selected topic.
    fn resolve_request(&self, curriculum: &Curriculum) -> Result<StudyRequest, CliError> {
        let mut navigator = Navigator::new(curriculum);
        navigator.select_class(&self.class)?;
        navigator.select_subject(&self.subject)?;
        navigator.select_topic(&self.topic)?;

        match navigator.view() {
            NavigationView::Topic {
                class,
                subject,
                topic,
            } => Ok(StudyRequest::new(
                class,
                subject.name.as_str(),
                topic.name.as_str(),
                self.content_type,
            )),
            _ => Err(CliError::Validation("no topic selected".to_owned())),
        }
    }
}

/// Service backed by Gemini when an API key is configured.
fn build_service(genai: &GenAiConfig) -> StudyContentService {
    match genai.api_key() {
        Some(api_key) => StudyContentService::new(GeminiClient::new(GeminiConfig {
            api_key: api_key.to_owned(),
            base_url: genai.base_url.clone(),
            model: genai.model.clone(),
            temperature: genai.temperature,
            timeout: genai.timeout(),
        })),
        None => StudyContentService::without_api_key(),
    }
}
