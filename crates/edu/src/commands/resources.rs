//! `edu resources` command implementations.
//!
//! Listing, viewing and exporting are open to everyone. Adding and deleting
//! are instructor actions and require `--admin`.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use edu_config::{CliSettings, Config};
use edu_curriculum::{Curriculum, Navigator};
use edu_storage::{
    JsonFileStore, MemoryStore, NewResource, ResourceCategory, ResourceStore, TopicKey,
    encode_data_uri, export_resource, seed_resources,
};

use crate::error::CliError;
use crate::output::Output;

/// Resource management commands.
#[derive(Subcommand)]
pub(crate) enum ResourcesCommand {
    /// List resources attached to a topic.
    List(ListArgs),
    /// Print a resource.
    Show(ShowArgs),
    /// Upload a resource (requires --admin).
    Add(AddArgs),
    /// Delete a resource (requires --admin).
    Delete(DeleteArgs),
    /// Save a resource as a file.
    Export(ExportArgs),
}

impl ResourcesCommand {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(config_path),
            Self::Show(args) => args.execute(config_path),
            Self::Add(args) => args.execute(config_path),
            Self::Delete(args) => args.execute(config_path),
            Self::Export(args) => args.execute(config_path),
        }
    }
}

/// Store location options shared by all resource commands.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Data directory (overrides config).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

impl StoreArgs {
    /// Load config and open the configured store.
    fn open(&self, config_path: Option<&Path>) -> Result<(Config, Box<dyn ResourceStore>), CliError> {
        let cli_settings = CliSettings {
            data_dir: self.data_dir.clone(),
            ..Default::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        let store: Box<dyn ResourceStore> = if config.storage_resolved.persist {
            Box::new(JsonFileStore::open(config.storage_resolved.resources_path())?)
        } else {
            Box::new(MemoryStore::with_resources(seed_resources()))
        };
        Ok((config, store))
    }
}

/// Class, subject and topic ids identifying where resources are attached.
#[derive(Args)]
pub(crate) struct TopicArgs {
    /// Class level name (e.g., "Class 10").
    class: String,

    /// Subject id (e.g., "math").
    subject: String,

    /// Topic id (e.g., "real-numbers").
    topic: String,
}

impl TopicArgs {
    /// Validate against the curriculum and build the store key.
    fn key(&self, curriculum: &Curriculum) -> Result<TopicKey, CliError> {
        let mut navigator = Navigator::new(curriculum);
        navigator.select_class(&self.class)?;
        navigator.select_subject(&self.subject)?;
        navigator.select_topic(&self.topic)?;
        Ok(TopicKey::new(&self.class, &self.subject, &self.topic))
    }
}

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    topic: TopicArgs,

    #[command(flatten)]
    store: StoreArgs,
}

impl ListArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let key = self.topic.key(&Curriculum::builtin())?;
        let (_, store) = self.store.open(config_path)?;

        let resources = store.list_for_topic(&key)?;
        if resources.is_empty() {
            output.info("No resources for this topic.");
            return Ok(());
        }

        output.highlight(&format!("Resources ({}):", resources.len()));
        for resource in &resources {
            output.row(
                &resource.id,
                &format!("[{}] {}", resource.category, resource.title),
            );
        }
        Ok(())
    }
}

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Resource id.
    id: String,

    /// Render Markdown resources to HTML.
    #[arg(long)]
    html: bool,

    #[command(flatten)]
    store: StoreArgs,
}

impl ShowArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let (config, store) = self.store.open(config_path)?;
        let resource = store.get(&self.id)?;

        output.highlight(&format!("{} [{}]", resource.title, resource.category));
        match resource.category {
            category if category.is_markdown() => {
                if self.html {
                    output.document(&super::renderer(&config).render_wrapped(&resource.content));
                } else {
                    output.document(&resource.content);
                }
            }
            ResourceCategory::Link | ResourceCategory::Video => output.document(&resource.content),
            _ => output.info(&format!(
                "Binary resource. Use `edu resources export {}` to save it.",
                resource.id
            )),
        }
        Ok(())
    }
}

/// Arguments for the add command.
#[derive(Args)]
pub(crate) struct AddArgs {
    #[command(flatten)]
    topic: TopicArgs,

    /// Display title (defaults to the file name without extension).
    #[arg(long, required_unless_present = "file")]
    title: Option<String>,

    /// Category: notes, pyq, video, link, pdf or image.
    #[arg(long)]
    category: ResourceCategory,

    /// Inline content: Markdown text or a URL.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    content: Option<String>,

    /// Read content from a file. PDFs and images are stored as data URIs.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Confirm instructor mode.
    #[arg(long)]
    admin: bool,

    #[command(flatten)]
    store: StoreArgs,
}

impl AddArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        require_admin(self.admin)?;

        let key = self.topic.key(&Curriculum::builtin())?;
        let title = upload_title(self.title.as_deref(), self.file.as_deref())
            .ok_or_else(|| CliError::Validation("--title is required".to_owned()))?;
        let content = match (&self.content, &self.file) {
            (Some(content), _) => content.clone(),
            (None, Some(path)) => read_upload(self.category, path)?,
            (None, None) => {
                return Err(CliError::Validation(
                    "either --content or --file is required".to_owned(),
                ));
            }
        };

        let (_, store) = self.store.open(config_path)?;
        let added = store.add(NewResource::new(&key, title, self.category, content))?;
        output.success(&format!("Added '{}' ({})", added.title, added.id));
        Ok(())
    }
}

/// Arguments for the delete command.
#[derive(Args)]
pub(crate) struct DeleteArgs {
    /// Resource id.
    id: String,

    /// Confirm instructor mode.
    #[arg(long)]
    admin: bool,

    #[command(flatten)]
    store: StoreArgs,
}

impl DeleteArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        require_admin(self.admin)?;

        let (_, store) = self.store.open(config_path)?;
        let removed = store.delete(&self.id)?;
        output.success(&format!("Deleted '{}'", removed.title));
        Ok(())
    }
}

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Resource id.
    id: String,

    /// Directory to write the file into.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    #[command(flatten)]
    store: StoreArgs,
}

impl ExportArgs {
    fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();
        let (_, store) = self.store.open(config_path)?;
        let resource = store.get(&self.id)?;

        let export = export_resource(&resource)?;
        let path = super::write_export(&self.output, &export)?;
        output.success(&format!("Saved {} ({})", path.display(), export.mime_type));
        Ok(())
    }
}

/// The given title, or the uploaded file's name without its extension.
fn upload_title(title: Option<&str>, file: Option<&Path>) -> Option<String> {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => Some(title.to_owned()),
        _ => file
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .map(str::to_owned),
    }
}

fn require_admin(admin: bool) -> Result<(), CliError> {
    if admin {
        Ok(())
    } else {
        Err(CliError::Validation(
            "instructor mode required: pass --admin to modify resources".to_owned(),
        ))
    }
}

/// Read an upload from disk in the form its category is stored in.
fn read_upload(category: ResourceCategory, path: &Path) -> Result<String, CliError> {
    match category {
        ResourceCategory::Pdf => Ok(encode_data_uri("application/pdf", &std::fs::read(path)?)),
        ResourceCategory::Image => {
            let mime = image_mime_type(path).ok_or_else(|| {
                CliError::Validation(format!("unsupported image file: {}", path.display()))
            })?;
            Ok(encode_data_uri(mime, &std::fs::read(path)?))
        }
        _ => Ok(std::fs::read_to_string(path)?),
    }
}

fn image_mime_type(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
