//! Download payloads for resources and generated content.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::resource::{ResourceCategory, UploadedResource};

/// A file ready to be written or offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    /// Suggested file name, including extension.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Error decoding an embedded file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Content is not a `data:<mime>;base64,<payload>` URI.
    #[error("resource '{0}' does not contain a base64 data URI")]
    NotDataUri(String),

    /// The base64 payload failed to decode.
    #[error("invalid base64 payload in resource '{id}'")]
    Base64 {
        /// Resource id.
        id: String,
        /// Decoder error.
        #[source]
        source: base64::DecodeError,
    },
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
///
/// # Examples
///
/// ```
/// use edu_storage::safe_file_stem;
///
/// assert_eq!(safe_file_stem("Real Numbers: Part 1"), "Real_Numbers__Part_1");
/// ```
pub fn safe_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Build the download for a stored resource.
///
/// Markdown categories export as `.md`, links and videos as a `.url` text
/// file, PDFs and images decode their data URI. The file stem is the
/// lowercased [`safe_file_stem`] of the title.
///
/// # Errors
///
/// Returns [`ExportError`] if a PDF or image does not hold a valid base64
/// data URI.
pub fn export_resource(resource: &UploadedResource) -> Result<Export, ExportError> {
    let stem = safe_file_stem(&resource.title).to_lowercase();

    let (extension, mime_type, bytes) = match resource.category {
        ResourceCategory::Notes | ResourceCategory::Pyq => (
            "md".to_owned(),
            "text/markdown".to_owned(),
            resource.content.as_bytes().to_vec(),
        ),
        ResourceCategory::Link | ResourceCategory::Video => (
            "url".to_owned(),
            "text/plain".to_owned(),
            resource.content.as_bytes().to_vec(),
        ),
        ResourceCategory::Pdf => (
            "pdf".to_owned(),
            "application/pdf".to_owned(),
            decode_data_uri(resource)?.1,
        ),
        ResourceCategory::Image => {
            let (mime, bytes) = decode_data_uri(resource)?;
            let extension = mime
                .strip_prefix("image/")
                .filter(|ext| {
                    !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                })
                .unwrap_or("png")
                .to_owned();
            let mime_type = format!("image/{extension}");
            (extension, mime_type, bytes)
        }
    };

    Ok(Export {
        file_name: format!("{stem}.{extension}"),
        mime_type,
        bytes,
    })
}

/// Build the download for generated Markdown.
///
/// The file is named `{topic}_{label}_generated.md` where `topic` is the
/// [`safe_file_stem`] of the topic name (case kept) and falls back to
/// `study_material` when empty.
pub fn export_generated(topic_name: &str, label: &str, markdown: &str) -> Export {
    let topic = if topic_name.is_empty() {
        "study_material".to_owned()
    } else {
        safe_file_stem(topic_name)
    };

    Export {
        file_name: format!("{topic}_{label}_generated.md"),
        mime_type: "text/markdown".to_owned(),
        bytes: markdown.as_bytes().to_vec(),
    }
}

/// Encode file bytes as a `data:<mime>;base64,<payload>` URI.
///
/// This is the form PDF and image uploads are stored in.
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Split a `data:<mime>;base64,<payload>` URI and decode the payload.
fn decode_data_uri(resource: &UploadedResource) -> Result<(String, Vec<u8>), ExportError> {
    let not_data_uri = || ExportError::NotDataUri(resource.id.clone());

    let rest = resource.content.strip_prefix("data:").ok_or_else(not_data_uri)?;
    let (header, payload) = rest.split_once(',').ok_or_else(not_data_uri)?;
    let mime = header.strip_suffix(";base64").ok_or_else(not_data_uri)?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|source| ExportError::Base64 {
            id: resource.id.clone(),
            source,
        })?;

    Ok((mime.to_owned(), bytes))
}
