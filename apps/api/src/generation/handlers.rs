//! Axum route handlers for generating and downloading portfolio PDFs.

use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Form,
};
use bytes::Bytes;
use tracing::info;

use crate::document::{assemble, render, PageConfig};
use crate::errors::AppError;
use crate::profile::{ProfileForm, ProfileRecord};
use crate::routes::pages::confirmation_page;
use crate::state::AppState;
use crate::storage::BlobStore;

/// Renders `record` and stores it under its sanitized file name.
///
/// Returns the file name. An existing file with the same name is overwritten.
pub async fn generate_document(
    store: &dyn BlobStore,
    config: &PageConfig,
    record: &ProfileRecord,
) -> Result<String, AppError> {
    let file_name = record.file_name();
    let blocks = assemble(record);
    let title = record.display_name().to_string();
    let cfg = config.clone();

    // CPU-bound layout + serialization; keep it off the async executor.
    let pdf = tokio::task::spawn_blocking(move || render(&blocks, &cfg, &title))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    let size = pdf.len();
    store.write(&file_name, Bytes::from(pdf)).await?;
    info!(file = %file_name, bytes = size, "Generated portfolio PDF");

    Ok(file_name)
}

/// POST /generate
///
/// Normalizes the form, writes the PDF, and returns the confirmation page.
/// No input is ever rejected; empty fields become placeholders and a
/// repeated field keeps its first value.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let form = ProfileForm::from_pairs(pairs);
    let record = ProfileRecord::from_form(&form);
    let file_name = generate_document(state.store.as_ref(), &state.page_config, &record).await?;
    Ok(Html(confirmation_page(&record, &file_name)))
}

/// GET /download/:filename
///
/// Serves a previously generated file as an attachment, or 404 "File not found.".
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pdf = state
        .store
        .read(&filename)
        .await?
        .ok_or_else(|| AppError::NotFound(filename.clone()))?;

    info!(file = %filename, bytes = pdf.len(), "Serving portfolio PDF");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (header::CONTENT_DISPOSITION, content_disposition(&filename)),
    ];
    Ok((headers, pdf))
}

/// `attachment` disposition for `filename`.
///
/// Non-ASCII names get an ASCII-only `filename` fallback plus an RFC 5987
/// `filename*` parameter carrying the UTF-8 name.
fn content_disposition(filename: &str) -> String {
    if filename.is_ascii() {
        return format!("attachment; filename=\"{filename}\"");
    }
    let fallback: String = filename.chars().filter(char::is_ascii).collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::default_page_config;
    use crate::storage::MemoryBlobStore;

    #[test]
    fn test_content_disposition_ascii_name() {
        assert_eq!(
            content_disposition("Ada.pdf"),
            "attachment; filename=\"Ada.pdf\""
        );
    }

    #[test]
    fn test_content_disposition_unicode_name() {
        assert_eq!(
            content_disposition("Jos\u{e9}_M\u{fc}ller.pdf"),
            "attachment; filename=\"Jos_Mller.pdf\"; filename*=UTF-8''Jos%C3%A9_M%C3%BCller.pdf"
        );
    }

    #[tokio::test]
    async fn test_generate_document_writes_under_sanitized_name() {
        let store = MemoryBlobStore::new();
        let record = ProfileRecord {
            name: "  Jane Doe!! ".trim().to_string(),
            ..Default::default()
        };
        let name = generate_document(&store, &default_page_config(), &record)
            .await
            .unwrap();
        assert_eq!(name, "Jane_Doe.pdf");

        let bytes = store.read("Jane_Doe.pdf").await.unwrap().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_generate_twice_overwrites_with_identical_bytes() {
        let store = MemoryBlobStore::new();
        let config = default_page_config();
        let record = ProfileRecord {
            name: "Ada Lovelace".to_string(),
            skills: vec!["Analysis".to_string()],
            ..Default::default()
        };

        generate_document(&store, &config, &record).await.unwrap();
        let first = store.read("Ada_Lovelace.pdf").await.unwrap().unwrap();
        generate_document(&store, &config, &record).await.unwrap();
        let second = store.read("Ada_Lovelace.pdf").await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }
}
