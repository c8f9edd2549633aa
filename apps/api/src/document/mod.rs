// Document assembly and rendering.
// Implements: profile -> block sequence, word-wrap + pagination, PDF serialization.
// Rendering is CPU-bound and synchronous; async callers must use tokio::task::spawn_blocking.

pub mod blocks;
pub mod font_metrics;
pub mod pdf;
pub mod styles;
pub mod typeset;

use std::io::Write;

use thiserror::Error;
use tracing::debug;

pub use blocks::{assemble, Block};
pub use styles::{default_page_config, PageConfig};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error while writing PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// Lays out `blocks` and streams the resulting PDF into `out`.
pub fn render_to<W: Write>(
    blocks: &[Block],
    config: &PageConfig,
    title: &str,
    out: &mut W,
) -> Result<(), RenderError> {
    let pages = typeset::typeset(blocks, config);
    debug!(blocks = blocks.len(), pages = pages.len(), "Typeset document");
    pdf::write_pdf(&pages, config, title, out)
}

/// Lays out `blocks` and returns the PDF as bytes.
pub fn render(blocks: &[Block], config: &PageConfig, title: &str) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    render_to(blocks, config, title, &mut bytes)?;
    Ok(bytes)
}
