// Document generation: form submission -> stored PDF, and download by name.
// Rendering runs inside tokio::task::spawn_blocking; storage goes through BlobStore.

pub mod handlers;
