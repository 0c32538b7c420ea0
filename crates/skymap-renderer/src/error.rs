use crate::section::SectionId;

/// Errors surfaced to producers of render sections.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("render thread has shut down, {0} dropped")]
    Disconnected(SectionId),
}
