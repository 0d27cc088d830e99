//! Antline restyling and fragmentation

/// Per-overlay seeded random stream
pub mod random;
/// Run-length generation of broken and intact spans
pub mod runs;
/// Restyling of single overlays and whole documents
pub mod segmenter;
