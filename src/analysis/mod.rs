//! Colour analysis shared by tile indexing and cell matching

/// Average colour and colour distance
pub mod color;
