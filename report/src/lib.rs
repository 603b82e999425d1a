//! Renders the Moon-Earth-Sun simulation report and writes it to disk.

mod document;
mod emit;

pub use document::render;
pub use emit::{OUTPUT_FILENAME, write_document};
