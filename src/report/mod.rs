//! Report module - presenting and exporting IV scores

pub mod iv_export;
pub mod summary;

pub use iv_export::*;
pub use summary::*;
