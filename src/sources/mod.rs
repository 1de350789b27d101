pub mod capture;
pub mod document;

pub use capture::{capture_result_items, BlockParser, CapturedBlock};
pub use document::{DocumentSource, PageBuffer, TextDocumentSource};
