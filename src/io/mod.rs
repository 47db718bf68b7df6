//! I/O modules for reading import files and writing exports.

pub mod file_loader;
pub mod async_loader;
pub mod export_writer;

// Re-export commonly used types
pub use file_loader::LoadingState;
pub use async_loader::{AsyncLoader, LoadResult};
pub use export_writer::write_export;
