//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod text_file;

pub use text_file::TextFileRepository;
