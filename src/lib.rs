// ABOUTME: Main library module for the templatemap loader
// ABOUTME: Exports the composer, template engine boundary, and CLI modules

pub mod cli;
pub mod loader;
pub mod template;

// Re-export commonly used types
pub use loader::{
    Composer, DirSource, LoaderError, MemorySource, SourceEntry, TemplateMap, TemplateSource,
};
pub use template::{CompiledTemplate, EngineConfig, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
