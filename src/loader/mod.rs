// ABOUTME: Template map loader module
// ABOUTME: Exports the composer, template map, tree sources, and loader errors

pub mod composer;
pub mod error;
pub mod map;
pub mod source;

pub use composer::{Composer, BASE_FILE, TEMPLATE_EXT};
pub use error::{LoaderError, Result};
pub use map::TemplateMap;
pub use source::{DirSource, EntryKind, MemorySource, SourceEntry, TemplateSource};
