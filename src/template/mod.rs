// ABOUTME: Template engine boundary for the templatemap loader
// ABOUTME: Wraps minijinja environments behind compile, derive, and render operations

pub mod engine;
pub mod error;
pub mod functions;

pub use engine::{CompiledTemplate, EngineConfig};
pub use error::{Result, TemplateError};
