// ABOUTME: Error types for template engine operations
// ABOUTME: Defines parse, render, and option errors surfaced at the engine boundary

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to parse template '{name}'")]
    Parse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("unknown engine option: {0}")]
    UnknownOption(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
