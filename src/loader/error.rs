// ABOUTME: Error types for template tree loading
// ABOUTME: Defines read failures with path context plus wrapped engine errors

use std::io;

use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read '{path}'")]
    TreeRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("template '{0}' not found in map")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
