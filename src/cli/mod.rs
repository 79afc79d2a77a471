// ABOUTME: CLI module for the templatemap loader
// ABOUTME: Exports command line interface components and application logic

pub mod app;
pub mod args;

pub use app::App;
pub use args::{Args, Commands};
