// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the templatemap CLI structure and subcommands

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "templatemap")]
#[command(about = "Load a directory tree of templates with per-directory base inheritance")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a template tree and list the map's keys
    List {
        #[arg(help = "Directory to load templates from")]
        dir: PathBuf,
    },

    /// Load a template tree and render one template to stdout
    Render {
        #[arg(help = "Directory to load templates from")]
        dir: PathBuf,

        #[arg(help = "Relative-path key of the template to render")]
        name: String,

        #[arg(long, help = "Render data as inline JSON")]
        data: Option<String>,

        #[arg(short = 'V', long = "var", help = "Template variables (key=value)")]
        vars: Vec<String>,

        #[arg(
            long = "option",
            help = "Engine option (strict, lenient, chainable, trim_blocks, ...)"
        )]
        options: Vec<String>,
    },

    /// Load a template tree and report whether every template parses
    Check {
        #[arg(help = "Directory to load templates from")]
        dir: PathBuf,

        #[arg(
            long = "option",
            help = "Engine option (strict, lenient, chainable, trim_blocks, ...)"
        )]
        options: Vec<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse key=value pairs into variable assignments.
    pub fn parse_variables(vars: &[String]) -> Result<Vec<(String, String)>> {
        let mut parsed = Vec::new();
        for var in vars {
            let (key, value) = var
                .split_once('=')
                .ok_or_else(|| anyhow!("Invalid variable format '{}', expected key=value", var))?;
            parsed.push((key.to_string(), value.to_string()));
        }
        Ok(parsed)
    }
}
