// ABOUTME: Main application orchestration for the templatemap CLI
// ABOUTME: Coordinates argument parsing, logging setup, and command execution

use anyhow::{Context, Result};
use minijinja::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::loader::Composer;

use super::{Args, Commands};

#[derive(Default)]
pub struct App;

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Initialize logging based on flags
    pub fn init_logging(&self, verbose: bool, no_color: bool) {
        let log_level = if verbose { "debug" } else { "info" };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // Logs go to stderr so rendered output on stdout stays clean.
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(!no_color)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();

        debug!("Logging initialized with level: {}", log_level);
    }

    /// Run the application with parsed arguments
    pub fn run(&self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color);
        debug!("Starting templatemap v{}", crate::VERSION);

        match args.command {
            Commands::List { dir } => {
                let map = Composer::new().with_builtin_functions().load_dir(&dir)?;
                let mut names: Vec<&str> = map.names().collect();
                names.sort_unstable();
                for name in names {
                    println!("{name}");
                }
                Ok(())
            }
            Commands::Render {
                dir,
                name,
                data,
                vars,
                options,
            } => {
                let mut composer = Composer::new()
                    .with_builtin_functions()
                    .with_options(options);
                for (key, value) in Args::parse_variables(&vars)? {
                    composer = composer.with_function(key, Value::from(value));
                }

                let map = composer.load_dir(&dir)?;
                let data = match data {
                    Some(raw) => {
                        let json: serde_json::Value =
                            serde_json::from_str(&raw).context("invalid --data JSON")?;
                        Value::from_serialize(&json)
                    }
                    None => Value::UNDEFINED,
                };

                let rendered = map.render(&name, data)?;
                print!("{rendered}");
                Ok(())
            }
            Commands::Check { dir, options } => {
                let map = Composer::new()
                    .with_builtin_functions()
                    .with_options(options)
                    .load_dir(&dir)?;
                info!(templates = map.len(), "template tree OK");
                println!("loaded {} template(s)", map.len());
                Ok(())
            }
        }
    }
}
