// ABOUTME: CompiledTemplate and EngineConfig over minijinja environments
// ABOUTME: Implements fresh compilation, clone-based derivation, and rendering

use std::collections::HashMap;
use std::io::Write;

use minijinja::{Environment, UndefinedBehavior, Value};
use serde::Serialize;

use super::error::{Result, TemplateError};

/// Engine configuration for one load operation.
///
/// `functions` are global values added to every fresh environment; callables
/// are built with [`minijinja::Value::from_function`]. `options` are engine
/// option strings: `strict`, `lenient`, `chainable` select the behavior for
/// undefined variables, `trim_blocks`, `lstrip_blocks`, and
/// `keep_trailing_newline` control whitespace handling.
///
/// The configuration is immutable for the duration of a load and inherited by
/// every template derived from one it was applied to.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub functions: HashMap<String, Value>,
    pub options: Vec<String>,
}

/// A compiled, executable template.
///
/// Owns a minijinja environment holding the template's full base chain plus
/// its own parsed source, and the name it renders under. Once compiled it is
/// never mutated; templates later derived from it clone the environment, so
/// members of an inheritance family stay independent.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    env: Environment<'static>,
    name: String,
}

impl CompiledTemplate {
    /// Compile `source` under `name`, deriving from `base` when one exists.
    ///
    /// Derivation clones the base's environment, leaving the base untouched.
    /// When the source does not declare its own `{% extends %}` tag, one
    /// pointing at the base is injected; that is what makes block inheritance
    /// follow the directory chain without template authors naming their base.
    pub fn compile(
        base: Option<&CompiledTemplate>,
        name: &str,
        source: &str,
        config: &EngineConfig,
    ) -> Result<Self> {
        let mut env = match base {
            Some(parent) => parent.env.clone(),
            None => fresh_environment(config)?,
        };

        let source = match base {
            Some(parent) if !declares_extends(source) => {
                format!("{{% extends \"{}\" %}}{}", parent.name(), source)
            }
            _ => source.to_owned(),
        };

        env.add_template_owned(name.to_owned(), source)
            .map_err(|e| TemplateError::Parse {
                name: name.to_owned(),
                source: e,
            })?;

        Ok(Self {
            env,
            name: name.to_owned(),
        })
    }

    /// The name this template renders under; for loaded templates this is the
    /// slash-joined path relative to the tree root.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render to a string with the given data.
    pub fn render<S: Serialize>(&self, data: S) -> Result<String> {
        self.template()?
            .render(data)
            .map_err(|e| self.render_error(e))
    }

    /// Render into any writer.
    pub fn render_to_write<S: Serialize, W: Write>(&self, data: S, writer: W) -> Result<()> {
        self.template()?
            .render_to_write(data, writer)
            .map(|_| ())
            .map_err(|e| self.render_error(e))
    }

    fn template(&self) -> Result<minijinja::Template<'_, '_>> {
        self.env
            .get_template(&self.name)
            .map_err(|e| self.render_error(e))
    }

    fn render_error(&self, source: minijinja::Error) -> TemplateError {
        TemplateError::Render {
            name: self.name.clone(),
            source,
        }
    }
}

fn fresh_environment(config: &EngineConfig) -> Result<Environment<'static>> {
    let mut env = Environment::new();
    for option in &config.options {
        apply_option(&mut env, option)?;
    }
    for (name, value) in &config.functions {
        env.add_global(name.clone(), value.clone());
    }
    Ok(env)
}

fn apply_option(env: &mut Environment<'static>, option: &str) -> Result<()> {
    match option {
        "strict" => env.set_undefined_behavior(UndefinedBehavior::Strict),
        "lenient" => env.set_undefined_behavior(UndefinedBehavior::Lenient),
        "chainable" => env.set_undefined_behavior(UndefinedBehavior::Chainable),
        "trim_blocks" => env.set_trim_blocks(true),
        "lstrip_blocks" => env.set_lstrip_blocks(true),
        "keep_trailing_newline" => env.set_keep_trailing_newline(true),
        other => return Err(TemplateError::UnknownOption(other.to_owned())),
    }
    Ok(())
}

fn declares_extends(source: &str) -> bool {
    source.contains("{% extends") || source.contains("{%- extends")
}
