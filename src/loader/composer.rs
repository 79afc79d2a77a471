// ABOUTME: Recursive template composer
// ABOUTME: Walks a template source depth-first, composing per-directory base templates

use std::collections::HashMap;
use std::io;
use std::path::Path;

use minijinja::Value;
use tracing::{debug, info};

use super::error::{LoaderError, Result};
use super::map::TemplateMap;
use super::source::{DirSource, TemplateSource};
use crate::template::{functions, CompiledTemplate, EngineConfig};

/// Extension shared by leaf templates and the reserved base file.
pub const TEMPLATE_EXT: &str = ".tmpl";

/// Reserved per-directory base filename. Never becomes a map entry itself.
pub const BASE_FILE: &str = "_base.tmpl";

/// Loads a template tree into a [`TemplateMap`].
///
/// Each directory may carry a `_base.tmpl` file; it is compiled as a child of
/// the enclosing directory's base and becomes the parent of every `.tmpl`
/// file at or below that level. Leaf templates are keyed by their slash-joined
/// path relative to the tree root.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: EngineConfig,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one global value or function to every compiled template.
    pub fn with_function(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.functions.insert(name.into(), value.into());
        self
    }

    /// Merge a whole function table.
    pub fn with_functions(mut self, functions: HashMap<String, Value>) -> Self {
        self.config.functions.extend(functions);
        self
    }

    /// Add the ready-made function set from [`crate::template::functions`].
    pub fn with_builtin_functions(self) -> Self {
        self.with_functions(functions::builtins())
    }

    /// Add one engine option string.
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.config.options.push(option.into());
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = String>) -> Self {
        self.config.options.extend(options);
        self
    }

    /// Load every eligible template under `source` into a fresh map.
    ///
    /// Fail-fast: the first listing, read, or parse error aborts the load and
    /// no partial map is returned. A missing `_base.tmpl` is not an error.
    pub fn load(&self, source: &dyn TemplateSource) -> Result<TemplateMap> {
        let mut map = TemplateMap::new();
        self.load_level(source, &mut map, None, "", "")?;
        info!(templates = map.len(), "template tree loaded");
        Ok(map)
    }

    /// Load from a filesystem directory.
    pub fn load_dir(&self, path: impl AsRef<Path>) -> Result<TemplateMap> {
        self.load(&DirSource::new(path.as_ref()))
    }

    fn load_level(
        &self,
        source: &dyn TemplateSource,
        map: &mut TemplateMap,
        base: Option<&CompiledTemplate>,
        path: &str,
        rel: &str,
    ) -> Result<()> {
        let base_path = join(path, BASE_FILE);
        let base_name = format!("{rel}{BASE_FILE}");

        // A base file here derives from the incoming base; its absence passes
        // the incoming base through unchanged.
        let composed = match source.read(&base_path) {
            Ok(content) => {
                debug!(base = %base_name, "composing directory base");
                Some(CompiledTemplate::compile(
                    base,
                    &base_name,
                    &content,
                    &self.config,
                )?)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(LoaderError::TreeRead {
                    path: base_path,
                    source: e,
                })
            }
        };
        let base = composed.as_ref().or(base);

        let entries = source.list(path).map_err(|e| LoaderError::TreeRead {
            path: path.to_owned(),
            source: e,
        })?;

        for entry in entries {
            let entry_path = join(path, &entry.name);
            let entry_name = format!("{rel}{}", entry.name);

            if entry.is_dir() {
                self.load_level(source, map, base, &entry_path, &format!("{entry_name}/"))?;
                continue;
            }

            if !entry.name.ends_with(TEMPLATE_EXT) || entry.name == BASE_FILE {
                continue;
            }

            let content = source.read(&entry_path).map_err(|e| LoaderError::TreeRead {
                path: entry_path.clone(),
                source: e,
            })?;
            // Every leaf clones the composed base; the live base instance is
            // never handed out.
            let template = CompiledTemplate::compile(base, &entry_name, &content, &self.config)?;
            debug!(template = %entry_name, "compiled template");
            map.insert(entry_name, template);
        }

        Ok(())
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_owned()
    } else {
        format!("{path}/{name}")
    }
}
