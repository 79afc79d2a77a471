// ABOUTME: The finished name-to-template mapping produced by a load
// ABOUTME: Exposes exact-key lookup and convenience rendering over compiled templates

use std::collections::HashMap;

use serde::Serialize;

use super::error::{LoaderError, Result};
use crate::template::CompiledTemplate;

/// Map from slash-joined relative path to compiled template.
///
/// Keys are exact; there is no prefix or partial matching, and entries are
/// never re-validated after a load. With a well-formed tree provider keys are
/// unique; a provider that yields duplicate paths gets last-write-wins, which
/// callers must treat as undefined.
#[derive(Debug, Clone, Default)]
pub struct TemplateMap {
    templates: HashMap<String, CompiledTemplate>,
}

impl TemplateMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, template: CompiledTemplate) {
        self.templates.insert(name, template);
    }

    /// Look up a template by its exact relative-path key.
    pub fn get(&self, name: &str) -> Option<&CompiledTemplate> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over the map's keys. Order is unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledTemplate)> {
        self.templates.iter().map(|(name, tmpl)| (name.as_str(), tmpl))
    }

    /// Render a template by name, failing for unknown keys.
    pub fn render<S: Serialize>(&self, name: &str, data: S) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| LoaderError::NotFound(name.to_owned()))?;
        Ok(template.render(data)?)
    }
}
