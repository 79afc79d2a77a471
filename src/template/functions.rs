// ABOUTME: Ready-made template functions for the loader's function table
// ABOUTME: Implements hostname, timestamp, uuid, environment variable, and base64 helpers

use std::collections::HashMap;
use std::env;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use minijinja::{Error, ErrorKind, Value};
use uuid::Uuid;

/// The built-in function set, opt-in via `Composer::with_builtin_functions`.
pub fn builtins() -> HashMap<String, Value> {
    let mut functions = HashMap::new();
    functions.insert("hostname".to_string(), Value::from_function(hostname));
    functions.insert("timestamp".to_string(), Value::from_function(timestamp));
    functions.insert("uuid".to_string(), Value::from_function(new_uuid));
    functions.insert("env_var".to_string(), Value::from_function(env_var));
    functions.insert("b64encode".to_string(), Value::from_function(b64encode));
    functions
}

/// Returns the system hostname
fn hostname() -> Result<String, Error> {
    let name = hostname::get().map_err(|e| {
        Error::new(ErrorKind::InvalidOperation, "failed to resolve hostname").with_source(e)
    })?;
    Ok(name.to_string_lossy().into_owned())
}

/// Formats the current UTC time with an optional format string
fn timestamp(format: Option<String>) -> String {
    let format = format.unwrap_or_else(|| "%Y-%m-%d %H:%M:%S".to_string());
    Utc::now().format(&format).to_string()
}

/// Generates a new UUID v4
fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Gets an environment variable value with an optional default
fn env_var(name: String, default: Option<String>) -> String {
    env::var(&name).unwrap_or_else(|_| default.unwrap_or_default())
}

/// Base64-encodes a string
fn b64encode(input: String) -> String {
    BASE64.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{CompiledTemplate, EngineConfig};

    fn config_with_builtins() -> EngineConfig {
        EngineConfig {
            functions: builtins(),
            ..Default::default()
        }
    }

    #[test]
    fn test_builtins_are_registered() {
        let functions = builtins();
        for name in ["hostname", "timestamp", "uuid", "env_var", "b64encode"] {
            assert!(functions.contains_key(name), "missing builtin: {name}");
        }
    }

    #[test]
    fn test_b64encode() {
        let config = config_with_builtins();
        let tmpl =
            CompiledTemplate::compile(None, "t.tmpl", "{{ b64encode(\"hello\") }}", &config)
                .unwrap();
        assert_eq!(tmpl.render(()).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_env_var_default() {
        let config = config_with_builtins();
        let tmpl = CompiledTemplate::compile(
            None,
            "t.tmpl",
            "{{ env_var(\"TEMPLATEMAP_UNSET_VAR\", \"fallback\") }}",
            &config,
        )
        .unwrap();
        assert_eq!(tmpl.render(()).unwrap(), "fallback");
    }

    #[test]
    fn test_timestamp_format() {
        let config = config_with_builtins();
        let tmpl =
            CompiledTemplate::compile(None, "t.tmpl", "{{ timestamp(\"%Y\") }}", &config).unwrap();

        let year: i32 = tmpl.render(()).unwrap().parse().unwrap();
        assert!(year >= 2024);
    }

    #[test]
    fn test_uuid_shape() {
        let config = config_with_builtins();
        let tmpl = CompiledTemplate::compile(None, "t.tmpl", "{{ uuid() }}", &config).unwrap();

        let rendered = tmpl.render(()).unwrap();
        assert_eq!(rendered.len(), 36);
        assert_eq!(rendered.matches('-').count(), 4);
    }
}
