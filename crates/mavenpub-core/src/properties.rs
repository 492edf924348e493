//! `.mavenpub.env` secrets file and `${env:VAR}` interpolation.

use std::collections::BTreeMap;
use std::path::Path;

use mavenpub_util::errors::PublishError;

/// Loads a `.mavenpub.env` file (shell-style `KEY=value` format).
///
/// `.mavenpub.env` holds repository credentials and other secrets that must
/// not live in `Mavenpub.toml`. A leading `export ` is ignored and values may
/// be wrapped in single or double quotes.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(PublishError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }
    Ok(map)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Interpolate `${env:VAR}` and `${env:VAR:-fallback}` references in a string.
///
/// Looks up values first from `env_overrides` (populated from
/// `.mavenpub.env`), then from the process environment. Unset variables
/// without a fallback become empty.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${env:") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let expr = &rest[start + 6..start + len];
        let (key, fallback) = match expr.split_once(":-") {
            Some((k, f)) => (k, Some(f)),
            None => (expr, None),
        };
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_default();
        result.push_str(&value);
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}
