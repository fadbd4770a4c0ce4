//! Config file upgrades: report keys missing from an older config file and
//! write them back with their default values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys introduced after the first release, with the comment written next
/// to them on migration.
const DOCUMENTED_KEYS: [(&str, &str); 2] = [
    (
        "reports_dir",
        "# reports_dir placeholders: {year} → 2024, {month} → Setembro",
    ),
    (
        "sheet_title_format",
        "# sheet_title_format uses chrono syntax, e.g. %d-%m or %d-%m-%Y",
    ),
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Keys of the current config format that `path` does not define.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;

    Ok(default_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. Returns the keys added;
/// the file is not rewritten when nothing is missing.
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in default_mapping()? {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(current))?;
    let mut content = String::new();

    for line in serialized.lines() {
        content.push_str(line);
        content.push('\n');

        for (key, doc) in DOCUMENTED_KEYS {
            if added.iter().any(|a| a == key) && line.starts_with(&format!("{key}:")) {
                content.push_str(doc);
                content.push('\n');
            }
        }
    }

    fs::write(path, content)?;
    Ok(added)
}
