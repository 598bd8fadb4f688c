//! Schema validation helpers for Paperscope JSON5 configuration.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Validate a single config layer against the schema.
pub(super) fn validate_layer_schema(value: &Value, layer: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, "")?;
    ensure_allowed_keys(
        map,
        &["$schema", "credentials", "collaborators", "tools"],
        layer,
        "",
    )?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, layer, "$schema")?;
    }
    if let Some(value) = map.get("credentials") {
        validate_credentials(value, layer, "credentials")?;
    }
    if let Some(value) = map.get("collaborators") {
        validate_collaborators(value, layer, "collaborators")?;
    }
    if let Some(value) = map.get("tools") {
        validate_tools(value, layer, "tools")?;
    }

    Ok(())
}

/// Validate the "credentials" block.
fn validate_credentials(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    let keys = ["paper_search_env", "llm_env", "model_hub_env"];
    ensure_allowed_keys(map, &keys, layer, path)?;
    for key in keys {
        if let Some(value) = map.get(key) {
            expect_string(value, layer, &join_path(path, key))?;
        }
    }
    Ok(())
}

/// Validate the "collaborators" block.
fn validate_collaborators(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    let loaders = ["rich_loader", "plain_loader", "minimal_loader"];
    ensure_allowed_keys(
        map,
        &[
            "rich_loader",
            "plain_loader",
            "minimal_loader",
            "recommender",
            "code_analyzer",
        ],
        layer,
        path,
    )?;
    for key in loaders {
        if let Some(value) = map.get(key) {
            validate_paper_loader(value, layer, &join_path(path, key))?;
        }
    }
    if let Some(value) = map.get("recommender") {
        let recommender_path = join_path(path, "recommender");
        let recommender = expect_object(value, layer, &recommender_path)?;
        ensure_allowed_keys(recommender, &["threshold"], layer, &recommender_path)?;
        if let Some(value) = recommender.get("threshold") {
            expect_f64(value, layer, &join_path(&recommender_path, "threshold"))?;
        }
    }
    if let Some(value) = map.get("code_analyzer") {
        let analyzer_path = join_path(path, "code_analyzer");
        let analyzer = expect_object(value, layer, &analyzer_path)?;
        ensure_allowed_keys(analyzer, &["cache_dir"], layer, &analyzer_path)?;
        if let Some(value) = analyzer.get("cache_dir") {
            expect_string(value, layer, &join_path(&analyzer_path, "cache_dir"))?;
        }
    }
    Ok(())
}

/// Validate a single paper loader block; `null` clears optional values.
fn validate_paper_loader(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["figures", "cache_dir", "page_limit"], layer, path)?;
    if let Some(value) = map.get("figures") {
        expect_bool(value, layer, &join_path(path, "figures"))?;
    }
    if let Some(value) = map.get("cache_dir").filter(|value| !value.is_null()) {
        expect_string(value, layer, &join_path(path, "cache_dir"))?;
    }
    if let Some(value) = map.get("page_limit").filter(|value| !value.is_null()) {
        expect_u64(value, layer, &join_path(path, "page_limit"))?;
    }
    Ok(())
}

/// Validate the "tools" block.
fn validate_tools(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, layer, path)?;
    ensure_allowed_keys(map, &["loadpaper"], layer, path)?;
    if let Some(value) = map.get("loadpaper") {
        validate_loadpaper_variant(value, layer, &join_path(path, "loadpaper"))?;
    }
    Ok(())
}

/// Validate the selected `loadpaper` variant name.
fn validate_loadpaper_variant(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    let Some(variant) = value.as_str() else {
        return Err(invalid_field(layer, path, "expected string"));
    };
    if matches!(variant, "rich" | "plain" | "minimal") {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "invalid loadpaper variant"))
    }
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    layer: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(layer, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected string"))
    }
}

/// Expect a JSON boolean or return a typed error.
fn expect_bool(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if matches!(value, Value::Bool(_)) {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected bool"))
    }
}

/// Expect a non-negative JSON integer or return a typed error.
fn expect_u64(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.is_u64() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected non-negative integer"))
    }
}

/// Expect a JSON number or return a typed error.
fn expect_f64(value: &Value, layer: &str, path: &str) -> Result<(), ConfigError> {
    if value.is_f64() || value.is_u64() || value.is_i64() {
        Ok(())
    } else {
        Err(invalid_field(layer, path, "expected number"))
    }
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    layer: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(layer, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(layer: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{layer}:{normalized_path}"),
        message: message.to_string(),
    }
}
