//! Tests for layered configuration loading.

use super::*;
use crate::LoadPaperVariant;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write JSON5 contents to a path, creating parent directories if needed.
fn write_json5(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dir");
    }
    fs::write(path, contents).expect("write");
}

/// An empty config carries the collaborator defaults.
#[test]
fn parse_minimal_config() {
    let config = PaperscopeConfig::load_from_str("{}").expect("config");
    assert_eq!(config, PaperscopeConfig::default());

    let collaborators = &config.collaborators;
    assert!(collaborators.rich_loader.figures);
    assert_eq!(
        collaborators.rich_loader.cache_dir,
        Some(PathBuf::from("./papers_db"))
    );
    assert_eq!(collaborators.rich_loader.page_limit, Some(5));
    assert!(!collaborators.plain_loader.figures);
    assert_eq!(collaborators.plain_loader.page_limit, None);
    assert!(!collaborators.minimal_loader.figures);
    assert_eq!(collaborators.minimal_loader.page_limit, Some(9));
    assert_eq!(collaborators.recommender.threshold, 0.6);
    assert_eq!(
        collaborators.code_analyzer.cache_dir,
        PathBuf::from("./code_db")
    );
    assert_eq!(config.credentials.paper_search_env, "SEMANTIC_SCHOLAR_API_KEY");
    assert_eq!(config.credentials.llm_env, "OPENAI_API_KEY");
    assert_eq!(config.tools.loadpaper, LoadPaperVariant::Rich);
}

/// Partial loader blocks keep the remaining per-loader defaults.
#[test]
fn partial_loader_override_keeps_defaults() {
    let json5 = r#"{ collaborators: { rich_loader: { page_limit: 3 }, plain_loader: { page_limit: 12 } } }"#;
    let config = PaperscopeConfig::load_from_str(json5).expect("config");
    assert_eq!(config.collaborators.rich_loader.page_limit, Some(3));
    assert!(config.collaborators.rich_loader.figures);
    assert_eq!(
        config.collaborators.rich_loader.cache_dir,
        Some(PathBuf::from("./papers_db"))
    );
    assert_eq!(config.collaborators.plain_loader.page_limit, Some(12));
    assert!(!config.collaborators.plain_loader.figures);

    let config =
        PaperscopeConfig::load_from_str("{ collaborators: { plain_loader: { figures: true } } }")
            .expect("config");
    assert!(config.collaborators.plain_loader.figures);
    assert_eq!(config.collaborators.plain_loader.page_limit, None);
}

/// A null page limit means unlimited.
#[test]
fn null_page_limit_clears_default() {
    let json5 = r#"{ collaborators: { minimal_loader: { page_limit: null } } }"#;
    let config = PaperscopeConfig::load_from_str(json5).expect("config");
    assert_eq!(config.collaborators.minimal_loader.page_limit, None);
}

/// Reject unexpected top-level config keys.
#[test]
fn rejects_unknown_top_level_key() {
    let err = PaperscopeConfig::load_from_str("{ unexpected: true }").unwrap_err();
    assert!(format!("{err}").contains("unknown key"));
}

/// Reject unknown loadpaper variants.
#[test]
fn rejects_invalid_loadpaper_variant() {
    let err = PaperscopeConfig::load_from_str(r#"{ tools: { loadpaper: "huge" } }"#).unwrap_err();
    assert!(format!("{err}").contains("tools.loadpaper"));
}

/// Threshold must be within the unit interval.
#[test]
fn rejects_out_of_range_threshold() {
    let json5 = "{ collaborators: { recommender: { threshold: 1.5 } } }";
    let err = PaperscopeConfig::load_from_str(json5).unwrap_err();
    assert!(format!("{err}").contains("collaborators.recommender.threshold"));
}

/// A zero page limit is rejected; null is the way to ask for no limit.
#[test]
fn rejects_zero_page_limit() {
    let json5 = "{ collaborators: { rich_loader: { page_limit: 0 } } }";
    let err = PaperscopeConfig::load_from_str(json5).unwrap_err();
    assert!(format!("{err}").contains("rich_loader.page_limit"));
}

/// Later layers override earlier ones key by key.
#[test]
fn layered_config_applies_precedence() {
    let temp = TempDir::new().expect("tmp");
    let root = temp.path();
    let cwd = root.join("project");
    fs::create_dir_all(&cwd).expect("cwd");

    let user_config = root.join("home").join("paperscope.json5");
    write_json5(
        &user_config,
        r#"{ tools: { loadpaper: "plain" }, collaborators: { recommender: { threshold: 0.8 } } }"#,
    );
    write_json5(
        &cwd.join("paperscope.json5"),
        r#"{ tools: { loadpaper: "minimal" } }"#,
    );
    let runtime = root.join("runtime.json5");
    write_json5(
        &runtime,
        r#"{ credentials: { paper_search_env: "S2_KEY" } }"#,
    );

    let options = LayeredConfigOptions::new(&cwd)
        .with_user_config_path(Some(user_config.clone()))
        .with_runtime_path(&runtime);
    let layered = PaperscopeConfig::load_layered_with_options(options).expect("layered");

    assert_eq!(layered.config.tools.loadpaper, LoadPaperVariant::Minimal);
    assert_eq!(layered.config.collaborators.recommender.threshold, 0.8);
    assert_eq!(layered.config.credentials.paper_search_env, "S2_KEY");
    assert_eq!(layered.config.credentials.llm_env, "OPENAI_API_KEY");
    let sources = layered
        .layers
        .iter()
        .map(|layer| layer.source)
        .collect::<Vec<_>>();
    assert_eq!(
        sources,
        vec![
            ConfigLayerSource::User,
            ConfigLayerSource::Cwd,
            ConfigLayerSource::Runtime
        ]
    );
}

/// Missing optional layers are skipped without error.
#[test]
fn layered_config_skips_missing_layers() {
    let temp = TempDir::new().expect("tmp");
    let options = LayeredConfigOptions::new(temp.path())
        .with_user_config_path(Some(temp.path().join("absent.json5")));
    let layered = PaperscopeConfig::load_layered_with_options(options).expect("layered");
    assert!(layered.layers.is_empty());
    assert_eq!(layered.config, PaperscopeConfig::default());
}

/// Missing runtime layers are an error.
#[test]
fn layered_config_requires_runtime_layers() {
    let temp = TempDir::new().expect("tmp");
    let options = LayeredConfigOptions::new(temp.path())
        .with_user_config_path(None)
        .with_runtime_path(temp.path().join("missing.json5"));
    let err = PaperscopeConfig::load_layered_with_options(options).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed(_)));
}

/// The same file used as user and cwd layer is only applied once.
#[test]
fn layered_config_deduplicates_paths() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("paperscope.json5");
    write_json5(&path, r#"{ tools: { loadpaper: "plain" } }"#);
    let options = LayeredConfigOptions::new(temp.path()).with_user_config_path(Some(path));
    let layered = PaperscopeConfig::load_layered_with_options(options).expect("layered");
    assert_eq!(layered.layers.len(), 1);
    assert_eq!(layered.layers[0].source, ConfigLayerSource::User);
}
