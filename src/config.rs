use crate::error::{AgriskError, Result};
use crate::types::config::AgriskConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "agrisk.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".agrisk/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/agrisk/config.toml";

/// Loads global, `<root>/agrisk.toml`, `<root>/.agrisk/local.toml` and then
/// `explicit`, later layers winning. `None` when no layer exists.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<AgriskConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref(), explicit)
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<Option<AgriskConfig>> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(AgriskError::PathNotFound(path.display().to_string()));
        }
    }

    let mut merged = Value::Table(Map::new());
    let mut found = false;
    let layers = [
        global_path.map(Path::to_path_buf),
        Some(root.join(DEFAULT_CONFIG_FILE)),
        Some(root.join(DEFAULT_LOCAL_FILE)),
        explicit.map(Path::to_path_buf),
    ];
    for path in layers.iter().flatten() {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    if !found {
        return Ok(None);
    }

    let cfg: AgriskConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    tracing::info!(path = %path.display(), "config layer loaded");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AgriskError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_config_with_global(dir.path(), None, Some(&dir.path().join("nope.toml")))
            .expect_err("missing explicit config should fail");
        assert!(matches!(err, AgriskError::PathNotFound(_)));
    }

    #[test]
    fn load_config_merges_global_repo_local_and_explicit_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        let explicit_path = global_root.path().join("explicit.toml");

        fs::write(
            &global_path,
            r#"
[tables.locations]
Kerala = 0.45
Punjab = 0.1

[attribution]
location = 0.5
crop = 0.3
scenario = 0.2
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[tables.locations]
Punjab = 0.2

[tables.crops]
Tea = 0.35
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".agrisk")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[tables.crops]
Tea = 0.3
"#,
        )
        .expect("local override should write");

        fs::write(
            &explicit_path,
            r#"
[tables.defaults]
location = 0.5
"#,
        )
        .expect("explicit config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path), Some(&explicit_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let tables = cfg.tables.as_ref().expect("tables should be merged");
        assert_eq!(tables.locations.get("Kerala"), Some(&0.45));
        assert_eq!(tables.locations.get("Punjab"), Some(&0.2));
        assert_eq!(tables.crops.get("Tea"), Some(&0.3));
        assert_eq!(
            tables.defaults.as_ref().and_then(|defaults| defaults.location),
            Some(0.5)
        );
        assert_eq!(cfg.attribution(), [0.5, 0.3, 0.2]);
    }

    #[test]
    fn load_config_reports_invalid_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[tables.crops\nRice = ")
            .expect("repo config should write");
        let err = load_config_with_global(root.path(), None, None).expect_err("parse should fail");
        assert!(err.to_string().contains("config parse error"));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn load_config_validates_merged_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[tables.crops]
Rice = 3.0
"#,
        )
        .expect("repo config should write");
        let err =
            load_config_with_global(root.path(), None, None).expect_err("validate should fail");
        assert!(err.to_string().contains("tables.crops.Rice"));
    }
}
