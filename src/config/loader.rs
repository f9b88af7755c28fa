use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::ComplexLintConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".complex-lint.toml";

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and reject weights that would break the
/// state-space invariants.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<ComplexLintConfig, String> {
    let config = toml::from_str::<ComplexLintConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(weights) = &config.state_space {
        weights.validate()?;
    }

    Ok(config)
}

/// Load an explicitly requested configuration file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<ComplexLintConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {e}", path.display())))?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ComplexLintConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{} in {}. Using defaults.", e, config_path.display());
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest usable config file.
pub fn discover_config(start: PathBuf) -> ComplexLintConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ComplexLintConfig::default()
        })
}

pub fn load_config() -> ComplexLintConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ComplexLintConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateSpaceWeights;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_partial_weights_fill_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [state_space]
            integer = 1000
        "#})
        .unwrap();

        assert_eq!(
            config.weights(),
            StateSpaceWeights {
                integer: 1000,
                ..StateSpaceWeights::default()
            }
        );
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.weights(), StateSpaceWeights::default());
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let err = parse_and_validate_config("[state_space]\nboolean = 0\n").unwrap_err();
        assert!(err.contains("state_space.boolean"));
    }

    #[test]
    fn test_discover_config_in_ancestor() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[state_space]\nsequence_length = 7\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.weights().sequence_length, 7);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[state_space\n").unwrap();

        let config = discover_config(root.path().to_path_buf());
        assert_eq!(config.weights(), StateSpaceWeights::default());
    }

    #[test]
    fn test_explicit_missing_config_is_fatal() {
        let root = TempDir::new().unwrap();
        let result = load_config_from(&root.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_directory_ancestors_stops_at_depth() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(ancestors, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
