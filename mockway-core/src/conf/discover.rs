use crate::conf::ConfigError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Find the rule files an include pattern refers to.
///
/// The pattern is resolved against `root`. Only regular files are returned,
/// sorted by path, so route registration order (and with it precedence) does
/// not depend on directory iteration order.
pub fn discover(root: &Path, glob_pattern: &str) -> Result<Vec<PathBuf>, ConfigError> {
    let pattern = root.join(glob_pattern).to_string_lossy().into_owned();

    let mut paths: Vec<_> = glob(&pattern)
        .map_err(|e| ConfigError::Glob {
            pattern: pattern.clone(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}
