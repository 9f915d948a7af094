use crate::conf::load_config;
use serde::Serialize;
use std::path::PathBuf;

/// Print the loaded configuration (JSON unless `yaml` is set).
pub fn dump(path: PathBuf, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    println!("{}", render(&cfg, yaml)?);
    Ok(())
}

pub fn render<T: Serialize>(value: &T, yaml: bool) -> anyhow::Result<String> {
    if yaml {
        Ok(serde_yaml::to_string(value)?)
    } else {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
