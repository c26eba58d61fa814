use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "files/input/shipping-data.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "docs";
const CONFIG_FILE: &str = "config/dashboard";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Load configuration from `config/dashboard.*` if present, falling back to the
/// fixed default paths for anything it leaves out.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    load_dashboard_config_from(CONFIG_FILE)
}

pub fn load_dashboard_config_from(name: &str) -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .set_default("input_path", DEFAULT_INPUT_PATH)?
        .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let name = temp.path().join("dashboard");

        let config = load_dashboard_config_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_file_overrides_both_paths() {
        let temp = tempfile::tempdir().unwrap();
        let expected = DashboardConfig {
            input_path: PathBuf::from("data/shipments.csv"),
            output_dir: PathBuf::from("public"),
        };
        std::fs::write(
            temp.path().join("dashboard.toml"),
            toml::to_string(&expected).unwrap(),
        )
        .unwrap();

        let name = temp.path().join("dashboard");
        let config = load_dashboard_config_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config, expected);
    }

    #[test]
    fn test_partial_file_keeps_remaining_default() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("dashboard.toml"), "output_dir = \"site\"\n").unwrap();

        let name = temp.path().join("dashboard");
        let config = load_dashboard_config_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_dir, PathBuf::from("site"));
    }
}
