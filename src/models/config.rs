use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the optional project config
pub const CONFIG_FILE: &str = "quizconv.toml";

fn default_output_dir_name() -> String {
    "OUTPUT".to_string()
}

fn default_file_suffix() -> String {
    "_quiz".to_string()
}

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Directory (relative to the input file) that receives converted files
    #[serde(default = "default_output_dir_name")]
    pub output_dir_name: String,

    /// Appended to the input file stem to name the XML file
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Open the output directory after a conversion (needs the `ui` feature)
    #[serde(default)]
    pub open_output: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            output_dir_name: default_output_dir_name(),
            file_suffix: default_file_suffix(),
            open_output: false,
        }
    }
}

impl QuizConfig {
    /// Load config from quizconv.toml, falling back to defaults when absent
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: QuizConfig = toml::from_str(&content)?;
        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }
}
