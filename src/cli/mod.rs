pub mod add;
pub mod convert;
pub mod list;
pub mod preview;

use crate::models::QuizConfig;
use crate::Result;
use std::env;

/// Load quizconv.toml from the working directory and apply command-line overrides
pub fn resolve_config(output_dir: Option<&str>, suffix: Option<&str>) -> Result<QuizConfig> {
    let project_root = env::current_dir()?;
    let mut config = QuizConfig::load(&project_root)?;

    if let Some(dir) = output_dir {
        config.output_dir_name = dir.to_string();
    }
    if let Some(suffix) = suffix {
        config.file_suffix = suffix.to_string();
    }
    Ok(config)
}
