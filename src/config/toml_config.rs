use crate::config::{DEFAULT_TARGET, DEFAULT_WINDOW_DAYS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_positive_number, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dashboard: DashboardSection,
    pub source: SourceSection,
    pub filter: Option<FilterSection>,
    pub goal: Option<GoalSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSection {
    pub window_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSection {
    pub target: Option<f64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // ${VAR_NAME} placeholders are replaced from the environment; unknown
    // variables are left in place so validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn window_days(&self) -> u32 {
        self.filter
            .as_ref()
            .and_then(|f| f.window_days)
            .unwrap_or(DEFAULT_WINDOW_DAYS)
    }

    pub fn target(&self) -> f64 {
        self.goal
            .as_ref()
            .and_then(|g| g.target)
            .unwrap_or(DEFAULT_TARGET)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn target(&self) -> f64 {
        self.target()
    }

    fn window_days(&self) -> u32 {
        self.window_days()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dashboard.name", &self.dashboard.name)?;
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_positive_number("filter.window_days", self.window_days(), 1)?;
        validate_non_negative("goal.target", self.target())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[dashboard]
name = "sales-prizes"
description = "Effectuated proposals per consultant"

[source]
endpoint = "https://api.example.com/propostas_efetivadas/get"

[filter]
window_days = 14

[goal]
target = 5000000.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.dashboard.name, "sales-prizes");
        assert_eq!(
            config.source.endpoint,
            "https://api.example.com/propostas_efetivadas/get"
        );
        assert_eq!(config.window_days(), 14);
        assert_eq!(config.target(), 5_000_000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_for_optional_sections() {
        let toml_content = r#"
[dashboard]
name = "minimal"

[source]
endpoint = "https://api.example.com/get"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.window_days(), DEFAULT_WINDOW_DAYS);
        assert_eq!(config.target(), DEFAULT_TARGET);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_DASH_ENDPOINT", "https://test.api.com/get");

        let toml_content = r#"
[dashboard]
name = "env-test"

[source]
endpoint = "${TEST_DASH_ENDPOINT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.endpoint, "https://test.api.com/get");

        std::env::remove_var("TEST_DASH_ENDPOINT");
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let toml_content = r#"
[dashboard]
name = "bad-endpoint"

[source]
endpoint = "not-a-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[dashboard]
name = "file-test"

[source]
endpoint = "https://api.example.com/get"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.dashboard.name, "file-test");
    }
}
