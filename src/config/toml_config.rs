use crate::core::settings::{CartSettings, CorruptCartPolicy, Locale, Messages, DEFAULT_STORAGE_KEY};
use crate::core::ConfigProvider;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub messages: Messages,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub key: String,
    pub on_corrupt: CorruptCartPolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "./.cart".to_string(),
            key: DEFAULT_STORAGE_KEY.to_string(),
            on_corrupt: CorruptCartPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CartError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn settings(&self) -> CartSettings {
        CartSettings {
            storage_key: self.storage_key().to_string(),
            on_corrupt: self.storage.on_corrupt,
            locale: self.display.locale,
            messages: self.messages.clone(),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_seconds)
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn storage_key(&self) -> &str {
        &self.storage.key
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("api.base_url", &self.api.base_url)?;
        validate_range("api.timeout_seconds", self.api.timeout_seconds, 1, 300)?;
        validate_path("storage.path", &self.storage.path)?;
        validate_non_empty_string("storage.key", &self.storage.key)?;

        validate_non_empty_string("messages.out_of_stock", &self.messages.out_of_stock)?;
        validate_non_empty_string("messages.add_failed", &self.messages.add_failed)?;
        validate_non_empty_string("messages.remove_failed", &self.messages.remove_failed)?;
        validate_non_empty_string("messages.update_failed", &self.messages.update_failed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3333");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.storage_key(), "@RocketShoes:cart");
        assert_eq!(config.settings(), CartSettings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[api]
base_url = "https://shop.example.com/api"
timeout_seconds = 3

[storage]
path = "/var/lib/cart"
key = "@Shop:cart"
on_corrupt = "fail"

[display]
locale = "en-US"

[messages]
out_of_stock = "Requested quantity out of stock"
add_failed = "Error adding product"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.settings();

        assert_eq!(config.api_base_url(), "https://shop.example.com/api");
        assert_eq!(config.storage_path(), "/var/lib/cart");
        assert_eq!(settings.storage_key, "@Shop:cart");
        assert_eq!(settings.on_corrupt, CorruptCartPolicy::Fail);
        assert_eq!(settings.locale, Locale::EnUs);
        assert_eq!(settings.messages.add_failed, "Error adding product");
        assert_eq!(
            settings.messages.remove_failed,
            "Erro na remoção do produto"
        );
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CART_TEST_API_URL", "https://test.api.com");

        let toml_content = r#"
[api]
base_url = "${CART_TEST_API_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://test.api.com");

        std::env::remove_var("CART_TEST_API_URL");
    }

    #[test]
    fn test_config_validation() {
        let invalid_url = TomlConfig::from_toml_str("[api]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(invalid_url.validate().is_err());

        let zero_timeout = TomlConfig::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
        assert!(zero_timeout.validate().is_err());

        let blank_message =
            TomlConfig::from_toml_str("[messages]\nadd_failed = \"  \"\n").unwrap();
        assert!(blank_message.validate().is_err());
    }

    #[test]
    fn test_unknown_corrupt_policy_is_rejected() {
        let result = TomlConfig::from_toml_str("[storage]\non_corrupt = \"ignore\"\n");
        assert!(matches!(
            result,
            Err(CartError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\npath = \"./carts\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage.path, "./carts");
    }
}
