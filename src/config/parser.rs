use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[crawler]
max-links = 40
timeout-secs = 5
random-seed = 7

[request]
user-agent = "HarvestBot/1.0"

[output]
directory = "./corpus"
extension = "text"
clear-existing = false
on-collision = "suffix"
summary-path = "./report.md"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.crawler.max_links, 40);
        assert_eq!(config.crawler.timeout_secs, 5);
        assert_eq!(config.crawler.random_seed, Some(7));
        assert_eq!(config.request.user_agent, "HarvestBot/1.0");
        assert_eq!(config.output.directory, "./corpus");
        assert_eq!(config.output.extension, "text");
        assert!(!config.output.clear_existing);
        assert_eq!(config.output.on_collision, CollisionPolicy::Suffix);
        assert_eq!(config.output.summary_path.as_deref(), Some("./report.md"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.crawler.max_links, 15);
        assert_eq!(config.crawler.timeout_secs, 10);
        assert_eq!(config.crawler.random_seed, None);
        assert_eq!(config.request.user_agent, "Mozilla/5.0");
        assert_eq!(config.output.directory, "./visited_pages");
        assert_eq!(config.output.extension, "txt");
        assert!(config.output.clear_existing);
        assert_eq!(config.output.on_collision, CollisionPolicy::Overwrite);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config = parse_config("[crawler]\nmax-links = 3\n").unwrap();

        assert_eq!(config.crawler.max_links, 3);
        assert_eq!(config.crawler.timeout_secs, 10);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/harvest.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_collision_policy() {
        let result = parse_config("[output]\non-collision = \"rename\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let result = parse_config("[crawler]\ntimeout-secs = 0\n");
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
