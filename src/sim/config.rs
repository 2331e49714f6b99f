use std::{fs, path::Path};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Token separator for script lines
    pub delimiter: char,
    /// Abort on unknown commands and sort keys instead of skipping them
    pub strict: bool
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig { delimiter: ',', strict: false }
    }
}

impl SimulationConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        Self::parse(&file_content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }
}


#[cfg(test)]
mod tests {
    use super::SimulationConfig;

    #[test]
    fn defaults_when_empty() {
        assert_eq!(SimulationConfig::parse("").unwrap(), SimulationConfig::default());
    }

    #[test]
    fn partial_config() {
        let config = SimulationConfig::parse("strict = true").unwrap();
        assert!(config.strict);
        assert_eq!(config.delimiter, ',');

        let config = SimulationConfig::parse("delimiter = \";\"\nstrict = false").unwrap();
        assert_eq!(config.delimiter, ';');
        assert!(!config.strict);
    }

    #[test]
    fn bad_config() {
        assert!(SimulationConfig::parse("strict = \"maybe\"").is_err());
        assert!(SimulationConfig::read("/nonexistent/casecash.toml").is_err());
    }
}
