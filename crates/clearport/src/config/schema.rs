use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_custom_houses")]
    pub custom_houses: Vec<String>,
    /// Detention free time in calendar days for newly created jobs.
    #[serde(default = "default_free_time")]
    pub default_free_time: u32,
    /// Financial years jobs may be filed under, e.g. "24-25".
    #[serde(default)]
    pub years: Vec<String>,
}

// ~/.clearport/data/clearport.db, falling back to the working
// directory when no home directory resolves.
fn default_database_path() -> String {
    dirs::home_dir()
        .map(|h| h.join(".clearport").join("data").join("clearport.db"))
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "clearport.db".to_string())
}

fn default_custom_houses() -> Vec<String> {
    ["ICD Sanand", "ICD Khodiyar", "ICD Sachana", "Hazira", "Mundra"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_free_time() -> u32 {
    14
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            database_path: default_database_path(),
            custom_houses: default_custom_houses(),
            default_free_time: default_free_time(),
            years: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.default_free_time, 14);
        assert!(config.custom_houses.contains(&"ICD Sanand".to_string()));
        assert!(config.database_path.ends_with("clearport.db"));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = serde_json::from_str(r#"{"version": "1.0"}"#).unwrap();
        assert_eq!(config.default_free_time, 14);
        assert!(config.years.is_empty());
    }
}
