use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub static_files_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            static_files_path: "static".to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the YAML config file, falling back to the defaults when the
    /// file does not exist.
    pub fn load_from_file(file_path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(file_path) {
            Ok(content) => serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to deserialize config: {}", e)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port must be non-zero".to_string());
        }
        if self.static_files_path.is_empty() {
            return Err("Static files path must not be empty".to_string());
        }
        Ok(())
    }
}
