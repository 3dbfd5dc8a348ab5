use serde::Deserialize;

const DEFAULT_SUBPATH: &str = "/pem08";
const DEFAULT_STATUS_TIMEOUT_MS: u32 = 5000;
const DEFAULT_BULK_RESULTS_FILE: &str = "data/parsing_results.json";

/// Client settings. Every field has a default, so an empty or partial JSON
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Path prefix the service is mounted under when deployed behind a proxy.
    pub deployment_subpath: String,
    /// How long a status banner stays visible.
    pub status_timeout_ms: u32,
    /// Server-side file the bulk parser writes its results to.
    pub bulk_results_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            deployment_subpath: DEFAULT_SUBPATH.to_string(),
            status_timeout_ms: DEFAULT_STATUS_TIMEOUT_MS,
            bulk_results_file: DEFAULT_BULK_RESULTS_FILE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Base URL for API calls, detected from where the page is served.
    pub fn api_base(&self, origin: &str, pathname: &str) -> String {
        let origin = origin.trim_end_matches('/');
        let subpath = self.deployment_subpath.trim_end_matches('/');
        if !subpath.is_empty() && pathname.contains(subpath) {
            format!("{origin}{subpath}")
        } else {
            origin.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_detects_subpath() {
        let config = ClientConfig::default();
        assert_eq!(
            config.api_base("https://tools.example.com", "/pem08/index.html"),
            "https://tools.example.com/pem08"
        );
        assert_eq!(config.api_base("http://localhost:8000/", "/"), "http://localhost:8000");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"status_timeout_ms": 1500}"#).unwrap();
        assert_eq!(config.status_timeout_ms, 1500);
        assert_eq!(config.deployment_subpath, "/pem08");
        assert_eq!(ClientConfig::from_json("  ").unwrap(), ClientConfig::default());
    }
}
