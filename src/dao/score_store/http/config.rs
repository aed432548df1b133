/// Path of the score update endpoint, relative to the API base URL.
pub const UPDATE_POINTS_PATH: &str = "api/v1/user/updatePoints";

/// Runtime configuration describing how to reach the score API.
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    /// API root, e.g. `http://localhost:3000`.
    pub base_url: String,
}

impl HttpStoreConfig {
    /// Construct a configuration from an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the update endpoint.
    pub fn update_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            UPDATE_POINTS_PATH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_url_tolerates_trailing_slash() {
        assert_eq!(
            HttpStoreConfig::new("http://api.local/").update_url(),
            "http://api.local/api/v1/user/updatePoints"
        );
        assert_eq!(
            HttpStoreConfig::new("http://api.local").update_url(),
            "http://api.local/api/v1/user/updatePoints"
        );
    }
}
