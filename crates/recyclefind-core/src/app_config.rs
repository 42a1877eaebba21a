/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Search endpoint, e.g. `https://host/api/search`.
    pub api_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "api_url              = {}", self.api_url)?;
        writeln!(f, "log_level            = {}", self.log_level)?;
        writeln!(f, "request_timeout_secs = {}", self.request_timeout_secs)?;
        writeln!(f, "connect_timeout_secs = {}", self.connect_timeout_secs)?;
        write!(f, "user_agent           = {}", self.user_agent)
    }
}
