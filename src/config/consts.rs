// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.oddschecker.com";
pub const INDEX_PATH: &str = "/horse-racing";
pub const USER_AGENT: &str = "Mozilla/5.0";

// Concurrency (only used by `LiveOdds::all_concurrent`)
pub const WORKERS: usize = 4;

/// Where to fetch from and who to say we are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            user_agent: s!(USER_AGENT),
        }
    }
}

impl ClientOptions {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Racing index URL, e.g. `https://www.oddschecker.com/horse-racing`.
    pub fn index_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), INDEX_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_url_joins_without_double_slash() {
        let opts = ClientOptions::default().with_base_url("http://localhost:8080/");
        assert_eq!(opts.index_url(), "http://localhost:8080/horse-racing");
        assert_eq!(ClientOptions::default().index_url(), "https://www.oddschecker.com/horse-racing");
    }
}
