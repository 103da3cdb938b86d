pub struct ApiSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://codeforces.com/api",
            user_agent: "cf-stats/0.1",
            timeout_secs: 30,
            rate_limit_ms: 500, // Codeforces asks clients to keep request rates modest
        }
    }
}

pub struct BrowseSettings {
    /// Hard cap on problem-browser results.
    pub max_results: usize,
    /// How many of the latest contests the stats report shows.
    pub recent_contests: usize,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            max_results: 20,
            recent_contests: 5,
        }
    }
}

pub struct AppConfig {
    pub api: ApiSettings,
    pub browse: BrowseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            browse: BrowseSettings::default(),
        }
    }
}
