use std::time::Duration;

use crate::data::source::Source;

pub const MTL_ENDPOINT: &str = "http://43.205.241.105:8080/api/mtl/getAllMoney";
pub const MAL_ENDPOINT: &str = "http://43.205.241.105:8080/api/mal/getAllAssetInvestments";

/// Runtime settings for the dashboard.
#[derive(Debug, Clone)]
pub struct DashConfig {
    pub mtl_url: String,
    pub mal_url: String,
    /// Whole-request timeout handed to the HTTP client.
    pub request_timeout: Duration,
    /// Rows per page when the window opens.
    pub page_size: usize,
    pub page_size_choices: Vec<usize>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            mtl_url: MTL_ENDPOINT.to_string(),
            mal_url: MAL_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(30),
            page_size: 3,
            page_size_choices: vec![3, 10, 25, 50],
            window_size: [1000.0, 700.0],
            min_window_size: [500.0, 320.0],
        }
    }
}

impl DashConfig {
    pub fn endpoint(&self, source: Source) -> &str {
        match source {
            Source::Mtl => &self.mtl_url,
            Source::Mal => &self.mal_url,
        }
    }
}
