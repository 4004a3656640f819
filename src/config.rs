use dioxus::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub application_deadline: String,
    pub brochure_url: String,
    pub brochure_file_name: String,
    pub carousel_interval_ms: u32,
    pub countdown_interval_ms: u32,
    pub testimonial_interval_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            application_deadline: "2024-12-15T23:59:59".to_string(),
            brochure_url: "/brochure-2025.pdf".to_string(),
            brochure_file_name: "Elite-Research-Program-2025.pdf".to_string(),
            carousel_interval_ms: 8000,
            countdown_interval_ms: 60000,
            testimonial_interval_ms: 10000,
        }
    }
}

pub fn use_site_config() -> Resource<SiteConfig> {
    use_resource(|| async move {
        match fetch_site_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!(%message, "site config unavailable, using defaults");
                SiteConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_site_config() -> Result<SiteConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<SiteConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| format!("config read failed: {err}"))?;
    parse_site_config(&body)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_site_config() -> Result<SiteConfig, String> {
    Ok(SiteConfig::default())
}

pub fn parse_site_config(body: &str) -> Result<SiteConfig, String> {
    serde_json::from_str(body).map_err(|err| format!("config decode failed: {err}"))
}
