use std::path::Path;

use serde::Deserialize;
use tokio::fs;

/// On-disk shape of `launcher-config.json`. Fields stay optional at the serde
/// layer so a missing key reads as an invalid configuration instead of a JSON
/// parse failure.
#[derive(Debug, Deserialize)]
struct RawConfig {
    public_launcher_assets_url: Option<String>,
    public_launcher_assets: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct LauncherConfig {
    base_url: String,
    pub assets: Vec<String>,
}

impl LauncherConfig {
    /// Read and validate the launcher asset configuration at `path`.
    pub async fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to load {}: {e}", path.display()))?;

        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to load {}: {e}", path.display()))?;

        Self::from_value(value).map_err(|e| {
            format!("Invalid configuration in {}: {e}", path.display())
        })
    }

    fn from_value(value: serde_json::Value) -> Result<Self, String> {
        let raw: RawConfig = serde_json::from_value(value).map_err(|e| e.to_string())?;

        let base_url = raw
            .public_launcher_assets_url
            .filter(|url| !url.is_empty())
            .ok_or("public_launcher_assets_url is missing or empty")?;
        let assets = raw
            .public_launcher_assets
            .ok_or("public_launcher_assets is missing")?;

        Ok(Self {
            // Trailing slashes on the base URL are insignificant.
            base_url: base_url.trim_end_matches('/').to_owned(),
            assets,
        })
    }

    pub fn asset_url(&self, asset: &str) -> String {
        format!("{}/{}", self.base_url, asset)
    }

    /// Alternate location tried when the primary download fails; the asset
    /// host serves localized copies under an `/en/` prefix.
    pub fn fallback_url(&self, asset: &str) -> String {
        format!("{}/en/{}", self.base_url, asset)
    }
}
