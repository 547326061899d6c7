use std::path::Path;

use log::debug;
use tokio::fs;

use crate::config::LauncherConfig;
use crate::networking::NetworkClient;

pub struct AssetSyncer {
    client: NetworkClient,
}

impl AssetSyncer {
    pub fn new() -> Self {
        Self {
            client: NetworkClient::new(),
        }
    }

    /// Materialize every configured asset under `output_dir`, one at a time
    /// in list order. Files already present are left untouched; presence is
    /// the only freshness check. The first asset that can be fetched from
    /// neither its primary nor its `/en/` fallback URL aborts the run.
    pub async fn sync(&self, output_dir: &Path, config_path: &Path) -> Result<(), String> {
        fs::create_dir_all(output_dir)
            .await
            .map_err(|e| format!("Failed to create {}: {e}", output_dir.display()))?;

        let config = LauncherConfig::load(config_path).await?;

        for asset in &config.assets {
            self.sync_asset(output_dir, &config, asset).await?;
        }

        println!("All launcher assets are up-to-date.");
        Ok(())
    }

    async fn sync_asset(
        &self,
        output_dir: &Path,
        config: &LauncherConfig,
        asset: &str,
    ) -> Result<(), String> {
        let dest = output_dir.join(asset);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }

        if fs::try_exists(&dest).await.unwrap_or(false) {
            debug!("{} already present, skipping", dest.display());
            return Ok(());
        }

        let url = config.asset_url(asset);
        println!("Downloading {asset} from {url}...");
        let body = match self.client.fetch(&url).await {
            Ok(body) => body,
            Err(primary_err) => {
                debug!("download of {url} failed: {primary_err}");
                let fallback = config.fallback_url(asset);
                println!("Trying again from {fallback}...");
                self.client
                    .fetch(&fallback)
                    .await
                    .map_err(|e| format!("Failed to download {fallback}: {e}"))?
            }
        };

        // The body is fully in memory before the destination file is created,
        // so a failed download never leaves a truncated file behind.
        fs::write(&dest, &body)
            .await
            .map_err(|e| format!("Failed to write {}: {e}", dest.display()))
    }
}
