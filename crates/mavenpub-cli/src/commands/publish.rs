use miette::Result;

use mavenpub_core::config::GlobalConfig;
use mavenpub_ops::ops_publish::{self, PublishOptions};
use mavenpub_util::errors::PublishError;

pub async fn exec(repository: Option<String>, dry_run: bool, json: bool) -> Result<()> {
    let project = super::current_project()?;
    let config = GlobalConfig::load()?;
    let opts = PublishOptions {
        repository,
        dry_run,
    };

    let outcome = ops_publish::publish(&project, &config, &opts).await?;

    if json {
        let rendered = serde_json::to_string_pretty(&outcome).map_err(|e| PublishError::Generic {
            message: format!("Failed to serialize publish result: {e}"),
        })?;
        println!("{rendered}");
    }
    Ok(())
}
