use anyhow::Result;
use tracing::info;

use crate::common::ResourceId;
use crate::domains::resources::models::Resource;
use crate::kernel::ServerDeps;

/// Count one download of a resource.
///
/// Returns the new count, or `None` when no resource has this id.
pub async fn track_download(resource_id: ResourceId, deps: &ServerDeps) -> Result<Option<i32>> {
    let count = Resource::increment_download_count(resource_id, &deps.db_pool).await?;

    match count {
        Some(download_count) => {
            info!(resource_id = %resource_id, download_count, "Resource downloaded");
        }
        None => {
            info!(resource_id = %resource_id, "Download tracked for unknown resource");
        }
    }

    Ok(count)
}
