use super::prelude::*;

/// Snapshot of the full catalog for read access, in stable catalog
/// insertion order. No filtering, sorting or pagination.
pub fn load_activities<R>(repo: &R) -> Result<Vec<Activity>>
where
    R: ActivityRepo,
{
    Ok(repo.all_activities()?)
}
