use super::prelude::*;

/// Replace the catalog with all grants carrying at least one of `tags`.
///
/// Searching without tags does not contact the gateway and
/// leaves the catalog untouched. On failure the catalog is
/// left as it was.
pub async fn search_grants<'c, G>(
    gateway: &G,
    catalog: &'c mut CatalogStore,
    tags: &[String],
) -> Result<&'c [Grant]>
where
    G: GrantGateway + ?Sized,
{
    if tags.is_empty() {
        log::debug!("No tags selected: skip search");
        return Ok(catalog.grants());
    }
    log::debug!("Searching grants by tags {tags:?}");
    let grants = gateway.search_grants_by_tags(tags).await.map_err(|err| {
        log::warn!("Unable to search grants: {err}");
        Error::Search(err)
    })?;
    log::info!("Found {} grants tagged with any of {tags:?}", grants.len());
    catalog.apply_search_results(tags, grants);
    Ok(catalog.grants())
}
