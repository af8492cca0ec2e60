use super::prelude::*;

/// Replace the catalog with the canonical listing.
///
/// On failure the catalog is left as it was.
pub async fn load_grants<'c, G>(gateway: &G, catalog: &'c mut CatalogStore) -> Result<&'c [Grant]>
where
    G: GrantGateway + ?Sized,
{
    log::debug!("Loading all grants");
    let grants = gateway.all_grants().await.map_err(|err| {
        log::warn!("Unable to load grants: {err}");
        Error::Load {
            what: "grants",
            source: err,
        }
    })?;
    log::info!("Loaded {} grants", grants.len());
    catalog.replace_all(grants);
    Ok(catalog.grants())
}
