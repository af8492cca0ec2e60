use super::{load_grants, prelude::*};

/// Clear all filters and reload the canonical listing.
///
/// The listing is always fetched again instead of restoring
/// an earlier snapshot.
pub async fn reset_catalog<'c, G>(
    gateway: &G,
    catalog: &'c mut CatalogStore,
    filter: &mut FilterState,
) -> Result<&'c [Grant]>
where
    G: GrantGateway + ?Sized,
{
    filter.clear();
    load_grants(gateway, catalog).await
}
