use super::prelude::*;
use crate::tag::TagCatalog;

/// Fetch the universe of assignable tags.
pub async fn load_tag_catalog<G>(gateway: &G) -> Result<TagCatalog>
where
    G: GrantGateway + ?Sized,
{
    log::debug!("Loading available tags");
    let tags = gateway.available_tags().await.map_err(|err| {
        log::warn!("Unable to load tags: {err}");
        Error::Load {
            what: "tags",
            source: err,
        }
    })?;
    let catalog = TagCatalog::new(tags);
    log::info!("Loaded {} available tags", catalog.len());
    Ok(catalog)
}

/// Reload the tag catalog in place.
///
/// On failure the current tags are kept.
pub async fn refresh_tag_catalog<G>(gateway: &G, tag_catalog: &mut TagCatalog) -> Result<()>
where
    G: GrantGateway + ?Sized,
{
    let fresh = load_tag_catalog(gateway).await?;
    tag_catalog.replace(fresh);
    Ok(())
}
