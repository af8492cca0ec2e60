use super::prelude::*;
use crate::util::validate::{parse_grant_batch, validate_manual_entry, MalformedInput};

/// Submit new grants and append the stored (tagged) grants to the catalog.
///
/// Returns the appended grants. On failure the catalog is left as it was.
pub async fn submit_grants<'c, G>(
    gateway: &G,
    catalog: &'c mut CatalogStore,
    grants: Vec<NewGrant>,
) -> Result<&'c [Grant]>
where
    G: GrantGateway + ?Sized,
{
    if grants.is_empty() {
        return Err(MalformedInput::Empty.into());
    }
    log::debug!("Submitting {} grants", grants.len());
    let added = gateway.add_grants(grants).await.map_err(|err| {
        log::warn!("Unable to add grants: {err}");
        SubmissionError::Rejected(err)
    })?;
    log::info!("Added {} grants", added.len());
    Ok(catalog.append_grants(added))
}

/// Submit a JSON batch (single object or array).
///
/// The input is validated completely before anything is sent.
pub async fn submit_grant_batch<'c, G>(
    gateway: &G,
    catalog: &'c mut CatalogStore,
    json: &str,
) -> Result<&'c [Grant]>
where
    G: GrantGateway + ?Sized,
{
    let grants = parse_grant_batch(json).inspect_err(|err| {
        log::warn!("Rejected malformed grant batch: {err}");
    })?;
    submit_grants(gateway, catalog, grants).await
}

/// Submit a single grant entered by hand.
pub async fn submit_manual_entry<'c, G>(
    gateway: &G,
    catalog: &'c mut CatalogStore,
    grant: NewGrant,
) -> Result<&'c [Grant]>
where
    G: GrantGateway + ?Sized,
{
    let grant = validate_manual_entry(grant)?;
    submit_grants(gateway, catalog, vec![grant]).await
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[tokio::test]
    async fn append_tagged_grants() {
        let gw = MockGateway::with_grants(sample_grants());
        let mut catalog = CatalogStore::new();
        super::super::load_grants(&gw, &mut catalog).await.unwrap();
        let json = r#"[
          { "grant_name": "Dairy Education", "grant_description": "Training for dairy farmers" },
          { "grant_name": "Solar Pumps", "grant_description": "Energy for water pumps" }
        ]"#;
        let added = submit_grant_batch(&gw, &mut catalog, json).await.unwrap();
        assert_eq!(2, added.len());
        assert_eq!(vec!["dairy".to_string(), "education".to_string()], added[0].tags);
        assert_eq!(vec!["energy".to_string(), "water".to_string()], added[1].tags);
        assert_eq!(Some(GrantId::new(4)), added[0].id);
        assert_eq!(5, catalog.len());
        assert_eq!("Solar Pumps", catalog.grants()[4].name);
    }

    #[tokio::test]
    async fn append_duplicates() {
        let gw = MockGateway::default();
        let mut catalog = CatalogStore::new();
        let grant = NewGrant::new("Same", "Same description");
        submit_manual_entry(&gw, &mut catalog, grant.clone())
            .await
            .unwrap();
        submit_manual_entry(&gw, &mut catalog, grant).await.unwrap();
        assert_eq!(2, catalog.len());
        assert_eq!(catalog.grants()[0].name, catalog.grants()[1].name);
    }

    #[tokio::test]
    async fn malformed_batch_is_rejected_without_any_call() {
        let gw = MockGateway::default();
        let mut catalog = CatalogStore::new();
        let err = submit_grant_batch(&gw, &mut catalog, "{ not json")
            .await
            .unwrap_err();
        assert!(err.is_malformed_input());
        let err = submit_grant_batch(&gw, &mut catalog, r#"[{"grant_name":"a"}]"#)
            .await
            .unwrap_err();
        assert!(err.is_malformed_input());
        assert!(gw.calls().is_empty());
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn incomplete_manual_entry_is_rejected_without_any_call() {
        let gw = MockGateway::default();
        let mut catalog = CatalogStore::new();
        let err = submit_manual_entry(&gw, &mut catalog, NewGrant::new("Name", "  "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Submission(SubmissionError::MalformedInput(
                MalformedInput::IncompleteManualEntry
            ))
        ));
        assert!(gw.calls().is_empty());
    }

    #[tokio::test]
    async fn keep_catalog_if_submission_fails() {
        let gw = MockGateway::with_grants(sample_grants());
        let mut catalog = CatalogStore::new();
        super::super::load_grants(&gw, &mut catalog).await.unwrap();
        gw.fail_with(Failure::Unsuccessful);
        let err = submit_manual_entry(&gw, &mut catalog, NewGrant::new("a", "b"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Submission(SubmissionError::Rejected(_))
        ));
        assert_eq!("Failed to add grants: Failed to save grants", err.to_string());
        assert_eq!(3, catalog.len());

        gw.succeed();
        submit_manual_entry(&gw, &mut catalog, NewGrant::new("a", "b"))
            .await
            .unwrap();
        assert_eq!(4, catalog.len());
    }
}
