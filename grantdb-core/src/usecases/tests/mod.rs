use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use grantdb_entities::builders::*;

use crate::{
    catalog::CatalogStore,
    entities::*,
    gateways::{self, GrantGateway},
    view::visible_grants,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AllGrants,
    AvailableTags,
    AddGrants(Vec<NewGrant>),
    SearchGrantsByTags(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Transport,
    Unsuccessful,
}

/// In-memory grant service that tags new grants
/// with every known tag occurring as a word.
pub struct MockGateway {
    grants: RefCell<Vec<Grant>>,
    tags: Vec<String>,
    failure: Cell<Option<Failure>>,
    calls: RefCell<Vec<Call>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            grants: RefCell::new(vec![]),
            tags: sample_tags(),
            failure: Cell::new(None),
            calls: RefCell::new(vec![]),
        }
    }
}

impl MockGateway {
    pub fn with_grants(grants: Vec<Grant>) -> Self {
        Self {
            grants: RefCell::new(grants),
            ..Default::default()
        }
    }

    pub fn fail_with(&self, failure: Failure) {
        self.failure.set(Some(failure));
    }

    pub fn succeed(&self) {
        self.failure.set(None);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn stored_grants(&self) -> Vec<Grant> {
        self.grants.borrow().clone()
    }

    fn record(&self, call: Call) -> gateways::Result<()> {
        self.calls.borrow_mut().push(call);
        match self.failure.get() {
            None => Ok(()),
            Some(Failure::Transport) => Err(gateways::Error::Transport("connection refused".into())),
            Some(Failure::Unsuccessful) => Err(gateways::Error::Unsuccessful(Some(
                "Failed to save grants".into(),
            ))),
        }
    }

    fn assign_tags(&self, grant: &NewGrant) -> Vec<String> {
        let text = format!("{} {}", grant.name, grant.description).to_lowercase();
        let words: Vec<_> = text.split(|c: char| !c.is_alphanumeric()).collect();
        self.tags
            .iter()
            .filter(|tag| words.contains(&tag.as_str()))
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl GrantGateway for MockGateway {
    async fn all_grants(&self) -> gateways::Result<Vec<Grant>> {
        self.record(Call::AllGrants)?;
        Ok(self.stored_grants())
    }

    async fn available_tags(&self) -> gateways::Result<Vec<String>> {
        self.record(Call::AvailableTags)?;
        Ok(self.tags.clone())
    }

    async fn add_grants(&self, new_grants: Vec<NewGrant>) -> gateways::Result<Vec<Grant>> {
        self.record(Call::AddGrants(new_grants.clone()))?;
        let mut grants = self.grants.borrow_mut();
        let added: Vec<_> = new_grants
            .into_iter()
            .enumerate()
            .map(|(i, new_grant)| Grant {
                id: Some(GrantId::new((grants.len() + i + 1) as u64)),
                tags: self.assign_tags(&new_grant),
                name: new_grant.name,
                description: new_grant.description,
                website_urls: new_grant.website_urls,
                document_urls: new_grant.document_urls,
            })
            .collect();
        grants.extend(added.iter().cloned());
        Ok(added)
    }

    async fn search_grants_by_tags(&self, tags: &[String]) -> gateways::Result<Vec<Grant>> {
        self.record(Call::SearchGrantsByTags(tags.to_vec()))?;
        Ok(self
            .grants
            .borrow()
            .iter()
            .filter(|g| g.has_any_tag(tags.iter().map(String::as_str)))
            .cloned()
            .collect())
    }
}

pub fn sample_tags() -> Vec<String> {
    ["agriculture", "dairy", "education", "energy", "research", "water"]
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

pub fn sample_grants() -> Vec<Grant> {
    vec![
        Grant::build()
            .id(1)
            .name("Sustainable Agriculture Research Grant")
            .description("Funding for organic farming practices.")
            .tags(vec!["agriculture", "research"])
            .finish(),
        Grant::build()
            .id(2)
            .name("Water Storage Grant")
            .description("Irrigation ponds and tanks.")
            .tags(vec!["water"])
            .finish(),
        Grant::build()
            .id(3)
            .name("Dairy Modernization Grant")
            .description("Milk processing equipment.")
            .tags(vec!["dairy", "equipment", "dairy"])
            .finish(),
    ]
}

pub fn visible_ids(catalog: &CatalogStore, filter: &FilterState) -> Vec<Option<GrantId>> {
    visible_grants(catalog.grants(), filter)
        .into_iter()
        .map(|g| g.id)
        .collect()
}
