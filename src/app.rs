use grantdb_core::{
    catalog::CatalogStore,
    entities::*,
    gateways::GrantGateway,
    tag::{TagCatalog, TagPreview},
    usecases::{self, Error},
    view::{derive_view, CatalogView, ViewOptions},
};

type Result<T> = std::result::Result<T, Error>;

/// A message shown until it is dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(msg) | Self::Failure(msg) => msg,
        }
    }
}

pub fn grants_added_message(count: usize) -> String {
    format!("Successfully added {count} grant(s) with automatic tagging!")
}

/// State of an interactive catalog session.
pub struct Session<G> {
    gateway: G,
    catalog: CatalogStore,
    filter: FilterState,
    tag_catalog: TagCatalog,
    options: ViewOptions,
    tag_preview_len: usize,
    notice: Option<Notice>,
    /// Set when a notice has been raised and not yet taken.
    fresh_notice: bool,
}

impl<G> Session<G>
where
    G: GrantGateway,
{
    pub fn new(gateway: G, options: ViewOptions, tag_preview_len: usize) -> Self {
        Self {
            gateway,
            catalog: CatalogStore::new(),
            filter: FilterState::default(),
            tag_catalog: TagCatalog::default(),
            options,
            tag_preview_len,
            notice: None,
            fresh_notice: false,
        }
    }

    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.fresh_notice = false;
    }

    /// The notice raised since the last call, if any.
    ///
    /// Every raised notice is returned exactly once, even if it
    /// repeats the text of the previous one.
    pub fn take_fresh_notice(&mut self) -> Option<&Notice> {
        if !std::mem::take(&mut self.fresh_notice) {
            return None;
        }
        self.notice.as_ref()
    }

    fn raise(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.fresh_notice = true;
    }

    pub fn view(&self) -> CatalogView<'_> {
        derive_view(
            self.catalog.grants(),
            &self.filter,
            &self.tag_catalog,
            &self.options,
        )
    }

    pub fn tag_preview(&self) -> TagPreview<'_> {
        self.tag_catalog.preview(self.tag_preview_len)
    }

    fn failed<T>(&mut self, err: Error) -> Result<T> {
        self.raise(Notice::Failure(err.to_string()));
        Err(err)
    }

    /// Load the tag universe and the canonical grant list.
    pub async fn start(&mut self) -> Result<usize> {
        self.refresh_tags().await?;
        self.load().await
    }

    pub async fn refresh_tags(&mut self) -> Result<usize> {
        match usecases::refresh_tag_catalog(&self.gateway, &mut self.tag_catalog).await {
            Ok(()) => Ok(self.tag_catalog.len()),
            Err(err) => self.failed(err),
        }
    }

    pub async fn load(&mut self) -> Result<usize> {
        match usecases::load_grants(&self.gateway, &mut self.catalog).await {
            Ok(grants) => Ok(grants.len()),
            Err(err) => self.failed(err),
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    pub fn set_search_term(&mut self, term: &str) {
        term.clone_into(&mut self.filter.search_term);
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.filter.sort_key = sort_key;
    }

    /// Ask the remote service for all grants carrying one of the selected tags.
    pub async fn search_selected(&mut self) -> Result<usize> {
        let tags = self.filter.selected_tags.clone();
        match usecases::search_grants(&self.gateway, &mut self.catalog, &tags).await {
            Ok(grants) => Ok(grants.len()),
            Err(err) => self.failed(err),
        }
    }

    /// Reset all filters and reload the canonical list.
    pub async fn clear_all(&mut self) -> Result<usize> {
        match usecases::reset_catalog(&self.gateway, &mut self.catalog, &mut self.filter).await {
            Ok(grants) => Ok(grants.len()),
            Err(err) => self.failed(err),
        }
    }

    pub async fn import(&mut self, json: &str) -> Result<usize> {
        let result = usecases::submit_grant_batch(&self.gateway, &mut self.catalog, json)
            .await
            .map(<[_]>::len);
        self.submitted(result)
    }

    pub async fn add(&mut self, grant: NewGrant) -> Result<usize> {
        let result = usecases::submit_manual_entry(&self.gateway, &mut self.catalog, grant)
            .await
            .map(<[_]>::len);
        self.submitted(result)
    }

    fn submitted(&mut self, result: Result<usize>) -> Result<usize> {
        match result {
            Ok(count) => {
                self.raise(Notice::Success(grants_added_message(count)));
                Ok(count)
            }
            Err(err) => self.failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn new_session(grants: Vec<Grant>) -> Session<InMemoryGateway> {
        Session::new(
            InMemoryGateway::with_grants(grants),
            ViewOptions::default(),
            3,
        )
    }

    fn visible_names<G: GrantGateway>(session: &Session<G>) -> Vec<String> {
        session
            .view()
            .visible
            .iter()
            .map(|g| g.name.clone())
            .collect()
    }

    #[tokio::test]
    async fn start_session() {
        let mut session = new_session(sample_grants());
        assert_eq!(3, session.start().await.unwrap());
        let view = session.view();
        assert_eq!(3, view.total_count);
        assert_eq!(3, view.visible.len());
        assert_eq!(2, view.frequency_of("research"));
        let preview = session.tag_preview();
        assert_eq!(3, preview.shown.len());
        assert_eq!(2, preview.remaining_count);
        assert!(session.notice().is_none());
    }

    #[tokio::test]
    async fn filter_and_sort_locally() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        assert_eq!(
            vec!["agriculture fund", "Energy Transition", "Water Research"],
            visible_names(&session)
        );

        assert!(session.toggle_tag("research"));
        assert_eq!(
            vec!["Energy Transition", "Water Research"],
            visible_names(&session)
        );
        session.set_search_term("  WATER ");
        assert_eq!(vec!["Water Research"], visible_names(&session));
        assert_eq!(1, session.view().selected_tag_count);

        assert!(!session.toggle_tag("research"));
        session.set_search_term("");
        session.set_sort_key(SortKey::TagCount);
        assert_eq!(
            vec!["Water Research", "Energy Transition", "agriculture fund"],
            visible_names(&session)
        );
        assert_eq!(2, session.gateway.requests());
    }

    #[tokio::test]
    async fn search_and_clear_all() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        session.toggle_tag("agriculture");
        session.set_search_term("soil");
        assert_eq!(1, session.search_selected().await.unwrap());
        assert_eq!(1, session.catalog().len());

        assert_eq!(3, session.clear_all().await.unwrap());
        assert!(!session.filter().has_filters());
        assert_eq!(3, session.view().visible.len());
    }

    #[tokio::test]
    async fn search_without_selected_tags_does_nothing() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        let requests = session.gateway.requests();
        assert_eq!(3, session.search_selected().await.unwrap());
        assert_eq!(requests, session.gateway.requests());
    }

    #[tokio::test]
    async fn notice_after_import() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        let json = r#"{ "grant_name": "Solar Schools", "grant_description": "Energy education" }"#;
        assert_eq!(1, session.import(json).await.unwrap());
        assert_eq!(
            Some(&Notice::Success(
                "Successfully added 1 grant(s) with automatic tagging!".into()
            )),
            session.notice()
        );
        assert_eq!(4, session.view().total_count);
        assert_eq!(2, session.view().frequency_of("energy"));
        session.dismiss_notice();
        assert!(session.notice().is_none());
    }

    #[tokio::test]
    async fn every_raised_notice_is_fresh_once() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        assert!(session.take_fresh_notice().is_none());

        session.gateway.set_offline(true);
        for _ in 0..2 {
            assert!(session.clear_all().await.is_err());
            assert!(matches!(
                session.take_fresh_notice(),
                Some(Notice::Failure(msg)) if msg.starts_with("Error loading grants")
            ));
            assert!(session.take_fresh_notice().is_none());
            assert!(session.notice().is_some());
        }

        session.gateway.set_offline(false);
        for name in ["Rural Water", "Urban Water"] {
            session.add(NewGrant::new(name, "Water pumps")).await.unwrap();
            assert_eq!(
                Some(&Notice::Success(grants_added_message(1))),
                session.take_fresh_notice()
            );
        }
        session.dismiss_notice();
        assert!(session.take_fresh_notice().is_none());
    }

    #[tokio::test]
    async fn malformed_import_is_reported_without_request() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        let requests = session.gateway.requests();
        let err = session.import(r#"[{ "grant_name": "x" }]"#).await.unwrap_err();
        assert!(err.is_malformed_input());
        assert_eq!(requests, session.gateway.requests());
        assert!(matches!(session.notice(), Some(Notice::Failure(_))));
        assert_eq!(3, session.catalog().len());
    }

    #[tokio::test]
    async fn failed_load_keeps_catalog() {
        let mut session = new_session(sample_grants());
        session.start().await.unwrap();
        session.gateway.set_offline(true);
        assert!(session.load().await.is_err());
        assert_eq!(3, session.catalog().len());
        let notice = session.notice().unwrap();
        assert!(notice.text().starts_with("Error loading grants"));

        session.gateway.set_offline(false);
        let grant = NewGrant::new("Rural Water", "Water pumps");
        assert_eq!(1, session.add(grant).await.unwrap());
        assert!(matches!(session.notice(), Some(Notice::Success(_))));
    }
}
