pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::grant_builder::*;

pub mod grant_builder {

    use super::*;
    use crate::{grant::*, id::*};

    #[derive(Debug)]
    pub struct GrantBuild {
        grant: Grant,
    }

    impl GrantBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.grant.id = Some(id.into());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.grant.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.grant.description = desc.into();
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.grant.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn website_urls(mut self, urls: Vec<&str>) -> Self {
            self.grant.website_urls = Some(urls.into_iter().map(Into::into).collect());
            self
        }
        pub fn document_urls(mut self, urls: Vec<&str>) -> Self {
            self.grant.document_urls = Some(urls.into_iter().map(Into::into).collect());
            self
        }
        pub fn finish(self) -> Grant {
            self.grant
        }
    }

    impl Builder for Grant {
        type Build = GrantBuild;
        fn build() -> GrantBuild {
            GrantBuild {
                grant: Grant {
                    id: None::<GrantId>,
                    name: "".into(),
                    description: "".into(),
                    tags: vec![],
                    website_urls: None,
                    document_urls: None,
                },
            }
        }
    }

    #[test]
    fn build_grant() {
        let grant = Grant::build()
            .id(7)
            .name("Solar Grant")
            .tags(vec!["energy"])
            .finish();
        assert_eq!(Some(GrantId::new(7)), grant.id);
        assert_eq!("Solar Grant", grant.name);
        assert_eq!(vec!["energy".to_string()], grant.tags);
        assert!(grant.website_urls.is_none());
    }
}
