use super::*;
use grantdb_entities as e;

impl From<e::grant::Grant> for Grant {
    fn from(from: e::grant::Grant) -> Self {
        let e::grant::Grant {
            id,
            name,
            description,
            tags,
            website_urls,
            document_urls,
        } = from;
        Self {
            id: id.map(Into::into),
            grant_name: name,
            grant_description: description,
            tags: Some(tags),
            website_urls,
            document_urls,
        }
    }
}

impl From<Grant> for e::grant::Grant {
    fn from(from: Grant) -> Self {
        let Grant {
            id,
            grant_name,
            grant_description,
            tags,
            website_urls,
            document_urls,
        } = from;
        Self {
            id: id.map(Into::into),
            name: grant_name,
            description: grant_description,
            tags: tags.unwrap_or_default(),
            website_urls,
            document_urls,
        }
    }
}

impl From<e::grant::NewGrant> for NewGrant {
    fn from(from: e::grant::NewGrant) -> Self {
        let e::grant::NewGrant {
            name,
            description,
            website_urls,
            document_urls,
        } = from;
        Self {
            grant_name: name,
            grant_description: description,
            website_urls,
            document_urls,
        }
    }
}

impl From<NewGrant> for e::grant::NewGrant {
    fn from(from: NewGrant) -> Self {
        let NewGrant {
            grant_name,
            grant_description,
            website_urls,
            document_urls,
        } = from;
        Self {
            name: grant_name,
            description: grant_description,
            website_urls,
            document_urls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_without_tags_field_has_no_tags() {
        let grant = Grant {
            id: None,
            grant_name: "Solar Grant".into(),
            grant_description: "Panels".into(),
            tags: None,
            website_urls: None,
            document_urls: None,
        };
        let grant = e::grant::Grant::from(grant);
        assert!(grant.id.is_none());
        assert_eq!("Solar Grant", grant.name);
        assert_eq!("Panels", grant.description);
        assert!(grant.tags.is_empty());
    }

    #[test]
    fn wire_names_map_to_entity_names() {
        let grant = e::grant::Grant {
            id: Some(e::id::GrantId::new(5)),
            name: "n".into(),
            description: "d".into(),
            tags: vec!["x".into()],
            website_urls: Some(vec!["https://a".into()]),
            document_urls: None,
        };
        let wire = Grant::from(grant);
        assert_eq!(Some(5), wire.id);
        assert_eq!("n", wire.grant_name);
        assert_eq!("d", wire.grant_description);
        assert_eq!(Some(vec!["x".to_string()]), wire.tags);
        assert_eq!(Some(vec!["https://a".to_string()]), wire.website_urls);
    }
}
