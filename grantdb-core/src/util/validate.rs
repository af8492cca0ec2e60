use serde_json::{Map, Value};
use thiserror::Error;

use crate::entities::*;

pub const FIELD_NAME: &str = "grant_name";
pub const FIELD_DESCRIPTION: &str = "grant_description";
pub const FIELD_WEBSITE_URLS: &str = "website_urls";
pub const FIELD_DOCUMENT_URLS: &str = "document_urls";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("No grants provided")]
    Empty,
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
    #[error("Grant #{index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("Grant #{index} is missing the required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("Grant #{index}: '{field}' must be a non-empty string")]
    InvalidField { index: usize, field: &'static str },
    #[error("Grant #{index}: '{field}' must be a list of strings")]
    InvalidUrls { index: usize, field: &'static str },
    #[error("Please fill in both grant name and description")]
    IncompleteManualEntry,
}

/// Parse a JSON batch of new grants.
///
/// Accepts a single object or an array of objects with the
/// required string fields `grant_name` and `grant_description`
/// and the optional string lists `website_urls` and `document_urls`.
/// Entries are numbered from 1 in errors.
pub fn parse_grant_batch(json: &str) -> Result<Vec<NewGrant>, MalformedInput> {
    if json.trim().is_empty() {
        return Err(MalformedInput::Empty);
    }
    let value: Value =
        serde_json::from_str(json).map_err(|err| MalformedInput::InvalidJson(err.to_string()))?;
    let entries = match value {
        Value::Array(entries) => entries,
        single => vec![single],
    };
    if entries.is_empty() {
        return Err(MalformedInput::Empty);
    }
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| new_grant_from_json(i + 1, entry))
        .collect()
}

fn new_grant_from_json(index: usize, entry: Value) -> Result<NewGrant, MalformedInput> {
    let Value::Object(mut fields) = entry else {
        return Err(MalformedInput::NotAnObject { index });
    };
    let name = required_text(&mut fields, index, FIELD_NAME)?;
    let description = required_text(&mut fields, index, FIELD_DESCRIPTION)?;
    let website_urls = optional_urls(&mut fields, index, FIELD_WEBSITE_URLS)?;
    let document_urls = optional_urls(&mut fields, index, FIELD_DOCUMENT_URLS)?;
    Ok(NewGrant {
        name,
        description,
        website_urls,
        document_urls,
    })
}

fn required_text(
    fields: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, MalformedInput> {
    match fields.remove(field) {
        None | Some(Value::Null) => Err(MalformedInput::MissingField { index, field }),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(MalformedInput::InvalidField { index, field }),
    }
}

fn optional_urls(
    fields: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<Vec<String>>, MalformedInput> {
    match fields.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(urls)) => urls
            .into_iter()
            .map(|url| match url {
                Value::String(url) => Ok(url),
                _ => Err(MalformedInput::InvalidUrls { index, field }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(MalformedInput::InvalidUrls { index, field }),
    }
}

/// Validate a grant entered by hand.
pub fn validate_manual_entry(grant: NewGrant) -> Result<NewGrant, MalformedInput> {
    if grant.name.trim().is_empty() || grant.description.trim().is_empty() {
        return Err(MalformedInput::IncompleteManualEntry);
    }
    Ok(grant)
}
