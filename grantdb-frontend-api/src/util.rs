use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn decode_body<T>(status: StatusCode, body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if status.is_success() {
        serde_json::from_slice(body)
            .map_err(|err| Error::Fetch(format!("Invalid response body: {err}")))
    } else {
        match serde_json::from_slice::<grantdb_boundary::Error>(body) {
            Ok(err) => Err(err.into()),
            Err(_) => Err(Error::Fetch(format!("Unexpected response status: {status}"))),
        }
    }
}
