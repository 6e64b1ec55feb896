//! Retrieval of bank pages over HTTP.
//!
//! One GET is issued with automatic redirects disabled. A redirection answer
//! is followed exactly once, to its `Location` resolved against the request
//! URL. Whatever comes back then must be a success, otherwise the status code
//! is reported as `RatesError::Response`. There are no retries.
use log::debug;
use rates_common::{RatesError, Result};
use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;

/// Build the HTTP client used for page retrieval.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .map_err(request_error)
}

/// Fetch the body of `url`, following at most one redirect.
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let mut response = client.get(url).send().map_err(request_error)?;

    if response.status().is_redirection() {
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| RatesError::Request(format!("Redirect from {} without Location", url)))?;
        let target = response
            .url()
            .join(location)
            .map_err(|e| RatesError::Request(format!("Invalid redirect target {}: {}", location, e)))?;
        debug!("Following redirect {} -> {}", url, target);
        response = client.get(target).send().map_err(request_error)?;
    }

    let status = response.status();
    if !status.is_success() {
        return Err(RatesError::Response(status.as_u16()));
    }
    response.text().map_err(request_error)
}

fn request_error(err: reqwest::Error) -> RatesError {
    RatesError::Request(err.to_string())
}
