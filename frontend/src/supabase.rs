use gloo_console::log;
use gloo_net::http::Request;
use thiserror::Error;

use crate::application::ApplicationRecord;
use crate::config;

#[derive(Debug, Error)]
pub enum InsertError {
    #[error("data store is not configured (SUPABASE_URL / SUPABASE_ANON_KEY)")]
    NotConfigured,
    #[error("failed to build request: {0}")]
    Request(gloo_net::Error),
    #[error("network error: {0}")]
    Network(gloo_net::Error),
    #[error("insert rejected with status {status}: {body}")]
    Status { status: u16, body: String },
}

pub fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Inserts one row into the `applications` table through the PostgREST API.
pub async fn insert_application(record: &ApplicationRecord) -> Result<(), InsertError> {
    let base_url = config::get_supabase_url();
    let anon_key = config::get_supabase_anon_key();
    if base_url.is_empty() || anon_key.is_empty() {
        return Err(InsertError::NotConfigured);
    }

    let response = Request::post(&table_endpoint(base_url, config::APPLICATIONS_TABLE))
        .header("apikey", anon_key)
        .header("Authorization", &format!("Bearer {}", anon_key))
        .header("Prefer", "return=minimal")
        .json(record)
        .map_err(InsertError::Request)?
        .send()
        .await
        .map_err(InsertError::Network)?;

    if response.ok() {
        log!("Application inserted");
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(InsertError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            table_endpoint("https://abc.supabase.co/", "applications"),
            "https://abc.supabase.co/rest/v1/applications"
        );
        assert_eq!(
            table_endpoint("http://localhost:54321", "applications"),
            "http://localhost:54321/rest/v1/applications"
        );
    }

    #[test]
    fn status_error_mentions_code() {
        let err = InsertError::Status {
            status: 409,
            body: "duplicate key".to_string(),
        };
        assert_eq!(err.to_string(), "insert rejected with status 409: duplicate key");
    }
}
