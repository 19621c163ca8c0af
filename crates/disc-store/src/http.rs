//! HTTP client for the remote record store.
//!
//! Speaks a plain keyed-document REST API: `GET {base}/{collection}` lists
//! all documents as a JSON array, `GET`/`PUT {base}/{collection}/{uid}`
//! fetch and upsert a single document.

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};

use crate::{DiscRecord, RecordStore, StoreError};

/// Blocking HTTP implementation of [`RecordStore`].
pub struct HttpStore {
    http: Client,
    base_url: String,
    collection: String,
    auth_token: Option<String>,
}

impl HttpStore {
    pub fn new(
        base_url: impl Into<String>,
        collection: impl Into<String>,
        auth_token: Option<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            collection: collection.into(),
            auth_token,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    fn document_url(&self, uid: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.collection, uid)
    }

    fn with_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Read the body and turn non-success statuses into [`StoreError::Api`].
    fn read_success_body(resp: Response) -> Result<String, StoreError> {
        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

impl RecordStore for HttpStore {
    fn list_all(&self) -> Result<Vec<DiscRecord>, StoreError> {
        let resp = self.with_auth(self.http.get(self.collection_url())).send()?;
        let body = Self::read_success_body(resp)?;
        let records: Vec<DiscRecord> = serde_json::from_str(&body)?;
        tracing::debug!(count = records.len(), "Listed records from store");
        Ok(records)
    }

    fn get(&self, uid: &str) -> Result<Option<DiscRecord>, StoreError> {
        let resp = self.with_auth(self.http.get(self.document_url(uid))).send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = Self::read_success_body(resp)?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    fn set(&self, record: &DiscRecord) -> Result<(), StoreError> {
        let resp = self
            .with_auth(self.http.put(self.document_url(&record.uid)).json(record))
            .send()?;
        Self::read_success_body(resp)?;
        tracing::debug!(uid = %record.uid, "Stored record");
        Ok(())
    }
}
