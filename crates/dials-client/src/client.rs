//! HTTP round trips for each dial operation.

use async_trait::async_trait;
use dials_core::{Dial, DialError, DialId, DialService};
use dials_proto::{
    GetDialResponse, PatchDialRequest, PatchDialResponse, PostDialRequest, PostDialResponse,
};
use reqwest::{Client, StatusCode, Url};

/// Remote implementation of [`DialService`].
///
/// Holds the API base URL and a reusable connection pool. Cloning is cheap;
/// the pool is shared.
#[derive(Debug, Clone)]
pub struct RemoteDialService {
    base_url: Url,
    http: Client,
}

impl RemoteDialService {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self { base_url, http: Client::new() }
    }

    /// URL for the dial collection: `{base}/api/dials`.
    fn dials_url(&self) -> Result<Url, DialError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| DialError::internal("base url cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "dials"]);
        Ok(url)
    }

    /// URL for a single dial: `{base}/api/dials/{id}`, with the identifier
    /// percent-escaped as a path segment.
    fn dial_url(&self, id: &DialId) -> Result<Url, DialError> {
        let mut url = self.dials_url()?;
        url.path_segments_mut()
            .map_err(|()| DialError::internal("base url cannot be a base"))?
            .push(id.as_str());
        Ok(url)
    }
}

/// Map a response-body error string back to the shared taxonomy.
///
/// The status code does not participate in the mapping; it only selects how
/// loudly the failure is logged.
fn wire_error(status: StatusCode, message: &str) -> DialError {
    if status.is_server_error() {
        tracing::error!(%status, "dial API error: {message}");
    } else {
        tracing::debug!(%status, "dial API error: {message}");
    }
    DialError::from_wire_message(message)
}

#[async_trait]
impl DialService for RemoteDialService {
    async fn dial(&self, id: &DialId) -> Result<Option<Dial>, DialError> {
        let resp =
            self.http.get(self.dial_url(id)?).send().await.map_err(DialError::internal)?;
        let status = resp.status();

        let body: GetDialResponse = resp.json().await.map_err(DialError::internal)?;
        if let Some(message) = body.err {
            return Err(wire_error(status, &message));
        }

        // An absent dial arrives as an empty object body, not an error.
        Ok(body.dial)
    }

    async fn create_dial(&self, dial: Dial) -> Result<Dial, DialError> {
        let token = dial.token.clone();
        let req = PostDialRequest { dial: Some(dial), token: token.clone() };

        let resp = self
            .http
            .post(self.dials_url()?)
            .json(&req)
            .send()
            .await
            .map_err(DialError::internal)?;
        let status = resp.status();

        let body: PostDialResponse = resp.json().await.map_err(DialError::internal)?;
        if let Some(message) = body.err {
            return Err(wire_error(status, &message));
        }

        let mut created =
            body.dial.ok_or_else(|| DialError::internal("response missing dial"))?;

        // The server never echoes secrets; overlay the caller's token so the
        // returned dial is usable for later updates.
        created.token = token;

        Ok(created)
    }

    async fn set_level(&self, id: &DialId, token: &str, level: f64) -> Result<(), DialError> {
        let req = PatchDialRequest { id: id.clone(), token: token.to_string(), level };

        let resp = self
            .http
            .patch(self.dial_url(id)?)
            .json(&req)
            .send()
            .await
            .map_err(DialError::internal)?;
        let status = resp.status();

        let body: PatchDialResponse = resp.json().await.map_err(DialError::internal)?;
        if let Some(message) = body.err {
            return Err(wire_error(status, &message));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RemoteDialService {
        RemoteDialService::new(Url::parse("http://127.0.0.1:9999").unwrap())
    }

    #[test]
    fn dial_url_escapes_identifier() {
        let url = service().dial_url(&DialId::new("a b/c")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9999/api/dials/a%20b%2Fc");
    }

    #[test]
    fn dials_url_targets_collection() {
        assert_eq!(service().dials_url().unwrap().as_str(), "http://127.0.0.1:9999/api/dials");
    }

    #[test]
    fn wire_error_maps_known_strings() {
        let err = wire_error(StatusCode::UNAUTHORIZED, "unauthorized");
        assert_eq!(err, DialError::Unauthorized);
    }

    #[test]
    fn wire_error_collapses_unknown_strings() {
        let err = wire_error(StatusCode::INTERNAL_SERVER_ERROR, "internal error");
        assert!(matches!(err, DialError::Internal { .. }));
    }

    #[tokio::test]
    async fn unreachable_server_is_internal() {
        // Nothing listens on this port; the transport failure must surface
        // as the documented conservative default.
        let err = service().dial(&DialId::new("XXX")).await.unwrap_err();
        assert!(matches!(err, DialError::Internal { .. }));
    }
}
