//! Session identity extraction
//!
//! How the client stores its session key (cookie, local storage, ...) is
//! a transport concern outside this service. Handlers only see the opaque
//! key carried on the `X-Session-Id` header; a request without one gets a
//! fresh key and therefore an empty session.
//!
//! Keys are uuids minted by this service. A header that does not parse
//! as a uuid is treated the same as a missing one, so arbitrary header
//! bytes never reach the storage layer as a session id.

use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

/// Header carrying the opaque session key
pub const SESSION_HEADER: &str = "X-Session-Id";

/// The session key of the current request
#[derive(Clone, Debug)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for SessionKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let key = req
            .headers()
            .get(SESSION_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(|u| u.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        ready(Ok(SessionKey(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_header_key_is_used() {
        let id = Uuid::new_v4().to_string();
        let req = TestRequest::default()
            .insert_header((SESSION_HEADER, id.as_str()))
            .to_http_request();

        let key = SessionKey::extract(&req).await.unwrap();
        assert_eq!(key.as_str(), id);
    }

    #[actix_web::test]
    async fn test_missing_header_generates_fresh_key() {
        let req = TestRequest::default().to_http_request();

        let a = SessionKey::extract(&req).await.unwrap();
        let b = SessionKey::extract(&req).await.unwrap();

        assert!(!a.as_str().is_empty());
        // Each extraction without a header is a new anonymous session
        assert_ne!(a.as_str(), b.as_str());
    }

    #[actix_web::test]
    async fn test_empty_header_treated_as_missing() {
        let req = TestRequest::default()
            .insert_header((SESSION_HEADER, ""))
            .to_http_request();

        let key = SessionKey::extract(&req).await.unwrap();
        assert!(!key.as_str().is_empty());
    }

    #[actix_web::test]
    async fn test_non_uuid_header_gets_fresh_key() {
        for bad in ["../../somewhere/evil", "abc-123", "foo/bar", ".."] {
            let req = TestRequest::default()
                .insert_header((SESSION_HEADER, bad))
                .to_http_request();

            let key = SessionKey::extract(&req).await.unwrap();
            assert_ne!(key.as_str(), bad);
            assert!(Uuid::parse_str(key.as_str()).is_ok());
        }
    }
}
