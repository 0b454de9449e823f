//! One-shot notices carried across post/redirect/get
//!
//! A mutation answers with a `FlashRedirect`, which stores its notices in a
//! cookie. The next page extracts them with `Flash`, renders them, and clears
//! the cookie by returning the `Flash` as a response part.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, IntoResponseParts, Response, ResponseParts},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "marquee_flash";

/// Notices left by the previous request
#[derive(Debug, Clone, Default)]
pub struct Flash {
    messages: Vec<String>,
}

impl Flash {
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let messages = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .map(|(_, value)| decode(value))
            .unwrap_or_default();

        Ok(Flash { messages })
    }
}

impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if !self.messages.is_empty() {
            let expired = format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE);
            if let Ok(value) = HeaderValue::from_str(&expired) {
                res.headers_mut().append(header::SET_COOKIE, value);
            }
        }
        Ok(res)
    }
}

/// `303 See Other` carrying notices for the next page
#[derive(Debug, Clone)]
pub struct FlashRedirect {
    location: String,
    messages: Vec<String>,
}

impl FlashRedirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            messages: Vec::new(),
        }
    }

    pub fn notice(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    pub fn notices(mut self, messages: impl IntoIterator<Item = String>) -> Self {
        self.messages.extend(messages);
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        let mut response = StatusCode::SEE_OTHER.into_response();
        let headers = response.headers_mut();

        match HeaderValue::from_str(&self.location) {
            Ok(location) => {
                headers.insert(header::LOCATION, location);
            }
            Err(e) => {
                tracing::error!("Invalid redirect location {:?}: {}", self.location, e);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }

        if !self.messages.is_empty() {
            let cookie = format!(
                "{}={}; Path=/; HttpOnly; SameSite=Lax",
                FLASH_COOKIE,
                encode(&self.messages)
            );
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                headers.append(header::SET_COOKIE, value);
            }
        }

        response
    }
}

fn encode(messages: &[String]) -> String {
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Undecodable cookies are treated as empty
fn decode(value: &str) -> Vec<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_encode_decode() {
        let messages = vec![
            "Venue The Musical Hop was successfully listed!".to_string(),
            "Error name: This field is required.".to_string(),
        ];
        assert_eq!(decode(&encode(&messages)), messages);
        assert!(decode("%%% not base64").is_empty());
    }

    #[test]
    fn test_redirect_sets_location_and_cookie() {
        let response = FlashRedirect::to("/venues")
            .notice("Venue Blue Note was successfully listed!")
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/venues");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("marquee_flash="));
    }

    #[test]
    fn test_redirect_without_notice_sets_no_cookie() {
        let response = FlashRedirect::to("/").into_response();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_extract_from_cookie_header() {
        let messages = vec!["Show was successfully listed!".to_string()];
        let request = Request::builder()
            .uri("/")
            .header(
                header::COOKIE,
                format!("theme=dark; {}={}", FLASH_COOKIE, encode(&messages)),
            )
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let flash = Flash::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(flash.messages(), messages.as_slice());
    }

    #[test]
    fn test_missing_cookie_is_empty() {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
        let flash = tokio_test::block_on(Flash::from_request_parts(&mut parts, &())).unwrap();
        assert!(flash.is_empty());
    }
}
