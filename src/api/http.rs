//! HTTP layer for Salt Edge REST calls
//!
//! [`Requester`] is the only place that touches the network. Every other
//! call shape (`create`, `show`, `list`, ...) builds a [`RequestSpec`] and
//! goes through [`Requester::request`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use url::Url;

use super::error::{Error, RemoteApiError, Result, SecretScope};
use super::pagination::{Page, Paginator};
use super::query;
use crate::config::{Credentials, DEFAULT_BASE_URL};

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

const APP_ID_HEADER: &str = "App-id";
const SECRET_HEADER: &str = "Secret";
const CUSTOMER_SECRET_HEADER: &str = "Customer-secret";
const CONNECTION_SECRET_HEADER: &str = "Connection-secret";

/// Request parameters: an insertion-ordered JSON object
pub type Params = Map<String, Value>;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let total = body.chars().count();
    let truncated = if total > MAX_LOG_BODY_LENGTH {
        let head: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", head, body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Serialize typed options into request parameters.
///
/// `null` (e.g. `None` options) becomes an empty map.
pub fn to_params<S: Serialize + ?Sized>(options: &S) -> Result<Params> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "request parameters must serialize to an object, got {}",
            other
        ))
        .into()),
    }
}

/// Pull the `data` field out of a decoded response body
pub fn decode_data<T: DeserializeOwned>(mut response: Value) -> Result<T> {
    let data = response
        .as_object_mut()
        .and_then(|body| body.remove("data"))
        .unwrap_or(Value::Null);
    Ok(serde_json::from_value(data)?)
}

/// Remove the identifier field from `params` and render it as an encoded
/// path segment.
fn take_identifier(params: &mut Params, id_field: &str) -> Result<String> {
    match params.shift_remove(id_field) {
        Some(Value::Null) | None => Err(Error::MissingIdentifier(id_field.to_string())),
        Some(value) => Ok(urlencoding::encode(&query::scalar_to_string(&value)).into_owned()),
    }
}

fn wrap_data(data: Value) -> Value {
    json!({ "data": data })
}

/// A single HTTP call, described as data
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    /// Path relative to the base URL, starting with `/`
    pub path: String,
    pub query: Option<Params>,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    pub fn with_query(mut self, query: Params) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Owns credentials and performs every HTTP round trip
#[derive(Clone)]
pub struct Requester {
    client: Client,
    base_url: String,
    credentials: Credentials,
    customer_secret: Option<String>,
    connection_secret: Option<String>,
}

impl std::fmt::Debug for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requester")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("customer_secret", &self.customer_secret.as_ref().map(|_| "<set>"))
            .field("connection_secret", &self.connection_secret.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl Requester {
    /// Create a requester against `base_url` (defaults to the production API)
    pub fn new(credentials: Credentials, base_url: Option<&str>) -> Result<Self> {
        let base_url = base_url
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Url::parse(&base_url)?;

        let client = Client::builder()
            .user_agent(concat!("saltedge-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
            customer_secret: None,
            connection_secret: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn app_id(&self) -> &str {
        &self.credentials.app_id
    }

    pub fn customer_secret(&self) -> Option<&str> {
        self.customer_secret.as_deref()
    }

    /// Takes effect from the next call onwards
    pub fn set_customer_secret(&mut self, secret: Option<String>) {
        self.customer_secret = secret.filter(|s| !s.is_empty());
    }

    pub fn connection_secret(&self) -> Option<&str> {
        self.connection_secret.as_deref()
    }

    /// Takes effect from the next call onwards
    pub fn set_connection_secret(&mut self, secret: Option<String>) {
        self.connection_secret = secret.filter(|s| !s.is_empty());
    }

    pub fn assert_customer_secret(&self) -> Result<()> {
        if self.customer_secret.is_none() {
            return Err(Error::MissingCredential(SecretScope::Customer));
        }
        Ok(())
    }

    pub fn assert_connection_secret(&self) -> Result<()> {
        if self.connection_secret.is_none() {
            return Err(Error::MissingCredential(SecretScope::Connection));
        }
        Ok(())
    }

    /// Absolute URL for `path`, with an encoded query string when `query`
    /// is non-empty
    pub fn url_for(&self, path: &str, query: Option<&Params>) -> Result<Url> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            let encoded = query::encode(query);
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
        }
        Ok(Url::parse(&url)?)
    }

    /// Perform one HTTP call and return the decoded body unmodified.
    ///
    /// Any status >= 400 becomes [`Error::Remote`] when the body is a Salt
    /// Edge error record, [`Error::UnexpectedResponse`] otherwise.
    pub async fn request(&self, spec: RequestSpec) -> Result<Value> {
        let url = self.url_for(&spec.path, spec.query.as_ref())?;
        tracing::debug!("{} {}", spec.method, url);

        let mut request = self
            .client
            .request(spec.method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(APP_ID_HEADER, &self.credentials.app_id)
            .header(SECRET_HEADER, &self.credentials.secret);

        if let Some(secret) = &self.customer_secret {
            request = request.header(CUSTOMER_SECRET_HEADER, secret);
        }
        if let Some(secret) = &self.connection_secret {
            request = request.header(CONNECTION_SECRET_HEADER, secret);
        }
        if let Some(body) = &spec.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            return Err(match RemoteApiError::from_body(&body, status.as_u16()) {
                Some(remote) => Error::Remote(remote),
                None => Error::UnexpectedResponse {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        // Handle empty response
        if body.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// `POST path` with body `{"data": data}`
    pub async fn create<T: DeserializeOwned>(&self, path: &str, data: Option<Value>) -> Result<T> {
        let body = match data {
            Some(data) => wrap_data(data),
            None => json!({}),
        };
        let spec = RequestSpec::new(Method::POST, path).with_body(body);
        decode_data(self.request(spec).await?)
    }

    /// `GET path?query`
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Option<Params>) -> Result<T> {
        let mut spec = RequestSpec::new(Method::GET, path);
        if let Some(query) = query {
            spec = spec.with_query(query);
        }
        decode_data(self.request(spec).await?)
    }

    /// `PUT path` with body `{"data": data}`
    pub async fn put<T: DeserializeOwned>(&self, path: &str, data: Value) -> Result<T> {
        let spec = RequestSpec::new(Method::PUT, path).with_body(wrap_data(data));
        decode_data(self.request(spec).await?)
    }

    /// `GET path/<id>?rest`, where `<id>` is taken out of `query[id_field]`
    pub async fn show<T: DeserializeOwned>(
        &self,
        path: &str,
        mut query: Params,
        id_field: &str,
    ) -> Result<T> {
        let id = take_identifier(&mut query, id_field)?;
        let spec = RequestSpec::new(Method::GET, format!("{}/{}", path, id)).with_query(query);
        decode_data(self.request(spec).await?)
    }

    /// `GET path?query`, decoded as one page of a cursor-paginated list
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Params>,
    ) -> Result<Page<T>> {
        let mut spec = RequestSpec::new(Method::GET, path);
        if let Some(query) = query {
            spec = spec.with_query(query);
        }
        Page::from_response(self.request(spec).await?)
    }

    /// Lazy page sequence over `list`; no request is made until the first
    /// [`Paginator::next_page`]
    pub fn paginate<T: DeserializeOwned>(&self, path: &str, query: Option<Params>) -> Paginator<'_, T> {
        Paginator::new(self, path, query.unwrap_or_default())
    }

    /// `DELETE path/<id>?rest`
    pub async fn remove<T: DeserializeOwned>(
        &self,
        path: &str,
        mut query: Params,
        id_field: &str,
    ) -> Result<T> {
        let id = take_identifier(&mut query, id_field)?;
        let spec = RequestSpec::new(Method::DELETE, format!("{}/{}", path, id)).with_query(query);
        decode_data(self.request(spec).await?)
    }

    /// `PUT path/<id>/<action>` with the remaining data as body
    pub async fn action<T: DeserializeOwned>(
        &self,
        path: &str,
        mut data: Params,
        action: &str,
        id_field: &str,
    ) -> Result<T> {
        let id = take_identifier(&mut data, id_field)?;
        let spec = RequestSpec::new(Method::PUT, format!("{}/{}/{}", path, id, action))
            .with_body(wrap_data(Value::Object(data)));
        decode_data(self.request(spec).await?)
    }

    /// `PUT path/<id>/<action>?rest`
    pub async fn action_query<T: DeserializeOwned>(
        &self,
        path: &str,
        mut query: Params,
        action: &str,
        id_field: &str,
    ) -> Result<T> {
        let id = take_identifier(&mut query, id_field)?;
        let spec = RequestSpec::new(Method::PUT, format!("{}/{}/{}", path, id, action))
            .with_query(query);
        decode_data(self.request(spec).await?)
    }

    /// `PUT path/<id>?rest`.
    ///
    /// The remaining fields travel as query parameters, not as a body.
    pub async fn update<T: DeserializeOwned>(
        &self,
        path: &str,
        mut data: Params,
        id_field: &str,
    ) -> Result<T> {
        let id = take_identifier(&mut data, id_field)?;
        let spec = RequestSpec::new(Method::PUT, format!("{}/{}", path, id)).with_query(data);
        decode_data(self.request(spec).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requester() -> Requester {
        let credentials = Credentials {
            app_id: "app".to_string(),
            secret: "secret".to_string(),
        };
        Requester::new(credentials, Some("https://example.test/api/v5/")).unwrap()
    }

    fn params(v: Value) -> Params {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_sanitize_for_log_truncates() {
        let body = "x".repeat(500);
        let out = sanitize_for_log(&body);
        assert!(out.starts_with(&"x".repeat(200)));
        assert!(out.contains("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_for_log_handles_multibyte() {
        let body = "é".repeat(300);
        let out = sanitize_for_log(&body);
        assert!(out.contains("truncated"));
    }

    #[test]
    fn test_url_for_omits_empty_query() {
        let r = requester();
        assert_eq!(
            r.url_for("/countries", Some(&Params::new())).unwrap().as_str(),
            "https://example.test/api/v5/countries"
        );
        assert_eq!(
            r.url_for("/countries", None).unwrap().as_str(),
            "https://example.test/api/v5/countries"
        );
    }

    #[test]
    fn test_url_for_appends_query() {
        let r = requester();
        let url = r
            .url_for("/providers", Some(&params(json!({"country_code": "XF", "per_page": 2}))))
            .unwrap();
        assert_eq!(url.as_str(), "https://example.test/api/v5/providers?country_code=XF&per_page=2");
    }

    #[test]
    fn test_take_identifier_removes_field_and_encodes() {
        let mut q = params(json!({"extra": "y", "id": "a b/c"}));
        let id = take_identifier(&mut q, "id").unwrap();
        assert_eq!(id, "a%20b%2Fc");
        assert_eq!(q, params(json!({"extra": "y"})));
    }

    #[test]
    fn test_take_identifier_renders_numbers() {
        let mut q = params(json!({"customer_id": 7}));
        assert_eq!(take_identifier(&mut q, "customer_id").unwrap(), "7");
    }

    #[test]
    fn test_take_identifier_missing_field() {
        let mut q = params(json!({"extra": "y"}));
        let err = take_identifier(&mut q, "id").unwrap_err();
        assert!(matches!(err, Error::MissingIdentifier(ref f) if f == "id"));

        let mut q = params(json!({"id": null}));
        assert!(matches!(
            take_identifier(&mut q, "id"),
            Err(Error::MissingIdentifier(_))
        ));
    }

    #[test]
    fn test_secret_guards() {
        let mut r = requester();
        assert!(matches!(
            r.assert_customer_secret(),
            Err(Error::MissingCredential(SecretScope::Customer))
        ));
        assert!(matches!(
            r.assert_connection_secret(),
            Err(Error::MissingCredential(SecretScope::Connection))
        ));

        r.set_customer_secret(Some("cs".to_string()));
        r.set_connection_secret(Some("cn".to_string()));
        assert!(r.assert_customer_secret().is_ok());
        assert!(r.assert_connection_secret().is_ok());

        r.set_customer_secret(Some(String::new()));
        assert!(r.assert_customer_secret().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut r = requester();
        r.set_customer_secret(Some("very-secret".to_string()));
        let printed = format!("{:?}", r);
        assert!(!printed.contains("very-secret"));
        assert!(!printed.contains("\"secret\""));
    }

    #[test]
    fn test_to_params() {
        #[derive(Serialize)]
        struct Opts {
            a: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            b: Option<String>,
        }
        let p = to_params(&Opts { a: 1, b: None }).unwrap();
        assert_eq!(p, params(json!({"a": 1})));
        assert!(to_params(&Option::<Opts>::None).unwrap().is_empty());
        assert!(matches!(to_params(&5), Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_data_extracts_payload() {
        let body = json!({"data": {"id": "1", "nested": {"k": [1, 2]}}, "meta": {}});
        let data: Value = decode_data(body).unwrap();
        assert_eq!(data, json!({"id": "1", "nested": {"k": [1, 2]}}));
    }

    #[test]
    fn test_invalid_base_url() {
        let credentials = Credentials {
            app_id: "app".to_string(),
            secret: "secret".to_string(),
        };
        let err = Requester::new(credentials, Some("not a url")).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
