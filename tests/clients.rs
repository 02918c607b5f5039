//! Integration tests for the app and service clients using wiremock
//!
//! Each facade method is checked for the route it hits and, on the app
//! client, for the secret guards that must fail before any request is made.

use saltedge::types::*;
use saltedge::{AppClient, ClientOptions, Credentials, Error, SecretScope, ServiceClient};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options(server: &MockServer) -> ClientOptions {
    ClientOptions::new("test-app", "test-secret").with_base_url(&format!("{}/api/v5", server.uri()))
}

fn service(server: &MockServer) -> ServiceClient {
    ServiceClient::new(&options(server)).unwrap()
}

fn app(server: &MockServer, customer_secret: Option<&str>, connection_secret: Option<&str>) -> AppClient {
    let mut opts = options(server);
    opts.customer_secret = customer_secret.map(str::to_string);
    opts.connection_secret = connection_secret.map(str::to_string);
    AppClient::new(&opts).unwrap()
}

/// Mount a catch-all mock that must never be hit
async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

mod construction_tests {
    use super::*;

    #[test]
    fn test_missing_credentials_is_configuration_error() {
        let err = Credentials::resolve(&ClientOptions::default(), |_| None).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let opts = ClientOptions::new("app", "secret").with_base_url("::not a url::");
        assert!(matches!(ServiceClient::new(&opts), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_default_base_url() {
        let client = ServiceClient::new(&ClientOptions::new("app", "secret")).unwrap();
        assert_eq!(client.requester().base_url(), saltedge::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_app_client_secrets_can_be_replaced() {
        let opts = ClientOptions::new("app", "secret").with_customer_secret("first");
        let mut client = AppClient::new(&opts).unwrap();
        assert_eq!(client.customer_secret(), Some("first"));
        client.set_customer_secret(Some("second".to_string()));
        assert_eq!(client.customer_secret(), Some("second"));
        client.set_connection_secret(None);
        assert_eq!(client.connection_secret(), None);
    }
}

mod shared_facade_tests {
    use super::*;

    #[tokio::test]
    async fn test_countries_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/countries"))
            .and(query_param("include_fake_providers", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"code": "XF", "name": "Fake Country", "refresh_start_time": 2}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let options = CountryListOptions {
            include_fake_providers: Some(true),
        };
        let countries = assert_ok!(client.countries().list(Some(&options)).await);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].code, "XF");
        assert_eq!(countries[0].refresh_start_time, 2);
    }

    #[tokio::test]
    async fn test_providers_show_and_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/providers/fakebank_simple_xf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"code": "fakebank_simple_xf", "name": "Fakebank Simple", "mode": "web"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v5/providers"))
            .and(query_param("country_code", "XF"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"code": "fakebank_simple_xf", "mode": "oauth"}, {"code": "x", "mode": "future_mode"}],
                "meta": {"next_id": null, "next_page": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);

        let provider = assert_ok!(
            client
                .providers()
                .show(&ProviderShowOptions::new("fakebank_simple_xf"))
                .await
        );
        assert_eq!(provider.name, "Fakebank Simple");
        assert_eq!(provider.mode, ProviderMode::Web);

        let options = ProviderListOptions {
            country_code: Some("XF".to_string()),
            ..ProviderListOptions::default()
        };
        let providers = assert_ok!(assert_ok!(client.providers().list(Some(&options))).collect_all().await);
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].mode, ProviderMode::Oauth);
        assert_eq!(providers[1].mode, ProviderMode::Other("future_mode".to_string()));
    }
}

mod service_tests {
    use super::*;

    #[tokio::test]
    async fn test_customer_routes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v5/customers"))
            .and(body_json(json!({"data": {"identifier": "me@example.com"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "7", "identifier": "me@example.com", "secret": "s3"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v5/customers/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "7", "identifier": "me@example.com"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/v5/customers/7/lock"))
            .and(body_json(json!({"data": {}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "7", "locked": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v5/customers/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "7", "deleted": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let customers = client.customers();
        let id = CustomerIdOptions::new("7");

        let created = assert_ok!(
            customers
                .create(&CustomerCreateOptions {
                    identifier: "me@example.com".to_string(),
                })
                .await
        );
        assert_eq!(created.secret, "s3");
        assert_eq!(assert_ok!(customers.show(&id).await).identifier, "me@example.com");
        assert!(assert_ok!(customers.lock(&id).await).locked);
        assert!(assert_ok!(customers.remove(&id).await).deleted);
    }

    #[tokio::test]
    async fn test_connection_update_uses_query() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v5/connections/42"))
            .and(query_param("status", "inactive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "42", "status": "inactive"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let options = ConnectionScoped::new(
            "42",
            ConnectionUpdateOptions {
                status: Some("inactive".to_string()),
                ..ConnectionUpdateOptions::default()
            },
        );
        let connection = assert_ok!(client.connections().update(&options).await);
        assert_eq!(connection.status, Status::Inactive);
    }

    #[tokio::test]
    async fn test_connection_refresh_is_an_action() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v5/connections/42/refresh"))
            .and(body_json(json!({"data": {"daily_refresh": true}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "42"}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let options = ConnectionScoped::new(
            "42",
            ConnectionRefreshOptions {
                daily_refresh: Some(true),
                ..ConnectionRefreshOptions::default()
            },
        );
        assert_eq!(assert_ok!(client.connections().refresh(&options).await).id, "42");
    }

    #[tokio::test]
    async fn test_accounts_list_scoped_by_owner() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/accounts"))
            .and(query_param("connection_id", "42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "a1", "balance": 10.5, "currency_code": "EUR"}],
                "meta": {"next_id": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let options = OwnerScoped::connection("42", PageOptions::default());
        let accounts = assert_ok!(assert_ok!(client.accounts().list(&options)).collect_all().await);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].balance, 10.5);
    }

    #[tokio::test]
    async fn test_consent_revoke_sends_owner_as_query() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v5/consents/9/revoke"))
            .and(query_param("customer_id", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "9", "revoked_at": "2020-01-01T00:00:00Z"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let options = OwnerScoped::customer("7", ConsentIdOptions::new("9"));
        let consent = assert_ok!(client.consents().revoke(&options).await);
        assert!(consent.revoked_at.is_some());
    }

    #[tokio::test]
    async fn test_transactions_list_and_remove() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/transactions"))
            .and(query_param("connection_id", "42"))
            .and(query_param("account_id", "a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "t1", "amount": -3.0, "status": "posted"}],
                "meta": {"next_id": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v5/transactions"))
            .and(body_json(json!({"data": {"customer_id": "7", "account_id": "a1", "keep_days": 0}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"cleanup_started": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);
        let options = ConnectionScoped::new(
            "42",
            TransactionListOptions {
                account_id: Some("a1".to_string()),
                ..TransactionListOptions::default()
            },
        );
        let mut pages = assert_ok!(client.transactions().list(&options));
        let page = assert_ok!(pages.next_page().await).unwrap();
        assert_eq!(page.items[0].status, TransactionStatus::Posted);

        let removed = assert_ok!(
            client
                .transactions()
                .remove(&CustomerScoped::new(
                    "7",
                    TransactionRemoveOptions {
                        account_id: "a1".to_string(),
                        keep_days: 0,
                    },
                ))
                .await
        );
        assert!(removed.cleanup_started);
    }

    #[tokio::test]
    async fn test_session_and_duplicate_calls_carry_owner_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v5/connect_sessions/create"))
            .and(body_json(json!({"data": {
                "customer_id": "7",
                "consent": {"scopes": ["account_details"]},
                "daily_refresh": true
            }})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"connect_url": "https://www.saltedge.com/connect?token=t", "expires_at": "2030-01-01T00:00:00Z"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/v5/connect_sessions/refresh"))
            .and(body_json(json!({"data": {"connection_id": "42"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"connect_url": "https://www.saltedge.com/connect?token=r"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/v5/transactions/duplicate"))
            .and(body_json(json!({"data": {"customer_id": "7", "transaction_ids": ["t1"]}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"duplicated": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = service(&server);

        let mut session = ConnectSessionCreateOptions::new(ConsentParams::new(vec![ConsentScope::AccountDetails]));
        session.settings.daily_refresh = Some(true);
        let created = assert_ok!(
            client
                .connect_sessions()
                .create(&CustomerScoped::new("7", session))
                .await
        );
        assert!(created.connect_url.ends_with("token=t"));

        let refreshed = assert_ok!(
            client
                .connect_sessions()
                .refresh(&ConnectionScoped::new("42", ConnectSessionRefreshOptions::default()))
                .await
        );
        assert!(refreshed.connect_url.ends_with("token=r"));

        let duplicated = assert_ok!(
            client
                .transactions()
                .duplicate(&CustomerScoped::new(
                    "7",
                    TransactionIdsOptions {
                        transaction_ids: vec!["t1".to_string()],
                    },
                ))
                .await
        );
        assert!(duplicated.duplicated);
    }

    #[tokio::test]
    async fn test_remote_error_reaches_facade_caller() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/customers/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"class": "CustomerNotFound", "message": "Customer not found"},
                "request": {}
            })))
            .mount(&server)
            .await;

        let client = service(&server);
        let err = assert_err!(client.customers().show(&CustomerIdOptions::new("404")).await);
        assert!(err.remote().unwrap().is_class("CustomerNotFound"));
    }
}

mod app_tests {
    use super::*;

    fn consent() -> ConsentParams {
        ConsentParams::new(vec![ConsentScope::AccountDetails, ConsentScope::TransactionsDetails])
    }

    #[tokio::test]
    async fn test_customer_scope_requires_customer_secret() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;

        let client = app(&server, None, None);
        let err = assert_err!(
            client
                .connect_sessions()
                .create(&ConnectSessionCreateOptions::new(consent()))
                .await
        );
        assert!(matches!(err, Error::MissingCredential(SecretScope::Customer)));
        assert_eq!(err.to_string(), "please provide customer secret");
    }

    #[tokio::test]
    async fn test_connection_scope_requires_both_secrets() {
        let server = MockServer::start().await;
        expect_no_requests(&server).await;

        let client = app(&server, None, Some("conn"));
        assert!(matches!(
            client.connections().show().await,
            Err(Error::MissingCredential(SecretScope::Customer))
        ));

        let client = app(&server, Some("cust"), None);
        assert!(matches!(
            client.connections().show().await,
            Err(Error::MissingCredential(SecretScope::Connection))
        ));
        assert!(matches!(
            client.accounts().list(None),
            Err(Error::MissingCredential(SecretScope::Connection))
        ));
        assert!(matches!(
            client.consents().revoke(&ConsentIdOptions::new("1")).await,
            Err(Error::MissingCredential(SecretScope::Connection))
        ));
    }

    #[tokio::test]
    async fn test_connect_session_sends_customer_secret() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v5/connect_sessions/create"))
            .and(header("Customer-secret", "cust"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"connect_url": "https://www.saltedge.com/connect?token=t", "expires_at": "2030-01-01T00:00:00Z"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = app(&server, Some("cust"), None);
        let session = assert_ok!(
            client
                .connect_sessions()
                .create(&ConnectSessionCreateOptions::new(consent()))
                .await
        );
        assert!(session.connect_url.contains("token=t"));
    }

    #[tokio::test]
    async fn test_connection_routes_use_secret_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/connections"))
            .and(header("Customer-secret", "cust"))
            .and(header("Connection-secret", "conn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "42", "status": "active"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v5/connection"))
            .and(header("Connection-secret", "conn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"id": "42", "removed": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = app(&server, Some("cust"), Some("conn"));
        let connection = assert_ok!(client.connections().show().await);
        assert_eq!(connection.status, Status::Active);
        assert!(assert_ok!(client.connections().remove().await).removed);
    }

    #[tokio::test]
    async fn test_consent_revoke_is_an_action() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v5/consents/7/revoke"))
            .and(body_json(json!({"data": {}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "7"}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = app(&server, Some("cust"), Some("conn"));
        let consent = assert_ok!(client.consents().revoke(&ConsentIdOptions::new("7")).await);
        assert_eq!(consent.id, "7");
    }

    #[tokio::test]
    async fn test_transactions_paginate_with_secrets() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v5/transactions/pending"))
            .and(header("Connection-secret", "conn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "t1", "status": "pending"}],
                "meta": {"next_id": null}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = app(&server, Some("cust"), Some("conn"));
        let pending = assert_ok!(assert_ok!(client.transactions().pending(None)).collect_all().await);
        assert_eq!(pending[0].status, TransactionStatus::Pending);
    }
}
