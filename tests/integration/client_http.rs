//! Integration tests for the HTTP client against a mock API server

use serde_json::json;
use vultr_cli::client::{CloudApi, VultrClient};
use vultr_cli::error::ApiError;
use vultr_cli::pagination::{walk_pages, PageRequest};
use vultr_cli::render::PageMeta;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, api_key: Option<&str>) -> VultrClient {
    VultrClient::new(format!("{}/v2", server.uri()), api_key.map(str::to_string)).unwrap()
}

#[tokio::test]
async fn test_list_os_sends_paging_query_and_reads_meta() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/os"))
        .and(query_param("per_page", "2"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "os": [
                {"id": 124, "name": "Windows 2012 R2 x64", "arch": "x64", "family": "windows"},
                {"id": 1743, "name": "Ubuntu 22.04 LTS x64", "arch": "x64", "family": "ubuntu"}
            ],
            "meta": {"total": 5, "links": {"next": "bmV4dF9fMTI0", "prev": ""}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server, None)
        .list_os(&PageRequest::new("", 2))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].family, "ubuntu");
    assert_eq!(page.meta, PageMeta::new(5, "bmV4dF9fMTI0"));
}

#[tokio::test]
async fn test_cursor_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/regions"))
        .and(query_param("cursor", "bmV4dF9fMTI0"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "regions": [{"id": "ewr", "city": "New Jersey", "country": "US",
                         "continent": "North America", "options": ["ddos_protection"]}],
            "meta": {"total": 3, "links": {"next": "", "prev": "cHJldg=="}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server, None)
        .list_regions(&PageRequest::new("bmV4dF9fMTI0", 100))
        .await
        .unwrap();

    assert_eq!(page.items[0].id, "ewr");
    assert_eq!(page.meta.next_cursor, "");
    assert_eq!(page.meta.prev_cursor, "cHJldg==");
}

#[tokio::test]
async fn test_account_uses_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "balance": 100.50, "pending_charges": 0, "last_payment_date": "",
                "last_payment_amount": 0, "name": "Acme", "email": "a@acme.com",
                "acls": ["billing"]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let account = client(&server, Some("secret-key")).get_account().await.unwrap();
    assert_eq!(account.name, "Acme");
    assert_eq!(account.balance, 100.5);
    assert_eq!(account.acls, vec!["billing"]);
}

#[tokio::test]
async fn test_missing_api_key_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, None).get_account().await.unwrap_err();
    assert!(matches!(err, ApiError::MissingApiKey));
}

#[tokio::test]
async fn test_instance_id_stays_inside_its_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account": {}})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/instances/..%2Faccount"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Invalid instance-id."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server, Some("k"));
    let err = api.get_instance("../account").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(ref m) if m == "Invalid instance-id."));

    let err = api.get_instance("a?x=y").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));

    let err = api.get_instance("..").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_rate_limit_is_reported_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/instances"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({"error": "rate limited", "status": 429})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, Some("k"))
        .list_instances(&PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::RateLimited(_)));
    assert!(err.to_string().contains("rate limited"));
}

#[tokio::test]
async fn test_plan_type_filter_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/plans"))
        .and(query_param("type", "vhf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "plans": [{"id": "vhf-1c-1gb", "vcpu_count": 1, "ram": 1024, "disk": 32,
                       "disk_count": 1, "bandwidth": 1024, "monthly_cost": 6,
                       "type": "vhf", "locations": ["ewr"]}],
            "meta": {"total": 1, "links": {"next": "", "prev": ""}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server, None)
        .list_plans(&PageRequest::default(), Some("vhf"))
        .await
        .unwrap();
    assert_eq!(page.items[0].plan_type, "vhf");
}

#[tokio::test]
async fn test_invalid_body_is_an_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/instances/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server, Some("k")).get_instance("abc").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}

#[test]
fn test_walk_pages_over_http() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/os"))
            .and(query_param_is_missing("cursor"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "os": [{"id": 1, "name": "a", "arch": "x64", "family": "f"}],
                "meta": {"total": 2, "links": {"next": "c2", "prev": ""}}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2/os"))
            .and(query_param("cursor", "c2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "os": [{"id": 2, "name": "b", "arch": "x64", "family": "f"}],
                "meta": {"total": 2, "links": {"next": "", "prev": "c1"}}
            })))
            .mount(&server)
            .await;
        server
    });

    let api = client(&server, None);
    let all = walk_pages(PageRequest::new("", 1), |request| {
        runtime.block_on(api.list_os(request))
    })
    .unwrap();

    assert_eq!(all.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 2]);
}
