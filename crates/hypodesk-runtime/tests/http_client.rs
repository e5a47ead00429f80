use hypodesk_runtime::{ApiConfig, AuthApi, Error, HttpClient, HypothesisApi};
use hypodesk_testing::{FakeBackend, MockServer, fixtures};
use hypodesk_types::wire::{SignInRequest, UpsertAction, UpsertRequest};
use hypodesk_types::{RecordId, Role};

fn client_for(server: &MockServer) -> HttpClient {
    let mut api = ApiConfig::default();
    api.override_base(server.url());
    api.timeout_secs = 5;
    HttpClient::new(&api).unwrap()
}

#[test]
fn test_list_topics_decodes_envelope() {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    let client = client_for(&server);

    let records = client.list_topics().unwrap();

    assert_eq!(records.len(), 25);
    assert_eq!(records[0].hypothesis_nm, "Topic Name 1");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/get_topic");
    assert_eq!(requests[0].api_name.as_deref(), Some("get-topic"));
}

#[test]
fn test_upsert_then_get_round_trips_through_server() {
    let server = MockServer::start(FakeBackend::new());
    let client = client_for(&server);

    let created = client
        .upsert_hypothesis(&UpsertRequest {
            hypothesis_name: "Bundle 99499".to_string(),
            details: "Deny separate payment".to_string(),
            rationale: "Competitors bundle it".to_string(),
            user_domn_id: "1".to_string(),
        })
        .unwrap();
    assert_eq!(created.action, UpsertAction::Inserted);

    let fetched = client.get_hypothesis(&created.hypothesis_id).unwrap();
    let record = fetched.data.unwrap();
    assert_eq!(record.hypothesis_nm, "Bundle 99499");
    assert_eq!(record.hypothesis_smry_txt.as_deref(), Some("Deny separate payment"));

    let get = server
        .requests()
        .into_iter()
        .find(|r| r.path == "/get-hypothesis")
        .unwrap();
    assert_eq!(
        get.query,
        vec![("hypothesis_id".to_string(), created.hypothesis_id.to_string())]
    );
}

#[test]
fn test_error_detail_becomes_api_error() {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    let client = client_for(&server);

    let err = client.get_hypothesis(&RecordId::from("missing")).unwrap_err();

    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Hypothesis missing not found");
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[test]
fn test_injected_failure_keeps_status_code() {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    server.backend().fail_next("get-topic", 503, "maintenance");
    let client = client_for(&server);

    let err = client.list_topics().unwrap_err();
    assert!(matches!(err, Error::Api { status: 503, ref message } if message == "maintenance"));

    // next call goes through
    assert_eq!(client.list_topics().unwrap().len(), 25);
}

#[test]
fn test_upload_sends_bytes_and_file_name() {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    let client = client_for(&server);

    client
        .upload_file(&RecordId::from("3"), "evidence.pdf", b"%PDF-1.7".to_vec())
        .unwrap();

    let uploads = server.backend().uploads();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].file_name, "evidence.pdf");
    assert_eq!(uploads[0].size, 8);
    assert_eq!(uploads[0].id, RecordId::from("3"));
}

#[test]
fn test_delete_uses_post_with_query() {
    let server = MockServer::start(FakeBackend::with_fixture_topics());
    let client = client_for(&server);

    client.delete_hypothesis(&RecordId::from("7")).unwrap();

    let delete = server.requests().pop().unwrap();
    assert_eq!(delete.method, "POST");
    assert_eq!(delete.path, "/delete-hypothesis");
    assert_eq!(server.backend().records().len(), 24);
}

#[test]
fn test_sign_in_sends_password_header() {
    let server = MockServer::start(FakeBackend::new().with_user("u123", "Dana Reviewer", "s3cret"));
    let client = client_for(&server);

    let lookup = client.lookup_user("u123", "compintel", Role::User).unwrap();
    assert!(lookup.user_exists);
    assert_eq!(lookup.user_name.as_deref(), Some("Dana Reviewer"));

    let request = SignInRequest {
        user_id: "u123".to_string(),
        aplctn_cd: "compintel".to_string(),
        role: "user".to_string(),
    };
    client.sign_in(&request, "s3cret").unwrap();
    let err = client.sign_in(&request, "wrong").unwrap_err();
    assert!(matches!(err, Error::Api { status: 401, .. }));

    let requests = server.requests();
    assert_eq!(requests[0].path, "/users/u123");
    assert!(requests[0]
        .query
        .contains(&("aplctn_cd".to_string(), "compintel".to_string())));
    assert!(requests[0].query.contains(&("role".to_string(), "user".to_string())));
    assert_eq!(requests[1].password.as_deref(), Some("s3cret"));
    assert_eq!(requests[1].api_name.as_deref(), Some("sign-in"));
}

#[test]
fn test_closed_port_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut api = ApiConfig::default();
    api.override_base(&format!("http://127.0.0.1:{}", port));
    api.timeout_secs = 2;
    let client = HttpClient::new(&api).unwrap();

    let err = client.list_topics().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn test_fixture_records_convert_to_topics() {
    let server = MockServer::start(FakeBackend::new().with_records(fixtures::topic_records()));
    let client = client_for(&server);

    let topics = hypodesk_runtime::records_to_topics(&client.list_topics().unwrap());
    assert_eq!(topics, fixtures::topics());
}

#[test]
fn test_user_id_is_sent_as_one_path_segment() {
    let server = MockServer::start(FakeBackend::new());
    let client = client_for(&server);

    let lookup = client.lookup_user("a/b?x#y", "compintel", Role::User).unwrap();
    assert!(!lookup.user_exists);

    let requests = server.requests();
    assert_eq!(requests[0].path, "/users/a%2Fb%3Fx%23y");
    assert_eq!(
        requests[0].query,
        vec![
            ("aplctn_cd".to_string(), "compintel".to_string()),
            ("role".to_string(), "user".to_string()),
        ]
    );
}
