//! End-to-end tests against a throwaway `tiny_http` server on `127.0.0.1:0`.

use std::io::Read;
use std::sync::mpsc;

use autoleads_config::StoreConfig;
use autoleads_core::{GeneratedLead, LeadOutcome, LeadProfile, LeadStatus, ResultRecord};
use autoleads_store::{StoreClient, StoreError};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// What the server saw for one request.
struct Seen {
    method: String,
    url: String,
    apikey: Option<String>,
    authorization: Option<String>,
    prefer: Option<String>,
    body: String,
}

fn header(request: &tiny_http::Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.to_string())
}

/// Serve one canned response per entry, then stop.
fn serve(responses: Vec<(u16, String)>) -> (String, mpsc::Receiver<Seen>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("local server has a port");
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        for (status, body) in responses {
            let Ok(mut request) = server.recv() else { return };
            let mut received = String::new();
            let _ = request.as_reader().read_to_string(&mut received);
            let _ = tx.send(Seen {
                method: request.method().to_string(),
                url: request.url().to_string(),
                apikey: header(&request, "apikey"),
                authorization: header(&request, "Authorization"),
                prefer: header(&request, "Prefer"),
                body: received,
            });
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}"), rx)
}

fn client(url: &str) -> StoreClient {
    StoreClient::new(&StoreConfig {
        url: url.into(),
        key: "anon-key".into(),
        ..StoreConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_topics_returns_rows_and_sends_auth() {
    let rows = json!([
        {"id": 1, "topic": "dentists"},
        {"id": 2, "industry": "logistics"}
    ]);
    let (url, seen) = serve(vec![(200, rows.to_string())]);

    let topics = client(&url).fetch_topics().await;

    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].resolve_text(), Some("dentists"));
    assert_eq!(topics[1].id(), &json!(2));

    let request = seen.recv().unwrap();
    assert_eq!(request.method, "GET");
    assert_eq!(request.url, "/rest/v1/target_industries?select=%2A");
    assert_eq!(request.apikey.as_deref(), Some("anon-key"));
    assert_eq!(request.authorization.as_deref(), Some("Bearer anon-key"));
}

#[tokio::test]
async fn fetch_failure_yields_empty_list() {
    let error = json!({"code": "42501", "message": "permission denied", "details": null, "hint": null});
    let (url, _seen) = serve(vec![(401, error.to_string())]);

    assert!(client(&url).fetch_topics().await.is_empty());
}

#[tokio::test]
async fn query_topics_surfaces_rejection() {
    let error = json!({"code": "42P01", "message": "relation does not exist"});
    let (url, _seen) = serve(vec![(404, error.to_string())]);

    let err = client(&url).query_topics().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Rejected { status: 404, ref message } if message.contains("42P01")
    ));
}

#[tokio::test]
async fn malformed_body_yields_empty_list() {
    let (url, _seen) = serve(vec![(200, json!({"rows": []}).to_string())]);

    assert!(client(&url).fetch_topics().await.is_empty());
}

#[tokio::test]
async fn unresolvable_host_yields_empty_list_without_request() {
    let topics = client("https://autoleads-store.invalid").fetch_topics().await;
    assert!(topics.is_empty());
}

#[tokio::test]
async fn save_posts_record_columns() {
    let (url, seen) = serve(vec![(201, String::new())]);
    let lead = GeneratedLead {
        subject: Some("S".into()),
        lead_profile: Some(LeadProfile {
            role: Some("R".into()),
            predicted_annual_revenue_usd: Some(json!(250_000)),
            ..LeadProfile::default()
        }),
        ..GeneratedLead::default()
    };
    let record = ResultRecord::new(json!(7), "gyms", &LeadOutcome::Generated(lead));

    assert!(client(&url).save(&record).await);

    let request = seen.recv().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.url, "/rest/v1/leads");
    assert_eq!(request.prefer.as_deref(), Some("return=minimal"));
    assert_eq!(request.apikey.as_deref(), Some("anon-key"));

    let body: Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body,
        json!({
            "id": record.id.to_string(),
            "source_topic_id": 7,
            "source_topic": "gyms",
            "subject": "S",
            "body_html": null,
            "value_proposition": null,
            "lead_role": "R",
            "lead_challenge": null,
            "lead_revenue": 250_000,
            "status": "GENERATED",
            "error_message": null
        })
    );
}

#[tokio::test]
async fn save_error_record() {
    let (url, seen) = serve(vec![(201, String::new())]);
    let record = ResultRecord::new(json!(8), "florists", &LeadOutcome::Failed("x".into()));

    assert!(client(&url).save(&record).await);

    let body: Value = serde_json::from_str(&seen.recv().unwrap().body).unwrap();
    assert_eq!(body["status"], json!(LeadStatus::Error.as_str()));
    assert_eq!(body["error_message"], json!("x"));
    assert_eq!(body["subject"], Value::Null);
}

#[tokio::test]
async fn rejected_insert_returns_false() {
    let error = json!({
        "code": "PGRST204",
        "message": "Could not find the 'lead_role' column of 'leads' in the schema cache",
        "details": null,
        "hint": null
    });
    let (url, _seen) = serve(vec![(400, error.to_string())]);
    let record = ResultRecord::new(json!(1), "a", &LeadOutcome::Failed("x".into()));

    assert!(!client(&url).save(&record).await);
}

#[tokio::test]
async fn unreachable_store_insert_returns_false() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let record = ResultRecord::new(json!(1), "a", &LeadOutcome::Failed("x".into()));

    let store = client(&format!("http://127.0.0.1:{port}"));
    assert!(matches!(
        store.insert_record(&record).await,
        Err(StoreError::Http(_))
    ));
    assert!(!store.save(&record).await);
}

/// Accept connections and never answer.
fn silent_store() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    std::thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn silent_store_times_out_instead_of_hanging() {
    let url = silent_store();
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(300))
        .build()
        .unwrap();
    let store = StoreClient::with_http(
        http,
        &StoreConfig {
            url,
            key: "anon-key".into(),
            ..StoreConfig::default()
        },
    );
    let record = ResultRecord::new(json!(1), "a", &LeadOutcome::Failed("x".into()));

    let rows = tokio::time::timeout(std::time::Duration::from_secs(10), store.fetch_topics())
        .await
        .expect("fetch must give up on its own");
    assert!(rows.is_empty());

    let saved = tokio::time::timeout(std::time::Duration::from_secs(10), store.save(&record))
        .await
        .expect("save must give up on its own");
    assert!(!saved);
}
