//! End-to-end tests against a throwaway `tiny_http` server on `127.0.0.1:0`.

use std::sync::mpsc;

use autoleads_core::Generation;
use autoleads_generator::GeneratorClient;
use serde_json::json;

/// Serve one canned response per entry, then stop. Each received request URL
/// is sent back on the returned channel.
fn serve(responses: Vec<(u16, String)>) -> (String, mpsc::Receiver<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local server");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("local server has a port");
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        for (status, body) in responses {
            let Ok(request) = server.recv() else { return };
            let _ = tx.send(request.url().to_string());
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

#[tokio::test]
async fn success_body_returns_payload() {
    let body = json!({
        "success": true,
        "topic": "veterinary clinics",
        "generated_data": {
            "subject": "More booked appointments",
            "lead_profile": {"role": "Clinic Owner"}
        }
    });
    let (base_url, urls) = serve(vec![(200, body.to_string())]);
    let client = GeneratorClient::new(&base_url).unwrap();

    let generation = client.generate("veterinary clinics").await;

    assert_eq!(
        generation,
        Generation::Success(json!({
            "subject": "More booked appointments",
            "lead_profile": {"role": "Clinic Owner"}
        }))
    );
    assert_eq!(
        urls.recv().unwrap(),
        "/api/generate?topic=veterinary%20clinics"
    );
}

#[tokio::test]
async fn success_false_body_returns_message() {
    let body = json!({"success": false, "message": "x"});
    let (base_url, _urls) = serve(vec![(200, body.to_string())]);
    let client = GeneratorClient::new(&base_url).unwrap();

    assert_eq!(
        client.generate("bakeries").await,
        Generation::Failure("x".into())
    );
}

#[tokio::test]
async fn error_status_is_http_failure() {
    let body = json!({"success": false, "message": "Failed to call Gemini API"});
    let (base_url, _urls) = serve(vec![(500, body.to_string())]);
    let client = GeneratorClient::new(&base_url).unwrap();

    let Generation::Failure(message) = client.generate("bakeries").await else {
        panic!("expected failure");
    };
    assert!(message.starts_with("HTTP Request Failed: 500"), "{message}");
}

#[tokio::test]
async fn non_json_body_is_http_failure() {
    let (base_url, _urls) = serve(vec![(200, "<html>gateway</html>".to_string())]);
    let client = GeneratorClient::new(&base_url).unwrap();

    let Generation::Failure(message) = client.generate("bakeries").await else {
        panic!("expected failure");
    };
    assert!(message.starts_with("HTTP Request Failed:"), "{message}");
}

#[tokio::test]
async fn unreachable_api_is_http_failure() {
    // Bind and immediately drop to get a port with nothing listening.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = GeneratorClient::new(&format!("http://127.0.0.1:{port}")).unwrap();

    let Generation::Failure(message) = client.generate("bakeries").await else {
        panic!("expected failure");
    };
    assert!(message.starts_with("HTTP Request Failed:"), "{message}");
}

#[tokio::test]
async fn silent_api_times_out_as_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    std::thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(300))
        .build()
        .unwrap();
    let client = GeneratorClient::with_http(http, &format!("http://127.0.0.1:{port}"));

    let generation = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        client.generate("bakeries"),
    )
    .await
    .expect("generate must give up on its own");
    let Generation::Failure(message) = generation else {
        panic!("expected failure");
    };
    assert!(message.starts_with("HTTP Request Failed:"), "{message}");
}
