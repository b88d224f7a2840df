//! Completion client tests against local HTTP stubs.

use fabula_config::{FabulaConfig, HttpSettings, ProviderSettings};
use fabula_core::{DecodingParams, Message, Provider};
use fabula_error::ProviderErrorKind;
use fabula_interface::CompletionDriver;
use fabula_models::{CompletionClient, OpenAiClient, ZelloClient};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

const BASE_DELAY_MS: u64 = 20;

/// Read one HTTP request: headers plus a Content-Length body.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    )
}

/// Serve `responses` in order, one per connection, recording each request.
async fn serve(
    responses: Vec<String>,
) -> anyhow::Result<(String, Arc<Mutex<Vec<String>>>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let request = read_request(&mut stream).await;
            recorded.lock().await.push(request);
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    Ok((base_url, requests))
}

/// Accept connections and drop them immediately, counting each one.
async fn serve_dropping() -> anyhow::Result<(String, Arc<AtomicUsize>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = connections.clone();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });

    Ok((base_url, connections))
}

fn settings(base_url: &str) -> ProviderSettings {
    ProviderSettings::new(base_url, Some("test-key".to_string()), BASE_DELAY_MS)
}

fn messages() -> Vec<Message> {
    vec![Message::system("Você é um revisor."), Message::user("Gere histórias.")]
}

#[tokio::test]
async fn test_zello_success_sends_wire_contract() -> anyhow::Result<()> {
    let body = r#"{"id":"x","choices":[{"message":{"role":"assistant","content":"História 1"}}]}"#;
    let (base_url, requests) = serve(vec![http_response("200 OK", body)]).await?;

    let client = ZelloClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;
    let text = client.complete(&messages()).await?;

    assert_eq!(text, "História 1");

    let requests = requests.lock().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert!(request.starts_with("POST /api/v1/chat/completions HTTP/1.1"));
    assert!(request.to_lowercase().contains("zello_mind_key: test-key"));
    assert!(request.to_lowercase().contains("content-type: application/json"));

    let json_start = request.find('{').ok_or_else(|| anyhow::anyhow!("no body"))?;
    let payload: serde_json::Value = serde_json::from_str(&request[json_start..])?;
    assert_eq!(payload["model"], "gpt-4o-mini");
    assert_eq!(payload["max_tokens"], 2000);
    assert_eq!(payload["messages"][0]["role"], "system");
    assert_eq!(payload["messages"][1]["role"], "user");
    assert_eq!(payload["messages"][1]["content"], "Gere histórias.");
    Ok(())
}

#[tokio::test]
async fn test_openai_uses_bearer_and_v1_path() -> anyhow::Result<()> {
    let body = r#"{"choices":[{"message":{"content":"ok"}}]}"#;
    let (base_url, requests) = serve(vec![http_response("200 OK", body)]).await?;

    let client = OpenAiClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;
    assert_eq!(client.complete(&messages()).await?, "ok");

    let requests = requests.lock().await;
    assert!(requests[0].starts_with("POST /v1/chat/completions HTTP/1.1"));
    assert!(requests[0].to_lowercase().contains("authorization: bearer test-key"));
    Ok(())
}

#[tokio::test]
async fn test_empty_choices_yield_empty_string() -> anyhow::Result<()> {
    let (base_url, _) = serve(vec![http_response("200 OK", r#"{"choices":[]}"#)]).await?;

    let client = ZelloClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;
    assert_eq!(client.complete(&messages()).await?, "");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_exhausts_three_attempts_with_backoff() -> anyhow::Result<()> {
    let (base_url, connections) = serve_dropping().await?;

    let client = ZelloClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;

    let start = Instant::now();
    let err = client
        .complete(&messages())
        .await
        .expect_err("dropped connections must fail");
    let elapsed = start.elapsed();

    match err.kind() {
        ProviderErrorKind::Unavailable { attempts, .. } => assert_eq!(*attempts, 3),
        other => panic!("expected Unavailable, got {:?}", other),
    }
    assert_eq!(connections.load(Ordering::SeqCst), 3);
    // base * 1 + base * 2, nothing after the final attempt
    assert!(elapsed >= Duration::from_millis(BASE_DELAY_MS * 3));
    Ok(())
}

#[tokio::test]
async fn test_transient_status_retried_then_succeeds() -> anyhow::Result<()> {
    let ok = r#"{"choices":[{"message":{"content":"recovered"}}]}"#;
    let (base_url, requests) = serve(vec![
        http_response("503 Service Unavailable", "busy"),
        http_response("200 OK", ok),
    ])
    .await?;

    let client = ZelloClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;
    assert_eq!(client.complete(&messages()).await?, "recovered");
    assert_eq!(requests.lock().await.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_permanent_status_fails_without_retry() -> anyhow::Result<()> {
    let (base_url, requests) = serve(vec![
        http_response("401 Unauthorized", r#"{"error":"bad key"}"#),
        http_response("200 OK", r#"{"choices":[]}"#),
    ])
    .await?;

    let client = ZelloClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;
    let err = client
        .complete(&messages())
        .await
        .expect_err("401 must not succeed");

    match err.kind() {
        ProviderErrorKind::Status { status_code, message } => {
            assert_eq!(*status_code, 401);
            assert!(message.contains("bad key"));
        }
        other => panic!("expected Status, got {:?}", other),
    }
    assert_eq!(requests.lock().await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_unparseable_body_is_provider_error() -> anyhow::Result<()> {
    let (base_url, _) = serve(vec![http_response("200 OK", "not json")]).await?;

    let client = ZelloClient::new(
        &settings(&base_url),
        &HttpSettings::default(),
        &DecodingParams::default(),
    )?;
    let err = client.complete(&messages()).await.expect_err("must fail");
    assert!(matches!(err.kind(), ProviderErrorKind::Parse(_)));
    Ok(())
}

#[test]
fn test_missing_credential_fails_before_network() -> anyhow::Result<()> {
    let config = FabulaConfig::bundled()?;

    for provider in [Provider::Zello, Provider::OpenAi] {
        let err = CompletionClient::from_config(&config, provider)
            .expect_err("bundled defaults carry no credentials");
        assert!(matches!(
            err.kind(),
            ProviderErrorKind::ConfigurationMissing(_)
        ));
    }
    Ok(())
}

#[test]
fn test_missing_base_url_is_configuration_error() {
    let settings = ProviderSettings::new("   ", Some("key".to_string()), 1000);

    let err = ZelloClient::new(&settings, &HttpSettings::default(), &DecodingParams::default())
        .expect_err("blank base URL");
    assert!(matches!(
        err.kind(),
        ProviderErrorKind::ConfigurationMissing(_)
    ));
}

#[test]
fn test_client_dispatch_selects_provider() -> anyhow::Result<()> {
    let mut config = FabulaConfig::bundled()?;
    config.providers.openai = ProviderSettings::new(
        "https://api.openai.com",
        Some("sk-test".to_string()),
        1000,
    );
    config.default_provider = Provider::OpenAi;

    let client = CompletionClient::from_default(&config)?;
    assert_eq!(client.provider(), Provider::OpenAi);
    assert_eq!(client.provider_name(), "openai");
    assert_eq!(client.model_name(), "gpt-4o-mini");

    let CompletionClient::OpenAi(inner) = &client else {
        panic!("expected the OpenAI variant");
    };
    assert_eq!(
        inner.transport().endpoint(),
        "https://api.openai.com/v1/chat/completions"
    );
    assert_eq!(
        inner.transport().schedule(),
        &[Duration::from_secs(1), Duration::from_secs(2)]
    );
    Ok(())
}
