//! Integration tests for the chat-completion provider against a local
//! HTTP stub.

use quill_llm::{ChatCompletionProvider, LlmError, ProviderKind};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve canned HTTP responses, one per connection, and return the raw requests.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut socket).await);

            let reply = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }
        requests
    });

    (format!("http://{}/v1/chat/completions", addr), handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
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

fn provider(kind: ProviderKind, endpoint: &str) -> ChatCompletionProvider {
    ChatCompletionProvider::new(kind, Some("sk-test".to_string()))
        .unwrap()
        .with_endpoint(endpoint)
}

#[tokio::test]
async fn test_successful_completion() {
    let (endpoint, server) = serve(vec![(
        200,
        r#"{"choices":[{"message":{"role":"assistant","content":"1. First point [Transcript]"}}]}"#,
    )])
    .await;

    let text = provider(ProviderKind::OpenAi, &endpoint)
        .complete("Extract the key points")
        .await
        .unwrap();
    assert_eq!(text, "1. First point [Transcript]");

    let requests = server.await.unwrap();
    let request = &requests[0];
    assert!(request.starts_with("POST /v1/chat/completions"));
    assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
    assert!(request.contains(r#""role":"user""#));
    assert!(request.contains(r#""content":"Extract the key points""#));
    assert!(request.contains(r#""max_tokens":1000"#));
}

#[tokio::test]
async fn test_perplexity_sends_sampling_extras() {
    let (endpoint, server) = serve(vec![(200, r#"{"choices":[]}"#)]).await;

    let text = provider(ProviderKind::Perplexity, &endpoint)
        .complete("prompt")
        .await
        .unwrap();
    assert_eq!(text, "");

    let requests = server.await.unwrap();
    assert!(requests[0].contains(r#""top_p":0.9"#));
    assert!(requests[0].contains(r#""frequency_penalty":1.0"#));
}

#[tokio::test]
async fn test_malformed_body_degrades_to_empty() {
    let (endpoint, _server) = serve(vec![(200, "<html>not json</html>")]).await;

    let text = provider(ProviderKind::OpenAi, &endpoint)
        .complete("prompt")
        .await
        .unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_non_success_status_is_upstream_error() {
    let (endpoint, _server) = serve(vec![(401, r#"{"error":"invalid api key"}"#)]).await;

    let result = provider(ProviderKind::OpenAi, &endpoint)
        .complete("prompt")
        .await;

    match result {
        Err(LlmError::Upstream { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let (endpoint, server) = serve(vec![(503, "overloaded")]).await;

    let result = provider(ProviderKind::OpenAi, &endpoint)
        .complete("prompt")
        .await;
    assert!(matches!(result, Err(LlmError::Upstream { status: 503, .. })));

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_retry_when_enabled() {
    let (endpoint, server) = serve(vec![
        (503, "overloaded"),
        (200, r#"{"choices":[{"message":{"content":"1. Recovered"}}]}"#),
    ])
    .await;

    let text = provider(ProviderKind::OpenAi, &endpoint)
        .with_max_attempts(2)
        .complete("prompt")
        .await
        .unwrap();
    assert_eq!(text, "1. Recovered");

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let (endpoint, server) = serve(vec![(400, "bad request")]).await;

    let result = provider(ProviderKind::OpenAi, &endpoint)
        .with_max_attempts(3)
        .complete("prompt")
        .await;
    assert!(matches!(result, Err(LlmError::Upstream { status: 400, .. })));

    let requests = server.await.unwrap();
    assert_eq!(requests.len(), 1);
}
