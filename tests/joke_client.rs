mod common;

use common::mock_api::{MockApi, MockResponse};
use jokebox::joke::{FetchError, Joke, JokeClient, FETCH_ERROR_MESSAGE};
use std::net::TcpListener;

#[tokio::test]
async fn fetches_and_decodes_joke() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::joke(17, "Knock knock", "Who's there"))
        .await;

    let client = JokeClient::new(api.joke_url()).unwrap();
    let joke = client.fetch_random().await.unwrap();

    assert_eq!(joke, Joke::new(17, "Knock knock", "Who's there"));
}

#[tokio::test]
async fn issues_single_get_to_endpoint() {
    let api = MockApi::start().await;
    let client = JokeClient::new(api.joke_url()).unwrap();
    client.fetch_random().await.unwrap();

    let requests = api.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/random_joke");
}

#[tokio::test]
async fn server_error_is_status_failure() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::error(503, "unavailable"))
        .await;

    let client = JokeClient::new(api.joke_url()).unwrap();
    let err = client.fetch_random().await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 503, .. }));
    assert_eq!(err.user_message(), FETCH_ERROR_MESSAGE);
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::json(r#"{"setup": "no id or punchline"}"#))
        .await;

    let client = JokeClient::new(api.joke_url()).unwrap();
    let err = client.fetch_random().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_failure() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = JokeClient::new(format!("http://127.0.0.1:{port}/random_joke")).unwrap();
    let err = client.fetch_random().await.unwrap_err();

    assert!(matches!(err, FetchError::Network { .. }));
    assert_eq!(err.user_message(), FETCH_ERROR_MESSAGE);
}

#[tokio::test]
async fn no_automatic_retry_after_failure() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::error(500, "boom")).await;

    let client = JokeClient::new(api.joke_url()).unwrap();
    assert!(client.fetch_random().await.is_err());

    assert_eq!(api.captured_requests().await.len(), 1);
}
