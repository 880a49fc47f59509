mod common;

use common::mock_api::{MockApi, MockResponse};
use jokebox::joke::{spawn_fetch_worker, FetchCommand, JokeClient};
use jokebox::ui::events::AppEvent;
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Handle;

async fn next_fetch(rx: mpsc::Receiver<AppEvent>) -> (Option<u64>, mpsc::Receiver<AppEvent>) {
    tokio::task::spawn_blocking(move || {
        let id = match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::JokeFetched(Ok(joke))) => Some(joke.id),
            Ok(AppEvent::JokeFetched(Err(_))) => None,
            Ok(_) => panic!("unexpected event"),
            Err(err) => panic!("no fetch result: {err}"),
        };
        (id, rx)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn worker_posts_result_for_each_command() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::joke(1, "a", "b")).await;

    let (tx, rx) = mpsc::channel();
    let client = JokeClient::new(api.joke_url()).unwrap();
    let commands = spawn_fetch_worker(&Handle::current(), client, tx);

    commands.send(FetchCommand::FetchRandom).await.unwrap();
    let (id, _rx) = next_fetch(rx).await;
    assert_eq!(id, Some(1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn worker_reports_failures() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::error(500, "boom")).await;

    let (tx, rx) = mpsc::channel();
    let client = JokeClient::new(api.joke_url()).unwrap();
    let commands = spawn_fetch_worker(&Handle::current(), client, tx);

    commands.send(FetchCommand::FetchRandom).await.unwrap();
    let (id, _rx) = next_fetch(rx).await;
    assert_eq!(id, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn overlapping_fetches_arrive_in_completion_order() {
    let api = MockApi::start().await;
    api.enqueue_response(MockResponse::joke(1, "slow", "slow").with_delay(300))
        .await;
    api.enqueue_response(MockResponse::joke(2, "fast", "fast")).await;

    let (tx, rx) = mpsc::channel();
    let client = JokeClient::new(api.joke_url()).unwrap();
    let commands = spawn_fetch_worker(&Handle::current(), client, tx);

    commands.send(FetchCommand::FetchRandom).await.unwrap();
    // Let the first request reach the server before the second one.
    tokio::time::sleep(Duration::from_millis(50)).await;
    commands.send(FetchCommand::FetchRandom).await.unwrap();

    let (first, rx) = next_fetch(rx).await;
    let (second, _rx) = next_fetch(rx).await;
    assert_eq!(first, Some(2));
    assert_eq!(second, Some(1));
}
