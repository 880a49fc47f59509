use crate::config::Config;
use crate::joke::{spawn_fetch_worker, JokeClient};
use crate::storage::KeyValueStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the widget until the user quits.
///
/// Persisted state is loaded before the terminal switches to the alternate
/// screen, so a corrupt store is reported on a normal terminal.
pub fn run(config: &Config, store: Arc<dyn KeyValueStore>, runtime: &Handle) -> anyhow::Result<()> {
    let client = JokeClient::new(config.api.url.clone())?;
    let mut app = App::new(store);
    app.load_persisted()
        .context("failed to load favorites and ratings")?;

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    app.set_fetch_sender(spawn_fetch_worker(runtime, client, events.sender()));

    let (mut terminal, guard) = setup_terminal()?;
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("jokebox exited");
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize => {}
        AppEvent::JokeFetched(result) => app.on_fetch_result(result),
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed, quitting");
            app.request_quit();
        }
    }
}
