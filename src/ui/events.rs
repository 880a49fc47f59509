use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::joke::{FetchError, Joke};

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// A fetch finished. Posted by the fetch worker in completion order.
    JokeFetched(Result<Joke, FetchError>),
    /// The input thread stopped. No key can reach the app after this,
    /// so the loop must exit.
    InputClosed,
}

/// Where terminal events come from. The crossterm implementation reads the
/// real terminal; tests substitute their own.
pub trait InputSource: Send + 'static {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, CrosstermInput)
    }

    pub fn with_source(tick_rate: Duration, mut source: impl InputSource) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                let event = match source.poll(timeout) {
                    Ok(true) => source.read().map(Some),
                    Ok(false) => Ok(None),
                    Err(err) => Err(err),
                };

                let forwarded = match event {
                    Ok(Some(Event::Key(key))) => event_tx.send(AppEvent::Input(key)),
                    Ok(Some(Event::Resize(_, _))) => event_tx.send(AppEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal input failed");
                        let _ = event_tx.send(AppEvent::InputClosed);
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
