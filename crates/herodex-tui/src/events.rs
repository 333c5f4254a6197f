use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Pumps crossterm input into an async channel with a steady tick so the
/// draw loop never blocks on the terminal.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            match event::read() {
                                // Windows terminals report both press and release.
                                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                    if tx.send(Event::Key(key)).is_err() {
                                        break;
                                    }
                                }
                                _ => {}
                            }
                        } else if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
