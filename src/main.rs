use std::sync::Arc;

use tokio::sync::mpsc;

use tapeview::config::fetch_config;
use tapeview::feed::{ConnectionManager, SnapshotClient};
use tapeview::series::ChartSurface;
use tapeview::Result;
use tapeview::tui::{self, Action, App, Message, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    // The terminal owns stdout while the TUI runs; tracing goes to a file.
    let log_file = std::fs::File::create("tapeview.log")?;
    tracing_subscriber::fmt()
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = fetch_config()?;

    let (tx, mut rx) = mpsc::unbounded_channel();

    tui::event::spawn_event_reader(tx.clone());

    let manager = ConnectionManager::new(config.ws_url.clone(), tx.clone());
    tokio::spawn(manager.run());

    let snapshot = Arc::new(SnapshotClient::new(config.http_url.clone(), tx.clone()));
    {
        let snapshot = Arc::clone(&snapshot);
        tokio::spawn(async move { snapshot.fetch_snapshot().await });
    }

    let mut terminal = tui::setup_terminal()?;
    let mut app = App::new(config.symbol);
    if let Ok(size) = terminal.size() {
        app.chart.resize(size.width, size.height);
    }

    let result = run(&mut terminal, &mut app, &mut rx, &snapshot).await;

    tui::restore_terminal(&mut terminal)?;
    result
}

/// Draw/update loop: renders after every message, in delivery order.
///
/// Dropping `rx` on return closes the channel, which stops the feed
/// tasks; any in-flight snapshot result lands on the closed channel and
/// is discarded.
async fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::UnboundedReceiver<Message>,
    snapshot: &Arc<SnapshotClient>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| tui::render(frame, app))?;

        let Some(message) = rx.recv().await else {
            break;
        };

        if let Some(action) = tui::event::update(app, message) {
            match action {
                Action::ForceUpdate => {
                    let snapshot = Arc::clone(snapshot);
                    tokio::spawn(async move { snapshot.force_update().await });
                }
            }
        }
    }

    Ok(())
}
