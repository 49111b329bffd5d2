use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits or a shutdown signal arrives.
///
/// Fetches run on `runtime`; their completions are fed back into the event
/// loop so the list redraws as soon as data lands.
pub fn run(app: &mut App, tick_rate: Duration, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate)?;

    let settle_tx = events.sender();
    app.cache().set_settle_hook(Arc::new(move |url: &str| {
        let _ = settle_tx.send(AppEvent::FetchSettled(url.to_string()));
    }));
    spawn_signal_listener(runtime, events.sender());

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &*app))?;
        app.mark_mounted();
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchSettled(url)) => app.on_fetch_settled(&url),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn_signal_listener(runtime: &Handle, tx: mpsc::Sender<AppEvent>) {
    runtime.spawn(async move {
        if wait_for_terminate().await {
            tracing::info!("termination signal received");
            let _ = tx.send(AppEvent::Shutdown);
        }
    });
}

#[cfg(unix)]
async fn wait_for_terminate() -> bool {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => sigterm.recv().await.is_some(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to install SIGTERM handler");
            false
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_terminate() -> bool {
    tokio::signal::ctrl_c().await.is_ok()
}
