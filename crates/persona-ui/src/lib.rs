use std::io::stdout;

use crossterm::ExecutableCommand;
use crossterm::event::{Event, EventStream};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use kanal::{AsyncReceiver, AsyncSender};
use persona_config::ui::UiConfig;
use persona_types::{AppEvent, CarouselView, UiEvent};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tokio_util::sync::CancellationToken;

pub mod keys;
pub mod render;
pub mod theme;

/// Own the terminal until the user quits or `cancel` fires
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, app_to_ui_rx, ui_to_app_tx, config, cancel).await;

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick());
    let mut view = CarouselView::Loading;
    let mut tick = 0usize;

    tracing::info!("[UI] Starting render loop");
    loop {
        terminal.draw(|frame| render::render(frame, &view, tick))?;

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[UI] Cancelled");
                break;
            }
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    let Some(ui_event) = keys::key_to_event(key, &view) else {
                        continue;
                    };
                    tracing::debug!("[UI] {:?}", ui_event);
                    if ui_to_app_tx.send(AppEvent::UiEvent(ui_event)).await.is_err() {
                        tracing::warn!("[UI] Backend channel closed");
                        break;
                    }
                    if ui_event == UiEvent::Close {
                        break;
                    }
                }
                // Resize and friends just trigger a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            received = app_to_ui_rx.recv() => match received {
                Ok(AppEvent::Render(next)) => view = next,
                Ok(_) => {}
                Err(_) => {
                    tracing::info!("[UI] Backend closed");
                    break;
                }
            },
            _ = ticker.tick() => {
                tick = tick.wrapping_add(1);
            }
        }
    }

    Ok(())
}
