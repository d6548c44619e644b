use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use persona_core::carousel::{Carousel, Navigation};
use persona_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod generation;
pub mod navigation;

use generation::start_generation;
use navigation::NavigationScheduler;

/// Channel ends the event loop works with
pub struct EventLoopChannels {
    /// Everything addressed to the app: UI commands and background results
    pub to_app_rx: AsyncReceiver<AppEvent>,
    /// Handed to background tasks so they can report back
    pub to_app_tx: AsyncSender<AppEvent>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

/// App's main loop. Sole owner of the carousel.
pub async fn event_loop(
    state: Arc<AppState>,
    channels: EventLoopChannels,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let EventLoopChannels {
        to_app_rx,
        to_app_tx,
        app_to_ui_tx,
    } = channels;

    let mut carousel = Carousel::new();
    let mut scheduler =
        NavigationScheduler::new(state.config.ui.settle_delay(), cancel.child_token());

    // Initial load
    start_generation(&state, &mut carousel, &to_app_tx);
    publish(&carousel, &app_to_ui_tx).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = to_app_rx.recv() => event?,
        };

        tracing::debug!("[EVENT_LOOP] {:?}", std::mem::discriminant(&event));
        let flow = handle_event(
            &state,
            &mut carousel,
            &mut scheduler,
            &to_app_tx,
            event,
        );
        if flow.is_break() {
            tracing::info!("[EVENT_LOOP] Close requested");
            break;
        }

        publish(&carousel, &app_to_ui_tx).await?;
    }

    Ok(())
}

fn handle_event(
    state: &Arc<AppState>,
    carousel: &mut Carousel,
    scheduler: &mut NavigationScheduler,
    to_app_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> ControlFlow<()> {
    match event {
        AppEvent::UiEvent(UiEvent::ToggleFlip) => {
            carousel.toggle_flip();
        }
        AppEvent::UiEvent(UiEvent::Next) => {
            let navigation = carousel.next();
            handle_navigation(navigation, scheduler, to_app_tx);
        }
        AppEvent::UiEvent(UiEvent::Previous) => {
            let navigation = carousel.previous();
            handle_navigation(navigation, scheduler, to_app_tx);
        }
        AppEvent::UiEvent(UiEvent::Refresh) => {
            if scheduler.is_pending() {
                tracing::debug!("Refresh drops pending navigation");
            }
            scheduler.cancel();
            start_generation(state, carousel, to_app_tx);
        }
        AppEvent::UiEvent(UiEvent::Close) => return ControlFlow::Break(()),
        AppEvent::GenerationSettled { request, result } => {
            carousel.settle(request, result);
        }
        AppEvent::NavigationSettled { ticket } => {
            if carousel.settle_navigation(ticket) {
                scheduler.complete();
            } else {
                tracing::debug!(ticket, "Dropping superseded navigation");
            }
        }
        AppEvent::Render(_) => {
            // UI-only event, ignore in backend
        }
    }

    ControlFlow::Continue(())
}

fn handle_navigation(
    navigation: Navigation,
    scheduler: &mut NavigationScheduler,
    to_app_tx: &AsyncSender<AppEvent>,
) {
    match navigation {
        Navigation::Deferred { ticket, step } => {
            tracing::debug!(ticket, ?step, "Navigation waits for the card to flip back");
            scheduler.schedule(ticket, to_app_tx);
        }
        Navigation::Moved { index } => {
            tracing::debug!(index, "Moved");
        }
        Navigation::Ignored => {}
    }
}

async fn publish(carousel: &Carousel, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::Render(carousel.view())).await?;
    Ok(())
}
