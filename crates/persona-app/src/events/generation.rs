use std::sync::Arc;

use kanal::AsyncSender;
use persona_core::carousel::Carousel;
use persona_types::AppEvent;

use crate::state::AppState;

/// Put the carousel into `Loading` and run one generation in the background.
///
/// The outcome comes back to the event loop as `GenerationSettled`.
pub fn start_generation(
    state: &Arc<AppState>,
    carousel: &mut Carousel,
    tx: &AsyncSender<AppEvent>,
) {
    let request = carousel.begin_refresh();
    let generator = Arc::clone(&state.generator);
    let directory = state.directory;
    let tx = tx.clone();

    tracing::info!(
        request,
        provider = %generator.metadata().name,
        "Generating personas"
    );

    tokio::spawn(async move {
        let result = generator
            .generate(directory)
            .await
            .map_err(|e| e.to_string());

        if let Err(message) = &result {
            tracing::error!(request, "Generation failed: {message}");
        }

        if tx
            .send(AppEvent::GenerationSettled { request, result })
            .await
            .is_err()
        {
            tracing::debug!(request, "Event loop gone, dropping generation result");
        }
    });
}
