use kanal::{AsyncReceiver, AsyncSender};
use persona_config::ui::UiConfig;
use persona_types::AppEvent;
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    persona_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config, cancel).await
}
