//! Stub generator and event-loop harness

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use persona_config::Config;
use persona_core::directory::{DIRECTORY, DirectoryEntry};
use persona_core::images::ANIMAL_IMAGES;
use persona_generator::{CardGenerator, GenerationError, ProviderMetadata, enrich};
use persona_types::{AppEvent, Card, CarouselView, RawCard, UiEvent};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::controller::ChannelSet;
use crate::events::event_loop;
use crate::state::AppState;

pub enum Reply {
    /// One card per directory entry
    Cards,
    /// `count` cards after `delay`
    Delayed { delay: Duration, count: usize },
    Fail,
}

pub struct StubGenerator {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn cards_for(entries: &[DirectoryEntry]) -> Vec<Card> {
    let raw = entries
        .iter()
        .map(|entry| RawCard {
            animal_name: entry.animal.to_string(),
            representative: entry.name.to_string(),
            generic_description: format!("All about the {}.", entry.animal),
            generic_traits: vec!["Bold".into(), "Curious".into(), "Steady".into()],
            personalized_description: format!("{} lives it every day.", entry.name),
        })
        .collect();
    enrich(raw, &ANIMAL_IMAGES)
}

#[async_trait]
impl CardGenerator for StubGenerator {
    async fn generate(&self, directory: &[DirectoryEntry]) -> Result<Vec<Card>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Cards) => Ok(cards_for(directory)),
            Some(Reply::Delayed { delay, count }) => {
                tokio::time::sleep(delay).await;
                Ok(cards_for(&DIRECTORY[..count]))
            }
            Some(Reply::Fail) | None => Err(GenerationError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            }),
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Stub".to_string(),
            model: "stub".to_string(),
            requires_api_key: false,
        }
    }
}

pub struct Harness {
    pub generator: Arc<StubGenerator>,
    pub to_app: AsyncSender<AppEvent>,
    pub renders: AsyncReceiver<AppEvent>,
    pub cancel: CancellationToken,
    pub handle: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    /// Run the event loop over the first ten directory entries
    pub fn spawn(replies: Vec<Reply>) -> Self {
        let config =
            Config::from_vars(|key| (key == "API_KEY").then(|| "test-key".to_string())).unwrap();
        let generator = Arc::new(StubGenerator::new(replies));
        let state = Arc::new(AppState::new(config, generator.clone(), &DIRECTORY[..10]));

        let channels = ChannelSet::new();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(event_loop(
            state,
            channels.event_loop_channels(),
            cancel.clone(),
        ));

        Self {
            generator,
            to_app: channels.to_app.0.clone(),
            renders: channels.app_to_ui.1.clone(),
            cancel,
            handle,
        }
    }

    pub async fn send(&self, event: UiEvent) {
        self.to_app
            .send(AppEvent::UiEvent(event))
            .await
            .expect("event loop closed");
    }

    pub async fn next_view(&self) -> CarouselView {
        loop {
            match timeout(Duration::from_secs(5), self.renders.recv()).await {
                Ok(Ok(AppEvent::Render(view))) => return view,
                Ok(Ok(_)) => continue,
                Ok(Err(e)) => panic!("Channel error: {}", e),
                Err(_) => panic!("Timeout - no render arrived"),
            }
        }
    }

    pub async fn wait_for(&self, predicate: impl Fn(&CarouselView) -> bool) -> CarouselView {
        loop {
            let view = self.next_view().await;
            if predicate(&view) {
                return view;
            }
        }
    }

    pub async fn ready(&self) -> CarouselView {
        self.wait_for(|v| matches!(v, CarouselView::Ready { .. })).await
    }
}

pub fn index_of(view: &CarouselView) -> Option<(usize, bool)> {
    match view {
        CarouselView::Ready { index, flipped, .. } => Some((*index, *flipped)),
        _ => None,
    }
}
