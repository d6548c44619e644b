use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// A generation request finished. `request` identifies which refresh produced it.
    GenerationSettled {
        request: u64,
        result: Result<Vec<Card>, String>,
    },
    /// The settle delay of a deferred navigation elapsed.
    NavigationSettled {
        ticket: u64,
    },
    Render(CarouselView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ToggleFlip,
    Next,
    Previous,
    Refresh,
    Close,
}

/// Persona as returned by the generative API, before local enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub animal_name: String,
    pub representative: String,
    pub generic_description: String,
    pub generic_traits: Vec<String>,
    pub personalized_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub animal_name: String,
    pub representative: String,
    pub generic_description: String,
    pub generic_traits: Vec<String>,
    pub personalized_description: String,
    pub image_url: String,
}

impl Card {
    pub fn from_raw(raw: RawCard, id: String, image_url: String) -> Self {
        Self {
            id,
            animal_name: raw.animal_name,
            representative: raw.representative,
            generic_description: raw.generic_description,
            generic_traits: raw.generic_traits,
            personalized_description: raw.personalized_description,
            image_url,
        }
    }
}

/// Snapshot of the carousel handed to the UI for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselView {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        card: Option<Card>,
        index: usize,
        total: usize,
        flipped: bool,
    },
}

impl CarouselView {
    pub fn is_ready(&self) -> bool {
        matches!(self, CarouselView::Ready { card: Some(_), .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CarouselView::Failed { .. })
    }
}
