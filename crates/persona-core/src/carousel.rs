//! Carousel state machine
//!
//! Owns the generated cards and the selection/flip state. Timers live outside:
//! a navigation away from a flipped card returns [`Navigation::Deferred`] and
//! the caller is expected to call [`Carousel::settle_navigation`] once the flip
//! animation has had time to turn the card back over.

use persona_types::{Card, CarouselView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Wrapping index arithmetic, `len` must be non-zero
    pub fn apply(self, index: usize, len: usize) -> usize {
        match self {
            Step::Forward => (index + 1) % len,
            Step::Backward => (index + len - 1) % len,
        }
    }
}

/// Outcome of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Not in a navigable state
    Ignored,
    /// Index changed immediately
    Moved { index: usize },
    /// Card was turned face-up; the step applies when `ticket` settles
    Deferred { ticket: u64, step: Step },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Loading,
    Ready {
        cards: Vec<Card>,
        index: usize,
        flipped: bool,
    },
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStep {
    ticket: u64,
    step: Step,
}

#[derive(Debug)]
pub struct Carousel {
    phase: Phase,
    /// Most recently issued generation request
    request: u64,
    pending: Option<PendingStep>,
    next_ticket: u64,
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            request: 0,
            pending: None,
            next_ticket: 0,
        }
    }

    /// Enter `Loading` and return the number of the request to issue.
    ///
    /// Any pending deferred navigation is dropped.
    pub fn begin_refresh(&mut self) -> u64 {
        self.request += 1;
        self.pending = None;
        self.phase = Phase::Loading;
        tracing::debug!(request = self.request, "carousel loading");
        self.request
    }

    /// Apply the outcome of generation request `request`.
    ///
    /// Returns false if a newer request has been issued since.
    pub fn settle(&mut self, request: u64, result: Result<Vec<Card>, String>) -> bool {
        if request != self.request {
            tracing::debug!(
                request,
                latest = self.request,
                "ignoring stale generation result"
            );
            return false;
        }

        self.phase = match result {
            Ok(cards) => {
                tracing::info!(count = cards.len(), "carousel ready");
                Phase::Ready {
                    cards,
                    index: 0,
                    flipped: false,
                }
            }
            Err(message) => {
                tracing::warn!("carousel failed: {message}");
                Phase::Failed(message)
            }
        };
        true
    }

    /// Turn the current card over. Only meaningful in `Ready`.
    pub fn toggle_flip(&mut self) -> bool {
        match &mut self.phase {
            Phase::Ready { flipped, .. } => {
                *flipped = !*flipped;
                true
            }
            _ => false,
        }
    }

    pub fn next(&mut self) -> Navigation {
        self.navigate(Step::Forward)
    }

    pub fn previous(&mut self) -> Navigation {
        self.navigate(Step::Backward)
    }

    fn navigate(&mut self, step: Step) -> Navigation {
        let Phase::Ready {
            cards,
            index,
            flipped,
        } = &mut self.phase
        else {
            return Navigation::Ignored;
        };

        if cards.is_empty() {
            return Navigation::Ignored;
        }

        // A step still waiting on the flip animation is superseded by this one,
        // which then has to wait as well.
        if *flipped || self.pending.is_some() {
            *flipped = false;
            self.next_ticket += 1;
            let ticket = self.next_ticket;
            self.pending = Some(PendingStep { ticket, step });
            return Navigation::Deferred { ticket, step };
        }

        *index = step.apply(*index, cards.len());
        Navigation::Moved { index: *index }
    }

    /// Apply the deferred step identified by `ticket`.
    ///
    /// Returns false if the ticket was superseded or cancelled.
    pub fn settle_navigation(&mut self, ticket: u64) -> bool {
        let Some(pending) = self.pending.filter(|p| p.ticket == ticket) else {
            return false;
        };
        self.pending = None;

        match &mut self.phase {
            Phase::Ready {
                cards,
                index,
                flipped,
            } if !cards.is_empty() => {
                *index = pending.step.apply(*index, cards.len());
                *flipped = false;
                true
            }
            _ => false,
        }
    }

    pub fn has_pending_navigation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current_card(&self) -> Option<&Card> {
        match &self.phase {
            Phase::Ready { cards, index, .. } => cards.get(*index),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match &self.phase {
            Phase::Ready { index, .. } => *index,
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        match &self.phase {
            Phase::Ready { cards, .. } => cards.len(),
            _ => 0,
        }
    }

    pub fn is_flipped(&self) -> bool {
        matches!(self.phase, Phase::Ready { flipped: true, .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn view(&self) -> CarouselView {
        match &self.phase {
            Phase::Loading => CarouselView::Loading,
            Phase::Failed(message) => CarouselView::Failed {
                message: message.clone(),
            },
            Phase::Ready {
                cards,
                index,
                flipped,
            } => CarouselView::Ready {
                card: cards.get(*index).cloned(),
                index: *index,
                total: cards.len(),
                flipped: *flipped,
            },
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}
