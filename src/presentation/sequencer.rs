//! Session state machine for the slide deck.
//!
//! The whole session is one value. Every change goes through
//! [`SessionState::apply`], which consumes the state and an [`Event`] and
//! returns the next state plus, for an accepted submit, the fetch the caller
//! has to run. The fetch outcome comes back as [`Event::FetchCompleted`].
//!
//! The record is not serialized with the rest of the state. A session that
//! comes back from the cookie while viewing has to look the record up again
//! by `name_input` and feed it in with [`Event::Restored`].

use serde::{Deserialize, Serialize};

use crate::models::review::{FetchError, PresentationRecord};

/// Number of slides in the deck.
pub const SLIDE_COUNT: usize = 9;
/// Index of the closing slide.
pub const LAST_SLIDE: usize = SLIDE_COUNT - 1;
/// Slide shown right after a successful lookup (the input slide is skipped).
pub const FIRST_RECORD_SLIDE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Viewing,
}

/// Pairs a submit with its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTicket(u64);

/// A lookup the caller must perform on behalf of the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Submit(String),
    FetchCompleted {
        ticket: FetchTicket,
        outcome: Result<PresentationRecord, FetchError>,
    },
    /// Re-attach the record of a viewing session after it was reloaded.
    Restored(Result<PresentationRecord, FetchError>),
    Advance,
    Retreat,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionState {
    slide_index: usize,
    phase: Phase,
    name_input: String,
    #[serde(skip)]
    record: Option<PresentationRecord>,
    error: Option<String>,
    pending: Option<FetchTicket>,
    tickets_issued: u64,
}

impl SessionState {
    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn record(&self) -> Option<&PresentationRecord> {
        self.record.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply one event. Events that are not valid in the current phase leave
    /// the state untouched.
    pub fn apply(mut self, event: Event) -> (SessionState, Option<FetchRequest>) {
        match event {
            Event::Submit(name) => {
                if self.phase != Phase::Idle || name.trim().is_empty() {
                    return (self, None);
                }
                self.tickets_issued += 1;
                let ticket = FetchTicket(self.tickets_issued);
                let request = FetchRequest { ticket, name: name.trim().to_string() };
                self.name_input = name;
                self.phase = Phase::Loading;
                self.error = None;
                self.pending = Some(ticket);
                (self, Some(request))
            }
            Event::FetchCompleted { ticket, outcome } => {
                if self.phase != Phase::Loading || self.pending != Some(ticket) {
                    log::debug!("Ignoring stale fetch completion {:?}", ticket);
                    return (self, None);
                }
                self.pending = None;
                match outcome {
                    Ok(record) => {
                        self.record = Some(record);
                        self.phase = Phase::Viewing;
                        self.slide_index = FIRST_RECORD_SLIDE;
                    }
                    Err(e) => {
                        self.error = Some(e.user_message().to_string());
                        self.phase = Phase::Idle;
                    }
                }
                (self, None)
            }
            Event::Restored(outcome) => {
                if self.phase != Phase::Viewing || self.record.is_some() {
                    return (self, None);
                }
                match outcome {
                    Ok(record) => self.record = Some(record),
                    Err(e) => {
                        self.error = Some(e.user_message().to_string());
                        self.phase = Phase::Idle;
                        self.slide_index = 0;
                    }
                }
                (self, None)
            }
            Event::Advance => {
                if self.phase == Phase::Viewing {
                    self.slide_index = (self.slide_index + 1).min(LAST_SLIDE);
                }
                (self, None)
            }
            Event::Retreat => {
                if self.phase == Phase::Viewing {
                    self.slide_index = self.slide_index.saturating_sub(1);
                }
                (self, None)
            }
            Event::Reset => {
                let tickets_issued = self.tickets_issued;
                (SessionState { tickets_issued, ..SessionState::default() }, None)
            }
        }
    }

    /// Viewing, but the record still has to be looked up again.
    pub fn needs_restore(&self) -> bool {
        self.phase == Phase::Viewing && self.record.is_none()
    }

    /// The event behind the "next" button: reset from the closing slide.
    pub fn forward_event(&self) -> Event {
        if self.slide_index >= LAST_SLIDE { Event::Reset } else { Event::Advance }
    }

    /// The event behind the "previous" button: reset from the input slide.
    pub fn back_event(&self) -> Event {
        if self.slide_index == 0 { Event::Reset } else { Event::Retreat }
    }
}
