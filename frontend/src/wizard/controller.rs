//! Intro-call wizard controller.
//!
//! Owns at most one [`WizardState`] at a time. All transitions are
//! synchronous; the only deferred one is the auto-advance after a choice,
//! which is handed out as an [`AdvanceTicket`] for the host to arm on a timer
//! and redeem with [`WizardController::fire_auto_advance`].

use log::{debug, info};

use crate::wizard::prefill::PrefillPayload;
use crate::wizard::state::{Field, Step, WizardState, OTHER_BUSINESS_TYPE};

/// Handle for one scheduled auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingAdvance {
    ticket: AdvanceTicket,
    from: Step,
}

#[derive(Debug)]
struct Session {
    state: WizardState,
    pending: Option<PendingAdvance>,
}

/// What a navigation request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Moved(Step),
    Refused,
    Closed,
}

#[derive(Debug, Default)]
pub struct WizardController {
    session: Option<Session>,
    // shared across sessions so a ticket from a discarded session never matches
    next_ticket: u64,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn state(&self) -> Option<&WizardState> {
        self.session.as_ref().map(|s| &s.state)
    }

    pub fn current_step(&self) -> Option<Step> {
        self.state().map(|s| s.current_step)
    }

    /// Starts a fresh session. Already open sessions are left as they are.
    pub fn open(&mut self) {
        if self.session.is_some() {
            return;
        }
        info!("Intro call wizard opened");
        self.session = Some(Session {
            state: WizardState::default(),
            pending: None,
        });
    }

    /// Discards the session and any pending auto-advance.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            if session.pending.is_some() {
                debug!("Cancelled pending auto-advance on close");
            }
            info!("Intro call wizard closed at step {}", session.state.current_step.number());
        }
    }

    pub fn can_advance(&self) -> bool {
        self.state().map_or(false, WizardState::can_advance)
    }

    /// Stores `value` and, for single-click choices, schedules an auto-advance.
    ///
    /// Returns the ticket to arm when an auto-advance was scheduled. Any later
    /// choice supersedes an older pending ticket, including the "Other"
    /// business type which schedules nothing.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Option<AdvanceTicket> {
        let value = value.into();
        let session = self.session.as_mut()?;

        let auto_advance = field.is_choice()
            && !(field == Field::BusinessType && value == OTHER_BUSINESS_TYPE);
        session.state.answers.set(field, value);

        if !auto_advance {
            // a choice that waits for input still supersedes an earlier one
            if field.is_choice() && session.pending.take().is_some() {
                debug!("Cancelled pending auto-advance after {}", field.name());
            }
            return None;
        }

        let ticket = AdvanceTicket(self.next_ticket);
        self.next_ticket += 1;
        session.pending = Some(PendingAdvance {
            ticket,
            from: session.state.current_step,
        });
        debug!("Scheduled auto-advance from step {} after {}", session.state.current_step.number(), field.name());
        Some(ticket)
    }

    /// Redeems a ticket once its delay elapsed.
    ///
    /// Stale tickets, tickets from a closed session and tickets whose step was
    /// already left are ignored.
    pub fn fire_auto_advance(&mut self, ticket: AdvanceTicket) -> Navigation {
        let Some(session) = self.session.as_mut() else {
            return Navigation::Refused;
        };
        match session.pending {
            Some(pending) if pending.ticket == ticket => {
                session.pending = None;
                if pending.from != session.state.current_step {
                    return Navigation::Refused;
                }
            }
            _ => return Navigation::Refused,
        }
        self.advance()
    }

    pub fn advance(&mut self) -> Navigation {
        let Some(session) = self.session.as_mut() else {
            return Navigation::Refused;
        };
        let state = &mut session.state;
        if !state.can_advance() || state.current_step.is_terminal() {
            return Navigation::Refused;
        }
        state.current_step = state.current_step.next();
        if state.current_step.is_terminal() {
            info!("Intro call wizard reached scheduling handoff");
        }
        Navigation::Moved(state.current_step)
    }

    /// Steps back, closing the wizard when already on the first step.
    pub fn retreat(&mut self) -> Navigation {
        let Some(session) = self.session.as_mut() else {
            return Navigation::Refused;
        };
        match session.state.current_step.prev() {
            Some(prev) => {
                session.state.current_step = prev;
                Navigation::Moved(prev)
            }
            None => {
                self.close();
                Navigation::Closed
            }
        }
    }

    /// Prefill data for the scheduler, available only at the handoff.
    pub fn prefill(&self) -> Option<PrefillPayload> {
        self.state()
            .filter(|s| s.current_step.is_terminal())
            .map(|s| PrefillPayload::from_answers(&s.answers))
    }
}
