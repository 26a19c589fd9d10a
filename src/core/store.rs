//! Planner view state and its reducer.
//!
//! The whole state is replaced on every action; the current trip result is
//! shared as an `Arc` so readers always see a complete value.

use crate::core::validation::FieldErrors;
use crate::models::api_error::ErrorReport;
use crate::models::trip::{TripInput, TripInputPatch, TripResult};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Planning,
    Result,
}

/// Issued when a submission starts; its answer is applied only while the
/// ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PlannerState {
    pub trip_input: TripInput,
    pub trip_result: Option<Arc<TripResult>>,
    pub loading: bool,
    pub layout_mode: LayoutMode,
    pub api_error: Option<ErrorReport>,
    pub field_errors: FieldErrors,
    generation: u64,
}

impl PlannerState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.generation == self.generation
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    SetTripInput(TripInputPatch),
    SetFieldErrors(FieldErrors),
    SubmitStarted,
    SubmitSucceeded(RequestTicket, Arc<TripResult>),
    SubmitFailed(RequestTicket, ErrorReport),
    DismissError,
    PlanAnother,
    LoadFromHistory(Arc<TripResult>),
}

pub fn reduce(state: &PlannerState, action: Action) -> PlannerState {
    match action {
        Action::SetTripInput(patch) => {
            let mut field_errors = state.field_errors.clone();
            if patch.current_location.is_some() {
                field_errors.clear("current_location");
            }
            if patch.pickup_location.is_some() {
                field_errors.clear("pickup_location");
            }
            if patch.dropoff_location.is_some() {
                field_errors.clear("dropoff_location");
            }
            if patch.current_cycle_hours.is_some() {
                field_errors.clear("current_cycle_hours");
            }
            PlannerState {
                trip_input: state.trip_input.apply(&patch),
                field_errors,
                ..state.clone()
            }
        }
        Action::SetFieldErrors(field_errors) => PlannerState {
            field_errors,
            ..state.clone()
        },
        Action::SubmitStarted => PlannerState {
            trip_result: None,
            loading: true,
            api_error: None,
            field_errors: FieldErrors::default(),
            generation: state.generation + 1,
            ..state.clone()
        },
        Action::SubmitSucceeded(ticket, result) => {
            if !state.is_current(ticket) {
                return state.clone();
            }
            PlannerState {
                trip_result: Some(result),
                loading: false,
                layout_mode: LayoutMode::Result,
                ..state.clone()
            }
        }
        Action::SubmitFailed(ticket, report) => {
            if !state.is_current(ticket) {
                return state.clone();
            }
            PlannerState {
                loading: false,
                api_error: Some(report),
                ..state.clone()
            }
        }
        Action::DismissError => PlannerState {
            api_error: None,
            ..state.clone()
        },
        Action::PlanAnother => PlannerState {
            generation: state.generation + 1,
            ..PlannerState::default()
        },
        Action::LoadFromHistory(result) => PlannerState {
            trip_input: result.input(),
            trip_result: Some(result),
            loading: false,
            layout_mode: LayoutMode::Result,
            api_error: None,
            field_errors: FieldErrors::default(),
            generation: state.generation + 1,
        },
    }
}

/// Long-lived container for the planner state.
#[derive(Debug, Default)]
pub struct PlannerStore {
    state: PlannerState,
}

pub type SharedStore = Arc<RwLock<PlannerStore>>;

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: TripInput) -> Self {
        let mut store = Self::new();
        store.dispatch(Action::SetTripInput(input.into()));
        store
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    /// Start a submission unless one is already in flight.
    pub fn begin_submit(&mut self) -> Option<RequestTicket> {
        if self.state.loading {
            return None;
        }
        self.dispatch(Action::SubmitStarted);
        Some(RequestTicket {
            generation: self.state.generation,
        })
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.state.is_current(ticket)
    }
}
