use crate::api::TripApi;
use crate::core::store::{Action, PlannerStore, SharedStore};
use crate::core::validation::{FieldErrors, validate};
use crate::errors::{AppError, AppResult};
use crate::models::api_error::ErrorReport;
use crate::models::trip::{TripInputPatch, TripResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How many trips the history view shows by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 6;

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Planned(Arc<TripResult>),
    Failed(ErrorReport),
    Invalid(FieldErrors),
    /// A submission was already in flight; nothing was sent.
    AlreadyPending,
    /// The answer arrived after a newer request or a reset and was dropped.
    Superseded,
}

/// User-facing report for any error raised while talking to the service.
pub fn error_report(err: &AppError) -> ErrorReport {
    match err {
        AppError::Api(report) => report.clone(),
        other => {
            warn!("planning request failed: {other}");
            ErrorReport::network()
        }
    }
}

/// Drives planner workflows against a `TripApi`, keeping the store in sync.
#[derive(Clone)]
pub struct Planner {
    api: Arc<dyn TripApi>,
    store: SharedStore,
}

impl Planner {
    pub fn new(api: Arc<dyn TripApi>, store: SharedStore) -> Self {
        Self { api, store }
    }

    pub fn with_new_store(api: Arc<dyn TripApi>) -> Self {
        Self::new(api, PlannerStore::new().shared())
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    pub async fn set_input(&self, patch: TripInputPatch) {
        self.store
            .write()
            .await
            .dispatch(Action::SetTripInput(patch));
    }

    /// Validate and send the current input. At most one request is in
    /// flight; its answer is applied only if nothing newer happened since.
    pub async fn submit(&self) -> SubmitOutcome {
        let (ticket, input) = {
            let mut store = self.store.write().await;
            let input = store.state().trip_input.clone();

            if let Err(errs) = validate(&input) {
                store.dispatch(Action::SetFieldErrors(errs.clone()));
                return SubmitOutcome::Invalid(errs);
            }

            match store.begin_submit() {
                Some(ticket) => (ticket, input),
                None => {
                    debug!("submission ignored, a request is already in flight");
                    return SubmitOutcome::AlreadyPending;
                }
            }
        };

        info!(
            pickup = %input.pickup_location,
            dropoff = %input.dropoff_location,
            "planning trip"
        );
        let answer = self.api.create_trip(&input).await;

        let mut store = self.store.write().await;
        if !store.is_current(ticket) {
            debug!(
                generation = store.state().generation(),
                "discarding stale planning answer"
            );
            return SubmitOutcome::Superseded;
        }

        match answer {
            Ok(trip) => {
                let trip = Arc::new(trip);
                store.dispatch(Action::SubmitSucceeded(ticket, Arc::clone(&trip)));
                SubmitOutcome::Planned(trip)
            }
            Err(e) => {
                let report = error_report(&e);
                store.dispatch(Action::SubmitFailed(ticket, report.clone()));
                SubmitOutcome::Failed(report)
            }
        }
    }

    pub async fn retry(&self) -> SubmitOutcome {
        self.dismiss_error().await;
        self.submit().await
    }

    pub async fn dismiss_error(&self) {
        self.store.write().await.dispatch(Action::DismissError);
    }

    /// Back to an empty planning form; in-flight answers are dropped.
    pub async fn plan_another(&self) {
        self.store.write().await.dispatch(Action::PlanAnother);
    }

    pub async fn load_from_history(&self, trip: TripResult) {
        self.store
            .write()
            .await
            .dispatch(Action::LoadFromHistory(Arc::new(trip)));
    }

    /// Newest trips first, at most `limit` of them.
    pub async fn recent_trips(&self, limit: usize) -> AppResult<Vec<TripResult>> {
        let mut trips = self.api.list_trips().await?;
        trips.truncate(limit);
        Ok(trips)
    }

    pub async fn trip(&self, id: u64) -> AppResult<TripResult> {
        self.api.get_trip(id).await
    }
}
