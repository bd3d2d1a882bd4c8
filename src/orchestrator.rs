// ABOUTME: Request orchestrator owning the view state machine for recipe generation
// ABOUTME: Guards empty submissions, sequences the single in-flight call, maps outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use crate::errors::{ServiceError, ServiceResult};
use crate::form::FormState;
use crate::models::{GenerationRequest, GenerationResponse, Recipe};
use crate::service::RecipeService;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Inline message when generation is attempted with no ingredients
pub const MSG_NO_INGREDIENTS: &str = "Please add at least one ingredient";

/// Fallback when the service reports failure without a usable message
pub const MSG_GENERATION_FAILED: &str = "Failed to generate recipe";

/// Generic user-facing message for transport-level faults
pub const MSG_SERVICE_UNREACHABLE: &str =
    "Failed to connect to the recipe service. Please try again.";

/// The mutually exclusive states of the generation flow.
///
/// Exactly one holds at any time; transitions happen only through
/// [`RequestOrchestrator`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing requested yet, or reset
    #[default]
    Idle,
    /// A generation call is in flight
    Loading,
    /// The service returned a recipe
    Result(Recipe),
    /// Validation, service, or transport failure with a user-facing message
    Error(String),
}

impl ViewState {
    /// Check whether a call is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The recipe, when in the `Result` state
    #[must_use]
    pub const fn recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Result(recipe) => Some(recipe),
            _ => None,
        }
    }

    /// The message, when in the `Error` state
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Tag identifying one generation attempt.
///
/// Settlements carrying a stale tag are ignored, so a superseded call or
/// a call settling after `reset()` cannot clobber newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTag(u64);

/// Drives the single in-flight generation call and owns the view state.
///
/// The transition steps are exposed individually
/// ([`Self::begin_generation`], [`Self::apply_outcome`]) so the state
/// machine is testable without an async harness; [`Self::generate`]
/// composes them over the configured [`RecipeService`].
#[derive(Debug)]
pub struct RequestOrchestrator<S> {
    service: S,
    state: ViewState,
    seq: u64,
}

impl<S> RequestOrchestrator<S> {
    /// Create an orchestrator in the `Idle` state
    pub const fn new(service: S) -> Self {
        Self {
            service,
            state: ViewState::Idle,
            seq: 0,
        }
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Start a generation attempt: clear any prior result or error,
    /// transition to `Loading`, and return the tag the settlement must
    /// present.
    pub fn begin_generation(&mut self) -> AttemptTag {
        self.seq += 1;
        self.state = ViewState::Loading;
        AttemptTag(self.seq)
    }

    /// Settle a generation attempt, mapping the call outcome onto the
    /// state machine.
    ///
    /// A stale `tag` (superseded attempt or post-reset settlement) is
    /// ignored and leaves the state untouched.
    pub fn apply_outcome(&mut self, tag: AttemptTag, outcome: ServiceResult<GenerationResponse>) {
        if tag.0 != self.seq {
            warn!(
                stale_seq = tag.0,
                current_seq = self.seq,
                "ignoring stale generation settlement"
            );
            return;
        }

        self.state = match outcome {
            Ok(response) if response.success => response.recipe.map_or_else(
                || ViewState::Error(MSG_GENERATION_FAILED.to_owned()),
                ViewState::Result,
            ),
            Ok(response) => {
                let message = response
                    .error
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| MSG_GENERATION_FAILED.to_owned());
                ViewState::Error(message)
            }
            Err(fault) => {
                log_transport_fault(&fault);
                ViewState::Error(MSG_SERVICE_UNREACHABLE.to_owned())
            }
        };
    }

    /// Return the view state to `Idle` and invalidate any in-flight
    /// attempt.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.state = ViewState::Idle;
    }
}

impl<S: RecipeService> RequestOrchestrator<S> {
    /// Validate the form, then drive one generation call to settlement.
    ///
    /// With an empty ingredient list this transitions straight to
    /// `Error` and sends nothing. Otherwise the request payload is
    /// snapshotted before the call, `Loading` holds for its duration,
    /// and the outcome lands in `Result` or `Error`.
    pub async fn generate(&mut self, form: &FormState) {
        if form.ingredients().is_empty() {
            self.state = ViewState::Error(MSG_NO_INGREDIENTS.to_owned());
            return;
        }

        let request = GenerationRequest::from_form(form);
        let tag = self.begin_generation();

        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            ingredients = request.ingredients.len(),
            restrictions = request.dietary_restrictions.len(),
            "dispatching generation request"
        );

        let outcome = self.service.generate_recipe(&request).await;
        self.apply_outcome(tag, outcome);
    }
}

/// Record the underlying transport cause for diagnostics; the user only
/// ever sees the generic message.
fn log_transport_fault(fault: &ServiceError) {
    error!(
        error = %fault,
        retryable = fault.is_retryable(),
        "recipe service call failed"
    );
}
