use serde_json::Value;
use tracing::{debug, info, warn};

use super::domain::{GenerationRequest, GenerationResult};
use super::transport::{GenerationTransport, ServiceResponse, TransportError};

pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate team";
pub const MALFORMED_RESULT_MESSAGE: &str =
    "The generation service returned a team recommendation that could not be read";

/// Stage of the current generation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LifecyclePhase {
    #[default]
    Idle,
    Pending,
    Succeeded(GenerationResult),
    Failed(String),
}

impl LifecyclePhase {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Pending => "Pending",
            Self::Succeeded(_) => "Succeeded",
            Self::Failed(_) => "Failed",
        }
    }
}

/// Why a submission ended in [`LifecyclePhase::Failed`]. The `Display` output is the
/// message surfaced to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationFailure {
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    Transport { reason: String },
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{}", MALFORMED_RESULT_MESSAGE)]
    Malformed { reason: String },
}

/// Ticket for an in-flight submission, returned by
/// [`RequestLifecycleController::begin`].
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    sequence: u64,
    request: GenerationRequest,
}

impl Submission {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }
}

/// Owns the generation workflow state and all traffic with the generation service.
///
/// `begin` flips the phase to `Pending` synchronously, `dispatch` is the only
/// suspension point, and `complete` applies the response. `submit` runs all three.
/// A later `begin` supersedes any submission still in flight: its completion is
/// dropped rather than overwriting the newer state.
pub struct RequestLifecycleController<T> {
    transport: T,
    phase: LifecyclePhase,
    sequence: u64,
}

impl<T> RequestLifecycleController<T>
where
    T: GenerationTransport,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            phase: LifecyclePhase::Idle,
            sequence: 0,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn phase(&self) -> &LifecyclePhase {
        &self.phase
    }

    /// True while a request is in flight; the submit control stays disabled.
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, LifecyclePhase::Pending)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.phase {
            LifecyclePhase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LifecyclePhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Number of submissions started so far.
    pub fn submissions(&self) -> u64 {
        self.sequence
    }

    /// Clears any previous result or error and marks the controller pending.
    pub fn begin(&mut self, request: GenerationRequest) -> Submission {
        self.sequence += 1;
        self.phase = LifecyclePhase::Pending;

        info!(
            sequence = self.sequence,
            department = request.department().label(),
            team_size = request.team_size(),
            total_budget = request.total_budget(),
            "submitting team generation request"
        );

        Submission {
            sequence: self.sequence,
            request,
        }
    }

    /// Sends the submission's request exactly once and waits for the reply.
    pub async fn dispatch(
        &self,
        submission: &Submission,
    ) -> Result<ServiceResponse, TransportError> {
        self.transport.generate(&submission.request).await
    }

    /// Applies a reply to the controller. Replies for superseded submissions are
    /// ignored.
    pub fn complete(
        &mut self,
        submission: Submission,
        outcome: Result<ServiceResponse, TransportError>,
    ) -> &LifecyclePhase {
        if submission.sequence != self.sequence {
            debug!(
                stale = submission.sequence,
                current = self.sequence,
                "discarding reply for superseded submission"
            );
            return &self.phase;
        }

        self.phase = match outcome
            .map_err(|err| GenerationFailure::Transport {
                reason: err.to_string(),
            })
            .and_then(interpret_response)
        {
            Ok(result) => {
                info!(
                    sequence = submission.sequence,
                    candidates = result.candidates.len(),
                    synergy_index = result.synergy_index,
                    total_cost = result.total_cost,
                    "team generation succeeded"
                );
                LifecyclePhase::Succeeded(result)
            }
            Err(failure) => {
                warn!(
                    sequence = submission.sequence,
                    error = ?failure,
                    "team generation failed"
                );
                LifecyclePhase::Failed(failure.to_string())
            }
        };

        &self.phase
    }

    pub async fn submit(&mut self, request: GenerationRequest) -> &LifecyclePhase {
        let submission = self.begin(request);
        let outcome = self.dispatch(&submission).await;
        self.complete(submission, outcome)
    }
}

/// Classifies a raw service reply into a result or a user-facing failure.
pub fn interpret_response(
    response: ServiceResponse,
) -> Result<GenerationResult, GenerationFailure> {
    if !response.is_success() {
        let message = serde_json::from_slice::<Value>(&response.body)
            .ok()
            .and_then(|body| detail_message(&body))
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        return Err(GenerationFailure::Rejected {
            status: response.status,
            message,
        });
    }

    serde_json::from_slice::<GenerationResult>(&response.body).map_err(|err| {
        GenerationFailure::Malformed {
            reason: err.to_string(),
        }
    })
}

/// Pulls the human readable `detail` out of an error body. Validation errors carry a
/// list of `{ "msg": ... }` entries instead of a plain string.
fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(message) => Some(message.as_str()),
                    other => other.get("msg").and_then(Value::as_str),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
