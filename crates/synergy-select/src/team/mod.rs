//! Team generation workflow: parameter intake, request lifecycle, and the
//! dashboard derived from a recommendation.

pub mod dashboard;
pub mod domain;
pub mod lifecycle;
pub mod parameters;
pub mod transport;

#[cfg(test)]
mod tests;

pub use dashboard::views::{
    BudgetOverview, BudgetStatus, HeadlineMetrics, RatioEntry, RoleMixEntry, RosterRow,
    TeamDashboard,
};
pub use dashboard::role_mix;
pub use domain::{Candidate, Department, GenerationRequest, GenerationResult, UnknownDepartment};
pub use lifecycle::{
    interpret_response, GenerationFailure, LifecyclePhase, RequestLifecycleController,
    Submission, GENERIC_FAILURE_MESSAGE, MALFORMED_RESULT_MESSAGE,
};
pub use parameters::{ParameterCollector, ParameterError};
pub use transport::{
    GenerationTransport, HealthStatus, HttpGenerationClient, ServiceResponse, TransportError,
};
