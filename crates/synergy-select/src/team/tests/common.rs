use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::team::domain::{Department, GenerationRequest};
use crate::team::transport::{GenerationTransport, ServiceResponse, TransportError};

/// Transport that replays queued replies and records every request it was handed.
#[derive(Default)]
pub(super) struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<ServiceResponse, TransportError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedTransport {
    pub(super) fn replying(replies: Vec<Result<ServiceResponse, TransportError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl GenerationTransport for ScriptedTransport {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<ServiceResponse, TransportError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request.clone());
        self.replies
            .lock()
            .expect("replies mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unreachable("scripted transport".into())))
    }
}

pub(super) fn engineering_request() -> GenerationRequest {
    GenerationRequest::new(Department::Engineering, 12, 100_000.0).expect("in range")
}

pub(super) fn team_a_body() -> Value {
    json!({
        "Synergy_Index": 87,
        "Total_Cost": 95000,
        "Budget_Remaining": 5000,
        "Avg_Performance": 4.2,
        "Team_List": "Team-A",
        "Candidates": [{
            "Employee_ID": 1,
            "Job_Title": "SWE",
            "Role": "Senior",
            "Salary": 12000,
            "SynergyScore": 9.1,
            "Explainability": "strong fit"
        }]
    })
}

pub(super) fn reply(status: u16, body: Value) -> Result<ServiceResponse, TransportError> {
    Ok(ServiceResponse::new(status, body.to_string()))
}
