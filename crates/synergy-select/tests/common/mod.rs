#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use synergy_select::team::transport::{GENERATE_PATH, HEALTH_PATH};

/// Request bodies the stub service has received, in arrival order.
#[derive(Clone, Default)]
pub struct Received(Arc<Mutex<Vec<Value>>>);

impl Received {
    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().expect("received mutex poisoned").clone()
    }
}

/// In-process stand-in for the generation service. Replies are keyed on the
/// requested department so each test can pick the behavior it needs.
pub async fn spawn_generation_service() -> (String, Received) {
    let received = Received::default();
    let router = Router::new()
        .route(GENERATE_PATH, post(generate))
        .route(HEALTH_PATH, get(health))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub service");
    let addr = listener.local_addr().expect("stub service address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub service runs");
    });

    (format!("http://{addr}"), received)
}

/// Address nothing listens on, for transport failures.
pub async fn unreachable_service() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}")
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn generate(State(received): State<Received>, Json(body): Json<Value>) -> Response {
    received
        .0
        .lock()
        .expect("received mutex poisoned")
        .push(body.clone());

    match body["department"].as_str() {
        Some("Engineering") => (StatusCode::OK, Json(team_a())).into_response(),
        Some("Sales") => (StatusCode::OK, Json(mixed_roles())).into_response(),
        Some("Legal") => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "budget too low for team size" })),
        )
            .into_response(),
        Some("HR") => {
            let mut partial = team_a();
            if let Some(object) = partial.as_object_mut() {
                object.remove("Candidates");
            }
            (StatusCode::OK, Json(partial)).into_response()
        }
        _ => (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response(),
    }
}

pub fn team_a() -> Value {
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

pub fn mixed_roles() -> Value {
    json!({
        "Synergy_Index": 64.5,
        "Total_Cost": 21500,
        "Budget_Remaining": -1500,
        "Avg_Performance": 3.67,
        "Team_List": 3,
        "Gender_Ratio": { "Male": 66.7, "Female": 33.3 },
        "Education_Mix": ["Bachelor", "PhD"],
        "Candidates": [
            {
                "Employee_ID": 301,
                "Job_Title": "Analyst",
                "Role": "Mid",
                "Salary": 6000,
                "SynergyScore": 61.2,
                "Explainability": "Selected for Mid role."
            },
            {
                "Employee_ID": 117,
                "Job_Title": "Consultant",
                "Role": "Senior",
                "Salary": 9500,
                "SynergyScore": 70.04,
                "Explainability": "Selected for Senior role."
            },
            {
                "Employee_ID": 254,
                "Job_Title": "Developer",
                "Role": "Mid",
                "Salary": 6000,
                "SynergyScore": 58.9,
                "Explainability": "Selected for Mid role."
            }
        ]
    })
}
