use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::report::{availability, DomainAvailability};
use crate::store::DomainStatusStore;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub domains: usize,
}

#[derive(Serialize)]
pub struct SkippedSummary {
    pub skipped_endpoints: u64,
}

pub async fn get_status(State(store): State<Arc<DomainStatusStore>>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        domains: store.len(),
    })
}

pub async fn get_availability(
    State(store): State<Arc<DomainStatusStore>>,
) -> Json<Vec<DomainAvailability>> {
    Json(availability(&store))
}

pub async fn get_skipped(State(store): State<Arc<DomainStatusStore>>) -> Json<SkippedSummary> {
    Json(SkippedSummary {
        skipped_endpoints: store.skipped(),
    })
}
