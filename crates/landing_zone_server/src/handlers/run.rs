//! POST /run — run the landing zone function for one request.

use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, Extension, Json};
use landing_zone_core::{LandingZoneFunction, RunFunctionRequest, RunFunctionResponse};

use crate::error::AppError;

pub async fn run_function(
    Extension(function): Extension<Arc<LandingZoneFunction>>,
    body: Result<Json<RunFunctionRequest>, JsonRejection>,
) -> Result<Json<RunFunctionResponse>, AppError> {
    let Json(req) = body?;
    Ok(Json(function.run(&req)))
}
