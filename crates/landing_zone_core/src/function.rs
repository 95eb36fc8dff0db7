//! The landing zone function: one request in, one response out.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::error::FatalError;
use crate::fieldpath;
use crate::input;
use crate::policy::PolicyMatrix;
use crate::proto::{RunFunctionRequest, RunFunctionResponse};
use crate::resources::{self, LANDING_ZONE_ROLES};
use crate::response::{self, DEFAULT_TTL};
use crate::validate::validate;

pub const ENVIRONMENT_PATH: &str = "spec.environment";
pub const TIER_PATH: &str = "spec.tier";
pub const BASE_NAME_PATH: &str = "metadata.generateName";

/// Generates landing zone resources for an observed composite.
///
/// If the requested tier is not supported in the requested environment the
/// resources are still produced, with readiness false, and the problem is
/// reported as a warning and a false `ProvisioningSuccess` condition.
#[derive(Debug, Clone)]
pub struct LandingZoneFunction {
    matrix: Arc<PolicyMatrix>,
    ttl: Duration,
}

impl LandingZoneFunction {
    pub fn new(matrix: Arc<PolicyMatrix>) -> Self {
        Self {
            matrix,
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn matrix(&self) -> &PolicyMatrix {
        &self.matrix
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Run the function. Fatal errors are reported inside the response.
    pub fn run(&self, req: &RunFunctionRequest) -> RunFunctionResponse {
        tracing::info!(tag = req.tag(), "Running function");

        match self.try_run(req) {
            Ok(rsp) => rsp,
            Err(e) => {
                tracing::warn!(tag = req.tag(), error = %e, "function run failed");
                response::fatal(req, self.ttl, &e)
            }
        }
    }

    fn try_run(&self, req: &RunFunctionRequest) -> Result<RunFunctionResponse, FatalError> {
        let mut rsp = response::to(req, self.ttl);

        let input = input::decode(req.input.as_ref())?;
        let ux = input.ux_mode()?;

        let oxr = observed_composite(req)?;
        let env = fieldpath::get_string_or_default(oxr, ENVIRONMENT_PATH);
        let tier = fieldpath::get_string_or_default(oxr, TIER_PATH);
        let base_name = fieldpath::get_string_or_default(oxr, BASE_NAME_PATH);

        let outcome = validate(&self.matrix, &env, &tier);
        match outcome.failure() {
            None => tracing::debug!(%env, %tier, %ux, "environment/tier permitted"),
            Some(f) => tracing::debug!(%env, %tier, %ux, reason = %f, "environment/tier rejected"),
        }

        let desired = resources::generate(LANDING_ZONE_ROLES, &base_name, outcome.is_permitted())?;
        response::set_desired_composed_resources(&mut rsp, desired)?;

        response::apply(&mut rsp, ux.render(&outcome));
        Ok(rsp)
    }
}

impl Default for LandingZoneFunction {
    fn default() -> Self {
        Self::new(Arc::new(PolicyMatrix::builtin()))
    }
}

fn observed_composite(req: &RunFunctionRequest) -> Result<&Value, FatalError> {
    let composite = req
        .observed
        .as_ref()
        .and_then(|o| o.composite.as_ref())
        .ok_or_else(|| FatalError::MissingObservedComposite("composite is not set".into()))?;
    if !composite.resource.is_object() {
        return Err(FatalError::MissingObservedComposite(
            "composite resource is not an object".into(),
        ));
    }
    Ok(&composite.resource)
}
