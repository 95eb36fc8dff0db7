//! Landing zone composition function.
//!
//! Given an observed composite that asks for an `environment` and a `tier`,
//! the function:
//!
//! - **validates** the pair against the static [`PolicyMatrix`]
//! - **generates** one placeholder `NopResource` per landing zone role, each
//!   scheduled to become `Ready` (true or false) one second after creation
//! - **renders** the outcome as results and a `ProvisioningSuccess` condition,
//!   targeted at the composite only (`classic`) or at the composite and its
//!   claim (`modern`)
//!
//! # Architecture
//!
//! ```text
//! RunFunctionRequest
//!        │
//!        ▼
//!   input::decode ──► fieldpath (spec.environment, spec.tier)
//!        │
//!        ▼
//!   validate(PolicyMatrix) ──► ValidationOutcome
//!        │
//!        ▼
//!   resources::generate ──► DesiredResources (Ready = outcome)
//!        │
//!        ▼
//!   UxMode::render ──► results + conditions ──► RunFunctionResponse
//! ```
//!
//! Any [`FatalError`] short-circuits the pipeline and produces a response that
//! carries nothing but a single fatal result.

pub mod error;
pub mod fieldpath;
pub mod function;
pub mod input;
pub mod policy;
pub mod proto;
pub mod resources;
pub mod response;
pub mod ux;
pub mod validate;

pub use error::{FatalError, GenerateError};
pub use function::LandingZoneFunction;
pub use input::Input;
pub use policy::PolicyMatrix;
pub use proto::{RunFunctionRequest, RunFunctionResponse};
pub use resources::{DesiredResources, LANDING_ZONE_ROLES};
pub use ux::UxMode;
pub use validate::{validate, ValidationFailure, ValidationOutcome};

/// Condition type reported on the composite (and claim, in modern UX).
pub const PROVISIONING_CONDITION: &str = "ProvisioningSuccess";
