//! Placeholder resources that make up a landing zone.
//!
//! Each role becomes a `NopResource` whose controller flips its `Ready`
//! condition to the requested status one second after creation. Nothing here
//! provisions real infrastructure.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::GenerateError;

pub const NOP_API_VERSION: &str = "nop.crossplane.io/v1alpha1";
pub const NOP_KIND: &str = "NopResource";

/// Roles composed for every landing zone, in creation order.
pub const LANDING_ZONE_ROLES: &[&str] = &[
    "account",
    "user",
    "role",
    "security-group",
    "gateway",
    "cluster",
];

/// Delay before a generated resource reports its readiness.
pub const READY_AFTER: &str = "1s";

/// Desired composed resources keyed by role name.
pub type DesiredResources = BTreeMap<String, DesiredComposed>;

/// One generated resource, already converted to unstructured JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredComposed {
    pub resource: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NopResource {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ObjectMeta,
    pub spec: NopResourceSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectMeta {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NopResourceSpec {
    pub for_provider: NopResourceParameters,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NopResourceParameters {
    pub condition_after: Vec<ResourceConditionAfter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConditionAfter {
    pub time: String,
    pub condition_type: String,
    pub condition_status: KubeConditionStatus,
}

/// Kubernetes-style condition status as it appears inside a resource body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KubeConditionStatus {
    True,
    False,
}

impl From<bool> for KubeConditionStatus {
    fn from(ready: bool) -> Self {
        if ready {
            Self::True
        } else {
            Self::False
        }
    }
}

impl NopResource {
    /// A resource named `name` that becomes `Ready=<ready>` after [`READY_AFTER`].
    pub fn scheduled(name: String, ready: bool) -> Self {
        Self {
            api_version: NOP_API_VERSION,
            kind: NOP_KIND,
            metadata: ObjectMeta { name },
            spec: NopResourceSpec {
                for_provider: NopResourceParameters {
                    condition_after: vec![ResourceConditionAfter {
                        time: READY_AFTER.to_string(),
                        condition_type: "Ready".to_string(),
                        condition_status: ready.into(),
                    }],
                },
            },
        }
    }

    /// Convert to the unstructured form carried in the response.
    pub fn to_unstructured(&self) -> Result<Value, GenerateError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Build one resource per role, named `base_name + role`, all sharing `ready`.
pub fn generate(
    role_names: &[&str],
    base_name: &str,
    ready: bool,
) -> Result<DesiredResources, GenerateError> {
    let mut desired = DesiredResources::new();
    for role in role_names {
        let r = NopResource::scheduled(format!("{base_name}{role}"), ready);
        let resource = r.to_unstructured()?;
        desired.insert(role.to_string(), DesiredComposed { resource });
    }
    Ok(desired)
}
