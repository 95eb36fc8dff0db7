//! Helpers for building a [`RunFunctionResponse`].

use std::time::Duration;

use crate::error::FatalError;
use crate::proto::{
    FunctionResult, Resource, ResponseMeta, RunFunctionRequest, RunFunctionResponse, Severity,
    State, Target,
};
use crate::resources::DesiredResources;
use crate::ux::Rendered;

/// How long a response may be cached when nothing else is configured.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Start a response from `req`: echo the tag, carry the desired state and
/// context forward.
pub fn to(req: &RunFunctionRequest, ttl: Duration) -> RunFunctionResponse {
    RunFunctionResponse {
        meta: ResponseMeta {
            tag: req.tag().to_string(),
            ttl,
        },
        desired: req.desired.clone(),
        results: Vec::new(),
        context: req.context.clone(),
        conditions: Vec::new(),
    }
}

/// An error-only response: meta and a single fatal result, nothing else.
pub fn fatal(req: &RunFunctionRequest, ttl: Duration, err: &FatalError) -> RunFunctionResponse {
    RunFunctionResponse {
        meta: ResponseMeta {
            tag: req.tag().to_string(),
            ttl,
        },
        results: vec![FunctionResult {
            severity: Severity::Fatal,
            message: err.to_string(),
            target: Some(Target::Composite),
        }],
        ..Default::default()
    }
}

/// Merge `desired` into the response's desired resources, replacing entries
/// with the same name and keeping the rest.
pub fn set_desired_composed_resources(
    rsp: &mut RunFunctionResponse,
    desired: DesiredResources,
) -> Result<(), FatalError> {
    let state = rsp.desired.get_or_insert_with(State::default);
    for (name, composed) in desired {
        if !composed.resource.is_object() {
            return Err(FatalError::SetDesired(format!(
                "resource {name:?} is not an object"
            )));
        }
        state.resources.insert(
            name,
            Resource {
                resource: composed.resource,
                ready: None,
            },
        );
    }
    Ok(())
}

/// Append rendered results and conditions.
pub fn apply(rsp: &mut RunFunctionResponse, rendered: Rendered) {
    rsp.results.extend(rendered.results);
    rsp.conditions.extend(rendered.conditions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::RequestMeta;
    use crate::resources::DesiredComposed;
    use serde_json::json;

    fn req() -> RunFunctionRequest {
        let mut desired = State::default();
        desired.resources.insert(
            "bucket".into(),
            Resource {
                resource: json!({ "kind": "Bucket" }),
                ready: None,
            },
        );
        RunFunctionRequest {
            meta: Some(RequestMeta { tag: "abc".into() }),
            desired: Some(desired),
            context: Some(json!({ "apiextensions.crossplane.io/environment": {} })),
            ..Default::default()
        }
    }

    #[test]
    fn to_carries_request_state() {
        let rsp = to(&req(), DEFAULT_TTL);
        assert_eq!(rsp.meta.tag, "abc");
        assert_eq!(rsp.meta.ttl, Duration::from_secs(60));
        assert!(rsp.desired.unwrap().resources.contains_key("bucket"));
        assert!(rsp.context.is_some());
    }

    #[test]
    fn fatal_drops_everything_but_the_error() {
        let rsp = fatal(&req(), DEFAULT_TTL, &FatalError::UnknownUx("x".into()));
        assert!(rsp.is_fatal());
        assert!(rsp.desired.is_none());
        assert!(rsp.conditions.is_empty());
        assert!(rsp.context.is_none());
        assert_eq!(rsp.results.len(), 1);
        assert_eq!(rsp.results[0].message, "unknown UX \"x\"");
    }

    #[test]
    fn set_desired_merges_by_name() {
        let mut rsp = to(&req(), DEFAULT_TTL);
        let mut desired = DesiredResources::new();
        desired.insert(
            "bucket".into(),
            DesiredComposed {
                resource: json!({ "kind": "NopResource" }),
            },
        );
        desired.insert(
            "account".into(),
            DesiredComposed {
                resource: json!({ "kind": "NopResource" }),
            },
        );
        set_desired_composed_resources(&mut rsp, desired).unwrap();
        let resources = rsp.desired.unwrap().resources;
        assert_eq!(resources.len(), 2);
        assert_eq!(resources["bucket"].resource["kind"], "NopResource");
    }

    #[test]
    fn set_desired_rejects_non_objects() {
        let mut rsp = RunFunctionResponse::default();
        let mut desired = DesiredResources::new();
        desired.insert(
            "account".into(),
            DesiredComposed {
                resource: json!("not-an-object"),
            },
        );
        assert!(matches!(
            set_desired_composed_resources(&mut rsp, desired),
            Err(FatalError::SetDesired(_))
        ));
    }
}
