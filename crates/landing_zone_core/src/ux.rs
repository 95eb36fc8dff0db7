//! Classic vs modern user experience.
//!
//! The two modes produce the same results and conditions with the same
//! severities. The only difference is the [`Target`] attached to each entry:
//! classic keeps feedback on the composite, modern also surfaces it on the
//! claim that the user actually created.

use std::fmt;
use std::str::FromStr;

use crate::error::FatalError;
use crate::proto::{Condition, ConditionStatus, FunctionResult, Severity, Target};
use crate::validate::ValidationOutcome;
use crate::PROVISIONING_CONDITION;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UxMode {
    Classic,
    Modern,
}

impl UxMode {
    pub fn target(self) -> Target {
        match self {
            Self::Classic => Target::Composite,
            Self::Modern => Target::CompositeAndClaim,
        }
    }

    /// Turn a validation outcome into user-visible results and conditions.
    pub fn render(self, outcome: &ValidationOutcome) -> Rendered {
        let target = Some(self.target());
        match outcome.failure() {
            Some(failure) => {
                let detail = failure.to_string();
                Rendered {
                    results: vec![FunctionResult {
                        severity: Severity::Warning,
                        message: format!("landing zone provisioning failed: {detail}"),
                        target,
                    }],
                    conditions: vec![Condition {
                        type_: PROVISIONING_CONDITION.to_string(),
                        status: ConditionStatus::False,
                        reason: "Error".to_string(),
                        message: Some(detail),
                        target,
                    }],
                }
            }
            None => Rendered {
                results: Vec::new(),
                conditions: vec![Condition {
                    type_: PROVISIONING_CONDITION.to_string(),
                    status: ConditionStatus::True,
                    reason: "Success".to_string(),
                    message: None,
                    target,
                }],
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
        }
    }
}

impl FromStr for UxMode {
    type Err = FatalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "modern" => Ok(Self::Modern),
            other => Err(FatalError::UnknownUx(other.to_string())),
        }
    }
}

impl fmt::Display for UxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results and conditions produced by [`UxMode::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub results: Vec<FunctionResult>,
    pub conditions: Vec<Condition>,
}
