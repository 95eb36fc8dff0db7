//! Environment/tier validation against the [`PolicyMatrix`].

use std::fmt;

use crate::policy::PolicyMatrix;

/// Result of checking one environment/tier pair.
///
/// A rejection always carries its detail; a permitted pair never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Permitted,
    Rejected(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_permitted(&self) -> bool {
        matches!(self, Self::Permitted)
    }

    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Permitted => None,
            Self::Rejected(f) => Some(f),
        }
    }
}

/// Why a landing zone request is not permitted.
///
/// This is a business outcome, not an error of the function itself: the
/// pipeline keeps going and reports it as a warning plus a false condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    UnknownEnvironment {
        environment: String,
        supported: Vec<String>,
    },
    UnsupportedTier {
        environment: String,
        tier: String,
        supported: Vec<String>,
    },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEnvironment {
                environment,
                supported,
            } => write!(
                f,
                "unknown environment '{environment}'. supported environments include '{}'",
                supported.join(", ")
            ),
            Self::UnsupportedTier {
                environment,
                tier,
                supported,
            } => write!(
                f,
                "environment '{environment}' does not support tier '{tier}'. supported tiers for '{environment}' include '{}'",
                supported.join(", ")
            ),
        }
    }
}

/// Check `environment`/`tier` against `matrix`.
pub fn validate(matrix: &PolicyMatrix, environment: &str, tier: &str) -> ValidationOutcome {
    let Some(tiers) = matrix.tiers_for(environment) else {
        return ValidationOutcome::Rejected(ValidationFailure::UnknownEnvironment {
            environment: environment.to_string(),
            supported: matrix.environments().map(str::to_string).collect(),
        });
    };

    if tiers.iter().any(|t| t == tier) {
        ValidationOutcome::Permitted
    } else {
        ValidationOutcome::Rejected(ValidationFailure::UnsupportedTier {
            environment: environment.to_string(),
            tier: tier.to_string(),
            supported: tiers.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn production_low_is_rejected_with_declared_tier_order() {
        let outcome = validate(&PolicyMatrix::builtin(), "production", "low");
        let failure = outcome.failure().expect("should be rejected");
        assert_eq!(
            failure.to_string(),
            "environment 'production' does not support tier 'low'. supported tiers for 'production' include 'critical, standard'"
        );
    }

    #[test]
    fn dev_critical_is_rejected() {
        let outcome = validate(&PolicyMatrix::builtin(), "dev", "critical");
        assert_eq!(
            outcome.failure().unwrap().to_string(),
            "environment 'dev' does not support tier 'critical'. supported tiers for 'dev' include 'standard, low'"
        );
    }

    #[test]
    fn unknown_environment_is_distinct() {
        let outcome = validate(&PolicyMatrix::builtin(), "qa", "standard");
        match &outcome {
            ValidationOutcome::Rejected(ValidationFailure::UnknownEnvironment {
                environment, ..
            }) => assert_eq!(environment, "qa"),
            other => panic!("expected UnknownEnvironment, got {other:?}"),
        }
        assert_eq!(
            outcome.failure().unwrap().to_string(),
            "unknown environment 'qa'. supported environments include 'dev, staging, production'"
        );
    }

    #[test]
    fn missing_fields_are_an_unknown_environment() {
        let outcome = validate(&PolicyMatrix::builtin(), "", "");
        assert!(matches!(
            outcome,
            ValidationOutcome::Rejected(ValidationFailure::UnknownEnvironment { .. })
        ));
    }

    #[test]
    fn every_declared_pair_is_permitted() {
        let m = PolicyMatrix::builtin();
        for entry in m.entries() {
            for tier in &entry.tiers {
                assert!(validate(&m, &entry.environment, tier).is_permitted());
            }
        }
    }

    fn arb_tier() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("critical".to_string()),
            Just("standard".to_string()),
            Just("low".to_string()),
            "[a-z]{1,10}",
        ]
    }

    proptest! {
        #[test]
        fn unknown_environments_never_pass(env in "[a-z]{1,12}", tier in arb_tier()) {
            prop_assume!(!["dev", "staging", "production"].contains(&env.as_str()));
            let outcome = validate(&PolicyMatrix::builtin(), &env, &tier);
            let is_unknown = matches!(
                outcome,
                ValidationOutcome::Rejected(ValidationFailure::UnknownEnvironment { .. })
            );
            prop_assert!(is_unknown);
        }

        #[test]
        fn rejection_lists_exactly_the_permitted_tiers(
            env in prop_oneof![Just("dev"), Just("staging"), Just("production")],
            tier in arb_tier(),
        ) {
            let m = PolicyMatrix::builtin();
            let tiers = m.tiers_for(env).unwrap();
            let outcome = validate(&m, env, &tier);
            if tiers.contains(&tier) {
                prop_assert!(outcome.is_permitted());
            } else {
                let detail = outcome.failure().unwrap().to_string();
                let expected = format!("supported tiers for '{env}' include '{}'", tiers.join(", "));
                prop_assert!(detail.ends_with(&expected));
            }
        }
    }
}
