//! Environment → permitted tier matrix.

/// Ordered mapping from environment name to the tiers it supports.
///
/// Both the environment order and each tier list are kept in declared order;
/// error messages join them in exactly that order. The matrix is built once at
/// startup and shared read-only between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyMatrix {
    entries: Vec<PolicyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    pub environment: String,
    pub tiers: Vec<String>,
}

impl PolicyMatrix {
    /// The landing zone policy: which tiers each environment may request.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("dev", &["standard", "low"][..]),
            ("staging", &["critical", "standard", "low"][..]),
            ("production", &["critical", "standard"][..]),
        ])
    }

    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let entries = entries
            .into_iter()
            .map(|(environment, tiers)| PolicyEntry {
                environment: environment.to_string(),
                tiers: tiers.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Permitted tiers for `environment`, or `None` if the environment is unknown.
    pub fn tiers_for(&self, environment: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.environment == environment)
            .map(|e| e.tiers.as_slice())
    }

    pub fn environments(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.environment.as_str())
    }

    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }
}

impl Default for PolicyMatrix {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tiers_keep_declared_order() {
        let m = PolicyMatrix::builtin();
        assert_eq!(m.tiers_for("dev").unwrap(), ["standard", "low"]);
        assert_eq!(m.tiers_for("staging").unwrap(), ["critical", "standard", "low"]);
        assert_eq!(m.tiers_for("production").unwrap(), ["critical", "standard"]);
    }

    #[test]
    fn unknown_environment_has_no_tiers() {
        let m = PolicyMatrix::builtin();
        assert!(m.tiers_for("qa").is_none());
        assert!(m.tiers_for("").is_none());
        assert!(m.tiers_for("Production").is_none());
    }

    #[test]
    fn environments_in_declared_order() {
        let m = PolicyMatrix::builtin();
        let envs: Vec<_> = m.environments().collect();
        assert_eq!(envs, ["dev", "staging", "production"]);
    }
}
