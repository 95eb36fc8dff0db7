//! Dotted field-path lookups over loosely typed JSON documents.
//!
//! Only the requested path is inspected; unrelated fields may be missing or
//! malformed without affecting the lookup.

use serde_json::Value;

/// Walk `path` (e.g. `spec.environment`) through nested objects.
pub fn get<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(doc);
    }
    path.split('.')
        .try_fold(doc, |cur, segment| cur.as_object()?.get(segment))
}

/// The string at `path`, or `None` if absent or not a string.
pub fn get_str<'a>(doc: &'a Value, path: &str) -> Option<&'a str> {
    get(doc, path)?.as_str()
}

/// The string at `path`, or `""` when absent, mirroring how an unset field
/// reads on an unstructured object.
pub fn get_string_or_default(doc: &Value, path: &str) -> String {
    get_str(doc, path).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn xr() -> Value {
        json!({
            "apiVersion": "xp-demo.crossplane.io/v1alpha1",
            "kind": "XLandingZone",
            "metadata": { "generateName": "lz-" },
            "spec": {
                "team": "core",
                "environment": "production",
                "tier": "low",
                "labels": ["a", "b"],
                "replicas": 3
            }
        })
    }

    #[test]
    fn reads_nested_strings() {
        let doc = xr();
        assert_eq!(get_str(&doc, "spec.environment"), Some("production"));
        assert_eq!(get_str(&doc, "spec.tier"), Some("low"));
        assert_eq!(get_str(&doc, "metadata.generateName"), Some("lz-"));
    }

    #[test]
    fn non_strings_and_missing_paths_are_none() {
        let doc = xr();
        assert_eq!(get_str(&doc, "spec.replicas"), None);
        assert_eq!(get_str(&doc, "spec.labels"), None);
        assert_eq!(get_str(&doc, "spec.missing"), None);
        assert_eq!(get_str(&doc, "spec.tier.deeper"), None);
        assert_eq!(get_str(&doc, "status.region"), None);
    }

    #[test]
    fn malformed_siblings_do_not_matter() {
        let doc = json!({ "spec": { "environment": "dev", "tier": null, "junk": {"x": [1, {}]} } });
        assert_eq!(get_string_or_default(&doc, "spec.environment"), "dev");
        assert_eq!(get_string_or_default(&doc, "spec.tier"), "");
    }

    #[test]
    fn non_object_root() {
        assert_eq!(get_str(&json!("spec"), "spec"), None);
        assert_eq!(get(&json!(null), "").unwrap(), &Value::Null);
    }
}
