//! The function's input document (`template.fn.crossplane.io/v1beta1`, kind `Input`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FatalError;
use crate::ux::UxMode;

pub const INPUT_API_VERSION: &str = "template.fn.crossplane.io/v1beta1";
pub const INPUT_KIND: &str = "Input";

/// Input supplied with each request, selecting the user experience.
///
/// `ux` stays a raw string here; [`Input::ux_mode`] turns it into a
/// [`UxMode`] so an unrecognized value is reported as its own fatal error
/// rather than as a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub ux: String,
}

impl Input {
    pub fn ux_mode(&self) -> Result<UxMode, FatalError> {
        self.ux.parse()
    }
}

/// Decode the request input. A missing or non-object input is a decode failure.
///
/// `apiVersion` and `kind` are carried but not checked.
pub fn decode(input: Option<&Value>) -> Result<Input, FatalError> {
    let value = input.ok_or_else(|| FatalError::InvalidInput("input is not set".to_string()))?;
    if !value.is_object() {
        return Err(FatalError::InvalidInput("input is not an object".to_string()));
    }
    Input::deserialize(value).map_err(|e| FatalError::InvalidInput(e.to_string()))
}
