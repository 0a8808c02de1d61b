//! Request and response shapes of the equation recognition service.
//!
//! The service takes a form-encoded POST with two fields:
//!
//! ```text
//! apiKey=<opaque credential>
//! equationInput=<JSON string of EquationInput>
//! ```
//!
//! and answers with `{"result": {"results": [{"value": "..."}, ...]}}`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IpcError;

/// One ink component of an equation input.
///
/// Serializes as `{"type": "stroke", "x": [...], "y": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InkComponent {
    Stroke { x: Vec<f32>, y: Vec<f32> },
}

impl InkComponent {
    /// Number of points in the component.
    pub fn point_count(&self) -> usize {
        match self {
            Self::Stroke { x, .. } => x.len(),
        }
    }
}

/// Output format requested from the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultType {
    #[default]
    #[serde(rename = "LATEX")]
    LaTeX,
    #[serde(rename = "MATHML")]
    MathML,
    #[serde(rename = "SYMBOLTREE")]
    SymbolTree,
}

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LaTeX => "LATEX",
            Self::MathML => "MATHML",
            Self::SymbolTree => "SYMBOLTREE",
        }
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultType {
    type Err = IpcError;

    /// Accepts the wire names as well as the selector labels (`LaTeX`, `MathML`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LATEX" => Ok(Self::LaTeX),
            "MATHML" => Ok(Self::MathML),
            "SYMBOLTREE" => Ok(Self::SymbolTree),
            _ => Err(IpcError::UnknownResultType(s.to_string())),
        }
    }
}

/// The JSON document carried in the `equationInput` form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquationInput {
    pub components: Vec<InkComponent>,
    pub result_types: Vec<ResultType>,
}

impl EquationInput {
    pub fn new(components: Vec<InkComponent>, result_type: ResultType) -> Self {
        Self {
            components,
            result_types: vec![result_type],
        }
    }

    /// Encode as the JSON string sent in the form body.
    pub fn to_json_string(&self) -> Result<String, IpcError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Form-encoded body of a recognition request.
#[derive(Clone, Serialize)]
pub struct RecognitionForm {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(rename = "equationInput")]
    pub equation_input: String,
}

impl RecognitionForm {
    pub fn new(api_key: impl Into<String>, input: &EquationInput) -> Result<Self, IpcError> {
        Ok(Self {
            api_key: api_key.into(),
            equation_input: input.to_json_string()?,
        })
    }
}

impl fmt::Debug for RecognitionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecognitionForm")
            .field("api_key", &"<redacted>")
            .field("equation_input", &self.equation_input)
            .finish()
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    pub result: RecognitionResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub results: Vec<ResultCandidate>,
}

/// One candidate string, e.g. a LaTeX or MathML rendition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCandidate {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: String,
}

impl RecognitionResponse {
    /// Parse a response body, rejecting anything without `result.results`.
    pub fn from_body(body: &str) -> Result<Self, IpcError> {
        serde_json::from_str(body).map_err(|e| IpcError::InvalidFormat(e.to_string()))
    }

    /// All candidate values concatenated in order.
    pub fn formula(&self) -> String {
        self.result
            .results
            .iter()
            .map(|candidate| candidate.value.as_str())
            .collect()
    }
}
