//! Response-extraction protocol for model replies that should be JSON.
//!
//! Models asked for JSON-only output still wrap replies in markdown fences or
//! prose often enough that the caller needs a defined recovery path. The
//! protocol is two-stage: strict parse, then fence-stripped parse, then a
//! tagged unstructured fallback. Transport failures never reach this code;
//! they surface as `Err(LlmError)` before extraction runs, so structured
//! results, unstructured fallbacks, and errors stay distinct.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

const FENCE: &str = "```";

/// Outcome of extracting structured data from a model reply.
///
/// `Structured` serializes as the JSON value itself; `Unstructured` as
/// `{"rawText": <reply>}` so clients can always tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Structured(Value),
    Unstructured(String),
}

impl Serialize for Extraction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extraction::Structured(value) => value.serialize(serializer),
            Extraction::Unstructured(text) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("rawText", text)?;
                map.end()
            }
        }
    }
}

/// Turns a free-form model reply into an `Extraction`.
///
/// 1. Strict JSON parse of the trimmed reply.
/// 2. On failure, if the reply contains a code-fence delimiter: take the
///    content between the first pair of delimiters (to end-of-text when the
///    fence is unclosed), strip one leading `json` language tag, trim, and
///    retry the parse.
/// 3. Otherwise the original reply comes back verbatim as `Unstructured`.
pub fn extract_json(text: &str) -> Extraction {
    if let Ok(value) = serde_json::from_str::<Value>(text.trim()) {
        return Extraction::Structured(value);
    }

    if let Some(start) = text.find(FENCE) {
        let rest = &text[start + FENCE.len()..];
        let inner = match rest.find(FENCE) {
            Some(end) => &rest[..end],
            None => rest,
        };
        let inner = inner.strip_prefix("json").unwrap_or(inner).trim();
        if let Ok(value) = serde_json::from_str::<Value>(inner) {
            return Extraction::Structured(value);
        }
    }

    Extraction::Unstructured(text.to_string())
}
