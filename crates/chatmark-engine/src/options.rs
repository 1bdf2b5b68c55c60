use serde::{Deserialize, Serialize};

/// How the span of a decoded character reference is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharRefSpans {
    /// The full source span consumed, `&` through `;`.
    #[default]
    Source,
    /// Starts at `&` and is as long as the decoded text, as older
    /// consumers of the tree expect. `&quot;` at 0 records `0..1`.
    Decoded,
}

/// Options for inline parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineOptions {
    pub char_ref_spans: CharRefSpans,
}
