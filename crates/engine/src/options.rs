use serde::{Deserialize, Serialize};

/// How the conversion report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Banner, warnings, summary and preview
    #[default]
    Text,
    /// Report as a single JSON document
    Json,
}
