/*!
 * Directory of recognized markers, used to render help content.
 */

use serde::Serialize;

use super::kind::MarkerKind;

/// Help entry for one canonical marker kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerInfo {
    /// Canonical kind
    #[serde(rename = "marker")]
    pub kind: MarkerKind,
    /// Display icon
    pub icon: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Literal an author would type
    pub example: String,
}

impl From<MarkerKind> for MarkerInfo {
    fn from(kind: MarkerKind) -> Self {
        Self {
            kind,
            icon: kind.icon(),
            description: kind.description(),
            example: kind.example(),
        }
    }
}

/// All recognized markers, one entry per canonical kind
pub fn available_markers() -> Vec<MarkerInfo> {
    MarkerKind::ALL.into_iter().map(MarkerInfo::from).collect()
}
