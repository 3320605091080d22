/*!
 * Directive kinds recognized inside script brackets.
 *
 * Every kind has one canonical upper-case spelling (accented where Spanish
 * requires it). A small, explicit alias table maps the unaccented spellings
 * authors commonly type to their canonical kind.
 */

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::MarkerError;

/// Unaccented spellings accepted in place of the canonical form
const ALIASES: [(&str, MarkerKind); 3] = [
    ("SONREIR", MarkerKind::Sonreir),
    ("ENFASIS", MarkerKind::Enfasis),
    ("RAPIDO", MarkerKind::Rapido),
];

/// A recognized script directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerKind {
    Pausa,
    Sonreir,
    Serio,
    Enfasis,
    Lento,
    Rapido,
    Respirar,
    Alegre,
    Triste,
    Sorprendido,
    Pensativo,
}

impl MarkerKind {
    /// All canonical kinds, in documentation order
    pub const ALL: [MarkerKind; 11] = [
        MarkerKind::Pausa,
        MarkerKind::Sonreir,
        MarkerKind::Serio,
        MarkerKind::Enfasis,
        MarkerKind::Lento,
        MarkerKind::Rapido,
        MarkerKind::Respirar,
        MarkerKind::Alegre,
        MarkerKind::Triste,
        MarkerKind::Sorprendido,
        MarkerKind::Pensativo,
    ];

    // @returns: Canonical spelling used as the kind's identity
    pub fn canonical(&self) -> &'static str {
        match self {
            Self::Pausa => "PAUSA",
            Self::Sonreir => "SONREÍR",
            Self::Serio => "SERIO",
            Self::Enfasis => "ÉNFASIS",
            Self::Lento => "LENTO",
            Self::Rapido => "RÁPIDO",
            Self::Respirar => "RESPIRAR",
            Self::Alegre => "ALEGRE",
            Self::Triste => "TRISTE",
            Self::Sorprendido => "SORPRENDIDO",
            Self::Pensativo => "PENSATIVO",
        }
    }

    // @returns: Display icon for help panels and highlighting
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pausa => "⏸️",
            Self::Sonreir => "😊",
            Self::Serio => "😐",
            Self::Enfasis => "📢",
            Self::Lento => "🐢",
            Self::Rapido => "🐇",
            Self::Respirar => "💨",
            Self::Alegre => "😄",
            Self::Triste => "😢",
            Self::Sorprendido => "😲",
            Self::Pensativo => "🤔",
        }
    }

    // @returns: One-line human readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Pausa => "Pausa automática",
            Self::Sonreir => "Sonreír",
            Self::Serio => "Expresión seria",
            Self::Enfasis => "Enfatizar siguiente idea",
            Self::Lento => "Reducir velocidad",
            Self::Rapido => "Aumentar velocidad",
            Self::Respirar => "Recordatorio de respirar",
            Self::Alegre => "Expresión alegre",
            Self::Triste => "Expresión triste",
            Self::Sorprendido => "Expresión sorprendida",
            Self::Pensativo => "Expresión pensativa",
        }
    }

    /// Example literal an author would type for this kind
    pub fn example(&self) -> String {
        match self {
            Self::Pausa => "[PAUSA 3s]".to_string(),
            other => format!("[{}]", other.canonical()),
        }
    }

    /// Only pauses carry a duration payload
    pub fn accepts_duration(&self) -> bool {
        matches!(self, Self::Pausa)
    }

    /// Resolve a bracket tag to its kind
    ///
    /// Matching is case-insensitive. Known unaccented aliases are rewritten to
    /// their canonical spelling before lookup. Returns `None` for anything
    /// outside the recognized set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let upper = tag.to_uppercase();
        let normalized = ALIASES
            .iter()
            .find(|(alias, _)| *alias == upper)
            .map(|(_, kind)| kind.canonical())
            .unwrap_or(upper.as_str());

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.canonical() == normalized)
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl FromStr for MarkerKind {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.trim()).ok_or_else(|| MarkerError::UnknownMarker(s.to_string()))
    }
}

impl Serialize for MarkerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

impl<'de> Deserialize<'de> for MarkerKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
