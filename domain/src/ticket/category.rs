//! Ticket category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Type of request selected on the ticket form (Value Object)
///
/// `Unset` is what the form holds before the user picks anything. The client
/// accepts it (local mode answers with the generic acknowledgement), but the
/// form refuses to submit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Guide,
    Policies,
    Faq,
    #[default]
    Unset,
}

impl Category {
    /// Categories offered by the ticket form, in display order
    pub const SELECTABLE: [Category; 3] = [Category::Guide, Category::Policies, Category::Faq];

    /// Lowercase wire/config name. `Unset` maps to the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Guide => "guide",
            Category::Policies => "policies",
            Category::Faq => "faq",
            Category::Unset => "",
        }
    }

    /// Human label used in form prompts
    pub fn label(&self) -> &'static str {
        match self {
            Category::Guide => "Guide",
            Category::Policies => "Policies",
            Category::Faq => "FAQ",
            Category::Unset => "Type of request",
        }
    }

    /// Uppercase tag prefixed to the ticket content, e.g. `GUIDE`
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Category::Guide => Some("GUIDE"),
            Category::Policies => Some("POLICIES"),
            Category::Faq => Some("FAQ"),
            Category::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Category::Unset)
    }

    /// Parse leniently: unrecognized text becomes `Unset`
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Category::Unset)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Unset => write!(f, "unset"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unset" => Ok(Category::Unset),
            "guide" => Ok(Category::Guide),
            "policies" | "policy" => Ok(Category::Policies),
            "faq" => Ok(Category::Faq),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}
