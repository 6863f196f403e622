//! Ticket request value object

use super::category::Category;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A support request as filled in on the ticket form (Value Object)
///
/// Created fresh for every submission attempt and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    category: Category,
    description: String,
}

impl TicketRequest {
    /// Create a request without checking the form's required fields.
    ///
    /// The submission client accepts any pair; use [`TicketRequest::validated`]
    /// at the form boundary.
    pub fn new(category: Category, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
        }
    }

    /// Create a request, enforcing that both fields are filled in
    pub fn validated(
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let description = description.into();
        if !category.is_set() {
            return Err(DomainError::MissingCategory);
        }
        if description.trim().is_empty() {
            return Err(DomainError::EmptyDescription);
        }
        Ok(Self {
            category,
            description,
        })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Ticket content as sent to the agent: `[GUIDE] description`.
    ///
    /// Without a category the bare description is used.
    pub fn content(&self) -> String {
        match self.category.tag() {
            Some(tag) => format!("[{}] {}", tag, self.description),
            None => self.description.clone(),
        }
    }
}
