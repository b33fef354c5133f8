//! Ad list state for the front page and its category filter.
//!
//! DESIGN
//! ======
//! Separating list inventory from the detail view keeps the filter sidebar
//! and the card grid driven by one small model.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::error::ApiError;
use crate::net::types::{Ad, Category, Id};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(Id),
}

impl CategoryFilter {
    /// Parse the `<select>` value; empty or non-numeric means "all".
    pub fn from_select_value(raw: &str) -> Self {
        raw.trim().parse::<Id>().map_or(Self::All, Self::Category)
    }

    pub fn select_value(self) -> String {
        match self {
            Self::All => String::new(),
            Self::Category(id) => id.to_string(),
        }
    }
}

/// Everything that selects which ads the front page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: CategoryFilter,
    pub unsold_only: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ListingState {
    pub items: Vec<Ad>,
    pub categories: Vec<Category>,
    pub query: ListingQuery,
    pub loading: bool,
    pub error: Option<String>,
}

impl ListingState {
    /// Mark a fetch for `query` as in flight.
    pub fn begin(&mut self, query: ListingQuery) {
        self.query = query;
        self.loading = true;
        self.error = None;
    }

    /// Apply a finished fetch. Responses for a query the user already left
    /// are dropped and reported as not applied.
    pub fn finish(&mut self, query: ListingQuery, result: Result<Vec<Ad>, ApiError>) -> bool {
        if query != self.query {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.items.clear();
                self.error = Some(err.user_message());
            }
        }
        true
    }

    pub fn category_name(&self, id: Id) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}
