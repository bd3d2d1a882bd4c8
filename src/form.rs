// ABOUTME: Form state manager owning the mutable ingredient and restriction lists
// ABOUTME: Enforces trim/dedup add rules and pending-input clearing, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use crate::preferences::{CookingTime, CuisineType, MealType, Preferences};
use serde::{Deserialize, Serialize};

/// Ordered collection of distinct, trimmed entries.
///
/// Insertion order is meaningful for display. Matching is case-sensitive
/// on the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryList {
    entries: Vec<String>,
}

impl EntryList {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a trimmed entry if it is non-empty and not already present.
    ///
    /// Returns true when the entry was appended.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.entries.iter().any(|e| e == trimmed) {
            return false;
        }
        self.entries.push(trimmed.to_owned());
        true
    }

    /// Remove the entry matching `value` exactly.
    ///
    /// Returns true when an entry was removed; a non-member is a no-op.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e != value);
        self.entries.len() != before
    }

    /// Entries in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the list has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check membership by exact value
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|e| e == value)
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Mutable form state: ingredient and restriction lists, pending input
/// cells, and scalar preferences.
///
/// All operations are in-memory mutations; the view state lives in
/// [`crate::orchestrator::RequestOrchestrator`] and is reset separately.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormState {
    ingredients: EntryList,
    restrictions: EntryList,
    preferences: Preferences,
    pending_ingredient: String,
    pending_restriction: String,
}

impl FormState {
    /// Create an empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingredients in insertion order
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_slice()
    }

    /// Dietary restrictions in insertion order
    #[must_use]
    pub fn dietary_restrictions(&self) -> &[String] {
        self.restrictions.as_slice()
    }

    /// Current preference selections
    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Text sitting in the ingredient input field
    #[must_use]
    pub fn pending_ingredient(&self) -> &str {
        &self.pending_ingredient
    }

    /// Text sitting in the restriction input field
    #[must_use]
    pub fn pending_restriction(&self) -> &str {
        &self.pending_restriction
    }

    /// Replace the ingredient input field contents
    pub fn set_pending_ingredient(&mut self, text: impl Into<String>) {
        self.pending_ingredient = text.into();
    }

    /// Replace the restriction input field contents
    pub fn set_pending_restriction(&mut self, text: impl Into<String>) {
        self.pending_restriction = text.into();
    }

    /// Add an ingredient. Trims the input; a no-op if empty or already
    /// present. On success the pending ingredient input is cleared.
    pub fn add_ingredient(&mut self, text: &str) {
        if self.ingredients.add(text) {
            self.pending_ingredient.clear();
        }
    }

    /// Commit the pending ingredient input as an ingredient
    pub fn add_pending_ingredient(&mut self) {
        let text = self.pending_ingredient.clone();
        self.add_ingredient(&text);
    }

    /// Remove an ingredient by exact value; a no-op if absent
    pub fn remove_ingredient(&mut self, value: &str) {
        self.ingredients.remove(value);
    }

    /// Add a dietary restriction, same contract as [`Self::add_ingredient`]
    pub fn add_dietary_restriction(&mut self, text: &str) {
        if self.restrictions.add(text) {
            self.pending_restriction.clear();
        }
    }

    /// Commit the pending restriction input as a restriction
    pub fn add_pending_restriction(&mut self) {
        let text = self.pending_restriction.clone();
        self.add_dietary_restriction(&text);
    }

    /// Remove a dietary restriction by exact value; a no-op if absent
    pub fn remove_dietary_restriction(&mut self, value: &str) {
        self.restrictions.remove(value);
    }

    /// Select or clear the cuisine preference
    pub fn set_cuisine(&mut self, cuisine: Option<CuisineType>) {
        self.preferences.cuisine_type = cuisine;
    }

    /// Select or clear the meal type preference
    pub fn set_meal(&mut self, meal: Option<MealType>) {
        self.preferences.meal_type = meal;
    }

    /// Select or clear the cooking time preference
    pub fn set_cooking_time(&mut self, time: Option<CookingTime>) {
        self.preferences.cooking_time = time;
    }

    /// Clear both lists, both pending inputs, and all preferences.
    ///
    /// The orchestrator's view state is reset by its own
    /// [`crate::orchestrator::RequestOrchestrator::reset`].
    pub fn reset(&mut self) {
        self.ingredients.clear();
        self.restrictions.clear();
        self.preferences.clear();
        self.pending_ingredient.clear();
        self.pending_restriction.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_dedupes() {
        let mut list = EntryList::new();
        assert!(list.add("  chicken  "));
        assert!(!list.add("chicken"));
        assert_eq!(list.as_slice(), ["chicken"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut list = EntryList::new();
        assert!(list.add("Chicken"));
        assert!(list.add("chicken"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_nonmember_is_noop() {
        let mut list = EntryList::new();
        list.add("rice");
        assert!(!list.remove("beans"));
        assert_eq!(list.len(), 1);
    }
}
