// ABOUTME: Closed option sets for cuisine, meal type, and cooking time preferences
// ABOUTME: Out-of-set values are rejected at the parse boundary, never coerced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A preference string that is not part of its option set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} option: {value}")]
pub struct UnknownOptionError {
    /// Which option set was being parsed
    pub field: &'static str,
    /// The rejected input
    pub value: String,
}

/// Supported cuisine styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CuisineType {
    Italian,
    Mexican,
    Asian,
    Mediterranean,
    Indian,
    American,
    French,
}

impl CuisineType {
    /// All selectable cuisines, in display order
    pub const ALL: [Self; 7] = [
        Self::Italian,
        Self::Mexican,
        Self::Asian,
        Self::Mediterranean,
        Self::Indian,
        Self::American,
        Self::French,
    ];

    /// Wire representation of this cuisine
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Italian => "italian",
            Self::Mexican => "mexican",
            Self::Asian => "asian",
            Self::Mediterranean => "mediterranean",
            Self::Indian => "indian",
            Self::American => "american",
            Self::French => "french",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CuisineType {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownOptionError {
                field: "cuisine_type",
                value: s.to_owned(),
            })
    }
}

/// Supported meal types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}

impl MealType {
    /// All selectable meal types, in display order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::Dessert,
    ];

    /// Wire representation of this meal type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Dessert => "dessert",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownOptionError {
                field: "meal_type",
                value: s.to_owned(),
            })
    }
}

/// Cooking time preference.
///
/// Wire values are the human-readable labels the service expects
/// ("15 minutes", "1 hour", ...), not identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CookingTime {
    #[serde(rename = "15 minutes")]
    FifteenMinutes,
    #[serde(rename = "30 minutes")]
    ThirtyMinutes,
    #[serde(rename = "1 hour")]
    OneHour,
    #[serde(rename = "2 hours")]
    TwoHours,
    #[serde(rename = "no preference")]
    NoPreference,
}

impl CookingTime {
    /// All selectable cooking times, in display order
    pub const ALL: [Self; 5] = [
        Self::FifteenMinutes,
        Self::ThirtyMinutes,
        Self::OneHour,
        Self::TwoHours,
        Self::NoPreference,
    ];

    /// Wire representation of this cooking time
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FifteenMinutes => "15 minutes",
            Self::ThirtyMinutes => "30 minutes",
            Self::OneHour => "1 hour",
            Self::TwoHours => "2 hours",
            Self::NoPreference => "no preference",
        }
    }
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CookingTime {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownOptionError {
                field: "cooking_time",
                value: s.to_owned(),
            })
    }
}

/// The three independent optional preference selections.
///
/// No cross-field invariants: each is either unset or one value from its
/// option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred cuisine, if any
    pub cuisine_type: Option<CuisineType>,
    /// Meal type, if any
    pub meal_type: Option<MealType>,
    /// Cooking time preference, if any
    pub cooking_time: Option<CookingTime>,
}

impl Preferences {
    /// Check whether no preference is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cuisine_type.is_none() && self.meal_type.is_none() && self.cooking_time.is_none()
    }

    /// Clear all three selections
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
