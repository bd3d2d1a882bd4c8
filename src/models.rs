// ABOUTME: Wire data model for the recipe-generation service contract
// ABOUTME: Defines GenerationRequest, GenerationResponse, Recipe, and sub-records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use crate::form::FormState;
use crate::preferences::{CookingTime, CuisineType, MealType};
use serde::{Deserialize, Serialize};

/// Immutable request payload built from the form at submit time.
///
/// Unset preferences serialize as absent fields, never as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Available ingredients, in the order the user entered them
    pub ingredients: Vec<String>,
    /// Dietary restrictions to respect (may be empty)
    pub dietary_restrictions: Vec<String>,
    /// Preferred cuisine, if selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<CuisineType>,
    /// Meal type, if selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    /// Cooking time preference, if selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<CookingTime>,
}

impl GenerationRequest {
    /// Snapshot the current form state into a request payload
    #[must_use]
    pub fn from_form(form: &FormState) -> Self {
        Self {
            ingredients: form.ingredients().to_vec(),
            dietary_restrictions: form.dietary_restrictions().to_vec(),
            cuisine_type: form.preferences().cuisine_type,
            meal_type: form.preferences().meal_type,
            cooking_time: form.preferences().cooking_time,
        }
    }
}

/// Service reply: either a recipe or a service-level failure reason.
///
/// Absence of a usable response at all is a transport fault and surfaces
/// as [`crate::errors::ServiceError`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Whether the service produced a recipe
    pub success: bool,
    /// The generated recipe when `success` is true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<Recipe>,
    /// Failure reason when `success` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A structured recipe as returned by the generation service.
///
/// The core does not validate this shape beyond tolerating absent fields:
/// every field defaults when missing so a sparse response still renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Preparation time, rendered verbatim (e.g. "15 minutes")
    #[serde(default)]
    pub prep_time: String,
    /// Cooking time, rendered verbatim
    #[serde(default)]
    pub cook_time: String,
    /// Number of servings, rendered verbatim
    #[serde(default)]
    pub servings: String,
    /// Difficulty label, rendered verbatim (e.g. "Easy")
    #[serde(default)]
    pub difficulty: String,
    /// Ingredients in presentation order
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Instruction steps in presentation order
    #[serde(default)]
    pub instructions: Vec<InstructionStep>,
    /// Optional serving tips
    #[serde(default)]
    pub tips: Vec<String>,
    /// Optional per-serving nutrition estimates
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name
    #[serde(default)]
    pub item: String,
    /// Quantity, free-form (e.g. "1", "1-2")
    #[serde(default)]
    pub amount: String,
    /// Measurement unit, free-form (e.g. "lb", "cups")
    #[serde(default)]
    pub unit: String,
}

/// Single instruction step with its own label.
///
/// The `step` value is the service's label, not a position: gaps and
/// duplicates are preserved and rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstructionStep {
    /// Step label supplied by the service
    #[serde(default)]
    pub step: u32,
    /// Instruction text
    #[serde(default)]
    pub instruction: String,
}

/// Per-serving nutrition estimates, all free-form strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Approximate calories per serving
    #[serde(default)]
    pub calories: String,
    /// Protein content
    #[serde(default)]
    pub protein: String,
    /// Carbohydrate content
    #[serde(default)]
    pub carbs: String,
    /// Fat content
    #[serde(default)]
    pub fat: String,
}
