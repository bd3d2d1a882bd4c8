// ABOUTME: Tests for the submit-time request snapshot and its wire shape
// ABOUTME: Unset preferences must serialize as absent fields, not empty strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pantry_chef::form::FormState;
use pantry_chef::models::{GenerationRequest, GenerationResponse};
use pantry_chef::preferences::{CookingTime, CuisineType, MealType};

#[test]
fn test_request_snapshot_from_minimal_form() {
    let mut form = FormState::new();
    form.add_ingredient("chicken");
    form.add_ingredient("rice");

    let request = GenerationRequest::from_form(&form);

    assert_eq!(request.ingredients, ["chicken", "rice"]);
    assert!(request.dietary_restrictions.is_empty());
    assert_eq!(request.cuisine_type, None);
    assert_eq!(request.meal_type, None);
    assert_eq!(request.cooking_time, None);
}

#[test]
fn test_unset_preferences_are_absent_on_the_wire() {
    let mut form = FormState::new();
    form.add_ingredient("chicken");
    form.add_ingredient("rice");

    let request = GenerationRequest::from_form(&form);
    let json = serde_json::to_value(&request).unwrap();

    let object = json.as_object().unwrap();
    assert!(
        !object.contains_key("cuisine_type"),
        "unset cuisine must be absent, not an empty string"
    );
    assert!(!object.contains_key("meal_type"));
    assert!(!object.contains_key("cooking_time"));
    assert_eq!(json["dietary_restrictions"], serde_json::json!([]));
}

#[test]
fn test_set_preferences_use_wire_labels() {
    let mut form = FormState::new();
    form.add_ingredient("salmon");
    form.add_dietary_restriction("gluten-free");
    form.set_cuisine(Some(CuisineType::Asian));
    form.set_meal(Some(MealType::Dinner));
    form.set_cooking_time(Some(CookingTime::ThirtyMinutes));

    let json = serde_json::to_value(GenerationRequest::from_form(&form)).unwrap();

    assert_eq!(json["cuisine_type"], "asian");
    assert_eq!(json["meal_type"], "dinner");
    assert_eq!(json["cooking_time"], "30 minutes");
    assert_eq!(
        json["dietary_restrictions"],
        serde_json::json!(["gluten-free"])
    );
}

#[test]
fn test_request_is_a_snapshot() {
    let mut form = FormState::new();
    form.add_ingredient("chicken");

    let request = GenerationRequest::from_form(&form);
    form.add_ingredient("rice");
    form.set_cuisine(Some(CuisineType::French));

    assert_eq!(request.ingredients, ["chicken"]);
    assert_eq!(request.cuisine_type, None);
}

// ============================================================================
// Response Decoding Tests
// ============================================================================

#[test]
fn test_success_response_decodes_recipe() {
    let raw = r#"{
        "success": true,
        "recipe": {
            "name": "Chicken Rice Bowl",
            "description": "A simple bowl",
            "prep_time": "10 minutes",
            "cook_time": "20 minutes",
            "servings": "2",
            "difficulty": "Easy",
            "ingredients": [{"item": "chicken", "amount": "1", "unit": "lb"}],
            "instructions": [{"step": 1, "instruction": "Cook rice"}]
        }
    }"#;

    let response: GenerationResponse = serde_json::from_str(raw).unwrap();
    assert!(response.success);
    let recipe = response.recipe.unwrap();
    assert_eq!(recipe.name, "Chicken Rice Bowl");
    assert_eq!(recipe.ingredients[0].unit, "lb");
    assert!(recipe.tips.is_empty(), "absent tips decode as empty");
    assert!(recipe.nutrition.is_none());
}

#[test]
fn test_failure_response_decodes_without_recipe() {
    let raw = r#"{"success": false, "error": "No valid recipe found"}"#;
    let response: GenerationResponse = serde_json::from_str(raw).unwrap();
    assert!(!response.success);
    assert!(response.recipe.is_none());
    assert_eq!(response.error.as_deref(), Some("No valid recipe found"));
}

#[test]
fn test_sparse_recipe_fields_default() {
    let raw = r#"{"success": true, "recipe": {"name": "Mystery Dish"}}"#;
    let response: GenerationResponse = serde_json::from_str(raw).unwrap();
    let recipe = response.recipe.unwrap();
    assert_eq!(recipe.name, "Mystery Dish");
    assert_eq!(recipe.prep_time, "");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.instructions.is_empty());
}
