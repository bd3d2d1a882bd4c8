// ABOUTME: Pure projection from view state to a renderable display tree
// ABOUTME: Optional recipe fields render as omissions, all values verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use crate::models::{Nutrition, Recipe};
use crate::orchestrator::ViewState;
use serde::Serialize;
use std::fmt::Write as _;

/// Labels of the fixed 4-cell info grid, in display order
const INFO_LABELS: [&str; 4] = ["Prep Time", "Cook Time", "Servings", "Difficulty"];

/// One cell of the recipe info grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoCell {
    /// Fixed cell label
    pub label: &'static str,
    /// Value as provided by the service, no normalization
    pub value: String,
}

/// One ingredient line: the item name and its quantity text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    /// Ingredient name, verbatim
    pub item: String,
    /// "amount unit" with empty parts contributing nothing
    pub quantity: String,
}

impl IngredientLine {
    /// Full line text, e.g. "chicken 1 lb"
    #[must_use]
    pub fn text(&self) -> String {
        join_nonempty(&[self.item.as_str(), self.quantity.as_str()])
    }
}

/// One instruction line labeled with the service's own step value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionLine {
    /// Step label, reproduced as-is (gaps and duplicates included)
    pub label: String,
    /// Instruction text
    pub text: String,
}

/// Nutrition block with its four fixed sub-fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NutritionPanel {
    /// Approximate calories per serving, verbatim
    pub calories: String,
    /// Protein content, verbatim
    pub protein: String,
    /// Carbohydrate content, verbatim
    pub carbs: String,
    /// Fat content, verbatim
    pub fat: String,
}

/// Display tree for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeView {
    /// Recipe name, verbatim
    pub name: String,
    /// Recipe description, verbatim
    pub description: String,
    /// Fixed 4-cell grid: prep time, cook time, servings, difficulty
    pub info: Vec<InfoCell>,
    /// Ingredient lines in original order
    pub ingredients: Vec<IngredientLine>,
    /// Instruction lines in original order
    pub instructions: Vec<InstructionLine>,
    /// Tips; an empty list means the section is omitted
    pub tips: Vec<String>,
    /// Nutrition block; `None` means the section is omitted
    pub nutrition: Option<NutritionPanel>,
}

impl RecipeView {
    /// Build the display tree for a recipe.
    ///
    /// Absent optional fields become omissions, never errors.
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let values = [
            recipe.prep_time.clone(),
            recipe.cook_time.clone(),
            recipe.servings.clone(),
            recipe.difficulty.clone(),
        ];
        let info = INFO_LABELS
            .into_iter()
            .zip(values)
            .map(|(label, value)| InfoCell { label, value })
            .collect();

        let ingredients = recipe
            .ingredients
            .iter()
            .map(|i| IngredientLine {
                item: i.item.clone(),
                quantity: join_nonempty(&[i.amount.as_str(), i.unit.as_str()]),
            })
            .collect();

        let instructions = recipe
            .instructions
            .iter()
            .map(|s| InstructionLine {
                label: s.step.to_string(),
                text: s.instruction.clone(),
            })
            .collect();

        Self {
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            info,
            ingredients,
            instructions,
            tips: recipe.tips.clone(),
            nutrition: recipe.nutrition.as_ref().map(nutrition_panel),
        }
    }
}

/// The full display projection of a [`ViewState`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderedView {
    /// Nothing to show yet
    Idle,
    /// A generation call is in flight
    Loading,
    /// Inline error message
    Error {
        /// User-facing message
        message: String,
    },
    /// A generated recipe
    Recipe(Box<RecipeView>),
}

impl RenderedView {
    /// Render the view to plain text, one node per line.
    ///
    /// Adapters with richer layouts walk the tree instead; this rendering
    /// exists so tests and simple surfaces have a deterministic form.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Loading => "Generating recipe...".to_owned(),
            Self::Error { message } => message.clone(),
            Self::Recipe(view) => recipe_text(view),
        }
    }
}

/// Project a view state onto its display tree. Pure: no I/O, never fails.
#[must_use]
pub fn project(state: &ViewState) -> RenderedView {
    match state {
        ViewState::Idle => RenderedView::Idle,
        ViewState::Loading => RenderedView::Loading,
        ViewState::Error(message) => RenderedView::Error {
            message: message.clone(),
        },
        ViewState::Result(recipe) => RenderedView::Recipe(Box::new(RecipeView::from_recipe(recipe))),
    }
}

fn nutrition_panel(nutrition: &Nutrition) -> NutritionPanel {
    NutritionPanel {
        calories: nutrition.calories.clone(),
        protein: nutrition.protein.clone(),
        carbs: nutrition.carbs.clone(),
        fat: nutrition.fat.clone(),
    }
}

/// Join parts with single spaces, skipping empty ones
fn join_nonempty(parts: &[&str]) -> String {
    let mut out = String::new();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

fn recipe_text(view: &RecipeView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.name);
    if !view.description.is_empty() {
        let _ = writeln!(out, "{}", view.description);
    }
    for cell in &view.info {
        let _ = writeln!(out, "{}: {}", cell.label, cell.value);
    }
    let _ = writeln!(out, "Ingredients:");
    for line in &view.ingredients {
        let _ = writeln!(out, "- {}", line.text());
    }
    let _ = writeln!(out, "Instructions:");
    for line in &view.instructions {
        let _ = writeln!(out, "{}. {}", line.label, line.text);
    }
    if !view.tips.is_empty() {
        let _ = writeln!(out, "Tips:");
        for tip in &view.tips {
            let _ = writeln!(out, "- {tip}");
        }
    }
    if let Some(nutrition) = &view.nutrition {
        let _ = writeln!(out, "Nutrition (per serving):");
        let _ = writeln!(out, "Calories: {}", nutrition.calories);
        let _ = writeln!(out, "Protein: {}", nutrition.protein);
        let _ = writeln!(out, "Carbs: {}", nutrition.carbs);
        let _ = writeln!(out, "Fat: {}", nutrition.fat);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_nonempty(&["1", "lb"]), "1 lb");
        assert_eq!(join_nonempty(&["1", ""]), "1");
        assert_eq!(join_nonempty(&["", "lb"]), "lb");
        assert_eq!(join_nonempty(&["", ""]), "");
    }
}
