use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    allergen::{entities::Allergen, services::ComputedAllergenProfile},
    common::generate_timestamp,
    ingredient::entities::Ingredient,
    menu_category::entities::MenuCategory,
};

/// A dish never stores its allergens; they are derived from `ingredients`
/// on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub ingredients: Vec<Ingredient>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DishConfig {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
}

impl Dish {
    pub fn new(config: DishConfig, category: &MenuCategory, ingredients: Vec<Ingredient>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            restaurant_id: category.restaurant_id,
            category_id: category.id,
            category_name: category.name.clone(),
            name: config.name,
            description: config.description,
            price_cents: config.price_cents,
            is_available: config.is_available,
            is_vegetarian: config.is_vegetarian,
            is_vegan: config.is_vegan,
            ingredients,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        config: DishConfig,
        category: &MenuCategory,
        ingredients: Vec<Ingredient>,
    ) {
        self.restaurant_id = category.restaurant_id;
        self.category_id = category.id;
        self.category_name = category.name.clone();
        self.name = config.name;
        self.description = config.description;
        self.price_cents = config.price_cents;
        self.is_available = config.is_available;
        self.is_vegetarian = config.is_vegetarian;
        self.is_vegan = config.is_vegan;
        self.ingredients = ingredients;
        self.updated_at = Utc::now();
    }

    pub fn toggle_availability(&mut self) {
        self.is_available = !self.is_available;
        self.updated_at = Utc::now();
    }

    pub fn allergen_profile(&self) -> ComputedAllergenProfile {
        ComputedAllergenProfile::from_ingredients(&self.ingredients)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientSummary {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = Vec<Allergen>)]
    pub allergens: BTreeSet<Allergen>,
}

impl From<&Ingredient> for IngredientSummary {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: ingredient.id,
            name: ingredient.name.clone(),
            allergens: ingredient.allergens.clone(),
        }
    }
}

/// Read model of a dish with its computed allergen profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishView {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub ingredients: Vec<IngredientSummary>,
    #[schema(value_type = Vec<Allergen>)]
    pub allergens: BTreeSet<Allergen>,
    pub allergen_warning: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Dish> for DishView {
    fn from(dish: &Dish) -> Self {
        let profile = dish.allergen_profile();

        Self {
            id: dish.id,
            restaurant_id: dish.restaurant_id,
            category_id: dish.category_id,
            category_name: dish.category_name.clone(),
            name: dish.name.clone(),
            description: dish.description.clone(),
            price_cents: dish.price_cents,
            is_available: dish.is_available,
            is_vegetarian: dish.is_vegetarian,
            is_vegan: dish.is_vegan,
            ingredients: dish.ingredients.iter().map(IngredientSummary::from).collect(),
            allergens: profile.allergens,
            allergen_warning: profile.warning,
            created_at: dish.created_at,
            updated_at: dish.updated_at,
        }
    }
}

impl From<Dish> for DishView {
    fn from(dish: Dish) -> Self {
        Self::from(&dish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::fixtures;

    #[test]
    fn view_carries_computed_profile() {
        let dish = fixtures::dish(
            "Prawn Cocktail",
            vec![
                fixtures::ingredient("Prawns", &[Allergen::Crustaceans]),
                fixtures::ingredient("Egg Mayonnaise", &[Allergen::Eggs]),
            ],
        );

        let view = DishView::from(&dish);

        assert_eq!(
            view.allergens,
            BTreeSet::from([Allergen::Crustaceans, Allergen::Eggs])
        );
        assert_eq!(view.allergen_warning, "⚠ Contains: Crustaceans, Eggs");
        assert_eq!(view.ingredients.len(), 2);
        assert_eq!(view.ingredients[0].name, "Prawns");
    }

    #[test]
    fn view_follows_ingredient_edits() {
        let mut dish = fixtures::dish("Garden Salad", vec![fixtures::ingredient("Lettuce", &[])]);
        assert_eq!(DishView::from(&dish).allergen_warning, "No known allergens");

        dish.ingredients[0].allergens.insert(Allergen::Mustard);

        assert_eq!(DishView::from(&dish).allergen_warning, "⚠ Contains: Mustard");
    }

    #[test]
    fn moving_category_follows_its_restaurant() {
        let restaurant_id = Uuid::new_v4();
        let mut dish = fixtures::dish("Soup", vec![]);
        let category = fixtures::category(restaurant_id, "Starters", 1);

        dish.update(
            DishConfig {
                name: "Soup of the Day".to_string(),
                description: None,
                price_cents: 650,
                is_available: true,
                is_vegetarian: true,
                is_vegan: false,
            },
            &category,
            vec![],
        );

        assert_eq!(dish.restaurant_id, restaurant_id);
        assert_eq!(dish.category_id, category.id);
        assert_eq!(dish.category_name, "Starters");
    }
}
