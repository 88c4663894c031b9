use std::collections::HashMap;

use chrono::Utc;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError, dish::entities::Dish,
        ingredient::entities::Ingredient,
    },
    entity::{
        dish_ingredients::Model as DishIngredientModel, dishes::Model as DishModel,
        menu_categories::Model as MenuCategoryModel,
    },
};

pub fn map_dish(model: &DishModel, category: &MenuCategoryModel, ingredients: Vec<Ingredient>) -> Dish {
    Dish {
        id: model.id,
        restaurant_id: category.restaurant_id,
        category_id: model.category_id,
        category_name: category.name.clone(),
        name: model.name.clone(),
        description: model.description.clone(),
        price_cents: model.price_cents,
        is_available: model.is_available,
        is_vegetarian: model.is_vegetarian,
        is_vegan: model.is_vegan,
        ingredients,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

/// Joins dish rows with their categories and ingredient links. `links` must
/// already be in position order; links are grouped by dish once. A dish
/// whose category or linked ingredient is missing fails the whole read.
pub fn map_dishes(
    models: &[DishModel],
    categories: &HashMap<Uuid, MenuCategoryModel>,
    links: Vec<DishIngredientModel>,
    ingredients: &HashMap<Uuid, Ingredient>,
) -> Result<Vec<Dish>, CoreError> {
    let mut by_dish: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in links {
        by_dish.entry(link.dish_id).or_default().push(link.ingredient_id);
    }

    models
        .iter()
        .map(|model| {
            let category = categories.get(&model.category_id).ok_or_else(|| {
                error!(dish_id = %model.id, "Dish references a missing category");
                CoreError::InternalServerError
            })?;

            let dish_ingredients = by_dish
                .get(&model.id)
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .map(|ingredient_id| {
                    ingredients.get(ingredient_id).cloned().ok_or_else(|| {
                        error!(dish_id = %model.id, %ingredient_id, "Dish references a missing ingredient");
                        CoreError::InternalServerError
                    })
                })
                .collect::<Result<Vec<Ingredient>, CoreError>>()?;

            Ok(map_dish(model, category, dish_ingredients))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{allergen::entities::Allergen, common::fixtures};

    fn category(restaurant_id: Uuid) -> MenuCategoryModel {
        let now = Utc::now().fixed_offset();
        MenuCategoryModel {
            id: Uuid::new_v4(),
            restaurant_id,
            name: "Starters".to_string(),
            description: None,
            display_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn dish(category_id: Uuid, name: &str) -> DishModel {
        let now = Utc::now().fixed_offset();
        DishModel {
            id: Uuid::new_v4(),
            category_id,
            name: name.to_string(),
            description: None,
            price_cents: 900,
            is_available: true,
            is_vegetarian: false,
            is_vegan: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn link(dish_id: Uuid, ingredient_id: Uuid, position: i32) -> DishIngredientModel {
        DishIngredientModel {
            dish_id,
            ingredient_id,
            position,
        }
    }

    #[test]
    fn links_are_grouped_per_dish_in_position_order() {
        let restaurant_id = Uuid::new_v4();
        let starters = category(restaurant_id);
        let cocktail = dish(starters.id, "Prawn Cocktail");
        let salad = dish(starters.id, "Garden Salad");
        let prawns = fixtures::ingredient("Prawns", &[Allergen::Crustaceans]);
        let mayo = fixtures::ingredient("Egg Mayonnaise", &[Allergen::Eggs]);

        let categories = HashMap::from([(starters.id, starters.clone())]);
        let ingredients = HashMap::from([(prawns.id, prawns.clone()), (mayo.id, mayo.clone())]);
        let links = vec![link(cocktail.id, mayo.id, 0), link(cocktail.id, prawns.id, 1)];

        let dishes = map_dishes(&[cocktail, salad], &categories, links, &ingredients).unwrap();

        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].restaurant_id, restaurant_id);
        let names: Vec<&str> = dishes[0].ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Egg Mayonnaise", "Prawns"]);
        assert!(dishes[1].ingredients.is_empty());
    }

    #[test]
    fn missing_linked_ingredient_fails_the_read() {
        let starters = category(Uuid::new_v4());
        let cocktail = dish(starters.id, "Prawn Cocktail");
        let prawns = fixtures::ingredient("Prawns", &[Allergen::Crustaceans]);

        let categories = HashMap::from([(starters.id, starters.clone())]);
        let ingredients = HashMap::from([(prawns.id, prawns.clone())]);
        let links = vec![link(cocktail.id, prawns.id, 0), link(cocktail.id, Uuid::new_v4(), 1)];

        assert_eq!(
            map_dishes(&[cocktail], &categories, links, &ingredients).unwrap_err(),
            CoreError::InternalServerError
        );
    }

    #[test]
    fn missing_category_fails_the_read() {
        let orphan = dish(Uuid::new_v4(), "Orphan");

        assert_eq!(
            map_dishes(&[orphan], &HashMap::new(), vec![], &HashMap::new()).unwrap_err(),
            CoreError::InternalServerError
        );
    }
}
