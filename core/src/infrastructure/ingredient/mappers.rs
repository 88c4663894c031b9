use std::{
    collections::{BTreeSet, HashMap},
    str::FromStr,
};

use chrono::Utc;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        allergen::entities::Allergen, common::entities::app_errors::CoreError,
        ingredient::entities::Ingredient,
    },
    entity::{
        ingredient_allergens::Model as IngredientAllergenModel,
        ingredients::Model as IngredientModel,
    },
};

/// Builds an ingredient from its row and the tag rows belonging to it. A
/// stored tag outside the catalog is a data fault and fails the read.
pub fn map_ingredient<'a, I>(model: &IngredientModel, tags: I) -> Result<Ingredient, CoreError>
where
    I: IntoIterator<Item = &'a IngredientAllergenModel>,
{
    let allergens = tags
        .into_iter()
        .map(|tag| {
            Allergen::from_str(&tag.allergen).map_err(|_| {
                error!(ingredient_id = %model.id, tag = %tag.allergen, "Unknown allergen tag in storage");
                CoreError::InternalServerError
            })
        })
        .collect::<Result<BTreeSet<Allergen>, CoreError>>()?;

    Ok(Ingredient {
        id: model.id,
        name: model.name.clone(),
        description: model.description.clone(),
        allergens,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

/// Maps ingredient rows against a batch of tag rows for any of them. Tags
/// are grouped by owner once; row order is kept.
pub fn map_ingredients(
    models: &[IngredientModel],
    tags: Vec<IngredientAllergenModel>,
) -> Result<Vec<Ingredient>, CoreError> {
    let mut by_owner: HashMap<Uuid, Vec<IngredientAllergenModel>> = HashMap::new();
    for tag in tags {
        by_owner.entry(tag.ingredient_id).or_default().push(tag);
    }

    models
        .iter()
        .map(|model| map_ingredient(model, by_owner.get(&model.id).into_iter().flatten()))
        .collect()
}
