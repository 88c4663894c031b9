use std::collections::{HashMap, HashSet};

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    derived_view::ports::DerivedViewCache,
    dish::ports::DishRepository,
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::Ingredient,
        ports::{IngredientRepository, IngredientService},
        value_objects::{CreateIngredientInput, UpdateIngredientInput},
    },
    menu_category::ports::MenuCategoryRepository,
    restaurant::ports::RestaurantRepository,
};

impl<R, MC, I, D, DC, HC> Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    /// Loads `ids` in request order, dropping repeated ids. Fails unless
    /// every id resolves.
    pub(crate) async fn resolve_ingredients(
        &self,
        ids: &[Uuid],
    ) -> Result<Vec<Ingredient>, CoreError> {
        let mut seen = HashSet::new();
        let unique: Vec<Uuid> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();
        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<Uuid, Ingredient> = self
            .ingredient_repository
            .get_by_ids(unique.clone())
            .await?
            .into_iter()
            .map(|ingredient| (ingredient.id, ingredient))
            .collect();

        let missing: Vec<Uuid> = unique
            .iter()
            .copied()
            .filter(|id| !by_id.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::PartialIngredientResolution { missing });
        }

        Ok(unique.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    async fn ensure_unique_name(&self, name: &str, except: Option<Uuid>) -> Result<(), CoreError> {
        match self.ingredient_repository.find_by_name(name.to_string()).await? {
            Some(existing) if Some(existing.id) != except => {
                Err(CoreError::DuplicateName(existing.name))
            }
            _ => Ok(()),
        }
    }

    /// Restaurants serving a dish with the ingredient. Read before the
    /// mutation so a failed lookup leaves the ingredient untouched.
    async fn restaurants_using(&self, ingredient_id: Uuid) -> Result<Vec<Uuid>, CoreError> {
        let restaurant_ids = self
            .dish_repository
            .restaurant_ids_using_ingredient(ingredient_id)
            .await?;

        debug!(%ingredient_id, restaurants = restaurant_ids.len(), "restaurants affected by ingredient");

        Ok(restaurant_ids)
    }

    fn evict_restaurants(&self, restaurant_ids: Vec<Uuid>) {
        for restaurant_id in restaurant_ids {
            self.view_cache.invalidate_restaurant(restaurant_id);
        }
    }
}

impl<R, MC, I, D, DC, HC> IngredientService for Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, CoreError> {
        self.ingredient_repository.fetch_ingredients().await
    }

    #[instrument(skip(self))]
    async fn get_ingredient(&self, ingredient_id: Uuid) -> Result<Ingredient, CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::ingredient_not_found(ingredient_id))
    }

    #[instrument(skip(self))]
    async fn search_ingredients(&self, query: String) -> Result<Vec<Ingredient>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return self.ingredient_repository.fetch_ingredients().await;
        }

        self.ingredient_repository
            .search_by_name(query.to_string())
            .await
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn get_ingredients_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<Ingredient>, CoreError> {
        self.resolve_ingredients(&ids).await
    }

    #[instrument(skip(self, input))]
    async fn create_ingredient(&self, input: CreateIngredientInput) -> Result<Ingredient, CoreError> {
        let name = input.name.trim().to_string();
        self.ensure_unique_name(&name, None).await?;

        let ingredient = Ingredient::new(name, input.description, input.allergens);
        let created = self
            .ingredient_repository
            .create_ingredient(ingredient)
            .await?;

        info!(ingredient_id = %created.id, "ingredient created");

        Ok(created)
    }

    #[instrument(skip(self, input), fields(ingredient_id = %input.ingredient_id))]
    async fn update_ingredient(&self, input: UpdateIngredientInput) -> Result<Ingredient, CoreError> {
        let mut ingredient = self
            .ingredient_repository
            .get_by_id(input.ingredient_id)
            .await?
            .ok_or(CoreError::ingredient_not_found(input.ingredient_id))?;

        let name = input.name.trim().to_string();
        self.ensure_unique_name(&name, Some(ingredient.id)).await?;

        let restaurant_ids = self.restaurants_using(ingredient.id).await?;
        ingredient.update(name, input.description, input.allergens);

        let updated = self
            .ingredient_repository
            .update_ingredient(ingredient)
            .await?;
        self.evict_restaurants(restaurant_ids);

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_ingredient(&self, ingredient_id: Uuid) -> Result<(), CoreError> {
        self.ingredient_repository
            .get_by_id(ingredient_id)
            .await?
            .ok_or(CoreError::ingredient_not_found(ingredient_id))?;

        // The join rows disappear with the ingredient.
        let restaurant_ids = self.restaurants_using(ingredient_id).await?;

        self.ingredient_repository
            .delete_ingredient(ingredient_id)
            .await?;
        self.evict_restaurants(restaurant_ids);

        info!(%ingredient_id, "ingredient deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::domain::{
        allergen::entities::Allergen,
        common::fixtures,
        derived_view::entities::{CachedView, DerivedViewKey},
    };

    #[tokio::test]
    async fn create_rejects_case_insensitive_duplicate() {
        let mut mocks = fixtures::Mocks::default();
        mocks
            .ingredients
            .expect_find_by_name()
            .with(eq("prawns".to_string()))
            .returning(|_| {
                Box::pin(async { Ok(Some(fixtures::ingredient("Prawns", &[Allergen::Crustaceans]))) })
            });
        mocks.ingredients.expect_create_ingredient().never();

        let service = mocks.into_service();
        let err = service
            .create_ingredient(CreateIngredientInput {
                name: " prawns ".to_string(),
                description: None,
                allergens: BTreeSet::from([Allergen::Crustaceans]),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::DuplicateName("Prawns".to_string()));
    }

    #[tokio::test]
    async fn create_keeps_empty_allergen_set() {
        let mut mocks = fixtures::Mocks::default();
        mocks
            .ingredients
            .expect_find_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .ingredients
            .expect_create_ingredient()
            .times(1)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));

        let service = mocks.into_service();
        let created = service
            .create_ingredient(CreateIngredientInput {
                name: "Lettuce".to_string(),
                description: None,
                allergens: BTreeSet::new(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Lettuce");
        assert!(created.allergens.is_empty());
    }

    #[tokio::test]
    async fn update_may_keep_its_own_name() {
        let mut mocks = fixtures::Mocks::default();
        let existing = fixtures::ingredient("Butter", &[Allergen::Milk]);
        let id = existing.id;
        let found = existing.clone();

        mocks.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks.ingredients.expect_find_by_name().returning(move |_| {
            let found = found.clone();
            Box::pin(async move { Ok(Some(found)) })
        });
        mocks
            .ingredients
            .expect_update_ingredient()
            .times(1)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));
        mocks
            .dishes
            .expect_restaurant_ids_using_ingredient()
            .returning(|_| Box::pin(async { Ok(vec![]) }));

        let service = mocks.into_service();
        let updated = service
            .update_ingredient(UpdateIngredientInput {
                ingredient_id: id,
                name: "Butter".to_string(),
                description: Some("Salted".to_string()),
                allergens: BTreeSet::from([Allergen::Milk]),
            })
            .await
            .unwrap();

        assert_eq!(updated.description.as_deref(), Some("Salted"));
    }

    #[tokio::test]
    async fn update_rejects_name_of_another_ingredient() {
        let mut mocks = fixtures::Mocks::default();
        let existing = fixtures::ingredient("Butter", &[Allergen::Milk]);
        let id = existing.id;

        mocks.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks.ingredients.expect_find_by_name().returning(|_| {
            Box::pin(async { Ok(Some(fixtures::ingredient("Cream", &[Allergen::Milk]))) })
        });
        mocks.ingredients.expect_update_ingredient().never();

        let service = mocks.into_service();
        let err = service
            .update_ingredient(UpdateIngredientInput {
                ingredient_id: id,
                name: "cream".to_string(),
                description: None,
                allergens: BTreeSet::from([Allergen::Milk]),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::DuplicateName("Cream".to_string()));
    }

    #[tokio::test]
    async fn update_evicts_every_restaurant_using_the_ingredient() {
        let mut mocks = fixtures::Mocks::default();
        let existing = fixtures::ingredient("Pesto", &[Allergen::Nuts]);
        let id = existing.id;
        let (first, second, untouched) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        mocks.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks
            .ingredients
            .expect_find_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .ingredients
            .expect_update_ingredient()
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));
        mocks
            .dishes
            .expect_restaurant_ids_using_ingredient()
            .with(eq(id))
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(vec![first, second]) }));

        let service = mocks.into_service();
        let excluded = BTreeSet::from([Allergen::Milk]);
        for restaurant_id in [first, second, untouched] {
            service.view_cache().put(
                DerivedViewKey::safe_dishes(restaurant_id, &excluded),
                CachedView::SafeDishes(vec![]),
            );
        }

        service
            .update_ingredient(UpdateIngredientInput {
                ingredient_id: id,
                name: "Pesto".to_string(),
                description: None,
                allergens: BTreeSet::from([Allergen::Nuts, Allergen::Milk]),
            })
            .await
            .unwrap();

        let cached = |restaurant_id| {
            service
                .view_cache()
                .get(&DerivedViewKey::safe_dishes(restaurant_id, &excluded))
                .is_some()
        };
        assert!(!cached(first));
        assert!(!cached(second));
        assert!(cached(untouched));
    }

    #[tokio::test]
    async fn failed_impact_lookup_leaves_ingredient_unchanged() {
        let mut mocks = fixtures::Mocks::default();
        let existing = fixtures::ingredient("Pesto", &[Allergen::Nuts]);
        let id = existing.id;
        let restaurant_id = Uuid::new_v4();

        mocks.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks
            .ingredients
            .expect_find_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .dishes
            .expect_restaurant_ids_using_ingredient()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        mocks.ingredients.expect_update_ingredient().never();

        let service = mocks.into_service();
        let excluded = BTreeSet::from([Allergen::Milk]);
        service.view_cache().put(
            DerivedViewKey::safe_dishes(restaurant_id, &excluded),
            CachedView::SafeDishes(vec![]),
        );

        let err = service
            .update_ingredient(UpdateIngredientInput {
                ingredient_id: id,
                name: "Pesto".to_string(),
                description: None,
                allergens: BTreeSet::from([Allergen::Nuts, Allergen::Milk]),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InternalServerError);
        // Nothing was written, so the cached view is still accurate.
        assert!(
            service
                .view_cache()
                .get(&DerivedViewKey::safe_dishes(restaurant_id, &excluded))
                .is_some()
        );
    }

    #[tokio::test]
    async fn update_collects_affected_restaurants_before_writing() {
        let mut mocks = fixtures::Mocks::default();
        let existing = fixtures::ingredient("Pesto", &[Allergen::Nuts]);
        let id = existing.id;
        let restaurant_id = Uuid::new_v4();
        let mut seq = Sequence::new();

        mocks.ingredients.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks
            .ingredients
            .expect_find_by_name()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks
            .dishes
            .expect_restaurant_ids_using_ingredient()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Box::pin(async move { Ok(vec![restaurant_id]) }));
        mocks
            .ingredients
            .expect_update_ingredient()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|ingredient| Box::pin(async move { Ok(ingredient) }));

        let service = mocks.into_service();
        let key = DerivedViewKey::safe_dishes(restaurant_id, &BTreeSet::new());
        service
            .view_cache()
            .put(key.clone(), CachedView::SafeDishes(vec![]));

        service
            .update_ingredient(UpdateIngredientInput {
                ingredient_id: id,
                name: "Pesto".to_string(),
                description: None,
                allergens: BTreeSet::from([Allergen::Nuts, Allergen::Milk]),
            })
            .await
            .unwrap();

        assert!(service.view_cache().get(&key).is_none());
    }

    #[tokio::test]
    async fn get_by_ids_lists_every_missing_id() {
        let mut mocks = fixtures::Mocks::default();
        let known = fixtures::ingredient("Egg", &[Allergen::Eggs]);
        let known_id = known.id;
        let (missing_a, missing_b) = (Uuid::new_v4(), Uuid::new_v4());

        mocks.ingredients.expect_get_by_ids().times(1).returning(move |_| {
            let known = known.clone();
            Box::pin(async move { Ok(vec![known]) })
        });

        let service = mocks.into_service();
        let err = service
            .get_ingredients_by_ids(vec![missing_a, known_id, missing_b, missing_a])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::PartialIngredientResolution {
                missing: vec![missing_a, missing_b]
            }
        );
    }

    #[tokio::test]
    async fn get_by_ids_preserves_request_order() {
        let mut mocks = fixtures::Mocks::default();
        let egg = fixtures::ingredient("Egg", &[Allergen::Eggs]);
        let flour = fixtures::ingredient("Flour", &[Allergen::CerealsWithGluten]);
        let (egg_id, flour_id) = (egg.id, flour.id);

        mocks.ingredients.expect_get_by_ids().returning(move |_| {
            let (egg, flour) = (egg.clone(), flour.clone());
            Box::pin(async move { Ok(vec![egg, flour]) })
        });

        let service = mocks.into_service();
        let resolved = service
            .get_ingredients_by_ids(vec![flour_id, egg_id])
            .await
            .unwrap();

        let ids: Vec<Uuid> = resolved.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![flour_id, egg_id]);
    }

    #[tokio::test]
    async fn empty_id_list_skips_the_store() {
        let mut mocks = fixtures::Mocks::default();
        mocks.ingredients.expect_get_by_ids().never();

        let service = mocks.into_service();

        assert!(service.get_ingredients_by_ids(vec![]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_search_lists_everything() {
        let mut mocks = fixtures::Mocks::default();
        mocks.ingredients.expect_search_by_name().never();
        mocks
            .ingredients
            .expect_fetch_ingredients()
            .times(1)
            .returning(|| Box::pin(async { Ok(vec![fixtures::ingredient("Salt", &[])]) }));

        let service = mocks.into_service();

        assert_eq!(service.search_ingredients("   ".to_string()).await.unwrap().len(), 1);
    }
}
