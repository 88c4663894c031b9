use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    derived_view::ports::DerivedViewCache,
    dish::ports::DishRepository,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    menu_category::{
        entities::{CategorySummary, MenuCategory},
        ports::{MenuCategoryRepository, MenuCategoryService},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    restaurant::ports::RestaurantRepository,
};

impl<R, MC, I, D, DC, HC> MenuCategoryService for Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_categories(&self, restaurant_id: Uuid) -> Result<Vec<CategorySummary>, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::restaurant_not_found(restaurant_id))?;

        self.category_repository
            .fetch_by_restaurant(restaurant_id)
            .await
    }

    #[instrument(skip(self))]
    async fn get_category(&self, category_id: Uuid) -> Result<CategorySummary, CoreError> {
        self.category_repository
            .get_summary_by_id(category_id)
            .await?
            .ok_or(CoreError::category_not_found(category_id))
    }

    #[instrument(skip(self, input), fields(restaurant_id = %input.restaurant_id))]
    async fn create_category(&self, input: CreateCategoryInput) -> Result<MenuCategory, CoreError> {
        self.restaurant_repository
            .get_by_id(input.restaurant_id)
            .await?
            .ok_or(CoreError::restaurant_not_found(input.restaurant_id))?;

        let category = MenuCategory::new(
            input.restaurant_id,
            input.name,
            input.description,
            input.display_order,
        );
        let created = self.category_repository.create_category(category).await?;
        self.view_cache.invalidate_restaurant(created.restaurant_id);

        info!(category_id = %created.id, "menu category created");

        Ok(created)
    }

    #[instrument(skip(self, input), fields(category_id = %input.category_id))]
    async fn update_category(&self, input: UpdateCategoryInput) -> Result<MenuCategory, CoreError> {
        let mut category = self
            .category_repository
            .get_by_id(input.category_id)
            .await?
            .ok_or(CoreError::category_not_found(input.category_id))?;

        category.update(input.name, input.description, input.display_order);

        let updated = self.category_repository.update_category(category).await?;
        self.view_cache.invalidate_restaurant(updated.restaurant_id);

        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_category(&self, category_id: Uuid) -> Result<(), CoreError> {
        let category = self
            .category_repository
            .get_by_id(category_id)
            .await?
            .ok_or(CoreError::category_not_found(category_id))?;

        self.category_repository
            .delete_category(category_id)
            .await?;
        self.view_cache.invalidate_restaurant(category.restaurant_id);

        info!(%category_id, "menu category deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::{
            fixtures,
            value_objects::{PageRequest, Paginated},
        },
        derived_view::entities::{CachedView, DerivedViewKey},
    };

    fn seed_menu_page(service: &fixtures::TestService, restaurant_id: Uuid) -> DerivedViewKey {
        let key = DerivedViewKey::menu_page(restaurant_id, 0);
        service.view_cache().put(
            key.clone(),
            CachedView::MenuPage(Paginated::new(vec![], PageRequest::default(), 0)),
        );
        key
    }

    #[tokio::test]
    async fn create_category_requires_restaurant() {
        let mut mocks = fixtures::Mocks::default();
        let restaurant_id = Uuid::new_v4();
        mocks
            .restaurants
            .expect_get_by_id()
            .with(eq(restaurant_id))
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.categories.expect_create_category().never();

        let service = mocks.into_service();
        let err = service
            .create_category(CreateCategoryInput {
                restaurant_id,
                name: "Starters".to_string(),
                description: None,
                display_order: 1,
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::restaurant_not_found(restaurant_id));
    }

    #[tokio::test]
    async fn create_category_evicts_restaurant_views() {
        let mut mocks = fixtures::Mocks::default();
        let restaurant = fixtures::restaurant("Bistro");
        let restaurant_id = restaurant.id;
        mocks.restaurants.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        mocks
            .categories
            .expect_create_category()
            .times(1)
            .returning(|category| Box::pin(async move { Ok(category) }));

        let service = mocks.into_service();
        let key = seed_menu_page(&service, restaurant_id);

        let created = service
            .create_category(CreateCategoryInput {
                restaurant_id,
                name: "Desserts".to_string(),
                description: Some("Sweet things".to_string()),
                display_order: 3,
            })
            .await
            .unwrap();

        assert_eq!(created.restaurant_id, restaurant_id);
        assert_eq!(created.display_order, 3);
        assert!(service.view_cache().get(&key).is_none());
    }

    #[tokio::test]
    async fn update_category_evicts_owning_restaurant() {
        let mut mocks = fixtures::Mocks::default();
        let restaurant_id = Uuid::new_v4();
        let category = fixtures::category(restaurant_id, "Mains", 2);
        let category_id = category.id;
        mocks
            .categories
            .expect_get_by_id()
            .with(eq(category_id))
            .returning(move |_| {
                let category = category.clone();
                Box::pin(async move { Ok(Some(category)) })
            });
        mocks
            .categories
            .expect_update_category()
            .times(1)
            .returning(|category| Box::pin(async move { Ok(category) }));

        let service = mocks.into_service();
        let key = seed_menu_page(&service, restaurant_id);

        let updated = service
            .update_category(UpdateCategoryInput {
                category_id,
                name: "Main Courses".to_string(),
                description: None,
                display_order: 1,
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Main Courses");
        assert_eq!(updated.display_order, 1);
        assert!(service.view_cache().get(&key).is_none());
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let mut mocks = fixtures::Mocks::default();
        let category_id = Uuid::new_v4();
        mocks
            .categories
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        mocks.categories.expect_delete_category().never();

        let service = mocks.into_service();
        let err = service.delete_category(category_id).await.unwrap_err();

        assert_eq!(err, CoreError::category_not_found(category_id));
    }
}
