use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    derived_view::ports::DerivedViewCache,
    dish::ports::DishRepository,
    health::ports::HealthCheckRepository,
    ingredient::ports::IngredientRepository,
    menu_category::ports::MenuCategoryRepository,
    restaurant::{
        entities::{Restaurant, RestaurantConfig, RestaurantSummary},
        ports::{RestaurantRepository, RestaurantService},
        value_objects::{CreateRestaurantInput, UpdateRestaurantInput},
    },
};

impl<R, MC, I, D, DC, HC> RestaurantService for Service<R, MC, I, D, DC, HC>
where
    R: RestaurantRepository,
    MC: MenuCategoryRepository,
    I: IngredientRepository,
    D: DishRepository,
    DC: DerivedViewCache,
    HC: HealthCheckRepository,
{
    async fn get_restaurants(&self) -> Result<Vec<RestaurantSummary>, CoreError> {
        self.restaurant_repository.fetch_restaurants().await
    }

    #[instrument(skip(self))]
    async fn get_restaurant(&self, restaurant_id: Uuid) -> Result<RestaurantSummary, CoreError> {
        self.restaurant_repository
            .get_summary_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::restaurant_not_found(restaurant_id))
    }

    #[instrument(skip(self, input))]
    async fn create_restaurant(
        &self,
        input: CreateRestaurantInput,
    ) -> Result<RestaurantSummary, CoreError> {
        let restaurant = Restaurant::new(input.into());
        let created = self.restaurant_repository.create_restaurant(restaurant).await?;

        info!(restaurant_id = %created.id, "restaurant created");

        Ok(created.into())
    }

    #[instrument(skip(self, input), fields(restaurant_id = %input.restaurant_id))]
    async fn update_restaurant(
        &self,
        input: UpdateRestaurantInput,
    ) -> Result<RestaurantSummary, CoreError> {
        let mut restaurant = self
            .restaurant_repository
            .get_by_id(input.restaurant_id)
            .await?
            .ok_or(CoreError::restaurant_not_found(input.restaurant_id))?;

        restaurant.update(
            RestaurantConfig {
                name: input.name,
                address: input.address,
                phone: input.phone,
                email: input.email,
                description: input.description,
            },
            input.is_active,
        );

        let updated = self.restaurant_repository.update_restaurant(restaurant).await?;

        // Cached views carry no restaurant fields, so they stay valid here.
        self.restaurant_repository
            .get_summary_by_id(updated.id)
            .await?
            .ok_or(CoreError::restaurant_not_found(updated.id))
    }

    #[instrument(skip(self))]
    async fn delete_restaurant(&self, restaurant_id: Uuid) -> Result<(), CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::restaurant_not_found(restaurant_id))?;

        self.restaurant_repository
            .delete_restaurant(restaurant_id)
            .await?;
        self.view_cache.invalidate_restaurant(restaurant_id);

        info!(%restaurant_id, "restaurant deleted");

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

    #[tokio::test]
    async fn get_restaurant_reports_missing_id() {
        let mut mocks = fixtures::Mocks::default();
        let id = Uuid::new_v4();
        mocks
            .restaurants
            .expect_get_summary_by_id()
            .with(eq(id))
            .times(1)
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = mocks.into_service();
        let err = service.get_restaurant(id).await.unwrap_err();

        assert_eq!(err, CoreError::restaurant_not_found(id));
    }

    #[tokio::test]
    async fn create_restaurant_starts_active_with_empty_menu() {
        let mut mocks = fixtures::Mocks::default();
        mocks
            .restaurants
            .expect_create_restaurant()
            .times(1)
            .returning(|restaurant| Box::pin(async move { Ok(restaurant) }));

        let service = mocks.into_service();
        let summary = service
            .create_restaurant(CreateRestaurantInput {
                name: "The Harbour".to_string(),
                address: "2 Quay Road".to_string(),
                phone: None,
                email: None,
                description: None,
            })
            .await
            .unwrap();

        assert!(summary.restaurant.is_active);
        assert_eq!(summary.restaurant.name, "The Harbour");
        assert_eq!(summary.category_count, 0);
        assert_eq!(summary.dish_count, 0);
    }

    #[tokio::test]
    async fn update_restaurant_keeps_active_flag_when_omitted() {
        let mut mocks = fixtures::Mocks::default();
        let mut existing = fixtures::restaurant("Old Name");
        existing.is_active = false;
        let id = existing.id;

        mocks
            .restaurants
            .expect_get_by_id()
            .with(eq(id))
            .returning(move |_| {
                let existing = existing.clone();
                Box::pin(async move { Ok(Some(existing)) })
            });
        mocks
            .restaurants
            .expect_update_restaurant()
            .times(1)
            .returning(|restaurant| Box::pin(async move { Ok(restaurant) }));
        mocks
            .restaurants
            .expect_get_summary_by_id()
            .with(eq(id))
            .returning(|_| {
                Box::pin(async {
                    let mut restaurant = fixtures::restaurant("New Name");
                    restaurant.is_active = false;
                    Ok(Some(restaurant.into()))
                })
            });

        let service = mocks.into_service();
        let summary = service
            .update_restaurant(UpdateRestaurantInput {
                restaurant_id: id,
                name: "New Name".to_string(),
                address: "3 Quay Road".to_string(),
                phone: None,
                email: None,
                description: None,
                is_active: None,
            })
            .await
            .unwrap();

        assert_eq!(summary.restaurant.name, "New Name");
        assert!(!summary.restaurant.is_active);
    }

    #[tokio::test]
    async fn delete_restaurant_evicts_its_views() {
        let mut mocks = fixtures::Mocks::default();
        let existing = fixtures::restaurant("Closing Down");
        let id = existing.id;
        let other = Uuid::new_v4();

        mocks.restaurants.expect_get_by_id().returning(move |_| {
            let existing = existing.clone();
            Box::pin(async move { Ok(Some(existing)) })
        });
        mocks
            .restaurants
            .expect_delete_restaurant()
            .with(eq(id))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let service = mocks.into_service();
        let empty_page = || CachedView::MenuPage(Paginated::new(vec![], PageRequest::default(), 0));
        service
            .view_cache()
            .put(DerivedViewKey::menu_page(id, 0), empty_page());
        service
            .view_cache()
            .put(DerivedViewKey::menu_page(other, 0), empty_page());

        service.delete_restaurant(id).await.unwrap();

        assert!(
            service
                .view_cache()
                .get(&DerivedViewKey::menu_page(id, 0))
                .is_none()
        );
        assert!(
            service
                .view_cache()
                .get(&DerivedViewKey::menu_page(other, 0))
                .is_some()
        );
    }
}
