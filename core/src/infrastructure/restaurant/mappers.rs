use chrono::Utc;

use crate::{domain::restaurant::entities::Restaurant, entity::restaurants::Model as RestaurantModel};

impl From<&RestaurantModel> for Restaurant {
    fn from(model: &RestaurantModel) -> Self {
        Restaurant {
            id: model.id,
            name: model.name.clone(),
            address: model.address.clone(),
            phone: model.phone.clone(),
            email: model.email.clone(),
            description: model.description.clone(),
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<RestaurantModel> for Restaurant {
    fn from(model: RestaurantModel) -> Self {
        Restaurant::from(&model)
    }
}
