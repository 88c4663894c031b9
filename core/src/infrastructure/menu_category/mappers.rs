use chrono::Utc;

use crate::{
    domain::menu_category::entities::MenuCategory,
    entity::menu_categories::Model as MenuCategoryModel,
};

impl From<&MenuCategoryModel> for MenuCategory {
    fn from(model: &MenuCategoryModel) -> Self {
        MenuCategory {
            id: model.id,
            restaurant_id: model.restaurant_id,
            name: model.name.clone(),
            description: model.description.clone(),
            display_order: model.display_order,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<MenuCategoryModel> for MenuCategory {
    fn from(model: MenuCategoryModel) -> Self {
        MenuCategory::from(&model)
    }
}
