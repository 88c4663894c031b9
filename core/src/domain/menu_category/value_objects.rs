use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryInput {
    pub category_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub display_order: i32,
}
