use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "dishes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price_cents: i64,
    pub is_available: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::menu_categories::Entity",
        from = "Column::CategoryId",
        to = "super::menu_categories::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    MenuCategories,
    #[sea_orm(has_many = "super::dish_ingredients::Entity")]
    DishIngredients,
}

impl Related<super::menu_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MenuCategories.def()
    }
}

impl Related<super::dish_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
