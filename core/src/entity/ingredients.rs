use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ingredient_allergens::Entity")]
    IngredientAllergens,
    #[sea_orm(has_many = "super::dish_ingredients::Entity")]
    DishIngredients,
}

impl Related<super::ingredient_allergens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IngredientAllergens.def()
    }
}

impl Related<super::dish_ingredients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DishIngredients.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
