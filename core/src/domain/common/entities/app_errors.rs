use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{resource} not found with id: {id}")]
    NotFound { resource: &'static str, id: Uuid },

    #[error("One or more ingredients not found: {missing:?}")]
    PartialIngredientResolution { missing: Vec<Uuid> },

    #[error("Ingredient already exists with name: {0}")]
    DuplicateName(String),

    #[error("Unknown allergen: {0}")]
    UnknownAllergen(String),

    #[error("Page size must be between 1 and {max}")]
    InvalidPagination { max: u64 },

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn restaurant_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "Restaurant",
            id,
        }
    }

    pub fn category_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "MenuCategory",
            id,
        }
    }

    pub fn ingredient_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "Ingredient",
            id,
        }
    }

    pub fn dish_not_found(id: Uuid) -> Self {
        Self::NotFound {
            resource: "Dish",
            id,
        }
    }
}
