pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::{Allergen, AllergenInfo};
pub use services::{
    ComputedAllergenProfile, NO_KNOWN_ALLERGENS, WARNING_PREFIX, compute_allergens, find_safe,
    format_warning,
};
