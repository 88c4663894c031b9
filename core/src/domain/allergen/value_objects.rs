use std::collections::BTreeSet;

use crate::domain::{allergen::entities::Allergen, common::entities::app_errors::CoreError};

/// Parses a comma separated list of allergen identifiers such as
/// `MILK,NUTS`. Blank segments are skipped; unknown identifiers are
/// rejected.
pub fn parse_allergen_list(raw: &str) -> Result<BTreeSet<Allergen>, CoreError> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::parse::<Allergen>)
        .collect()
}
