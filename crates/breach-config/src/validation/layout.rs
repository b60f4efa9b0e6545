//! Layout validation.

use crate::schema::BreachConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &BreachConfig) {
    validate_range(errors, "layout.spacing", config.layout.spacing, 0, 64);
}
