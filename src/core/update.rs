//! Filter state updates.

use crate::types::{FilterState, FilterUpdate};

/// Check if at least one filter field is set.
///
/// Empty brand lists, attributes without values, empty slugs, absent
/// bounds, `false` flags and empty sort tokens all count as unset, matching
/// what [`FilterState::canonicalize`] keeps.
pub fn has_active_filters(filters: &FilterState) -> bool {
    filters.brand_slugs.iter().any(|slug| !slug.is_empty())
        || filters
            .attribute_filters
            .values()
            .any(|values| values.iter().any(|value| !value.is_empty()))
        || filters.price_min.is_some()
        || filters.price_max.is_some()
        || filters.in_stock
        || filters.has_discount
        || filters.is_clearance
        || filters.sort_by.as_deref().is_some_and(|token| !token.is_empty())
}

/// Apply a partial update to a filter state.
///
/// Each field present in the update replaces the current value; this is not a
/// deep merge. An empty collection, a zero price, `false` or an empty sort
/// token clears the field rather than storing an empty value.
///
/// # Examples
///
/// ```
/// use facetpath::{update_filters, FilterState, FilterUpdate};
///
/// let current = FilterState { in_stock: true, ..FilterState::default() };
/// let update = FilterUpdate { in_stock: Some(false), ..FilterUpdate::default() };
///
/// assert_eq!(update_filters(&current, update), FilterState::default());
/// ```
pub fn update_filters(current: &FilterState, update: FilterUpdate) -> FilterState {
    let mut next = current.clone();

    if let Some(brands) = update.brand_slugs {
        next.brand_slugs = brands.into_iter().filter(|b| !b.is_empty()).collect();
    }

    if let Some(attributes) = update.attribute_filters {
        next.attribute_filters = attributes
            .into_iter()
            .map(|(slug, values)| {
                let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
                (slug, values)
            })
            .filter(|(_, values)| !values.is_empty())
            .collect();
    }

    if let Some(min) = update.price_min {
        next.price_min = (min != 0).then_some(min);
    }
    if let Some(max) = update.price_max {
        next.price_max = (max != 0).then_some(max);
    }

    if let Some(flag) = update.in_stock {
        next.in_stock = flag;
    }
    if let Some(flag) = update.has_discount {
        next.has_discount = flag;
    }
    if let Some(flag) = update.is_clearance {
        next.is_clearance = flag;
    }

    if let Some(token) = update.sort_by {
        next.sort_by = (!token.is_empty()).then_some(token);
    }

    next
}
