//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::Restaurant;

#[cfg(test)]
/// What: Build numbered restaurants.
///
/// Inputs:
/// - `range`: Indices to generate
///
/// Output:
/// - Restaurants with id `"{i}"` and name `"Restaurant {i}"`, no rating
pub fn restaurants(range: std::ops::Range<usize>) -> Vec<Restaurant> {
    range
        .map(|i| Restaurant {
            id: i.to_string(),
            name: format!("Restaurant {i}"),
            cuisines: "Cafe".into(),
            ..Restaurant::default()
        })
        .collect()
}
