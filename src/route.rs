//! Routes and populations.
//!
//! A [`Route`] is a visiting order over a [`CityCatalog`], stored as catalog
//! indices. Every route built by this crate is a full permutation of
//! `0..catalog.len()`: no duplicates, no omissions.

use crate::catalog::{City, CityCatalog};
use crate::error::TspError;

/// An ordered permutation of catalog indices.
///
/// Routes are never edited once they belong to a population; operators
/// always produce a freshly allocated route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    order: Vec<usize>,
}

/// A generation's worth of routes. Order carries no meaning.
pub type Population = Vec<Route>;

impl Route {
    /// The identity order `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Builds a route from explicit indices, checking that they form a
    /// permutation of `0..city_count`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_ga::Route;
    ///
    /// assert!(Route::from_indices(vec![2, 0, 1], 3).is_ok());
    /// assert!(Route::from_indices(vec![0, 0, 1], 3).is_err());
    /// ```
    pub fn from_indices(order: Vec<usize>, city_count: usize) -> Result<Self, TspError> {
        let route = Self { order };
        if !route.is_permutation_of(city_count) {
            return Err(TspError::CatalogMismatch {
                expected: city_count,
                found: route.distinct_in_range(city_count),
            });
        }
        Ok(route)
    }

    /// Wraps indices the caller guarantees to be a permutation.
    pub(crate) fn from_order_unchecked(order: Vec<usize>) -> Self {
        let route = Self { order };
        debug_assert!(
            route.is_permutation_of(route.len()),
            "operator produced an invalid permutation: {:?}",
            route.order
        );
        route
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the route visits no city.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Catalog indices in visiting order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the route, returning its indices.
    pub fn into_indices(self) -> Vec<usize> {
        self.order
    }

    /// Resolves the route against its catalog.
    pub fn cities<'a>(&'a self, catalog: &'a CityCatalog) -> impl Iterator<Item = &'a City> + 'a {
        self.order.iter().map(move |&i| catalog.city(i))
    }

    /// Returns `true` if every index in `0..n` appears exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        self.order.len() == n && self.distinct_in_range(n) == n
    }

    fn distinct_in_range(&self, n: usize) -> usize {
        let mut seen = vec![false; n];
        let mut distinct = 0;
        for &i in &self.order {
            if i < n && !seen[i] {
                seen[i] = true;
                distinct += 1;
            }
        }
        distinct
    }
}

impl AsRef<[usize]> for Route {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}
