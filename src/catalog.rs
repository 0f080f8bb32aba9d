//! Cities and the immutable city catalog.
//!
//! A [`CityCatalog`] is the universe every route permutes. Cities are
//! identified by their index in the catalog, never by their coordinates,
//! so two cities at the same point remain distinct.

use crate::error::TspError;

/// A point in the plane.
///
/// # Examples
///
/// ```
/// use tsp_ga::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Immutable, non-empty list of cities with a precomputed distance matrix.
///
/// The matrix is dense n×n in row-major order; each entry is computed with
/// [`City::distance_to`], so lookups return exactly the value a direct
/// computation would.
#[derive(Debug, Clone)]
pub struct CityCatalog {
    cities: Vec<City>,
    distances: Vec<f64>,
}

impl CityCatalog {
    /// Builds a catalog from an ordered list of cities.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`] if `cities` is empty or any
    /// coordinate is not finite.
    pub fn new(cities: Vec<City>) -> Result<Self, TspError> {
        if cities.is_empty() {
            return Err(TspError::InvalidConfiguration(
                "cities must contain at least 1 city".into(),
            ));
        }
        if let Some(i) = cities
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(TspError::InvalidConfiguration(format!(
                "city {i} has a non-finite coordinate"
            )));
        }

        let n = cities.len();
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }

        Ok(Self { cities, distances })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The city at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn city(&self, index: usize) -> &City {
        &self.cities[index]
    }

    /// All cities, in catalog order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Distance between the cities at `from` and `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances[from * self.cities.len() + to]
    }

    /// Returns `true` when every tour over this catalog has zero length,
    /// i.e. all cities share one point. A single-city catalog is degenerate.
    pub fn is_degenerate(&self) -> bool {
        let first = self.cities[0];
        self.cities.iter().all(|c| c.x == first.x && c.y == first.y)
    }
}

impl TryFrom<Vec<(f64, f64)>> for CityCatalog {
    type Error = TspError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points.into_iter().map(City::from).collect())
    }
}
