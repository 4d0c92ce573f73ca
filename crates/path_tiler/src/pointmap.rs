//! A map keyed by points that compare inexactly.
//!
//! [`PointMap`] behaves like a default-dict whose keys are [`Point`]s. Lookups are constant
//! time: every stored point is indexed three ways, as-is and rounded onto two rounding grids
//! offset from each other by half a cell (0.0005 in both axes). A probe hits if any of the
//! three finds it.
//!
//! This only works because symmetric tiling produces points that are either near-duplicates
//! or clearly apart. Two points a hair apart can still straddle a boundary in both grids and
//! miss, and unrelated points can occasionally share a bucket. It is not a proximity index.
use std::collections::HashMap;

use crate::geometry::Point;

/// Cells per unit on the rounding grids (three decimal digits).
const GRID_SCALE: f64 = 1000.0;
/// Offset of the second rounding grid, half a cell.
const ALT_OFFSET: f64 = 0.0005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ExactKey(u64, u64);

impl ExactKey {
    fn new(p: Point) -> Self {
        // Adding 0.0 folds -0.0 into 0.0.
        Self((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct GridKey(i64, i64);

impl GridKey {
    fn primary(p: Point) -> Self {
        Self(round_cell(p.x), round_cell(p.y))
    }

    fn alt(p: Point) -> Self {
        Self(round_cell(p.x + ALT_OFFSET), round_cell(p.y + ALT_OFFSET))
    }
}

/// Rounds `v` to a grid cell the way rounding its exact decimal value to three digits would.
///
/// `v * 1000` can land exactly on a half even though `v` itself sits just off the decimal
/// midpoint (8.2275 is stored as 8.22749999...). The fused residual recovers which side it is on.
fn round_cell(v: f64) -> i64 {
    let scaled = v * GRID_SCALE;
    let floor = scaled.floor();
    if scaled - floor != 0.5 {
        return scaled.round() as i64;
    }
    let residual = v.mul_add(GRID_SCALE, -scaled);
    if residual > 0.0 {
        (floor + 1.0) as i64
    } else if residual < 0.0 {
        floor as i64
    } else {
        scaled.round_ties_even() as i64
    }
}

/// Map from approximately-equal points to values created on demand by `factory`.
pub struct PointMap<V, F = fn() -> V> {
    entries: Vec<(Point, V)>,
    exact: HashMap<ExactKey, usize>,
    grid: HashMap<GridKey, usize>,
    alt_grid: HashMap<GridKey, usize>,
    factory: F,
}

impl<V, F> PointMap<V, F>
where
    F: FnMut() -> V,
{
    /// Creates an empty map that builds missing values with `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            entries: Vec::new(),
            exact: HashMap::new(),
            grid: HashMap::new(),
            alt_grid: HashMap::new(),
            factory,
        }
    }

    /// Returns the value stored for `point` or a point that rounds together with it,
    /// creating and storing a fresh value under `point` on a miss.
    pub fn get_or_create(&mut self, point: impl Into<Point>) -> &mut V {
        let point = point.into();
        let idx = match self.find(point) {
            Some(idx) => idx,
            None => {
                let value = (self.factory)();
                self.set(point, value)
            }
        };
        &mut self.entries[idx].1
    }
}

impl<V, F> PointMap<V, F> {
    fn find(&self, point: Point) -> Option<usize> {
        self.exact
            .get(&ExactKey::new(point))
            .or_else(|| self.grid.get(&GridKey::primary(point)))
            .or_else(|| self.alt_grid.get(&GridKey::alt(point)))
            .copied()
    }

    fn set(&mut self, point: Point, value: V) -> usize {
        let idx = self.entries.len();
        self.entries.push((point, value));
        self.exact.insert(ExactKey::new(point), idx);
        self.grid.insert(GridKey::primary(point), idx);
        self.alt_grid.insert(GridKey::alt(point), idx);
        idx
    }

    pub fn get(&self, point: impl Into<Point>) -> Option<&V> {
        self.find(point.into()).map(|idx| &self.entries[idx].1)
    }

    pub fn get_mut(&mut self, point: impl Into<Point>) -> Option<&mut V> {
        self.find(point.into()).map(|idx| &mut self.entries[idx].1)
    }

    /// The point the value for `point` was stored under, if any.
    pub fn canonical(&self, point: impl Into<Point>) -> Option<Point> {
        self.find(point.into()).map(|idx| self.entries[idx].0)
    }

    pub fn contains(&self, point: impl Into<Point>) -> bool {
        self.find(point.into()).is_some()
    }

    /// Number of distinct stored points.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored points and their values, in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn items(&self) -> Iter<'_, V> {
        self.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Point> {
        self.entries.iter().map(|(p, _)| p)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V: Default> Default for PointMap<V> {
    fn default() -> Self {
        Self::new(V::default)
    }
}

impl<V: std::fmt::Debug, F> std::fmt::Debug for PointMap<V, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(p, v)| (p, v)))
            .finish()
    }
}

impl<'a, V, F> IntoIterator for &'a PointMap<V, F> {
    type Item = (&'a Point, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the stored points of a [`PointMap`] and their values.
pub struct Iter<'a, V> {
    inner: std::slice::Iter<'a, (Point, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(p, v)| (p, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
