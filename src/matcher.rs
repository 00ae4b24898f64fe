//! Ratio Matcher
//!
//! Nearest-prototype classification of a (flour, liquid, eggs) ratio vector.
//!
//! Algorithm:
//! 1. Normalize the user ratios to percentages (sum = 100)
//! 2. Normalize every catalog prototype the same way
//! 3. Euclidean distance between the two percentage vectors
//! 4. Smallest distance wins; on an exact tie the earlier catalog entry wins
//!
//! Normalizing first lets slider values (0-100) and recipe-authored ratios
//! (e.g. 2:2:1) compare on the same scale.

use serde::Serialize;
use smallvec::SmallVec;

use crate::catalog::Catalog;
use crate::types::{BreakfastType, Ratios};

/// Legacy equal split returned for an all-zero input (not 100/3)
pub const EQUAL_SPLIT: f64 = 33.33;

/// Breakfast type with its distance from the user's normalized ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedMatch {
    pub breakfast_type: BreakfastType,
    pub distance: f64,
}

/// Ranking sized for the builtin catalog; larger catalogs spill to the heap
pub type Ranking = SmallVec<[RankedMatch; 8]>;

/// Closest match together with the normalized input it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioMatch {
    pub normalized: Ratios,
    pub breakfast_type: BreakfastType,
    pub distance: f64,
}

/// Normalize ratios to percentages that sum to 100.
///
/// A zero total returns the fixed split {33.33, 33.33, 33.33}.
pub fn normalize(ratios: Ratios) -> Ratios {
    let total = ratios.total();

    if total == 0.0 {
        return Ratios::new(EQUAL_SPLIT, EQUAL_SPLIT, EQUAL_SPLIT);
    }

    Ratios {
        flour: ratios.flour / total * 100.0,
        liquid: ratios.liquid / total * 100.0,
        eggs: ratios.eggs / total * 100.0,
    }
}

/// Euclidean distance between two ratio vectors
pub fn distance(a: &Ratios, b: &Ratios) -> f64 {
    let flour_diff = a.flour - b.flour;
    let liquid_diff = a.liquid - b.liquid;
    let eggs_diff = a.eggs - b.eggs;

    (flour_diff.powi(2) + liquid_diff.powi(2) + eggs_diff.powi(2)).sqrt()
}

/// Closest breakfast type in the builtin catalog
pub fn find_closest(ratios: Ratios) -> BreakfastType {
    RatioMatcher::builtin().find_closest(ratios)
}

/// Every builtin breakfast type, closest first
pub fn rank_all(ratios: Ratios) -> Ranking {
    RatioMatcher::builtin().rank_all(ratios)
}

/// Classifier over an injected catalog
#[derive(Debug, Clone, Copy)]
pub struct RatioMatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> RatioMatcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Distance of every catalog entry from the normalized user ratios, in catalog order
    fn distances(&self, ratios: Ratios) -> impl Iterator<Item = RankedMatch> + 'a {
        let user = normalize(ratios);
        let catalog: &'a Catalog = self.catalog;

        catalog.iter().map(move |definition| RankedMatch {
            breakfast_type: definition.breakfast_type,
            distance: distance(&user, &normalize(definition.ratios)),
        })
    }

    /// Closest entry in a single pass. Strict `<` keeps the first catalog
    /// entry on an exact tie; with no comparable distance (NaN components)
    /// the pancakes seed survives at infinite distance.
    fn closest(&self, ratios: Ratios) -> RankedMatch {
        debug_assert!(!self.catalog.is_empty(), "cannot classify against an empty catalog");

        let seed = RankedMatch {
            breakfast_type: BreakfastType::Pancakes,
            distance: f64::INFINITY,
        };
        self.distances(ratios).fold(seed, |best, candidate| {
            if candidate.distance < best.distance {
                candidate
            } else {
                best
            }
        })
    }

    /// Find the breakfast type whose prototype is closest to `ratios`
    pub fn find_closest(&self, ratios: Ratios) -> BreakfastType {
        self.closest(ratios).breakfast_type
    }

    /// All catalog entries sorted by ascending distance.
    ///
    /// The sort is stable, so equal distances keep catalog order.
    pub fn rank_all(&self, ratios: Ratios) -> Ranking {
        let mut ranked: Ranking = self.distances(ratios).collect();
        ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        ranked
    }

    /// Closest type plus the normalized ratios and winning distance
    pub fn match_ratios(&self, ratios: Ratios) -> RatioMatch {
        let closest = self.closest(ratios);

        RatioMatch {
            normalized: normalize(ratios),
            breakfast_type: closest.breakfast_type,
            distance: closest.distance,
        }
    }
}

impl RatioMatcher<'static> {
    /// Matcher over the shared builtin catalog
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin_ref())
    }
}
