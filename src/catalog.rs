//! Breakfast Type Catalog
//!
//! Fixed, ordered table of breakfast types and their prototype ratios.
//! Declaration order matters: the matcher walks the table in this order and
//! the first entry wins an exact distance tie.

use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::CatalogError;
use crate::types::{BreakfastType, BreakfastTypeDefinition, Ratios};

/// A builtin catalog row (static text, converted to owned definitions on use)
struct BuiltinEntry {
    breakfast_type: BreakfastType,
    name: &'static str,
    ratios: Ratios,
    description: &'static str,
    serve_with: &'static str,
    tips: &'static [&'static str],
}

// ============================================================================
// EMBEDDED CATALOG DATA
// ============================================================================

static BUILTIN_ENTRIES: &[BuiltinEntry] = &[
    BuiltinEntry {
        breakfast_type: BreakfastType::Pancakes,
        name: "Pancakes",
        ratios: Ratios::new(2.0, 2.0, 1.0),
        description: "Fluffy and thick",
        serve_with: "Serve with butter and maple syrup",
        tips: &[
            "Cook with leftover bacon grease for extra crispy edges",
            "Fold in fruit or chocolate chips for added flavor",
            "Use an electric griddle for fast, consistent cooking",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::Waffles,
        name: "Waffles",
        ratios: Ratios::new(2.0, 1.5, 2.0),
        description: "Crispy outside, light inside",
        serve_with: "Serve with whipped cream and berries",
        tips: &[
            "Most recipes also work with chicken and waffles",
            "Frozen fruit works just as well as a topping as fresh because of the juices",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::Crepes,
        name: "Crepes",
        ratios: Ratios::new(1.0, 2.0, 2.0),
        description: "Thin and delicate",
        serve_with: "Serve with Nutella and strawberries",
        tips: &[
            "Almost any topping works, sweet or savory",
            "Overmixing doesn't matter as much, so you can make the batter fast in a blender",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::DutchBaby,
        name: "Dutch Baby",
        ratios: Ratios::new(1.0, 2.0, 3.0),
        description: "Puffy and eggy",
        serve_with: "Dust with fresh strawberries and blueberries",
        tips: &[
            "Avoid wet toppings that can make it soggy",
            "Cast iron skillet is best, but almost anything round and oven-safe is a possibility",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::Popover,
        name: "Popover",
        ratios: Ratios::new(1.0, 1.0, 2.0),
        description: "Hollow and airy",
        serve_with: "Serve with butter and jam",
        tips: &[
            "You probably don't have a popover pan, but a muffin tin works well too",
            "Make sure to preheat the pan so the batter starts cooking immediately",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::Donut,
        name: "Donut",
        ratios: Ratios::new(3.0, 1.0, 1.0),
        description: "Dense and cakey",
        serve_with: "Top with cinnamon sugar or glaze",
        tips: &[
            "Use a donut pan for best results",
            "Fry in oil for a classic texture",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::Clafoutis,
        name: "Clafoutis",
        ratios: Ratios::new(1.0, 3.0, 4.0),
        description: "Custardy and soft",
        serve_with: "Serve with fresh cherries or berries",
        tips: &[
            "Cherries are common, but you can use almost any fruit, though juicy fruits are better",
        ],
    },
    BuiltinEntry {
        breakfast_type: BreakfastType::BreakfastCake,
        name: "Breakfast Cake",
        ratios: Ratios::new(3.0, 1.0, 2.0),
        description: "Thick but not too rich",
        serve_with: "No toppings needed!",
        tips: &[
            "Highly debatable as a pancake, here for comparison purposes because they're great for breakfast",
        ],
    },
];

impl BuiltinEntry {
    fn to_definition(&self) -> BreakfastTypeDefinition {
        BreakfastTypeDefinition {
            breakfast_type: self.breakfast_type,
            name: self.name.to_string(),
            ratios: self.ratios,
            description: self.description.to_string(),
            serve_with: self.serve_with.to_string(),
            tips: self.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Read-only, ordered table of breakfast type definitions.
///
/// Never empty and never holds the same type twice; both are checked at
/// construction so the matcher can rely on them.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<BreakfastTypeDefinition>,
    index: FxHashMap<BreakfastType, usize>,
}

impl Catalog {
    /// Catalog shipped with the app (eight breakfast types)
    pub fn builtin() -> Self {
        let entries: Vec<BreakfastTypeDefinition> =
            BUILTIN_ENTRIES.iter().map(BuiltinEntry::to_definition).collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.breakfast_type, i))
            .collect();

        Self { entries, index }
    }

    /// Shared builtin catalog, built on first use
    pub fn builtin_ref() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(Catalog::builtin)
    }

    /// Build a catalog from an ordered list of definitions
    pub fn from_entries(entries: Vec<BreakfastTypeDefinition>) -> Result<Self, CatalogError> {
        Self::index_entries(entries)
    }

    /// Load an ordered catalog from a JSON array of definitions
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<BreakfastTypeDefinition> =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::index_entries(entries)?;
        tracing::info!("Loaded catalog {:?} ({} types)", path, catalog.len());
        Ok(catalog)
    }

    fn index_entries(entries: Vec<BreakfastTypeDefinition>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            if index.insert(entry.breakfast_type, i).is_some() {
                return Err(CatalogError::DuplicateType(entry.breakfast_type.to_string()));
            }
        }

        Ok(Self { entries, index })
    }

    /// Look up a definition by type
    pub fn get(&self, breakfast_type: BreakfastType) -> Option<&BreakfastTypeDefinition> {
        self.index.get(&breakfast_type).map(|&i| &self.entries[i])
    }

    /// Display name, falling back to the identifier for types not in this catalog
    pub fn display_name(&self, breakfast_type: BreakfastType) -> &str {
        self.get(breakfast_type)
            .map(|d| d.name.as_str())
            .unwrap_or_else(|| breakfast_type.as_str())
    }

    /// Definitions in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &BreakfastTypeDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
