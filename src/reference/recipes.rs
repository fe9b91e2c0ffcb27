use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use tracing::info;

use crate::error::{Result, SoapError};
use crate::models::{OilType, Recipe};

/// An ordered, read-only set of recipes.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog, rejecting duplicate ids (case-insensitive).
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.key()) {
                return Err(SoapError::InvalidRecipe(format!(
                    "duplicate recipe id '{}'",
                    recipe.id
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// The built-in recipes.
    pub fn builtin() -> &'static RecipeCatalog {
        &BUILTIN_RECIPES
    }

    /// Load recipes from a JSON array file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
        info!(path = %path.display(), count = recipes.len(), "loaded recipe file");
        Self::new(recipes)
    }

    /// This catalog followed by `extra`.
    pub fn with_extra(&self, extra: RecipeCatalog) -> Result<Self> {
        let mut all = self.recipes.clone();
        all.extend(extra.recipes);
        Self::new(all)
    }

    /// Look up a recipe by id (case-insensitive).
    pub fn get(&self, id: &str) -> Result<&Recipe> {
        let key = id.trim().to_lowercase();
        self.recipes
            .iter()
            .find(|r| r.key() == key)
            .ok_or_else(|| SoapError::RecipeNotFound(id.to_string()))
    }

    /// All recipes in catalog order.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Look up a built-in recipe.
pub fn get_recipe(id: &str) -> Result<&'static Recipe> {
    BUILTIN_RECIPES.get(id)
}

/// Built-in recipes in display order.
pub fn list_recipes() -> &'static [Recipe] {
    BUILTIN_RECIPES.list()
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: &str,
    name: &str,
    description: &str,
    meditation: &str,
    oils: &[(OilType, f64)],
    herbs: &str,
    essential_oil: &str,
    chakra: &str,
    element: &str,
    process: &str,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        oils: oils.iter().copied().collect::<BTreeMap<_, _>>(),
        meditation: meditation.to_string(),
        herbs: herbs.to_string(),
        essential_oil: essential_oil.to_string(),
        chakra: chakra.to_string(),
        element: element.to_string(),
        process: process.to_string(),
    }
}

static BUILTIN_RECIPES: LazyLock<RecipeCatalog> = LazyLock::new(|| RecipeCatalog {
    recipes: vec![
        recipe(
            "sunrise",
            "Surya Namaskara (Sun Salutation)",
            "Morning purification blend for awakening the solar plexus chakra",
            "Chant 'Om Surya Namaha' 108 times while mixing",
            &[
                (OilType::Olive, 200.0),
                (OilType::Coconut, 150.0),
                (OilType::Sesame, 100.0),
                (OilType::Almond, 50.0),
            ],
            "Turmeric powder, Orange peel, Calendula",
            "15ml Orange & Frankincense",
            "Manipura (Solar Plexus)",
            "Fire (Agni)",
            "Begin at sunrise, face east while preparing",
        ),
        recipe(
            "moonlight",
            "Chandra Shanti (Moon Peace)",
            "Evening cleansing for calming Vata dosha and promoting sleep",
            "Practice Chandra Bhedana pranayama during preparation",
            &[
                (OilType::Olive, 250.0),
                (OilType::Shea, 150.0),
                (OilType::Avocado, 100.0),
            ],
            "Lavender buds, Chamomile, Rose petals",
            "15ml Lavender & Sandalwood",
            "Sahasrara (Crown)",
            "Water (Jal)",
            "Prepare during full moon for enhanced potency",
        ),
        recipe(
            "lotus",
            "Padma Sudhi (Lotus Purification)",
            "Sacred temple soap for spiritual cleansing and heart opening",
            "Visualize thousand-petaled lotus blooming in your heart",
            &[
                (OilType::Olive, 180.0),
                (OilType::Coconut, 120.0),
                (OilType::Almond, 100.0),
                (OilType::Sesame, 100.0),
            ],
            "Lotus petals, Rose powder, Sacred Basil",
            "15ml Rose & Lotus absolute",
            "Anahata (Heart)",
            "Air (Vayu)",
            "Infuse oils with mantras for 24 hours before use",
        ),
        recipe(
            "neem",
            "Neem Raksha (Divine Protection)",
            "Protective soap blessed with neem's purifying energy",
            "Recite Mahamrityunjaya mantra during preparation",
            &[
                (OilType::Olive, 200.0),
                (OilType::Coconut, 150.0),
                (OilType::Neem, 100.0),
                (OilType::Palm, 50.0),
            ],
            "Neem leaves powder, Tulsi, Multani mitti",
            "10ml Tea tree & Eucalyptus",
            "Muladhara (Root)",
            "Earth (Prithvi)",
            "Prepare during Ekadashi for spiritual protection",
        ),
        recipe(
            "sandalwood",
            "Chandan Moksha (Sandalwood Liberation)",
            "Premium ceremonial soap for meditation and spiritual practices",
            "Enter deep samadhi state while crafting",
            &[
                (OilType::Olive, 300.0),
                (OilType::Coconut, 100.0),
                (OilType::Almond, 100.0),
            ],
            "Sandalwood powder, Saffron, Rose",
            "20ml Pure Sandalwood oil",
            "Ajna (Third Eye)",
            "Ether (Akasha)",
            "Consecrate with sacred fire ceremony",
        ),
    ],
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_order() {
        let ids: Vec<&str> = list_recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["sunrise", "moonlight", "lotus", "neem", "sandalwood"]);
    }

    #[test]
    fn test_builtin_recipes_are_scalable() {
        for recipe in list_recipes() {
            assert!(recipe.reference_total() > 0.0, "{} has no oils", recipe.id);
            assert_eq!(recipe.reference_total(), 500.0);
        }
    }

    #[test]
    fn test_get_recipe_case_insensitive() {
        assert_eq!(get_recipe("Lotus").unwrap().id, "lotus");
        assert!(matches!(
            get_recipe("volcano"),
            Err(SoapError::RecipeNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dup = get_recipe("neem").unwrap().clone();
        let err = RecipeCatalog::builtin()
            .with_extra(RecipeCatalog::new(vec![dup]).unwrap())
            .unwrap_err();
        assert!(matches!(err, SoapError::InvalidRecipe(_)));
    }

    #[test]
    fn test_load_and_extend() {
        let json = r#"[
            {"id": "castile", "name": "Castile", "oils": {"olive": 1000}}
        ]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let extra = RecipeCatalog::load(file.path()).unwrap();
        let catalog = RecipeCatalog::builtin().with_extra(extra).unwrap();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.list().last().unwrap().id, "castile");
        assert_eq!(catalog.get("castile").unwrap().name, "Castile");
    }

    #[test]
    fn test_load_rejects_unknown_oil() {
        let json = r#"[{"id": "tallow", "name": "Tallow", "oils": {"tallow": 500}}]"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            RecipeCatalog::load(file.path()),
            Err(SoapError::Json(_))
        ));
    }
}
