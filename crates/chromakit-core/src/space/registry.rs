//! Name → [`ColorSpace`] registry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::{standard_spaces, ColorModel, ColorSpace, WhitePoint, OKLCH, OK_LCH, RGB, SRGB};
use crate::error::ColorError;

/// Alternative names registered alongside the built-in spaces.
const STANDARD_ALIASES: [(&str, &str); 2] = [(SRGB, RGB), (OKLCH, OK_LCH)];

static GLOBAL: Lazy<ColorSpaceRegistry> = Lazy::new(ColorSpaceRegistry::with_standard_spaces);

/// Registry of color spaces keyed by case-sensitive name.
///
/// Lookups take a shared lock only long enough to clone an `Arc`.
/// Registration takes the exclusive lock; the last registration for a name
/// wins.
#[derive(Debug, Default)]
pub struct ColorSpaceRegistry {
    spaces: RwLock<HashMap<String, Arc<ColorSpace>>>,
}

impl ColorSpaceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in spaces and the `rgb` and `ok-lch`
    /// aliases.
    pub fn with_standard_spaces() -> Self {
        let registry = Self::new();
        for space in standard_spaces() {
            registry.insert(space);
        }
        for (existing, alias) in STANDARD_ALIASES {
            if let Ok(space) = registry.find(existing) {
                registry.insert_alias(alias, space);
            }
        }
        registry
    }

    /// The process-wide registry, populated with the standard spaces on
    /// first use.
    pub fn global() -> &'static ColorSpaceRegistry {
        &GLOBAL
    }

    fn insert(&self, space: ColorSpace) -> Arc<ColorSpace> {
        let space = Arc::new(space);
        self.spaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(space.name().to_string(), Arc::clone(&space));
        space
    }

    fn insert_alias(&self, alias: &str, space: Arc<ColorSpace>) {
        self.spaces
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(alias.to_string(), space);
    }

    /// Register a space, replacing any previous entry of the same name.
    pub fn register(&self, space: ColorSpace) -> Arc<ColorSpace> {
        tracing::debug!(
            space = %space.name(),
            model = %space.color_model(),
            coordinates = ?space.coordinates(),
            "Registered color space"
        );
        self.insert(space)
    }

    /// Build and register a space in one call.
    pub fn register_with<S: Into<String>>(
        &self,
        name: &str,
        coordinates: impl IntoIterator<Item = S>,
        white_point: WhitePoint,
        color_model: ColorModel,
    ) -> Arc<ColorSpace> {
        self.register(ColorSpace::new(name, coordinates, white_point, color_model))
    }

    /// Make `alias` resolve to the descriptor registered as `existing`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownColorSpace`] if `existing` is not
    /// registered.
    pub fn alias(&self, existing: &str, alias: &str) -> Result<Arc<ColorSpace>, ColorError> {
        let space = self.find(existing)?;
        tracing::debug!(space = %existing, alias = %alias, "Registered color space alias");
        self.insert_alias(alias, Arc::clone(&space));
        Ok(space)
    }

    /// Look up a space by name.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownColorSpace`] if nothing is registered
    /// under `name`.
    pub fn find(&self, name: &str) -> Result<Arc<ColorSpace>, ColorError> {
        self.spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| ColorError::UnknownColorSpace(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Every registered name, aliases included, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// `(name, descriptor)` pairs sorted by name. An alias appears with the
    /// descriptor it resolves to.
    pub fn entries(&self) -> Vec<(String, Arc<ColorSpace>)> {
        let mut entries: Vec<_> = self
            .spaces
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(name, space)| (name.clone(), Arc::clone(space)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{HSL, HSV, LAB, LRGB, OKLAB, OKLCH};

    #[test]
    fn test_standard_spaces_are_registered() {
        let registry = ColorSpaceRegistry::with_standard_spaces();
        assert_eq!(
            registry.registered_names(),
            [HSL, HSV, LAB, LRGB, OK_LCH, OKLAB, OKLCH, RGB, SRGB]
        );
    }

    #[test]
    fn test_alias_resolves_to_same_descriptor() {
        let registry = ColorSpaceRegistry::with_standard_spaces();
        let rgb = registry.find(RGB).unwrap();
        let srgb = registry.find(SRGB).unwrap();
        assert!(Arc::ptr_eq(&rgb, &srgb));
        assert_eq!(rgb.name(), SRGB);
    }

    #[test]
    fn test_find_unknown() {
        let registry = ColorSpaceRegistry::new();
        assert_eq!(
            registry.find("srgb"),
            Err(ColorError::UnknownColorSpace("srgb".into()))
        );
        assert!(!registry.contains("srgb"));
    }

    #[test]
    fn test_alias_of_unknown_fails() {
        let registry = ColorSpaceRegistry::new();
        assert_eq!(
            registry.alias("nope", "also-nope").unwrap_err(),
            ColorError::UnknownColorSpace("nope".into())
        );
        assert!(!registry.contains("also-nope"));
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = ColorSpaceRegistry::new();
        registry.register_with("scratch", ["x"], WhitePoint::D50, ColorModel::LRGB);
        registry.register_with("scratch", ["x", "y"], WhitePoint::D75, ColorModel::OKLAB);
        let found = registry.find("scratch").unwrap();
        assert_eq!(found.arity(), 2);
        assert_eq!(found.white_point(), WhitePoint::D75);
        assert_eq!(found.color_model(), &ColorModel::OKLAB);
    }

    #[test]
    fn test_ok_lch_alias() {
        let registry = ColorSpaceRegistry::with_standard_spaces();
        let aliased = registry.find(OK_LCH).unwrap();
        assert!(Arc::ptr_eq(&aliased, &registry.find(OKLCH).unwrap()));
        assert_eq!(aliased.color_model(), &ColorModel::OKLCH);
        assert!(registry.registered_names().contains(&"ok-lch".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let registry = ColorSpaceRegistry::with_standard_spaces();
        assert!(registry.contains("srgb"));
        assert!(!registry.contains("SRGB"));
    }

    #[test]
    fn test_entries_show_alias_target() {
        let registry = ColorSpaceRegistry::with_standard_spaces();
        let rgb = registry
            .entries()
            .into_iter()
            .find(|(name, _)| name == RGB)
            .unwrap();
        assert_eq!(rgb.1.name(), SRGB);
    }
}
