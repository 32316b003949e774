//! Favorites and theme persistence on top of `KeyValueStore`.
//!
//! # Responsibility
//! - Read preferences once at startup, tolerating malformed values.
//! - Write preferences on every mutation.

use crate::model::favorites::FavoritesSet;
use crate::model::theme::{parse_theme_mode, ThemeMode};
use crate::repo::kv_store::{KeyValueStore, StoreResult};
use log::warn;

/// Storage key holding the JSON array of favorited project ids.
pub const FAVORITES_KEY: &str = "favorites";
/// Storage key holding the plain-string theme preference.
pub const THEME_KEY: &str = "theme";

/// Loads favorites; unreadable or malformed values yield an empty set.
pub fn load_favorites(store: &impl KeyValueStore) -> FavoritesSet {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FavoritesSet::new(),
        Err(err) => {
            warn!("event=favorites_load module=prefs status=error error={err}");
            return FavoritesSet::new();
        }
    };

    match FavoritesSet::from_json(&raw) {
        Ok(favorites) => favorites,
        Err(err) => {
            warn!("event=favorites_load module=prefs status=error error_code=malformed error={err}");
            FavoritesSet::new()
        }
    }
}

pub fn save_favorites(store: &mut impl KeyValueStore, favorites: &FavoritesSet) -> StoreResult<()> {
    store.set(FAVORITES_KEY, &favorites.to_json())
}

/// Loads the stored theme; unset, unreadable and unknown values yield `None`.
pub fn load_theme(store: &impl KeyValueStore) -> Option<ThemeMode> {
    let raw = match store.get(THEME_KEY) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!("event=theme_load module=prefs status=error error={err}");
            return None;
        }
    };

    match parse_theme_mode(&raw) {
        Ok(mode) => Some(mode),
        Err(err) => {
            warn!("event=theme_load module=prefs status=error error_code=unsupported_value error={err}");
            None
        }
    }
}

pub fn save_theme(store: &mut impl KeyValueStore, mode: ThemeMode) -> StoreResult<()> {
    store.set(THEME_KEY, mode.as_str())
}

#[cfg(test)]
mod tests {
    use super::{load_favorites, load_theme, save_favorites, FAVORITES_KEY, THEME_KEY};
    use crate::model::favorites::FavoritesSet;
    use crate::model::theme::ThemeMode;
    use crate::repo::kv_store::{KeyValueStore, MemoryStore};

    #[test]
    fn malformed_values_degrade_to_defaults() {
        let store = MemoryStore::with_entries([(FAVORITES_KEY, "{oops"), (THEME_KEY, "sepia")]);
        assert!(load_favorites(&store).is_empty());
        assert_eq!(load_theme(&store), None);
    }

    #[test]
    fn favorites_are_written_under_fixed_key() {
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSet::new();
        favorites.toggle("p2");
        save_favorites(&mut store, &favorites).unwrap();

        assert_eq!(store.keys(), vec![FAVORITES_KEY.to_string()]);
        assert_eq!(store.get(FAVORITES_KEY).unwrap().as_deref(), Some(r#"["p2"]"#));
        assert_eq!(load_favorites(&store), favorites);
    }

    #[test]
    fn stored_theme_is_parsed() {
        let store = MemoryStore::with_entries([(THEME_KEY, "dark")]);
        assert_eq!(load_theme(&store), Some(ThemeMode::Dark));
    }
}
