use std::{
    fs,
    path::PathBuf,
};

use crate::core::{
    Collection,
    DeckError,
};

const APP_NAME: &str = "tofudeck";

pub fn default_cache_dir() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache_dir) => cache_dir.join(APP_NAME),
        None => PathBuf::from("cache"),
    }
}

/// One file per deck under `dir`, holding the whole collection as JSON.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CacheStore { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, DeckError> {
        if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(DeckError::Config(format!("Invalid cache key: {key:?}")));
        }
        Ok(self.dir.join(key))
    }

    pub fn has(&self, key: &str) -> bool {
        self.path_for(key).map(|path| path.is_file()).unwrap_or(false)
    }

    pub fn save(&self, key: &str, collection: &Collection) -> Result<(), DeckError> {
        let file_path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| DeckError::io(&self.dir, e))?;

        let json = serde_json::to_vec(collection)
            .map_err(|e| DeckError::encode(format!("collection for {key}"), e))?;

        // Write next to the target and rename, so a half-written entry is never visible.
        let tmp_path = self.dir.join(format!(".{key}.tmp"));
        fs::write(&tmp_path, json).map_err(|e| DeckError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &file_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DeckError::io(&file_path, e));
        }

        tracing::info!("Cached file [{}] created.", file_path.display());
        Ok(())
    }

    pub fn load(&self, key: &str) -> Result<Collection, DeckError> {
        let file_path = self.path_for(key)?;
        let data = fs::read(&file_path).map_err(|e| DeckError::io(&file_path, e))?;
        let collection: Collection = serde_json::from_slice(&data)
            .map_err(|e| DeckError::decode(format!("cache file {}", file_path.display()), e))?;
        tracing::debug!(sets = collection.len(), "cache entry loaded from {}", file_path.display());
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::{
        Card,
        DeckSet,
    };

    fn sample() -> Collection {
        Collection::new(vec![
            DeckSet {
                name: "Pronouns".to_string(),
                cards: vec![Card::new("Je", "I"), Card::new("Tu", "you"), Card::new("Il", "he")],
                index: 0,
            },
            DeckSet {
                name: "Days".to_string(),
                cards: vec![Card::new("Lundi", "Monday"), Card::new("Jeudi", "Thursday")],
                index: 1,
            },
        ])
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::new(tmp.path().join("cache"));
        let collection = sample();

        assert!(!store.has("deck"));
        store.save("deck", &collection).unwrap();
        assert!(store.has("deck"));
        assert_eq!(store.load("deck").unwrap(), collection);
        assert!(!tmp.path().join("cache").join(".deck.tmp").exists());
    }

    #[test]
    fn test_save_into_existing_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::new(tmp.path());

        store.save("a", &sample()).unwrap();
        store.save("b", &Collection::default()).unwrap();
        store.save("a", &Collection::default()).unwrap();

        assert!(store.load("a").unwrap().is_empty());
        assert_eq!(store.load("b").unwrap(), Collection::default());
    }

    #[test]
    fn test_load_reads_legacy_cache_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::new(tmp.path());
        fs::write(
            tmp.path().join("legacy"),
            r#"[{"name":"S","cards":[{"word":"Je","translation":"I"}],"index":0}]"#,
        )
        .unwrap();

        let collection = store.load("legacy").unwrap();
        assert_eq!(collection.sets()[0].cards[0], Card::new("Je", "I"));
    }

    #[test]
    fn test_load_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::new(tmp.path());

        assert!(matches!(store.load("missing").unwrap_err(), DeckError::Io { .. }));

        fs::write(tmp.path().join("broken"), "{not a list").unwrap();
        assert!(matches!(store.load("broken").unwrap_err(), DeckError::Decode { .. }));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = CacheStore::new("cache");
        assert!(store.path_for("../etc").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for("").is_err());
        assert!(!store.has(".."));
        assert_eq!(store.path_for("abc").unwrap(), Path::new("cache").join("abc"));
    }
}
