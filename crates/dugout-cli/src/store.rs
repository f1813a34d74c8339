use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;

/// Whole-value key-value persistence.
///
/// Values are read and written in one piece; callers perform read-modify-write
/// cycles through `&mut` access, which keeps each cycle exclusive.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn list(&self) -> anyhow::Result<Vec<String>>;
}

pub fn read_json<T, S>(store: &S, key: &str) -> anyhow::Result<Option<T>>
where
    T: serde::de::DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(text) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse stored value for key '{key}'"))?;
    Ok(Some(value))
}

pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
    S: KeyValueStore + ?Sized,
{
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize value for key '{key}'"))?;
    store.set(key, &text)
}

/// Stores each key as `<key>.json` inside a directory.
///
/// Writes go to a temporary file that is renamed over the target, so a reader
/// never observes a half-written value.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn open<P>(dir: P) -> anyhow::Result<Self>
    where
        P: Into<PathBuf>,
    {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_of(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.path_of(key);
        let tmp_path = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp_path, value)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;
        Ok(())
    }

    fn list(&self) -> anyhow::Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to list {}", self.dir.display()))?;
        let mut keys = vec![];
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list {}", self.dir.display()))?
                .path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && !stem.starts_with('.')
            {
                keys.push(stem.to_owned());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-memory store.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: std::collections::BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn list(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.values.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(dir.path().join("data")).unwrap();

        assert_eq!(store.get("roster").unwrap(), None);
        store.set("roster", "[]").unwrap();
        store.set("seasonStats", "{}").unwrap();
        store.set("roster", "[\"Ann\"]").unwrap();

        assert_eq!(store.get("roster").unwrap().as_deref(), Some("[\"Ann\"]"));
        assert_eq!(store.list().unwrap(), ["roster", "seasonStats"]);
        assert!(store.dir().join("roster.json").exists());
        assert!(!store.dir().join(".roster.json.tmp").exists());
    }

    #[test]
    fn test_dir_store_reopen_sees_values() {
        let dir = tempfile::tempdir().unwrap();
        DirStore::open(dir.path())
            .unwrap()
            .set("seasonStats", "{}")
            .unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        assert_eq!(store.get("seasonStats").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_json_helpers() {
        let mut store = MemoryStore::new();
        write_json(&mut store, "numbers", &vec![1, 2, 3]).unwrap();
        let numbers: Option<Vec<u32>> = read_json(&store, "numbers").unwrap();
        assert_eq!(numbers, Some(vec![1, 2, 3]));
        let missing: Option<Vec<u32>> = read_json(&store, "missing").unwrap();
        assert_eq!(missing, None);

        store.set("broken", "{not json").unwrap();
        let err = read_json::<Vec<u32>, _>(&store, "broken").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
