use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Presentation-layer cap on simultaneously pinned apps. The store itself
/// does not enforce it; callers check before offering the pin action.
pub const MAX_PINNED_APPS: usize = 3;

/// Persisted set of pinned package ids.
///
/// No ordering semantics and no cardinality limit at this layer. `add` and
/// `remove` are idempotent: repeating either in any state is a no-op that
/// still persists successfully.
pub trait PinStore {
    fn read(&self) -> HashSet<String>;
    fn add(&mut self, package_id: &str);
    fn remove(&mut self, package_id: &str);
}

/// In-memory store, mainly for tests and previews.
impl PinStore for HashSet<String> {
    fn read(&self) -> HashSet<String> {
        self.clone()
    }

    fn add(&mut self, package_id: &str) {
        self.insert(package_id.to_string());
    }

    fn remove(&mut self, package_id: &str) {
        HashSet::remove(self, package_id);
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PinFile {
    #[serde(default)]
    pinned_packages: Vec<String>,
}

/// Pin store backed by a JSON file, surviving process restarts.
///
/// An unreadable or unparseable file degrades to an empty pin set; save
/// failures are logged and never surfaced, so pin mutations cannot fail the
/// caller.
#[derive(Debug)]
pub struct FilePinStore {
    path: PathBuf,
    pinned: HashSet<String>,
}

impl FilePinStore {
    /// Opens the store at the platform config location.
    pub fn load() -> Self {
        let path = Self::default_path().unwrap_or_else(|| PathBuf::from("pins.json"));
        Self::at_path(path)
    }

    /// Opens the store at an explicit path. A missing file is an empty set.
    pub fn at_path(path: PathBuf) -> Self {
        let pinned = read_pin_file(&path);
        Self { path, pinned }
    }

    fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "calm_launcher", "calm_launcher")
            .map(|dirs| dirs.config_dir().join("pins.json"))
    }

    fn save(&self) {
        if let Some(dir) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(dir) {
                warn!("failed to create pin store directory: {err}");
                return;
            }
        }
        let mut pinned_packages: Vec<String> = self.pinned.iter().cloned().collect();
        pinned_packages.sort();
        let file = PinFile { pinned_packages };
        match std::fs::File::create(&self.path) {
            Ok(out) => {
                if let Err(err) = serde_json::to_writer_pretty(out, &file) {
                    warn!("failed to write pin store: {err}");
                }
            }
            Err(err) => warn!("failed to create pin store file: {err}"),
        }
    }
}

impl PinStore for FilePinStore {
    fn read(&self) -> HashSet<String> {
        self.pinned.clone()
    }

    fn add(&mut self, package_id: &str) {
        self.pinned.insert(package_id.to_string());
        self.save();
    }

    fn remove(&mut self, package_id: &str) {
        self.pinned.remove(package_id);
        self.save();
    }
}

fn read_pin_file(path: &std::path::Path) -> HashSet<String> {
    if !path.exists() {
        return HashSet::new();
    }
    match std::fs::File::open(path) {
        Ok(file) => match serde_json::from_reader::<_, PinFile>(file) {
            Ok(parsed) => parsed.pinned_packages.into_iter().collect(),
            Err(err) => {
                warn!("failed to parse pin store, starting empty: {err}");
                HashSet::new()
            }
        },
        Err(err) => {
            warn!("failed to open pin store, starting empty: {err}");
            HashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_store_path(tag: &str) -> PathBuf {
        let uniq = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time error")
            .as_nanos();
        std::env::temp_dir().join(format!("calm_launcher_{tag}_{uniq}/pins.json"))
    }

    #[test]
    fn pins_survive_reload() {
        let path = temp_store_path("reload");
        {
            let mut store = FilePinStore::at_path(path.clone());
            store.add("com.example.mail");
            store.add("com.example.maps");
        }
        let store = FilePinStore::at_path(path.clone());
        let pins = store.read();
        assert!(pins.contains("com.example.mail"));
        assert!(pins.contains("com.example.maps"));
        assert_eq!(pins.len(), 2);

        let _ = std::fs::remove_file(&path);
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let path = temp_store_path("idempotent");
        let mut store = FilePinStore::at_path(path.clone());

        store.add("com.example.mail");
        store.add("com.example.mail");
        assert_eq!(store.read().len(), 1);

        store.remove("com.example.mail");
        store.remove("com.example.mail");
        assert!(store.read().is_empty());

        // never-pinned package
        store.remove("com.example.maps");
        assert!(store.read().is_empty());

        let _ = std::fs::remove_file(&path);
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let path = temp_store_path("corrupt");
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
        std::fs::write(&path, b"{not json").expect("write corrupt file");

        let store = FilePinStore::at_path(path.clone());
        assert!(store.read().is_empty());

        let _ = std::fs::remove_file(&path);
        if let Some(dir) = path.parent() {
            let _ = std::fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn missing_file_is_empty_set() {
        let path = temp_store_path("missing");
        let store = FilePinStore::at_path(path);
        assert!(store.read().is_empty());
    }
}
