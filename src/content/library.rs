use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;
use walkdir::WalkDir;

use super::collection::Collection;
use super::record::{ContentRecord, Difficulty};
use crate::config::Config;
use crate::error::{Error, Result};

/// Collections compiled into the crate, in export order.
const BUNDLED: &[(&str, &str)] = &[
    (
        "content/architecture_intermediate.yaml",
        include_str!("../../content/architecture_intermediate.yaml"),
    ),
    (
        "content/node_general.yaml",
        include_str!("../../content/node_general.yaml"),
    ),
];

static BUNDLED_LIBRARY: OnceLock<Library> = OnceLock::new();

/// Every exported collection, in the order it was defined.
#[derive(Debug, Clone, Default)]
pub struct Library {
    collections: Vec<Collection>,
}

impl Library {
    pub fn from_collections<I>(collections: I) -> Result<Library>
    where
        I: IntoIterator<Item = Collection>,
    {
        let mut library = Library::default();
        for collection in collections {
            library.push(collection)?;
        }
        Ok(library)
    }

    fn push(&mut self, collection: Collection) -> Result<()> {
        if self.collections.iter().any(|c| c.name == collection.name) {
            return Err(Error::DuplicateCollection(collection.name));
        }
        self.collections.push(collection);
        Ok(())
    }

    /// Parses the collections shipped with the crate.
    pub fn bundled() -> Result<Library> {
        let collections = BUNDLED
            .iter()
            .map(|(source_name, text)| Collection::from_yaml(source_name, text))
            .collect::<Result<Vec<_>>>()?;
        Library::from_collections(collections)
    }

    /// Loads every `.yaml`/`.yml` file under `dir`, in path order.
    pub fn load_dir(dir: &Path) -> Result<Library> {
        let mut library = Library::default();
        library.extend_from_dir(dir)?;
        Ok(library)
    }

    fn extend_from_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            let is_yaml = matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("yaml") | Some("yml")
            );
            if !entry.file_type().is_file() || !is_yaml {
                continue;
            }

            self.push(Collection::load(path)?)?;
        }

        info!(
            "Loaded {} collections after reading {}",
            self.collections.len(),
            dir.display()
        );
        Ok(())
    }

    /// Bundled collections (unless disabled) followed by the configured directory.
    pub fn from_config(config: &Config) -> Result<Library> {
        let mut library = if config.include_bundled {
            Library::bundled()?
        } else {
            Library::default()
        };

        if let Some(content_dir) = &config.content_dir {
            debug!("Reading extra collections from {}", content_dir.display());
            library.extend_from_dir(content_dir)?;
        }

        Ok(library)
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|c| c.name.as_str())
    }

    pub fn collection(&self, name: &str) -> Result<&Collection> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::CollectionNotFound(name.to_string()))
    }

    pub fn get_all(&self, collection: &str) -> Result<&[ContentRecord]> {
        Ok(self.collection(collection)?.problems())
    }

    pub fn get_by_id(&self, collection: &str, id: &str) -> Result<&ContentRecord> {
        self.collection(collection)?.get_by_id(id)
    }

    pub fn filter_by_category(
        &self,
        collection: &str,
        category: &str,
    ) -> Result<Vec<&ContentRecord>> {
        Ok(self.collection(collection)?.filter_by_category(category))
    }

    pub fn filter_by_difficulty(
        &self,
        collection: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<&ContentRecord>> {
        Ok(self.collection(collection)?.filter_by_difficulty(difficulty))
    }

    pub fn categories(&self, collection: &str) -> Result<Vec<&str>> {
        Ok(self.collection(collection)?.categories())
    }

    pub fn search(&self, collection: &str, pattern: &Regex) -> Result<Vec<&ContentRecord>> {
        Ok(self.collection(collection)?.search(pattern))
    }
}

/// The bundled library, parsed on first use and shared for the rest of the process.
pub fn library() -> Result<&'static Library> {
    if let Some(library) = BUNDLED_LIBRARY.get() {
        return Ok(library);
    }
    let library = Library::bundled()?;
    Ok(BUNDLED_LIBRARY.get_or_init(|| library))
}

pub fn get_all(collection: &str) -> Result<&'static [ContentRecord]> {
    library()?.get_all(collection)
}

pub fn get_by_id(collection: &str, id: &str) -> Result<&'static ContentRecord> {
    library()?.get_by_id(collection, id)
}

pub fn filter_by_category(
    collection: &str,
    category: &str,
) -> Result<Vec<&'static ContentRecord>> {
    library()?.filter_by_category(collection, category)
}

pub fn filter_by_difficulty(
    collection: &str,
    difficulty: Difficulty,
) -> Result<Vec<&'static ContentRecord>> {
    library()?.filter_by_difficulty(collection, difficulty)
}
