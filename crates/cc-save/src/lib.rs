//! cc-save: Save/restore of food inventories
//!
//! Each item is stored as its template identifier and spoilage level; the
//! rest is rebuilt from the food table on load.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cc_core::{FoodError, FoodRecord, Pantry};

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Invalid save file header")]
    InvalidHeader,

    #[error("Bad food entry: {0}")]
    Food(#[from] FoodError),
}

/// One saved item plus the size of its stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFood {
    #[serde(flatten)]
    pub record: FoodRecord,
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub count: u32,
}

fn one() -> u32 {
    1
}

fn is_one(n: &u32) -> bool {
    *n == 1
}

/// Complete save file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryFile {
    pub magic: String,
    pub saved_at: DateTime<Utc>,
    pub items: Vec<SavedFood>,
}

impl PantryFile {
    const MAGIC: &'static str = "CCFOOD";

    pub fn new(pantry: &Pantry) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            saved_at: Utc::now(),
            items: pantry
                .to_records()
                .into_iter()
                .map(|(record, count)| SavedFood { record, count })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        Ok(())
    }

    /// Rebuild the pantry. Fails on the first unknown template.
    pub fn into_pantry(self) -> Result<Pantry, SaveError> {
        self.validate()?;
        let pantry = Pantry::from_records(self.items.into_iter().map(|s| (s.record, s.count)))?;
        Ok(pantry)
    }
}

/// Save a pantry to a file
pub fn save_pantry(pantry: &Pantry, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &PantryFile::new(pantry))?;
    tracing::debug!(path = %path.as_ref().display(), items = pantry.len(), "pantry saved");
    Ok(())
}

/// Save a pantry to a compact file (no pretty printing)
pub fn save_pantry_compact(pantry: &Pantry, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, &PantryFile::new(pantry))?;
    Ok(())
}

/// Load a pantry from a file
pub fn load_pantry(path: impl AsRef<Path>) -> Result<Pantry, SaveError> {
    let file = File::open(path.as_ref()).map_err(|_| SaveError::NotFound)?;
    let reader = BufReader::new(file);
    let save_file: PantryFile = serde_json::from_reader(reader)?;
    save_file.into_pantry().inspect_err(|e| {
        tracing::warn!(path = %path.as_ref().display(), error = %e, "pantry restore failed");
    })
}

/// Serialize a pantry to a JSON string (for hosts that embed it in their own save)
pub fn pantry_to_json(pantry: &Pantry) -> Result<String, SaveError> {
    Ok(serde_json::to_string(&PantryFile::new(pantry))?)
}

/// Parse a pantry from a JSON string
pub fn pantry_from_json(json: &str) -> Result<Pantry, SaveError> {
    let save_file: PantryFile = serde_json::from_str(json)?;
    save_file.into_pantry()
}

/// Get the default save path for a character name
pub fn default_save_path(character: &str) -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("climates-calories");
    path.push("pantries");
    std::fs::create_dir_all(&path).ok();
    path.push(format!("{}.json", character));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use cc_core::{FoodItem, FoodKind, Spoilage};

    fn sample() -> Pantry {
        let mut pantry = Pantry::new();
        pantry.add(FoodItem::new(FoodKind::Apple));
        pantry.add(FoodItem::stack(FoodKind::Rations, 7));
        let mut fish = FoodItem::new(FoodKind::RawFish);
        fish.advance();
        fish.advance();
        pantry.add(fish);
        pantry
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("cc_test_pantry.json");

        let pantry = sample();
        save_pantry(&pantry, &path).unwrap();
        assert!(path.exists());

        let loaded = load_pantry(&path).unwrap();
        let before: Vec<&FoodItem> = pantry.iter().map(|(_, i)| i).collect();
        let after: Vec<&FoodItem> = loaded.iter().map(|(_, i)| i).collect();
        assert_eq!(before, after);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_entry_layout() {
        let json = pantry_to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value["items"].as_array().unwrap();

        assert_eq!(items[0], serde_json::json!({ "kind": 532, "spoilage": "Fresh" }));
        assert_eq!(items[1]["count"], 7);
        assert_eq!(items[2]["spoilage"], "Mouldy");
    }

    #[test]
    fn test_header_validation() {
        let mut file = PantryFile::new(&sample());
        assert!(file.validate().is_ok());

        file.magic = "XXXX".to_string();
        assert!(matches!(file.validate(), Err(SaveError::InvalidHeader)));
    }

    #[test]
    fn test_unknown_template_rejected() {
        let json = r#"{
            "magic": "CCFOOD",
            "saved_at": "2024-01-01T00:00:00Z",
            "items": [{ "kind": 1, "spoilage": "Fresh" }]
        }"#;
        assert!(matches!(
            pantry_from_json(json),
            Err(SaveError::Food(FoodError::UnknownTemplate(1)))
        ));
    }

    #[test]
    fn test_missing_count_defaults_to_one() {
        let json = r#"{
            "magic": "CCFOOD",
            "saved_at": "2024-01-01T00:00:00Z",
            "items": [{ "kind": 539, "spoilage": "Fresh" }]
        }"#;
        let pantry = pantry_from_json(json).unwrap();
        let (_, rations) = pantry.iter().next().unwrap();
        assert_eq!(rations.stack_count(), 1);
        assert_eq!(rations.spoilage(), Spoilage::Fresh);
    }

    #[test]
    fn test_load_nonexistent() {
        let result = load_pantry("/nonexistent/path/pantry.json");
        assert!(matches!(result, Err(SaveError::NotFound)));
    }
}
