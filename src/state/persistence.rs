use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::store::StoreData;

/// Load the snapshot from a JSON file.
///
/// A missing file is not an error: first runs start from the seeded
/// starter recipes and default settings.
pub fn load_store<P: AsRef<Path>>(path: P) -> Result<StoreData> {
    if !path.as_ref().exists() {
        return Ok(StoreData::default());
    }
    let content = fs::read_to_string(path)?;
    let data: StoreData = serde_json::from_str(&content)?;
    Ok(data)
}

/// Save the snapshot to a JSON file.
pub fn save_store<P: AsRef<Path>>(path: P, data: &StoreData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
