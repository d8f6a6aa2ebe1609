//! Loading of the activity seed dataset.
//!
//! The dataset is a JSON object mapping each activity name to an object with an `info`
//! sub-object:
//!
//! ```json
//! {
//!   "Chess Club": {
//!     "info": {
//!       "description": "Learn strategies and compete in chess tournaments",
//!       "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!       "max_participants": 12
//!     }
//!   }
//! }
//! ```
//!
//! Missing fields fall back to empty strings. A missing or falsy capacity (`null`,
//! `false`, `0`, `""`, empty array or object) becomes [`UNLIMITED_PARTICIPANTS`];
//! numeric strings, floats and booleans are coerced to an integer. Entries whose
//! capacity cannot be coerced are skipped with a warning.

use serde_json::Value;
use std::{collections::BTreeMap, io::ErrorKind, path::Path};

use crate::server::{error::seed::SeedError, model::activity::ActivitySeed};

/// Capacity given to seed entries that do not specify one.
pub const UNLIMITED_PARTICIPANTS: i32 = 9999;

/// Parses a seed dataset from its JSON text.
///
/// Fails only when the text is not a JSON object; malformed entries are skipped.
pub fn parse_seed(json: &str) -> Result<Vec<ActivitySeed>, serde_json::Error> {
    let entries: BTreeMap<String, Value> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .filter_map(|(name, entry)| {
            let info = entry.get("info");
            let field = |key: &str| info.and_then(|info| info.get(key));

            let Some(max_participants) = max_participants(field("max_participants")) else {
                tracing::warn!(
                    "Skipping seed activity {}: invalid max_participants {}",
                    name,
                    field("max_participants").unwrap_or(&serde_json::Value::Null)
                );
                return None;
            };

            Some(ActivitySeed {
                description: text(field("description")),
                schedule: text(field("schedule")),
                max_participants,
                name,
            })
        })
        .collect())
}

/// Renders a text field, treating a missing or `null` value as empty.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Coerces a capacity value to an integer.
///
/// Returns `None` when the value is truthy but not an integer, an integral string,
/// a float or a boolean, or when it does not fit in `i32`.
fn max_participants(value: Option<&Value>) -> Option<i32> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Some(UNLIMITED_PARTICIPANTS),
        Some(Value::Bool(true)) => Some(1),
        Some(Value::Number(n)) => {
            if let Some(int) = n.as_i64() {
                if int == 0 {
                    Some(UNLIMITED_PARTICIPANTS)
                } else {
                    i32::try_from(int).ok()
                }
            } else {
                let float = n.as_f64()?.trunc();
                if float == 0.0 {
                    Some(UNLIMITED_PARTICIPANTS)
                } else if float >= f64::from(i32::MIN) && float <= f64::from(i32::MAX) {
                    Some(float as i32)
                } else {
                    None
                }
            }
        }
        Some(Value::String(s)) if s.is_empty() => Some(UNLIMITED_PARTICIPANTS),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        Some(Value::Array(items)) if items.is_empty() => Some(UNLIMITED_PARTICIPANTS),
        Some(Value::Object(map)) if map.is_empty() => Some(UNLIMITED_PARTICIPANTS),
        Some(_) => None,
    }
}

/// Reads and parses the seed dataset at `path`.
///
/// # Returns
/// - `Ok(Some(seeds))` - Parsed seed entries
/// - `Ok(None)` - No file exists at `path`
/// - `Err(SeedError)` - The file exists but could not be read or parsed
pub fn load_seed(path: &Path) -> Result<Option<Vec<ActivitySeed>>, SeedError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SeedError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse_seed(&json).map(Some).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
