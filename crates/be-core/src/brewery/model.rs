use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::BreweryId;

/// A single brewery record as returned by the directory service.
///
/// Identity is `id`; the remaining fields are display data and may change
/// between fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brewery {
    pub id: BreweryId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub brewery_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub state: String,
}

impl Brewery {
    pub fn new(
        id: impl Into<BreweryId>,
        name: impl Into<String>,
        brewery_type: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brewery_type: brewery_type.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

// The directory sends `null` for unknown locality fields.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
