use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Remote identifier of a brewery record.
///
/// Opaque string assigned by the directory service; the only field of a
/// record that is assumed stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreweryId(String);

impl_id!(BreweryId);
