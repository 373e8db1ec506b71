use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub String);

/// A supplier record, fetched read-only. `depot` may be absent for suppliers
/// that have not published a dispatch location; distance ranking orders those
/// after every supplier that has one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub business_name: String,
    pub depot: Option<Coordinates>,
    pub categories: Vec<String>,
    pub is_verified: bool,
}
