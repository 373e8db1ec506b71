use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkuId(pub String);

/// A catalog entry, fetched read-only. When the wizard is entered from a
/// product page the looked-up SKU seeds the first line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    pub id: SkuId,
    pub name: String,
    pub unit: String,
    pub category: Option<String>,
    pub base_price: Option<Decimal>,
}
