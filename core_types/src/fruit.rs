use serde::{Deserialize, Deserializer, Serialize};

/// Flat fruit record returned by `GET /fruits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicFruit {
    pub id: i64,
    pub fruit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: f64,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vitamins: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
}

/// Fruit joined with its nutritional record and suppliers, as returned inside
/// the `GET /get_all_data` envelope.
///
/// The API leaves most columns nullable, so missing or `null` scalars decode
/// to their defaults instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtendedFruit {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub taste: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin_country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_per_kg: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub nutritional_info: Option<NutritionalInfo>,
    /// Ordered; only the first entry is shown as the primary supplier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub suppliers: Vec<Supplier>,
}

/// Envelope of `GET /get_all_data`. The totals are advisory and are never
/// checked against `fruits.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllData {
    pub fruits: Vec<ExtendedFruit>,
    #[serde(default)]
    pub total_fruits: u64,
    #[serde(default)]
    pub total_suppliers: u64,
    #[serde(default)]
    pub total_nutritional_records: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
