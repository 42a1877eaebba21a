use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One recycling-capable business returned by the search service.
///
/// Only `name` and `address` are required. The optional fields follow the
/// service's JSON, where absent values are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Recycled-material category labels, in the order the service sent them.
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: Vec<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_coordinates")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opening_hours: Vec<String>,
    /// Material category to the keywords found for it on the business's
    /// website or place details.
    #[serde(default, deserialize_with = "null_as_default")]
    pub website_materials: BTreeMap<String, Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_keywords: Vec<String>,
    /// Address component type (`route`, `postal_town`, ...) to its value.
    #[serde(default, deserialize_with = "lenient_object")]
    pub address_components: serde_json::Map<String, serde_json::Value>,
    /// Any other fields the service sent, kept so saved results match the
    /// service payload.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl BusinessRecord {
    /// Builds a record with only the required fields set.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: None,
            website: None,
            rating: None,
            materials: Vec::new(),
            place_id: None,
            coordinates: None,
            opening_hours: Vec::new(),
            website_materials: BTreeMap::new(),
            service_keywords: Vec::new(),
            address_components: serde_json::Map::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// The string value of one address component, if present and not blank.
    #[must_use]
    pub fn address_component(&self, kind: &str) -> Option<&str> {
        non_blank(self.address_components.get(kind).and_then(serde_json::Value::as_str))
    }

    /// The phone number, if one was supplied and is not blank.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref())
    }

    /// The website URL, if one was supplied and is not blank.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        non_blank(self.website.as_deref())
    }

    /// The rating, if one was supplied. A rating of zero is still a rating.
    #[must_use]
    pub fn rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite())
    }

    /// `None` when the record is usable, otherwise the reason it is not.
    #[must_use]
    pub fn defect(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("business name is blank");
        }
        None
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The service sends `{}` for businesses without a location, so anything
/// that is not a full `{lat, lng}` pair becomes `None`.
fn lenient_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}

/// Only a JSON object is usable as address components; anything else
/// (`null`, or the raw Places API list) becomes empty.
fn lenient_object<'de, D>(
    deserializer: D,
) -> Result<serde_json::Map<String, serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    })
}
