use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use business::domain::product::draft::ValidDraft;
use business::domain::product::model::Product;
use business::domain::product::value_objects::{ImageMetadata, ProductId};

/// Product as returned by the catalog API.
///
/// The backend spells two fields differently from the client contract:
/// `relesedate` and `avilable` are read as aliases of `releaseDate` and
/// `available`. Image bytes (`imgdata`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<BigDecimal>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default, alias = "avilable")]
    pub available: Option<bool>,
    #[serde(default, alias = "relesedate", deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, rename = "imgtype")]
    pub image_type: Option<String>,
    #[serde(default, rename = "imgname")]
    pub image_name: Option<String>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        let image = self
            .image_type
            .filter(|t| !t.is_empty())
            .map(|content_type| ImageMetadata {
                file_name: self.image_name,
                content_type,
            });

        Product::from_gateway(
            ProductId::new(self.id),
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.brand.unwrap_or_default(),
            self.category.unwrap_or_default(),
            self.price.unwrap_or_default(),
            self.quantity.unwrap_or_default(),
            self.available.unwrap_or(false),
            self.release_date,
            image,
        )
    }
}

/// JSON part of the multipart create/update body. Never carries the image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: &'a str,
    pub description: &'a str,
    pub brand: &'a str,
    #[serde(serialize_with = "serialize_price")]
    pub price: &'a BigDecimal,
    pub category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    pub available: bool,
    pub quantity: i64,
}

impl<'a> ProductPayload<'a> {
    pub fn for_create(draft: &'a ValidDraft) -> Self {
        Self::build(None, draft)
    }

    pub fn for_update(id: ProductId, draft: &'a ValidDraft) -> Self {
        Self::build(Some(id.get()), draft)
    }

    fn build(id: Option<u64>, draft: &'a ValidDraft) -> Self {
        Self {
            id,
            name: draft.name(),
            description: draft.description(),
            brand: draft.brand(),
            price: draft.price(),
            category: draft.category(),
            release_date: draft.release_date(),
            available: draft.available(),
            quantity: draft.quantity(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    raw.map(|raw| {
        let text = match raw {
            RawNumber::Number(n) => n.to_string(),
            RawNumber::Text(s) => s,
        };
        BigDecimal::from_str(text.trim()).map_err(serde::de::Error::custom)
    })
    .transpose()
}

/// Writes the price as a JSON number.
fn serialize_price<S>(price: &&BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = serde_json::Number::from_str(&price.to_string())
        .map_err(serde::ser::Error::custom)?;
    number.serialize(serializer)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    EpochMillis(i64),
    Text(String),
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and epoch milliseconds.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(RawDate::EpochMillis(millis)) => DateTime::from_timestamp_millis(millis)
            .map(|dt| Some(dt.date_naive()))
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", millis))),
        Some(RawDate::Text(text)) => parse_date_text(&text).map_err(serde::de::Error::custom),
    }
}

fn parse_date_text(text: &str) -> Result<Option<NaiveDate>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| Some(dt.date_naive()))
        .or_else(|_| {
            // Jackson writes offsets without a colon, e.g. `+0000`.
            DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z").map(|dt| Some(dt.date_naive()))
        })
        .map_err(|_| format!("invalid date: {}", text))
}
