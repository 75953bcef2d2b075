//! Catalog item records and the fields filters can address.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single catalog entry (a motorcycle, a store, a service package).
///
/// Items are seeded once when the catalog loads and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: String,

    /// Display name. This is the primary keyword search field.
    pub name: String,

    /// Category tag (e.g. "scooter", "sport").
    #[serde(default)]
    pub category: String,

    /// Brand tag (e.g. "honda", "yamaha").
    #[serde(default)]
    pub brand: String,

    /// Price in pesos. Never negative.
    #[serde(default)]
    pub price: f64,

    /// Date the item was added to the showroom, used for "newest" ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_on: Option<NaiveDate>,

    /// Extra tagged attributes such as service flags or a store address.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, TagValue>,
}

impl Item {
    /// Creates an item with no tags and no listing date.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            price,
            listed_on: None,
            tags: BTreeMap::new(),
        }
    }

    /// Adds a tag, returning the item for chaining.
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.insert(name.into(), value.into());
        self
    }

    /// Sets the listing date, returning the item for chaining.
    pub fn listed(mut self, date: NaiveDate) -> Self {
        self.listed_on = Some(date);
        self
    }

    /// Returns true if the named tag is a flag set to `true`.
    pub fn has_flag(&self, tag: &str) -> bool {
        matches!(self.tags.get(tag), Some(TagValue::Flag(true)))
    }

    /// Returns the textual value of a field, if the item has one.
    ///
    /// Numbers and flags are rendered so they can be compared against raw
    /// control values.
    pub fn text(&self, field: &Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Name => Some(Cow::Borrowed(&self.name)),
            Field::Category => Some(Cow::Borrowed(&self.category)),
            Field::Brand => Some(Cow::Borrowed(&self.brand)),
            Field::Price => Some(Cow::Owned(self.price.to_string())),
            Field::Tag(tag) => self.tags.get(tag).map(TagValue::as_text),
        }
    }

    /// Returns the numeric value of a field, if it has one.
    pub fn number(&self, field: &Field) -> Option<f64> {
        match field {
            Field::Price => Some(self.price),
            Field::Tag(tag) => match self.tags.get(tag) {
                Some(TagValue::Number(n)) => Some(*n),
                _ => None,
            },
            Field::Name | Field::Category | Field::Brand => None,
        }
    }
}

/// Value of an extra item attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    /// A boolean flag ("open now", "has service center").
    Flag(bool),
    /// A numeric attribute (engine displacement, rating).
    Number(f64),
    /// A free-text attribute (address, opening hours).
    Text(String),
}

impl TagValue {
    /// Returns the value as text.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            TagValue::Flag(b) => Cow::Owned(b.to_string()),
            TagValue::Number(n) => Cow::Owned(n.to_string()),
            TagValue::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        TagValue::Flag(value)
    }
}

impl From<f64> for TagValue {
    fn from(value: f64) -> Self {
        TagValue::Number(value)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

/// A field of [`Item`] that a criterion can address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Category,
    Brand,
    Price,
    /// An entry of [`Item::tags`].
    Tag(String),
}

impl Field {
    /// Parses a field name: `name`, `category`, `brand`, `price` or `tag:<name>`.
    ///
    /// `type` is accepted as an alias for `category`, matching the catalog
    /// page's "type" dropdown. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Field> {
        let s = s.trim();
        if let Some(tag) = s.strip_prefix("tag:") {
            let tag = tag.trim();
            return (!tag.is_empty()).then(|| Field::Tag(tag.to_string()));
        }

        match s.to_lowercase().as_str() {
            "name" => Some(Field::Name),
            "category" | "type" => Some(Field::Category),
            "brand" => Some(Field::Brand),
            "price" => Some(Field::Price),
            _ => None,
        }
    }

    /// Returns true if the field can hold a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Price | Field::Tag(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => f.write_str("name"),
            Field::Category => f.write_str("category"),
            Field::Brand => f.write_str("brand"),
            Field::Price => f.write_str("price"),
            Field::Tag(tag) => write!(f, "tag:{tag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parse_known_names() {
        assert_eq!(Field::parse("name"), Some(Field::Name));
        assert_eq!(Field::parse("Category"), Some(Field::Category));
        assert_eq!(Field::parse("type"), Some(Field::Category));
        assert_eq!(Field::parse(" brand "), Some(Field::Brand));
        assert_eq!(Field::parse("PRICE"), Some(Field::Price));
    }

    #[test]
    fn test_field_parse_tag() {
        assert_eq!(
            Field::parse("tag:open_now"),
            Some(Field::Tag("open_now".to_string()))
        );
        assert_eq!(Field::parse("tag:"), None);
    }

    #[test]
    fn test_field_parse_unknown() {
        assert_eq!(Field::parse("colour"), None);
        assert_eq!(Field::parse(""), None);
    }

    #[test]
    fn test_field_display_roundtrips_through_parse() {
        for field in [
            Field::Name,
            Field::Category,
            Field::Brand,
            Field::Price,
            Field::Tag("weekend".to_string()),
        ] {
            assert_eq!(Field::parse(&field.to_string()), Some(field));
        }
    }

    #[test]
    fn test_item_text_and_number() {
        let item = Item::new("a", "Honda Click", "scooter", "honda", 90000.0)
            .with_tag("address", "Quezon City")
            .with_tag("cc", 125.0)
            .with_tag("service", true);

        assert_eq!(item.text(&Field::Name).as_deref(), Some("Honda Click"));
        assert_eq!(
            item.text(&Field::Tag("address".into())).as_deref(),
            Some("Quezon City")
        );
        assert_eq!(item.text(&Field::Tag("missing".into())), None);
        assert_eq!(item.number(&Field::Price), Some(90000.0));
        assert_eq!(item.number(&Field::Tag("cc".into())), Some(125.0));
        assert_eq!(item.number(&Field::Tag("address".into())), None);
        assert_eq!(item.number(&Field::Brand), None);
        assert!(item.has_flag("service"));
        assert!(!item.has_flag("address"));
    }

    #[test]
    fn test_item_deserialize_minimal_with_tags() {
        let json = r#"{
            "id": "store-1",
            "name": "Koopsiklo Cubao",
            "tags": {"open_now": true, "address": "Aurora Blvd", "bays": 4}
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, "");
        assert_eq!(item.price, 0.0);
        assert!(item.listed_on.is_none());
        assert_eq!(item.tags.get("open_now"), Some(&TagValue::Flag(true)));
        assert_eq!(item.tags.get("bays"), Some(&TagValue::Number(4.0)));
        assert_eq!(
            item.tags.get("address"),
            Some(&TagValue::Text("Aurora Blvd".to_string()))
        );
    }
}
