//! The product record exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product.
///
/// `price` is kept as text: the form sends whatever was typed, and the
/// backend's numeric prices are read back in their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Assigned by the backend; never set client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    pub image_url: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price: price.into(),
            image_url: image_url.into(),
        }
    }

    /// One-line summary used by the CLI listing.
    pub fn summary_line(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.name, self.price, self.description, self.image_url
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(number)) => number.to_string(),
        None => String::new(),
    })
}
