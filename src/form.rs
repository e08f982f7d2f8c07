//! State behind the product creation form.

use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::product::Product;

/// One input of the creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Description,
    Price,
    ImageUrl,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::ImageUrl,
    ];

    /// The input's `name` attribute, matching the JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::ImageUrl => "image_url",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Price => "Price",
            FormField::ImageUrl => "Image URL",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| CatalogError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Current text of every form input. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    name: String,
    description: String,
    price: String,
    image_url: String,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Description => &self.description,
            FormField::Price => &self.price,
            FormField::ImageUrl => &self.image_url,
        }
    }

    /// Replace one field's text. Other fields are left alone.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Description => &mut self.description,
            FormField::Price => &mut self.price,
            FormField::ImageUrl => &mut self.image_url,
        };
        *slot = value.into();
    }

    /// Like [`ProductForm::set`], keyed by the input's `name` attribute.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), CatalogError> {
        let field: FormField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// Snapshot the current values. No validation is applied.
    pub fn to_product(&self) -> Product {
        Product::new(
            self.name.clone(),
            self.description.clone(),
            self.price.clone(),
            self.image_url.clone(),
        )
    }
}

/// Message shown after a successful submission.
pub const CREATED_MESSAGE: &str = "Product created!";

/// What the form reports once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_result<T>(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(_) => SubmitOutcome::Created,
            Err(e) => SubmitOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created)
    }

    /// Text to show the user.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Created => CREATED_MESSAGE.to_string(),
            SubmitOutcome::Failed(reason) => format!("Could not create product: {reason}"),
        }
    }
}
