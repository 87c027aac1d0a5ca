//! PC entity type - A personal computer in the catalog

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::core::entity::Entity;
use crate::core::set::UniqueCollection;

/// Maximum length of a model name, in characters
pub const MODEL_MAX_LEN: usize = 20;

/// Earliest accepted manufacturing year
pub const MIN_YEAR: i32 = 1984;

/// Maximum length of a manufacturer name, in characters
pub const MANUFACTURER_MAX_LEN: usize = 15;

/// The attributes of a PC, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Model,
    Year,
    Manufacturer,
    Components,
}

impl RecordField {
    /// The domain constraint on this field, as shown in diagnostics
    pub fn constraint(&self) -> &'static str {
        match self {
            RecordField::Model => "model must be 1 to 20 characters long",
            RecordField::Year => "year must be 1984 or later",
            RecordField::Manufacturer => "manufacturer must be 1 to 15 characters long",
            RecordField::Components => "a component set is required (it may be empty)",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Model => write!(f, "model"),
            RecordField::Year => write!(f, "year"),
            RecordField::Manufacturer => write!(f, "manufacturer"),
            RecordField::Components => write!(f, "components"),
        }
    }
}

/// A PC could not be constructed because one of its fields is out of domain
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid {field}: {value:?}")]
#[diagnostic(code(pccat::record::invalid))]
pub struct InvalidRecordError {
    /// The first field that failed validation
    pub field: RecordField,

    /// The rejected value, rendered as text
    pub value: String,

    #[help]
    constraint: Option<&'static str>,
}

impl InvalidRecordError {
    fn new(field: RecordField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            constraint: Some(field.constraint()),
        }
    }
}

/// A personal computer used mainly at home rather than by large organizations
///
/// Only `model` and `components` can change after creation, and only through
/// the validating setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pc {
    model: String,
    year: i32,
    manufacturer: String,
    components: UniqueCollection<String>,
}

impl Pc {
    /// Validate every field in order and build the record
    ///
    /// Use [`crate::core::factory::PcFactory`] instead of calling this directly.
    pub(crate) fn new(
        model: impl Into<String>,
        year: i32,
        manufacturer: impl Into<String>,
        components: impl Into<Option<UniqueCollection<String>>>,
    ) -> Result<Self, InvalidRecordError> {
        let model = model.into();
        if !Self::validate_model(&model) {
            return Err(InvalidRecordError::new(RecordField::Model, model));
        }
        if !Self::validate_year(year) {
            return Err(InvalidRecordError::new(RecordField::Year, year.to_string()));
        }
        let manufacturer = manufacturer.into();
        if !Self::validate_manufacturer(&manufacturer) {
            return Err(InvalidRecordError::new(
                RecordField::Manufacturer,
                manufacturer,
            ));
        }
        let components = match components.into() {
            Some(c) if Self::validate_components(Some(&c)) => c,
            _ => return Err(InvalidRecordError::new(RecordField::Components, "<none>")),
        };

        Ok(Self {
            model,
            year,
            manufacturer,
            components,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn components(&self) -> &UniqueCollection<String> {
        &self.components
    }

    /// Replace the model if the new value is valid
    ///
    /// Unlike construction this never errors: an invalid value leaves the
    /// record untouched and returns `false`.
    pub fn set_model(&mut self, model: impl Into<String>) -> bool {
        let model = model.into();
        if !Self::validate_model(&model) {
            return false;
        }
        self.model = model;
        true
    }

    /// Replace the component set if one is given
    pub fn set_components(
        &mut self,
        components: impl Into<Option<UniqueCollection<String>>>,
    ) -> bool {
        match components.into() {
            Some(components) if Self::validate_components(Some(&components)) => {
                self.components = components;
                true
            }
            _ => false,
        }
    }

    pub fn validate_model(model: &str) -> bool {
        (1..=MODEL_MAX_LEN).contains(&model.chars().count())
    }

    pub fn validate_year(year: i32) -> bool {
        year >= MIN_YEAR
    }

    pub fn validate_manufacturer(manufacturer: &str) -> bool {
        (1..=MANUFACTURER_MAX_LEN).contains(&manufacturer.chars().count())
    }

    /// Components only need to be present; their content is unrestricted
    pub fn validate_components(components: Option<&UniqueCollection<String>>) -> bool {
        components.is_some()
    }
}

impl Entity for Pc {
    const KIND: &'static str = "PC";

    fn rep_ok(&self) -> bool {
        Self::validate_model(&self.model)
            && Self::validate_year(self.year)
            && Self::validate_manufacturer(&self.manufacturer)
            && Self::validate_components(Some(&self.components))
    }
}

impl fmt::Display for Pc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PC<{},{},{},{}>",
            self.model, self.year, self.manufacturer, self.components
        )
    }
}
