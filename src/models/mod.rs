//! Domain models for the conversion pipeline.
//!
//! This module contains the two data structures the parser produces and the
//! writer consumes:
//!
//! - [`Attribute`] - a named value parsed from one input line
//! - [`Record`] - an ordered collection of attributes from one record block

// =============================================================================
// Attribute
// =============================================================================

/// A named value belonging to one record.
///
/// When the same attribute name appears more than once within a record block,
/// the occurrences merge into a single attribute whose value is the
/// newline-joined concatenation of all values seen.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name as it appeared on the input line.
    pub name: String,
    /// Value text, possibly newline-joined for multi-valued attributes.
    pub value: String,
}

impl Attribute {
    /// Create a single-valued attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Iterate the individual values of a (possibly multi-valued) attribute.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.value.split('\n')
    }

    /// Whether this attribute accumulated more than one value.
    pub fn is_multi_valued(&self) -> bool {
        self.value.contains('\n')
    }
}

// =============================================================================
// Record
// =============================================================================

/// One directory entry: the attributes retained from one record block.
///
/// Attributes keep the order in which their names were first seen in the
/// input. That order also defines the CSV column order for this record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    attributes: Vec<Attribute>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a (name, value) pair.
    ///
    /// If `name` is already present, `value` is appended to the existing
    /// attribute, joined with a newline. Otherwise a new attribute is pushed,
    /// preserving first-seen order.
    pub fn insert(&mut self, name: &str, value: &str) {
        for attr in &mut self.attributes {
            if attr.name == name {
                attr.value.push('\n');
                attr.value.push_str(value);
                return;
            }
        }
        self.attributes.push(Attribute::new(name, value));
    }

    /// Get an attribute's merged value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// All attributes, in first-seen order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute values in first-seen order (the CSV fields for this record).
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.value.as_str())
    }

    /// Number of distinct attribute names in this record.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no attribute has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
