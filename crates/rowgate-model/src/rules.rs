#![deny(unsafe_code)]

use std::fmt;

/// The type a field's values are declared to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedType {
    Int,
    Str,
    Date,
    CountryCode,
}

impl ExpectedType {
    /// Parse a configuration `type` value.
    ///
    /// Returns `None` for anything outside the recognized vocabulary;
    /// the caller turns that into a configuration error, never a
    /// per-record failure.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "int" => Some(ExpectedType::Int),
            "string" => Some(ExpectedType::Str),
            "date" => Some(ExpectedType::Date),
            "country_code" => Some(ExpectedType::CountryCode),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExpectedType::Int => "int",
            ExpectedType::Str => "string",
            ExpectedType::Date => "date",
            ExpectedType::CountryCode => "country_code",
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The constraints configured for one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldRule {
    pub require_non_null: bool,
    pub require_unique: bool,
    pub expected_type: Option<ExpectedType>,
}

impl FieldRule {
    /// The individual rule kinds this field rule enables, in check order.
    pub fn kinds(&self) -> Vec<RuleKind> {
        let mut kinds = Vec::new();
        if self.require_non_null {
            kinds.push(RuleKind::NonNull);
        }
        if self.require_unique {
            kinds.push(RuleKind::Unique);
        }
        if let Some(expected) = self.expected_type {
            kinds.push(RuleKind::Type(expected));
        }
        kinds
    }
}

/// Which constraint a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum RuleKind {
    NonNull,
    Unique,
    Type(ExpectedType),
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::NonNull => f.write_str("none"),
            RuleKind::Unique => f.write_str("unique"),
            RuleKind::Type(expected) => write!(f, "type={expected}"),
        }
    }
}

/// The per-field rules for one run, in configuration declaration order.
///
/// Immutable once built. Fields absent from the rule set are simply
/// unchecked; absence is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RuleSet {
    entries: Vec<(String, FieldRule)>,
}

impl RuleSet {
    pub fn new(entries: Vec<(String, FieldRule)>) -> Self {
        Self { entries }
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn rule_for(&self, field: &str) -> Option<&FieldRule> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.entries
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
