//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (digit-only registrations,
//! normalized CNPJ, non-empty lookup keys) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Registration number contained something other than digits.
    #[error("invalid registro: {0}")]
    InvalidRegistro(String),
    /// CNPJ did not normalize to exactly 14 digits.
    #[error("invalid cnpj: {0}")]
    InvalidCnpj(String),
    /// Lookup key that cannot be carried as a single URL path segment.
    #[error("invalid operadora id: {0}")]
    InvalidOperadoraId(String),
}

/// Removes the punctuation commonly used when typing a CNPJ.
fn strip_cnpj_punctuation(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-'))
        .collect()
}

/// Registration number assigned to an operadora by the regulator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Registro(String);

impl Registro {
    /// Trims the value and ensures it is a non-empty run of ASCII digits.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(TypeConstraintError::InvalidRegistro(trimmed));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the registration as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Registro {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Registro {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Registro {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Registro {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Registro> for String {
    fn from(value: Registro) -> Self {
        value.0
    }
}

/// Brazilian company tax id, stored as 14 bare digits.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// Strips `.`, `/` and `-` and ensures exactly 14 digits remain.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let digits = strip_cnpj_punctuation(&raw);
        if digits.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if digits.len() != 14 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(TypeConstraintError::InvalidCnpj(raw.trim().to_string()));
        }
        Ok(Self(digits))
    }

    /// Borrow the bare digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Renders the conventional `NN.NNN.NNN/NNNN-NN` mask.
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[0..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..14]
        )
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Cnpj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.0
    }
}

/// Key used to look up a single operadora: either a registro or a CNPJ.
///
/// The backend resolves both forms, so the value is kept verbatim apart from
/// surrounding whitespace. `.` and `..` are rejected since URL path
/// normalization would drop them instead of sending them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct OperadoraId(String);

impl OperadoraId {
    /// Trims whitespace and rejects empty inputs and dot segments.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed == "." || trimmed == ".." {
            return Err(TypeConstraintError::InvalidOperadoraId(trimmed));
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for OperadoraId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OperadoraId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for OperadoraId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OperadoraId> for String {
    fn from(value: OperadoraId) -> Self {
        value.0
    }
}

impl From<&Registro> for OperadoraId {
    fn from(value: &Registro) -> Self {
        Self(value.0.clone())
    }
}

impl From<&Cnpj> for OperadoraId {
    fn from(value: &Cnpj) -> Self {
        Self(value.0.clone())
    }
}

/// Decodes a monetary amount sent either as a JSON number or a decimal string.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(value) => Ok(value),
        Amount::Text(text) => text.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}
