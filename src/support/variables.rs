//! Named physical variable store.
//!
//! Variables are identified by hierarchical, colon-separated names such as
//! `data:geometry:wing:area`. A [`Variables`] store maps each name to a
//! [`Value`], which may be a scalar, a one-dimensional array, or a
//! two-dimensional table.
//!
//! The store is unit-agnostic: each value is interpreted in the unit declared
//! by the [`VariableSpec`] of the component reading or writing it.

mod error;
mod value;

pub use error::VariableError;
pub use value::{Value, ValueKind};

use std::collections::BTreeMap;

/// Declaration of a named variable read or written by a component.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpec {
    /// Hierarchical variable name.
    pub name: String,

    /// Unit label the value is expressed in (e.g. `"m"`, `"rad**-1"`).
    ///
    /// `None` for dimensionless values.
    pub units: Option<&'static str>,

    /// Value used when the variable is absent from the store.
    pub default: Option<Value>,
}

impl VariableSpec {
    /// Declares a dimensionless variable with no default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: None,
            default: None,
        }
    }

    /// Declares a variable expressed in `units`, with no default.
    #[must_use]
    pub fn with_units(name: impl Into<String>, units: &'static str) -> Self {
        Self {
            name: name.into(),
            units: Some(units),
            default: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// An ordered map from variable names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: BTreeMap<String, Value>,
}

impl Variables {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous one if the name was present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns `true` if the store holds a value for `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the value stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError::Missing`] if the name is absent.
    pub fn get(&self, name: &str) -> Result<&Value, VariableError> {
        self.values.get(name).ok_or_else(|| VariableError::missing(name))
    }

    /// Returns a scalar value.
    ///
    /// A length-1 array is accepted as a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError::Missing`] if the name is absent, or
    /// [`VariableError::WrongKind`] if the value is not scalar-like.
    pub fn scalar(&self, name: &str) -> Result<f64, VariableError> {
        match self.get(name)? {
            Value::Scalar(x) => Ok(*x),
            Value::Array(values) if values.len() == 1 => Ok(values[0]),
            _ => Err(VariableError::wrong_kind(name, ValueKind::Scalar)),
        }
    }

    /// Returns a one-dimensional view of a value.
    ///
    /// A scalar is returned as a slice of length one.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError::Missing`] if the name is absent, or
    /// [`VariableError::WrongKind`] if the value is a table.
    pub fn array(&self, name: &str) -> Result<&[f64], VariableError> {
        match self.get(name)? {
            Value::Scalar(x) => Ok(std::slice::from_ref(x)),
            Value::Array(values) => Ok(values),
            Value::Table(_) => Err(VariableError::wrong_kind(name, ValueKind::Array)),
        }
    }

    /// Returns a two-dimensional table value.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError::Missing`] if the name is absent, or
    /// [`VariableError::WrongKind`] if the value is not a table.
    pub fn table(&self, name: &str) -> Result<&[Vec<f64>], VariableError> {
        match self.get(name)? {
            Value::Table(rows) => Ok(rows),
            _ => Err(VariableError::wrong_kind(name, ValueKind::Table)),
        }
    }

    /// Collects the variables named by `specs`, in a new store.
    ///
    /// Names absent from this store take their declared default.
    ///
    /// # Errors
    ///
    /// Returns [`VariableError::Missing`] for an absent name without default.
    pub fn select(&self, specs: &[VariableSpec]) -> Result<Variables, VariableError> {
        let mut selected = Variables::new();
        for spec in specs {
            let value = match (self.get(&spec.name), &spec.default) {
                (Ok(value), _) => value.clone(),
                (Err(_), Some(default)) => default.clone(),
                (Err(err), None) => return Err(err),
            };
            selected.insert(spec.name.clone(), value);
        }
        Ok(selected)
    }

    /// Copies every entry of `other` into this store, overwriting existing names.
    pub fn extend(&mut self, other: Variables) {
        self.values.extend(other.values);
    }

    /// Iterates over entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of stored variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}
