//! Variables and variable tables
//!
//! A [`VariableTable`] is a snapshot: it is validated once on construction and
//! never mutated afterwards. Refreshing from the variable source means building
//! a new table and swapping it in.

use crate::error::{Error, Result};
use ahash::AHashMap;
use std::fmt;

/// A named numeric value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Name referenced by `[name]` tags (case-sensitive)
    pub name: String,
    /// Finite value substituted for the tag
    pub value: f64,
}

impl Variable {
    /// Create a new variable
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Check that a name can be written as a `[name]` tag
///
/// Names must be non-empty and must not contain `[`, `]` or whitespace.
/// Anything else (including `^` and regex metacharacters) is accepted verbatim.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    if name
        .chars()
        .any(|c| c == '[' || c == ']' || c.is_whitespace())
    {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Ordered mapping from variable name to value
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    /// Variables in source order
    variables: Vec<Variable>,
    /// Name → position in `variables`
    index: AHashMap<String, usize>,
}

impl VariableTable {
    /// Build a table from variables, preserving their order
    ///
    /// Fails on the first invalid name, duplicate name or non-finite value.
    pub fn new(variables: Vec<Variable>) -> Result<Self> {
        let mut index = AHashMap::with_capacity(variables.len());

        for (position, variable) in variables.iter().enumerate() {
            validate_name(&variable.name)?;

            if !variable.value.is_finite() {
                return Err(Error::NonFiniteValue {
                    name: variable.name.clone(),
                    value: variable.value,
                });
            }

            if index.insert(variable.name.clone(), position).is_some() {
                return Err(Error::DuplicateName(variable.name.clone()));
            }
        }

        tracing::debug!("Built variable table with {} entries", variables.len());

        Ok(Self { variables, index })
    }

    /// Create an empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a value by exact, case-sensitive name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variable(name).map(|v| v.value)
    }

    /// Look up a variable by exact, case-sensitive name
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&i| &self.variables[i])
    }

    /// Check whether a name is defined
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over variables in table order
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }

    /// Names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.iter().map(|v| v.name.as_str())
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check if the table has no variables
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl<'a> IntoIterator for &'a VariableTable {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
