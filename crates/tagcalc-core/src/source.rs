//! Variable source payload
//!
//! The variable source returns a JSON array of `{ "id": 1, "name": "...", "value": 1.5 }`
//! objects. Fetching it is the caller's job; this module only turns an already
//! received payload into a [`VariableTable`].

use crate::error::Result;
#[cfg(feature = "serde")]
use crate::error::Error;
use crate::variable::{Variable, VariableTable};

/// One entry of the variable source payload
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableRecord {
    /// Source-side identifier (not used by formulas)
    pub id: i64,
    pub name: String,
    pub value: f64,
}

impl From<VariableRecord> for Variable {
    fn from(record: VariableRecord) -> Self {
        Variable::new(record.name, record.value)
    }
}

impl VariableTable {
    /// Build a table from source records, in payload order
    pub fn from_records(records: Vec<VariableRecord>) -> Result<Self> {
        VariableTable::new(records.into_iter().map(Variable::from).collect())
    }

    /// Decode a JSON payload into a table
    ///
    /// The whole payload is rejected if any record is malformed or fails
    /// table validation; a partial table is never returned.
    #[cfg(feature = "serde")]
    pub fn from_json(payload: &str) -> Result<Self> {
        let records: Vec<VariableRecord> =
            serde_json::from_str(payload).map_err(|e| Error::Payload(e.to_string()))?;
        Self::from_records(records)
    }
}
