//! Platform-asserted identity fields gathered while locating a claim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named identity attribute, e.g. `username = "RiccardoM"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityField {
    pub name: String,
    pub value: String,
}

/// Ordered identity attributes reported alongside a verified claim.
///
/// Callers can cross-check these against the token they asked for. The
/// `Display` form joins the values with `,` to match the CLI output line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    fields: Vec<IdentityField>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Identity::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a field. Empty values are dropped.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.fields.push(IdentityField {
            name: name.into(),
            value,
        });
    }

    /// First value recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn fields(&self) -> &[IdentityField] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in &self.fields {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(&field.value)?;
            first = false;
        }
        Ok(())
    }
}
