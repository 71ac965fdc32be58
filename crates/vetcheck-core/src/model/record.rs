use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::errors::{Result, VetError};

/// CheckupRecord - one animal checked in at the clinic
///
/// Built in memory by the console, validated, then handed to the store which
/// assigns `id` on insert. The store never enforces the species enumeration;
/// any non-empty label is accepted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckupRecord {
    /// Store-assigned identifier (None until persisted)
    pub id: Option<i64>,

    /// Kind of animal (Cat, Dog, Parrot at the console)
    pub species: String,

    /// Name of the animal
    pub name: String,

    /// Name of the animal's owner
    pub owner: String,

    /// Age of the animal; 0 does not pass validation
    pub age: i64,

    /// Reason for the visit
    pub checkup_reason: String,
}

impl CheckupRecord {
    /// Create an unpersisted record
    pub fn new(
        species: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        age: i64,
        checkup_reason: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            species: species.into(),
            name: name.into(),
            owner: owner.into(),
            age,
            checkup_reason: checkup_reason.into(),
        }
    }

    /// Names of required fields that are empty (or zero for `age`),
    /// in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("species", self.species.is_empty()),
            ("name", self.name.is_empty()),
            ("owner", self.owner.is_empty()),
            ("age", self.age == 0),
            ("checkup_reason", self.checkup_reason.is_empty()),
        ];
        checks
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(field, _)| field)
            .collect()
    }

    /// Check that every field except `id` is present
    ///
    /// # Errors
    /// Returns `VetError::InvalidRecord` naming each missing field.
    pub fn check(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(VetError::InvalidRecord { missing })
        }
    }

    /// Validate before insertion
    ///
    /// Returns false and reports one warning through `diagnostics` when any
    /// required field is missing. Never fails otherwise.
    pub fn validate(&self, diagnostics: &dyn Diagnostics) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(err) => {
                diagnostics.warning(
                    "validate",
                    &format!("Invalid animal data: {:?} ({})", self, err),
                );
                false
            }
        }
    }
}
