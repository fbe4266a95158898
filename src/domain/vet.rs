use serde::{Deserialize, Serialize};

use crate::domain::types::{PersonName, SpecialtyName, VetId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Vet {
    pub id: VetId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Sorted, de-duplicated specialty labels.
    pub specialties: Vec<SpecialtyName>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewVet {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub specialties: Vec<SpecialtyName>,
}

impl NewVet {
    #[must_use]
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        specialties: Vec<SpecialtyName>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            specialties: dedup_specialties(specialties),
        }
    }
}

/// Replacement values for a vet; the specialty list is replaced wholesale.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateVet {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub specialties: Vec<SpecialtyName>,
}

impl UpdateVet {
    #[must_use]
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        specialties: Vec<SpecialtyName>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            specialties: dedup_specialties(specialties),
        }
    }
}

fn dedup_specialties(mut specialties: Vec<SpecialtyName>) -> Vec<SpecialtyName> {
    specialties.sort_unstable();
    specialties.dedup();
    specialties
}
