//! Diesel models representing vets and their specialties.

use diesel::prelude::*;

use crate::domain::types::{PersonName, SpecialtyName, TypeConstraintError, VetId};
use crate::domain::vet::{NewVet as DomainNewVet, UpdateVet as DomainUpdateVet, Vet as DomainVet};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vets)]
/// Diesel model for [`crate::domain::vet::Vet`] without its specialties.
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vets)]
pub struct NewVet<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::vets)]
pub struct UpdateVet<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations, Insertable)]
#[diesel(table_name = crate::schema::vet_specialties)]
#[diesel(belongs_to(Vet, foreign_key = vet_id))]
#[diesel(primary_key(vet_id, specialty))]
/// Association row linking a vet to one specialty label.
pub struct VetSpecialty {
    pub vet_id: i32,
    pub specialty: String,
}

impl Vet {
    /// Combines the row with its specialty rows into the domain aggregate.
    pub fn into_domain(
        self,
        specialties: Vec<VetSpecialty>,
    ) -> Result<DomainVet, TypeConstraintError> {
        let mut specialties = specialties
            .into_iter()
            .map(|row| SpecialtyName::new(row.specialty))
            .collect::<Result<Vec<_>, _>>()?;
        specialties.sort_unstable();

        Ok(DomainVet {
            id: VetId::try_from(self.id)?,
            first_name: PersonName::new(self.first_name)?,
            last_name: PersonName::new(self.last_name)?,
            specialties,
        })
    }
}

impl<'a> From<&'a DomainNewVet> for NewVet<'a> {
    fn from(vet: &'a DomainNewVet) -> Self {
        Self {
            first_name: vet.first_name.as_str(),
            last_name: vet.last_name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateVet> for UpdateVet<'a> {
    fn from(vet: &'a DomainUpdateVet) -> Self {
        Self {
            first_name: vet.first_name.as_str(),
            last_name: vet.last_name.as_str(),
        }
    }
}

/// Specialty rows to insert for the given vet.
pub fn specialty_rows(vet_id: VetId, specialties: &[SpecialtyName]) -> Vec<VetSpecialty> {
    specialties
        .iter()
        .map(|specialty| VetSpecialty {
            vet_id: vet_id.get(),
            specialty: specialty.as_str().to_string(),
        })
        .collect()
}
