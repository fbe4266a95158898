//! Vet representation returned by the API.

use serde::Serialize;

use crate::domain::vet::Vet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<String>,
}

impl From<Vet> for VetResponse {
    fn from(vet: Vet) -> Self {
        Self {
            id: vet.id.get(),
            first_name: vet.first_name.into_inner(),
            last_name: vet.last_name.into_inner(),
            specialties: vet
                .specialties
                .into_iter()
                .map(|specialty| specialty.into_inner())
                .collect(),
        }
    }
}
