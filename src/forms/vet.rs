//! Request body for registering and updating vets.

use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{PersonName, SpecialtyName};
use crate::domain::vet::{NewVet, UpdateVet};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VetRequest {
    #[validate(length(min = 1, max = 128))]
    pub first_name: String,
    #[validate(length(min = 1, max = 128))]
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// Validated vet values; blank specialty entries are dropped.
#[derive(Debug)]
pub struct VetPayload {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub specialties: Vec<SpecialtyName>,
}

impl TryFrom<VetRequest> for VetPayload {
    type Error = FormError;

    fn try_from(request: VetRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let specialties = request
            .specialties
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| SpecialtyName::new(s).map_err(|_| FormError::InvalidSpecialty))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            first_name: PersonName::new(request.first_name).map_err(|_| FormError::InvalidName)?,
            last_name: PersonName::new(request.last_name).map_err(|_| FormError::InvalidName)?,
            specialties,
        })
    }
}

impl VetPayload {
    pub fn into_new(self) -> NewVet {
        NewVet::new(self.first_name, self.last_name, self.specialties)
    }

    pub fn into_update(self) -> UpdateVet {
        UpdateVet::new(self.first_name, self.last_name, self.specialties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_specialties_are_dropped() {
        let request = VetRequest {
            first_name: "Linda".into(),
            last_name: "Douglas".into(),
            specialties: vec!["  surgery ".into(), "".into(), "   ".into()],
        };

        let payload = VetPayload::try_from(request).expect("valid request");
        let names: Vec<&str> = payload.specialties.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["surgery"]);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let request = VetRequest {
            first_name: "   ".into(),
            last_name: "Douglas".into(),
            specialties: vec![],
        };

        assert!(matches!(
            VetPayload::try_from(request),
            Err(FormError::InvalidName)
        ));
    }

    #[test]
    fn empty_name_fails_validation() {
        let request = VetRequest {
            first_name: "Linda".into(),
            last_name: String::new(),
            specialties: vec![],
        };

        assert!(matches!(
            VetPayload::try_from(request),
            Err(FormError::Validation(_))
        ));
    }
}
