//! Lead forms: the payloads the site's forms submit and their validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Catalog;

const MIN_PHONE_DIGITS: usize = 9;
const YEAR_BOUNDS: (u16, u16) = (1900, 2100);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeadRequest {
    CarInquiry {
        car_id: String,
        email: String,
        phone: String,
        #[serde(default)]
        note: String,
    },
    Buyout {
        brand_model: String,
        year: String,
        mileage: String,
        phone: String,
    },
    CustomOrder {
        brand_model: String,
        #[serde(default)]
        budget: String,
        email: String,
        phone: String,
        #[serde(default)]
        note: String,
    },
    Rent {
        car_id: String,
        /// `YYYY-MM-DD`, as produced by `<input type="date">`.
        date_from: String,
        date_to: String,
        phone: String,
        email: String,
    },
    Contact {
        name: String,
        email: String,
        message: String,
    },
}

/// Returned to the browser when a lead is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadReceipt {
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0:?} is not a valid e-mail address")]
    InvalidEmail(String),
    #[error("{0:?} is not a valid phone number")]
    InvalidPhone(String),
    #[error("{0:?} is not a valid year")]
    InvalidYear(String),
    #[error("{0:?} is not a valid date")]
    InvalidDate(String),
    #[error("the rental must end on or after the day it starts")]
    DateOrder,
    #[error("car {0:?} is not in the inventory")]
    UnknownCar(String),
}

impl LeadError {
    /// Form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            LeadError::Missing(field) => field,
            LeadError::InvalidEmail(_) => "email",
            LeadError::InvalidPhone(_) => "phone",
            LeadError::InvalidYear(_) => "year",
            LeadError::InvalidDate(_) | LeadError::DateOrder => "date_to",
            LeadError::UnknownCar(_) => "car_id",
        }
    }
}

impl LeadRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            LeadRequest::CarInquiry { .. } => "car_inquiry",
            LeadRequest::Buyout { .. } => "buyout",
            LeadRequest::CustomOrder { .. } => "custom_order",
            LeadRequest::Rent { .. } => "rent",
            LeadRequest::Contact { .. } => "contact",
        }
    }

    /// Key for per-customer rate limiting: the phone number when the form
    /// has one, otherwise the e-mail, normalized.
    pub fn contact_key(&self) -> String {
        match self {
            LeadRequest::CarInquiry { phone, .. }
            | LeadRequest::Buyout { phone, .. }
            | LeadRequest::CustomOrder { phone, .. }
            | LeadRequest::Rent { phone, .. } => phone.chars().filter(|c| c.is_ascii_digit()).collect(),
            LeadRequest::Contact { email, .. } => email.trim().to_lowercase(),
        }
    }

    /// The car the lead refers to, if any.
    pub fn car_id(&self) -> Option<&str> {
        match self {
            LeadRequest::CarInquiry { car_id, .. } | LeadRequest::Rent { car_id, .. } => Some(car_id),
            _ => None,
        }
    }

    /// Trims every field and checks it; returns the cleaned lead.
    pub fn validate(self, catalog: &Catalog<'_>) -> Result<LeadRequest, LeadError> {
        let lead = match self {
            LeadRequest::CarInquiry { car_id, email, phone, note } => LeadRequest::CarInquiry {
                car_id: known_car(catalog, required("car_id", car_id)?)?,
                email: email_address(required("email", email)?)?,
                phone: phone_number(required("phone", phone)?)?,
                note: note.trim().to_string(),
            },
            LeadRequest::Buyout { brand_model, year, mileage, phone } => LeadRequest::Buyout {
                brand_model: required("brand_model", brand_model)?,
                year: model_year(required("year", year)?)?,
                mileage: required("mileage", mileage)?,
                phone: phone_number(required("phone", phone)?)?,
            },
            LeadRequest::CustomOrder { brand_model, budget, email, phone, note } => LeadRequest::CustomOrder {
                brand_model: required("brand_model", brand_model)?,
                budget: budget.trim().to_string(),
                email: email_address(required("email", email)?)?,
                phone: phone_number(required("phone", phone)?)?,
                note: note.trim().to_string(),
            },
            LeadRequest::Rent { car_id, date_from, date_to, phone, email } => {
                let car_id = known_car(catalog, required("car_id", car_id)?)?;
                let from = date(required("date_from", date_from)?)?;
                let to = date(required("date_to", date_to)?)?;
                if to < from {
                    return Err(LeadError::DateOrder);
                }
                LeadRequest::Rent {
                    car_id,
                    date_from: from.to_string(),
                    date_to: to.to_string(),
                    phone: phone_number(required("phone", phone)?)?,
                    email: email_address(required("email", email)?)?,
                }
            }
            LeadRequest::Contact { name, email, message } => LeadRequest::Contact {
                name: required("name", name)?,
                email: email_address(required("email", email)?)?,
                message: required("message", message)?,
            },
        };
        Ok(lead)
    }
}

fn required(field: &'static str, value: String) -> Result<String, LeadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LeadError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn email_address(value: String) -> Result<String, LeadError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(value)
    } else {
        Err(LeadError::InvalidEmail(value))
    }
}

fn phone_number(value: String) -> Result<String, LeadError> {
    let allowed = value.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '+');
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if allowed && digits >= MIN_PHONE_DIGITS {
        Ok(value)
    } else {
        Err(LeadError::InvalidPhone(value))
    }
}

fn model_year(value: String) -> Result<String, LeadError> {
    match value.parse::<u16>() {
        Ok(year) if (YEAR_BOUNDS.0..=YEAR_BOUNDS.1).contains(&year) => Ok(value),
        _ => Err(LeadError::InvalidYear(value)),
    }
}

fn date(value: String) -> Result<NaiveDate, LeadError> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| LeadError::InvalidDate(value))
}

fn known_car(catalog: &Catalog<'_>, id: String) -> Result<String, LeadError> {
    if catalog.find_vehicle(&id).is_some() {
        Ok(id)
    } else {
        Err(LeadError::UnknownCar(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(email: &str, phone: &str) -> LeadRequest {
        LeadRequest::CarInquiry {
            car_id: "porsche-911-gt3".into(),
            email: email.into(),
            phone: phone.into(),
            note: "  Je možná prohlídka v sobotu?  ".into(),
        }
    }

    #[test]
    fn accepts_and_trims_valid_inquiry() {
        let lead = inquiry(" jan@example.cz ", "+420 605 034 911").validate(&Catalog::builtin()).unwrap();
        let LeadRequest::CarInquiry { email, note, .. } = lead else {
            panic!("kind changed");
        };
        assert_eq!(email, "jan@example.cz");
        assert_eq!(note, "Je možná prohlídka v sobotu?");
    }

    #[test]
    fn rejects_bad_contact_details() {
        let catalog = Catalog::builtin();
        assert!(matches!(inquiry("jan.example.cz", "605034911").validate(&catalog), Err(LeadError::InvalidEmail(_))));
        assert!(matches!(inquiry("jan@localhost", "605034911").validate(&catalog), Err(LeadError::InvalidEmail(_))));
        assert!(matches!(inquiry("jan@example.cz", "605 03").validate(&catalog), Err(LeadError::InvalidPhone(_))));
        assert!(matches!(inquiry("jan@example.cz", "call me maybe").validate(&catalog), Err(LeadError::InvalidPhone(_))));
        assert_eq!(inquiry("   ", "605034911").validate(&catalog), Err(LeadError::Missing("email")));
    }

    #[test]
    fn rejects_unknown_car() {
        let lead = LeadRequest::CarInquiry {
            car_id: "trabant-601".into(),
            email: "a@b.cz".into(),
            phone: "605034911".into(),
            note: String::new(),
        };
        let err = lead.validate(&Catalog::builtin()).unwrap_err();
        assert_eq!(err, LeadError::UnknownCar("trabant-601".into()));
        assert_eq!(err.field(), "car_id");
    }

    #[test]
    fn rental_dates_must_be_ordered() {
        let rent = |from: &str, to: &str| LeadRequest::Rent {
            car_id: "bmw-m4-comp".into(),
            date_from: from.into(),
            date_to: to.into(),
            phone: "605034911".into(),
            email: "a@b.cz".into(),
        };
        let catalog = Catalog::builtin();
        assert!(rent("2025-06-01", "2025-06-01").validate(&catalog).is_ok());
        assert_eq!(rent("2025-06-03", "2025-06-01").validate(&catalog), Err(LeadError::DateOrder));
        assert!(matches!(rent("1. 6. 2025", "2025-06-03").validate(&catalog), Err(LeadError::InvalidDate(_))));
    }

    #[test]
    fn buyout_year_is_checked() {
        let buyout = |year: &str| LeadRequest::Buyout {
            brand_model: "Ferrari 296 GTB".into(),
            year: year.into(),
            mileage: "5 000 km".into(),
            phone: "+420605034911".into(),
        };
        let catalog = Catalog::builtin();
        assert!(buyout("2023").validate(&catalog).is_ok());
        assert!(matches!(buyout("23").validate(&catalog), Err(LeadError::InvalidYear(_))));
        assert!(matches!(buyout("dvacet").validate(&catalog), Err(LeadError::InvalidYear(_))));
    }

    #[test]
    fn deserializes_tagged_payload() {
        let lead: LeadRequest = serde_json::from_str(
            r#"{"kind":"contact","name":"Jana","email":"jana@example.com","message":"Dobrý den"}"#,
        )
        .unwrap();
        assert_eq!(lead.kind(), "contact");
        assert_eq!(lead.contact_key(), "jana@example.com");
        assert_eq!(inquiry("a@b.cz", "+420 605 034 911").contact_key(), "420605034911");
    }
}
