use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use bbcars_common::catalog::Specs;
use bbcars_common::{query, Criteria, Language, SortMode, Vehicle};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

/// `GET /api/cars` query string. Spelled out field by field because
/// urlencoded numbers do not survive `#[serde(flatten)]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CarsQuery {
    pub lang: Language,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub body_type: Option<String>,
    pub price_from: Option<u64>,
    pub price_to: Option<u64>,
    pub year_from: Option<u16>,
    pub year_to: Option<u16>,
    pub sort: SortMode,
}

impl CarsQuery {
    fn into_criteria(self) -> (Language, Criteria) {
        let criteria = Criteria {
            brand: self.brand,
            model: self.model,
            body_type: self.body_type,
            price_from: self.price_from,
            price_to: self.price_to,
            year_from: self.year_from,
            year_to: self.year_to,
            sort: self.sort,
        };
        (self.lang, criteria)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LangQuery {
    pub lang: Language,
}

#[derive(Debug, Serialize)]
pub struct VehicleSummary {
    pub id: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    pub year: u16,
    pub body_type: &'static str,
    pub price: &'static str,
    /// `None` when the display price cannot be parsed.
    pub price_czk: Option<u64>,
    pub km: &'static str,
    pub power_kw: &'static str,
    pub image: &'static str,
    pub headline: &'static str,
}

impl VehicleSummary {
    pub fn new(vehicle: &Vehicle, lang: Language) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            body_type: vehicle.body_type,
            price: vehicle.price,
            price_czk: vehicle.price_czk().ok(),
            km: vehicle.km,
            power_kw: vehicle.power_kw,
            image: vehicle.image,
            headline: vehicle.emotional_headline.get(lang),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub summary: VehicleSummary,
    pub in_service_from: &'static str,
    pub engine_capacity: &'static str,
    pub drivetrain: &'static str,
    pub specs: Specs,
    pub story: &'static str,
    pub description: &'static [&'static str],
    pub equipment: &'static [&'static str],
    pub gallery: Vec<&'static str>,
    pub interior_images: &'static [&'static str],
    pub exterior_images: &'static [&'static str],
    pub related: Vec<VehicleSummary>,
}

pub async fn list_cars(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CarsQuery>,
) -> Json<Vec<VehicleSummary>> {
    let (lang, criteria) = params.into_criteria();
    let cars: Vec<VehicleSummary> = query::query(state.catalog.vehicles(), &criteria)
        .into_iter()
        .map(|vehicle| VehicleSummary::new(vehicle, lang))
        .collect();
    tracing::debug!("Inventory query {:?} matched {} cars", criteria, cars.len());
    Json(cars)
}

pub async fn get_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(LangQuery { lang }): Query<LangQuery>,
) -> Result<Json<VehicleDetail>, ApiError> {
    let vehicle = state.catalog.find_vehicle(&id).ok_or_else(|| ApiError::not_found("Car"))?;
    Ok(Json(VehicleDetail {
        summary: VehicleSummary::new(vehicle, lang),
        in_service_from: vehicle.in_service_from,
        engine_capacity: vehicle.engine_capacity,
        drivetrain: vehicle.drivetrain,
        specs: vehicle.specs,
        story: vehicle.story.get(lang),
        description: vehicle.detailed_description.get(lang),
        equipment: vehicle.equipment,
        gallery: vehicle.gallery(),
        interior_images: vehicle.interior_images,
        exterior_images: vehicle.exterior_images,
        related: state
            .catalog
            .related(vehicle.id)
            .into_iter()
            .map(|related| VehicleSummary::new(related, lang))
            .collect(),
    }))
}
