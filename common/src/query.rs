//! Inventory query engine: filters and orders the vehicle table for a set of
//! user-selected criteria. Everything here is a pure function of its inputs
//! and returns borrowed views; the table itself is never touched.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Vehicle;
use crate::price::format_czk;

/// Oldest and newest year offered in the year filter.
pub const YEAR_RANGE: (u16, u16) = (1990, 2025);
/// Price filter options run from `PRICE_STEP` up to `PRICE_MAX` in `PRICE_STEP` steps.
pub const PRICE_STEP: u64 = 100_000;
pub const PRICE_MAX: u64 = 15_000_000;
/// Hits shown by the search overlay.
pub const SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Catalog order.
    #[default]
    Unsorted,
    PriceAsc,
    PriceDesc,
}

/// Filter and sort selections for one inventory view. Unset fields impose
/// no constraint; set fields are combined with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub brand: Option<String>,
    /// Only meaningful together with the brand it was picked under.
    pub model: Option<String>,
    pub body_type: Option<String>,
    pub price_from: Option<u64>,
    pub price_to: Option<u64>,
    pub year_from: Option<u16>,
    pub year_to: Option<u16>,
    pub sort: SortMode,
}

impl Criteria {
    /// Selects a brand and clears the dependent model selection.
    pub fn set_brand(&mut self, brand: Option<String>) {
        self.brand = brand;
        self.model = None;
    }

    /// Clears every filter but keeps the sort mode.
    pub fn reset_filters(&mut self) {
        *self = Criteria { sort: self.sort, ..Criteria::default() };
    }

    pub fn has_filters(&self) -> bool {
        self.brand.is_some()
            || self.model.is_some()
            || self.body_type.is_some()
            || self.price_from.is_some()
            || self.price_to.is_some()
            || self.year_from.is_some()
            || self.year_to.is_some()
    }

    /// Whether `vehicle` satisfies every supplied constraint. A vehicle whose
    /// price cannot be parsed fails any price bound.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if self.brand.as_deref().is_some_and(|b| b != vehicle.brand) {
            return false;
        }
        if self.model.as_deref().is_some_and(|m| m != vehicle.model) {
            return false;
        }
        if self.body_type.as_deref().is_some_and(|b| b != vehicle.body_type) {
            return false;
        }
        if self.price_from.is_some() || self.price_to.is_some() {
            let Ok(price) = vehicle.price_czk() else {
                return false;
            };
            if self.price_from.is_some_and(|min| price < min) {
                return false;
            }
            if self.price_to.is_some_and(|max| price > max) {
                return false;
            }
        }
        if self.year_from.is_some_and(|min| vehicle.year < min) {
            return false;
        }
        if self.year_to.is_some_and(|max| vehicle.year > max) {
            return false;
        }
        true
    }
}

/// Vehicles matching `criteria`, ordered by its sort mode. Sorting is stable,
/// so equal prices keep catalog order; unparseable prices go last.
pub fn query<'a>(vehicles: &'a [Vehicle], criteria: &Criteria) -> Vec<&'a Vehicle> {
    let mut selected: Vec<&Vehicle> = vehicles.iter().filter(|v| criteria.matches(v)).collect();
    match criteria.sort {
        SortMode::Unsorted => {}
        SortMode::PriceAsc => selected.sort_by(|a, b| compare_prices(a, b, false)),
        SortMode::PriceDesc => selected.sort_by(|a, b| compare_prices(a, b, true)),
    }
    selected
}

fn compare_prices(a: &Vehicle, b: &Vehicle, descending: bool) -> Ordering {
    match (a.price_czk().ok(), b.price_czk().ok()) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Distinct brands, alphabetically.
pub fn brands(vehicles: &[Vehicle]) -> Vec<&'static str> {
    distinct(vehicles.iter().map(|v| v.brand))
}

/// Models offered for `brand`, or for the whole table when no brand is selected.
pub fn available_models(vehicles: &[Vehicle], brand: Option<&str>) -> Vec<&'static str> {
    distinct(
        vehicles
            .iter()
            .filter(|v| brand.map_or(true, |b| v.brand == b))
            .map(|v| v.model),
    )
}

pub fn body_types(vehicles: &[Vehicle]) -> Vec<&'static str> {
    distinct(vehicles.iter().map(|v| v.body_type))
}

fn distinct(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

/// Case-insensitive substring search over brand and model. A blank query
/// returns nothing.
pub fn search<'a>(vehicles: &'a [Vehicle], text: &str, limit: usize) -> Vec<&'a Vehicle> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    vehicles
        .iter()
        .filter(|v| v.brand.to_lowercase().contains(&needle) || v.model.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Year filter options, newest first.
pub fn year_options() -> impl Iterator<Item = u16> {
    (YEAR_RANGE.0..=YEAR_RANGE.1).rev()
}

/// Price filter options as `(value, label)` pairs.
pub fn price_options() -> Vec<(u64, String)> {
    (1..=PRICE_MAX / PRICE_STEP)
        .map(|step| {
            let value = step * PRICE_STEP;
            (value, format_czk(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn car(id: &'static str, brand: &'static str, model: &'static str, year: u16, price: &'static str) -> Vehicle {
        Vehicle { id, brand, model, year, price, body_type: "Coupe", ..Default::default() }
    }

    fn table() -> Vec<Vehicle> {
        vec![
            car("gt3", "Porsche", "911 GT3", 2023, "6 490 000 Kč"),
            car("296", "Ferrari", "296 GTB", 2024, "9 250 000 Kč"),
            car("m4", "BMW", "M4", 2024, "3 250 000 Kč"),
            car("taycan", "Porsche", "Taycan", 2021, "2 900 000 Kč"),
            Vehicle { body_type: "SUV", ..car("cayenne", "Porsche", "Cayenne", 2019, "na dotaz") },
        ]
    }

    fn ids(vehicles: &[&Vehicle]) -> Vec<&'static str> {
        vehicles.iter().map(|v| v.id).collect()
    }

    #[test]
    fn price_window_selects_single_vehicle() {
        let vehicles = vec![
            car("a", "Porsche", "911", 2023, "6 490 000 Kč"),
            car("b", "Ferrari", "296", 2024, "9 250 000 Kč"),
            car("c", "BMW", "M4", 2024, "3 250 000 Kč"),
        ];
        let criteria = Criteria { price_from: Some(4_000_000), price_to: Some(9_000_000), ..Default::default() };
        assert_eq!(ids(&query(&vehicles, &criteria)), vec!["a"]);
    }

    #[test]
    fn brand_filter_keeps_catalog_order() {
        let vehicles = table();
        let criteria = Criteria { brand: Some("Porsche".into()), ..Default::default() };
        assert_eq!(ids(&query(&vehicles, &criteria)), vec!["gt3", "taycan", "cayenne"]);
    }

    #[test]
    fn every_result_satisfies_every_constraint() {
        let vehicles = Catalog::builtin().vehicles();
        let samples = [
            Criteria { brand: Some("Porsche".into()), ..Default::default() },
            Criteria { body_type: Some("Coupe".into()), year_from: Some(2024), ..Default::default() },
            Criteria { price_from: Some(5_000_000), year_to: Some(2023), sort: SortMode::PriceDesc, ..Default::default() },
            Criteria { brand: Some("BMW".into()), model: Some("M4 Competition xDrive".into()), price_to: Some(4_000_000), ..Default::default() },
        ];
        for criteria in &samples {
            let result = query(vehicles, criteria);
            for v in &result {
                assert!(criteria.matches(v));
                if let Some(brand) = &criteria.brand {
                    assert_eq!(v.brand, brand);
                }
                let price = v.price_czk().unwrap();
                assert!(criteria.price_from.map_or(true, |min| price >= min));
                assert!(criteria.price_to.map_or(true, |max| price <= max));
                assert!(criteria.year_from.map_or(true, |min| v.year >= min));
                assert!(criteria.year_to.map_or(true, |max| v.year <= max));
            }
            let expected = vehicles.iter().filter(|v| criteria.matches(v)).count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn querying_twice_gives_same_sequence() {
        let vehicles = table();
        let criteria = Criteria { body_type: Some("Coupe".into()), sort: SortMode::PriceAsc, ..Default::default() };
        assert_eq!(ids(&query(&vehicles, &criteria)), ids(&query(&vehicles, &criteria)));
    }

    #[test]
    fn ascending_and_descending_are_ordered() {
        let vehicles = Catalog::builtin().vehicles();
        let asc = query(vehicles, &Criteria { sort: SortMode::PriceAsc, ..Default::default() });
        let asc_prices: Vec<u64> = asc.iter().map(|v| v.price_czk().unwrap()).collect();
        assert!(asc_prices.windows(2).all(|w| w[0] <= w[1]));

        let desc = query(vehicles, &Criteria { sort: SortMode::PriceDesc, ..Default::default() });
        let desc_prices: Vec<u64> = desc.iter().map(|v| v.price_czk().unwrap()).collect();
        assert!(desc_prices.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(asc.len(), vehicles.len());
    }

    #[test]
    fn unparseable_prices_sort_last_and_fail_price_bounds() {
        let vehicles = table();
        let desc = query(&vehicles, &Criteria { sort: SortMode::PriceDesc, ..Default::default() });
        assert_eq!(desc.last().map(|v| v.id), Some("cayenne"));
        let bounded = query(&vehicles, &Criteria { price_to: Some(100_000_000), ..Default::default() });
        assert!(bounded.iter().all(|v| v.id != "cayenne"));
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let vehicles = table();
        let criteria = Criteria { brand: Some("Trabant".into()), ..Default::default() };
        assert!(query(&vehicles, &criteria).is_empty());
    }

    #[test]
    fn models_depend_on_brand() {
        let vehicles = table();
        assert_eq!(available_models(&vehicles, Some("Porsche")), vec!["911 GT3", "Cayenne", "Taycan"]);
        assert_eq!(available_models(&vehicles, None).len(), 5);

        let mut criteria = Criteria::default();
        criteria.set_brand(Some("Porsche".into()));
        criteria.model = Some("Taycan".into());
        criteria.set_brand(Some("BMW".into()));
        assert_eq!(criteria.model, None);
        criteria.set_brand(None);
        assert_eq!(available_models(&vehicles, criteria.brand.as_deref()).len(), 5);
    }

    #[test]
    fn reset_keeps_sort() {
        let mut criteria = Criteria {
            brand: Some("Porsche".into()),
            year_from: Some(2020),
            sort: SortMode::PriceDesc,
            ..Default::default()
        };
        assert!(criteria.has_filters());
        criteria.reset_filters();
        assert!(!criteria.has_filters());
        assert_eq!(criteria.sort, SortMode::PriceDesc);
    }

    #[test]
    fn facets_are_sorted_and_distinct() {
        let vehicles = table();
        assert_eq!(brands(&vehicles), vec!["BMW", "Ferrari", "Porsche"]);
        assert_eq!(body_types(&vehicles), vec!["Coupe", "SUV"]);
    }

    #[test]
    fn search_matches_brand_or_model_case_insensitively() {
        let vehicles = table();
        assert_eq!(ids(&search(&vehicles, "porsche", SEARCH_LIMIT)), vec!["gt3", "taycan", "cayenne"]);
        assert_eq!(ids(&search(&vehicles, " gtb ", SEARCH_LIMIT)), vec!["296"]);
        assert_eq!(search(&vehicles, "porsche", 1).len(), 1);
        assert!(search(&vehicles, "   ", SEARCH_LIMIT).is_empty());
    }

    #[test]
    fn filter_options_cover_ranges() {
        let years: Vec<u16> = year_options().collect();
        assert_eq!(years.first(), Some(&2025));
        assert_eq!(years.last(), Some(&1990));
        let prices = price_options();
        assert_eq!(prices.len(), 150);
        assert_eq!(prices[0], (100_000, "100 000 Kč".to_string()));
        assert_eq!(prices.last().map(|p| p.0), Some(15_000_000));
    }
}
