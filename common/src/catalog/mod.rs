//! The compiled-in vehicle and article tables.
//!
//! Records are `'static` constants and are never mutated; every listing or
//! detail view borrows from them.

mod articles;
mod vehicles;

use serde::Serialize;

use crate::lang::Language;
use crate::price::{self, PriceError};

/// A value with one variant per site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Localized<T> {
    pub cs: T,
    pub en: T,
}

impl<T: Copy> Localized<T> {
    pub const fn new(cs: T, en: T) -> Self {
        Self { cs, en }
    }

    pub fn get(&self, lang: Language) -> T {
        match lang {
            Language::Cs => self.cs,
            Language::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Specs {
    pub engine: &'static str,
    pub power: &'static str,
    pub transmission: &'static str,
    pub fuel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Vehicle {
    pub id: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    pub year: u16,
    pub body_type: &'static str,
    /// First registration, `MM/YYYY`.
    pub in_service_from: &'static str,
    /// Display price, e.g. `"6 490 000 Kč"`.
    pub price: &'static str,
    pub km: &'static str,
    pub image: &'static str,
    pub images: &'static [&'static str],
    pub interior_images: &'static [&'static str],
    pub exterior_images: &'static [&'static str],
    pub engine_capacity: &'static str,
    pub power_kw: &'static str,
    pub drivetrain: &'static str,
    pub detailed_description: Localized<&'static [&'static str]>,
    pub emotional_headline: Localized<&'static str>,
    pub story: Localized<&'static str>,
    pub specs: Specs,
    pub equipment: &'static [&'static str],
}

impl Vehicle {
    /// Price in whole CZK.
    pub fn price_czk(&self) -> Result<u64, PriceError> {
        price::parse_czk(self.price)
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Hero image for the interior gallery block, falling back to the main image.
    pub fn interior_hero(&self) -> &'static str {
        self.interior_images.first().copied().unwrap_or(self.image)
    }

    pub fn exterior_hero(&self) -> &'static str {
        self.exterior_images.first().copied().unwrap_or(self.image)
    }

    /// Gallery images; never empty so carousels always have a frame to show.
    pub fn gallery(&self) -> Vec<&'static str> {
        if self.images.is_empty() {
            vec![self.image]
        } else {
            self.images.to_vec()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Article {
    pub id: &'static str,
    pub title: Localized<&'static str>,
    /// Publication date, `DD. MM. YYYY`.
    pub date: &'static str,
    pub excerpt: Localized<&'static str>,
    pub author: &'static str,
    pub image: &'static str,
    pub topic: Localized<&'static str>,
    pub body: Localized<&'static [&'static str]>,
}

/// Read-only view over the vehicle and article tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    vehicles: &'a [Vehicle],
    articles: &'a [Article],
}

impl Catalog<'static> {
    /// The showroom's compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            vehicles: vehicles::VEHICLES,
            articles: articles::ARTICLES,
        }
    }
}

impl<'a> Catalog<'a> {
    pub const fn new(vehicles: &'a [Vehicle], articles: &'a [Article]) -> Self {
        Self { vehicles, articles }
    }

    pub fn vehicles(&self) -> &'a [Vehicle] {
        self.vehicles
    }

    pub fn articles(&self) -> &'a [Article] {
        self.articles
    }

    pub fn find_vehicle(&self, id: &str) -> Option<&'a Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn find_article(&self, id: &str) -> Option<&'a Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// First `limit` vehicles in showroom order, for the home page.
    pub fn featured(&self, limit: usize) -> &'a [Vehicle] {
        &self.vehicles[..limit.min(self.vehicles.len())]
    }

    /// Up to four other vehicles for the "you might also like" block.
    pub fn related(&self, id: &str) -> Vec<&'a Vehicle> {
        self.vehicles.iter().filter(|v| v.id != id).take(4).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.vehicles().iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), catalog.vehicles().len());
        let ids: HashSet<_> = catalog.articles().iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), catalog.articles().len());
    }

    #[test]
    fn every_builtin_price_parses() {
        for vehicle in Catalog::builtin().vehicles() {
            assert!(vehicle.price_czk().is_ok(), "{} has price {:?}", vehicle.id, vehicle.price);
        }
    }

    #[test]
    fn related_skips_current_and_caps_at_four() {
        let catalog = Catalog::builtin();
        let related = catalog.related("porsche-911-gt3");
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|v| v.id != "porsche-911-gt3"));
        assert_eq!(related[0].id, "ferrari-296-gtb");
    }

    #[test]
    fn gallery_falls_back_to_main_image() {
        let vehicle = Vehicle { image: "hero.jpg", ..Default::default() };
        assert_eq!(vehicle.gallery(), vec!["hero.jpg"]);
        assert_eq!(vehicle.interior_hero(), "hero.jpg");
    }

    #[test]
    fn unknown_ids_are_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_vehicle("trabant-601").is_none());
        assert!(catalog.find_article("missing").is_none());
    }
}
