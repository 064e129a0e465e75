use bbcars_common::i18n::translations;
use bbcars_common::routes::Page;
use bbcars_common::{Language, Vehicle};
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CarCardProps {
    pub car: &'static Vehicle,
    pub lang: Language,
}

/// Listing tile linking to the car's detail page.
#[function_component(CarCard)]
pub fn car_card(props: &CarCardProps) -> Html {
    let car = props.car;
    let t = translations(props.lang);
    let highlight = car.equipment.first().copied().unwrap_or("Exclusive");
    html! {
        <Link<Route> to={Route::page(props.lang, Page::CarDetail(car.id.to_string()))} classes="car-card">
            <div class="car-card-image">
                <img src={car.image} alt={car.display_name()} loading="lazy" />
            </div>
            <div class="car-card-body">
                <div class="car-card-title">
                    <h3>{car.display_name()}</h3>
                    <p class="car-card-price">{car.price}</p>
                </div>
                <p class="car-card-summary">{format!("{} / {} / {}", car.km, highlight, car.body_type)}</p>
                <div class="car-card-specs">
                    <div>
                        <p class="spec-label">{t.label_in_service}</p>
                        <p>{car.in_service_from}</p>
                    </div>
                    <div>
                        <p class="spec-label">{t.label_odometer}</p>
                        <p>{car.km}</p>
                    </div>
                    <div>
                        <p class="spec-label">{t.label_year}</p>
                        <p>{car.year}</p>
                    </div>
                </div>
            </div>
        </Link<Route>>
    }
}
