use bbcars_common::i18n::translations;
use bbcars_common::query::{self, Criteria, SortMode};
use bbcars_common::Catalog;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::car_card::CarCard;
use crate::LangProps;

#[derive(Properties, PartialEq)]
struct FilterSelectProps {
    value: Option<String>,
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    placeholder: AttrValue,
    onchange: Callback<Option<String>>,
}

#[function_component(FilterSelect)]
fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = props.onchange.reform(|e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        (!value.is_empty()).then_some(value)
    });
    let selected = props.value.clone().unwrap_or_default();
    html! {
        <div class="filter-select">
            <select {onchange}>
                <option value="" selected={selected.is_empty()}>{props.placeholder.clone()}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option key={value.clone()} value={value.clone()} selected={*value == selected}>{label.clone()}</option>
                }) }
            </select>
        </div>
    }
}

fn plain(values: Vec<&'static str>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[function_component(Inventory)]
pub fn inventory(props: &LangProps) -> Html {
    let t = translations(props.lang);
    let catalog = Catalog::builtin();
    let criteria = use_state(Criteria::default);
    let filters_open = use_state(|| false);

    let cars = query::query(catalog.vehicles(), &criteria);
    let models = query::available_models(catalog.vehicles(), criteria.brand.as_deref());
    let years: Vec<(String, String)> = query::year_options().map(|y| (y.to_string(), y.to_string())).collect();
    let prices: Vec<(String, String)> = query::price_options()
        .into_iter()
        .map(|(value, label)| (value.to_string(), label))
        .collect();

    // Applies `edit` to a copy of the criteria.
    let update = |edit: fn(&mut Criteria, Option<String>)| {
        let criteria = criteria.clone();
        Callback::from(move |value: Option<String>| {
            let mut next = (*criteria).clone();
            edit(&mut next, value);
            criteria.set(next);
        })
    };
    let set_sort = |sort: SortMode| {
        let criteria = criteria.clone();
        Callback::from(move |_: MouseEvent| criteria.set(Criteria { sort, ..(*criteria).clone() }))
    };
    let reset = {
        let criteria = criteria.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*criteria).clone();
            next.reset_filters();
            criteria.set(next);
        })
    };
    let toggle_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_: MouseEvent| filters_open.set(!*filters_open))
    };
    let sort_class = |sort: SortMode| classes!("sort-option", (criteria.sort == sort).then_some("active"));

    let style = r#"
        .inventory-page {
            padding: 10rem 5rem 5rem;
            max-width: 1920px;
            margin: 0 auto;
            min-height: 100vh;
        }
        .inventory-head {
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            margin-bottom: 5rem;
            gap: 2rem;
        }
        .inventory-count {
            font-size: 11px;
            letter-spacing: 0.5em;
            color: rgba(255, 255, 255, 0.4);
            font-weight: 700;
        }
        .inventory-sort {
            display: flex;
            gap: 2rem;
            font-size: 11px;
            letter-spacing: 0.3em;
            font-weight: 700;
        }
        .inventory-sort .label { color: rgba(255, 255, 255, 0.1); }
        .sort-option { background: none; border: none; color: rgba(255, 255, 255, 0.4); cursor: pointer; font: inherit; letter-spacing: inherit; }
        .sort-option:hover { color: #fff; }
        .sort-option.active { color: #dbad1e; }
        .inventory-body { display: flex; gap: 5rem; }
        .inventory-filters { width: 20rem; flex-shrink: 0; display: flex; flex-direction: column; gap: 2rem; }
        .filter-toggle { display: none; }
        .filter-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
        .filter-select { border-bottom: 1px solid rgba(255, 255, 255, 0.1); padding-bottom: 1rem; }
        .filter-select select {
            width: 100%;
            background: transparent;
            border: none;
            outline: none;
            color: rgba(255, 255, 255, 0.4);
            font-size: 13px;
            font-weight: 700;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            cursor: pointer;
        }
        .filter-select select:focus { color: #fff; }
        .filter-select option { background: #000; color: #fff; }
        .filter-reset {
            border: 1px solid rgba(255, 255, 255, 0.05);
            background: none;
            color: rgba(255, 255, 255, 0.2);
            padding: 1.5rem;
            font-size: 10px;
            letter-spacing: 0.4em;
            font-weight: 700;
            cursor: pointer;
        }
        .filter-reset:hover { background: rgba(255, 255, 255, 0.05); color: #fff; }
        .inventory-results { flex-grow: 1; }
        .no-results {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 2rem;
            padding: 10rem 0;
            border: 1px dashed rgba(255, 255, 255, 0.1);
        }
        .no-results p { font-size: 1.25rem; letter-spacing: 0.5em; font-weight: 300; opacity: 0.3; text-transform: uppercase; }
        @media (max-width: 1024px) {
            .inventory-page { padding: 8rem 2rem 4rem; }
            .inventory-head { flex-direction: column; margin-bottom: 3rem; }
            .inventory-body { flex-direction: column; gap: 2.5rem; }
            .inventory-filters { width: 100%; }
            .inventory-filters.collapsed .filter-fields { display: none; }
            .filter-toggle {
                display: block;
                border: 1px solid rgba(255, 255, 255, 0.1);
                background: none;
                color: #fff;
                padding: 1.25rem 1.5rem;
                font-size: 11px;
                letter-spacing: 0.4em;
                font-weight: 700;
                text-align: left;
            }
        }
    "#;

    html! {
        <div class="inventory-page">
            <style>{style}</style>
            <div class="inventory-head">
                <div>
                    <h1 class="page-title">{t.nav_inventory}</h1>
                    <p class="inventory-count">{format!("{} {}", cars.len(), t.inventory_count_suffix)}</p>
                </div>
                <div class="inventory-sort">
                    <span class="label">{t.sort_by}</span>
                    <button class={sort_class(SortMode::PriceAsc)} onclick={set_sort(SortMode::PriceAsc)}>{t.sort_cheapest}</button>
                    <button class={sort_class(SortMode::PriceDesc)} onclick={set_sort(SortMode::PriceDesc)}>{t.sort_most_expensive}</button>
                </div>
            </div>
            <div class="inventory-body">
                <aside class={classes!("inventory-filters", (!*filters_open).then_some("collapsed"))}>
                    <button class="filter-toggle" onclick={toggle_filters}>
                        { if *filters_open { t.filter_close } else { t.filter_open } }
                    </button>
                    <div class="filter-fields">
                        <FilterSelect
                            value={criteria.brand.clone()}
                            options={plain(query::brands(catalog.vehicles()))}
                            placeholder={t.filter_brand}
                            onchange={update(|c, v| c.set_brand(v))}
                        />
                        <FilterSelect
                            value={criteria.model.clone()}
                            options={plain(models)}
                            placeholder={t.filter_model}
                            onchange={update(|c, v| c.model = v)}
                        />
                        <FilterSelect
                            value={criteria.body_type.clone()}
                            options={plain(query::body_types(catalog.vehicles()))}
                            placeholder={t.filter_body}
                            onchange={update(|c, v| c.body_type = v)}
                        />
                        <div class="filter-pair">
                            <FilterSelect
                                value={criteria.year_from.map(|y| y.to_string())}
                                options={years.clone()}
                                placeholder={t.filter_year_from}
                                onchange={update(|c, v| c.year_from = v.and_then(|v| v.parse().ok()))}
                            />
                            <FilterSelect
                                value={criteria.year_to.map(|y| y.to_string())}
                                options={years}
                                placeholder={t.filter_year_to}
                                onchange={update(|c, v| c.year_to = v.and_then(|v| v.parse().ok()))}
                            />
                        </div>
                        <div class="filter-pair">
                            <FilterSelect
                                value={criteria.price_from.map(|p| p.to_string())}
                                options={prices.clone()}
                                placeholder={t.filter_price_from}
                                onchange={update(|c, v| c.price_from = v.and_then(|v| v.parse().ok()))}
                            />
                            <FilterSelect
                                value={criteria.price_to.map(|p| p.to_string())}
                                options={prices}
                                placeholder={t.filter_price_to}
                                onchange={update(|c, v| c.price_to = v.and_then(|v| v.parse().ok()))}
                            />
                        </div>
                        <button class="filter-reset" onclick={reset.clone()}>{t.filter_reset}</button>
                    </div>
                </aside>
                <div class="inventory-results">
                    if cars.is_empty() {
                        <div class="no-results">
                            <p>{t.no_results}</p>
                            <button class="filter-reset" onclick={reset}>{t.filter_reset}</button>
                        </div>
                    } else {
                        <div class="car-grid">
                            { for cars.into_iter().map(|car| html! {
                                <CarCard key={car.id} {car} lang={props.lang} />
                            }) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
