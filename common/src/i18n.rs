//! Czech and English string tables. Pages read user-facing text only through
//! [`translations`].

use crate::lang::Language;

/// A heading with its paragraph, used by the feature lists and legal pages.
pub type Section = (&'static str, &'static str);

pub struct Translations {
    pub nav_home: &'static str,
    pub nav_inventory: &'static str,
    pub nav_rent: &'static str,
    pub nav_buyout: &'static str,
    pub nav_custom_order: &'static str,
    pub nav_about: &'static str,
    pub nav_services: &'static str,
    pub nav_contact: &'static str,
    pub nav_journal: &'static str,
    pub nav_terms: &'static str,
    pub nav_privacy: &'static str,

    pub menu: &'static str,
    pub close: &'static str,
    pub search_placeholder: &'static str,

    pub hero_kicker: &'static str,
    pub hero_cta: &'static str,
    pub philosophy_text: &'static str,
    pub custom_order_card_title: &'static str,
    pub custom_order_card_cta: &'static str,
    pub showroom_title: &'static str,
    pub navigate: &'static str,

    pub inventory_count_suffix: &'static str,
    pub sort_by: &'static str,
    pub sort_cheapest: &'static str,
    pub sort_most_expensive: &'static str,
    pub filter_open: &'static str,
    pub filter_close: &'static str,
    pub filter_brand: &'static str,
    pub filter_model: &'static str,
    pub filter_body: &'static str,
    pub filter_year_from: &'static str,
    pub filter_year_to: &'static str,
    pub filter_price_from: &'static str,
    pub filter_price_to: &'static str,
    pub filter_reset: &'static str,
    pub no_results: &'static str,

    pub label_in_service: &'static str,
    pub label_odometer: &'static str,
    pub label_year: &'static str,
    pub label_power: &'static str,
    pub label_engine: &'static str,
    pub label_fuel: &'static str,
    pub label_drivetrain: &'static str,
    pub label_vat_deductible: &'static str,

    pub call: &'static str,
    pub interested: &'static str,
    pub interior: &'static str,
    pub exterior: &'static str,
    pub inquiry_kicker: &'static str,
    pub inquiry_title: &'static str,
    pub inquiry_text: &'static str,
    pub related_title: &'static str,
    pub previous_image: &'static str,
    pub next_image: &'static str,

    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_phone: &'static str,
    pub form_note: &'static str,
    pub form_note_placeholder: &'static str,
    pub form_message: &'static str,
    pub form_brand_model: &'static str,
    pub form_brand_model_placeholder: &'static str,
    pub form_year: &'static str,
    pub form_mileage: &'static str,
    pub form_budget: &'static str,
    pub form_car: &'static str,
    pub form_date_from: &'static str,
    pub form_date_to: &'static str,
    pub form_submit: &'static str,
    pub form_sending: &'static str,
    pub form_error: &'static str,
    pub form_sent_title: &'static str,
    pub form_sent_text: &'static str,

    pub buyout_title: &'static str,
    pub buyout_heading: &'static str,
    pub buyout_steps: [Section; 3],
    pub buyout_submit: &'static str,
    pub buyout_sent_text: &'static str,

    pub services_title: &'static str,
    pub services_logistics_kicker: &'static str,
    pub services_logistics_title: &'static str,
    pub services_logistics_lead: &'static str,
    pub services_logistics_items: [&'static str; 3],
    pub services_logistics_price: &'static str,
    pub services_excl_vat: &'static str,
    pub services_dispatch: &'static str,
    pub services_finance_kicker: &'static str,
    pub services_finance_title: &'static str,
    pub services_finance: Section,
    pub services_insurance: Section,
    pub services_liability: &'static str,
    pub services_collision: &'static str,

    pub rent_title: &'static str,
    pub rent_text: &'static str,
    pub rent_submit: &'static str,

    pub custom_order_title: &'static str,
    pub custom_order_text: &'static str,
    pub custom_order_steps: [Section; 3],
    pub custom_order_submit: &'static str,

    pub about_title: &'static str,
    pub about_paragraphs: [&'static str; 3],
    pub about_stats: [(u32, &'static str, &'static str); 3],

    pub contact_kicker: &'static str,
    pub contact_title: &'static str,
    pub contact_showroom: &'static str,
    pub contact_region: &'static str,
    pub contact_country: &'static str,
    pub contact_personal: &'static str,
    pub contact_visit: &'static str,
    pub contact_appointment: &'static str,
    pub contact_form_title: &'static str,
    pub contact_submit: &'static str,

    pub journal_title: &'static str,
    pub journal_read_more: &'static str,
    pub article_author: &'static str,
    pub article_topic: &'static str,
    pub article_question: &'static str,
    pub article_question_text: &'static str,
    pub article_contact_cta: &'static str,
    pub article_back: &'static str,
    pub photo_credit: &'static str,

    pub terms_title: &'static str,
    pub terms_sections: &'static [Section],
    pub privacy_title: &'static str,
    pub privacy_sections: &'static [Section],

    pub footer_tagline: &'static str,
    pub footer_offer: &'static str,
    pub footer_all_cars: &'static str,
    pub footer_services: &'static str,
    pub footer_contact: &'static str,
    pub footer_location: &'static str,
    pub footer_rights: &'static str,

    pub seo_site_title: &'static str,
    pub seo_site_description: &'static str,
    pub seo_inventory_title: &'static str,
    pub seo_about_title: &'static str,
    pub seo_contact_title: &'static str,
    pub seo_services_title: &'static str,
    pub seo_buyout_title: &'static str,
    pub seo_rent_title: &'static str,
    pub seo_custom_order_title: &'static str,
    pub seo_journal_title: &'static str,
    pub seo_terms_title: &'static str,
    pub seo_privacy_title: &'static str,
}

pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::Cs => &CS,
        Language::En => &EN,
    }
}

static CS: Translations = Translations {
    nav_home: "Úvod",
    nav_inventory: "Nabídka vozů",
    nav_rent: "Pronájem",
    nav_buyout: "Výkup vozů",
    nav_custom_order: "Vůz na objednávku",
    nav_about: "O nás",
    nav_services: "Služby",
    nav_contact: "Kontakt",
    nav_journal: "Aktuality",
    nav_terms: "Obchodní podmínky",
    nav_privacy: "Ochrana údajů",

    menu: "MENU",
    close: "ZAVŘÍT",
    search_placeholder: "Hledat vůz...",

    hero_kicker: "Prodej luxusních vozů",
    hero_cta: "Zobrazit nabídku",
    philosophy_text: "Nevybíráme auta podle počtu. Každý vůz v naší nabídce prošel osobní prověrkou původu, historie i technického stavu. Prodáváme jen to, co bychom sami rádi řídili.",
    custom_order_card_title: "Vůz na objednávku",
    custom_order_card_cta: "Poptat vůz",
    showroom_title: "Navštivte náš showroom",
    navigate: "NAVIGOVAT",

    inventory_count_suffix: "VOZŮ V AKTUÁLNÍ NABÍDCE",
    sort_by: "SEŘADIT PODLE:",
    sort_cheapest: "NEJLEVNĚJŠÍ",
    sort_most_expensive: "NEJDRAŽŠÍ",
    filter_open: "FILTROVAT NABÍDKU",
    filter_close: "ZAVŘÍT FILTR",
    filter_brand: "ZNAČKA",
    filter_model: "MODEL",
    filter_body: "KAROSERIE",
    filter_year_from: "ROK OD",
    filter_year_to: "ROK DO",
    filter_price_from: "CENA OD",
    filter_price_to: "CENA DO",
    filter_reset: "RESET FILTRŮ",
    no_results: "Žádné vozy neodpovídají filtrům",

    label_in_service: "V provozu od",
    label_odometer: "Nájezd",
    label_year: "Rok",
    label_power: "Výkon",
    label_engine: "Objem motoru",
    label_fuel: "Palivo",
    label_drivetrain: "Pohon",
    label_vat_deductible: "Možný odpočet DPH",

    call: "ZAVOLAT",
    interested: "MÁM ZÁJEM O VŮZ",
    interior: "INTERIÉR",
    exterior: "EXTERIÉR",
    inquiry_kicker: "ZAUJAL VÁS TENTO VŮZ?",
    inquiry_title: "Mám zájem o tento vůz",
    inquiry_text: "Vyplňte formulář a naši specialisté vás budou kontaktovat s kompletní nabídkou a kalkulací.",
    related_title: "Mohlo by vás zajímat",
    previous_image: "Předchozí fotografie",
    next_image: "Další fotografie",

    form_name: "JMÉNO",
    form_email: "EMAIL",
    form_phone: "TELEFON",
    form_note: "POZNÁMKA",
    form_note_placeholder: "Vaše dotazy...",
    form_message: "ZPRÁVA",
    form_brand_model: "ZNAČKA A MODEL",
    form_brand_model_placeholder: "Např. Ferrari 296 GTB",
    form_year: "ROK VÝROBY",
    form_mileage: "NAJETÉ KM",
    form_budget: "ROZPOČET",
    form_car: "VŮZ",
    form_date_from: "OD",
    form_date_to: "DO",
    form_submit: "ODESLAT POPTÁVKU",
    form_sending: "ODESÍLÁM...",
    form_error: "Poptávku se nepodařilo odeslat. Zkontrolujte údaje nebo nám zavolejte.",
    form_sent_title: "Poptávka odeslána",
    form_sent_text: "Děkujeme za váš zájem. Budeme vás kontaktovat.",

    buyout_title: "Výkup luxusních vozů",
    buyout_heading: "Vaše investice v nejlepších rukou",
    buyout_steps: [
        ("RYCHLOST", "Okamžité ocenění a vyplacení finančních prostředků do 24 hodin."),
        ("TRANSPARENTNOST", "Žádné skryté poplatky. Nabízíme reálnou tržní cenu odpovídající stavu a specifikaci."),
        ("SERVIS", "Zajistíme veškerou administrativu spojenou s převodem vozidla."),
    ],
    buyout_submit: "ODESLAT K OCENĚNÍ",
    buyout_sent_text: "Děkujeme. Naši specialisté vás budou kontaktovat ohledně ocenění.",

    services_title: "Komplexní služby",
    services_logistics_kicker: "LOGISTIKA",
    services_logistics_title: "Odtah & Dovoz",
    services_logistics_lead: "Zajišťujeme profesionální přepravu vašich vozů s maximální péčí.",
    services_logistics_items: [
        "Dovoz vozidel ze zahraničí",
        "Odtah poškozených a nepojízdných vozidel",
        "Pojištění přepravovaného nákladu",
    ],
    services_logistics_price: "Cena od 15 Kč/km",
    services_excl_vat: "bez DPH",
    services_dispatch: "Kontakt na dispečink",
    services_finance_kicker: "FINANCE & SAFE",
    services_finance_title: "Financování & Pojištění",
    services_finance: (
        "Poskytujeme financování vozidel",
        "Díky spolupráci s předními českými finančními institucemi dokážeme nabídnout individuální splátkové kalendáře a výhodné úrokové sazby pro soukromé i firemní účely.",
    ),
    services_insurance: (
        "Komplexní pojištění",
        "Zajišťujeme kompletní pojistný servis, aby váš vůz byl chráněn od prvního kilometru.",
    ),
    services_liability: "Povinné ručení",
    services_collision: "Havarijní pojištění",

    rent_title: "Pronájem vozů",
    rent_text: "Vyberte si vůz z naší nabídky na víkend, svatbu nebo firemní akci. Pronájem včetně pojištění a předání kdekoli v Plzeňském kraji.",
    rent_submit: "POPTAT PRONÁJEM",

    custom_order_title: "Vůz na objednávku",
    custom_order_text: "Hledáte konkrétní specifikaci? Najdeme ji u prověřených prodejců v Evropě a dovezeme až k vám.",
    custom_order_steps: [
        ("POPTÁVKA", "Popíšete nám vůz, výbavu a rozpočet."),
        ("VYHLEDÁNÍ", "Prověříme původ, historii a stav nabízených vozů."),
        ("PŘEDÁNÍ", "Zajistíme dovoz, registraci i financování."),
    ],
    custom_order_submit: "ODESLAT POPTÁVKU",

    about_title: "Příběh BBCars",
    about_paragraphs: [
        "BBCars vzniklo z vášně pro automobily, které mají duši. Z malého rodinného podniku v Rokycanech jsme vyrostli ve specializovaného prodejce prémiových a sportovních vozů.",
        "Každý vůz osobně vybíráme, prověřujeme jeho historii a technický stav. Zakládáme si na transparentnosti a osobním přístupu.",
        "Naším cílem není prodat co nejvíce aut, ale aby se k nám klienti vraceli.",
    ],
    about_stats: [(15, "+", "let na trhu"), (500, "+", "prodaných vozů"), (24, "h", "výkup vozu")],

    contact_kicker: "Spojte se s námi",
    contact_title: "Kontakt",
    contact_showroom: "Showroom",
    contact_region: "Rokycany, Plzeňský kraj",
    contact_country: "Česká republika",
    contact_personal: "Osobní kontakt",
    contact_visit: "Navštivte nás",
    contact_appointment: "Sjednat schůzku",
    contact_form_title: "Napište nám",
    contact_submit: "ODESLAT ZPRÁVU",

    journal_title: "Aktuality",
    journal_read_more: "ČÍST DÁLE",
    article_author: "Autor",
    article_topic: "Téma",
    article_question: "Máte dotaz k tomuto tématu?",
    article_question_text: "Naši experti jsou vám k dispozici pro konzultaci jakéhokoliv vozu.",
    article_contact_cta: "KONTAKTOVAT",
    article_back: "Zpět na Aktuality",
    photo_credit: "Foto: Archiv BBCars",

    terms_title: "Obchodní podmínky",
    terms_sections: &[
        ("1. Úvodní ustanovení", "Tyto obchodní podmínky upravují vztahy mezi společností B&B Cars 4You s.r.o. a kupujícím při prodeji, výkupu a pronájmu vozidel."),
        ("2. Ceny", "Ceny uvedené na webu jsou orientační a mohou se změnit. Závazná je cena uvedená v kupní smlouvě."),
        ("3. Rezervace vozu", "Vůz lze rezervovat na základě písemné dohody a úhrady rezervačního poplatku."),
        ("4. Závěrečná ustanovení", "Vztahy neupravené těmito podmínkami se řídí právním řádem České republiky."),
    ],
    privacy_title: "Ochrana osobních údajů",
    privacy_sections: &[
        ("Správce údajů", "Správcem osobních údajů je B&B Cars 4You s.r.o., Plzeňská 968, 337 01 Rokycany."),
        ("Rozsah zpracování", "Zpracováváme pouze údaje, které nám sami poskytnete ve formulářích: jméno, e-mail, telefon a obsah poptávky."),
        ("Účel", "Údaje používáme výhradně k vyřízení vaší poptávky a nepředáváme je třetím stranám."),
        ("Vaše práva", "Máte právo na přístup k údajům, jejich opravu a výmaz. Kontaktujte nás na info@bbcars.eu."),
    ],

    footer_tagline: "Kurátorský výběr luxusních vozů. Zakládáme si na transparentnosti a osobním přístupu k prodeji ikonických automobilů.",
    footer_offer: "NABÍDKA",
    footer_all_cars: "Všechny vozy",
    footer_services: "SLUŽBY",
    footer_contact: "KONTAKT",
    footer_location: "LOKALITA",
    footer_rights: "VŠECHNA PRÁVA VYHRAZENA",

    seo_site_title: "BBCars | Luxury Digital Showroom",
    seo_site_description: "Specializovaný prodejce luxusních a prémiových vozů. Kurátorský výběr Porsche, Ferrari, Bentley a dalších exkluzivních značek v ČR.",
    seo_inventory_title: "Nabídka luxusních vozů | BBCars",
    seo_about_title: "O nás | Příběh BBCars",
    seo_contact_title: "Kontaktujte nás | Showroom Rokycany",
    seo_services_title: "Služby, financování a pojištění | BBCars",
    seo_buyout_title: "Výkup luxusních vozů | BBCars",
    seo_rent_title: "Pronájem luxusních vozů | BBCars",
    seo_custom_order_title: "Vůz na objednávku | BBCars",
    seo_journal_title: "Aktuality | BBCars",
    seo_terms_title: "Obchodní podmínky | BBCars",
    seo_privacy_title: "Ochrana osobních údajů | BBCars",
};

static EN: Translations = Translations {
    nav_home: "Home",
    nav_inventory: "Inventory",
    nav_rent: "Rental",
    nav_buyout: "Car buyout",
    nav_custom_order: "Custom order",
    nav_about: "About us",
    nav_services: "Services",
    nav_contact: "Contact",
    nav_journal: "Journal",
    nav_terms: "Terms & Conditions",
    nav_privacy: "Privacy",

    menu: "MENU",
    close: "CLOSE",
    search_placeholder: "Search...",

    hero_kicker: "Luxury car sales",
    hero_cta: "View inventory",
    philosophy_text: "We do not pick cars by the numbers. Every car we offer has been personally checked for origin, history and condition. We only sell what we would love to drive ourselves.",
    custom_order_card_title: "Car on order",
    custom_order_card_cta: "Request a car",
    showroom_title: "Visit our showroom",
    navigate: "DIRECTIONS",

    inventory_count_suffix: "VEHICLES IN CURRENT SELECTION",
    sort_by: "SORT BY:",
    sort_cheapest: "CHEAPEST",
    sort_most_expensive: "MOST EXPENSIVE",
    filter_open: "FILTER INVENTORY",
    filter_close: "CLOSE FILTER",
    filter_brand: "BRAND",
    filter_model: "MODEL",
    filter_body: "BODY TYPE",
    filter_year_from: "YEAR FROM",
    filter_year_to: "YEAR TO",
    filter_price_from: "PRICE FROM",
    filter_price_to: "PRICE TO",
    filter_reset: "RESET FILTERS",
    no_results: "No vehicles match the filters",

    label_in_service: "In service from",
    label_odometer: "Mileage",
    label_year: "Year",
    label_power: "Power",
    label_engine: "Engine size",
    label_fuel: "Fuel",
    label_drivetrain: "Drivetrain",
    label_vat_deductible: "VAT deductible",

    call: "CALL",
    interested: "I'M INTERESTED",
    interior: "INTERIOR",
    exterior: "EXTERIOR",
    inquiry_kicker: "INTERESTED IN THIS CAR?",
    inquiry_title: "I want this car",
    inquiry_text: "Fill in the form and our specialists will contact you with a complete offer and calculation.",
    related_title: "You might also like",
    previous_image: "Previous image",
    next_image: "Next image",

    form_name: "NAME",
    form_email: "EMAIL",
    form_phone: "PHONE",
    form_note: "NOTE",
    form_note_placeholder: "Your questions...",
    form_message: "MESSAGE",
    form_brand_model: "MAKE AND MODEL",
    form_brand_model_placeholder: "E.g. Ferrari 296 GTB",
    form_year: "YEAR",
    form_mileage: "MILEAGE",
    form_budget: "BUDGET",
    form_car: "CAR",
    form_date_from: "FROM",
    form_date_to: "TO",
    form_submit: "SEND INQUIRY",
    form_sending: "SENDING...",
    form_error: "We could not send your inquiry. Please check the details or give us a call.",
    form_sent_title: "Inquiry sent",
    form_sent_text: "Thank you for your interest. We will be in touch.",

    buyout_title: "Luxury Car Buyout",
    buyout_heading: "Your investment in the best hands",
    buyout_steps: [
        ("SPEED", "Instant valuation and payout within 24 hours."),
        ("TRANSPARENCY", "No hidden fees. We offer a real market price matching condition and specification."),
        ("SERVICE", "We handle all the paperwork of the ownership transfer."),
    ],
    buyout_submit: "SEND FOR VALUATION",
    buyout_sent_text: "Thank you. Our specialists will contact you about the valuation.",

    services_title: "Our Services",
    services_logistics_kicker: "LOGISTICS",
    services_logistics_title: "Towing & Import",
    services_logistics_lead: "We provide professional transport of your cars with maximum care.",
    services_logistics_items: [
        "Vehicle import from abroad",
        "Towing of damaged and immobile vehicles",
        "Cargo insurance during transport",
    ],
    services_logistics_price: "From 15 CZK/km",
    services_excl_vat: "excl. VAT",
    services_dispatch: "Dispatch contact",
    services_finance_kicker: "FINANCE & SAFE",
    services_finance_title: "Financing & Insurance",
    services_finance: (
        "Vehicle financing",
        "Working with leading Czech financial institutions, we offer individual repayment schedules and favourable rates for private and business customers.",
    ),
    services_insurance: (
        "Complete insurance",
        "We arrange complete insurance so your car is protected from the very first kilometre.",
    ),
    services_liability: "Third-party liability",
    services_collision: "Comprehensive cover",

    rent_title: "Car Rental",
    rent_text: "Pick a car from our inventory for a weekend, a wedding or a corporate event. Insurance included, handover anywhere in the Pilsen region.",
    rent_submit: "REQUEST RENTAL",

    custom_order_title: "Custom Order",
    custom_order_text: "Looking for a specific spec? We find it at verified dealers across Europe and deliver it to your door.",
    custom_order_steps: [
        ("REQUEST", "Tell us the car, equipment and budget."),
        ("SEARCH", "We verify origin, history and condition of the candidates."),
        ("HANDOVER", "We arrange import, registration and financing."),
    ],
    custom_order_submit: "SEND REQUEST",

    about_title: "The BBCars Story",
    about_paragraphs: [
        "BBCars was born from a passion for cars with a soul. From a small family business in Rokycany we have grown into a specialist dealer of premium and sports cars.",
        "We select every car personally and check its history and condition. Transparency and a personal approach come first.",
        "Our goal is not to sell as many cars as possible but to have clients who come back.",
    ],
    about_stats: [(15, "+", "years on the market"), (500, "+", "cars sold"), (24, "h", "buyout payout")],

    contact_kicker: "Get in touch",
    contact_title: "Contact",
    contact_showroom: "Showroom",
    contact_region: "Rokycany, Pilsen region",
    contact_country: "Czech Republic",
    contact_personal: "Personal contact",
    contact_visit: "Visit us",
    contact_appointment: "Book an appointment",
    contact_form_title: "Write to us",
    contact_submit: "SEND MESSAGE",

    journal_title: "Journal",
    journal_read_more: "READ MORE",
    article_author: "Author",
    article_topic: "Topic",
    article_question: "Questions about this topic?",
    article_question_text: "Our experts are available to consult on any car.",
    article_contact_cta: "CONTACT US",
    article_back: "Back to Journal",
    photo_credit: "Photo: BBCars archive",

    terms_title: "Terms & Conditions",
    terms_sections: &[
        ("1. Introduction", "These terms govern the relationship between B&B Cars 4You s.r.o. and the buyer in the sale, buyout and rental of vehicles."),
        ("2. Prices", "Prices shown on the website are indicative and may change. The price in the purchase contract is binding."),
        ("3. Reservations", "A car can be reserved on the basis of a written agreement and payment of a reservation fee."),
        ("4. Final provisions", "Matters not covered by these terms are governed by the laws of the Czech Republic."),
    ],
    privacy_title: "Privacy Policy",
    privacy_sections: &[
        ("Data controller", "The data controller is B&B Cars 4You s.r.o., Plzeňská 968, 337 01 Rokycany."),
        ("Scope", "We only process the data you give us in our forms: name, e-mail, phone and the content of your inquiry."),
        ("Purpose", "We use the data solely to handle your inquiry and never pass it on to third parties."),
        ("Your rights", "You have the right to access, correct and erase your data. Contact us at info@bbcars.eu."),
    ],

    footer_tagline: "A curated selection of luxury cars. Transparency and a personal approach to selling iconic automobiles.",
    footer_offer: "INVENTORY",
    footer_all_cars: "All cars",
    footer_services: "SERVICES",
    footer_contact: "CONTACT",
    footer_location: "LOCATION",
    footer_rights: "ALL RIGHTS RESERVED",

    seo_site_title: "BBCars | Luxury Digital Showroom",
    seo_site_description: "Specialized dealer of luxury and premium cars. Curated selection of Porsche, Ferrari, Bentley and other exclusive brands in CZ.",
    seo_inventory_title: "Luxury Car Inventory | BBCars",
    seo_about_title: "About Us | The BBCars Story",
    seo_contact_title: "Contact Us | Rokycany Showroom",
    seo_services_title: "Services, Financing & Insurance | BBCars",
    seo_buyout_title: "Luxury Car Buyout | BBCars",
    seo_rent_title: "Luxury Car Rental | BBCars",
    seo_custom_order_title: "Custom Car Order | BBCars",
    seo_journal_title: "Journal | BBCars",
    seo_terms_title: "Terms & Conditions | BBCars",
    seo_privacy_title: "Privacy Policy | BBCars",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_differ_per_language() {
        let cs = translations(Language::Cs);
        let en = translations(Language::En);
        assert_eq!(cs.nav_inventory, "Nabídka vozů");
        assert_eq!(en.nav_inventory, "Inventory");
        assert_eq!(cs.terms_sections.len(), en.terms_sections.len());
        assert_eq!(cs.privacy_sections.len(), en.privacy_sections.len());
    }
}
