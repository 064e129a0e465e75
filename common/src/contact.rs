//! Fixed outbound links and showroom details.

pub const PHONE_DISPLAY: &str = "+420 605 034 911";
pub const PHONE_URI: &str = "tel:+420605034911";
pub const EMAIL: &str = "info@bbcars.eu";
pub const MAILTO_URI: &str = "mailto:info@bbcars.eu";
pub const DISPATCH_EMAIL: &str = "bursikja@seznam.cz";

pub const WHATSAPP_URL: &str = "https://wa.me/420605034911";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/bbcars_4you/";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/100030982372648/about/";

pub const COMPANY_NAME: &str = "B&B Cars 4You s.r.o.";
pub const STREET: &str = "Plzeňská 968";
pub const CITY: &str = "337 01 Rokycany";

pub const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=B%26B+Cars+4You+s.r.o.%2C+Plze%C5%88sk%C3%A1+968%2C+337+01+Rokycany+1";
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=Plze%C5%88sk%C3%A1+968+Rokycany";
pub const MAPS_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2582.479507817088!2d13.5855263!3d49.7423018!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x470ae9a9c7382f71%3A0x8892f3d242699042!2sPlze%C5%88sk%C3%A1%20968%2C%20337%2001%20Rokycany!5e1!3m2!1scs!2scz!4v1715600000000!5m2!1scs!2scz&maptype=satellite";

/// Financing and insurance partners shown on the services page.
pub const PARTNERS: [&str; 6] = ["ČSOB", "MONETA", "UNI CREDIT", "HOMECREDIT", "KOOPERATIVA", "GENERALI"];
