use super::{Article, Localized};

pub(super) static ARTICLES: &[Article] = &[
    Article {
        id: "gt3-na-okruhu",
        title: Localized { cs: "911 GT3 na okruhu v Mostě", en: "The 911 GT3 at Autodrom Most" },
        date: "12. 03. 2025",
        excerpt: Localized {
            cs: "Atmosférický boxer, 9 000 otáček a den na okruhu. Proč je GT3 stále měřítkem.",
            en: "A naturally aspirated flat-six, 9,000 rpm and a day on track. Why the GT3 is still the benchmark.",
        },
        author: "Jan Buršík",
        image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?auto=format&fit=crop&q=90&w=2400",
        topic: Localized { cs: "Exkluzivita", en: "Exclusivity" },
        body: Localized {
            cs: &[
                "Každý nový model v naší nabídce je výsledkem pečlivého hledání a prověřování. V BBCars věříme, že automobil není jen dopravní prostředek, ale investice do zážitků a precizního inženýrství.",
                "GT3 generace 992 dokazuje, že atmosférický motor má v době přeplňování stále své místo. Lineární nástup výkonu a zvuk boxeru v 9 000 otáčkách jsou zážitkem, který turbo nenahradí.",
                "Vůz z naší nabídky prošel kompletní kontrolou v autorizovaném servisu a je připraven na silnici i okruh.",
            ],
            en: &[
                "Every new model in our showroom is the result of careful searching and inspection. At BBCars we believe a car is not just transport but an investment in experiences and precise engineering.",
                "The 992-generation GT3 proves that a naturally aspirated engine still has its place in the age of forced induction. Linear power delivery and a flat-six at 9,000 rpm are something no turbo replaces.",
                "The car in our inventory has passed a full inspection at an authorised service centre and is ready for road and track.",
            ],
        },
    },
    Article {
        id: "vykup-bez-starosti",
        title: Localized { cs: "Výkup vozu bez starostí", en: "Selling your car without the hassle" },
        date: "28. 01. 2025",
        excerpt: Localized {
            cs: "Jak probíhá ocenění a proč vyplácíme do 24 hodin.",
            en: "How the valuation works and why we pay out within 24 hours.",
        },
        author: "Jan Buršík",
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?auto=format&fit=crop&q=90&w=2400",
        topic: Localized { cs: "Výkup", en: "Buyout" },
        body: Localized {
            cs: &[
                "Prodej prémiového vozu nemusí znamenat týdny inzerce a desítky telefonátů. Stačí nám poslat základní údaje o voze a ozveme se s nabídkou.",
                "Ocenění vychází z reálné tržní ceny, stavu a specifikace vozu. Žádné skryté poplatky a veškerou administrativu převodu zajistíme my.",
            ],
            en: &[
                "Selling a premium car does not have to mean weeks of listings and dozens of phone calls. Send us the basic details and we will come back with an offer.",
                "The valuation reflects the real market price, condition and specification. No hidden fees, and we handle all the transfer paperwork.",
            ],
        },
    },
    Article {
        id: "vuz-na-objednavku",
        title: Localized { cs: "Vůz na objednávku ze zahraničí", en: "Ordering a car from abroad" },
        date: "05. 12. 2024",
        excerpt: Localized {
            cs: "Hledáte konkrétní specifikaci? Najdeme ji v Evropě a dovezeme až k vám.",
            en: "Looking for a specific spec? We find it in Europe and deliver it to your door.",
        },
        author: "BBCars",
        image: "https://images.unsplash.com/photo-1542362567-b05486f69246?auto=format&fit=crop&q=90&w=2400",
        topic: Localized { cs: "Dovoz", en: "Import" },
        body: Localized {
            cs: &[
                "Ne každý vůz snů je právě skladem. Pro klienty s přesnou představou vyhledáváme vozy u prověřených prodejců v celé Evropě.",
                "Zajistíme kontrolu původu, přepravu, registraci i financování. Vy si jen převezmete klíče.",
            ],
            en: &[
                "Not every dream car is in stock right now. For clients with a precise idea we search verified dealers across Europe.",
                "We handle the provenance check, transport, registration and financing. You just pick up the keys.",
            ],
        },
    },
];
