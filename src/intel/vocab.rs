//! Fixed vocabularies the generators draw from

pub const FIRST_NAMES: &[&str] = &[
    "Anna", "Erik", "Maria", "Lars", "Emma", "Johan", "Sofia", "Peter", "Linda", "Anders",
];

pub const LAST_NAMES: &[&str] = &[
    "Andersson", "Johansson", "Karlsson", "Nilsson", "Eriksson", "Larsson", "Olsson", "Persson",
    "Svensson", "Gustafsson",
];

pub const LEGAL_FORMS: &[&str] = &["AB", "HB", "KB", "Enskild firma"];

pub const BUSINESS_AREAS: &[&str] = &[
    "IT-konsult",
    "Byggentreprenad",
    "Ekonomikonsult",
    "Systemutveckling",
    "Fastighetsförvaltning",
    "Transport",
    "Städtjänster",
];

pub const NAME_PARTS: &[&str] = &[
    "Nord", "Syd", "Väst", "Öst", "Pro", "Expert", "Elite", "Prime", "Smart", "Dynamic",
];

pub const MUNICIPALITIES: &[&str] = &["Stockholm", "Göteborg", "Malmö", "Uppsala", "Linköping"];

pub const CONTRACT_TYPES: &[&str] = &[
    "IT-tjänster",
    "Byggentreprenad",
    "Konsulttjänster",
    "Underhåll",
    "Transport",
];

pub const CONTRACT_TITLES: &[&str] = &[
    "Systemutveckling och drift",
    "Byggentreprenad kommunhus",
    "IT-konsulttjänster",
    "Underhåll kommunala fastigheter",
    "Transport och logistik",
];

pub const LEGAL_EVENT_DESCRIPTIONS: &[&str] = &[
    "Ansökan om företagsrekonstruktion inlämnad",
    "Betalningsanmärkning registrerad",
    "Rättegång avseende kontraktsbrott",
    "Skatteskuld hos Kronofogden",
    "Konkursansökan inlämnad till tingsrätt",
];

pub const STREETS: &[&str] = &["Storgatan", "Kyrkogatan", "Skolvägen", "Industrigatan", "Företagsgatan"];

pub const CITIES: &[&str] = &[
    "Stockholm", "Göteborg", "Malmö", "Uppsala", "Linköping", "Västerås", "Örebro",
];
