pub const MUNICIPALITIES: &[&str] = &[
    "Stockholm", "Göteborg", "Malmö", "Uppsala", "Linköping",
    "Västerås", "Örebro", "Helsingborg", "Jönköping", "Norrköping",
];

pub const PARTIES: &[&str] = &["S", "M", "SD", "C", "V", "KD", "L", "MP"];

pub const POSITIONS: &[&str] = &[
    "Kommunstyrelsens ordförande", "Kommunalråd", "Oppositionsråd",
    "Ledamot kommunfullmäktige", "Ersättare", "Utskottsordförande",
    "Vice ordförande", "Nämndsordförande", "Gruppledare",
];

pub const FIRST_NAMES: &[&str] = &[
    "Anna", "Erik", "Maria", "Lars", "Emma", "Johan", "Sofia", "Peter",
    "Linda", "Anders", "Karin", "Magnus", "Sara", "Mikael", "Helena",
    "Thomas", "Birgitta", "Andreas", "Margareta", "Fredrik", "Elisabeth",
    "Mattias", "Eva", "Daniel", "Kristina", "Jonas", "Susanne",
];

pub const LAST_NAMES: &[&str] = &[
    "Andersson", "Johansson", "Karlsson", "Nilsson", "Eriksson", "Larsson",
    "Olsson", "Persson", "Svensson", "Gustafsson", "Pettersson", "Jonsson",
    "Jansson", "Hansson", "Bengtsson", "Lindberg", "Magnusson", "Berg",
];

pub const INTEREST_COMPANIES: &[&str] = &[
    "Skanska AB", "NCC AB", "Peab AB", "JM AB", "Ericsson AB",
    "Volvo Group", "Atlas Copco AB", "Sandvik AB", "Securitas AB",
    "ISS Facility Services AB", "Akademiska Hus AB",
];

pub const CONSULTING_COMPANIES: &[&str] = &[
    "McKinsey & Company", "Boston Consulting Group", "Accenture AB",
    "Capgemini Sverige AB", "CGI Sverige AB", "Deloitte AB",
    "PwC Sverige AB", "KPMG AB", "EY AB",
];

pub const PROCUREMENT_WINNERS: &[&str] = &[
    "Skanska AB", "NCC Sverige AB", "Peab AB", "JM AB", "Veidekke Sverige AB",
    "Ericsson AB", "CGI Sverige AB", "Tieto EVRY", "Accenture AB",
    "ISS Facility Services AB", "Securitas AB", "Compass Group Sverige AB",
    "Sodexo Sverige AB", "Coor Service Management AB", "Akademiska Hus AB",
];

pub const DECISION_TYPES: &[&str] = &[
    "Upphandling", "Markköp", "Bygglov", "Budgetbeslut",
    "Personalärende", "Investeringsbeslut", "Miljöärende", "Planärende",
    "Avgiftsbestämmelse", "Taxebeslut", "Verksamhetsplan", "Organisationsförändring",
];

pub const COMMITTEES: &[&str] = &[
    "Kommunstyrelsen", "Byggnadsnämnden", "Miljönämnden",
    "Socialnämnden", "Kulturnämnden", "Tekniska nämnden",
    "Barn- och utbildningsnämnden", "Äldrenämnden",
];

/// Title suffixes per decision type
pub fn decision_titles(decision_type: &str) -> &'static [&'static str] {
    match decision_type {
        "Upphandling" => &["IT-system för kommunen", "Byggentreprenad skola", "Städtjänster", "Transporttjänster"],
        "Markköp" => &["Tomtköp för bostäder", "Industrimark", "Naturreservat"],
        "Bygglov" => &["Bostadsprojekt centrum", "Industribyggnad", "Handelsgalleria"],
        "Budgetbeslut" => &["Årsbudget", "Investeringsbudget", "Driftbudget"],
        "Investeringsbeslut" => &["Ny skola", "Idrottshall", "Biblioteksrenovering"],
        _ => &["Kommunalt ärende"],
    }
}

pub fn area_code(municipality: &str) -> &'static str {
    match municipality {
        "Göteborg" => "031",
        "Malmö" => "040",
        "Uppsala" => "018",
        "Linköping" => "013",
        "Västerås" => "021",
        "Örebro" => "019",
        "Helsingborg" => "042",
        "Jönköping" => "036",
        "Norrköping" => "011",
        _ => "08",
    }
}
