//! Static reference tables.
//!
//! Built once per process on first use and never mutated.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Reference list of country names recognized as countries.
const COUNTRY_NAMES: &[&str] = &[
    "Afghanistan", "Albania", "Algeria", "Andorra", "Angola", "Argentina", "Armenia",
    "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados",
    "Belarus", "Belgium", "Belize", "Benin", "Bhutan", "Bolivia", "Bosnia", "Botswana",
    "Brazil", "Brunei", "Bulgaria", "Burkina Faso", "Burundi", "Cambodia", "Cameroon",
    "Canada", "Cape Verde", "Chad", "Chile", "China", "Colombia", "Comoros", "Congo",
    "Costa Rica", "Croatia", "Cuba", "Cyprus", "Czech Republic", "Denmark", "Djibouti",
    "Dominica", "Dominican Republic", "Ecuador", "Egypt", "El Salvador",
    "Equatorial Guinea", "Eritrea", "Estonia", "Ethiopia", "Fiji", "Finland", "France",
    "Gabon", "Gambia", "Georgia", "Germany", "Ghana", "Greece", "Grenada", "Guatemala",
    "Guinea", "Guyana", "Haiti", "Honduras", "Hungary", "Iceland", "India", "Indonesia",
    "Iran", "Iraq", "Ireland", "Israel", "Italy", "Jamaica", "Japan", "Jordan",
    "Kazakhstan", "Kenya", "Kuwait", "Kyrgyzstan", "Laos", "Latvia", "Lebanon", "Lesotho",
    "Liberia", "Libya", "Liechtenstein", "Lithuania", "Luxembourg", "Madagascar", "Malawi",
    "Malaysia", "Maldives", "Mali", "Malta", "Mauritania", "Mauritius", "Mexico", "Moldova",
    "Monaco", "Mongolia", "Montenegro", "Morocco", "Mozambique", "Myanmar", "Namibia",
    "Nepal", "Netherlands", "New Zealand", "Nicaragua", "Niger", "Nigeria", "North Korea",
    "Norway", "Oman", "Pakistan", "Panama", "Papua New Guinea", "Paraguay", "Peru",
    "Philippines", "Poland", "Portugal", "Qatar", "Romania", "Russia", "Rwanda",
    "Saudi Arabia", "Senegal", "Serbia", "Seychelles", "Sierra Leone", "Singapore",
    "Slovakia", "Slovenia", "Somalia", "South Africa", "South Korea", "South Sudan", "Spain",
    "Sri Lanka", "Sudan", "Suriname", "Sweden", "Switzerland", "Syria", "Taiwan",
    "Tajikistan", "Tanzania", "Thailand", "Togo", "Trinidad and Tobago", "Tunisia", "Turkey",
    "Turkmenistan", "Uganda", "Ukraine", "United Arab Emirates", "United Kingdom",
    "United States", "Uruguay", "Uzbekistan", "Venezuela", "Vietnam", "Yemen", "Zambia",
    "Zimbabwe",
];

/// Alternative spellings mapped to their canonical country name.
const COUNTRY_ALIAS_PAIRS: &[(&str, &str)] = &[
    ("U.S.", "United States"),
    ("USA", "United States"),
    ("U.S.A.", "United States"),
    ("America", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("U.K.", "United Kingdom"),
    ("Britain", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
    ("England", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
    ("ROK", "South Korea"),
    ("PRC", "China"),
    ("ROC", "Taiwan"),
];

/// Major cities known to the gazetteer recognizer.
///
/// Only used for recognition; classification never consults this list.
pub(crate) const CITY_NAMES: &[&str] = &[
    // Americas
    "New York", "San Francisco", "Los Angeles", "Chicago", "Boston", "Seattle", "Austin",
    "Dallas", "Houston", "Denver", "Atlanta", "Miami", "Washington", "Philadelphia",
    "Phoenix", "San Diego", "San Jose", "Palo Alto", "Mountain View", "Menlo Park",
    "Redmond", "Portland", "Minneapolis", "Detroit", "Pittsburgh", "Raleigh", "Nashville",
    "Salt Lake City", "Toronto", "Vancouver", "Montreal", "Ottawa", "Calgary",
    "Mexico City", "Guadalajara", "Monterrey", "São Paulo", "Sao Paulo", "Rio de Janeiro",
    "Buenos Aires", "Santiago", "Lima", "Bogotá", "Bogota", "Medellín", "Caracas",
    "Montevideo",
    // Europe
    "London", "Manchester", "Edinburgh", "Glasgow", "Belfast", "Cambridge", "Oxford",
    "Dublin", "Cork", "Paris", "Lyon", "Marseille", "Berlin", "Munich", "Frankfurt",
    "Hamburg", "Cologne", "Düsseldorf", "Stuttgart", "Amsterdam", "Rotterdam", "The Hague",
    "Eindhoven", "Brussels", "Antwerp", "Zurich", "Zürich", "Geneva", "Basel", "Vienna",
    "Madrid", "Barcelona", "Valencia", "Lisbon", "Porto", "Rome", "Milan", "Turin",
    "Naples", "Stockholm", "Gothenburg", "Oslo", "Copenhagen", "Helsinki", "Reykjavik",
    "Warsaw", "Krakow", "Kraków", "Wroclaw", "Prague", "Brno", "Budapest", "Bucharest",
    "Sofia", "Athens", "Belgrade", "Zagreb", "Ljubljana", "Bratislava", "Tallinn", "Riga",
    "Vilnius", "Kyiv", "Kiev", "Lviv", "Minsk", "Moscow", "Saint Petersburg", "Istanbul",
    "Ankara",
    // Middle East and Africa
    "Dubai", "Abu Dhabi", "Doha", "Riyadh", "Jeddah", "Tel Aviv", "Jerusalem", "Haifa",
    "Amman", "Beirut", "Cairo", "Casablanca", "Lagos", "Nairobi", "Accra", "Johannesburg",
    "Cape Town", "Durban", "Kigali", "Addis Ababa",
    // Asia Pacific
    "Tokyo", "Osaka", "Kyoto", "Seoul", "Busan", "Beijing", "Shanghai", "Shenzhen",
    "Guangzhou", "Hangzhou", "Chengdu", "Hong Kong", "Taipei", "Singapore City",
    "Kuala Lumpur", "Jakarta", "Bangkok", "Manila", "Ho Chi Minh City", "Hanoi",
    "Bangalore", "Bengaluru", "Mumbai", "New Delhi", "Delhi", "Hyderabad", "Chennai",
    "Pune", "Gurgaon", "Gurugram", "Noida", "Kolkata", "Karachi", "Lahore", "Dhaka",
    "Colombo", "Sydney", "Melbourne", "Brisbane", "Perth", "Adelaide", "Canberra",
    "Auckland", "Wellington",
];

/// Continents and regions tagged as generic locations (LOC) by the gazetteer.
pub(crate) const REGION_NAMES: &[&str] = &[
    "Africa", "Asia", "Europe", "North America", "South America", "Latin America",
    "Central America", "Oceania", "Antarctica", "Middle East", "Southeast Asia",
    "Asia Pacific", "Scandinavia", "Nordics", "Caribbean", "Balkans", "EMEA", "APAC",
    "LATAM",
];

/// Set of canonical country names.
pub static KNOWN_COUNTRIES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COUNTRY_NAMES.iter().copied().collect());

/// Alias → canonical country name.
pub static COUNTRY_ALIASES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COUNTRY_ALIAS_PAIRS.iter().copied().collect());

/// Every country name and alias, for recognizers that need the full vocabulary.
pub(crate) fn country_vocabulary() -> impl Iterator<Item = &'static str> {
    COUNTRY_NAMES
        .iter()
        .copied()
        .chain(COUNTRY_ALIAS_PAIRS.iter().map(|(alias, _)| *alias))
}
