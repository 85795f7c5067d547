// src/domain/template/vocabulary.rs
//! Controlled vocabularies for listing features. These are process-wide
//! constants; admin-saved templates and property feature lists must only
//! contain labels enumerated here.

pub const COMMUNAL_FACILITIES: &[&str] = &[
    "Swimming Pool",
    "Fitness Center",
    "Lobby",
    "24h Reception",
    "Communal Parking",
    "Sauna",
    "Kids Club",
    "Communal Garden",
    "Rooftop Terrace",
];

pub const SECURITY: &[&str] = &[
    "24h Communal Security",
    "Key Card Access",
    "Security Guard",
    "CCTV Surveillance",
    "Alarm System",
    "Video Door Phone",
    "Gated Community",
];

pub const TECHNICAL_EQUIPMENT: &[&str] = &[
    "Air Conditioning",
    "Balcony",
    "Built-in Kitchen",
    "Water Heater",
    "Private Pool",
    "Smart Home",
    "Fibre Internet",
    "Solar Panels",
];

pub const LOCATION_FEATURES: &[&str] = &[
    "Close to Beach",
    "Beach Front",
    "Easy Beach Access",
    "Near Jomtien Beach",
    "City Center",
    "Close to Shopping Center",
    "Close to Terminal 21",
    "Quiet Area",
    "Sea View",
    "Near International School",
    "Close to Golf Course",
];

pub fn is_permitted(vocabulary: &[&str], label: &str) -> bool {
    vocabulary.contains(&label)
}
