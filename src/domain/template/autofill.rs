// src/domain/template/autofill.rs
use crate::domain::template::features::FeatureTemplate;

/// Derive default feature selections from the property type and the free-text
/// location. Total function: unrecognized types and locations simply produce
/// fewer (or no) defaults.
///
/// Location rules are cumulative and applied in a fixed order; a location can
/// match several of them and labels are intentionally not deduplicated.
pub fn auto_fill(property_type: &str, location: &str) -> FeatureTemplate {
    let mut template = FeatureTemplate::default();

    match property_type.trim().to_ascii_lowercase().as_str() {
        "condo" => {
            template.communal_facilities = to_owned(&[
                "Swimming Pool",
                "Fitness Center",
                "Lobby",
                "24h Reception",
                "Communal Parking",
            ]);
            template.security = to_owned(&[
                "24h Communal Security",
                "Key Card Access",
                "Security Guard",
            ]);
            template.technical_equipment = to_owned(&["Air Conditioning", "Balcony"]);
        }
        "house" | "villa" => {
            template.security = to_owned(&["Security Guard", "CCTV Surveillance"]);
            template.technical_equipment = to_owned(&["Air Conditioning"]);
        }
        _ => {}
    }

    let location = location.to_lowercase();
    let mut append = |labels: &[&str]| {
        template
            .location_features
            .extend(labels.iter().map(|label| (*label).to_string()));
    };

    if location.contains("wongamat") || location.contains("beach") {
        append(&["Close to Beach", "Beach Front", "Easy Beach Access"]);
    }
    if location.contains("jomtien") {
        append(&["Near Jomtien Beach", "Easy Beach Access"]);
    }
    if location.contains("central") || location.contains("pattaya") {
        append(&["City Center", "Close to Shopping Center", "Close to Terminal 21"]);
    }
    if location.contains("pratumnak") {
        append(&["Close to Beach", "Quiet Area"]);
    }

    template
}

fn to_owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condo_on_wongamat_beach_gets_full_defaults() {
        let template = auto_fill("condo", "Wongamat Beach");
        assert_eq!(
            template.communal_facilities,
            vec![
                "Swimming Pool",
                "Fitness Center",
                "Lobby",
                "24h Reception",
                "Communal Parking"
            ]
        );
        assert_eq!(
            template.security,
            vec!["24h Communal Security", "Key Card Access", "Security Guard"]
        );
        assert_eq!(template.technical_equipment, vec!["Air Conditioning", "Balcony"]);
        assert_eq!(
            template.location_features,
            vec!["Close to Beach", "Beach Front", "Easy Beach Access"]
        );
    }

    #[test]
    fn land_in_unknown_area_gets_nothing() {
        let template = auto_fill("land", "Unknown Area");
        assert!(template.is_empty());
    }

    #[test]
    fn villa_in_jomtien_gets_house_security_and_jomtien_features() {
        let template = auto_fill("villa", "Jomtien");
        assert_eq!(template.security, vec!["Security Guard", "CCTV Surveillance"]);
        assert_eq!(template.technical_equipment, vec!["Air Conditioning"]);
        assert_eq!(
            template.location_features,
            vec!["Near Jomtien Beach", "Easy Beach Access"]
        );
    }

    #[test]
    fn overlapping_location_rules_accumulate_without_dedup() {
        let template = auto_fill("condo", "Jomtien Beach Road");
        assert_eq!(
            template.location_features,
            vec![
                "Close to Beach",
                "Beach Front",
                "Easy Beach Access",
                "Near Jomtien Beach",
                "Easy Beach Access"
            ]
        );
    }

    #[test]
    fn location_match_is_case_insensitive() {
        let template = auto_fill("townhouse", "CENTRAL PATTAYA");
        assert_eq!(
            template.location_features,
            vec!["City Center", "Close to Shopping Center", "Close to Terminal 21"]
        );
        assert!(template.security.is_empty());
    }

    #[test]
    fn pratumnak_hill_is_quiet_and_near_the_beach() {
        let template = auto_fill("house", "Pratumnak Hill");
        assert_eq!(template.location_features, vec!["Close to Beach", "Quiet Area"]);
    }

    #[test]
    fn every_autofilled_label_is_in_the_vocabulary() {
        for (property_type, location) in [
            ("condo", "Wongamat"),
            ("villa", "Jomtien"),
            ("house", "Central Pattaya"),
            ("condo", "Pratumnak beach jomtien pattaya"),
        ] {
            auto_fill(property_type, location).validate().unwrap();
        }
    }
}
