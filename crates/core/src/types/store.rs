//! Physical store locations.

use serde::{Deserialize, Serialize};

use super::ImageRef;

/// WGS84 latitude/longitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreLocation {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub image: Option<ImageRef>,
}

impl StoreLocation {
    /// Google Maps directions link.
    ///
    /// Uses the coordinates when present, otherwise the address text.
    #[must_use]
    pub fn directions_url(&self) -> String {
        let destination = self.coordinates.map_or_else(
            || urlencoding::encode(&self.address).into_owned(),
            |Coordinates { lat, lng }| format!("{lat},{lng}"),
        );
        format!("https://www.google.com/maps/dir/?api=1&destination={destination}")
    }

    /// `tel:` link with whitespace removed.
    #[must_use]
    pub fn phone_href(&self) -> Option<String> {
        self.phone
            .as_deref()
            .map(|phone| format!("tel:{}", phone.split_whitespace().collect::<String>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mumbai() -> StoreLocation {
        StoreLocation {
            id: "s1".to_string(),
            name: "SAYURA Mumbai Flagship".to_string(),
            address: "123 Fashion Street, Bandra West".to_string(),
            phone: Some("+91 22 1234 5678".to_string()),
            email: None,
            hours: Some("10:00 AM - 9:00 PM".to_string()),
            coordinates: Some(Coordinates {
                lat: 19.0596,
                lng: 72.8295,
            }),
            image: None,
        }
    }

    #[test]
    fn test_directions_from_coordinates() {
        assert_eq!(
            mumbai().directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=19.0596,72.8295"
        );
    }

    #[test]
    fn test_directions_from_address() {
        let store = StoreLocation {
            coordinates: None,
            ..mumbai()
        };
        assert_eq!(
            store.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=123%20Fashion%20Street%2C%20Bandra%20West"
        );
    }

    #[test]
    fn test_phone_href() {
        assert_eq!(mumbai().phone_href().as_deref(), Some("tel:+912212345678"));
    }
}
