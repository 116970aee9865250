use serde::{Deserialize, Serialize};

/// Province value written when the upstream source carries no province data.
pub const PROVINCE_NOT_AVAILABLE: &str = "N/A";

/// Category label for every place produced from the railway station feed.
pub const RAILWAY_STATION_TYPE: &str = "สถานีรถไฟ";

/// A point of interest in the shape the `places` table expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub province: String,
    #[serde(rename = "type")]
    pub place_type: String,
    /// Serialized as an explicit `null` when absent.
    pub image_url: Option<String>,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    /// Build a railway station place. Description, province and type are fixed
    /// because the station feed has nothing richer to offer.
    pub fn railway_station(name: impl Into<String>, image_url: Option<String>, location: Location) -> Self {
        let name = name.into();
        Self {
            description: railway_station_description(&name),
            name,
            province: PROVINCE_NOT_AVAILABLE.to_string(),
            place_type: RAILWAY_STATION_TYPE.to_string(),
            image_url,
            location,
        }
    }
}

/// "Railway station <name>" in Thai.
pub fn railway_station_description(name: &str) -> String {
    format!("สถานีรถไฟ {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn railway_station_fills_fixed_fields() {
        let place = Place::railway_station(
            "Hua Lamphong",
            None,
            Location {
                lat: 13.7466,
                lng: 100.5172,
            },
        );

        assert_eq!(place.name, "Hua Lamphong");
        assert_eq!(place.description, "สถานีรถไฟ Hua Lamphong");
        assert_eq!(place.province, "N/A");
        assert_eq!(place.place_type, "สถานีรถไฟ");
        assert_eq!(place.image_url, None);
    }

    #[test]
    fn serializes_with_table_column_names() {
        let place = Place::railway_station(
            "Ayutthaya",
            None,
            Location {
                lat: 14.3562,
                lng: 100.5835,
            },
        );

        let value = serde_json::to_value(&place).unwrap();
        assert_eq!(value["type"], "สถานีรถไฟ");
        assert!(value.get("place_type").is_none());
        assert!(value.as_object().unwrap().contains_key("image_url"));
        assert!(value["image_url"].is_null());
        assert_eq!(value["location"]["lat"], 14.3562);
        assert_eq!(value["location"]["lng"], 100.5835);
    }
}
