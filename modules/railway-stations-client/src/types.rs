use serde::{Deserialize, Deserializer};

/// Response of `GET /photoStationsByCountry/{country}`.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoStationsResponse {
    /// Prefix for every `Photo::path` in this response.
    #[serde(rename = "photoBaseUrl", default, deserialize_with = "null_as_default")]
    pub photo_base_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stations: Vec<Station>,
}

/// A single station. Only the fields the ingest uses are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    /// Path relative to `photoBaseUrl`, usually with a leading `/`.
    pub path: String,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Station {
    /// URL of the first photo, built by plain concatenation of the base URL
    /// and the photo path.
    pub fn primary_photo_url(&self, photo_base_url: &str) -> Option<String> {
        self.photos
            .first()
            .map(|photo| format!("{photo_base_url}{}", photo.path))
    }
}
