pub mod error;
pub mod types;

pub use error::{RailwayStationsError, Result};
pub use types::{Photo, PhotoStationsResponse, Station};

pub struct RailwayStationsClient {
    client: reqwest::Client,
    base_url: String,
}

impl RailwayStationsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every station of a country together with its photos.
    ///
    /// The endpoint is unpaginated; one request returns the whole country.
    pub async fn photo_stations_by_country(&self, country: &str) -> Result<PhotoStationsResponse> {
        let url = format!("{}/photoStationsByCountry/{}", self.base_url, country);
        tracing::debug!(url = %url, "Requesting stations");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RailwayStationsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = resp.bytes().await?;
        let stations: PhotoStationsResponse = serde_json::from_slice(&bytes)?;
        Ok(stations)
    }
}
