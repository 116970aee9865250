// Place sources.
//
// Every source yields a flat Vec<Place>. Failures come back as IngestError and
// the pipeline decides what to do with them; sources never swallow their own
// errors.

use async_trait::async_trait;
use places_common::{Location, Place};
use railway_stations_client::{RailwayStationsClient, Station};
use tracing::info;

use crate::error::IngestError;

/// Anything that can produce places for one ingest run.
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Short identifier used in logs and the run report.
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<Vec<Place>, IngestError>;
}

// ---------------------------------------------------------------------------
// RailwayStationSource
// ---------------------------------------------------------------------------

/// Stations of one country from railway-stations.org.
pub struct RailwayStationSource {
    client: RailwayStationsClient,
    country: String,
}

impl RailwayStationSource {
    pub fn new(client: RailwayStationsClient, country: &str) -> Self {
        Self {
            client,
            country: country.to_string(),
        }
    }
}

#[async_trait]
impl PlaceSource for RailwayStationSource {
    fn name(&self) -> &str {
        "railway-stations"
    }

    async fn fetch(&self) -> Result<Vec<Place>, IngestError> {
        info!(country = %self.country, "Fetching stations from railway-stations.org");

        let resp = self
            .client
            .photo_stations_by_country(&self.country)
            .await?;

        info!(count = resp.stations.len(), "Found stations");

        let photo_base_url = resp.photo_base_url;
        Ok(resp
            .stations
            .into_iter()
            .map(|station| station_to_place(station, &photo_base_url))
            .collect())
    }
}

/// Normalize one upstream station. `lon` becomes `lng`; nothing else about the
/// coordinates changes.
pub fn station_to_place(station: Station, photo_base_url: &str) -> Place {
    let image_url = station.primary_photo_url(photo_base_url);
    Place::railway_station(
        station.title,
        image_url,
        Location {
            lat: station.lat,
            lng: station.lon,
        },
    )
}

// ---------------------------------------------------------------------------
// WebScrapeSource
// ---------------------------------------------------------------------------

/// Tourism website scraping. Disabled: always yields nothing.
pub struct WebScrapeSource;

#[async_trait]
impl PlaceSource for WebScrapeSource {
    fn name(&self) -> &str {
        "web-scrape"
    }

    async fn fetch(&self) -> Result<Vec<Place>, IngestError> {
        info!("Skipping website scraping, source is disabled");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railway_stations_client::Photo;

    fn station(title: &str, lat: f64, lon: f64, photos: &[&str]) -> Station {
        Station {
            title: title.to_string(),
            lat,
            lon,
            photos: photos
                .iter()
                .map(|path| Photo {
                    path: path.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn station_without_photos_has_no_image_and_renamed_longitude() {
        let place = station_to_place(station("Bang Sue", 13.8030, 100.5386, &[]), "https://x/");

        assert_eq!(place.name, "Bang Sue");
        assert_eq!(place.image_url, None);
        assert_eq!(
            place.location,
            Location {
                lat: 13.8030,
                lng: 100.5386
            }
        );
    }

    #[test]
    fn image_url_is_base_plus_first_photo_path() {
        let place = station_to_place(
            station("Hat Yai", 7.0, 100.4, &["/a.jpg", "/b.jpg"]),
            "https://x/",
        );
        assert_eq!(place.image_url.as_deref(), Some("https://x//a.jpg"));
    }

    #[test]
    fn fixed_fields_follow_templates() {
        let place = station_to_place(station("Nong Khai", 17.8, 102.7, &[]), "");
        assert_eq!(place.description, "สถานีรถไฟ Nong Khai");
        assert_eq!(place.province, "N/A");
        assert_eq!(place.place_type, "สถานีรถไฟ");
    }

    #[tokio::test]
    async fn web_scrape_source_is_empty() {
        let places = WebScrapeSource.fetch().await.unwrap();
        assert!(places.is_empty());
    }
}
