use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::env;

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, upstream_error, Error};
use crate::external::{MapsClient, RouteMatrix};

#[derive(Clone, Debug, Default)]
pub struct GoogleMaps {
    client: reqwest::Client,
}

impl GoogleMaps {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextValue {
    text: String,
    value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixRow {
    elements: Vec<MatrixElement>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MatrixResponse {
    status: String,
    rows: Vec<MatrixRow>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResponse {
    status: String,
    results: Vec<GeocodeResult>,
}

#[async_trait]
impl MapsClient for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn distance_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteMatrix, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/distancematrix/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = self
            .client
            .get(url)
            .query(&[("key", key.as_str())])
            .query(&[("origins", origin)])
            .query(&[("destinations", destination)])
            .query(&[("mode", "driving")])
            .query(&[("units", "metric")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: MatrixResponse = res.json().await?;

        if data.status != "OK" {
            return Err(upstream_error());
        }

        let element = data
            .rows
            .first()
            .and_then(|row| row.elements.first())
            .ok_or_else(|| upstream_error())?;

        if element.status != "OK" {
            return Err(upstream_error());
        }

        let distance = element.distance.clone().ok_or_else(|| upstream_error())?;
        let duration = element.duration.clone().ok_or_else(|| upstream_error())?;

        Ok(RouteMatrix {
            distance_meters: distance.value,
            duration_seconds: duration.value,
            distance_text: distance.text,
            duration_text: duration.text,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Coordinates, Error> {
        let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
        let url = format!("https://{}/maps/api/geocode/json", api_base);
        let key = env::var("GOOGLE_MAPS_API_KEY")?;

        let res = self
            .client
            .get(url)
            .query(&[("key", key.as_str())])
            .query(&[("address", address)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: GeocodeResponse = res.json().await?;

        if data.status != "OK" {
            return Err(upstream_error());
        }

        let result = data.results.first().ok_or_else(|| upstream_error())?;

        Ok(result.geometry.location)
    }
}
