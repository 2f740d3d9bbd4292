pub mod dto;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::COOKIE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::AppError;
use crate::models::{BookingConfirmation, BookingRecord, BookingRequest, Hall};

#[async_trait]
pub trait HallsApi: Send + Sync {
    async fn fetch_halls(&self, date: NaiveDate) -> Result<Vec<Hall>, AppError>;
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, AppError>;
    async fn fetch_bookings(&self) -> Result<Vec<BookingRecord>, AppError>;
}

pub struct HttpHallsApi {
    client: Client,
    config: ClientConfig,
}

impl HttpHallsApi {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn with_session(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.session_cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<dto::ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            return Err(AppError::Rejected { status, message });
        }

        serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            AppError::Decode(e)
        })
    }
}

#[async_trait]
impl HallsApi for HttpHallsApi {
    async fn fetch_halls(&self, date: NaiveDate) -> Result<Vec<Hall>, AppError> {
        let url = self.url(&format!("/api/halls?date={}", date.format("%Y-%m-%d")));
        let response = self.with_session(self.client.get(&url)).send().await?;
        Self::read_json(response).await
    }

    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, AppError> {
        let url = self.url("/api/book");
        let response = self
            .with_session(self.client.post(&url))
            .json(request)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn fetch_bookings(&self) -> Result<Vec<BookingRecord>, AppError> {
        let url = self.url("/api/bookings");
        let response = self.with_session(self.client.get(&url)).send().await?;
        Self::read_json(response).await
    }
}
