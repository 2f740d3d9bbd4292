#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use hallbook::alerts::Alerts;
use hallbook::api::HallsApi;
use hallbook::clock::FixedClock;
use hallbook::models::{BookingConfirmation, BookingRecord, BookingRequest, Hall};
use hallbook::{AppError, HallBoard};
use reqwest::StatusCode;
use tokio::sync::oneshot;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn hall(id: i64, name: &str, capacity: u32, available: bool) -> Hall {
    Hall {
        id,
        name: name.to_string(),
        capacity,
        available,
    }
}

/// Scripted server answer.
pub enum Reply<T> {
    Ok(T),
    Rejected(u16, Option<&'static str>),
    /// No readable answer at all.
    Broken,
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<T, AppError> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Rejected(status, message) => Err(AppError::Rejected {
                status: StatusCode::from_u16(status).expect("valid status"),
                message: message.map(str::to_string),
            }),
            Reply::Broken => Err(AppError::Decode(
                serde_json::from_str::<u8>("not json").unwrap_err(),
            )),
        }
    }
}

type Scripted<T> = Mutex<VecDeque<(Reply<T>, Option<oneshot::Receiver<()>>)>>;

/// In-memory `HallsApi` that records every request and answers from a script.
///
/// An empty script answers halls with `[]` and bookings with a generic message.
#[derive(Default)]
pub struct FakeHallsApi {
    hall_replies: Scripted<Vec<Hall>>,
    booking_replies: Scripted<String>,
    pub hall_requests: Mutex<Vec<NaiveDate>>,
    pub booking_requests: Mutex<Vec<BookingRequest>>,
    pub bookings: Mutex<Vec<BookingRecord>>,
}

impl FakeHallsApi {
    pub fn push_halls(&self, reply: Reply<Vec<Hall>>) {
        self.hall_replies.lock().unwrap().push_back((reply, None));
    }

    /// The reply is held back until the returned sender fires.
    pub fn push_halls_gated(&self, reply: Reply<Vec<Hall>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.hall_replies.lock().unwrap().push_back((reply, Some(rx)));
        tx
    }

    pub fn push_booking(&self, reply: Reply<String>) {
        self.booking_replies.lock().unwrap().push_back((reply, None));
    }

    pub fn push_booking_gated(&self, reply: Reply<String>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.booking_replies.lock().unwrap().push_back((reply, Some(rx)));
        tx
    }

    pub fn hall_request_count(&self) -> usize {
        self.hall_requests.lock().unwrap().len()
    }

    pub fn booking_request_count(&self) -> usize {
        self.booking_requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HallsApi for FakeHallsApi {
    async fn fetch_halls(&self, date: NaiveDate) -> Result<Vec<Hall>, AppError> {
        self.hall_requests.lock().unwrap().push(date);
        let next = self.hall_replies.lock().unwrap().pop_front();
        let Some((reply, gate)) = next else {
            return Ok(Vec::new());
        };
        if let Some(gate) = gate {
            gate.await.ok();
        }
        reply.into_result()
    }

    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, AppError> {
        self.booking_requests.lock().unwrap().push(request.clone());
        let next = self.booking_replies.lock().unwrap().pop_front();
        let Some((reply, gate)) = next else {
            return Ok(BookingConfirmation {
                message: "Booked".to_string(),
            });
        };
        if let Some(gate) = gate {
            gate.await.ok();
        }
        reply
            .into_result()
            .map(|message| BookingConfirmation { message })
    }

    async fn fetch_bookings(&self) -> Result<Vec<BookingRecord>, AppError> {
        Ok(self.bookings.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlerts {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

pub struct Harness {
    pub board: HallBoard,
    pub api: Arc<FakeHallsApi>,
    pub alerts: Arc<RecordingAlerts>,
}

/// A board whose "today" is `today`.
pub fn harness(today: &str) -> Harness {
    let api = Arc::new(FakeHallsApi::default());
    let alerts = Arc::new(RecordingAlerts::default());
    let board = HallBoard::new(
        api.clone(),
        alerts.clone(),
        Arc::new(FixedClock(date(today))),
    );
    Harness { board, api, alerts }
}
