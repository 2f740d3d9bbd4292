use std::sync::Arc;

use hallbook::alerts::ConsoleAlerts;
use hallbook::api::HttpHallsApi;
use hallbook::clock::SystemClock;
use hallbook::config::ClientConfig;
use hallbook::models::HallId;
use hallbook::view::{self, View};
use hallbook::HallBoard;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
commands:
  date <YYYY-MM-DD>         change the booking date
  attendees <hall_id> <n>   set the attendee count for a hall
  book <hall_id>            book a hall for the current date
  bookings                  list all bookings
  show                      print the hall list
  html                      print the hall list as markup
  help                      show this help
  quit                      exit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "hallbook=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::new_from_env()?;
    info!("using hall booking server at {}", config.base_url);

    let api = Arc::new(HttpHallsApi::new(config)?);
    let board = HallBoard::new(api, Arc::new(ConsoleAlerts), Arc::new(SystemClock));

    // Failures are already surfaced as alerts by the board.
    let _ = board.initialize().await;
    print_view(&board);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (None, _, _) => continue,
            (Some("date"), Some(date), None) => {
                let _ = board.set_date(date).await;
                print_view(&board);
            }
            (Some("attendees"), Some(hall_id), Some(count)) => match hall_id.parse::<HallId>() {
                Ok(hall_id) => board.set_attendees(hall_id, count),
                Err(_) => eprintln!("unknown hall '{}'", hall_id),
            },
            (Some("book"), Some(hall_id), None) => {
                book(&board, hall_id).await;
                print_view(&board);
            }
            (Some("bookings"), None, None) => {
                if let Ok(records) = board.load_bookings().await {
                    print!("{}", view::render_bookings(&records));
                }
            }
            (Some("show"), None, None) => print_view(&board),
            (Some("html"), None, None) => print!("{}", board.view().to_html()),
            (Some("help"), _, _) => println!("{}", HELP),
            (Some("quit") | Some("exit"), _, _) => break,
            _ => eprintln!("unrecognized command, try 'help'"),
        }
    }

    Ok(())
}

fn print_view(board: &HallBoard) {
    println!("Date: {}", board.date_field().value);
    print!("{}", board.view().to_text());
}

/// Resolves the button for `hall_id` on the current view and presses it.
async fn book(board: &HallBoard, hall_id: &str) {
    let Ok(hall_id) = hall_id.parse::<HallId>() else {
        eprintln!("unknown hall '{}'", hall_id);
        return;
    };

    let target = match board.view() {
        View::Cards(cards) => cards
            .into_iter()
            .find(|c| c.hall_id == hall_id)
            .and_then(|c| c.booking.map(|b| (b.date, c.name))),
        _ => None,
    };

    match target {
        Some((date, name)) => {
            let _ = board.book_hall(hall_id, date, &name).await;
        }
        None => eprintln!("hall {} is not available to book", hall_id),
    }
}
