use std::fs::File;
use std::io::BufRead;
use std::sync::Mutex;
use std::time::Duration;

use tickertape::TickertapeError;
use tickertape::clock::{SystemClock, sync};
use tickertape::config::{fetch_config, log_file_path};
use tickertape::controller::DisplayController;
use tickertape::credentials::{self, API_KEY_VAR};
use tickertape::quotes::{TwelveDataClient, build_http_client};
use tickertape::ticker::SegmentColor;
use tickertape::tui::{self, SyncStatus};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// How long the time sync result stays on the matrix.
const SPLASH_HOLD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<(), TickertapeError> {
    if std::env::args().nth(1).as_deref() == Some("store-key") {
        return store_key();
    }

    // Log to a file; stdout belongs to the matrix.
    let log_path = log_file_path();
    let log_file = File::create(&log_path)
        .map_err(|e| TickertapeError::Io(format!("failed to create {log_path}: {e}")))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    credentials::populate_env_from_keychain();
    let app_config = fetch_config()?;

    let http = build_http_client(app_config.quotes.timeout)?;
    let display_width = app_config.ticker.display_width;

    let mut terminal = tui::setup_terminal()?;
    let result = async {
        terminal
            .draw(|f| tui::render_splash(f, "SYNC TIME...", SegmentColor::Blue, display_width))
            .map_err(|e| TickertapeError::Io(e.to_string()))?;

        let (clock, sync_status) = match sync::sync_time(
            &http,
            &sync::DEFAULT_TIME_ENDPOINTS,
            sync::DEFAULT_ATTEMPTS,
            sync::DEFAULT_BASE_DELAY,
        )
        .await
        {
            Ok(synced) => {
                info!(source = %synced.source, "Applying time sync offset");
                (SystemClock::with_offset(synced.offset), SyncStatus::Synced)
            }
            Err(e) => {
                warn!(error = %e, "Continuing with the host clock");
                (SystemClock::unsynced(), SyncStatus::Skipped)
            }
        };

        terminal
            .draw(|f| tui::render_splash(f, sync_status.label(), SegmentColor::Blue, display_width))
            .map_err(|e| TickertapeError::Io(e.to_string()))?;
        tokio::time::sleep(SPLASH_HOLD).await;

        let provider = TwelveDataClient::new(http.clone(), &app_config.quotes);
        let mut controller = DisplayController::new(app_config.ticker.clone(), provider, clock);
        info!(mode = controller.mode().label(), "Starting display loop");

        let (tx, rx) = mpsc::unbounded_channel();
        tui::spawn_event_reader(tx);

        tui::run(&mut terminal, &mut controller, sync_status, rx).await
    }
    .await;

    tui::restore_terminal(&mut terminal)?;
    result
}

/// Reads an API key from stdin and stores it in the keychain.
fn store_key() -> Result<(), TickertapeError> {
    eprintln!("Paste the {API_KEY_VAR} and press Enter:");

    let mut line = zeroize::Zeroizing::new(String::new());
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| TickertapeError::Io(format!("failed to read stdin: {e}")))?;

    let value = line.trim();
    if value.is_empty() {
        return Err(TickertapeError::Config("no key entered".to_string()));
    }
    credentials::save_api_key(value)?;
    eprintln!("Stored {API_KEY_VAR} in the keychain");
    Ok(())
}
