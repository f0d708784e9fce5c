//! Replays recorded list-page events and prints the resulting page state.
//!
//! Usage: `replay_events [input.json] < events.jsonl`

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use dotenvy::dotenv;

use inbox_pager::dto::list_page::{ListEvent, ListPageInput};
use inbox_pager::models::config::load_config;
use inbox_pager::services::list_page::ListPage;
use inbox_pager::view::RecordingView;

fn read_input(path: &Path) -> Result<ListPageInput, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("cannot parse {}: {e}", path.display()))
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let pager_config = match load_config(Path::new("config"), &app_env) {
        Ok(pager_config) => pager_config,
        Err(err) => {
            log::error!("Error loading pager config: {}", err);
            std::process::exit(1);
        }
    };

    let input_path = match env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| pager_config.input_path.clone())
    {
        Some(path) => path,
        None => {
            log::error!("No render input given and no input_path configured");
            std::process::exit(1);
        }
    };

    let input = match read_input(&input_path) {
        Ok(input) => input,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Replaying events over {} items, page size {}",
        input.ids.len(),
        pager_config.page_size
    );

    let mut page = ListPage::load(input, pager_config.page_size, RecordingView::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (line_no, line) in io::stdin().lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Error reading events: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ListEvent>(&line) {
            Ok(event) => {
                if let Err(e) = page.handle(event) {
                    log::error!("Error handling event on line {}: {e}", line_no + 1);
                }
            }
            Err(e) => {
                log::error!("Skipping malformed event on line {}: {e}", line_no + 1);
                continue;
            }
        }

        match serde_json::to_string(&page.snapshot()) {
            Ok(json) => {
                if let Err(e) = writeln!(out, "{json}") {
                    log::error!("Error writing state: {e}");
                    break;
                }
            }
            Err(e) => log::error!("Error serializing state: {e}"),
        }
    }

    log::info!("Selected ids at exit: {:?}", page.controller().selected_ids());
}
