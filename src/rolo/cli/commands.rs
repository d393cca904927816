use super::print::{print_error, print_event, print_messages, print_persons};
use super::setup::Cli;
use clap::Parser;
use rolo::api::RoloApi;
use rolo::config::RoloConfig;
use rolo::error::Result;
use rolo::events::{EventBus, ModelEvent};
use rolo::logging;
use rolo::store::json::JsonFileStore;
use rolo::store::memory::InMemoryStore;
use rolo::store::Storage;
use std::io::{self, BufRead, IsTerminal, Write};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use tracing::debug;

const PROMPT: &str = "rolo> ";

/// Runs the front end. Returns how many command lines failed.
pub fn run() -> Result<usize> {
    let cli = Cli::parse();
    let config = RoloConfig::load(cli.config.as_deref())?;
    logging::init(&config.log_level);

    let data_file = cli.data.clone().or_else(|| config.data_file.clone());
    let events = EventBus::new(config.event_capacity);

    match data_file {
        Some(path) => {
            debug!(path = %path.display(), "using data file");
            let api = RoloApi::new(JsonFileStore::new(path), events)?
                .with_autosave(config.autosave);
            session(api, &cli.commands)
        }
        None => {
            debug!("no data file configured, nothing will be saved");
            let api = RoloApi::new(InMemoryStore::new(), events)?;
            session(api, &cli.commands)
        }
    }
}

fn session<S: Storage>(mut api: RoloApi<S>, commands: &[String]) -> Result<usize> {
    let mut events = api.model().events().subscribe();

    if !commands.is_empty() {
        let mut failures = 0;
        for line in commands {
            let (ok, exit) = handle_line(&mut api, &mut events, line);
            if !ok {
                failures += 1;
            }
            if exit {
                break;
            }
        }
        return Ok(failures);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        print_persons(api.model().filtered_person_list());
    }

    let mut failures = 0;
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (ok, exit) = handle_line(&mut api, &mut events, &line);
        if !ok {
            failures += 1;
        }
        if exit {
            break;
        }
    }
    Ok(failures)
}

/// Returns (succeeded, exit requested).
fn handle_line<S: Storage>(
    api: &mut RoloApi<S>,
    events: &mut Receiver<ModelEvent>,
    line: &str,
) -> (bool, bool) {
    match api.execute(line) {
        Ok(result) => {
            if let Some(event) = latest_event(events) {
                print_event(&event);
            }
            print_messages(&result.messages);
            (true, result.exit)
        }
        Err(err) => {
            // Failed commands publish nothing, but drain anyway to stay current.
            let _ = latest_event(events);
            print_error(&err);
            (false, false)
        }
    }
}

/// Drains the subscription and keeps only the newest event.
fn latest_event(events: &mut Receiver<ModelEvent>) -> Option<ModelEvent> {
    let mut latest = None;
    loop {
        match events.try_recv() {
            Ok(event) => latest = Some(event),
            Err(TryRecvError::Lagged(skipped)) => {
                debug!(skipped, "event subscriber lagged");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return latest,
        }
    }
}
