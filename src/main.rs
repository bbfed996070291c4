//! Command-line entry point: inspect, normalize or reset a settings file.
//!
//! Usage: `player-settings [show|normalize|reset] [PATH]`

use player_settings::SettingsStore;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "show".to_owned());
    let path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(SettingsStore::default_path);

    match command.as_str() {
        "show" => {
            let store = SettingsStore::open(&path);
            match store.settings().to_json_pretty() {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        "normalize" => match SettingsStore::normalize(&path) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{}", e);
                log::warn!("Left {} unchanged", path.display());
                ExitCode::FAILURE
            }
        },
        "reset" => save(SettingsStore::with_defaults(&path)),
        other => {
            log::error!("Unknown command: {}", other);
            eprintln!("usage: player-settings [show|normalize|reset] [PATH]");
            ExitCode::FAILURE
        }
    }
}

fn save(store: SettingsStore) -> ExitCode {
    match store.save() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
