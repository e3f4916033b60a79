use batch_logger::{BatchPolicy, ConfigUpdate, LogLevel};
use json_value::JsonParser;
use std::{fs::File, io::Read, path::Path, time::Duration};

/// Settings read from an optional `config.json` next to the binary's
/// working directory. Anything missing falls back to the logger defaults.
pub struct Config {
    pub update: ConfigUpdate,
    pub batch: BatchPolicy,
}

impl Default for Config {
    fn default() -> Self {
        let mut update = ConfigUpdate::default();
        let mut batch = BatchPolicy::default();

        if let Some(config_obj) = read_config_file("config.json") {
            let logging = &config_obj["logging"];
            update.level = logging["log-level"].as_str().map(parse_level);
            update.format = logging["format"].as_str().map(|s| s.to_string());
            update.file_path = logging["file-path"].as_str().map(|s| s.to_string());
            update.colorized = logging["colorized"].as_bool();

            let batching = &config_obj["batch"];
            if let Some(threshold) = batching["threshold"].as_number() {
                batch.threshold = threshold as usize;
            }
            if let Some(interval_ms) = batching["interval-ms"].as_number() {
                batch.interval = Duration::from_millis(interval_ms as u64);
            }
        }

        Config { update, batch }
    }
}

fn read_config_file(path: &str) -> Option<json_value::JsonValue> {
    if !Path::new(path).exists() {
        return None;
    }
    let mut raw_config = String::new();
    if let Err(err) = File::open(path).and_then(|mut f| f.read_to_string(&mut raw_config)) {
        eprintln!("Failed to read {}: {}", path, err);
        return None;
    }
    match JsonParser::default().parse(&raw_config) {
        Ok(value) => Some(value),
        Err(err) => {
            eprintln!("Failed to parse {}: {}", path, err);
            None
        }
    }
}

fn parse_level(name: &str) -> LogLevel {
    match name {
        "verbose" => LogLevel::Verbose,
        "info" => LogLevel::Info,
        "warning" => LogLevel::Warning,
        "error" => LogLevel::Error,
        "debug" => LogLevel::Debug,
        _ => LogLevel::Info,
    }
}
