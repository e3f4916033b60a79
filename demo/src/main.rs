use batch_logger::sink::DailyFileSink;
use batch_logger::{ConfigUpdate, JsonValue, LogLevel, Logger, LoggerConfig};
use batch_logger_macros::log;
use dotenv::dotenv;
use std::{env, thread, time::Duration};

mod config;

fn test_object() -> JsonValue {
    JsonValue::Object(vec![
        ("name".to_string(), JsonValue::String("Test".to_string())),
        ("surname".to_string(), JsonValue::String("Surname".to_string())),
        ("address".to_string(), JsonValue::String("Address".to_string())),
    ])
}

#[log(debug)]
fn simulate_work(task: &str, steps: u32) -> u32 {
    for step in 0..steps {
        batch_logger::info!("{}: step {} done", task, step);
    }
    steps
}

fn main() {
    dotenv().ok();

    let cfg = config::Config::default();
    let mut update = cfg.update;
    if let Ok(dir) = env::var("LOG_DIR") {
        update.file_path = Some(dir);
    }
    batch_logger::configure(update);

    println!("Sync Logging");
    batch_logger::configure(ConfigUpdate {
        colorized: Some(true),
        ..Default::default()
    });
    batch_logger::log("Application started", Some(LogLevel::Info), None);
    batch_logger::log("Debug test", Some(LogLevel::Debug), None);
    batch_logger::log("Error test", Some(LogLevel::Error), None);
    batch_logger::log("Info test", Some(LogLevel::Info), None);
    batch_logger::log("Verbose test", Some(LogLevel::Verbose), None);
    batch_logger::log("Warning test", Some(LogLevel::Warning), None);
    batch_logger::error("This is an error", None);
    batch_logger::debug("Test With Extra", Some(test_object()));
    batch_logger::debug(&test_object().pretty(), None);

    println!("Async Logging");
    batch_logger::log_async("Test error occurred", Some(LogLevel::Error), None);
    batch_logger::log_async("Test With Extra", Some(LogLevel::Debug), Some(test_object()));

    batch_logger::warning("Sync log while waiting for async logs", None);

    for i in 0..1000 {
        batch_logger::log(&format!("Test {}", i), None, None);
    }

    simulate_work("demo", 3);

    // A second engine, explicitly constructed with the batch policy from
    // config.json, writing its own directory.
    let engine = Logger::with_sink(
        LoggerConfig {
            file_path: "logs/engine".to_string(),
            ..Default::default()
        },
        cfg.batch,
        Box::new(DailyFileSink),
    );
    engine.info("dedicated engine line", None);
    if let Err(err) = engine.flush() {
        eprintln!("engine flush failed: {}", err);
    }

    // Drain the async queue, then force out whatever the batch still
    // holds before the process exits.
    while !batch_logger::is_idle() {
        thread::sleep(Duration::from_millis(10));
    }
    if let Err(err) = batch_logger::flush() {
        eprintln!("final flush failed: {}", err);
    }
}
