use easylist::{init_logging, IndexedList, Settings, SystemError};
use easylist_error::{EasylistResult, ErrorExt, LogLevel, ResultExt};

fn main() -> EasylistResult<()> {
    let settings = Settings::load()
        .map_err(SystemError::from)
        .context("Failed to load settings")?;
    let level = settings.logging.level.clone();
    init_logging(settings.logging.clone())
        .with_context(|| format!("Failed to initialize logging at level '{level}'"))?;

    let list: IndexedList<String> = settings.demo_items.iter().cloned().collect();
    tracing::debug!(items = %list, "demo list built");

    let has_food = list.any(|item| item == "Food");
    let book = list.first_or_none(|item| item == "Book");
    let reversed = list.reversed();

    match list.get_range(10, 15) {
        Ok(range) => println!("{range}"),
        Err(e) => {
            report(&e);
            println!("{e}");
        }
    }

    println!("{has_food}");
    println!("{}", book.map(String::as_str).unwrap_or("null"));
    println!("{reversed}");

    Ok(())
}

/// Логирует ошибку на уровне, который рекомендует её код статуса.
fn report(err: &impl ErrorExt) {
    let status = err.status_code();
    match status.log_level() {
        LogLevel::Debug => tracing::debug!(error = %err, %status, "operation rejected"),
        LogLevel::Warn => tracing::warn!(error = %err, %status, "operation rejected"),
        LogLevel::Error => tracing::error!(error = %err, %status, "operation rejected"),
    }
}
