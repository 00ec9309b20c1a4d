use a11y_datepicker::{config::Config, date::SystemClock, DatePicker};

mod cli;
use cli::{dump_view, parse_cli_mode, USAGE};
mod tui;
use tui::run_tui;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match parse_cli_mode() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let mut config = match &options.config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load_or_create()?,
    };
    options.apply(&mut config);

    let picker_config = config.picker_config()?;
    let picker = DatePicker::new(picker_config, Box::new(SystemClock))
        .with_on_change(|value| tracing::info!("Value changed: {:?}", value))
        .with_on_blur(|| tracing::info!("Focus left the date picker"));

    if options.dump {
        dump_view(&picker)?;
        return Ok(());
    }

    run_tui(picker, &config)?;
    Ok(())
}

fn setup_logging() {
    let log_dir = dirs::config_dir()
        .map(|d| d.join("a11y-datepicker"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "a11y-datepicker.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("a11y-datepicker started");
}
