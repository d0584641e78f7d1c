use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use nexus_frontend::settings::{Settings, StartupView};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Initialization error")]
    Initialization,
}

#[tokio::main]
async fn main() {
    let logpath = match get_logging_path() {
        Ok(it) => it,
        Err(_) => return,
    };

    let logfile = tracing_appender::rolling::daily(logpath, "log");
    tracing_subscriber::fmt()
        .compact()
        .with_writer(logfile)
        .init();

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    match nexus_frontend::run(settings).await {
        Ok(()) => {
            debug!("closing application");
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("{}", err);
        }
    }
}

fn cli() -> Command {
    Command::new("nexus")
        .about("nexus - terminal companion for Tauri development")
        .args([
            Arg::new("view")
                .long("view")
                .action(ArgAction::Set)
                .value_parser(["chat", "arch", "config"])
                .default_value("chat")
                .help("view to open on startup"),
            Arg::new("tick-rate")
                .long("tick-rate")
                .action(ArgAction::Set)
                .value_parser(value_parser!(u64).range(5..1000))
                .help("simulation tick rate in milliseconds"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.startup_view = match args.get_one::<String>("view").map(|view| view.as_str()) {
        Some("arch") => StartupView::Architecture,
        Some("config") => StartupView::Config,
        _ => StartupView::Chat,
    };

    if let Some(tick_rate) = args.get_one::<u64>("tick-rate") {
        settings.tick_rate_ms = *tick_rate;
    }
}

fn get_logging_path() -> Result<String, Error> {
    let cache_dir = match dirs::cache_dir() {
        Some(cache_dir) => match cache_dir.to_str() {
            Some(cache_dir_string) => cache_dir_string.to_string(),
            None => return Err(Error::Initialization),
        },
        None => return Err(Error::Initialization),
    };

    Ok(format!("{}{}", cache_dir, "/nexus/logs"))
}
