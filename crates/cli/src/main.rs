use clap::Parser;
use line_stats_cli::args::Args;
use line_stats_cli::config::Config;
use line_stats_cli::error::AppError;
use line_stats_cli::locale::Locale;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    let env_lang = ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.is_empty());
    let locale = Locale::resolve(args.locale.as_deref(), env_lang.as_deref());
    log::debug!("locale: {}", locale.id());

    let outcome = Config::try_from(args).and_then(|config| line_stats_cli::run(&config, locale));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = match e {
                AppError::Config(_) => "Configuration Error",
                AppError::Engine(_) => "Application Error",
                AppError::Io(_) | AppError::Json(_) | AppError::Yaml(_) => "Output Error",
            };
            eprintln!("{label}: {e}");
            ExitCode::FAILURE
        }
    }
}
