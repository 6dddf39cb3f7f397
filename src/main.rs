use clap::Parser;
use demapp::config::toml_config::LoggingSettings;
use demapp::utils::{logger, validation::Validate};
use demapp::{CliConfig, DemError, InputResolver, ResolverSettings, StreamConsole};
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    let config = cli.validate().and_then(|_| cli.load_config());

    // Logging must be up before a config failure can be reported.
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(|_| LoggingSettings::default());
    logger::init_cli_logger(cli.verbose, &logging);

    tracing::debug!("CLI config: {:?}", cli);

    let config = match config {
        Ok(config) => config,
        Err(e) => return report_failure("Configuration could not be loaded", &e),
    };

    if cli.print_config {
        return match config.to_toml_string() {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => report_failure("Configuration could not be printed", &e),
        };
    }

    // argv[0] may not be UTF-8
    let program = std::env::args_os()
        .next()
        .unwrap_or_else(|| OsString::from("demapp"));
    let mut resolver = InputResolver::new(StreamConsole::stdio(), ResolverSettings::from(&config));

    match resolver.resolve_input_file(&cli.argv(&program)) {
        Ok(input_file) => {
            tracing::info!(
                "Input file: {} (source: {:?})",
                input_file,
                input_file.source()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_failure("Input file could not be resolved", &e),
    }
}

fn report_failure(context: &str, e: &DemError) -> ExitCode {
    tracing::error!(
        "{}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    ExitCode::from(e.exit_code())
}
