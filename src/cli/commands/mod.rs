use clap::{
    Arg, ColorChoice, Command,
    builder::{
        ValueParser,
        styling::{AnsiColor, Effects, Styles},
    },
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

fn callsign_arg() -> Arg {
    Arg::new("callsign")
        .short('c')
        .long("callsign")
        .help("Raw callsign, example: AB123")
        .required(true)
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("logbook-identity")
        .about("Callsign login bridge for the logbook identity backend")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new("backend-url")
                .short('u')
                .long("backend-url")
                .help("Identity backend base URL, example: https://auth.logbook.internal")
                .env("LOGBOOK_BACKEND_URL")
                .required(true),
        )
        .arg(
            Arg::new("anon-key")
                .long("anon-key")
                .help("Public anonymous backend key (unused by admin operations)")
                .env("LOGBOOK_ANON_KEY"),
        )
        .arg(
            Arg::new("service-key")
                .long("service-key")
                .help("Server-only service key for privileged backend operations")
                .env("LOGBOOK_SERVICE_KEY")
                .required(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("LOGBOOK_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .subcommand(
            Command::new("create")
                .about("Provision a backend account for a callsign")
                .arg(callsign_arg())
                .arg(
                    Arg::new("full-name")
                        .long("full-name")
                        .help("Display name stored in account metadata"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Look up the backend account for a callsign")
                .arg(callsign_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Update the metadata of an existing account")
                .arg(callsign_arg())
                .arg(
                    Arg::new("full-name")
                        .long("full-name")
                        .help("Display name stored in account metadata")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete the backend account for a callsign")
                .arg(callsign_arg()),
        )
}
