use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("gh-rate-limit")
        .about("Serve GitHub API rate limits with human-readable reset times")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("bind")
                .long("bind")
                .num_args(1)
                .value_name("ADDR")
                .help("Listen address, overrides GH_RATE_LIMIT_BIND (e.g., 0.0.0.0:8080)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
}

pub fn init_logging(level: Option<&str>) {
    // Explicit level wins, then RUST_LOG, then info.
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(lvl) = level {
        builder.parse_filters(lvl);
    }
    builder.init();
}
