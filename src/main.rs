mod cli;

use gh_rate_limit::config::Config;
use gh_rate_limit::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::build_cli();
    let matches = cmd.get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();
    let version_flag = matches.get_flag("version");

    cli::init_logging(log_level.as_deref());

    if version_flag {
        println!("gh-rate-limit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut cfg = Config::from_env().map_err(anyhow::Error::msg)?;
    if let Some(bind) = matches.get_one::<String>("bind") {
        cfg.bind = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --bind {}: {}", bind, e))?;
    }

    server::run_http_server(cfg).await
}
