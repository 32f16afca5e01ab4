use std::path::Path;

use github_events::SECRETS_FILE;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut stdout = std::io::stdout().lock();

    // Every failure is reported on stdout and ends the run normally.
    let result =
        github_events::run(&args, Path::new(SECRETS_FILE), &mut stdout).await;
    github_events::report(&result, &mut stdout)?;

    Ok(())
}
