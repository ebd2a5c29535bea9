use tracing_subscriber::EnvFilter;

use podium_cli::Options;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = Options::from_args(std::env::args().skip(1)).and_then(|options| {
        tracing::debug!(season = %options.season.display(), format = ?options.format, "Starting");
        podium_cli::run(&options)
    });

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("podium: {e}");
            std::process::exit(1);
        },
    }
}
