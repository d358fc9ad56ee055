use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installs the global fmt subscriber. Later calls are ignored.
pub fn init(verbose: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level(verbose))
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
