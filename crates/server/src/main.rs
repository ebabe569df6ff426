use plain_http_server::{Config, Server};
use tracing::error;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let config = Config::load();

    let subscriber = FmtSubscriber::builder().with_max_level(config.log_level).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = Server::new(&config).start().await {
        error!(cause = %e, "server stopped");
        std::process::exit(1);
    }
}
