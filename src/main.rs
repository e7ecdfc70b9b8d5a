mod cases;
mod config;
mod http;
mod report;
#[cfg(test)]
mod testing;
mod verifier;

use config::VerifierConfig;
use verifier::Verifier;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Verifier::new(VerifierConfig::default()).run_all().await;
}
