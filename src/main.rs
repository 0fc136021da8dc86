use crate::config::AppConfig;
use crate::domain::Estimator;
use crate::model::ModelBundle;
use crate::router::handle;
use astra::Server;
use log::{error, info};

mod config;
mod domain;
mod errors;
mod model;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read deployment settings
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load and validate the model bundle; refuse to serve without it
    let bundle = match ModelBundle::load(&config.model_path, config.valuation_year) {
        Ok(bundle) => bundle,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    info!(
        "loaded {} v{} from {} ({} features, valuation year {:?})",
        bundle.name,
        bundle.version,
        config.model_path.display(),
        bundle.categories.layout().len(),
        bundle.model.valuation_year(),
    );
    let estimator = Estimator::new(bundle);

    // 3️⃣ Start the server
    info!("Starting server at http://{}", config.addr);
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &estimator) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
