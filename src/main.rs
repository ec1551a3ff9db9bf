use std::sync::Arc;

use routemap::config::Config;
use routemap::controller::Controller;
use routemap::error::Error;
use routemap::external::google_maps::GoogleMaps;
use routemap::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let google_maps = Arc::new(GoogleMaps::new(&config));
    let controller = Controller::spawn(google_maps.clone(), google_maps);

    serve(controller, config.addr).await
}
