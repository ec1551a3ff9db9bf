use std::env;
use std::net::SocketAddr;

use crate::error::{invalid_input_error, Error};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_GOOGLE_MAPS_API_BASE: &str = "maps.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub google_maps_api_base: String,
    pub google_maps_api_key: String,
}

impl Config {
    /// Reads configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(err) = dotenv::dotenv() {
            tracing::debug!("no .env file loaded: {}", err);
        }

        let addr = env::var("ROUTEMAP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
        let addr = addr.parse::<SocketAddr>().map_err(|_| {
            tracing::error!("ROUTEMAP_ADDR is not a socket address: {}", addr);
            invalid_input_error()
        })?;

        let google_maps_api_base = env::var("GOOGLE_MAPS_API_BASE")
            .unwrap_or_else(|_| DEFAULT_GOOGLE_MAPS_API_BASE.into());
        let google_maps_api_key = env::var("GOOGLE_MAPS_API_KEY")?;

        Ok(Self {
            addr,
            google_maps_api_base,
            google_maps_api_key,
        })
    }
}
