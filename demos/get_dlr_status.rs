use std::io;

use tracing_subscriber::EnvFilter;
use voodoosms::{Credentials, GatewayClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = std::env::var("VOODOO_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOODOO_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("VOODOO_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOODOO_PASSWORD environment variable is required",
        )
    })?;
    let reference_id = std::env::var("VOODOO_REFERENCE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOODOO_REFERENCE_ID environment variable is required",
        )
    })?;

    let client = GatewayClient::new(Credentials::new(username, password)?);
    println!("delivery_status: {}", client.get_dlr_status(reference_id)?);

    Ok(())
}
