use std::io;
use std::time::Duration;

use phonenumber::country;
use tracing_subscriber::EnvFilter;
use voodoosms::{Credentials, Destination, GatewayClient, PhoneNumber};

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
    let destination = std::env::var("VOODOO_DESTINATION").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "VOODOO_DESTINATION environment variable is required (e.g. \"07123 456789\")",
        )
    })?;
    let region: country::Id = std::env::var("VOODOO_REGION")
        .unwrap_or_else(|_| "GB".to_owned())
        .parse()?;
    let originator = std::env::var("VOODOO_ORIGINATOR").unwrap_or_else(|_| "VoodooDemo".to_owned());
    let message = std::env::var("VOODOO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the voodoosms demo.".to_owned());

    let client = GatewayClient::builder(Credentials::new(username, password)?)
        .timeout(Duration::from_secs(30))
        .build()?;

    let destination = Destination::try_from(PhoneNumber::parse(Some(region), &destination)?)?;
    let reference_id = client.send_sms(originator, destination.as_str(), message)?;
    println!("reference_id: {reference_id}");

    Ok(())
}
