use std::io;

use chrono::{Duration, Utc};
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
    let keyword = std::env::var("VOODOO_KEYWORD").unwrap_or_default();

    let to = Utc::now();
    let from = to - Duration::days(7);

    let client = GatewayClient::new(Credentials::new(username, password)?);
    let messages = client.get_sms_with_keyword(from, to, keyword)?;

    println!("{} message(s)", messages.len());
    for message in messages {
        println!("{} {}: {}", message.timestamp, message.from, message.message);
    }

    Ok(())
}
