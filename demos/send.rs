use std::io;

use serverchan::{LeveledLogger, LogLevel, ServerChanClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "serverchan=info".into()),
        )
        .init();

    let send_key = std::env::var("SERVERCHAN_SEND_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SERVERCHAN_SEND_KEY environment variable is required",
        )
    })?;
    let title = std::env::var("SERVERCHAN_TITLE")
        .unwrap_or_else(|_| "Hello from the serverchan example.".to_owned());
    let body = std::env::var("SERVERCHAN_BODY").unwrap_or_default();

    let client = ServerChanClient::builder()
        .logger(LeveledLogger::new(LogLevel::MaskedAll))
        .build()?;

    client.send(&send_key, &title, &body).await?;
    println!("message sent");

    Ok(())
}
