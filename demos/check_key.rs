use std::io;
use std::time::Duration;

use serverchan::ServerChanClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let send_key = std::env::var("SERVERCHAN_SEND_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SERVERCHAN_SEND_KEY environment variable is required",
        )
    })?;

    let client = ServerChanClient::new();
    let valid = client
        .check_send_key_with_cancel(
            &send_key,
            "serverchan key probe",
            tokio::time::sleep(Duration::from_secs(10)),
        )
        .await?;

    println!("send key valid: {valid}");
    Ok(())
}
