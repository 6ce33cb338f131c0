//! # Database Connection
//!
//! MongoDB connection establishment. The connection is fire-and-forget: a
//! background task attempts it at startup, logs the outcome, and stores the
//! client in a shared handle for the rest of the process lifetime. HTTP
//! serving never waits on it and continues whether or not it succeeds.

use std::sync::{Arc, OnceLock};

use mongodb::{bson::doc, options::ClientOptions, Client};
use tracing::{error, info};

use crate::error::Result;

/// Process-wide handle to the MongoDB client, empty until (and unless) the
/// background connect succeeds.
pub type DbHandle = Arc<OnceLock<Client>>;

/// Connect to MongoDB and verify the server is reachable with a ping.
pub async fn connect(uri: &str) -> Result<Client> {
    let options = ClientOptions::parse(uri).await?;
    let client = Client::with_options(options)?;

    // Client construction is lazy; ping so success means "reachable".
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    Ok(client)
}

/// Spawn the startup connection attempt without awaiting it.
///
/// An absent `MONGO_URI` is handed to the driver as an empty string; the
/// driver rejects it and the failure is logged like any other connect error.
pub fn spawn_connect(uri: Option<String>, handle: DbHandle) {
    tokio::spawn(async move {
        let uri = uri.unwrap_or_default();
        match connect(&uri).await {
            Ok(client) => {
                info!("MongoDB connected");
                let _ = handle.set(client);
            }
            Err(err) => {
                error!(error = %err, "MongoDB connection failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_rejects_an_unparsable_uri() {
        let result = connect("not a mongodb uri").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn connect_rejects_the_absent_uri_case() {
        // What spawn_connect hands the driver when MONGO_URI is unset.
        let result = connect("").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn spawn_connect_failure_leaves_the_handle_empty() {
        let handle: DbHandle = Arc::new(OnceLock::new());
        spawn_connect(None, Arc::clone(&handle));

        // Give the task a moment to fail parsing.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert!(handle.get().is_none());
    }
}
