//! Example: coordinating across processes through MongoDB
//!
//! Run with: `cargo run --example mongo_lock`
//!
//! Requires a MongoDB server; set MONGODB_URI to override the default
//! localhost address. Run several copies concurrently to see contention.

use resource_mutex::{MongoLockStore, ResourceMutexBuilder};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let uri =
        std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = mongodb::Client::with_uri_str(&uri).await?;
    let store = MongoLockStore::new(client.database("coordination"), None);

    let mutex = ResourceMutexBuilder::new("environment", "production")
        .held_by(format!("worker-{}", std::process::id()))
        .build(store);

    if mutex.lock().await? {
        println!("Lock acquired as {}", mutex.held_by());

        tokio::time::sleep(Duration::from_secs(2)).await;
        println!("Work completed");

        mutex.unlock().await;
        println!("Lock released");
    } else {
        let holder = mutex.holder().await?;
        match holder {
            Some(record) => println!("Resource is held by {}", record.held_by),
            None => println!("Claim lost a race; try again"),
        }
    }

    Ok(())
}
