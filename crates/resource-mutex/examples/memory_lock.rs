//! Example: claiming a resource through the in-process backend
//!
//! Run with: `cargo run --example memory_lock`

use resource_mutex::{MemoryLockStore, ResourceMutexBuilder, SynchronizeError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryLockStore::new();

    let mutex = ResourceMutexBuilder::new("environment", "staging")
        .held_by("deploy-worker-1")
        .build(store.clone());
    println!("Created mutex: {}", mutex.name());

    // Run a unit of work with the lock held
    let result = mutex
        .synchronize(|| async {
            println!("Deploying with exclusive access...");
            Ok::<_, std::io::Error>("deployed")
        })
        .await?;
    println!("Work finished: {result}");

    // Contention: another worker claims the resource first
    let rival = ResourceMutexBuilder::new("environment", "staging")
        .held_by("deploy-worker-2")
        .build(store.clone());
    rival.lock().await?;

    match mutex
        .synchronize(|| async { Ok::<_, std::io::Error>(()) })
        .await
    {
        Err(SynchronizeError::Lock(e)) => println!("Could not acquire: {e}"),
        _ => unreachable!("rival holds the lock"),
    }

    // Force override ignores the current holder
    let forcer = ResourceMutexBuilder::new("environment", "staging")
        .held_by("deploy-worker-3")
        .force(true)
        .build(store);
    forcer.lock().await?;
    println!(
        "Forced claim succeeded; holder is now '{}'",
        forcer.holder().await?.map(|r| r.held_by).unwrap_or_default()
    );
    forcer.unlock().await;

    Ok(())
}
