//! Single instance with an in-process store: always the leader.
//!
//! Run with: `cargo run --example single_node --features logging`

use std::sync::Arc;
use std::time::Duration;

use leadvisor::{ElectorConfig, LeaderElector, LogWriter, MemoryStore, Subscribe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ElectorConfig::new("solo", "demo")
        .with_lease_ttl(Duration::from_secs(10))
        .with_poll_interval(Duration::from_secs(3));

    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
    let elector = Arc::new(LeaderElector::new(cfg, Arc::new(MemoryStore::new()), subs)?);

    elector.init().await?;
    println!("role: {}", elector.role());
    println!("holder: {:?}", elector.fetch_leader_key().await?);

    tokio::time::sleep(Duration::from_secs(7)).await;

    elector.shutdown().await;
    println!("holder after shutdown: {:?}", elector.fetch_leader_key().await?);
    Ok(())
}
