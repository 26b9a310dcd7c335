//! Three instances share one store; the leader is killed and another takes over.
//!
//! Run with: `cargo run --example failover --features logging`

use std::sync::Arc;
use std::time::Duration;

use leadvisor::{ElectorConfig, LeaderElector, LeaseStore, LogWriter, MemoryStore, Subscribe};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store: Arc<dyn LeaseStore> = Arc::new(MemoryStore::new());

    let mut electors = Vec::new();
    for id in ["alpha", "beta", "gamma"] {
        let cfg = ElectorConfig::new(id, "demo")
            .with_lease_ttl(Duration::from_secs(3))
            .with_poll_interval(Duration::from_secs(1));
        let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
        let elector = Arc::new(LeaderElector::new(cfg, Arc::clone(&store), subs)?);
        elector.init().await?;
        electors.push(elector);
    }

    let leader = electors
        .iter()
        .position(|e| e.is_leader())
        .expect("one instance must have won");
    println!("-- leader is {}", electors[leader].instance_id());

    println!("-- killing the leader; waiting for the lease to expire...");
    electors[leader].shutdown().await;
    // Simulate a crash rather than a graceful release: put the stale lease back.
    store
        .set_if_absent("demo:main_instance_leader", electors[leader].instance_id())
        .await?;
    store
        .set_expiration("demo:main_instance_leader", Duration::from_secs(3))
        .await?;

    tokio::time::sleep(Duration::from_secs(5)).await;

    for e in electors.iter().filter(|e| e.is_running()) {
        println!("-- {} is now {}", e.instance_id(), e.role());
    }

    for e in &electors {
        e.shutdown().await;
    }
    Ok(())
}
