use crate::config::toml_config::BakeryConfig;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::validate_positive_number;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

pub const BREAD: &str = "Fresh bread ready!";

fn join_failure(who: &str, e: tokio::task::JoinError) -> DrillError {
    DrillError::processing(format!("{} task failed: {}", who, e))
}

/// Greets from the caller first, then from one spawned task per name.
/// Returns every greeting; the spawned ones are in completion order.
pub async fn greet_all(names: &[String]) -> Result<Vec<String>> {
    let mut greetings = vec![say_hello("main call")];

    let mut set = JoinSet::new();
    for name in names {
        let name = name.clone();
        set.spawn(async move { say_hello(&name) });
    }
    println!("main is running");

    while let Some(joined) = set.join_next().await {
        greetings.push(joined.map_err(|e| join_failure("greeting", e))?);
    }

    println!("Main function ending");
    Ok(greetings)
}

fn say_hello(name: &str) -> String {
    let greeting = format!("hello from {}", name);
    println!("{}", greeting);
    greeting
}

pub async fn baker(tx: mpsc::Sender<String>, bake_time: Duration) -> Result<()> {
    println!("Baker: Making bread...");
    tokio::time::sleep(bake_time).await;
    tx.send(BREAD.to_string())
        .await
        .map_err(|_| DrillError::processing("customer left before the bread was ready"))
}

pub async fn customer(mut rx: mpsc::Receiver<String>) -> Result<String> {
    println!("Customer: Waiting for bread...");
    let bread = rx
        .recv()
        .await
        .ok_or_else(|| DrillError::processing("baker closed the shop without any bread"))?;
    println!("Customer got: {}", bread);
    Ok(bread)
}

/// Runs a baker and a customer concurrently over a bounded channel and
/// returns what the customer received.
pub async fn bakery(config: &BakeryConfig) -> Result<String> {
    validate_positive_number("bakery.capacity", config.capacity, 1)?;
    let (tx, rx) = mpsc::channel(config.capacity);
    tracing::debug!(capacity = config.capacity, bake_ms = config.bake_ms, "Opening bakery");

    let baker = tokio::spawn(baker(tx, config.bake_duration()));
    let customer = tokio::spawn(customer(rx));

    let bread = customer.await.map_err(|e| join_failure("customer", e))??;
    baker.await.map_err(|e| join_failure("baker", e))??;

    println!("Shop closed!");
    Ok(bread)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greet_all_includes_every_name() {
        let names = vec!["goroutine 1".to_string(), "goroutine 2".to_string()];
        let greetings = greet_all(&names).await.unwrap();

        assert_eq!(greetings.len(), 3);
        assert_eq!(greetings[0], "hello from main call");
        assert!(greetings.contains(&"hello from goroutine 1".to_string()));
        assert!(greetings.contains(&"hello from goroutine 2".to_string()));
    }

    #[tokio::test]
    async fn test_greet_all_with_no_names() {
        let greetings = greet_all(&[]).await.unwrap();
        assert_eq!(greetings, vec!["hello from main call"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bakery_delivers_bread() {
        let config = BakeryConfig {
            bake_ms: 2000,
            capacity: 1,
        };
        assert_eq!(bakery(&config).await.unwrap(), BREAD);
    }

    #[tokio::test]
    async fn test_bakery_rejects_zero_capacity() {
        let config = BakeryConfig {
            bake_ms: 1,
            capacity: 0,
        };
        let err = bakery(&config).await.unwrap_err();
        match err {
            DrillError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "bakery.capacity");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_customer_without_bread_fails() {
        let (tx, rx) = mpsc::channel::<String>(1);
        drop(tx);
        let err = customer(rx).await.unwrap_err();
        assert!(matches!(err, DrillError::ProcessingError { .. }));
    }

    #[tokio::test]
    async fn test_baker_without_customer_fails() {
        let (tx, rx) = mpsc::channel::<String>(1);
        drop(rx);
        assert!(baker(tx, Duration::from_millis(1)).await.is_err());
    }
}
