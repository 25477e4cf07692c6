use pac_drills::config::toml_config::ServerConfig;
use pac_drills::core::server;

fn local_config(greeting: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        greeting: greeting.to_string(),
    }
}

#[tokio::test]
async fn test_live_server_answers_every_path() {
    let handle = server::spawn(&local_config("hello world ")).await.unwrap();
    let base = format!("http://{}", handle.local_addr());
    let client = reqwest::Client::new();

    for path in ["/", "/hello", "/a/b/c?x=1"] {
        let response = client.get(format!("{}{}", base, path)).send().await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "hello world ");
    }

    let response = client.post(format!("{}/submit", base)).body("ignored").send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "hello world ");

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_server_reports_bound_port() {
    let handle = server::spawn(&local_config("hi")).await.unwrap();
    let addr = handle.local_addr();
    assert!(addr.ip().is_loopback());
    assert_ne!(addr.port(), 0);

    let body = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "hi");

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_stops_accepting_connections() {
    let handle = server::spawn(&local_config("bye")).await.unwrap();
    let addr = handle.local_addr();
    handle.shutdown().await.unwrap();

    assert!(reqwest::get(format!("http://{}/", addr)).await.is_err());
}
