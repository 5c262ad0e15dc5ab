use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use people_api::PeopleApiClient;
use termpage::config::EnvConfig;
use termpage::directory::fetch_with_deadline;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const ONE_PERSON: &str = r#"[{"id":"1","firstName":"Nymphadora","lastName":"Tonks"}]"#;

/// Serves one listing, but only from the second connection on; the first is
/// read and then left hanging.
async fn stall_first_connection() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("local TCP listener should bind");
    let addr = listener.local_addr().expect("listener address");
    let connections = Arc::new(AtomicUsize::new(0));

    tokio::spawn({
        let connections = Arc::clone(&connections);
        async move {
            while let Ok((socket, _)) = listener.accept().await {
                let index = connections.fetch_add(1, Ordering::AcqRel);
                tokio::spawn(serve(socket, index));
            }
        }
    });

    (format!("http://{addr}"), connections)
}

async fn serve(mut socket: TcpStream, index: usize) {
    let mut request = Vec::new();
    let mut buffer = [0_u8; 2048];
    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        match socket.read(&mut buffer).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buffer[..n]),
        }
    }

    if index == 0 {
        tokio::time::sleep(Duration::from_secs(30)).await;
        return;
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{ONE_PERSON}",
        ONE_PERSON.len()
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

fn env_config(directory_url: String, fetch_timeout: Duration) -> EnvConfig {
    EnvConfig {
        link_server: "localhost".to_string(),
        link_port: "8888".to_string(),
        directory_url: Some(directory_url),
        fetch_timeout,
        strict_fetch: true,
        reject_overflow: false,
        log_filter: None,
    }
}

#[tokio::test]
async fn stalled_first_attempt_still_loads_within_deadline() {
    let (base_url, connections) = stall_first_connection().await;
    let config = env_config(base_url, Duration::from_millis(400));

    let client = PeopleApiClient::new(config.people_api_config()).expect("client");
    let deadline = config.router_config().fetch_deadline;

    let people = fetch_with_deadline(&client, deadline)
        .await
        .expect("retry should land inside the deadline");

    assert_eq!(people.len(), 1);
    assert_eq!(people[0].display_name(), "Nymphadora Tonks");
    assert_eq!(connections.load(Ordering::Acquire), 2);
}
