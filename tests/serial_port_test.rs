mod common;

use coinmint::application::mint::Mint;
use coinmint::domain::currency::Currency;
use coinmint::domain::ports::{SharedRandomizer, SharedSerialIssuer};
use coinmint::infrastructure::random::NoRareEvents;
use coinmint::infrastructure::serial::RemoteSerialIssuer;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// One-shot fake issuance service; replies with `reply` to a single
/// request and returns the request line it saw.
async fn spawn_issuance_service(
    reply: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);
        let mut request = String::new();
        reader.read_line(&mut request).await.unwrap();

        let mut stream = reader.into_inner();
        stream.write_all(reply.as_bytes()).await.unwrap();
        request.trim().to_string()
    });

    (addr, handle)
}

#[tokio::test]
async fn test_pipeline_stamps_serial_from_remote_service() {
    let (addr, service) = spawn_issuance_service("IMF-SN-771429\n").await;

    let mint = Mint::new(
        Currency::Gbp,
        Arc::new(NoRareEvents) as SharedRandomizer,
        Arc::new(RemoteSerialIssuer::new(addr)) as SharedSerialIssuer,
    );
    let coin = mint.make_coin(2.0).await;

    assert!(!coin.is_null());
    assert_eq!(coin.serial(), Some("IMF-SN-771429"));
    assert_eq!(service.await.unwrap(), "GBP TwoPound");
}

#[tokio::test]
async fn test_pipeline_survives_empty_reply() {
    let (addr, _service) = spawn_issuance_service("\n").await;

    let mint = Mint::new(
        Currency::Usd,
        Arc::new(NoRareEvents) as SharedRandomizer,
        Arc::new(RemoteSerialIssuer::new(addr)) as SharedSerialIssuer,
    );
    let coin = mint.make_coin(0.01).await;

    assert!(!coin.is_null());
    assert_eq!(coin.serial(), None);
}

#[tokio::test]
async fn test_shared_adapters_serve_tasks_concurrently() {
    // Port handles are Send + Sync; mints can be driven from spawned tasks.
    let registry = Arc::new(common::flawless_registry());

    let mut handles = Vec::new();
    for currency in Currency::ALL {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            registry.get(currency).make_coin(1.0).await
        }));
    }

    for handle in handles {
        let coin = handle.await.unwrap();
        assert!(!coin.is_null());
    }
}
