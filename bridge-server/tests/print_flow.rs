//! End-to-end batch flow against in-process stand-ins
//!
//! Spins up a stub inventory API (axum on an ephemeral port) and a stub
//! raw-socket printer (plain TcpListener), then drives the production
//! pipeline wiring through a mixed batch.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use bridge_server::core::config::{ErpConfig, PrinterRouting};
use bridge_server::labels::LabelVariant;
use bridge_server::{Config, ServerState};

/// Stub inventory API knowing exactly one item, `A1`
async fn spawn_stub_erp() -> String {
    async fn item(Path(code): Path<String>) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
        if code == "A1" {
            Ok(Json(serde_json::json!({
                "data": {
                    "item_name": "Hex Bolt M8",
                    "supplier_items": [
                        { "supplier": "Acme", "supplier_part_no": "P123" }
                    ],
                    "attributes": []
                }
            })))
        } else {
            Err((StatusCode::NOT_FOUND, format!("Item {code} not found")))
        }
    }

    let app = Router::new().route("/api/resource/Item/{code}", get(item));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub printer accepting raw connections and collecting whole documents
async fn spawn_stub_printer(received: Arc<Mutex<Vec<Vec<u8>>>>) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };
            let received = received.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                if socket.read_to_end(&mut buf).await.is_ok() {
                    received.lock().await.push(buf);
                }
            });
        }
    });
    port
}

#[tokio::test]
async fn test_mixed_batch_prints_known_item_and_reports_unknown() {
    let erp_url = spawn_stub_erp().await;
    let received = Arc::new(Mutex::new(Vec::new()));
    let printer_port = spawn_stub_printer(received.clone()).await;

    let config = Config {
        http_port: 0,
        request_timeout: Duration::from_secs(30),
        erp: ErpConfig {
            base_url: erp_url,
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            timeout: Duration::from_secs(5),
        },
        printers: PrinterRouting {
            default_host: "127.0.0.1".to_string(),
            port: printer_port,
            large_host: None,
            small_host: None,
            screw_host: None,
            send_timeout: Duration::from_secs(5),
        },
    };

    let state = ServerState::initialize(&config).unwrap();

    let codes = vec!["A1".to_string(), "A2".to_string()];
    let outcomes = state
        .pipeline
        .process_batch(&codes, LabelVariant::Large)
        .await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].ok);
    assert_eq!(
        outcomes[0].to_string(),
        "Label for A1 sent to printer successfully."
    );
    assert!(!outcomes[1].ok);
    assert!(outcomes[1].detail.contains("404"));

    // The stub printer task races the assertion, so give it a moment.
    let docs = {
        let mut docs = received.lock().await;
        for _ in 0..50 {
            if !docs.is_empty() {
                break;
            }
            drop(docs);
            tokio::time::sleep(Duration::from_millis(20)).await;
            docs = received.lock().await;
        }
        docs.clone()
    };

    assert_eq!(docs.len(), 1);
    let document = String::from_utf8(docs[0].clone()).unwrap();
    assert!(document.starts_with("^XA"));
    assert!(document.trim_end().ends_with("^XZ"));
    assert!(document.contains("Acme"));
    assert!(document.contains("P123"));
    assert!(document.contains("A1"));
}
