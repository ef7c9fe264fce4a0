use damsync_lib::config::Config;
use damsync_lib::download::MirrorOptions;
use eyre::Result;
use serde_json::{Value, json};
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Manifest path used by all end-to-end tests.
pub const MANIFEST_PATH: &str = "/.rest/delivery/v1/assets";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn asset_json(name: &str, repo_path: &str, id: &str) -> Value {
    json!({
        "@name": name,
        "@path": repo_path,
        "@id": id,
        "@nodeType": "mgnl:asset",
        "fileName": name,
        "extension": "pdf",
        "size": 1024,
        "height": 0,
        "width": 0,
        "@nodes": []
    })
}

pub async fn mount_manifest(server: &MockServer, assets: &[Value]) {
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": assets })))
        .mount(server)
        .await;
}

pub async fn mount_asset(server: &MockServer, repo_path: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/dam{repo_path}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

pub async fn mount_missing_asset(server: &MockServer, repo_path: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/dam{repo_path}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

pub fn test_options(server: &MockServer, output_dir: &Path) -> MirrorOptions {
    MirrorOptions {
        base_url: server.uri(),
        batch_size: 2,
        batch_delay: Duration::ZERO,
        output_dir: output_dir.to_path_buf(),
        alias_tree: false,
    }
}

pub fn test_config(server: &MockServer, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.base_url = server.uri();
    config.batch_size = 2;
    config.batch_delay_ms = 0;
    config.output.path = output_dir.to_path_buf();
    config
}

pub fn setup_output_dir() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

/// Answer every request with a Content-Length larger than the bytes actually
/// sent, then close the connection, so the client observes a mid-transfer
/// stream error. Wiremock cannot produce a truncated body.
pub async fn spawn_truncating_server() -> Result<std::net::SocketAddr> {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1048576\r\n\r\npartial")
                    .await;
                let _ = socket.shutdown().await;
            });
        }
    });

    Ok(addr)
}
