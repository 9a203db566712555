#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_cars-api-rust"));
        cmd.args(["--host", "127.0.0.1", "--port", &port.to_string(), "--migrate"])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server sees DATABASE_URL
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Shared server for this test binary, or `None` when no database is
/// configured (the test should then return early).
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    let _ = dotenvy::dotenv();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set; skipping integration test");
        return Ok(None);
    }

    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(15)).await?;
    Ok(Some(server))
}

/// Short unique suffix so reruns never collide on unique columns
pub fn unique(prefix: &str) -> String {
    format!("{} {}", prefix, &uuid::Uuid::new_v4().simple().to_string()[..12])
}

/// A fresh VIN: uppercase hex is inside the VIN alphabet
pub fn unique_vin() -> String {
    uuid::Uuid::new_v4().simple().to_string().to_uppercase()[..17].to_string()
}

pub async fn post(server: &TestServer, path: &str, body: Value) -> Result<(StatusCode, Value)> {
    let res = reqwest::Client::new()
        .post(format!("{}{}", server.base_url, path))
        .json(&body)
        .send()
        .await?;
    let status = res.status();
    Ok((status, res.json().await?))
}

pub async fn put(server: &TestServer, path: &str, body: Value) -> Result<(StatusCode, Value)> {
    let res = reqwest::Client::new()
        .put(format!("{}{}", server.base_url, path))
        .json(&body)
        .send()
        .await?;
    let status = res.status();
    Ok((status, res.json().await?))
}

pub async fn get(server: &TestServer, path: &str) -> Result<(StatusCode, Value)> {
    let res = reqwest::get(format!("{}{}", server.base_url, path)).await?;
    let status = res.status();
    Ok((status, res.json().await?))
}

pub async fn delete(server: &TestServer, path: &str) -> Result<(StatusCode, Value)> {
    let res = reqwest::Client::new()
        .delete(format!("{}{}", server.base_url, path))
        .send()
        .await?;
    let status = res.status();
    Ok((status, res.json().await?))
}

/// Brand → model → car color chain a car can reference; returns
/// `(brand_id, model_id, color_id)`
pub async fn seed_parents(server: &TestServer) -> Result<(i64, i64, i64)> {
    let (_, brand) = post(server, "/brands", json!({ "name": unique("Brand") })).await?;
    let brand_id = brand["id"].as_i64().context("brand id")?;

    let (_, model) = post(server, "/models", json!({ "brand_id": brand_id, "name": "Model S" })).await?;
    let model_id = model["id"].as_i64().context("model id")?;

    let (_, color) = post(
        server,
        "/car-colors",
        json!({ "name": unique("Color"), "hex_code": "#112233" }),
    )
    .await?;
    let color_id = color["id"].as_i64().context("color id")?;

    Ok((brand_id, model_id, color_id))
}
