// Trendcraft - trend discovery and content idea backend
// Entry point: serves commands as newline-delimited JSON on stdin/stdout

use anyhow::Context;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trendcraft::commands::bridge;
use trendcraft::{app, config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for responses
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trendcraft=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Trendcraft");

    let data_dir = std::env::var_os(config::DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_DATA_DIR));

    let state = app::setup(data_dir)
        .await
        .context("failed to initialize application")?;

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(line) = rx.recv().await {
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, std::io::Error>(())
    });

    // Requests run concurrently; responses are matched by their echoed id.
    // Bad lines are answered individually and never stop the loop.
    let mut reader = BufReader::new(tokio::io::stdin());
    loop {
        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        }

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let state = state.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let response = bridge::handle_bytes(&state, &line).await;
            if tx.send(response).is_err() {
                tracing::warn!("Response dropped: output closed");
            }
        });
    }

    drop(tx);
    writer.await??;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
