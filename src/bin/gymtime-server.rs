// ABOUTME: Server binary for the GymTime REST API
// ABOUTME: Loads configuration, opens the database, and serves the Axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! # GymTime Server Binary
//!
//! Starts the GymTime roster API: loads configuration from the environment,
//! runs database migrations, and serves the REST routes over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use gymtime_server::{
    config::environment::ServerConfig, database_plugins::DatabaseProvider,
    database_plugins::SqliteDatabase, logging, routes,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Parser)]
#[command(name = "gymtime-server")]
#[command(about = "GymTime - student roster and workout plan API for gyms")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting GymTime server");
    info!("{}", config.summary());

    let database = SqliteDatabase::new(&config.database.url)
        .await
        .context("Failed to open database")?;
    if config.database.auto_migrate {
        database.migrate().await.context("Failed to run migrations")?;
        info!("Database migrations complete");
    }

    let router = routes::router(Arc::new(database)).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("GymTime API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("GymTime server shut down");
    Ok(())
}

async fn shutdown_signal() {
    // Either signal stops the server; errors registering handlers fall
    // through to pending() so the server keeps running.
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
