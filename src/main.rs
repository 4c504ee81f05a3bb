//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` locally so the glyph field can be viewed in a browser.
//!
//! `GLYPH_FIELD_PORT` overrides the port (default 8000); `RUST_LOG` controls
//! verbosity.

use std::process::{Command, ExitCode, Stdio};
use std::{env, thread, time::Duration};

const DEFAULT_PORT: u16 = 8000;

fn port() -> u16 {
    match env::var("GLYPH_FIELD_PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("GLYPH_FIELD_PORT={raw:?} is not a port, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => {
            log::error!("wasm-pack finished with {st}. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            log::warn!("wasm-pack not runnable ({e}); serving whatever is already in static/pkg");
        }
    }

    let port = port();
    log::info!("Launching local server at http://127.0.0.1:{port} …");
    let mut server = match Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            log::error!("failed to start http server: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Keep process alive while the server runs.
    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                log::error!("http server exited: {status}");
                return ExitCode::FAILURE;
            }
            Ok(None) => thread::sleep(Duration::from_secs(1)),
            Err(e) => {
                log::error!("lost track of http server: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
}
