//! Control API adapter — served status and inbound override commands.
//!
//! The outward surface of the interlock: a snapshot of the latest status
//! is kept for `GET /status` (JSON), and `POST /action` accepts
//! form-encoded `cmd=lock` / `cmd=unlock` overrides.
//!
//! ```text
//! ┌──────────────┐  AppCommand  ┌──────────────┐
//! │  HTTP server │─────────────▶│ Control loop │
//! │  (handlers)  │◀─────────────│  (sync)      │
//! └──────────────┘   snapshot   └──────────────┘
//! ```
//!
//! Commands cross into the control loop over an `mpsc` channel; the loop
//! drains it once per iteration, so an override takes effect within one
//! tick. The HTTP listener itself only exists on ESP-IDF — on host the
//! queue and the JSON rendering are driven directly (simulation, tests).

use std::sync::{Arc, Mutex, mpsc};

use log::warn;
use serde::Serialize;

use crate::app::commands::AppCommand;
use crate::app::decision::Decision;
use crate::app::events::StatusReport;

/// Wire shape of `GET /status`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusSnapshot {
    pub alcohol_detected: bool,
    pub relay_active: bool,
    pub raw: u16,
    pub volts: f32,
    pub uptime_secs: u64,
    pub tick: u64,
}

/// Shared state between the control loop and the transport handlers.
pub struct ControlApi {
    latest: Mutex<Option<StatusSnapshot>>,
    cmd_tx: mpsc::Sender<AppCommand>,
}

impl ControlApi {
    /// Create the API state and the command channel. The loop end keeps
    /// the receiver and drains it each iteration.
    pub fn new() -> (Arc<Self>, mpsc::Receiver<AppCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let api = Arc::new(Self {
            latest: Mutex::new(None),
            cmd_tx,
        });
        (api, cmd_rx)
    }

    // ── Outbound: status snapshot ─────────────────────────────

    /// Record the latest per-tick report for the status endpoint.
    pub fn publish(&self, report: &StatusReport, relay_engaged: bool) {
        let snapshot = StatusSnapshot {
            alcohol_detected: report.decision == Decision::Alarm,
            relay_active: relay_engaged,
            raw: report.raw,
            volts: report.volts,
            uptime_secs: report.uptime_secs,
            tick: report.tick,
        };
        if let Ok(mut latest) = self.latest.lock() {
            *latest = Some(snapshot);
        }
    }

    /// Patch the relay state after a manual override, so the endpoint
    /// reflects the line level without waiting for the next tick.
    pub fn set_relay_active(&self, engaged: bool) {
        if let Ok(mut latest) = self.latest.lock() {
            if let Some(snapshot) = latest.as_mut() {
                snapshot.relay_active = engaged;
            }
        }
    }

    /// Render the status endpoint body. `{}` until the first tick.
    pub fn status_json(&self) -> String {
        let snapshot = self.latest.lock().ok().and_then(|l| *l);
        match snapshot {
            Some(s) => serde_json::to_string(&s).unwrap_or_else(|_| String::from("{}")),
            None => String::from("{}"),
        }
    }

    // ── Inbound: override commands ────────────────────────────

    /// Queue a command for the control loop. Dropped silently if the
    /// loop has already shut down.
    pub fn submit(&self, cmd: AppCommand) {
        if self.cmd_tx.send(cmd).is_err() {
            warn!("control API: command dropped, loop not running");
        }
    }
}

/// Parse a form-encoded `POST /action` body into a command.
pub fn parse_action(body: &str) -> Option<AppCommand> {
    for pair in body.split('&') {
        if let Some(value) = pair.strip_prefix("cmd=") {
            return match value {
                "lock" => Some(AppCommand::Lock),
                "unlock" => Some(AppCommand::Unlock),
                _ => None,
            };
        }
    }
    None
}

// ── HTTP listener (ESP-IDF only) ──────────────────────────────

/// Start the HTTP listener on port 80. The returned server must stay
/// alive for the handlers to keep running; the netif is expected to be
/// up before this is called.
#[cfg(target_os = "espidf")]
pub fn serve(
    api: &Arc<ControlApi>,
) -> anyhow::Result<esp_idf_svc::http::server::EspHttpServer<'static>> {
    use esp_idf_svc::http::Method;
    use esp_idf_svc::http::server::{Configuration, EspHttpServer};
    use esp_idf_svc::io::{Read as _, Write as _};

    let mut server = EspHttpServer::new(&Configuration::default())?;

    let status_api = Arc::clone(api);
    server.fn_handler("/status", Method::Get, move |req| -> anyhow::Result<()> {
        let body = status_api.status_json();
        let mut resp =
            req.into_response(200, Some("OK"), &[("Content-Type", "application/json")])?;
        resp.write_all(body.as_bytes())?;
        Ok(())
    })?;

    let action_api = Arc::clone(api);
    server.fn_handler("/action", Method::Post, move |mut req| -> anyhow::Result<()> {
        let mut buf = [0u8; 64];
        let len = req.read(&mut buf)?;
        let body = core::str::from_utf8(&buf[..len]).unwrap_or("");
        match parse_action(body) {
            Some(cmd) => {
                action_api.submit(cmd);
                req.into_response(204, Some("No Content"), &[])?;
            }
            None => {
                req.into_response(400, Some("Bad Request"), &[])?;
            }
        }
        Ok(())
    })?;

    log::info!("control API: serving /status and /action");
    Ok(server)
}
