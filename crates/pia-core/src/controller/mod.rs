//! Form controller: input state, naming-mode switching, and the submission
//! state machine.
//!
//! States are `Idle` and `InFlight`. A submission enters `InFlight` only
//! after validation passes and returns to `Idle` when its in-flight guard is
//! dropped, which happens on every exit path including cancellation of the
//! submission future. `submit` takes `&mut self`, so two submissions can
//! never overlap.

mod flight;
mod surface;


pub use surface::FormSurface;

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::config::{PiaConfig, ProgressConfig};
use crate::error::SubmitError;
use crate::input::{parse_urls, submit_enabled};
use crate::naming::{self, CustomNameInput, NamingMode};
use crate::payload::ProcessRequest;
use crate::progress::{IncrementSource, RandomIncrements};
use crate::report::ResultsReport;
use crate::response::{ErrorResponse, ProcessResponse};
use crate::transport::{body_preview, HttpReply, Transport, TransportError};
use flight::InFlight;

/// Submission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InFlight,
}

/// Knobs that do not change between submissions.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Endpoint path joined onto the transport base URL.
    pub endpoint_path: String,
    /// Progress timer period.
    pub tick_interval: Duration,
    /// Upper bound of the cosmetic progress percentage.
    pub progress_cap: f64,
    /// Upper bound (exclusive) of one random progress step.
    pub max_increment: f64,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            endpoint_path: "/process".to_string(),
            tick_interval: Duration::from_millis(500),
            progress_cap: 90.0,
            max_increment: 15.0,
        }
    }
}

impl From<&PiaConfig> for ControllerSettings {
    fn from(cfg: &PiaConfig) -> Self {
        let defaults = ProgressConfig::default();
        let progress = cfg.progress.clone().unwrap_or_default();
        Self {
            endpoint_path: cfg.endpoint_path.clone(),
            tick_interval: Duration::from_millis(progress.tick_interval_ms.max(1)),
            progress_cap: finite_or(progress.cap_percent, defaults.cap_percent),
            max_increment: finite_or(progress.max_increment, defaults.max_increment),
        }
    }
}

/// TOML accepts `inf` and `nan`; neither makes sense for a percentage.
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(value, fallback, "non-finite progress setting, using default");
        fallback
    }
}

pub struct FormController<T: Transport, S: FormSurface> {
    transport: Arc<T>,
    surface: S,
    settings: ControllerSettings,
    increments: Box<dyn IncrementSource>,
    url_text: String,
    naming_mode: NamingMode,
    custom_prefix: String,
    custom_inputs: Vec<CustomNameInput>,
    phase: Phase,
}

impl<T: Transport, S: FormSurface> FormController<T, S> {
    /// Creates the controller and renders the initial form: submit disabled,
    /// default naming mode with no optional section.
    pub fn new(transport: Arc<T>, surface: S, settings: ControllerSettings) -> Self {
        let increments = Box::new(RandomIncrements::new(settings.max_increment));
        let mut controller = Self {
            transport,
            surface,
            settings,
            increments,
            url_text: String::new(),
            naming_mode: NamingMode::Default,
            custom_prefix: String::new(),
            custom_inputs: Vec::new(),
            phase: Phase::Idle,
        };
        controller.set_url_text("");
        controller.select_naming_mode(NamingMode::Default);
        controller
    }

    /// Replaces the progress step source (deterministic steps in tests).
    pub fn with_increments(mut self, increments: impl IncrementSource + 'static) -> Self {
        self.increments = Box::new(increments);
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn naming_mode(&self) -> NamingMode {
        self.naming_mode
    }

    pub fn urls(&self) -> Vec<String> {
        parse_urls(&self.url_text)
    }

    pub fn custom_inputs(&self) -> &[CustomNameInput] {
        &self.custom_inputs
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Stores the raw URL text and re-evaluates the submit control.
    pub fn set_url_text(&mut self, raw: &str) {
        self.url_text = raw.to_string();
        let enabled = self.phase == Phase::Idle && submit_enabled(raw);
        self.surface.set_submit_enabled(enabled);
    }

    /// Switches naming mode. Custom mode regenerates one input per current
    /// URL, discarding earlier edits.
    pub fn select_naming_mode(&mut self, mode: NamingMode) {
        self.naming_mode = mode;
        self.surface.show_section(mode.visible_section());
        if mode == NamingMode::Custom {
            self.custom_inputs = naming::custom_inputs(&self.urls());
            self.surface.show_custom_inputs(&self.custom_inputs);
        }
        tracing::debug!(mode = %mode, "naming mode selected");
    }

    pub fn set_custom_prefix(&mut self, prefix: &str) {
        self.custom_prefix = prefix.to_string();
    }

    /// Edits the custom filename input generated for `url` and redraws the
    /// inputs. Returns false when no input exists for that URL.
    pub fn set_custom_name(&mut self, url: &str, value: &str) -> bool {
        let mut found = false;
        for input in self.custom_inputs.iter_mut().filter(|i| i.url == url) {
            input.value = value.to_string();
            found = true;
        }
        if found {
            self.surface.show_custom_inputs(&self.custom_inputs);
        }
        found
    }

    /// Runs one submission: validate, post, render, and release the
    /// in-flight state.
    pub async fn submit(&mut self) -> Result<ResultsReport, SubmitError> {
        let urls = parse_urls(&self.url_text);
        if urls.is_empty() {
            let err = SubmitError::Validation;
            self.surface.show_error(&err.user_message());
            return Err(err);
        }

        let request = ProcessRequest::build(
            urls,
            self.naming_mode,
            &self.custom_prefix,
            &self.custom_inputs,
        );
        let body = match request.to_json() {
            Ok(body) => body,
            Err(e) => {
                let err = SubmitError::Transport(format!("failed to encode request: {e}"));
                self.surface.show_error(&err.user_message());
                return Err(err);
            }
        };
        tracing::info!(
            urls = request.urls.len(),
            mode = %request.naming_mode,
            custom_names = request.custom_names.len(),
            "submitting report request"
        );

        let mut flight = InFlight::begin(
            &mut self.surface,
            &mut self.phase,
            self.settings.progress_cap,
        );

        let transport = Arc::clone(&self.transport);
        let path = self.settings.endpoint_path.clone();
        let mut request_task =
            tokio::task::spawn_blocking(move || transport.post_json(&path, &body));

        let period = self.settings.tick_interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let joined = loop {
            tokio::select! {
                joined = &mut request_task => break joined,
                _ = ticker.tick() => flight.tick(self.increments.next_increment()),
            }
        };

        let outcome = joined
            .map_err(|e| TransportError::Task(e.to_string()))
            .and_then(|reply| reply)
            .map_err(SubmitError::from)
            .and_then(interpret_reply);

        let result = match outcome {
            Ok(response) => {
                let report = ResultsReport::from_response(&response);
                tracing::info!(
                    successes = report.successes,
                    failures = report.failures,
                    download = report.download_available,
                    "report request completed"
                );
                flight.surface().show_results(&report);
                Ok(report)
            }
            Err(err) => {
                tracing::warn!("report request failed: {}", err);
                flight.surface().show_error(&err.user_message());
                Err(err)
            }
        };
        drop(flight);
        result
    }
}

/// Decodes a reply: 2xx into the results body, anything else into a backend
/// error. An undecodable body counts as a transport failure.
fn interpret_reply(reply: HttpReply) -> Result<ProcessResponse, SubmitError> {
    let invalid_body = |e: serde_json::Error| {
        tracing::debug!(
            status = reply.status,
            body = body_preview(&reply.body),
            "undecodable response body"
        );
        SubmitError::Transport(format!(
            "invalid response body (HTTP {}): {}",
            reply.status, e
        ))
    };

    if reply.is_success() {
        return serde_json::from_slice::<ProcessResponse>(&reply.body).map_err(invalid_body);
    }

    let body = serde_json::from_slice::<ErrorResponse>(&reply.body).map_err(invalid_body)?;
    Err(SubmitError::Backend {
        status: reply.status,
        message: body.message(),
    })
}
