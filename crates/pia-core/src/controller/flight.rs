//! In-flight guard: owns the progress model and releases the in-flight UI
//! state when dropped.

use super::{FormSurface, Phase};
use crate::progress::ProgressModel;

/// Held for the duration of one request. Dropping it (normal return, early
/// return, or a cancelled submission future) hides progress and re-enables
/// submission exactly once.
pub(super) struct InFlight<'a, S: FormSurface> {
    surface: &'a mut S,
    phase: &'a mut Phase,
    progress: ProgressModel,
}

impl<'a, S: FormSurface> InFlight<'a, S> {
    pub(super) fn begin(surface: &'a mut S, phase: &'a mut Phase, cap: f64) -> Self {
        *phase = Phase::InFlight;
        let progress = ProgressModel::new(cap);
        surface.set_submit_enabled(false);
        surface.progress_started(progress.snapshot());
        surface.clear_output();
        tracing::debug!("entered in-flight state");
        Self {
            surface,
            phase,
            progress,
        }
    }

    pub(super) fn tick(&mut self, increment: f64) {
        let snapshot = self.progress.advance(increment);
        self.surface.progress_updated(snapshot);
    }

    pub(super) fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }
}

impl<S: FormSurface> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        self.surface.progress_finished();
        *self.phase = Phase::Idle;
        self.surface.set_submit_enabled(true);
        tracing::debug!("left in-flight state");
    }
}
