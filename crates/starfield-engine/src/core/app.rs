use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// How the run ended, as reported to [`App::on_quit`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppOutcome {
    Success,
    Failure,
}

/// Application contract implemented by the binaries.
///
/// Callbacks run sequentially on the event-loop thread: `init` once after the
/// window and GPU exist, `on_window_event` per event, `on_frame` per redraw and
/// `on_quit` exactly once at shutdown.
pub trait App {
    /// Creates GPU-side resources. An error aborts startup.
    fn init(&mut self, ctx: &mut InitCtx<'_, '_>) -> Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called for window events. Close requests end the run regardless of the
    /// returned value.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once, before the window and GPU resources are released.
    fn on_quit(&mut self, outcome: AppOutcome) {
        let _ = outcome;
    }
}
