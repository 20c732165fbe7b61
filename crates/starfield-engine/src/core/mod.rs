//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! applications: the four-callback `App` lifecycle and the contexts handed to
//! each callback.

mod app;
mod ctx;

pub use app::{App, AppControl, AppOutcome};
pub use ctx::{FrameCtx, InitCtx, WindowCtx};
