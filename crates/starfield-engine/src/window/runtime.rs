use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::LogicalPresentation;
use crate::core::{App as CoreApp, AppControl, AppOutcome, FrameCtx, InitCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,

    /// Fixed logical resolution letterboxed into the window.
    ///
    /// `None` maps draw coordinates 1:1 onto logical window pixels.
    pub presentation: Option<LogicalPresentation>,

    /// `(min, max)` bounds applied to each frame delta. `None` reports raw deltas.
    pub frame_dt_clamp: Option<(Duration, Duration)>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "starfield".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            resizable: true,
            presentation: None,
            frame_dt_clamp: Some((Duration::from_micros(100), Duration::from_millis(250))),
        }
    }
}

impl RuntimeConfig {
    fn frame_clock(&self) -> FrameClock {
        match self.frame_dt_clamp {
            Some((dt_min, dt_max)) => FrameClock::with_clamps(dt_min, dt_max),
            None => FrameClock::unclamped(),
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit_requested: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until the window closes or the app asks to exit.
    ///
    /// Returns the initialization error when the window, the GPU context or
    /// `App::init` failed; `App::on_quit` has already been called by then.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        let run = event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error");

        state.shutdown();
        run?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    fatal: Option<anyhow::Error>,
    exit_requested: bool,
    quit_reported: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            fatal: None,
            exit_requested: false,
            quit_reported: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("initialization failed: {err:#}");
        self.fatal = Some(err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        log::debug!("window created: {:?} {:?}", window.id(), window.inner_size());

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            clock: self.config.frame_clock(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
            .try_build()
    }

    fn init_app(&mut self, entry: &mut WindowEntry) -> Result<()> {
        let app = &mut self.app;

        entry.with_mut(|fields| {
            let mut ctx = InitCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
            };
            app.init(&mut ctx)
        })
            .context("application init failed")?;

        // Time spent in init must not show up as the first frame delta.
        entry.with_clock_mut(|clock| clock.reset());
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let presentation = self.config.presentation;
        let (app, entry) = (&mut self.app, &mut self.entry);

        let Some(entry) = entry.as_mut() else {
            return;
        };

        let mut runtime_ctx = RuntimeCtx::default();

        let control = entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();
            log::trace!("frame {} dt={:?}", ft.frame_index, ft.dt);

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time: ft,
                runtime: &mut runtime_ctx,
                presentation,
            };

            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit || runtime_ctx.exit_requested() {
            self.request_exit(event_loop);
        }
    }

    /// Reports the outcome to the app once, then releases the window and GPU.
    fn shutdown(&mut self) {
        if self.quit_reported {
            return;
        }
        self.quit_reported = true;

        let outcome = if self.fatal.is_some() {
            AppOutcome::Failure
        } else {
            AppOutcome::Success
        };

        log::info!("shutting down ({outcome:?})");
        self.app.on_quit(outcome);
        self.entry = None;
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        let mut entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => return self.fail(event_loop, e),
        };

        if let Err(e) = self.init_app(&mut entry) {
            // Release GPU resources before reporting the failure.
            drop(entry);
            return self.fail(event_loop, e);
        }

        log::info!("window ready: {:?}", self.config.title);
        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_ref() else {
            return;
        };
        if entry.borrow_window().id() != window_id {
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    log::debug!("resized to {}x{}", new_size.width, new_size.height);
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_clamps_frame_delta() {
        let config = RuntimeConfig::default();
        assert_eq!(
            config.frame_dt_clamp,
            Some((Duration::from_micros(100), Duration::from_millis(250)))
        );
        assert!(config.resizable);
        assert!(config.presentation.is_none());
    }

    #[test]
    fn runtime_ctx_records_exit() {
        let mut ctx = RuntimeCtx::default();
        assert!(!ctx.exit_requested());
        ctx.exit();
        assert!(ctx.exit_requested());
    }
}
