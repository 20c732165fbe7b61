//! Opens a window, keeps it up for a fixed time, then exits.

use std::time::Duration;

use starfield_engine::core::{App, AppControl, AppOutcome, FrameCtx};
use starfield_engine::device::GpuInit;
use starfield_engine::logging::{init_logging, LoggingConfig};
use starfield_engine::paint::Color;
use starfield_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

const HOLD: Duration = Duration::from_secs(5);

struct BlankWindow {
    hold: Duration,
}

impl App for BlankWindow {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.time.since_start >= self.hold {
            log::info!("held window for {:?}", self.hold);
            ctx.runtime.exit();
        }

        ctx.render(Color::black(), |_, _| {})
    }

    fn on_quit(&mut self, outcome: AppOutcome) {
        log::debug!("blank window closed ({outcome:?})");
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Basic Window".to_string(),
        initial_size: LogicalSize::new(320.0, 240.0),
        resizable: true,
        ..RuntimeConfig::default()
    };

    if let Err(e) = Runtime::run(config, GpuInit::default(), BlankWindow { hold: HOLD }) {
        log::error!("blank window failed: {e:#}");
        std::process::exit(1);
    }
}
