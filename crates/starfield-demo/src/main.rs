use starfield_demo::{StarfieldApp, StarfieldConfig};
use starfield_engine::coords::LogicalPresentation;
use starfield_engine::device::GpuInit;
use starfield_engine::logging::{init_logging, LoggingConfig};
use starfield_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run() {
        log::error!("starfield failed: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = StarfieldConfig::default();
    let size = config.logical_size;

    let runtime = RuntimeConfig {
        title: "Starfield".to_string(),
        initial_size: LogicalSize::new(f64::from(size.width), f64::from(size.height)),
        resizable: true,
        presentation: Some(LogicalPresentation::new(size.width, size.height)),
        // Point motion uses the raw wall-clock delta.
        frame_dt_clamp: None,
    };

    // Linear surface so byte colors and additive glow reach the display unchanged.
    let gpu = GpuInit { prefer_srgb: false, ..GpuInit::default() };

    log::info!("starting starfield with {} points", config.point_count);
    Runtime::run(runtime, gpu, StarfieldApp::new(config)?)
}
