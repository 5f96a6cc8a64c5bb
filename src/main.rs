use eframe::egui;
use flagship::app::{FlagshipApp, LaunchOptions};
use flagship::logging;
use flagship::settings::Settings;

fn main() -> anyhow::Result<()> {
    let options = LaunchOptions::from_args(std::env::args().skip(1));
    logging::init_tracing(options.debug);
    for arg in &options.unknown {
        tracing::warn!("Ignoring argument: {}", arg);
    }

    let settings = Settings::load();
    let (width, height) = settings.window_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Flagship Events")
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Flagship Events",
        native_options,
        Box::new(|cc| Ok(Box::new(FlagshipApp::new(cc, settings, options)?))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start the event showcase: {}", e))
}

fn load_icon() -> egui::IconData {
    // Three dots, the middle one lit
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];
    let centers = [16.0f32, 32.0, 48.0];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            for (i, cx) in centers.iter().enumerate() {
                let dx = x as f32 - cx;
                let dy = y as f32 - 32.0;
                if (dx * dx + dy * dy).sqrt() < 6.0 {
                    let (r, g, b) = if i == 1 { (248, 113, 113) } else { (153, 27, 27) };
                    rgba[idx] = r;
                    rgba[idx + 1] = g;
                    rgba[idx + 2] = b;
                    rgba[idx + 3] = 255;
                }
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
