mod app;
mod model;

fn main() -> eframe::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("playbook=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Sports Play Simulator")
            .with_inner_size([1100.0, 1000.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sports Play Simulator",
        native_options,
        Box::new(|cc| Ok(Box::new(app::PlayEditorApp::new(cc)))),
    )
}
