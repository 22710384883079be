mod app;

use app::SchemeEditorApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Game Schemes",
        options,
        Box::new(|cc| Ok(Box::new(SchemeEditorApp::new(cc)))),
    )
}
