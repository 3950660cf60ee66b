use eframe::egui;

mod actions;
mod command_palette;
mod field;
mod geometry;
mod help;
mod interaction;
mod render;
mod scene;
mod session;
mod settings;
mod update;

pub struct PlayEditorApp {
    session: session::Session,
    scene: scene::Frame,
    needs_compose: bool,
    pointer_inside: bool,
    settings_path: String,
    show_hints: bool,
    show_player_list: bool,
    command_palette: command_palette::CommandPalette,
    show_help: bool,
    status: Option<String>,
}

impl PlayEditorApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home).join(".config").join("playbook.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_or_default(&settings_path);
        tracing::info!(path = %settings_path, sport = settings.sport.label(), "editor started");

        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let session = session::Session::new(settings.sport);
        let scene = session.compose();
        Self {
            session,
            scene,
            needs_compose: false,
            pointer_inside: false,
            settings_path,
            show_hints: settings.show_hints,
            show_player_list: settings.show_player_list,
            command_palette: command_palette::CommandPalette::default(),
            show_help: false,
            status: None,
        }
    }
}
