use eframe::egui;

pub(super) fn draw_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Help & Shortcuts")
        .open(open)
        .resizable(true)
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.heading("Keyboard Shortcuts");
            ui.separator();

            ui.label("General");
            help_row(ui, "⌘⇧P", "Open command palette");
            help_row(ui, "F1", "Show this window");
            help_row(ui, "1 / 2 / 3", "Football / Basketball / Soccer");

            ui.add_space(10.0);
            ui.label("Players");
            help_row(ui, "O", "Add offense player");
            help_row(ui, "X", "Add defense player");
            help_row(ui, "Delete / Backspace", "Remove selected player");
            help_row(ui, "Drag", "Move a player");
            help_row(ui, "Click", "Select or deselect a player");

            ui.add_space(10.0);
            ui.label("Routes");
            help_row(ui, "D", "Toggle draw mode (needs a selected player)");
            help_row(ui, "Click field", "Add a route point while drawing");
            help_row(ui, "Click player", "Save the current route and switch player");
            help_row(ui, "Enter", "Finish route");
        });
}

fn help_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [130.0, 16.0],
            egui::Label::new(egui::RichText::new(shortcut).monospace().strong()),
        );
        ui.label(description);
    });
}
