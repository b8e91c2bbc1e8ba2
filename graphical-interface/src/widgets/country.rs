use map_engine::types::{CountryCode, CountryStatus};

/// A window with details about the selected country.
///
/// The page embedding the map uses the selection callback to show its own
/// detail panel; this widget is the in-app equivalent.
pub struct WidgetCountry {
    pub selected_code: CountryCode,
    name: String,
}

impl WidgetCountry {
    pub fn new(selected_code: CountryCode, name: String) -> Self {
        Self {
            selected_code,
            name,
        }
    }

    /// Shows the window.
    ///
    /// # Returns
    /// * `bool` - `false` once the user closes the window; the caller then
    ///   clears the selection.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        status: CountryStatus,
        refreshed_at: Option<&str>,
    ) -> bool {
        let mut open = true;

        egui::Window::new(&self.name)
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Code: {}", self.selected_code)).size(16.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("Books: {}", status.label()))
                            .size(16.0)
                            .strong(),
                    );
                    if status.is_available() {
                        ui.label("Open the library to read about this country.");
                    }
                    if let Some(refreshed_at) = refreshed_at {
                        ui.add_space(5.0);
                        ui.label(
                            egui::RichText::new(format!("Status as of {}", refreshed_at))
                                .size(12.0)
                                .weak(),
                        );
                    }
                });
            });

        open
    }
}
