use std::path::PathBuf;

use egui::{Align2, Color32, Context, Key};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePromptAction {
    Save(PathBuf),
    Cancel,
}

/// Modal filename entry opened with the save key.
#[derive(Debug, Default)]
pub struct SavePrompt {
    filename: String,
    rejected: bool,
}

impl SavePrompt {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts the entered name, or flags it and stays open when it is blank.
    pub fn submit(&mut self) -> Option<SavePromptAction> {
        let filename = self.filename.trim();

        if filename.is_empty() {
            self.rejected = true;
            return None;
        }

        Some(SavePromptAction::Save(PathBuf::from(filename)))
    }

    pub fn show(&mut self, ctx: &Context) -> Option<SavePromptAction> {
        let mut action = None;

        egui::Window::new("Save view")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Filename:");
                ui.text_edit_singleline(&mut self.filename).request_focus();

                if self.rejected {
                    ui.colored_label(Color32::LIGHT_RED, "Enter a filename to save to.");
                }

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = self.submit();
                    }
                    if ui.button("Cancel").clicked() {
                        action = Some(SavePromptAction::Cancel);
                    }
                });

                if ui.input(|input| input.key_pressed(Key::Enter)) {
                    action = self.submit();
                }
                if ui.input(|input| input.key_pressed(Key::Escape)) {
                    action = Some(SavePromptAction::Cancel);
                }
            });

        action
    }
}
