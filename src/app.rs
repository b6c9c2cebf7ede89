// src/app.rs
//
// Calculatrice primitive, module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat, vue, controleur)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - ESC = C ; sondage du calcul en arrière-plan à chaque frame

pub mod controleur;
pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer A et B (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_operandes();
        }

        // calcul en arrière-plan : egui ne redessine pas sans événement
        #[cfg(not(target_arch = "wasm32"))]
        if self.sonder_tache() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
