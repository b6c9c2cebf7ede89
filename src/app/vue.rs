// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Deux champs (A, B), une grille d’opérations, une zone résultat.
// Les boutons ne font qu’appeler `declencher` (controleur.rs).
//
// Note :
// - natif : chaque opération tourne en arrière-plan ; grille grisée + Spinner
//   tant qu’elle calcule
// - Enter dans un champ ne déclenche rien (pas d’opération “par défaut”)

use eframe::egui;

use calculatrice_primitive::config::DECIMALES_MAX;

use super::controleur::{Arite, Operation};
use super::etat::AppCalc;

/// Boutons d’opération par ligne.
const COLONNES: usize = 6;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice primitive");
                ui.add_space(6.0);

                self.ui_operandes(ui);

                ui.add_space(8.0);
                self.ui_actions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_operations(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);
            });
    }

    fn ui_operandes(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("operandes")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("A :");
                let resp_a = ui.add(
                    egui::TextEdit::singleline(&mut self.operande_a)
                        .desired_width(260.0)
                        .hint_text("entier, ou réel pour eˣ / sin / cos / arctan")
                        .id_salt("operande_a")
                        .code_editor(),
                );
                ui.end_row();

                ui.label("B :");
                ui.add(
                    egui::TextEdit::singleline(&mut self.operande_b)
                        .desired_width(260.0)
                        .hint_text("entier (opérations à deux opérandes)")
                        .id_salt("operande_b")
                        .code_editor(),
                );
                ui.end_row();

                if self.focus_a {
                    resp_a.request_focus();
                    self.focus_a = false;
                }
            });
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // C = opérandes seulement ; CLR = résultat seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface A et B", Action::ClearOperandes);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut fixes = self.reglages.decimales.is_some();
            let mut d = self.reglages.decimales.unwrap_or(6) as u32;

            let coche = ui
                .checkbox(&mut fixes, "Décimales fixes")
                .on_hover_text("Résultats réels arrondis à l’affichage");
            let glisse = ui.add_enabled(
                fixes,
                egui::DragValue::new(&mut d).speed(1).range(0..=DECIMALES_MAX as u32),
            );

            if coche.changed() || glisse.changed() {
                self.set_decimales(fixes.then_some(d as usize));
            }
        });
    }

    fn ui_operations(&mut self, ui: &mut egui::Ui) {
        let en_cours = self.calcul_en_cours();

        egui::Grid::new("operations")
            .num_columns(COLONNES)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, op) in Operation::TOUTES.into_iter().enumerate() {
                    self.bouton_operation(ui, op, en_cours.is_none());
                    if (i + 1) % COLONNES == 0 {
                        ui.end_row();
                    }
                }
            });

        if let Some(op) = en_cours {
            let texte = match op {
                Operation::Pi => format!("π : {} itérations en cours…", self.reglages.iterations_pi),
                _ => format!("{} en cours…", op.nom()),
            };
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label(texte);
            });
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        let titre = match self.derniere {
            Some(op) => format!("Résultat ({}) :", op.nom()),
            None => "Résultat :".to_string(),
        };
        ui.label(titre);
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // lecture seule, sélectionnable pour copier
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.add(
                        egui::Label::new(egui::RichText::new(contenu).monospace())
                            .selectable(true),
                    );
                });
            });
    }

    fn bouton_operation(&mut self, ui: &mut egui::Ui, op: Operation, actif: bool) {
        let aide = match op.arite() {
            Arite::Binaire => format!("{} (utilise A et B)", op.infobulle()),
            Arite::Unaire => format!("{} (utilise A)", op.infobulle()),
            Arite::Aucune => op.infobulle().to_string(),
        };

        let resp = ui
            .add_enabled_ui(actif, |ui| {
                ui.add_sized([56.0, 32.0], egui::Button::new(op.libelle()))
            })
            .inner
            .on_hover_text(aide);

        if resp.clicked() {
            self.declencher(op);
            self.focus_a = true;
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearOperandes => self.clear_operandes(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearOperandes,
    ClearResultats,
    ResetTotal,
}
