// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même EcranCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, grille 4 colonnes, panneau secondaire replié
//   par défaut (ouvert via la touche "fx")
// - Clavier : Enter évalue, Backspace retire le dernier jeton
//
// La vue ne décide de rien : chaque clic part dans EcranCalc::appuyer
// avec le libellé du bouton, exactement comme un appui tactile.

use eframe::egui;

use super::etat::{EcranCalc, EtatEcran};
use crate::noyau::touches::{LIB_MODE_ANGLE, LIB_PANNEAU};

/// Pavé de base, ligne par ligne.
const PAVE_BASE: [[&str; 4]; 5] = [
    ["C", "±", "%", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "−"],
    ["1", "2", "3", "+"],
    [LIB_PANNEAU, "0", ".", "="],
];

/// Panneau secondaire (replié par défaut). Les touches trig/log/1/x/x!
/// sont réservées : affichées, mais sans effet tant qu'elles ne sont pas
/// câblées.
const PAVE_SECONDAIRE: [[&str; 4]; 5] = [
    ["(", ")", "π", "e"],
    ["√", "x²", "xʸ", LIB_MODE_ANGLE],
    ["sin", "cos", "tan", "log"],
    ["ln", "1/x", "x!", "AC"],
    ["DEL", "", "", ""],
];

impl EcranCalc {
    /// UI principale : à appeler depuis eframe::App::update(...).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.raccourcis_clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if self.vue.panneau_ouvert {
                    self.ui_pave(ui, "pave_secondaire", &PAVE_SECONDAIRE);
                    ui.add_space(6.0);
                }

                self.ui_pave(ui, "pave_base", &PAVE_BASE);
            });
    }

    /// Les deux sorties de l'écran : l'expression en cours et le dernier
    /// résultat (en gros, rouge en cas d'erreur).
    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let entree = if self.entree.is_empty() {
                        " "
                    } else {
                        self.entree.as_str()
                    };
                    ui.label(egui::RichText::new(entree).monospace().size(18.0));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let couleur = if self.etat == EtatEcran::Erreur {
                        ui.visuals().error_fg_color
                    } else {
                        ui.visuals().strong_text_color()
                    };
                    ui.label(
                        egui::RichText::new(&self.resultat)
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, id: &str, lignes: &[[&str; 4]]) {
        egui::Grid::new(id)
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for libelle in ligne {
                        if libelle.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton(ui, libelle);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str) {
        // Le bouton de mode affiche le mode courant (DEG/RAD) mais route
        // toujours son libellé fixe.
        let affiche = if libelle == LIB_MODE_ANGLE {
            self.vue.mode_angle.libelle()
        } else {
            libelle
        };

        let resp = ui.add_sized(
            [64.0, 44.0],
            egui::Button::new(egui::RichText::new(affiche).size(20.0)),
        );
        if resp.clicked() {
            self.appuyer(libelle);
        }
    }

    /// Clavier physique : Enter évalue, Backspace retire le dernier jeton.
    /// (Échap est géré au niveau App, comme le bouton C.)
    fn raccourcis_clavier(&mut self, ui: &mut egui::Ui) {
        let (entrer, retour) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        if entrer {
            self.appuyer("=");
        }
        if retour {
            self.appuyer("DEL");
        }
    }
}
