// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter EcranCalc (pour main.rs: use crate::app::EcranCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter/Backspace sont gérés dans vue.rs ; ici seulement Échap.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::EcranCalc;`
pub use etat::EcranCalc;

use eframe::egui;

impl eframe::App for EcranCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacement, comme le bouton "C".
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.appuyer("C");
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
