// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est lu ici, une seule fois par frame, puis traduit en libellés
//   de pavé par vue.rs (même chemin que les clics).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for libelle in libelles_clavier(ctx) {
            // Échap = AC (efface aussi le message d’erreur)
            if libelle == "C" {
                self.reset_total();
            } else {
                self.touche(libelle);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Événements clavier de la frame -> libellés de pavé, dans l’ordre de frappe.
fn libelles_clavier(ctx: &egui::Context) -> Vec<&'static str> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => {
                    out.extend(t.chars().filter_map(vue::libelle_pour_caractere));
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => out.extend(vue::libelle_pour_touche(*key)),
                _ => {}
            }
        }
        out
    })
}
