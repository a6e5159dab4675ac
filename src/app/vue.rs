// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran deux lignes : séquence engagée (petite) + opérande / résultat (grande)
// - Pavé 4 colonnes, chaque clic => AppCalc::touche(libellé)
// - Clavier : la traduction touche -> libellé est ici (fonctions pures, testées)

use eframe::egui;

use super::etat::AppCalc;

/// Pavé : une ligne par rangée, libellés = jetons du moteur.
const PAVE: [[&str; 4]; 5] = [
    ["C", "CE", "DEL", "÷"],
    ["7", "8", "9", "×"],
    ["4", "5", "6", "-"],
    ["1", "2", "3", "+"],
    ["0", ".", "%", "="],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let ecran = self.ecran();
        let resultat = self.resultat_affiche();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide => on garde la hauteur (pas de “saut” de l’écran)
                    ui.label(egui::RichText::new(ligne(&ecran.precedent)).monospace().weak());
                    let mut courant = egui::RichText::new(ligne(&ecran.courant))
                        .monospace()
                        .size(28.0);
                    if resultat {
                        courant = courant.strong();
                    }
                    ui.label(courant);
                });
            });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for libelle in rangee {
                        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(libelle));
                        if resp.clicked() {
                            self.touche(libelle);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        let Some(d) = self.demarche() else {
            return;
        };

        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                champ_demarche(ui, "Jetons", &d.jetons);
                champ_demarche(ui, "RPN", &d.rpn);
                champ_demarche(ui, "Résultat", &d.resultat);
            });
    }
}

fn champ_demarche(ui: &mut egui::Ui, titre: &str, contenu: &str) {
    ui.add_space(4.0);
    ui.label(format!("{titre} :"));
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.monospace(contenu);
        });
}

fn ligne(texte: &str) -> &str {
    if texte.is_empty() {
        " "
    } else {
        texte
    }
}

/* ------------------------ Clavier -> libellés ------------------------ */

/// Caractère tapé (Event::Text) -> libellé du pavé.
pub fn libelle_pour_caractere(c: char) -> Option<&'static str> {
    Some(match c {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        '.' | ',' => ".",
        '+' => "+",
        '-' => "-",
        '*' | '×' => "×",
        '/' | '÷' => "÷",
        '%' => "%",
        '=' => "=",
        _ => return None,
    })
}

/// Touche “non texte” -> libellé du pavé.
pub fn libelle_pour_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("="),
        egui::Key::Backspace => Some("DEL"),
        egui::Key::Delete => Some("CE"),
        egui::Key::Escape => Some("C"),
        _ => None,
    }
}
