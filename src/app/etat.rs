//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur, recevoir ses notifications (écran) et garder
//! le dernier message d’erreur à afficher.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Moteur::touche`.
//! - L’écran n’est mis à jour QUE par l’observateur du moteur.
//! - Une touche acceptée efface l’erreur précédente.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::noyau::moteur::Mode;
use crate::noyau::{Affichage, Demarche, Moteur};

#[derive(Debug)]
pub struct AppCalc {
    moteur: Moteur,

    // --- sorties ---
    ecran: Rc<RefCell<Affichage>>, // alimenté par l’observateur du moteur
    pub erreur: String,            // message d’erreur (touche refusée, expression invalide)
}

impl Default for AppCalc {
    fn default() -> Self {
        let ecran: Rc<RefCell<Affichage>> = Rc::default();
        let mut moteur = Moteur::new();
        {
            let ecran = Rc::clone(&ecran);
            moteur.observer(move |a| *ecran.borrow_mut() = a.clone());
        }

        Self {
            moteur,
            ecran,
            erreur: String::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Une touche (bouton ou clavier), libellé brut : "7", ".", "×", "=", "DEL"…
    pub fn touche(&mut self, libelle: &str) {
        match self.moteur.touche(libelle) {
            Ok(()) => self.erreur.clear(),
            Err(e) => {
                debug!(
                    libelle,
                    erreur = %e,
                    saisie = self.moteur.saisie(),
                    jetons = self.moteur.sequence().len(),
                    "touche refusée"
                );
                self.set_erreur(e.to_string());
            }
        }
    }

    /// AC clavier (Échap) : comme "C", et l’erreur disparaît aussi.
    pub fn reset_total(&mut self) {
        self.touche("C");
        self.erreur.clear();
    }

    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn ecran(&self) -> Affichage {
        self.ecran.borrow().clone()
    }

    pub fn demarche(&self) -> Option<&Demarche> {
        self.moteur.demarche()
    }

    /// true juste après un "=" réussi (la vue met le résultat en valeur).
    pub fn resultat_affiche(&self) -> bool {
        matches!(self.moteur.mode(), Mode::Resultat { .. })
    }
}
