//! src/noyau/moteur.rs
//!
//! Moteur d’expression incrémental.
//!
//! Rôle : accumuler les touches (chiffres, opérateurs, commandes), tenir
//! l’opérande en cours + la séquence engagée, puis évaluer sur "=".
//!
//! Contrats :
//! - L’opérande en cours contient au plus un point décimal.
//! - Les no-op silencieux (second point, DEL sur vide, % sur vide, "=" avec moins
//!   de 2 jetons) renvoient Ok(()) / Ok(None) sans toucher à l’état.
//! - Une évaluation refusée (séquence malformée) laisse l’état intact.
//! - Aucun accès direct à l’affichage : on notifie des observateurs avec un `Affichage`.

use std::fmt;
use std::mem;

use tracing::{debug, trace, warn};

use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::jetons::{format_jetons, Commande, Jeton};
use super::rpn::{eval_rpn, lire_nombre, to_rpn};

/// Mode observable du moteur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Saisie / édition normale.
    Saisie,
    /// Juste après un "=" réussi : `texte` est le résultat affiché.
    Resultat { texte: String },
}

/// Instantané de ce que l’affichage doit montrer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Affichage {
    /// Opérande en cours, ou résultat après "=".
    pub courant: String,
    /// Séquence engagée, jetons séparés par un espace.
    pub precedent: String,
}

/// Trace de la dernière évaluation réussie (panneau “Démarche”).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub resultat: String,
}

type Observateur = Box<dyn FnMut(&Affichage)>;

pub struct Moteur {
    saisie: String,
    sequence: Vec<Jeton>,
    mode: Mode,
    demarche: Option<Demarche>,
    observateurs: Vec<Observateur>,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            saisie: String::new(),
            sequence: Vec::new(),
            mode: Mode::Saisie,
            demarche: None,
            observateurs: Vec::new(),
        }
    }
}

impl fmt::Debug for Moteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Moteur")
            .field("saisie", &self.saisie)
            .field("sequence", &self.sequence)
            .field("mode", &self.mode)
            .field("demarche", &self.demarche)
            .finish_non_exhaustive()
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn saisie(&self) -> &str {
        &self.saisie
    }

    pub fn sequence(&self) -> &[Jeton] {
        &self.sequence
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn demarche(&self) -> Option<&Demarche> {
        self.demarche.as_ref()
    }

    pub fn affichage(&self) -> Affichage {
        let courant = match &self.mode {
            Mode::Resultat { texte } => texte.clone(),
            Mode::Saisie => self.saisie.clone(),
        };
        Affichage {
            courant,
            precedent: format_jetons(&self.sequence),
        }
    }

    /// Enregistre un observateur appelé à chaque changement d’état.
    pub fn observer(&mut self, f: impl FnMut(&Affichage) + 'static) {
        self.observateurs.push(Box::new(f));
    }

    /* ------------------------ Entrées ------------------------ */

    /// Aiguillage d’un libellé de touche brut (bouton ou clavier).
    pub fn touche(&mut self, libelle: &str) -> Result<(), ErreurCalcul> {
        let mut chars = libelle.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return self.ajouter_chiffre(c);
            }
        }
        let cmd: Commande = libelle.parse()?;
        self.appliquer(cmd)
    }

    /// Ajoute un chiffre ou le point décimal à l’opérande en cours.
    pub fn ajouter_chiffre(&mut self, c: char) -> Result<(), ErreurCalcul> {
        if !(c.is_ascii_digit() || c == '.') {
            return Err(ErreurCalcul::ChiffreInvalide(c));
        }

        let sortie = self.quitter_resultat();

        if c == '.' && self.saisie.contains('.') {
            debug!(saisie = %self.saisie, "second point ignoré");
            if sortie {
                self.notifier();
            }
            return Ok(());
        }

        self.saisie.push(c);
        debug!(saisie = %self.saisie, "chiffre");
        self.notifier();
        Ok(())
    }

    /// Applique une commande ("=", C, CE, DEL, %, ou un opérateur).
    pub fn appliquer(&mut self, cmd: Commande) -> Result<(), ErreurCalcul> {
        debug!(?cmd, "commande");

        // Une nouvelle saisie commence après un résultat, sauf pour "=" et "%" :
        // après un résultat la saisie est vide, donc "%" reste un no-op silencieux.
        if !matches!(cmd, Commande::Egal | Commande::Pourcent) {
            self.quitter_resultat();
        }

        match cmd {
            Commande::Egal => return self.evaluer().map(|_| ()),

            Commande::Effacer => {
                self.saisie.clear();
                self.sequence.clear();
                self.demarche = None;
            }

            Commande::EffacerEntree => self.saisie.clear(),

            Commande::Suppr => {
                self.saisie.pop();
            }

            Commande::Pourcent => {
                if !self.pourcent() {
                    return Ok(());
                }
            }

            Commande::Operateur(op) => {
                if !self.saisie.is_empty() {
                    let operande = mem::take(&mut self.saisie);
                    self.sequence.push(Jeton::Operande(operande));
                }
                // Pas de contrôle d’alternance ici : "5 + +" est refusé à l’évaluation.
                self.sequence.push(Jeton::Operateur(op));
            }
        }

        self.notifier();
        Ok(())
    }

    /// Évalue la séquence (+ l’opérande en cours).
    ///
    /// - Ok(None)    : moins de 2 jetons engagés, rien ne change
    /// - Ok(Some(v)) : résultat affiché, séquence vidée, mode Resultat
    /// - Err(_)      : séquence malformée, état inchangé
    pub fn evaluer(&mut self) -> Result<Option<f64>, ErreurCalcul> {
        if self.sequence.len() < 2 {
            debug!(jetons = self.sequence.len(), "pas assez de jetons pour évaluer");
            return Ok(None);
        }

        let mut infixe = self.sequence.clone();
        if !self.saisie.is_empty() {
            infixe.push(Jeton::Operande(self.saisie.clone()));
        }

        let rpn = to_rpn(&infixe);
        let valeur = eval_rpn(&rpn).map_err(|e| {
            warn!(expression = %format_jetons(&infixe), erreur = %e, "évaluation refusée");
            e
        })?;

        let texte = format_nombre(valeur);
        debug!(expression = %format_jetons(&infixe), resultat = %texte, "évaluation");

        self.demarche = Some(Demarche {
            jetons: format_jetons(&infixe),
            rpn: format_jetons(&rpn),
            resultat: texte.clone(),
        });
        self.saisie.clear();
        self.sequence.clear();
        self.mode = Mode::Resultat { texte };

        self.notifier();
        Ok(Some(valeur))
    }

    /* ------------------------ Interne ------------------------ */

    /// RESULT_SHOWN -> ACCUMULATING. Renvoie true si le mode a changé.
    fn quitter_resultat(&mut self) -> bool {
        if matches!(self.mode, Mode::Saisie) {
            return false;
        }
        self.saisie.clear();
        self.mode = Mode::Saisie;
        true
    }

    /// Remplace l’opérande en cours par sa valeur / 100. Renvoie true si modifié.
    ///
    /// Autorisé même après un opérateur engagé : seule l’entrée courante change.
    fn pourcent(&mut self) -> bool {
        if self.saisie.is_empty() {
            return false;
        }
        match lire_nombre(&self.saisie) {
            Ok(v) => {
                self.saisie = format_nombre(v / 100.0);
                true
            }
            Err(_) => {
                debug!(saisie = %self.saisie, "% ignoré (opérande illisible)");
                false
            }
        }
    }

    fn notifier(&mut self) {
        let affichage = self.affichage();
        trace!(courant = %affichage.courant, precedent = %affichage.precedent, "notification");
        for obs in &mut self.observateurs {
            obs(&affichage);
        }
    }
}
