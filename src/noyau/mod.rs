//! Noyau — moteur d’expression incrémental
//!
//! Organisation interne :
//! - jetons.rs  : Operateur / Jeton / Commande (+ lecture des libellés)
//! - rpn.rs     : shunting-yard + évaluation de la RPN
//! - format.rs  : affichage d’un résultat flottant
//! - erreur.rs  : ErreurCalcul
//! - moteur.rs  : état (saisie + séquence + mode) et opérations

pub mod erreur;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use moteur::{Affichage, Demarche, Moteur};
