// src/noyau/erreur.rs
//
// Erreurs du moteur. Les “no-op silencieux” (second point, DEL sur vide, % sur vide,
// “=” avec moins de 2 jetons) ne passent PAS par ici : ce sont des Ok(()).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// ajouter_chiffre() n’accepte que 0-9 et '.'.
    #[error("caractère non numérique: '{0}'")]
    ChiffreInvalide(char),

    /// Libellé de touche non reconnu (ni chiffre, ni commande).
    #[error("touche inconnue: {0:?}")]
    JetonInconnu(String),

    /// Opérande engagé qui ne se lit pas comme un nombre (ex: "." seul).
    #[error("opérande invalide: {0:?}")]
    OperandeInvalide(String),

    /// Suite de jetons qui ne forme pas opérande/opérateur/.../opérande.
    #[error("expression invalide")]
    ExpressionMalformee,
}
