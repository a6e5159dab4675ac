// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

/// Opérateurs binaires de la calculatrice (tous associatifs à gauche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché (ligne “précédente”, démarche).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    /// a OP b en flottant. Division par zéro => ∞ ou NaN (pas d’erreur).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = ErreurCalcul;

    /// Accepte les symboles des boutons (× ÷) et les alias clavier (* /).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operateur::Plus),
            "-" => Ok(Operateur::Moins),
            "×" | "*" => Ok(Operateur::Fois),
            "÷" | "/" => Ok(Operateur::Divise),
            _ => Err(ErreurCalcul::JetonInconnu(s.to_string())),
        }
    }
}

/// Jeton engagé dans la séquence : opérande (texte tel que tapé) ou opérateur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Operande(String),
    Operateur(Operateur),
}

impl Jeton {
    pub fn texte(&self) -> &str {
        match self {
            Jeton::Operande(t) => t,
            Jeton::Operateur(op) => op.symbole(),
        }
    }
}

/// Touches “de contrôle” (tout ce qui n’est pas chiffre ou point).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// "="
    Egal,
    /// "C" : tout effacer
    Effacer,
    /// "CE" : effacer l’entrée seulement
    EffacerEntree,
    /// "DEL" : retirer le dernier caractère
    Suppr,
    /// "%"
    Pourcent,
    Operateur(Operateur),
}

impl FromStr for Commande {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Commande::Egal),
            "C" => Ok(Commande::Effacer),
            "CE" => Ok(Commande::EffacerEntree),
            "DEL" => Ok(Commande::Suppr),
            "%" => Ok(Commande::Pourcent),
            _ => s.parse::<Operateur>().map(Commande::Operateur),
        }
    }
}

/// Format utilitaire (affichage/“démarche”) : jetons séparés par un espace.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons.iter().map(Jeton::texte).collect::<Vec<_>>().join(" ")
}
