// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir la séquence infixe de Jeton en RPN (postfix)
// - Puis évaluer la RPN en f64
//
// Règles:
// - Pas de parenthèses, pas de moins unaire.
// - Tous les opérateurs sont associatifs à gauche : on dépile tant que
//   précédence(sommet) >= précédence(entrant).

use tracing::trace;

use super::erreur::ErreurCalcul;
use super::jetons::{format_jetons, Jeton, Operateur};

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, ×, 4]
///   rpn:    [2, 3, 4, ×, +]
///
/// Ne valide pas l’alternance opérande/opérateur : c’est eval_rpn qui refuse.
pub fn to_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Operateur> = Vec::new();

    for jeton in jetons {
        match jeton {
            Jeton::Operande(_) => out.push(jeton.clone()),
            Jeton::Operateur(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(Jeton::Operateur(top));
                }
                ops.push(*op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(Jeton::Operateur(op));
    }

    trace!(rpn = %format_jetons(&out), "conversion RPN");
    out
}

/// Évalue une RPN.
///
/// - Opérande : lu en f64 (texte non numérique => OperandeInvalide)
/// - Opérateur : dépile b puis a, empile a OP b
/// - À la fin, il doit rester exactement une valeur.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for jeton in rpn {
        match jeton {
            Jeton::Operande(texte) => st.push(lire_nombre(texte)?),
            Jeton::Operateur(op) => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionMalformee)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionMalformee)?;
                st.push(op.appliquer(a, b));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::ExpressionMalformee),
    }
}

/// Lecture d’un opérande tapé (chiffres + au plus un point).
///
/// Relit aussi "∞" / "-∞" : c’est ce que "%" dépose sur un opérande qui déborde.
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurCalcul> {
    match texte {
        "∞" => Ok(f64::INFINITY),
        "-∞" => Ok(f64::NEG_INFINITY),
        _ => texte
            .parse::<f64>()
            .map_err(|_| ErreurCalcul::OperandeInvalide(texte.to_string())),
    }
}
