// src/noyau/format.rs

/// Au-delà : notation exponentielle (sinon l’écran se remplit de zéros).
const SEUIL_EXPO_HAUT: f64 = 1e21;
/// En deçà (hors zéro) : notation exponentielle.
const SEUIL_EXPO_BAS: f64 = 1e-6;

/// Texte affiché pour un résultat flottant.
///
/// - plus courte écriture qui relit la même valeur (0.1+0.2 => 0.30000000000000004)
/// - entier sans ".0", -0 => 0
/// - 1e21, 1.5e-7 pour les extrêmes
/// - ∞ / -∞ / indéfini (division par zéro)
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "indéfini".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_positive() { "∞" } else { "-∞" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let abs = v.abs();
    if !(SEUIL_EXPO_BAS..SEUIL_EXPO_HAUT).contains(&abs) {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}
