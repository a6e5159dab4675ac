//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur avec des touches aléatoires sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche :
//!   - au plus un point dans l’opérande en cours
//!   - "=" refusé => état strictement inchangé
//!   - "=" réussi => séquence vide + mode Resultat
//! - expressions bien formées : résultat identique à une évaluation de référence

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::format::format_nombre;
use super::moteur::{Mode, Moteur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

const TOUCHES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "=", "C", "CE",
    "DEL", "%",
];

fn gen_touche(rng: &mut Rng) -> &'static str {
    TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]
}

fn gen_operande(rng: &mut Rng) -> String {
    let entier = rng.pick(1000);
    match rng.pick(3) {
        0 => format!("{entier}.{}", rng.pick(100)),
        _ => format!("{entier}"),
    }
}

fn gen_operateur(rng: &mut Rng) -> &'static str {
    ["+", "-", "×", "÷"][rng.pick(4) as usize]
}

/// Référence : d’abord les × ÷ de gauche à droite, puis les + - de gauche à droite.
fn reference(operandes: &[f64], operateurs: &[&str]) -> f64 {
    let mut termes = vec![operandes[0]];
    let mut additifs = Vec::new();

    for (op, &x) in operateurs.iter().zip(&operandes[1..]) {
        match *op {
            "×" => *termes.last_mut().unwrap() *= x,
            "÷" => *termes.last_mut().unwrap() /= x,
            _ => {
                additifs.push(*op);
                termes.push(x);
            }
        }
    }

    let mut acc = termes[0];
    for (op, &t) in additifs.iter().zip(&termes[1..]) {
        if *op == "+" {
            acc += t;
        } else {
            acc -= t;
        }
    }
    acc
}

fn tape_texte(m: &mut Moteur, s: &str) {
    for c in s.chars() {
        m.ajouter_chiffre(c).unwrap();
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_touches_aleatoires_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut m = Moteur::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..5000 {
        budget(t0, max);

        let t = gen_touche(&mut rng);
        let avant_affichage = m.affichage();
        let avant_sequence = m.sequence().to_vec();
        let avant_saisie = m.saisie().to_string();

        match m.touche(t) {
            Ok(()) => {
                // un "=" répété sur un résultat est un no-op : pas un nouveau résultat
                let nouveau_resultat = t == "="
                    && avant_sequence.len() >= 2
                    && matches!(m.mode(), Mode::Resultat { .. });
                if t == "=" && avant_sequence.len() < 2 {
                    assert_eq!(m.affichage(), avant_affichage);
                }
                if nouveau_resultat {
                    assert!(m.sequence().is_empty());
                    assert_eq!(m.affichage().precedent, "");
                    seen_ok += 1;
                }
            }
            Err(e) => {
                assert_eq!(t, "=", "seul \"=\" peut échouer ici: {e}");
                assert!(
                    matches!(
                        e,
                        ErreurCalcul::ExpressionMalformee | ErreurCalcul::OperandeInvalide(_)
                    ),
                    "erreur non attendue: {e}"
                );
                assert_eq!(m.affichage(), avant_affichage);
                assert_eq!(m.sequence(), avant_sequence.as_slice());
                assert_eq!(m.saisie(), avant_saisie);
                seen_err += 1;
            }
        }

        assert!(
            m.saisie().matches('.').count() <= 1,
            "deux points: {:?}",
            m.saisie()
        );
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_bien_formees_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let n = 2 + rng.pick(7) as usize;
        let textes: Vec<String> = (0..n).map(|_| gen_operande(&mut rng)).collect();
        let operateurs: Vec<&str> = (1..n).map(|_| gen_operateur(&mut rng)).collect();

        let mut m = Moteur::new();
        tape_texte(&mut m, &textes[0]);
        for (op, t) in operateurs.iter().zip(&textes[1..]) {
            m.touche(op).unwrap();
            tape_texte(&mut m, t);
        }

        let valeur = m
            .evaluer()
            .unwrap_or_else(|e| panic!("textes={textes:?} ops={operateurs:?} err={e}"))
            .unwrap_or_else(|| panic!("pas de résultat pour {textes:?}"));

        let operandes: Vec<f64> = textes.iter().map(|t| t.parse().unwrap()).collect();
        let attendu = reference(&operandes, &operateurs);

        // comparaison par le texte : NaN == NaN, ∞ == ∞
        assert_eq!(
            format_nombre(valeur),
            format_nombre(attendu),
            "textes={textes:?} ops={operateurs:?}"
        );
    }
}

#[test]
fn fuzz_safe_longue_chaine_anti_gel() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 1 + 1 + ... + 1 (300 termes)
    let mut m = Moteur::new();
    m.touche("1").unwrap();
    for _ in 1..300 {
        m.touche("+").unwrap();
        m.touche("1").unwrap();
    }
    budget(t0, max);

    assert_eq!(m.evaluer(), Ok(Some(300.0)));
    budget(t0, max);
}
