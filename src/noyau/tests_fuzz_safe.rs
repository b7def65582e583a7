//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toute erreur doit être une ErreurCalcul (jamais de panique)
//! - invariant clé : même entrée => même sortie

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::eval_expression;
use super::jetons::tokenize;
use super::operateurs::Registre;
use super::rpn::to_rpn;

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // petits entiers + décimaux, incluant 0 (utile pour la division)
    let entier = rng.pick(10);
    let s = match rng.pick(3) {
        0 => format!("{entier}"),
        1 => format!("{entier}.{}", rng.pick(100)),
        _ => format!(".{}", rng.pick(10)),
    };
    if rng.pick(5) == 0 {
        format!("-{s}")
    } else {
        s
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(5) {
        0 => " + ",
        1 => " - ",
        2 => " * ",
        3 => " / ",
        // exposants restent petits via gen_expr (profondeur bornée)
        _ => "^",
    }
}

/// Expression bien parenthésée (profondeur bornée).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }
    match rng.pick(4) {
        0 => gen_nombre(rng),
        1 => format!("({})", gen_expr(rng, profondeur - 1)),
        2 => format!("sqrt({})", gen_expr(rng, profondeur - 1)),
        _ => {
            let a = gen_expr(rng, profondeur - 1);
            let b = gen_expr(rng, profondeur - 1);
            format!("{a}{}{b}", gen_op(rng))
        }
    }
}

/// Bruit : caractères quelconques de l’alphabet utile + quelques intrus.
fn gen_bruit(rng: &mut Rng, len: u32) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '+', '-', '*', '/', '^', '(', ')', ' ', 's', 'q', 'r', 't', 'x',
        '%', 'é',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..400 {
        budget(start, max);

        let expr = gen_expr(&mut rng, 3);
        let r1 = eval_expression(&expr);
        let r2 = eval_expression(&expr);
        assert_eq!(r1, r2, "non déterministe: {expr:?}");

        // parenthèses toujours équilibrées ici
        if let Err(e) = &r1 {
            assert_ne!(
                *e,
                ErreurCalcul::ParenthesesDesequilibrees,
                "expr={expr:?}"
            );
        }
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(42);

    for _ in 0..2000 {
        budget(start, max);

        let len = 1 + rng.pick(24);
        let s = gen_bruit(&mut rng, len);

        // seul contrat : Ok ou ErreurCalcul, et déterministe
        let r1 = eval_expression(&s);
        let r2 = eval_expression(&s);
        assert_eq!(r1, r2, "non déterministe: {s:?}");
    }
}

#[test]
fn fuzz_rpn_sans_parentheses() {
    // si to_rpn réussit, la sortie ne contient jamais de parenthèse
    let reg = Registre::standard();
    let mut rng = Rng::new(7);

    for _ in 0..1000 {
        let s = if rng.coin() {
            gen_expr(&mut rng, 3)
        } else {
            let len = 1 + rng.pick(16);
            gen_bruit(&mut rng, len)
        };

        let Ok(jetons) = tokenize(&s) else { continue };
        if let Ok(rpn) = to_rpn(&jetons, &reg) {
            assert!(
                rpn.iter().all(|t| !matches!(
                    t,
                    super::jetons::Tok::LPar | super::jetons::Tok::RPar
                )),
                "s={s:?}"
            );
            // autant de jetons hors parenthèses en entrée qu’en sortie
            let utiles = jetons
                .iter()
                .filter(|t| !matches!(t, super::jetons::Tok::LPar | super::jetons::Tok::RPar))
                .count();
            assert_eq!(rpn.len(), utiles, "s={s:?}");
        }
    }
}
