//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * succès => valeur finie
//!   * même entrée => même issue
//!   * historique = exactement les succès, dans l'ordre

use std::time::{Duration, Instant};

use super::bases::convert;
use super::erreurs::{ConvertError, EvalError};
use super::eval::evaluate_expression;
use super::mode_angle::AngleMode;
use crate::session::SessionCalc;

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
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

const FONCTIONS_1: &[&str] = &[
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "exp", "sqrt", "abs",
];
const OPERATEURS: &[&str] = &["+", "-", "*", "/", "%", "^", "**"];

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        3 => format!("{}e{}", 1 + rng.pick(9), rng.pick(4)),
        4 => "pi".to_string(),
        _ => "e".to_string(),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 | 2 => format!(
            "{}{}{}",
            gen_expr(rng, depth - 1),
            rng.choisir(OPERATEURS),
            gen_expr(rng, depth - 1)
        ),
        3 => format!("({})", gen_expr(rng, depth - 1)),
        4 => format!("-{}", gen_expr(rng, depth - 1)),
        5 => format!(
            "{}({})",
            rng.choisir(FONCTIONS_1),
            gen_expr(rng, depth - 1)
        ),
        _ => format!(
            "pow({}, {})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
    }
}

/// Bruit : alphabet du langage + quelques intrus.
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[&str] = &[
        "1", "0", ".", "+", "-", "*", "/", "%", "^", "(", ")", ",", " ", "sin", "x", "pi", "e",
        "$", "é", "**",
    ];
    (0..longueur).map(|_| rng.choisir(ALPHABET)).collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_succes_fini_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.coin() {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        };

        let a = evaluate_expression(&expr, mode);
        let b = evaluate_expression(&expr, mode);

        match (&a, &b) {
            (Ok(x), Ok(y)) => {
                assert!(x.is_finite(), "non fini: expr={expr:?} v={x}");
                assert_eq!(x.to_bits(), y.to_bits(), "non déterministe: {expr:?}");
                seen_ok += 1;
            }
            (Err(x), Err(y)) => {
                assert_eq!(x, y, "non déterministe: {expr:?}");
                seen_err += 1;
            }
            _ => panic!("issues divergentes pour {expr:?}: {a:?} / {b:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_toujours_classe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let expr = gen_bruit(&mut rng, longueur);

        // aucune panique ; toute erreur est une des cinq classes
        match evaluate_expression(&expr, AngleMode::Degrees) {
            Ok(v) => assert!(v.is_finite(), "expr={expr:?}"),
            Err(
                EvalError::DivisionByZero
                | EvalError::MalformedNumber
                | EvalError::Syntax(_)
                | EvalError::UndefinedNameOrInvalidValue(_)
                | EvalError::InvalidResult,
            ) => {}
        }
    }
}

#[test]
fn fuzz_safe_historique_egal_aux_succes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0x5EED_u64);
    let mut session = SessionCalc::new();
    let mut attendu: Vec<String> = Vec::new();

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        if let Ok(c) = session.calculer(&expr) {
            attendu.push(format!("{expr} = {}", c.texte));
        }
    }

    assert_eq!(session.historique().entries(), attendu);
}

#[test]
fn fuzz_safe_conversions_stables() {
    use crate::noyau::bases::NumeralSystem::*;

    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xFACADE_u64);
    let systemes = [
        Decimal,
        Binary,
        Octal,
        Hexadecimal,
        Roman,
        Custom(3),
        Custom(36),
        Custom(1),
    ];
    const SYMBOLES: &[&str] = &[
        "0", "1", "7", "9", "A", "f", "Z", "I", "V", "X", "M", "-", "_", ".", " ",
    ];

    for _ in 0..400 {
        budget(t0, max);

        let de = systemes[rng.pick(systemes.len() as u32) as usize];
        let vers = systemes[rng.pick(systemes.len() as u32) as usize];
        let longueur = 1 + rng.pick(8) as usize;
        let texte: String = (0..longueur).map(|_| rng.choisir(SYMBOLES)).collect();

        match convert(&texte, de, vers) {
            Ok(sortie) => {
                // relire la sortie dans la cible puis réécrire : point fixe
                let encore = convert(&sortie, vers, vers)
                    .unwrap_or_else(|e| panic!("{sortie:?} ({vers}) illisible: {e}"));
                assert_eq!(encore, sortie, "{texte:?} {de} -> {vers}");
            }
            Err(ConvertError::InvalidInput(_) | ConvertError::ConversionFailed(_)) => {}
        }
    }
}
