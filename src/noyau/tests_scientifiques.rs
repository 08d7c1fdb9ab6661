//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés numériques sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes importantes (aligné avec l'état actuel du noyau) :
//! - Mode degrés : réécriture textuelle superficielle. Dans "sin(2*(10+5)+1)" seul
//!   "2*(10+5)" est converti ; le "+1" reste en radians. On le teste tel quel.
//! - asin/acos/atan ne sont jamais convertis : ils renvoient des radians dans les deux modes.

use std::time::{Duration, Instant};

use super::bases::convert;
use super::erreurs::EvalError;
use super::eval::evaluate_expression;
use super::expr::Expr;
use super::jetons::tokenize;
use super::mode_angle::AngleMode::{self, Degrees, Radians};
use super::rpn::{from_rpn, to_rpn};

fn eval_ok(expr: &str, mode: AngleMode) -> f64 {
    evaluate_expression(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, mode: AngleMode, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} attendu≈{attendu} obtenu={v}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn ast(expr: &str) -> Expr {
    let t = tokenize(expr).unwrap_or_else(|e| panic!("jetons {expr:?}: {e}"));
    let r = to_rpn(&t).unwrap_or_else(|e| panic!("rpn {expr:?}: {e}"));
    from_rpn(&r).unwrap_or_else(|e| panic!("ast {expr:?}: {e}"))
}

/* ------------------------ Trigonométrie (mode degrés) ------------------------ */

#[test]
fn sci_angles_remarquables_degres() {
    assert_proche("sin(30)", Degrees, 0.5);
    assert_proche("sin(90)", Degrees, 1.0);
    assert_proche("cos(180)", Degrees, -1.0);
    assert_proche("cos(60)", Degrees, 0.5);
    assert_proche("tan(45)", Degrees, 1.0);
    assert_proche("sin(-90)", Degrees, -1.0);
}

#[test]
fn sci_pythagore_degres() {
    for a in [0, 15, 30, 45, 60, 75, 90, 135, 270, 359] {
        assert_proche(&format!("sin({a})^2 + cos({a})^2"), Degrees, 1.0);
    }
}

#[test]
fn sci_degres_equivaut_radians_convertis() {
    for a in ["10", "33.3", "-45", "720"] {
        let deg = eval_ok(&format!("sin({a})"), Degrees);
        let rad = eval_ok(&format!("sin(radians({a}))"), Radians);
        assert_eq!(deg, rad, "a={a}");
    }
}

#[test]
fn sci_inverses_en_radians_dans_les_deux_modes() {
    let pi_6 = std::f64::consts::FRAC_PI_6;
    assert_proche("asin(0.5)", Degrees, pi_6);
    assert_proche("asin(0.5)", Radians, pi_6);
    // asin(sin(30°)) : sin converti, asin non => π/6, pas 30
    assert_proche("asin(sin(30))", Degrees, pi_6);
    assert_proche("degrees(asin(sin(30)))", Degrees, 30.0);
}

#[test]
fn sci_limite_reecriture_superficielle() {
    // seul "2*(10+5)" est converti ; "+1" ajouté en radians
    let attendu = (30f64.to_radians() + 1.0).sin();
    assert_proche("sin(2*(10+5)+1)", Degrees, attendu);

    // imbrication simple : les deux appels sont convertis
    let attendu = 30f64.to_radians().cos().to_radians().sin();
    assert_proche("sin(cos(30))", Degrees, attendu);
}

/* ------------------------ Cohérence algébrique ------------------------ */

#[test]
fn sci_distributivite_et_precedence() {
    assert_proche("(3+4)*5 - (3*5 + 4*5)", Degrees, 0.0);
    assert_proche("2^10 - pow(2, 10)", Degrees, 0.0);
    assert_proche("ln(exp(3))", Degrees, 3.0);
    assert_proche("log(10^5)", Degrees, 5.0);
    assert_proche("sqrt(2)^2", Degrees, 2.0);
    assert_proche("e^ln(7)", Degrees, 7.0);
}

#[test]
fn sci_modulo_floor() {
    // a = b*floor(a/b) + (a % b), reste du signe de b
    for (a, b) in [(7.0f64, 3.0f64), (-7.0, 3.0), (7.0, -3.0), (-7.5, -2.0)] {
        let r = eval_ok(&format!("({a}) % ({b})"), Degrees);
        assert!((b * (a / b).floor() + r - a).abs() < 1e-12, "a={a} b={b} r={r}");
        assert!(r == 0.0 || (r < 0.0) == (b < 0.0), "signe a={a} b={b} r={r}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

#[test]
fn sci_stress_somme_balancee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("0.5", 800);
    let v = eval_ok(&expr, Degrees);
    budget(t0, max);

    assert_eq!(v, 400.0);
    // arbre équilibré : profondeur logarithmique
    assert!(ast(&expr).profondeur() <= 12);
}

#[test]
fn sci_stress_parentheses_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let n = 200;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(eval_ok(&expr, Radians), 1.0);

    let chaine = (0..50).fold("1".to_string(), |acc, _| format!("sqrt({acc})"));
    assert_eq!(eval_ok(&chaine, Radians), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_excessive_refusee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    // pas de débordement de pile : refus typé
    let moins = format!("{}1", "-".repeat(200_000));
    assert!(matches!(
        evaluate_expression(&moins, Radians),
        Err(EvalError::Syntax(_))
    ));

    let n = 100_000;
    let appels = format!("{}1{}", "abs(".repeat(n), ")".repeat(n));
    assert!(matches!(
        evaluate_expression(&appels, Radians),
        Err(EvalError::Syntax(_))
    ));

    // les '+' unaires ne créent pas de nœud
    assert_eq!(eval_ok(&format!("{}1", "+".repeat(200_000)), Radians), 1.0);
    assert_eq!(eval_ok(&format!("{}1", "-".repeat(300)), Radians), 1.0);
    budget(t0, max);
}

/* ------------------------ Bases : chaînes de conversions ------------------------ */

#[test]
fn sci_chaine_de_conversions() {
    use crate::noyau::bases::NumeralSystem::*;

    for n in [0i64, 1, 7, 255, 1994, 65_535, 1 << 40] {
        let hex = convert(&n.to_string(), Decimal, Hexadecimal).unwrap();
        let bin = convert(&hex, Hexadecimal, Binary).unwrap();
        let oct = convert(&bin, Binary, Octal).unwrap();
        let b36 = convert(&oct, Octal, Custom(36)).unwrap();
        let dec = convert(&b36, Custom(36), Decimal).unwrap();
        assert_eq!(dec, format!("{n}.0"), "n={n} via {hex}/{bin}/{oct}/{b36}");
    }
}

#[test]
fn sci_romain_via_bases() {
    use crate::noyau::bases::NumeralSystem::*;

    assert_eq!(convert("7CA", Hexadecimal, Roman).unwrap(), "MCMXCIV");
    assert_eq!(convert("MMMCMXCIX", Roman, Binary).unwrap(), "111110011111");
}
