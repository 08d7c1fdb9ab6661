// src/noyau/pretraitement.rs
//
// Pré-traitement textuel, avant tokenisation.
// Ordre (chaque échec court-circuite l'évaluation):
//   1) trim
//   2) points décimaux multiples par segment
//   3) division par zéro littérale
//   4) ^ -> **
//   5) mode degrés : sin/cos/tan(x) -> sin/cos/tan(radians(x))
//
// Limite connue (5): réécriture superficielle, non imbriquée.
// L'argument capturé s'arrête à la première ')' :
//   "sin(2*(10+5)+1)" -> "sin(radians(2*(10+5))+1)"  (le "+1" n'est pas converti)

use std::sync::OnceLock;

use regex::Regex;

use super::erreurs::EvalError;
use super::mode_angle::AngleMode;

static RE_DIV_ZERO: OnceLock<Regex> = OnceLock::new();
static RE_TRIG: OnceLock<[(Regex, &'static str); 3]> = OnceLock::new();

/// "/" suivi (espaces admis) de 0, 0., 0.000… puis fin ou non-chiffre.
/// Le '.' compte comme non-chiffre : "1/0.5" est refusé comme "1/0".
fn re_div_zero() -> &'static Regex {
    RE_DIV_ZERO.get_or_init(|| {
        Regex::new(r"/\s*0(?:\.0*)?(?:[^\d]|$)").expect("motif division par zéro")
    })
}

/// \b évite de toucher asin/acos/atan : seules sin/cos/tan sont converties.
fn re_trig() -> &'static [(Regex, &'static str); 3] {
    RE_TRIG.get_or_init(|| {
        [
            (
                Regex::new(r"\bsin\((.*?)\)").expect("motif sin"),
                "sin(radians(${1}))",
            ),
            (
                Regex::new(r"\bcos\((.*?)\)").expect("motif cos"),
                "cos(radians(${1}))",
            ),
            (
                Regex::new(r"\btan\((.*?)\)").expect("motif tan"),
                "tan(radians(${1}))",
            ),
        ]
    })
}

/// Étape 2 : découpe sur + - * / ( ) ; un segment avec 2 points ou plus est refusé.
pub fn verifie_points_decimaux(s: &str) -> Result<(), EvalError> {
    let mal_forme = s
        .split(&['+', '-', '*', '/', '(', ')'][..])
        .any(|segment| segment.matches('.').count() > 1);
    if mal_forme {
        return Err(EvalError::MalformedNumber);
    }
    Ok(())
}

/// Étape 3 : pré-contrôle syntaxique, indépendant de l'évaluation.
pub fn contient_division_par_zero(s: &str) -> bool {
    re_div_zero().is_match(s)
}

/// Étape 5 : applique la conversion degrés -> radians aux arguments de sin/cos/tan.
pub fn applique_mode_degres(s: &str) -> String {
    let mut out = s.to_string();
    for (re, remplacement) in re_trig() {
        out = re.replace_all(&out, *remplacement).into_owned();
    }
    out
}

/// Pipeline complet 1..5. Renvoie le texte prêt à tokeniser.
pub fn pretraite(expr: &str, mode: AngleMode) -> Result<String, EvalError> {
    let s = expr.trim();

    verifie_points_decimaux(s)?;

    if contient_division_par_zero(s) {
        return Err(EvalError::DivisionByZero);
    }

    let s = s.replace('^', "**");

    Ok(match mode {
        AngleMode::Degrees => applique_mode_degres(&s),
        AngleMode::Radians => s,
    })
}
