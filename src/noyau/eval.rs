//! Noyau — évaluation (pipeline réel)
//!
//! trim -> points multiples -> division par zéro littérale -> ^ en ** -> mode degrés
//!      -> jetons -> RPN -> Expr -> évaluation (liste blanche) -> contrôle fini
//!
//! Aucune évaluation dynamique : seuls les noms de la liste blanche existent.
//! Tout autre identifiant échoue avec `UndefinedNameOrInvalidValue`.

use std::f64::consts::{E, PI};

use super::erreurs::EvalError;
use super::expr::{Expr, OpBin};
use super::jetons::{format_tokens, tokenize};
use super::mode_angle::AngleMode;
use super::pretraitement::pretraite;
use super::rpn::{format_rpn, from_rpn, to_rpn};

/// Trace de l'évaluation (texte réécrit, jetons, RPN).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub transformee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Fonctions de la liste blanche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Exp,
    Sqrt,
    Abs,
    Pow,
    Radians,
    Degrees,
}

impl Fonction {
    pub fn depuis_nom(name: &str) -> Option<Self> {
        use Fonction::*;
        Some(match name {
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "asin" => Asin,
            "acos" => Acos,
            "atan" => Atan,
            "log" => Log,
            "ln" => Ln,
            "exp" => Exp,
            "sqrt" => Sqrt,
            "abs" => Abs,
            "pow" => Pow,
            "radians" => Radians,
            "degrees" => Degrees,
            _ => return None,
        })
    }

    /// (min, max) d'arguments.
    fn arite(self) -> (usize, usize) {
        match self {
            Fonction::Pow => (2, 2),
            Fonction::Ln => (1, 2),
            _ => (1, 1),
        }
    }

    fn applique(self, name: &str, args: &[f64]) -> Result<f64, EvalError> {
        use Fonction::*;

        let (min, max) = self.arite();
        if args.len() < min || args.len() > max {
            let attendu = if min == max {
                format!("{min}")
            } else {
                format!("{min} à {max}")
            };
            return Err(EvalError::invalide(format!(
                "{name}() attend {attendu} argument(s), reçu {}",
                args.len()
            )));
        }

        let x = args[0];
        let domaine = || EvalError::invalide(format!("{name}() : domaine mathématique"));

        match self {
            Sin | Cos | Tan if !x.is_finite() => Err(domaine()),
            Sin => Ok(x.sin()),
            Cos => Ok(x.cos()),
            Tan => Ok(x.tan()),

            Asin | Acos if !(-1.0..=1.0).contains(&x) => Err(domaine()),
            Asin => Ok(x.asin()),
            Acos => Ok(x.acos()),
            Atan => Ok(x.atan()),

            Log if x <= 0.0 => Err(domaine()),
            Log => Ok(x.log10()),

            Ln if x <= 0.0 => Err(domaine()),
            Ln => match args.get(1) {
                None => Ok(x.ln()),
                Some(&base) if base <= 0.0 => Err(domaine()),
                Some(&base) if base == 1.0 => Err(EvalError::DivisionByZero),
                Some(&base) => Ok(x.ln() / base.ln()),
            },

            Exp => Ok(x.exp()),

            Sqrt if x < 0.0 => Err(domaine()),
            Sqrt => Ok(x.sqrt()),

            Abs => Ok(x.abs()),
            Pow => puissance(x, args[1]),
            Radians => Ok(x.to_radians()),
            Degrees => Ok(x.to_degrees()),
        }
    }
}

fn constante(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}

/// a ** b, avec les refus de l'arithmétique réelle.
fn puissance(a: f64, b: f64) -> Result<f64, EvalError> {
    if a == 0.0 && b < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if a < 0.0 && b.is_finite() && b.fract() != 0.0 {
        return Err(EvalError::invalide(
            "base négative et exposant fractionnaire (résultat complexe)",
        ));
    }
    Ok(a.powf(b))
}

/// Modulo au signe du diviseur : -7 % 3 = 2, 7 % -3 = -2.
fn modulo(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

fn applique_bin(op: OpBin, a: f64, b: f64) -> Result<f64, EvalError> {
    match op {
        OpBin::Add => Ok(a + b),
        OpBin::Sub => Ok(a - b),
        OpBin::Mul => Ok(a * b),
        OpBin::Div if b == 0.0 => Err(EvalError::DivisionByZero),
        OpBin::Div => Ok(a / b),
        OpBin::Mod if b == 0.0 => Err(EvalError::DivisionByZero),
        OpBin::Mod => Ok(modulo(a, b)),
        OpBin::Pow => puissance(a, b),
    }
}

/// Évalue l'AST, de gauche à droite (la première faute rencontrée gagne).
pub fn eval_ast(expr: &Expr) -> Result<f64, EvalError> {
    match expr {
        Expr::Nombre(n) => Ok(*n),

        Expr::Nom(name) => constante(name).ok_or_else(|| {
            if Fonction::depuis_nom(name).is_some() {
                EvalError::invalide(format!("'{name}' est une fonction, pas une valeur"))
            } else {
                EvalError::invalide(format!("nom '{name}' non défini"))
            }
        }),

        Expr::Neg(x) => Ok(-eval_ast(x)?),

        Expr::Bin(op, a, b) => {
            let va = eval_ast(a)?;
            let vb = eval_ast(b)?;
            applique_bin(*op, va, vb)
        }

        Expr::Appel(name, args) => {
            // le nom est résolu avant les arguments
            let f = match Fonction::depuis_nom(name) {
                Some(f) => f,
                None if constante(name).is_some() => {
                    return Err(EvalError::invalide(format!(
                        "'{name}' n'est pas une fonction"
                    )))
                }
                None => return Err(EvalError::invalide(format!("nom '{name}' non défini"))),
            };
            let valeurs = args.iter().map(eval_ast).collect::<Result<Vec<_>, _>>()?;
            f.applique(name, &valeurs)
        }
    }
}

/// API publique : évalue une expression restreinte.
pub fn evaluate_expression(expr_str: &str, mode: AngleMode) -> Result<f64, EvalError> {
    evaluate_expression_detaille(expr_str, mode).map(|(v, _d)| v)
}

/// Comme `evaluate_expression`, avec la démarche (texte réécrit, jetons, RPN).
pub fn evaluate_expression_detaille(
    expr_str: &str,
    mode: AngleMode,
) -> Result<(f64, Demarche), EvalError> {
    // 1..5) Pré-traitement textuel
    let transformee = pretraite(expr_str, mode)?;

    // 6) Jetons -> RPN -> Expr -> valeur
    let jetons = tokenize(&transformee)?;
    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;
    let valeur = eval_ast(&expr)?;

    // 7) Résultat fini obligatoire
    if !valeur.is_finite() {
        return Err(EvalError::InvalidResult);
    }

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
        transformee,
    };

    Ok((valeur, d))
}
