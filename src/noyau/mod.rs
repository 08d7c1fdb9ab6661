//! Noyau de calcul
//!
//! Organisation interne :
//! - erreurs.rs       : EvalError, ConvertError
//! - mode_angle.rs    : AngleMode (degrés / radians)
//! - pretraitement.rs : contrôles textuels + réécriture mode degrés
//! - jetons.rs        : tokenisation
//! - rpn.rs           : shunting-yard + construction Expr
//! - expr.rs          : AST flottant
//! - eval.rs          : liste blanche + pipeline complet
//! - format.rs        : affichage des flottants
//! - romains.rs       : chiffres romains
//! - bases.rs         : conversions entre systèmes de numération
//! - historique.rs    : historique des calculs
//!
//! Les composants ne dépendent pas les uns des autres au-delà de ce découpage :
//! l'évaluateur ignore les bases, le convertisseur ignore l'évaluateur.

pub mod bases;
pub mod erreurs;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod mode_angle;
pub mod pretraitement;
pub mod romains;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use bases::{convert, from_decimal, to_decimal, validate_input, NumeralSystem};
pub use erreurs::{ConvertError, EvalError};
pub use eval::{evaluate_expression, evaluate_expression_detaille, Demarche};
pub use format::format_flottant;
pub use historique::{HistoryEntry, HistoryLedger};
pub use mode_angle::AngleMode;
pub use romains::{int_to_roman, roman_to_int};
