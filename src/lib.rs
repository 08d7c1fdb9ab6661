// src/lib.rs
//
// Calculatrice — noyau de calcul sans interface
// ---------------------------------------------
// - Évaluateur d'expressions restreint (liste blanche, grammaire explicite)
// - Convertisseur de bases (2/8/10/16, 2..36, chiffres romains)
// - Historique des calculs réussis
//
// L'interface graphique (onglets, boutons, champs) vit ailleurs : elle tient une
// `SessionCalc` et affiche ce que le noyau renvoie.

pub mod noyau;
pub mod session;

pub use noyau::{
    convert, evaluate_expression, AngleMode, ConvertError, EvalError, HistoryEntry,
    HistoryLedger, NumeralSystem,
};
pub use session::{Calcul, Rappel, SessionCalc};
