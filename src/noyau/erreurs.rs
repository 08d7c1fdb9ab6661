// src/noyau/erreurs.rs
//
// Erreurs typées du noyau.
// - EvalError    : évaluation d'une expression
// - ConvertError : conversion entre systèmes de numération
//
// Toutes récupérables : l'appelant (UI) décide de la présentation.

use thiserror::Error;

/// Échec d'évaluation d'une expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Division (ou modulo) par zéro, détectée textuellement ou à l'évaluation.
    #[error("division par zéro")]
    DivisionByZero,

    /// Un segment numérique contient plus d'un point décimal.
    #[error("nombre mal formé : plusieurs points décimaux")]
    MalformedNumber,

    /// Expression structurellement invalide.
    #[error("syntaxe invalide : {0}")]
    Syntax(String),

    /// Nom hors liste blanche, mauvais appel, ou valeur hors domaine.
    #[error("expression invalide : {0}")]
    UndefinedNameOrInvalidValue(String),

    /// Résultat NaN ou infini.
    #[error("résultat invalide (NaN ou infini)")]
    InvalidResult,
}

impl EvalError {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        EvalError::Syntax(msg.into())
    }

    pub(crate) fn invalide(msg: impl Into<String>) -> Self {
        EvalError::UndefinedNameOrInvalidValue(msg.into())
    }
}

/// Échec de conversion entre systèmes de numération.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Texte source illisible dans le système déclaré.
    #[error("entrée invalide pour le système choisi : {0}")]
    InvalidInput(String),

    /// Cible hors limites (base, plage romaine) ou valeur non finie.
    #[error("conversion impossible : {0}")]
    ConversionFailed(String),
}
