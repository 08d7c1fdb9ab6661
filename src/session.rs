// src/session.rs
//
// Session de calcul — ce que l'interface tient entre deux actions.
// ----------------------------------------------------------------
// Rôle:
// - Déclarer l'état (etat.rs) et le ré-exporter
// - Brancher les actions sur le noyau : calculer, convertir
// - Journaliser les issues (tracing) : le noyau, lui, reste silencieux
//
// Invariant: un calcul échoué n'entre jamais dans l'historique.

pub mod etat;

pub use etat::{Rappel, SessionCalc};

use tracing::{debug, trace};

use crate::noyau::{
    convert, evaluate_expression_detaille, format_flottant, ConvertError, EvalError,
    NumeralSystem,
};

/// Résultat d'un calcul réussi : valeur + texte affiché (et enregistré).
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub valeur: f64,
    pub texte: String,
}

impl SessionCalc {
    /// Évalue `expression` dans le mode d'angle courant.
    /// Succès : enregistre (expression, texte du résultat) dans l'historique.
    pub fn calculer(&mut self, expression: &str) -> Result<Calcul, EvalError> {
        match evaluate_expression_detaille(expression, self.mode_angle) {
            Ok((valeur, demarche)) => {
                // zéro signé affiché "0.0" ("-0", "0*-1")
                let valeur = if valeur == 0.0 { 0.0 } else { valeur };
                let texte = format_flottant(valeur);
                trace!(
                    transformee = %demarche.transformee,
                    jetons = %demarche.jetons,
                    rpn = %demarche.rpn,
                    "démarche"
                );
                debug!(%expression, resultat = %texte, mode = %self.mode_angle, "calcul réussi");

                self.historique.add_entry(expression, texte.clone());
                Ok(Calcul { valeur, texte })
            }
            Err(e) => {
                debug!(%expression, erreur = %e, mode = %self.mode_angle, "calcul refusé");
                Err(e)
            }
        }
    }

    /// Convertit `texte` de `de` vers `vers`. N'affecte pas l'historique.
    pub fn convertir(
        &self,
        texte: &str,
        de: NumeralSystem,
        vers: NumeralSystem,
    ) -> Result<String, ConvertError> {
        let sortie = convert(texte, de, vers);
        match &sortie {
            Ok(s) => debug!(entree = %texte, %de, %vers, sortie = %s, "conversion réussie"),
            Err(e) => debug!(entree = %texte, %de, %vers, erreur = %e, "conversion refusée"),
        }
        sortie
    }
}
