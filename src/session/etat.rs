//! src/session/etat.rs
//!
//! État de session (sans évaluation).
//!
//! Rôle : porter ce que l'interface possède entre deux appels (mode d'angle, historique)
//! et offrir les opérations simples qui ne touchent pas au noyau de calcul.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Un seul propriétaire : pas de singleton, pas d'état global.
//! - Accès concurrent éventuel : à protéger par l'appelant (un écrivain à la fois).

use crate::noyau::{AngleMode, HistoryLedger};

/// Mode d'angle au démarrage d'une session.
const MODE_ANGLE_DEFAUT: AngleMode = AngleMode::Degrees;

/// Partie d'une entrée d'historique à recharger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rappel {
    Expression,
    Resultat,
}

#[derive(Clone, Debug)]
pub struct SessionCalc {
    pub(crate) mode_angle: AngleMode,
    pub(crate) historique: HistoryLedger,
}

impl Default for SessionCalc {
    fn default() -> Self {
        Self {
            mode_angle: MODE_ANGLE_DEFAUT,
            historique: HistoryLedger::new(),
        }
    }
}

impl SessionCalc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode_angle(&self) -> AngleMode {
        self.mode_angle
    }

    pub fn set_mode_angle(&mut self, mode: AngleMode) {
        self.mode_angle = mode;
    }

    pub fn historique(&self) -> &HistoryLedger {
        &self.historique
    }

    /// Vide l'historique.
    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    /// Texte à recharger depuis l'entrée `index` (expression ou résultat).
    pub fn rappel(&self, index: usize, quoi: Rappel) -> Option<&str> {
        self.historique.get(index).map(|e| match quoi {
            Rappel::Expression => e.expression(),
            Rappel::Resultat => e.resultat(),
        })
    }
}
