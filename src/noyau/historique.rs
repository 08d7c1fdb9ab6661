// src/noyau/historique.rs
//
// Historique des calculs réussis.
// - ajout en fin seulement (ordre d'insertion = ordre chronologique = ordre d'affichage)
// - aucune entrée modifiée ni retirée individuellement : seul `clear` vide tout
// - n'accueille jamais un calcul échoué (garanti par l'appelant, cf. session)

use std::fmt;

/// Une paire (expression, résultat), immuable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    expression: String,
    resultat: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryLedger {
    entrees: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une entrée. Toute paire de chaînes est acceptée.
    pub fn add_entry(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push(HistoryEntry::new(expression, resultat));
    }

    /// Lignes d'affichage "expression = résultat", plus ancienne d'abord.
    pub fn entries(&self) -> Vec<String> {
        self.entrees.iter().map(HistoryEntry::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entrees.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Vide l'historique (irréversible).
    pub fn clear(&mut self) {
        self.entrees.clear();
    }
}
