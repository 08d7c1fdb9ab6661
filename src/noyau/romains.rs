// src/noyau/romains.rs
//
// Chiffres romains (1..=3999).
//
// Lecture volontairement permissive : on lit de droite à gauche, un symbole plus petit
// que son voisin de droite est soustrait, sinon ajouté. "IIX" vaut donc 10, "IIII" vaut 4.

use super::erreurs::ConvertError;

/// Table gloutonne (paires soustractives incluses), du plus grand au plus petit.
const TABLE_ROMAINE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub const ROMAIN_MIN: i64 = 1;
pub const ROMAIN_MAX: i64 = 3999;

fn valeur_symbole(c: char) -> Option<i64> {
    match c.to_ascii_uppercase() {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Entier -> chiffres romains (encodage glouton soustractif).
pub fn int_to_roman(n: i64) -> Result<String, ConvertError> {
    if !(ROMAIN_MIN..=ROMAIN_MAX).contains(&n) {
        return Err(ConvertError::ConversionFailed(format!(
            "chiffres romains hors limites ({ROMAIN_MIN}-{ROMAIN_MAX}): {n}"
        )));
    }

    let mut reste = n as u32;
    let mut out = String::new();
    for (valeur, symbole) in TABLE_ROMAINE {
        while reste >= valeur {
            out.push_str(symbole);
            reste -= valeur;
        }
    }
    Ok(out)
}

/// Chiffres romains -> entier (casse ignorée).
pub fn roman_to_int(texte: &str) -> Result<i64, ConvertError> {
    let mut total: i64 = 0;
    let mut precedent: i64 = 0;

    for c in texte.chars().rev() {
        let v = valeur_symbole(c).ok_or_else(|| {
            ConvertError::InvalidInput(format!("chiffre romain invalide: '{c}'"))
        })?;
        if v < precedent {
            total -= v;
        } else {
            total += v;
        }
        precedent = v;
    }

    Ok(total)
}
