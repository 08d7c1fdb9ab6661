// src/noyau/bases.rs
//
// Conversion entre systèmes de numération.
// Pivot : valeur décimale flottante.
//   texte (source) --to_decimal--> f64 --from_decimal--> texte (cible)
//
// Entiers lus/écrits en BigInt : aucune limite de taille avant le passage en f64,
// et la troncature d'un très grand décimal ne déborde jamais.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};

use super::erreurs::ConvertError;
use super::format::format_flottant;
use super::romains::{int_to_roman, roman_to_int};

/// Alphabet des chiffres, bases 2 à 36.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const BASE_MIN: u32 = 2;
pub const BASE_MAX: u32 = 36;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
    Roman,
    Custom(u32),
}

impl NumeralSystem {
    /// Base quelconque ; 2/8/10/16 deviennent les systèmes nommés.
    pub fn custom(radix: u32) -> Self {
        NumeralSystem::Custom(radix).normalise()
    }

    /// Base positionnelle (None pour les chiffres romains).
    pub fn radix(self) -> Option<u32> {
        match self {
            NumeralSystem::Decimal => Some(10),
            NumeralSystem::Binary => Some(2),
            NumeralSystem::Octal => Some(8),
            NumeralSystem::Hexadecimal => Some(16),
            NumeralSystem::Roman => None,
            NumeralSystem::Custom(r) => Some(r),
        }
    }

    /// Custom(2/8/10/16) se comporte exactement comme le système nommé.
    fn normalise(self) -> Self {
        match self {
            NumeralSystem::Custom(2) => NumeralSystem::Binary,
            NumeralSystem::Custom(8) => NumeralSystem::Octal,
            NumeralSystem::Custom(10) => NumeralSystem::Decimal,
            NumeralSystem::Custom(16) => NumeralSystem::Hexadecimal,
            s => s,
        }
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralSystem::Decimal => write!(f, "décimal (10)"),
            NumeralSystem::Binary => write!(f, "binaire (2)"),
            NumeralSystem::Octal => write!(f, "octal (8)"),
            NumeralSystem::Hexadecimal => write!(f, "hexadécimal (16)"),
            NumeralSystem::Roman => write!(f, "romain"),
            NumeralSystem::Custom(r) => write!(f, "base {r}"),
        }
    }
}

/* ------------------------ Lecture ------------------------ */

fn retire_prefixe(s: &str, radix: u32) -> &str {
    let prefixes: &[&str] = match radix {
        2 => &["0b", "0B"],
        8 => &["0o", "0O"],
        16 => &["0x", "0X"],
        _ => &[],
    };
    prefixes
        .iter()
        .find_map(|p| s.strip_prefix(p))
        .unwrap_or(s)
}

/// Littéral entier dans `radix` :
/// espaces autour ignorés, signe optionnel, préfixe 0b/0o/0x pour 2/8/16,
/// '_' simple entre deux chiffres, lettres insensibles à la casse.
fn parse_entier(texte: &str, radix: u32) -> Option<BigInt> {
    if !(BASE_MIN..=BASE_MAX).contains(&radix) {
        return None;
    }

    let s = texte.trim();
    let (negatif, s) = if let Some(reste) = s.strip_prefix('-') {
        (true, reste)
    } else if let Some(reste) = s.strip_prefix('+') {
        (false, reste)
    } else {
        (false, s)
    };
    let s = retire_prefixe(s, radix);

    let mut chiffres = String::with_capacity(s.len());
    let mut apres_separateur = true; // '_' interdit en tête
    for c in s.chars() {
        if c == '_' {
            if apres_separateur {
                return None;
            }
            apres_separateur = true;
            continue;
        }
        c.to_digit(radix)?;
        chiffres.push(c);
        apres_separateur = false;
    }
    if chiffres.is_empty() || apres_separateur {
        return None;
    }

    let n = BigInt::from(BigUint::parse_bytes(chiffres.as_bytes(), radix)?);
    Some(if negatif { -n } else { n })
}

/// Réel décimal ; '_' simple admis entre deux chiffres ("1_000.5", "1e1_0").
fn parse_decimal(texte: &str) -> Option<f64> {
    let s = texte.trim();
    let octets = s.as_bytes();
    let mut nettoye = String::with_capacity(s.len());
    for (i, c) in s.char_indices() {
        if c == '_' {
            let avant = i > 0 && octets[i - 1].is_ascii_digit();
            let apres = octets.get(i + 1).is_some_and(u8::is_ascii_digit);
            if !(avant && apres) {
                return None;
            }
            continue;
        }
        nettoye.push(c);
    }
    nettoye.parse::<f64>().ok()
}

/// Vrai si `text` est lisible en base 10 (réel) ou 2/8/16 (entier). Faux sinon.
pub fn validate_input(text: &str, base: u32) -> bool {
    if text.is_empty() {
        return false;
    }
    match base {
        10 => parse_decimal(text).is_some(),
        2 | 8 | 16 => parse_entier(text, base).is_some(),
        _ => false,
    }
}

/// Texte dans `from` -> valeur décimale.
pub fn to_decimal(text: &str, from: NumeralSystem) -> Result<f64, ConvertError> {
    if text.trim().is_empty() {
        return Err(ConvertError::InvalidInput("entrée vide".into()));
    }

    match from.normalise() {
        NumeralSystem::Decimal => parse_decimal(text)
            .ok_or_else(|| ConvertError::InvalidInput(format!("nombre décimal invalide: '{text}'"))),

        NumeralSystem::Roman => roman_to_int(text).map(|n| n as f64),

        systeme => {
            let radix = systeme.radix().unwrap_or(0);
            let n = parse_entier(text, radix).ok_or_else(|| {
                ConvertError::InvalidInput(format!("'{text}' illisible en {systeme}"))
            })?;
            n.to_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ConvertError::InvalidInput("nombre trop grand".into()))
        }
    }
}

/* ------------------------ Écriture ------------------------ */

/// Entier -> chiffres dans `radix` (divisions successives), sans préfixe ni zéros en tête.
pub fn to_custom_base(n: &BigInt, radix: u32) -> Result<String, ConvertError> {
    if !(BASE_MIN..=BASE_MAX).contains(&radix) {
        return Err(ConvertError::ConversionFailed(format!(
            "base hors limites ({BASE_MIN}-{BASE_MAX}): {radix}"
        )));
    }

    if n.is_zero() {
        return Ok("0".to_string());
    }

    let base = BigUint::from(radix);
    let mut reste = n.magnitude().clone();
    let mut out: Vec<u8> = Vec::new();

    // chiffre de poids faible d'abord, inversé à la fin
    while !reste.is_zero() {
        let chiffre = (&reste % &base).to_usize().unwrap_or(0);
        out.push(ALPHABET[chiffre]);
        reste /= &base;
    }
    if n.is_negative() {
        out.push(b'-');
    }
    out.reverse();

    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Valeur décimale -> texte dans `to`.
/// Tronque vers zéro pour toute cible entière ; la cible décimale garde la valeur telle quelle.
pub fn from_decimal(value: f64, to: NumeralSystem) -> Result<String, ConvertError> {
    let entier = BigInt::from_f64(value).ok_or_else(|| {
        ConvertError::ConversionFailed(format!("valeur non finie: {}", format_flottant(value)))
    })?;

    match to.normalise() {
        NumeralSystem::Decimal => Ok(format_flottant(value)),

        NumeralSystem::Roman => match entier.to_i64() {
            Some(n) => int_to_roman(n),
            None => Err(ConvertError::ConversionFailed(format!(
                "chiffres romains hors limites: {entier}"
            ))),
        },

        systeme => to_custom_base(&entier, systeme.radix().unwrap_or(0)),
    }
}

/// Conversion complète : `text` lu dans `from`, écrit dans `to`.
pub fn convert(text: &str, from: NumeralSystem, to: NumeralSystem) -> Result<String, ConvertError> {
    let valeur = to_decimal(text, from)?;
    from_decimal(valeur, to)
}
