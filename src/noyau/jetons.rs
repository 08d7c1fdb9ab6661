// src/noyau/jetons.rs

use super::erreurs::EvalError;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes + noms inconnus.
    // NOTE: la résolution (liste blanche) se fait à l'évaluation, pas ici.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pow, // ** (et ^ après réécriture)

    Virgule,
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5., 1e5, 2.5E-3)
/// - opérateurs + - * / % ** ^
/// - parenthèses ( ) et virgule (arguments)
/// - identifiants [lettre_][lettre_chiffre]* (sensibles à la casse)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Virgule);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                // "**" = puissance
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::Pow);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '^' => {
                out.push(Tok::Pow);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants : pas de normalisation de casse ("SIN" n'est pas "sin")
        if c.is_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (n, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = fin;
            continue;
        }

        return Err(EvalError::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `start`.
/// Renvoie (valeur, index de fin).
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), EvalError> {
    let mut i = start;

    let debut_ent = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    let nb_ent = i - debut_ent;

    let mut a_point = false;
    let mut nb_frac = 0usize;
    if i < chars.len() && chars[i] == '.' {
        a_point = true;
        i += 1;
        let debut_frac = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        nb_frac = i - debut_frac;
    }

    if nb_ent == 0 && nb_frac == 0 {
        return Err(EvalError::syntaxe("point décimal isolé"));
    }

    // exposant : seulement si suivi d'un chiffre (éventuellement signé),
    // sinon "e" reste un identifiant (ex: "2e" => erreur de syntaxe plus loin)
    let mut a_exposant = false;
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            a_exposant = true;
            i = j;
        }
    }

    let texte: String = chars[start..i].iter().collect();

    // entier "pur" : pas de zéros en tête (007 refusé, 0 et 000 acceptés)
    if !a_point
        && !a_exposant
        && nb_ent > 1
        && texte.starts_with('0')
        && texte.chars().any(|d| d != '0')
    {
        return Err(EvalError::syntaxe(format!(
            "zéros en tête interdits dans un entier: '{texte}'"
        )));
    }

    let n = texte
        .parse::<f64>()
        .map_err(|_| EvalError::syntaxe(format!("nombre invalide: '{texte}'")))?;

    Ok((n, i))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format!("{n}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Pow => "**".to_string(),

            Tok::Virgule => ",".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
