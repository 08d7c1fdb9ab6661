// src/noyau/format.rs
//
// Affichage des flottants (résultats, cible décimale des conversions).
// - chiffres : représentation la plus courte qui relit la même valeur
// - au moins une décimale : 4 -> "4.0"
// - notation scientifique si exposant < -4 ou >= 16 : "1e+16", "1.5e-07"

/// Décompose |x| (fini, non nul) en (chiffres significatifs, exposant décimal).
/// Ex: 1234.5 -> ("12345", 3)
fn chiffres_et_exposant(x: f64) -> (String, i32) {
    // "{:e}" donne déjà les chiffres les plus courts : "1.2345e3", "5e-324"
    let s = format!("{:e}", x.abs());
    let (mantisse, exp) = s.split_once('e').unwrap_or((s.as_str(), "0"));
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    (chiffres, exp.parse().unwrap_or(0))
}

/// Flottant -> texte, comme l'affiche la calculatrice.
pub fn format_flottant(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0".into() } else { "0.0".into() };
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (chiffres, exp) = chiffres_et_exposant(x);

    if !(-4..16).contains(&exp) {
        let (tete, reste) = chiffres.split_at(1);
        let mantisse = if reste.is_empty() {
            tete.to_string()
        } else {
            format!("{tete}.{reste}")
        };
        let signe_exp = if exp < 0 { '-' } else { '+' };
        return format!("{signe}{mantisse}e{signe_exp}{:02}", exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{signe}0.{zeros}{chiffres}");
    }

    let pos_point = exp as usize + 1;
    if chiffres.len() <= pos_point {
        let zeros = "0".repeat(pos_point - chiffres.len());
        format!("{signe}{chiffres}{zeros}.0")
    } else {
        let (ent, frac) = chiffres.split_at(pos_point);
        format!("{signe}{ent}.{frac}")
    }
}
