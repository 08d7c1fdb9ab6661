// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la structure
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name) suivi de '(' => appel de fonction (arité comptée via les virgules)
// - Ident(name) seul         => nom nu (constante ou nom inconnu, résolu plus tard)
// - '+'/'-' quand on attend une valeur => opérateur unaire
//
// Précédences (du plus faible au plus fort):
//   + -  <  * / %  <  unaires + -  <  **
// ** est associatif à droite et lie plus fort qu'un unaire à sa gauche:
//   -2**2 = -(2**2), 2**-1 = 2**(-1)

use super::erreurs::EvalError;
use super::expr::{Expr, OpBin};
use super::jetons::Tok;

#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Num(f64),
    Nom(String),
    Appel(String, usize),
    Bin(OpBin),
    Neg,
    Pos,
}

/// Élément de la pile d'opérateurs.
#[derive(Debug)]
enum Pile {
    /// Parenthèse ouvrante ; `appel` = nom de fonction si '(' ouvre un appel.
    Paren {
        appel: Option<String>,
        virgules: usize,
    },
    Bin(OpBin),
    Neg,
    Pos,
}

fn precedence(p: &Pile) -> i32 {
    match p {
        Pile::Bin(OpBin::Add | OpBin::Sub) => 1,
        Pile::Bin(OpBin::Mul | OpBin::Div | OpBin::Mod) => 2,
        Pile::Neg | Pile::Pos => 3,
        Pile::Bin(OpBin::Pow) => 4,
        Pile::Paren { .. } => 0,
    }
}

fn op_binaire(t: &Tok) -> Option<OpBin> {
    match t {
        Tok::Plus => Some(OpBin::Add),
        Tok::Minus => Some(OpBin::Sub),
        Tok::Star => Some(OpBin::Mul),
        Tok::Slash => Some(OpBin::Div),
        Tok::Percent => Some(OpBin::Mod),
        Tok::Pow => Some(OpBin::Pow),
        _ => None,
    }
}

fn vers_rpn(p: Pile) -> Option<Rpn> {
    match p {
        Pile::Bin(op) => Some(Rpn::Bin(op)),
        Pile::Neg => Some(Rpn::Neg),
        Pile::Pos => Some(Rpn::Pos),
        Pile::Paren { .. } => None,
    }
}

/// Dépile vers `out` jusqu'à la parenthèse ouvrante (exclue, laissée sur la pile).
fn depile_jusqu_a_paren(ops: &mut Vec<Pile>, out: &mut Vec<Rpn>) -> Result<(), EvalError> {
    loop {
        match ops.last() {
            None => return Err(EvalError::syntaxe("parenthèse fermante sans ouvrante")),
            Some(Pile::Paren { .. }) => return Ok(()),
            Some(_) => {
                if let Some(r) = ops.pop().and_then(vers_rpn) {
                    out.push(r);
                }
            }
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("pow"), LPar, Num(2), Virgule, Num(3), RPar, Pow, Num(2)]
///   rpn:    [Num(2), Num(3), Appel("pow", 2), Num(2), Bin(Pow)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::syntaxe("entrée vide"));
    }

    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // true tant qu'on attend une valeur (début, après opérateur, '(' ou ',')
    let mut attend_valeur = true;

    let mut i = 0usize;
    while i < tokens.len() {
        let tok = &tokens[i];

        match tok {
            Tok::Num(n) => {
                if !attend_valeur {
                    return Err(EvalError::syntaxe(format!("nombre inattendu: {n}")));
                }
                out.push(Rpn::Num(*n));
                attend_valeur = false;
            }

            Tok::Ident(name) => {
                if !attend_valeur {
                    return Err(EvalError::syntaxe(format!("nom inattendu: '{name}'")));
                }
                if matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    // appel : la parenthèse est consommée avec le nom
                    ops.push(Pile::Paren {
                        appel: Some(name.clone()),
                        virgules: 0,
                    });
                    i += 1;
                } else {
                    out.push(Rpn::Nom(name.clone()));
                    attend_valeur = false;
                }
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(EvalError::syntaxe("parenthèse ouvrante inattendue"));
                }
                ops.push(Pile::Paren {
                    appel: None,
                    virgules: 0,
                });
            }

            Tok::Virgule => {
                if attend_valeur {
                    return Err(EvalError::syntaxe("argument manquant"));
                }
                depile_jusqu_a_paren(&mut ops, &mut out)?;
                match ops.last_mut() {
                    Some(Pile::Paren {
                        appel: Some(_),
                        virgules,
                    }) => *virgules += 1,
                    _ => return Err(EvalError::syntaxe("virgule hors d'un appel")),
                }
                attend_valeur = true;
            }

            Tok::RPar => {
                let appel_vide = attend_valeur;
                if appel_vide {
                    // seul cas admis : "f()"
                    let ok = matches!(
                        ops.last(),
                        Some(Pile::Paren {
                            appel: Some(_),
                            virgules: 0
                        })
                    );
                    if !ok {
                        return Err(EvalError::syntaxe("parenthèse fermante inattendue"));
                    }
                } else {
                    depile_jusqu_a_paren(&mut ops, &mut out)?;
                }

                if let Some(Pile::Paren {
                    appel: Some(name),
                    virgules,
                }) = ops.pop()
                {
                    let nargs = if appel_vide { 0 } else { virgules + 1 };
                    out.push(Rpn::Appel(name, nargs));
                }
                attend_valeur = false;
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                // unaire : préfixe, rien à dépiler
                ops.push(if matches!(tok, Tok::Minus) {
                    Pile::Neg
                } else {
                    Pile::Pos
                });
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Pow => {
                if attend_valeur {
                    return Err(EvalError::syntaxe("opérateur inattendu"));
                }
                let op = op_binaire(tok).ok_or_else(|| EvalError::syntaxe("opérateur inconnu"))?;
                let entrant = Pile::Bin(op);
                let p_tok = precedence(&entrant);
                let droite = op == OpBin::Pow;

                while let Some(top) = ops.last() {
                    if matches!(top, Pile::Paren { .. }) {
                        break;
                    }
                    let p_top = precedence(top);
                    let doit_pop = if droite { p_top > p_tok } else { p_top >= p_tok };
                    if !doit_pop {
                        break;
                    }
                    if let Some(r) = ops.pop().and_then(vers_rpn) {
                        out.push(r);
                    }
                }

                ops.push(entrant);
                attend_valeur = true;
            }
        }

        i += 1;
    }

    if attend_valeur {
        return Err(EvalError::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        match vers_rpn(op) {
            Some(r) => out.push(r),
            None => return Err(EvalError::syntaxe("parenthèses non fermées")),
        }
    }

    Ok(out)
}

/// Profondeur maximale de l'arbre reconstruit.
/// L'évaluation et la libération de l'arbre sont récursives : au-delà, refus en `Syntax`.
pub const PROFONDEUR_MAX: usize = 512;

/// Construit une Expr à partir d'une RPN.
/// Chaque entrée de la pile porte la profondeur de son sous-arbre (feuille = 1).
pub fn from_rpn(rpn: &[Rpn]) -> Result<Expr, EvalError> {
    let mut st: Vec<(Expr, usize)> = Vec::new();
    let invalide = || EvalError::syntaxe("expression invalide");

    let empile = |st: &mut Vec<(Expr, usize)>, e: Expr, prof: usize| {
        if prof > PROFONDEUR_MAX {
            return Err(EvalError::syntaxe("expression trop profonde"));
        }
        st.push((e, prof));
        Ok(())
    };

    for r in rpn {
        match r {
            Rpn::Num(n) => st.push((Expr::Nombre(*n), 1)),
            Rpn::Nom(name) => st.push((Expr::Nom(name.clone()), 1)),

            Rpn::Appel(name, nargs) => {
                if st.len() < *nargs {
                    return Err(invalide());
                }
                let (args, profs): (Vec<Expr>, Vec<usize>) =
                    st.split_off(st.len() - nargs).into_iter().unzip();
                let prof = 1 + profs.into_iter().max().unwrap_or(0);
                empile(&mut st, Expr::Appel(name.clone(), args), prof)?;
            }

            Rpn::Bin(op) => {
                let (b, pb) = st.pop().ok_or_else(invalide)?;
                let (a, pa) = st.pop().ok_or_else(invalide)?;
                empile(&mut st, Expr::bin(*op, a, b), 1 + pa.max(pb))?;
            }

            Rpn::Neg => {
                let (x, px) = st.pop().ok_or_else(invalide)?;
                empile(&mut st, Expr::Neg(Box::new(x)), 1 + px)?;
            }

            // +x = x
            Rpn::Pos => {
                if st.is_empty() {
                    return Err(invalide());
                }
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        _ => Err(invalide()),
    }
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    let mut out = Vec::new();
    for r in rpn {
        let s = match r {
            Rpn::Num(n) => format!("{n}"),
            Rpn::Nom(name) => name.clone(),
            Rpn::Appel(name, nargs) => format!("{name}/{nargs}"),
            Rpn::Bin(op) => op.symbole().to_string(),
            Rpn::Neg => "neg".to_string(),
            Rpn::Pos => "pos".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
