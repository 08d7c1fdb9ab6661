// src/noyau/expr.rs
//
// AST flottant.
// Les noms (constantes, fonctions) restent non résolus ici :
// la liste blanche est appliquée par eval.rs, au moment de l'évaluation.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl OpBin {
    pub fn symbole(self) -> &'static str {
        match self {
            OpBin::Add => "+",
            OpBin::Sub => "-",
            OpBin::Mul => "*",
            OpBin::Div => "/",
            OpBin::Mod => "%",
            OpBin::Pow => "**",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    /// Nom nu : constante (pi, e) ou nom à rejeter.
    Nom(String),

    /// Appel de fonction : nom + arguments (ordre source).
    Appel(String, Vec<Expr>),

    Neg(Box<Expr>),

    Bin(OpBin, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn bin(op: OpBin, a: Expr, b: Expr) -> Self {
        Expr::Bin(op, Box::new(a), Box::new(b))
    }

    /// Profondeur de l'arbre (garde-fou pour les tests de stress).
    pub fn profondeur(&self) -> usize {
        match self {
            Expr::Nombre(_) | Expr::Nom(_) => 1,
            Expr::Neg(x) => 1 + x.profondeur(),
            Expr::Bin(_, a, b) => 1 + a.profondeur().max(b.profondeur()),
            Expr::Appel(_, args) => 1 + args.iter().map(Expr::profondeur).max().unwrap_or(0),
        }
    }
}
