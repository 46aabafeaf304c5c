// src/noyau/fonctions.rs
//
// Fonctions scalaires de la calculatrice
// --------------------------------------
// - Convention degrés : sin/cos/tan prennent des degrés, asin/acos/atan en rendent.
// - Domaines vérifiés : sqrt(x<0), log10/ln(x<=0) => erreur (pas de NaN/inf).
// - Partagé par l’analyseur (eval.rs) et l’application immédiate (saisie.rs).

use super::erreur::ErreurCalc;

/// Garde-fou : 21! ne tient plus dans un u64.
pub const FACTORIELLE_MAX: u64 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Log10,
    Ln,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl Fonction {
    /// Nom reconnu dans le texte d’une expression.
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        Some(match nom {
            "sqrt" => Fonction::Sqrt,
            "log10" => Fonction::Log10,
            "ln" => Fonction::Ln,
            "sin" => Fonction::Sin,
            "cos" => Fonction::Cos,
            "tan" => Fonction::Tan,
            "asin" => Fonction::Asin,
            "acos" => Fonction::Acos,
            "atan" => Fonction::Atan,
            _ => return None,
        })
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sqrt => "sqrt",
            Fonction::Log10 => "log10",
            Fonction::Ln => "ln",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
        }
    }

    /// Applique la fonction. Les seules erreurs sont les erreurs de domaine ;
    /// asin/acos hors [-1, 1] rendent NaN (rattrapé au formatage).
    pub fn appliquer(self, x: f64) -> Result<f64, ErreurCalc> {
        let v = match self {
            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(ErreurCalc::Domaine("sqrt of negative"));
                }
                x.sqrt()
            }
            Fonction::Log10 => {
                if x <= 0.0 {
                    return Err(ErreurCalc::Domaine("log of non-positive"));
                }
                x.log10()
            }
            Fonction::Ln => {
                if x <= 0.0 {
                    return Err(ErreurCalc::Domaine("log of non-positive"));
                }
                x.ln()
            }
            Fonction::Sin => x.to_radians().sin(),
            Fonction::Cos => x.to_radians().cos(),
            Fonction::Tan => x.to_radians().tan(),
            Fonction::Asin => x.asin().to_degrees(),
            Fonction::Acos => x.acos().to_degrees(),
            Fonction::Atan => x.atan().to_degrees(),
        };
        Ok(v)
    }
}

/// 1/x (bouton "1/x") : x = 0 est une erreur, pas un infini.
pub fn inverse(x: f64) -> Result<f64, ErreurCalc> {
    if x == 0.0 {
        return Err(ErreurCalc::Domaine("division by zero"));
    }
    Ok(1.0 / x)
}

/// n! itératif, exact jusqu’à 20!.
pub fn factorielle(n: u64) -> Result<u64, ErreurCalc> {
    if n > FACTORIELLE_MAX {
        return Err(ErreurCalc::DepassementFactorielle(n));
    }
    Ok((2..=n).product())
}
