//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreur.rs    : erreurs typées (jamais affichées : l’écran dit "Error")
//! - fonctions.rs : sqrt/log/trig en degrés, 1/x, factorielle
//! - eval.rs      : analyseur descente récursive (texte -> f64)
//! - format.rs    : f64 -> texte d’écran
//! - touches.rs   : événements boutons
//! - saisie.rs    : machine d’état de l’expression

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod saisie;
pub mod touches;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use saisie::Saisie;
pub use touches::{Effacement, OpScientifique, Touche};
