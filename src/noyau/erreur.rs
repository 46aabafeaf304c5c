// src/noyau/erreur.rs
//
// Erreurs du noyau (toutes terminales pour l’opération en cours).
// L’UI n’affiche jamais le détail : seulement "Error". Le détail sert au journal.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum ErreurCalc {
    /// Caractère non consommé / facteur attendu. `None` = fin d’entrée.
    #[error("Unexpected: {}", car_ou_fin(.0))]
    CaractereInattendu(Option<char>),

    #[error("Unknown function: {0}")]
    FonctionInconnue(String),

    #[error("Domain Error: {0}")]
    Domaine(&'static str),

    #[error("Malformed number: {0}")]
    NombreMalforme(String),

    #[error("Number too large: {0}!")]
    DepassementFactorielle(u64),

    #[error("result is not finite")]
    ResultatNonFini,

    /// Trop de facteurs imbriqués pour la descente récursive.
    #[error("Expression too deeply nested (max {0})")]
    TropImbrique(usize),

    /// x! sur une entrée qui n’est pas un entier positif.
    #[error("not a non-negative number: {0}")]
    PasUnNombre(String),
}

fn car_ou_fin(c: &Option<char>) -> String {
    match c {
        Some(c) => c.to_string(),
        None => "end of input".to_string(),
    }
}
