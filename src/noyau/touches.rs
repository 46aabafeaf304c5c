// src/noyau/touches.rs
//
// Événements “boutons” reçus par la saisie (contrat étroit avec l’UI).

use super::fonctions::Fonction;

/// Un appui sur une touche de la calculatrice.
#[derive(Clone, Debug, PartialEq)]
pub enum Touche {
    /// Chiffres, '.', opérateurs (+ - × ÷ ^ %), parenthèses.
    Symbole(String),
    /// Boutons scientifiques (log, ln, x!, √, 1/x, sin, cos, tan…).
    Scientifique(OpScientifique),
    /// Bascule sin/cos/tan <-> asin/acos/atan.
    Inv,
    Egal,
    Effacer(Effacement),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effacement {
    /// AC : remise à zéro totale (expression + mode inverse).
    Tout,
    /// DEL : dernier caractère.
    Dernier,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OpScientifique {
    Fact,
    /// 1/x
    Inverse,
    Fonction(Fonction),
    /// Identifiant inconnu : inséré tel quel sous la forme "op(".
    Autre(String),
}

impl OpScientifique {
    pub fn depuis_id(id: &str) -> Self {
        match id {
            "fact" => OpScientifique::Fact,
            "inv" => OpScientifique::Inverse,
            _ => match Fonction::depuis_nom(id) {
                Some(f) => OpScientifique::Fonction(f),
                None => OpScientifique::Autre(id.to_string()),
            },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            OpScientifique::Fact => "fact",
            OpScientifique::Inverse => "inv",
            OpScientifique::Fonction(f) => f.nom(),
            OpScientifique::Autre(s) => s,
        }
    }

    /// Mode inverse : sin/cos/tan deviennent asin/acos/atan, le reste ne bouge pas.
    pub fn en_mode_inverse(self) -> Self {
        match self {
            OpScientifique::Fonction(Fonction::Sin) => OpScientifique::Fonction(Fonction::Asin),
            OpScientifique::Fonction(Fonction::Cos) => OpScientifique::Fonction(Fonction::Acos),
            OpScientifique::Fonction(Fonction::Tan) => OpScientifique::Fonction(Fonction::Atan),
            autre => autre,
        }
    }

    /// Texte inséré quand l’opération ne s’applique pas tout de suite ("sqrt(", "1/(", …).
    pub fn forme_ouvrante(&self) -> String {
        match self {
            OpScientifique::Inverse => "1/(".to_string(),
            _ => format!("{}(", self.id()),
        }
    }
}
