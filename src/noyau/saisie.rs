//! Saisie : machine d’état de l’expression affichée.
//!
//! Contrats :
//! - l’expression n’est jamais vide ; "0" (SENTINELLE) = rien de saisi ;
//! - aucune validation de grammaire à la frappe : les fautes sortent au "=" ;
//! - tout échec (évaluation, application immédiate, x!) affiche "Error" ;
//! - transitions déterministes, sans UI : testables telles quelles.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::erreur::ErreurCalc;
use super::eval::eval_expression;
use super::fonctions::{factorielle, inverse};
use super::format::{format_resultat, TEXTE_ERREUR};
use super::touches::{Effacement, OpScientifique, Touche};

/// Expression “vide”.
pub const SENTINELLE: &str = "0";

/// Dernier nombre de l’expression + queue non numérique éventuelle.
fn regex_dernier_nombre() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9.]+)([^0-9.]*)$").expect("regex constante"))
}

#[derive(Clone, Debug)]
pub struct Saisie {
    expression: String,
    inv: bool,
    derniere_erreur: Option<ErreurCalc>,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            expression: SENTINELLE.to_string(),
            inv: false,
            derniere_erreur: None,
        }
    }
}

impl Saisie {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Mode inverse (sin⁻¹/cos⁻¹/tan⁻¹) actif ?
    pub fn inv(&self) -> bool {
        self.inv
    }

    /// Cause du dernier "Error" (journal seulement, jamais affichée).
    pub fn derniere_erreur(&self) -> Option<&ErreurCalc> {
        self.derniere_erreur.as_ref()
    }

    /// Point d’entrée unique pour l’UI.
    pub fn appuyer(&mut self, touche: Touche) {
        self.derniere_erreur = None;
        match touche {
            Touche::Symbole(s) => self.saisir_symbole(&s),
            Touche::Scientifique(op) => self.operation_scientifique(op),
            Touche::Inv => self.basculer_inv(),
            Touche::Egal => self.egal(),
            Touche::Effacer(e) => self.effacer(e),
        }
    }

    /* ------------------------ Chiffres / opérateurs ------------------------ */

    /// Ajoute un chiffre, '.', opérateur ou parenthèse.
    pub fn saisir_symbole(&mut self, jeton: &str) {
        let Some(premier) = jeton.chars().next() else {
            return;
        };

        if jeton == "%" {
            self.pourcentage();
            return;
        }

        if self.expression != SENTINELLE {
            self.expression.push_str(jeton);
            return;
        }

        // Sur la sentinelle : opérateur, chiffre ou '(' remplacent ; le reste s’ajoute ("0.", "0)").
        let est_operateur = !premier.is_alphanumeric() && !matches!(jeton, "." | "(" | ")");
        if est_operateur || premier.is_ascii_digit() || jeton == "(" {
            self.expression = jeton.to_string();
        } else {
            self.expression.push_str(jeton);
        }
    }

    /// '%' : le dernier nombre est divisé par 100 ; la queue non numérique qui le suit
    /// disparaît avec lui. Sans nombre final, '%' est ajouté tel quel.
    fn pourcentage(&mut self) {
        let remplacement = regex_dernier_nombre()
            .captures(&self.expression)
            .and_then(|c| {
                let debut = c.get(0)?.start();
                let v = c.get(1)?.as_str().parse::<f64>().ok()?;
                Some((debut, format_resultat(v / 100.0)))
            });

        match remplacement {
            Some((debut, texte)) => {
                self.expression.truncate(debut);
                self.expression.push_str(&texte);
            }
            None => self.expression.push('%'),
        }
    }

    /* ------------------------ Boutons scientifiques ------------------------ */

    pub fn operation_scientifique(&mut self, op: OpScientifique) {
        let op = if self.inv { op.en_mode_inverse() } else { op };

        match op {
            OpScientifique::Fact => match self.factorielle_courante() {
                Ok(texte) => self.expression = texte,
                Err(e) => self.echec(e),
            },
            OpScientifique::Fonction(_) | OpScientifique::Inverse => {
                match self.valeur_immediate(&op) {
                    Some(v) => match Self::appliquer(&op, v) {
                        Ok(x) => self.expression = format_resultat(x),
                        Err(e) => self.echec(e),
                    },
                    None => self.inserer(&op.forme_ouvrante()),
                }
            }
            OpScientifique::Autre(_) => self.inserer(&op.forme_ouvrante()),
        }
    }

    /// Valeur à laquelle appliquer `op` tout de suite : nombre seul, pas la sentinelle,
    /// pas de '(' ouverte, pas déjà le nom de l’opération.
    fn valeur_immediate(&self, op: &OpScientifique) -> Option<f64> {
        let e = &self.expression;
        if e == SENTINELLE || e.contains('(') || e.contains(op.id()) {
            return None;
        }
        e.parse::<f64>().ok()
    }

    fn appliquer(op: &OpScientifique, v: f64) -> Result<f64, ErreurCalc> {
        let x = match op {
            OpScientifique::Fonction(f) => f.appliquer(v)?,
            OpScientifique::Inverse => inverse(v)?,
            // Fact / Autre ne passent pas par ici.
            _ => v,
        };
        fini(x)
    }

    /// x! de l’expression courante (arrondie à l’entier le plus proche).
    fn factorielle_courante(&self) -> Result<String, ErreurCalc> {
        let pas_un_nombre = || ErreurCalc::PasUnNombre(self.expression.clone());

        let v = self.expression.parse::<f64>().map_err(|_| pas_un_nombre())?;
        let n = v.round();
        if !n.is_finite() || n < 0.0 {
            return Err(pas_un_nombre());
        }

        let r = factorielle(n as u64)?;
        Ok(format_resultat(r as f64))
    }

    /// Remplace la sentinelle ou ajoute en fin d’expression.
    fn inserer(&mut self, texte: &str) {
        if self.expression == SENTINELLE {
            self.expression = texte.to_string();
        } else {
            self.expression.push_str(texte);
        }
    }

    /* ------------------------ Inv / = / effacement ------------------------ */

    pub fn basculer_inv(&mut self) {
        self.inv = !self.inv;
    }

    /// "=" : glyphes d’affichage -> syntaxe de l’analyseur, puis évaluation.
    pub fn egal(&mut self) {
        if self.expression.trim().is_empty() || self.expression == TEXTE_ERREUR {
            return;
        }

        let propre = self
            .expression
            .replace('×', "*")
            .replace('÷', "/")
            .replace("√(", "sqrt(")
            .replace('²', "^2");

        match eval_expression(&propre).and_then(fini) {
            Ok(x) => self.expression = format_resultat(x),
            Err(e) => self.echec(e),
        }
    }

    pub fn effacer(&mut self, e: Effacement) {
        match e {
            Effacement::Tout => {
                self.expression = SENTINELLE.to_string();
                self.inv = false;
            }
            Effacement::Dernier => {
                if self.expression == TEXTE_ERREUR || self.expression.chars().count() <= 1 {
                    self.expression = SENTINELLE.to_string();
                } else {
                    self.expression.pop();
                }
            }
        }
    }

    fn echec(&mut self, e: ErreurCalc) {
        debug!(expression = %self.expression, erreur = %e, "échec");
        self.expression = TEXTE_ERREUR.to_string();
        self.derniere_erreur = Some(e);
    }
}

fn fini(x: f64) -> Result<f64, ErreurCalc> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ErreurCalc::ResultatNonFini)
    }
}
