//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la saisie du noyau et lui transmettre les touches, avec journal.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `Saisie::appuyer`.
//! - L’écran n’affiche que l’expression ; la cause d’un "Error" va au journal.

use tracing::debug;

use crate::noyau::{Effacement, Saisie, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    saisie: Saisie,
}

impl AppCalc {
    /// Texte à afficher (seul état visible).
    pub fn expression(&self) -> &str {
        self.saisie.expression()
    }

    pub fn inv(&self) -> bool {
        self.saisie.inv()
    }

    /// Une touche (bouton ou clavier).
    pub fn appuyer(&mut self, touche: Touche) {
        debug!(?touche, avant = %self.saisie.expression(), "touche");
        self.saisie.appuyer(touche);

        if let Some(e) = self.saisie.derniere_erreur() {
            debug!(erreur = %e, "affichage Error");
        }
    }

    /// AC : remise à zéro totale.
    pub fn reset_total(&mut self) {
        self.appuyer(Touche::Effacer(Effacement::Tout));
    }
}
