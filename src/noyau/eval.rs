//! Noyau — évaluation (descente récursive, une seule passe)
//!
//! expression := terme (('+'|'-') terme)*
//! terme      := facteur (('*'|'/'|'%') facteur)*
//! facteur    := ('+'|'-') facteur
//!             | ( '(' expression ')'? | nombre | ident facteur ) ('^' facteur)?
//!
//! Remarques :
//! - l’argument d’une fonction est UN facteur : `sin 30`, `sin(30)`, `sin30` sont valides ;
//! - la ')' manquante est tolérée (les boutons insèrent "sqrt(" sans fermer) ;
//! - / et % par zéro suivent IEEE-754 (inf/NaN), rattrapés au formatage ;
//! - imbrication bornée (PROFONDEUR_MAX facteurs ouverts) : pas de débordement de pile.

use super::erreur::ErreurCalc;
use super::fonctions::Fonction;

/// Garde-fou : facteurs imbriqués (parenthèses, signes, arguments, exposants).
pub const PROFONDEUR_MAX: usize = 512;

/// API publique : évalue une expression texte en f64.
///
/// Un curseur neuf par appel : rien n’est partagé entre deux évaluations.
pub fn eval_expression(texte: &str) -> Result<f64, ErreurCalc> {
    Analyseur::new(texte).analyser()
}

/// Curseur d’analyse : position + caractère courant (lookahead).
struct Analyseur {
    car: Vec<char>,
    pos: usize,
    ch: Option<char>,
    profondeur: usize,
}

impl Analyseur {
    fn new(texte: &str) -> Self {
        let car: Vec<char> = texte.chars().collect();
        let ch = car.first().copied();
        Self {
            car,
            pos: 0,
            ch,
            profondeur: 0,
        }
    }

    fn suivant(&mut self) {
        if self.pos < self.car.len() {
            self.pos += 1;
        }
        self.ch = self.car.get(self.pos).copied();
    }

    /// Saute les espaces, puis consomme `c` s’il est le caractère courant.
    fn manger(&mut self, c: char) -> bool {
        while self.ch == Some(' ') {
            self.suivant();
        }
        if self.ch == Some(c) {
            self.suivant();
            return true;
        }
        false
    }

    fn analyser(mut self) -> Result<f64, ErreurCalc> {
        let x = self.expression()?;
        if self.pos < self.car.len() {
            return Err(ErreurCalc::CaractereInattendu(self.ch));
        }
        Ok(x)
    }

    fn expression(&mut self) -> Result<f64, ErreurCalc> {
        let mut x = self.terme()?;
        loop {
            if self.manger('+') {
                x += self.terme()?;
            } else if self.manger('-') {
                x -= self.terme()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn terme(&mut self) -> Result<f64, ErreurCalc> {
        let mut x = self.facteur()?;
        loop {
            if self.manger('*') {
                x *= self.facteur()?;
            } else if self.manger('/') {
                x /= self.facteur()?;
            } else if self.manger('%') {
                x %= self.facteur()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn facteur(&mut self) -> Result<f64, ErreurCalc> {
        if self.profondeur >= PROFONDEUR_MAX {
            return Err(ErreurCalc::TropImbrique(PROFONDEUR_MAX));
        }
        self.profondeur += 1;
        let r = self.facteur_borne();
        self.profondeur -= 1;
        r
    }

    fn facteur_borne(&mut self) -> Result<f64, ErreurCalc> {
        // Signe unaire : lie plus fort que '^' côté base (-2^2 = -4).
        if self.manger('+') {
            return self.facteur();
        }
        if self.manger('-') {
            return Ok(-self.facteur()?);
        }

        let debut = self.pos;
        let mut x = if self.manger('(') {
            let v = self.expression()?;
            self.manger(')');
            v
        } else if matches!(self.ch, Some(c) if est_chiffre(c)) {
            self.nombre(debut)?
        } else if matches!(self.ch, Some(c) if c.is_ascii_lowercase()) {
            self.appel(debut)?
        } else {
            return Err(ErreurCalc::CaractereInattendu(self.ch));
        };

        if self.manger('^') {
            x = x.powf(self.facteur()?);
        }
        Ok(x)
    }

    /// Suite maximale de [0-9.] convertie en f64.
    fn nombre(&mut self, debut: usize) -> Result<f64, ErreurCalc> {
        while matches!(self.ch, Some(c) if est_chiffre(c)) {
            self.suivant();
        }
        let txt: String = self.car[debut..self.pos].iter().collect();
        txt.parse::<f64>()
            .map_err(|_| ErreurCalc::NombreMalforme(txt))
    }

    /// Identifiant [a-z]+ suivi d’UN facteur (son argument).
    fn appel(&mut self, debut: usize) -> Result<f64, ErreurCalc> {
        while matches!(self.ch, Some(c) if c.is_ascii_lowercase()) {
            self.suivant();
        }
        let mut nom: String = self.car[debut..self.pos].iter().collect();

        // "log10" : seul nom avec des chiffres.
        if nom == "log" && self.car[self.pos..].starts_with(&['1', '0']) {
            self.suivant();
            self.suivant();
            nom.push_str("10");
        }

        // L’argument est lu AVANT de valider le nom.
        let arg = self.facteur()?;
        let f = Fonction::depuis_nom(&nom).ok_or(ErreurCalc::FonctionInconnue(nom))?;
        f.appliquer(arg)
    }
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}
