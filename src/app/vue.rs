// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran : l’expression, alignée à droite, grosse police
// - Pavé : rangées scientifiques (log ln xʸ x! / Inv sin cos tan / √ 1/x ( ))
//          puis pavé de base (AC <- % ÷ / 7 8 9 × / … / 0 . =)
// - Clavier : chiffres + opérateurs, Enter évalue, Backspace efface
//
// Note :
// - Aucune logique ici : chaque bouton produit une `Touche` pour AppCalc::appuyer.

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::{Effacement, OpScientifique, Touche};

/* ------------------------ Couleurs ------------------------ */

const GRIS_FONCE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
const GRIS_MOYEN: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
const SARCELLE: Color32 = Color32::from_rgb(0x00, 0x96, 0x88);
const ORANGE: Color32 = Color32::from_rgb(0xFF, 0x98, 0x00);
const BLEU_INV: Color32 = Color32::from_rgb(0x02, 0x88, 0xD1);

const HAUTEUR_SCI: f32 = 40.0;
const HAUTEUR_BASE: f32 = 60.0;
const ESPACE: f32 = 8.0;

/// Un bouton du pavé : libellé, touche émise, fond, hauteur.
struct Bouton {
    label: String,
    touche: Touche,
    fond: Color32,
    hauteur: f32,
    colonnes: f32,
}

impl Bouton {
    fn sci(label: &str, touche: Touche) -> Self {
        Self {
            label: label.to_string(),
            touche,
            fond: GRIS_MOYEN,
            hauteur: HAUTEUR_SCI,
            colonnes: 1.0,
        }
    }

    fn base(label: &str, touche: Touche, fond: Color32) -> Self {
        Self {
            label: label.to_string(),
            touche,
            fond,
            hauteur: HAUTEUR_BASE,
            colonnes: 1.0,
        }
    }

    fn chiffre(c: &str) -> Self {
        Self::base(c, symbole(c), GRIS_FONCE)
    }

    fn operateur(label: &str) -> Self {
        Self::base(label, symbole(label), SARCELLE)
    }

    fn large(mut self, colonnes: f32) -> Self {
        self.colonnes = colonnes;
        self
    }
}

fn symbole(s: &str) -> Touche {
    Touche::Symbole(s.to_string())
}

fn scientifique(id: &str) -> Touche {
    Touche::Scientifique(OpScientifique::depuis_id(id))
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_ecran(ui);
        ui.add_space(12.0);
        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Indicateur du mode inverse
                ui.horizontal(|ui| {
                    let txt = RichText::new("INV").monospace().size(14.0);
                    if self.inv() {
                        ui.label(txt.color(BLEU_INV).strong());
                    } else {
                        ui.label(txt.weak());
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(self.expression()).monospace().size(44.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let inv = self.inv();
        let (sin, cos, tan) = if inv {
            ("asin", "acos", "atan")
        } else {
            ("sin", "cos", "tan")
        };

        let mut bouton_inv = Bouton::sci("Inv", Touche::Inv);
        if inv {
            bouton_inv.fond = BLEU_INV;
        }

        let rangees: Vec<Vec<Bouton>> = vec![
            vec![
                Bouton::sci("log", scientifique("log10")),
                Bouton::sci("ln", scientifique("ln")),
                // xʸ passe par le chemin “symbole”
                Bouton::sci("xʸ", symbole("^")),
                Bouton::sci("x!", scientifique("fact")),
            ],
            vec![
                bouton_inv,
                // l’id reste sin/cos/tan : la saisie applique elle-même le mode inverse
                Bouton::sci(sin, scientifique("sin")),
                Bouton::sci(cos, scientifique("cos")),
                Bouton::sci(tan, scientifique("tan")),
            ],
            vec![
                Bouton::sci("√", scientifique("sqrt")),
                Bouton::sci("1/x", scientifique("inv")),
                Bouton::sci("(", symbole("(")),
                Bouton::sci(")", symbole(")")),
            ],
            vec![
                Bouton::base("AC", Touche::Effacer(Effacement::Tout), SARCELLE),
                Bouton::base("<-", Touche::Effacer(Effacement::Dernier), SARCELLE),
                Bouton::operateur("%"),
                Bouton::operateur("÷"),
            ],
            vec![
                Bouton::chiffre("7"),
                Bouton::chiffre("8"),
                Bouton::chiffre("9"),
                Bouton::operateur("×"),
            ],
            vec![
                Bouton::chiffre("4"),
                Bouton::chiffre("5"),
                Bouton::chiffre("6"),
                Bouton::operateur("-"),
            ],
            vec![
                Bouton::chiffre("1"),
                Bouton::chiffre("2"),
                Bouton::chiffre("3"),
                Bouton::operateur("+"),
            ],
            vec![
                Bouton::chiffre("0").large(2.0),
                Bouton::chiffre("."),
                Bouton::base("=", Touche::Egal, ORANGE),
            ],
        ];

        // 4 colonnes, espacement compris
        let largeur = ((ui.available_width() - 3.0 * ESPACE) / 4.0).max(32.0);

        for rangee in rangees {
            ui.horizontal(|ui| {
                for b in rangee {
                    self.ui_bouton(ui, b, largeur);
                }
            });
        }
    }

    fn ui_bouton(&mut self, ui: &mut egui::Ui, b: Bouton, largeur: f32) {
        let taille_texte = if b.hauteur > HAUTEUR_SCI { 24.0 } else { 16.0 };
        let w = largeur * b.colonnes + ESPACE * (b.colonnes - 1.0);

        let bouton = egui::Button::new(
            RichText::new(&b.label)
                .size(taille_texte)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(b.fond);

        if ui.add_sized([w, b.hauteur], bouton).clicked() {
            self.appuyer(b.touche);
        }
    }

    /// Clavier physique : texte tapé + Enter / Backspace.
    /// (Escape est géré dans app.rs, comme raccourci global.)
    pub fn ui_clavier(&mut self, ctx: &egui::Context) {
        let (textes, entree, retour) = ctx.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for t in textes {
            for c in t.chars() {
                if let Some(touche) = touche_clavier(c) {
                    self.appuyer(touche);
                }
            }
        }
        if entree {
            self.appuyer(Touche::Egal);
        }
        if retour {
            self.appuyer(Touche::Effacer(Effacement::Dernier));
        }
    }
}

/// Caractère tapé -> touche (None = ignoré).
fn touche_clavier(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' | '+' | '-' | '(' | ')' | '^' | '%' => Some(symbole(&c.to_string())),
        '*' | 'x' | '×' => Some(symbole("×")),
        '/' | '÷' => Some(symbole("÷")),
        '=' => Some(Touche::Egal),
        '!' => Some(scientifique("fact")),
        _ => None,
    }
}
