//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’analyseur et la saisie sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * eval_expression ne panique jamais (valeur ou erreur typée) ;
//!   * imbrication excessive => erreur typée, jamais de débordement de pile ;
//!   * l’expression affichée n’est jamais vide ;
//!   * AC ramène toujours à "0" sans mode inverse.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval::{eval_expression, PROFONDEUR_MAX};
use super::format::format_resultat;
use super::saisie::Saisie;
use super::touches::{Effacement, OpScientifique, Touche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(1000)),
        3 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        4 => format!(".{}", rng.pick(100)),
        _ => format!("{}", 90 * rng.pick(5)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let f = ["sqrt", "log10", "ln", "sin", "cos", "tan", "asin", "acos", "atan"];
    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("{}+{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("{}-{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("{}/{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})^{}", gen_expr(rng, depth - 1), rng.pick(4)),
        6 => format!("{}({})", rng.choisir(&f), gen_expr(rng, depth - 1)),
        _ => format!("-({})%{}", gen_expr(rng, depth - 1), gen_nombre(rng)),
    }
}

/// Texte “n’importe quoi” construit à partir de l’alphabet des boutons.
fn gen_bruit(rng: &mut Rng, longueur: usize) -> String {
    let alphabet = [
        "0", "1", "7", ".", "+", "-", "*", "/", "%", "^", "(", ")", " ", "s", "q", "r", "t", "x",
        "log10", "×", "é",
    ];
    (0..longueur).map(|_| rng.choisir(&alphabet)).collect()
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_touche(rng: &mut Rng) -> Touche {
    match rng.pick(10) {
        0..=3 => Touche::Symbole(
            rng.choisir(&["0", "1", "2", "5", "9", "."])
                .to_string(),
        ),
        4 | 5 => Touche::Symbole(
            rng.choisir(&["+", "-", "×", "÷", "%", "(", ")", "^"])
                .to_string(),
        ),
        6 => Touche::Scientifique(OpScientifique::depuis_id(rng.choisir(&[
            "log10", "ln", "fact", "sqrt", "inv", "sin", "cos", "tan",
        ]))),
        7 => Touche::Inv,
        8 => Touche::Egal,
        _ => Touche::Effacer(Effacement::Dernier),
    }
}

fn rejouer(seed: u64, n: usize) -> Vec<String> {
    let mut rng = Rng::new(seed);
    let mut s = Saisie::default();
    let mut vues = Vec::with_capacity(n);
    for _ in 0..n {
        s.appuyer(gen_touche(&mut rng));
        vues.push(s.expression().to_string());
    }
    vues
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_eval_termine_toujours() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match eval_expression(&expr) {
            Ok(x) => {
                let txt = format_resultat(x);
                assert!(!txt.is_empty(), "expr={expr:?}");
                if x.is_finite() {
                    // Entiers compris : rien de plus long que l’écran.
                    assert!(txt.chars().count() <= 15, "expr={expr:?} txt={txt:?}");
                } else {
                    assert_eq!(txt, "Error");
                }
                seen_ok += 1;
            }
            Err(e) => {
                // Grammaire respectée : seules les erreurs de domaine sont possibles.
                assert!(
                    matches!(e, ErreurCalc::Domaine(_)),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..600 {
        budget(t0, max);

        let n = rng.pick(24) as usize;
        let texte = gen_bruit(&mut rng, n);
        // Valeur ou erreur typée : les deux sont acceptables, pas la panique.
        if let Ok(x) = eval_expression(&texte) {
            assert!(!format_resultat(x).is_empty());
        }
    }
}

#[test]
fn fuzz_safe_saisie_jamais_vide() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    for seed in 1..=20u64 {
        budget(t0, max);

        for vue in rejouer(seed, 200) {
            assert!(!vue.is_empty(), "seed={seed}");
        }
    }
}

#[test]
fn fuzz_safe_saisie_deterministe() {
    assert_eq!(rejouer(0xFACE, 300), rejouer(0xFACE, 300));
}

#[test]
fn fuzz_safe_ac_apres_nimporte_quoi() {
    let mut rng = Rng::new(42);
    for _ in 0..50 {
        let mut s = Saisie::default();
        for _ in 0..rng.pick(40) {
            s.appuyer(gen_touche(&mut rng));
        }
        s.appuyer(Touche::Effacer(Effacement::Tout));
        assert_eq!(s.expression(), "0");
        assert!(!s.inv());
    }
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Profondeur modérée : la descente récursive utilise la pile.
    let expr = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    budget(t0, max);
    assert_eq!(eval_expression(&expr), Ok(1.0));

    // Parenthèses jamais fermées : tolérées.
    let expr = format!("{}2", "(".repeat(200));
    assert_eq!(eval_expression(&expr), Ok(2.0));
}

#[test]
fn fuzz_safe_imbrication_excessive() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // Au-delà de la limite : erreur typée au lieu d’un débordement de pile.
    for motif in ["(", "-", "+", "sqrt(", "sin "] {
        budget(t0, max);
        let expr = format!("{}1", motif.repeat(100_000));
        assert_eq!(
            eval_expression(&expr),
            Err(ErreurCalc::TropImbrique(PROFONDEUR_MAX)),
            "motif={motif:?}"
        );
    }

    // Même chose par les boutons : "Error", puis AC repart de zéro.
    let mut s = Saisie::default();
    for _ in 0..5_000 {
        s.appuyer(Touche::Symbole("(".to_string()));
    }
    s.appuyer(Touche::Symbole("1".to_string()));
    s.appuyer(Touche::Egal);
    assert_eq!(s.expression(), "Error");
    assert_eq!(
        s.derniere_erreur(),
        Some(&ErreurCalc::TropImbrique(PROFONDEUR_MAX))
    );
    s.appuyer(Touche::Effacer(Effacement::Tout));
    assert_eq!(s.expression(), "0");
}
