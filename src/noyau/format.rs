// src/noyau/format.rs
//
// Affichage d’un résultat f64 pour l’écran de la calculatrice.

/// Texte affiché pour tout échec.
pub const TEXTE_ERREUR: &str = "Error";

/// Décimales du rendu “plat”.
const DECIMALES: usize = 8;

/// Au-delà, on passe en notation scientifique.
const LONGUEUR_MAX: usize = 15;

/// Décimales de la mantisse en notation scientifique.
const DECIMALES_SCI: usize = 5;

/// Au-delà, un entier dépasse de toute façon LONGUEUR_MAX.
const ENTIER_MAX: f64 = 1e15;

/// Formate un résultat :
/// - non fini => "Error"
/// - entier => sans point décimal
/// - sinon 8 décimales, zéros et point finaux retirés
/// - "-0" => "0"
/// - plus de 15 caractères (entier compris) => notation scientifique (5 décimales)
pub fn format_resultat(x: f64) -> String {
    if !x.is_finite() {
        return TEXTE_ERREUR.to_string();
    }

    let texte = if x == x.round() && x.abs() < ENTIER_MAX {
        // -0.0 as i64 == 0 : pas de "-0" possible ici.
        (x as i64).to_string()
    } else {
        let brut = format!("{:.*}", DECIMALES, x);
        match brut.trim_end_matches('0').trim_end_matches('.') {
            "-0" | "-" => "0".to_string(),
            s => s.to_string(),
        }
    };

    if texte.chars().count() > LONGUEUR_MAX {
        return format_scientifique(x);
    }
    texte
}

/// Mantisse à 5 décimales, exposant signé sur au moins deux chiffres (1.23457e+20).
fn format_scientifique(x: f64) -> String {
    let brut = format!("{:.*e}", DECIMALES_SCI, x);
    match brut.split_once('e') {
        Some((mantisse, exposant)) => {
            let (signe, chiffres) = match exposant.strip_prefix('-') {
                Some(c) => ('-', c),
                None => ('+', exposant),
            };
            format!("{mantisse}e{signe}{chiffres:0>2}")
        }
        None => brut,
    }
}
