// src/journal.rs
//
// Journal (tracing) — natif seulement.
// RUST_LOG pilote le filtre ; par défaut : infos de l’application.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;

/// Filtre utilisé si RUST_LOG est absent ou invalide.
#[cfg(not(target_arch = "wasm32"))]
const FILTRE_DEFAUT: &str = "calculatrice_sci=info";

#[cfg(not(target_arch = "wasm32"))]
pub fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT));

    // try_init : un second appel (tests, relance) ne doit pas paniquer.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .try_init();
}

/// En wasm32, pas de stdout : les macros tracing restent sans effet.
#[cfg(target_arch = "wasm32")]
pub fn installer_journal() {}
