// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------------
// NATIF : fenêtre eframe::run_native.
// WEB   : eframe::WebRunner sur <canvas id="the_canvas_id"> (index.html).
// L’application elle-même (AppCalc, impl eframe::App) vit dans src/app.rs.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;
use tracing::info;

mod app;
mod journal;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice scientifique";

/// Construction commune aux deux cibles : thème sombre d’écran de calculatrice.
fn creer_app(cc: &eframe::CreationContext<'_>) -> AppCalc {
    cc.egui_ctx.set_visuals(egui::Visuals::dark());
    AppCalc::default()
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    journal::installer_journal();
    info!("démarrage {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([380.0, 720.0])
            .with_min_inner_size([320.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| Ok(Box::new(creer_app(cc)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // Démarrage réel : web::start (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, info, journal, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    const CANVAS_ID: &str = "the_canvas_id";

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        journal::installer_journal();
        info!("démarrage web {}", env!("CARGO_PKG_VERSION"));

        let canvas = canvas_de_la_page()?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(creer_app(cc)))),
            )
            .await
    }

    /// Titre de l’onglet + canvas cible, ou message lisible dans la console JS.
    fn canvas_de_la_page() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("pas de document (hors navigateur ?)"))?;

        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str(&format!("<canvas id=\"{CANVAS_ID}\"> absent")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{CANVAS_ID} n’est pas un <canvas>")))
    }
}
