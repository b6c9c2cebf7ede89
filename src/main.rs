// src/main.rs
//
// Calculatrice primitive, point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// - NATIF : journal tracing + réglages (fichier/env) + eframe::run_native
// - WEB   : eframe::WebRunner sur <canvas id="the_canvas_id">, réglages par défaut
//
// Le noyau et les réglages vivent dans la bibliothèque (src/lib.rs) ;
// ici : seulement la couche de présentation.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice primitive";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn initialiser_journal(filtre_defaut: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // RUST_LOG prioritaire ; directive invalide => "info"
    let filtre = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(filtre_defaut).unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filtre)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use calculatrice_primitive::config::Reglages;
    use tracing::{info, warn};

    // Le journal dépend des réglages : on lit d’abord, on signale ensuite.
    let chargement = Reglages::charger();
    let filtre = match &chargement {
        Ok(r) => r.filtre_journal.clone(),
        Err(_) => Reglages::default().filtre_journal,
    };
    initialiser_journal(&filtre);

    let reglages = match chargement {
        Ok(r) => r,
        Err(e) => {
            warn!(erreur = %e, "réglages ignorés, valeurs par défaut");
            Reglages::default()
        }
    };
    info!(
        iterations_pi = reglages.iterations_pi,
        decimales = ?reglages.decimales,
        "démarrage"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 460.0])
            .with_min_inner_size([440.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Pas de système de fichiers ni de variables d’environnement : réglages par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
