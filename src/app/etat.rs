//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (opérandes A/B, résultat, erreur,
//! réglages, calcul en cours) et offrir les actions C / CLR / AC.
//!
//! Aucune évaluation ici : le contrôleur (controleur.rs) appelle le noyau et
//! dépose le résultat via `set_resultat` / `set_erreur`.

use calculatrice_primitive::config::{Reglages, DECIMALES_MAX};

use super::controleur::Operation;
#[cfg(not(target_arch = "wasm32"))]
use super::controleur::TacheFond;

#[derive(Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub operande_a: String,
    pub operande_b: String,

    // --- sorties ---
    pub resultat: String,              // dernier résultat affiché
    pub derniere: Option<Operation>,   // opération qui l’a produit
    pub erreur: String,                // vide si la dernière action a réussi

    // --- paramètres ---
    pub reglages: Reglages,
    reglages_initiaux: Reglages,

    // --- calcul en arrière-plan (un seul à la fois) ---
    #[cfg(not(target_arch = "wasm32"))]
    pub tache: Option<TacheFond>,

    // --- UX ---
    // vue.rs redonne le focus au champ A après un clic sur un bouton.
    pub focus_a: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            operande_a: String::new(),
            operande_b: String::new(),
            resultat: String::new(),
            derniere: None,
            erreur: String::new(),
            reglages_initiaux: reglages.clone(),
            reglages,
            #[cfg(not(target_arch = "wasm32"))]
            tache: None,
            focus_a: true,
        }
    }

    /// Opération qui tourne en arrière-plan (toujours None en wasm).
    pub fn calcul_en_cours(&self) -> Option<Operation> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.tache.as_ref().map(TacheFond::operation)
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : tout effacer, réglages de démarrage, calcul en cours abandonné.
    pub fn reset_total(&mut self) {
        self.clear_operandes();
        self.clear_resultats();
        self.reglages = self.reglages_initiaux.clone();
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.tache = None;
        }
    }

    /// C : effacer A et B (sans toucher au résultat).
    pub fn clear_operandes(&mut self) {
        self.operande_a.clear();
        self.operande_b.clear();
        self.focus_a = true;
    }

    /// CLR : effacer résultat + erreur (sans toucher aux opérandes).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.derniere = None;
        self.erreur.clear();
        self.focus_a = true;
    }

    /// On CONSERVE le dernier résultat : une faute n’efface pas l’écran.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_a = true;
    }

    pub fn set_resultat(&mut self, op: Operation, texte: impl Into<String>) {
        self.erreur.clear();
        self.resultat = texte.into();
        self.derniere = Some(op);
        self.focus_a = true;
    }

    /// None = représentation la plus courte ; Some(d) borné à DECIMALES_MAX.
    pub fn set_decimales(&mut self, decimales: Option<usize>) {
        self.reglages.decimales = decimales.map(|d| d.min(DECIMALES_MAX));
    }
}
