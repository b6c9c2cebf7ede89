//! Calculatrice primitive, bibliothèque
//!
//! - `noyau`  : arithmétique entière et réelle sans opérateurs natifs de haut niveau
//! - `config` : réglages de la couche de présentation
//!
//! L’interface egui (binaire) ne fait que lire deux champs et appeler le noyau.

pub mod config;
pub mod noyau;
