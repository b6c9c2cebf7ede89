//! Noyau arithmétique primitif
//!
//! Fonctions pures, sans état, sans E/S. Toute la famille entière est construite
//! avec +, -, comparaisons et boucles uniquement.
//!
//! Organisation interne :
//! - erreur.rs  : ErreurNoyau + Resultat
//! - outils.rs  : trait Entier + |n|, même signe, parité, moitié
//! - entiers.rs : + - × ÷ mod, factorielle, puissance
//! - reels.rs   : exp, sin, cos (en degrés), arctan, π (Leibniz)

pub mod entiers;
pub mod erreur;
pub mod outils;
pub mod reels;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_reels;

// API publique
pub use entiers::{
    addition, division, factorielle, modulo, multiplication, puissance, soustraction,
};
pub use erreur::{ErreurNoyau, Resultat};
pub use outils::Entier;
pub use reels::{
    approx_pi, approx_pi_defaut, arctangente, cosinus, exp, sinus, SerieLeibniz,
    ITERATIONS_PI_DEFAUT, TERMES_SERIE,
};
