// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Levées au point de violation, avant toute mutation d’accumulateur.
// Le noyau ne rattrape rien : l’appelant décide de l’affichage.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Diviseur nul (division ou modulo).
    #[error("{operation} par zéro non définie")]
    DivisionParZero { operation: &'static str },

    /// Argument négatif pour la factorielle ou exposant négatif.
    #[error("{operation} : argument négatif non supporté")]
    ExposantInvalide { operation: &'static str },

    /// arctangente hors de [-1, 1] (série non convergente).
    #[error("arctangente : x = {valeur} hors de l’intervalle [-1, 1]")]
    HorsDomaine { valeur: String },

    /// Résultat (ou valeur absolue intermédiaire) non représentable.
    #[error("{operation} : dépassement de capacité entière")]
    Debordement { operation: &'static str },
}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;

impl ErreurNoyau {
    pub(crate) fn hors_domaine(x: f64) -> Self {
        ErreurNoyau::HorsDomaine {
            valeur: x.to_string(),
        }
    }
}
