// src/noyau/outils.rs
//
// Boîte à outils entière (interne)
// --------------------------------
// Uniquement +, -, comparaisons et boucles.
// Pas de *, /, %, abs(), pow(), ni opérations binaires.

use std::fmt;

use num_traits::{PrimInt, Signed};

/// Entier signé à largeur fixe (i8 … i128) accepté par le noyau.
pub trait Entier: PrimInt + Signed + fmt::Display + fmt::Debug {}

impl<T> Entier for T where T: PrimInt + Signed + fmt::Display + fmt::Debug {}

/// 2, construit par addition.
#[inline]
pub(crate) fn deux<T: Entier>() -> T {
    T::one() + T::one()
}

/// -|n| sans abs().
///
/// Les magnitudes sont manipulées côté négatif : -|T::min_value()| est
/// représentable, |T::min_value()| ne l’est pas. Jamais de débordement.
pub(crate) fn magnitude_negative<T: Entier>(n: T) -> T {
    if n > T::zero() {
        T::zero() - n
    } else {
        n
    }
}

/// Vrai si a et b sont tous deux >= 0 ou tous deux < 0 (0 compte comme positif).
pub(crate) fn meme_signe<T: Entier>(a: T, b: T) -> bool {
    let zero = T::zero();
    (a >= zero && b >= zero) || (a < zero && b < zero)
}

/// Parité par soustractions de 2. Précondition : n >= 0.
pub(crate) fn est_pair<T: Entier>(n: T) -> bool {
    debug_assert!(n >= T::zero(), "est_pair : n doit être >= 0");

    let deux = deux::<T>();
    let mut m = n;
    while m >= deux {
        m = m - deux;
    }
    m == T::zero()
}

/// floor(n/2) en comptant les soustractions de 2. Précondition : n >= 0.
pub(crate) fn moitie<T: Entier>(n: T) -> T {
    debug_assert!(n >= T::zero(), "moitie : n doit être >= 0");

    let deux = deux::<T>();
    let mut m = n;
    let mut c = T::zero();
    while m >= deux {
        m = m - deux;
        c = c + T::one();
    }
    c
}
