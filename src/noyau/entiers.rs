// src/noyau/entiers.rs
//
// Famille entière
// ---------------
// - addition / soustraction : primitives autorisées (vérifiées)
// - multiplication          : sommes répétées, bornées par le plus petit opérande
// - division / modulo       : réduction par doublement (boucle partagée)
// - factorielle / puissance : construites sur multiplication
//
// Politique de débordement : vérifiée. Tout résultat non représentable
// donne ErreurNoyau::Debordement, jamais de wrap.
// Les magnitudes vivent côté négatif (-|n|) : T::min_value() est un opérande
// comme un autre, seuls MIN × -1 et MIN ÷ -1 débordent.

use num_traits::{CheckedAdd, CheckedSub};
use tracing::{debug, trace};

use super::erreur::{ErreurNoyau, Resultat};
use super::outils::{est_pair, magnitude_negative, meme_signe, moitie, Entier};

/* ------------------------ Constructeurs d’erreurs ------------------------ */

fn echec(e: ErreurNoyau) -> ErreurNoyau {
    debug!(erreur = %e, "noyau : opération refusée");
    e
}

fn deborde(operation: &'static str) -> ErreurNoyau {
    echec(ErreurNoyau::Debordement { operation })
}

/* ------------------------ Primitives ------------------------ */

pub fn addition<T: Entier>(a: T, b: T) -> Resultat<T> {
    a.checked_add(&b).ok_or_else(|| deborde("addition"))
}

pub fn soustraction<T: Entier>(a: T, b: T) -> Resultat<T> {
    a.checked_sub(&b).ok_or_else(|| deborde("soustraction"))
}

/* ------------------------ Multiplication ------------------------ */

/// Produit + nombre d’additions effectuées.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Produit<T> {
    pub valeur: T,
    pub tours: u64,
}

/// Sommes répétées du plus grand |opérande|, min(|a|, |b|) fois.
///
/// Produit positif : on retranche la magnitude négative ; produit négatif :
/// on l’ajoute. T::min_value() reste atteignable dans les deux sens.
pub(crate) fn produit<T: Entier>(a: T, b: T) -> Resultat<Produit<T>> {
    const OP: &str = "multiplication";

    if a == T::zero() || b == T::zero() {
        return Ok(Produit {
            valeur: T::zero(),
            tours: 0,
        });
    }

    let positif = meme_signe(a, b);
    let x = magnitude_negative(a);
    let y = magnitude_negative(b);

    // plus petite magnitude = plus grande valeur négative
    let (mineur, majeur) = if x > y { (x, y) } else { (y, x) };

    let mut acc = T::zero();
    let mut i = T::zero();
    let mut tours: u64 = 0;
    while i > mineur {
        let suivant = if positif {
            acc.checked_sub(&majeur)
        } else {
            acc.checked_add(&majeur)
        };
        acc = suivant.ok_or_else(|| deborde(OP))?;
        i = i - T::one();
        tours += 1;
    }

    trace!(tours = tours, "multiplication");
    Ok(Produit { valeur: acc, tours })
}

pub fn multiplication<T: Entier>(a: T, b: T) -> Resultat<T> {
    produit(a, b).map(|p| p.valeur)
}

/* ------------------------ Réduction par doublement ------------------------ */

/// Résultat de la boucle partagée division/modulo, en magnitudes négatives :
/// `quotient` = -⌊|n| / |d|⌋, `reste` = -(|n| mod |d|).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Reduction<T> {
    pub quotient: T,
    pub reste: T,
    /// Passages dans la boucle externe (une soustraction chacun).
    pub tours: u32,
    /// Doublements cumulés sur tous les passages.
    pub doublements: u32,
}

/// n <= 0, d < 0 (magnitudes négatives).
///
/// À chaque passage : on double `temp` (et `mult`) tant que n - temp <= temp,
/// c.-à-d. plus grand |d|·2^k <= |n|, puis on le retire en une fois.
/// n <= temp + temp <= 0 et |mult| <= |temp| : aucun débordement possible,
/// même pour n = T::min_value().
pub(crate) fn reduire<T: Entier>(n: T, d: T) -> Reduction<T> {
    debug_assert!(n <= T::zero() && d < T::zero());

    let mut n = n;
    let mut q = T::zero();
    let mut tours = 0u32;
    let mut doublements = 0u32;

    while n <= d {
        let mut temp = d;
        let mut mult = T::zero() - T::one();
        while n - temp <= temp {
            temp = temp + temp;
            mult = mult + mult;
            doublements += 1;
        }
        n = n - temp;
        q = q + mult;
        tours += 1;
    }

    trace!(tours = tours, doublements = doublements, "réduction par doublement");
    Reduction {
        quotient: q,
        reste: n,
        tours,
        doublements,
    }
}

/// Quotient tronqué vers 0. Seul MIN ÷ -1 déborde.
pub fn division<T: Entier>(a: T, b: T) -> Resultat<T> {
    const OP: &str = "division";

    if b == T::zero() {
        return Err(echec(ErreurNoyau::DivisionParZero { operation: OP }));
    }
    if a == T::zero() {
        return Ok(T::zero());
    }

    let q = reduire(magnitude_negative(a), magnitude_negative(b)).quotient;
    if meme_signe(a, b) {
        T::zero().checked_sub(&q).ok_or_else(|| deborde(OP))
    } else {
        Ok(q)
    }
}

/// Reste du signe du dividende ; |reste| < |b|.
pub fn modulo<T: Entier>(a: T, b: T) -> Resultat<T> {
    const OP: &str = "modulo";

    if b == T::zero() {
        return Err(echec(ErreurNoyau::DivisionParZero { operation: OP }));
    }
    if a == T::zero() {
        return Ok(T::zero());
    }

    // |reste| < |b| <= |MIN| : l’opposé est toujours représentable
    let r = reduire(magnitude_negative(a), magnitude_negative(b)).reste;
    Ok(if a < T::zero() { r } else { T::zero() - r })
}

/* ------------------------ Factorielle / puissance ------------------------ */

pub fn factorielle<T: Entier>(n: T) -> Resultat<T> {
    const OP: &str = "factorielle";

    if n < T::zero() {
        return Err(echec(ErreurNoyau::ExposantInvalide { operation: OP }));
    }
    if n == T::zero() {
        return Ok(T::one());
    }

    let mut acc = T::one();
    let mut i = T::one();
    while i <= n {
        acc = multiplication(acc, i).map_err(|_| deborde(OP))?;
        if i == n {
            break;
        }
        i = i + T::one();
    }
    Ok(acc)
}

/// Exponentiation rapide (carré-et-multiplie), exposant >= 0, 0^0 = 1.
///
/// La base n’est élevée au carré que s’il reste un tour : pas de débordement
/// parasite sur le dernier carré (2^62 passe en i64).
pub fn puissance<T: Entier>(a: T, b: T) -> Resultat<T> {
    const OP: &str = "puissance";

    if b < T::zero() {
        return Err(echec(ErreurNoyau::ExposantInvalide { operation: OP }));
    }
    if b == T::zero() {
        return Ok(T::one());
    }
    if a == T::zero() {
        return Ok(T::zero());
    }

    let mut base = a;
    let mut exp = b;
    let mut res = T::one();
    while exp > T::zero() {
        if !est_pair(exp) {
            res = multiplication(res, base).map_err(|_| deborde(OP))?;
        }
        exp = moitie(exp);
        if exp > T::zero() {
            base = multiplication(base, base).map_err(|_| deborde(OP))?;
        }
    }
    Ok(res)
}
