// src/noyau/reels.rs
//
// Famille réelle (f64)
// --------------------
// Séries de Maclaurin tronquées à TERMES_SERIE termes :
// pas de test de convergence, pas de sortie anticipée, coût fixe.
// Précision non garantie pour les grands arguments (annulations).
//
// π : série de Leibniz, coût linéaire en nombre d’itérations.

use std::f64::consts::PI;

use tracing::{debug, trace};

use super::erreur::{ErreurNoyau, Resultat};

/// Nombre de termes sommés pour exp / sin / cos / arctan (terme 0 compris).
pub const TERMES_SERIE: u32 = 100;

/// Itérations de Leibniz par défaut côté noyau.
pub const ITERATIONS_PI_DEFAUT: u64 = 10_000_000;

#[inline]
fn en_radians(degres: f64) -> f64 {
    degres * (PI / 180.0)
}

/// e^x : terme_n = terme_{n-1} · x / n.
pub fn exp(x: f64) -> f64 {
    let mut terme = 1.0;
    let mut somme = terme;

    for n in 1..TERMES_SERIE {
        terme = terme * x / f64::from(n);
        somme += terme;
    }
    somme
}

/// sin(degrés) : terme_n = -terme_{n-1} · x² / ((2n)(2n+1)).
pub fn sinus(degres: f64) -> f64 {
    let x = en_radians(degres);
    let mut terme = x;
    let mut somme = terme;

    for n in 1..TERMES_SERIE {
        let n = f64::from(n);
        terme = -terme * x * x / ((2.0 * n) * (2.0 * n + 1.0));
        somme += terme;
    }
    somme
}

/// cos(degrés) : terme_n = -terme_{n-1} · x² / ((2n-1)(2n)).
pub fn cosinus(degres: f64) -> f64 {
    let x = en_radians(degres);
    let mut terme = 1.0;
    let mut somme = terme;

    for n in 1..TERMES_SERIE {
        let n = f64::from(n);
        terme = -terme * x * x / ((2.0 * n - 1.0) * (2.0 * n));
        somme += terme;
    }
    somme
}

/// arctan(x) sur [-1, 1] : terme_n = -terme_{n-1} · x² · (2n-1)/(2n+1).
///
/// Hors de l’intervalle (ou NaN) : HorsDomaine, avant tout calcul.
/// En x = ±1 la convergence est lente (erreur de l’ordre de 1/(2·TERMES_SERIE)).
pub fn arctangente(x: f64) -> Resultat<f64> {
    if !(-1.0..=1.0).contains(&x) {
        let e = ErreurNoyau::hors_domaine(x);
        debug!(erreur = %e, "noyau : opération refusée");
        return Err(e);
    }

    let mut terme = x;
    let mut somme = terme;

    for n in 1..TERMES_SERIE {
        let n = f64::from(n);
        terme = -terme * x * x * (2.0 * n - 1.0) / (2.0 * n + 1.0);
        somme += terme;
    }
    Ok(somme)
}

/// Somme partielle de Leibniz, avançable par tranches.
///
/// N itérations, en une tranche ou en plusieurs, donnent le même f64 au bit
/// près que `approx_pi(N)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SerieLeibniz {
    somme: f64,
    signe: f64,
    denom: f64,
    faites: u64,
}

impl Default for SerieLeibniz {
    fn default() -> Self {
        Self {
            somme: 0.0,
            signe: 1.0,
            denom: 1.0,
            faites: 0,
        }
    }
}

impl SerieLeibniz {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avancer(&mut self, iterations: u64) {
        for _ in 0..iterations {
            self.somme += self.signe / self.denom;
            self.signe = -self.signe;
            self.denom += 2.0;
        }
        self.faites = self.faites.saturating_add(iterations);
    }

    /// Itérations déjà sommées.
    pub fn faites(&self) -> u64 {
        self.faites
    }

    /// 4 · somme partielle.
    pub fn valeur(&self) -> f64 {
        4.0 * self.somme
    }
}

/// π ≈ 4 · Σ_{n < iterations} (-1)^n / (2n+1). 0 itération => 0.
pub fn approx_pi(iterations: u64) -> f64 {
    let mut serie = SerieLeibniz::new();
    serie.avancer(iterations);

    trace!(iterations = iterations, "série de Leibniz");
    serie.valeur()
}

pub fn approx_pi_defaut() -> f64 {
    approx_pi(ITERATIONS_PI_DEFAUT)
}
