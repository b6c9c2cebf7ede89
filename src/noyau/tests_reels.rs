//! Campagne famille réelle : précision sur les domaines usuels, pureté, budget.
//!
//! Les séries sont tronquées à 100 termes : on ne teste la précision que là où
//! la troncature est sans effet (angles de ±360°, |x| modéré pour exp).

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::reels::{approx_pi, arctangente, cosinus, exp, sinus};

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

proptest! {
    #[test]
    fn pythagore(degres in -360.0f64..360.0) {
        let s = sinus(degres);
        let c = cosinus(degres);
        prop_assert!((s * s + c * c - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sinus_impair_cosinus_pair(degres in -360.0f64..360.0) {
        prop_assert!((sinus(-degres) + sinus(degres)).abs() < 1e-12);
        prop_assert!((cosinus(-degres) - cosinus(degres)).abs() < 1e-12);
    }

    #[test]
    fn sinus_proche_de_std(degres in -360.0f64..360.0) {
        let attendu = (degres * PI / 180.0).sin();
        prop_assert!((sinus(degres) - attendu).abs() < 1e-9);
    }

    #[test]
    fn exp_morphisme(a in -5.0f64..5.0, b in -5.0f64..5.0) {
        let gauche = exp(a + b);
        let droite = exp(a) * exp(b);
        prop_assert!((gauche - droite).abs() <= 1e-9 * gauche.abs().max(1.0));
    }

    #[test]
    fn arctangente_impaire(x in -1.0f64..=1.0) {
        let p = arctangente(x).unwrap();
        let m = arctangente(-x).unwrap();
        prop_assert!((p + m).abs() < 1e-12);
    }

    #[test]
    fn arctangente_proche_de_std(x in -0.9f64..0.9) {
        prop_assert!((arctangente(x).unwrap() - x.atan()).abs() < 1e-9);
    }
}

#[test]
fn purete_bit_a_bit() {
    for x in [-720.5, -1.0, 0.0, 0.25, 45.0, 123.456] {
        assert_eq!(sinus(x).to_bits(), sinus(x).to_bits());
        assert_eq!(cosinus(x).to_bits(), cosinus(x).to_bits());
        assert_eq!(exp(x / 100.0).to_bits(), exp(x / 100.0).to_bits());
    }
    assert_eq!(approx_pi(10_000).to_bits(), approx_pi(10_000).to_bits());
}

#[test]
fn pi_converge_lentement() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let mut ecart_precedent = f64::INFINITY;
    for iterations in [10u64, 1_000, 100_000, 1_000_000] {
        let ecart = (approx_pi(iterations) - PI).abs();
        // erreur de Leibniz ~ 1/iterations
        assert!(ecart < 2.0 / iterations as f64, "iterations={iterations}");
        assert!(ecart < ecart_precedent);
        ecart_precedent = ecart;
        budget(t0, max);
    }
}
