//! Propriétés de la famille entière (proptest).
//!
//! Oracles :
//! - opérateurs natifs (*, /, %, pow) sur des plages qui ne débordent pas
//! - BigInt pour décider exactement quand un résultat sort du type (i8 / i16)
//!
//! Plages bornées : multiplication et puissance sont linéaires en
//! min(|a|, |b|) et en l’exposant (parité par soustractions).

use num_bigint::BigInt;
use proptest::prelude::*;

use super::entiers::{
    addition, division, factorielle, modulo, multiplication, produit, puissance, reduire,
    soustraction,
};
use super::erreur::ErreurNoyau;

fn petit() -> impl Strategy<Value = i64> {
    -10_000i64..10_000i64
}

fn non_nul() -> impl Strategy<Value = i64> {
    prop_oneof![(-10_000i64..=-1i64), (1i64..=10_000i64)]
}

fn dividende() -> impl Strategy<Value = i64> {
    prop_oneof![
        -1_000_000i64..1_000_000i64,
        Just(i64::MAX),
        Just(i64::MIN),
        Just(i64::MIN + 1),
    ]
}

fn signe(x: i64) -> i64 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

fn dans_i8(v: &BigInt) -> bool {
    *v >= BigInt::from(i8::MIN) && *v <= BigInt::from(i8::MAX)
}

fn dans_i16(v: &BigInt) -> bool {
    *v >= BigInt::from(i16::MIN) && *v <= BigInt::from(i16::MAX)
}

proptest! {
    // --- Oracle natif ---

    #[test]
    fn multiplication_egale_natif(a in petit(), b in petit()) {
        prop_assert_eq!(multiplication(a, b), Ok(a * b));
    }

    #[test]
    fn multiplication_commutative(a in petit(), b in petit()) {
        prop_assert_eq!(multiplication(a, b), multiplication(b, a));
    }

    #[test]
    fn multiplication_tours_minimaux(a in petit(), b in petit()) {
        let attendu = a.unsigned_abs().min(b.unsigned_abs());
        prop_assert_eq!(produit(a, b).unwrap().tours, attendu);
    }

    #[test]
    fn addition_soustraction_natives(a in any::<i32>(), b in any::<i32>()) {
        let (a, b) = (i64::from(a), i64::from(b));
        prop_assert_eq!(addition(a, b), Ok(a + b));
        prop_assert_eq!(soustraction(a, b), Ok(a - b));
    }

    #[test]
    fn division_egale_natif(a in dividende(), b in non_nul()) {
        // seul MIN ÷ -1 sort du type ; son reste vaut 0
        match a.checked_div(b) {
            Some(q) => prop_assert_eq!(division(a, b), Ok(q)),
            None => prop_assert_eq!(
                division(a, b),
                Err(ErreurNoyau::Debordement { operation: "division" })
            ),
        }
        prop_assert_eq!(modulo(a, b), Ok(a.wrapping_rem(b)));
    }

    #[test]
    fn division_reconstruit_le_dividende(a in dividende(), b in non_nul()) {
        prop_assume!(!(a == i64::MIN && b == -1));
        let q = division(a, b).unwrap();
        let r = modulo(a, b).unwrap();

        prop_assert_eq!(q * b + r, a);
        prop_assert!(r == 0 || signe(r) == signe(a));
        prop_assert!(r.unsigned_abs() < b.unsigned_abs());
    }

    #[test]
    fn division_par_zero_toujours(a in any::<i64>()) {
        prop_assert_eq!(
            division(a, 0),
            Err(ErreurNoyau::DivisionParZero { operation: "division" })
        );
        prop_assert_eq!(
            modulo(a, 0),
            Err(ErreurNoyau::DivisionParZero { operation: "modulo" })
        );
    }

    #[test]
    fn reduction_un_tour_par_bit(n in 0i64..i64::MAX, d in 1i64..1_000i64) {
        let r = reduire(-n, -d);
        prop_assert_eq!(r.quotient, -(n / d));
        prop_assert_eq!(r.reste, -(n % d));
        // chaque passage retire une puissance de 2 distincte du quotient
        prop_assert_eq!(r.tours, (n / d).count_ones());
    }

    #[test]
    fn puissance_egale_natif(a in -20i64..20i64, b in 0u32..12u32) {
        prop_assert_eq!(puissance(a, i64::from(b)), Ok(a.pow(b)));
    }

    #[test]
    fn puissance_exposant_negatif(a in petit(), b in -1_000i64..0i64) {
        prop_assert_eq!(
            puissance(a, b),
            Err(ErreurNoyau::ExposantInvalide { operation: "puissance" })
        );
    }

    #[test]
    fn factorielle_negative(n in -1_000i64..0i64) {
        prop_assert_eq!(
            factorielle(n),
            Err(ErreurNoyau::ExposantInvalide { operation: "factorielle" })
        );
    }

    #[test]
    fn aller_retour_carre(a in non_nul()) {
        let carre = puissance(a, 2).unwrap();
        prop_assert_eq!(division(carre, a), Ok(a));
        prop_assert_eq!(modulo(carre, a), Ok(0));
    }

    #[test]
    fn purete(a in petit(), b in non_nul()) {
        prop_assert_eq!(multiplication(a, b), multiplication(a, b));
        prop_assert_eq!(division(a, b), division(a, b));
        prop_assert_eq!(modulo(a, b), modulo(a, b));
    }

    // --- Oracle BigInt : débordement exact ---

    #[test]
    fn multiplication_deborde_exactement_i8(a in any::<i8>(), b in any::<i8>()) {
        let exact = BigInt::from(a) * BigInt::from(b);
        let obtenu = multiplication(a, b);
        if dans_i8(&exact) {
            prop_assert_eq!(obtenu.map(BigInt::from), Ok(exact));
        } else {
            prop_assert_eq!(obtenu, Err(ErreurNoyau::Debordement { operation: "multiplication" }));
        }
    }

    #[test]
    fn division_deborde_exactement_i8(a in any::<i8>(), b in any::<i8>()) {
        prop_assume!(b != 0);
        // BigInt tronque vers 0, comme la division native
        let exact = BigInt::from(a) / BigInt::from(b);
        let obtenu = division(a, b);
        if dans_i8(&exact) {
            prop_assert_eq!(obtenu.map(BigInt::from), Ok(exact));
        } else {
            prop_assert_eq!(obtenu, Err(ErreurNoyau::Debordement { operation: "division" }));
        }
        prop_assert_eq!(modulo(a, b), Ok(a.wrapping_rem(b)));
    }

    #[test]
    fn puissance_deborde_exactement_i16(
        a in prop_oneof![-40i16..40i16, Just(i16::MIN), Just(i16::MAX)],
        b in 0u32..20u32
    ) {
        let exact = BigInt::from(a).pow(b);
        let obtenu = puissance(a, b as i16);
        if dans_i16(&exact) {
            prop_assert_eq!(obtenu.map(BigInt::from), Ok(exact));
        } else {
            prop_assert_eq!(obtenu, Err(ErreurNoyau::Debordement { operation: "puissance" }));
        }
    }

    #[test]
    fn addition_deborde_exactement_i8(a in any::<i8>(), b in any::<i8>()) {
        let exact = BigInt::from(a) + BigInt::from(b);
        let obtenu = addition(a, b);
        if dans_i8(&exact) {
            prop_assert_eq!(obtenu.map(BigInt::from), Ok(exact));
        } else {
            prop_assert_eq!(obtenu, Err(ErreurNoyau::Debordement { operation: "addition" }));
        }
    }
}

#[test]
fn factorielle_suit_le_produit_exact() {
    let mut exact = BigInt::from(1);
    for n in 1i64..=25 {
        exact *= BigInt::from(n);
        let obtenu = factorielle(n);
        if exact <= BigInt::from(i64::MAX) {
            assert_eq!(obtenu.map(BigInt::from), Ok(exact.clone()), "n={n}");
        } else {
            assert_eq!(
                obtenu,
                Err(ErreurNoyau::Debordement {
                    operation: "factorielle"
                }),
                "n={n}"
            );
        }
    }
}
