//! src/app/controleur.rs
//!
//! Contrôleur : relie la vue (AppCalc) au noyau.
//!
//! Rôle :
//! - catalogue des opérations (un bouton chacune)
//! - lecture des opérandes texte (A, B) -> i64 / f64
//! - appel du noyau, mise en forme du résultat
//! - calculs en arrière-plan (natif) : un fil + canal, sondé à chaque frame
//!
//! Aucune arithmétique ici : tout passe par `calculatrice_primitive::noyau`.

use thiserror::Error;
use tracing::debug;

use calculatrice_primitive::config::Reglages;
use calculatrice_primitive::noyau::{self, ErreurNoyau};

use super::etat::AppCalc;

/* ------------------------ Erreurs de la couche de présentation ------------------------ */

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurOperation {
    /// Erreur du noyau, affichée telle quelle.
    #[error(transparent)]
    Noyau(#[from] ErreurNoyau),

    /// Champ vide ou non numérique.
    #[error("{0}")]
    OperandeInvalide(String),

    /// Tout le reste (ex: calcul de π perdu en route).
    #[error("erreur inattendue pendant l’opération {operation}")]
    Inattendue { operation: &'static str },
}

/* ------------------------ Catalogue ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    /// A et B entiers.
    Binaire,
    /// A seulement.
    Unaire,
    /// Aucun opérande.
    Aucune,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
    Factorielle,
    Exponentielle,
    Sinus,
    Cosinus,
    Arctangente,
    Pi,
}

impl Operation {
    /// Ordre d’affichage des boutons.
    pub const TOUTES: [Operation; 12] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulo,
        Operation::Puissance,
        Operation::Factorielle,
        Operation::Exponentielle,
        Operation::Sinus,
        Operation::Cosinus,
        Operation::Arctangente,
        Operation::Pi,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "−",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
            Operation::Modulo => "mod",
            Operation::Puissance => "^",
            Operation::Factorielle => "n!",
            Operation::Exponentielle => "eˣ",
            Operation::Sinus => "sin",
            Operation::Cosinus => "cos",
            Operation::Arctangente => "arctan",
            Operation::Pi => "π",
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Soustraction => "soustraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Modulo => "modulo",
            Operation::Puissance => "puissance",
            Operation::Factorielle => "factorielle",
            Operation::Exponentielle => "exponentielle",
            Operation::Sinus => "sinus",
            Operation::Cosinus => "cosinus",
            Operation::Arctangente => "arctangente",
            Operation::Pi => "π",
        }
    }

    pub fn infobulle(self) -> &'static str {
        match self {
            Operation::Addition => "A + B",
            Operation::Soustraction => "A − B",
            Operation::Multiplication => "A × B (sommes répétées)",
            Operation::Division => "A ÷ B, quotient tronqué vers 0",
            Operation::Modulo => "reste de A ÷ B, du signe de A",
            Operation::Puissance => "A^B, B >= 0 (0^0 = 1)",
            Operation::Factorielle => "A!, A >= 0",
            Operation::Exponentielle => "e^A (série, 100 termes)",
            Operation::Sinus => "sin(A), A en degrés",
            Operation::Cosinus => "cos(A), A en degrés",
            Operation::Arctangente => "arctan(A), A dans [-1, 1]",
            Operation::Pi => "π par la série de Leibniz",
        }
    }

    pub fn arite(self) -> Arite {
        match self {
            Operation::Addition
            | Operation::Soustraction
            | Operation::Multiplication
            | Operation::Division
            | Operation::Modulo
            | Operation::Puissance => Arite::Binaire,

            Operation::Factorielle
            | Operation::Exponentielle
            | Operation::Sinus
            | Operation::Cosinus
            | Operation::Arctangente => Arite::Unaire,

            Operation::Pi => Arite::Aucune,
        }
    }
}

/* ------------------------ Lecture des opérandes ------------------------ */

fn texte_utile<'a>(champ: &str, texte: &'a str) -> Result<&'a str, ErreurOperation> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurOperation::OperandeInvalide(format!(
            "opérande {champ} vide"
        )));
    }
    Ok(s)
}

/// Entier signé 64 bits (espaces ignorés autour).
pub fn lire_entier(champ: &str, texte: &str) -> Result<i64, ErreurOperation> {
    let s = texte_utile(champ, texte)?;
    s.parse::<i64>().map_err(|_| {
        ErreurOperation::OperandeInvalide(format!(
            "opérande {champ} : « {s} » n’est pas un entier valide"
        ))
    })
}

/// Réel fini ; la virgule décimale est acceptée.
pub fn lire_reel(champ: &str, texte: &str) -> Result<f64, ErreurOperation> {
    let s = texte_utile(champ, texte)?;
    let normalise = s.replace(',', ".");
    match normalise.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ErreurOperation::OperandeInvalide(format!(
            "opérande {champ} : « {s} » n’est pas un nombre fini"
        ))),
    }
}

/* ------------------------ Mise en forme ------------------------ */

/// Some(d) : d décimales fixes ; None : plus courte représentation exacte.
pub fn formater_reel(x: f64, decimales: Option<usize>) -> String {
    match decimales {
        Some(d) => format!("{x:.d$}"),
        None => format!("{x}"),
    }
}

/* ------------------------ Répartition ------------------------ */

/// Plus grand exposant accepté par la calculatrice : la parité par
/// soustractions rend `puissance` linéaire en l’exposant.
pub const EXPOSANT_MAX: i64 = 10_000_000;

fn deux_entiers(texte_a: &str, texte_b: &str) -> Result<(i64, i64), ErreurOperation> {
    Ok((lire_entier("A", texte_a)?, lire_entier("B", texte_b)?))
}

/// Lit les opérandes utiles à `op`, appelle le noyau, formate le résultat.
///
/// Synchrone : wasm et tests l’appellent directement, l’application native
/// le fait tourner dans une `TacheFond`.
pub fn executer(
    op: Operation,
    texte_a: &str,
    texte_b: &str,
    reglages: &Reglages,
) -> Result<String, ErreurOperation> {
    debug!(operation = op.nom(), "opération demandée");

    let reel = |x: f64| formater_reel(x, reglages.decimales);

    let texte = match op {
        Operation::Addition => {
            let (a, b) = deux_entiers(texte_a, texte_b)?;
            noyau::addition(a, b)?.to_string()
        }
        Operation::Soustraction => {
            let (a, b) = deux_entiers(texte_a, texte_b)?;
            noyau::soustraction(a, b)?.to_string()
        }
        Operation::Multiplication => {
            let (a, b) = deux_entiers(texte_a, texte_b)?;
            noyau::multiplication(a, b)?.to_string()
        }
        Operation::Division => {
            let (a, b) = deux_entiers(texte_a, texte_b)?;
            noyau::division(a, b)?.to_string()
        }
        Operation::Modulo => {
            let (a, b) = deux_entiers(texte_a, texte_b)?;
            noyau::modulo(a, b)?.to_string()
        }
        Operation::Puissance => {
            let (a, b) = deux_entiers(texte_a, texte_b)?;
            if b > EXPOSANT_MAX {
                return Err(ErreurOperation::OperandeInvalide(format!(
                    "opérande B : exposant limité à {EXPOSANT_MAX}"
                )));
            }
            noyau::puissance(a, b)?.to_string()
        }
        Operation::Factorielle => noyau::factorielle(lire_entier("A", texte_a)?)?.to_string(),
        Operation::Exponentielle => reel(noyau::exp(lire_reel("A", texte_a)?)),
        Operation::Sinus => reel(noyau::sinus(lire_reel("A", texte_a)?)),
        Operation::Cosinus => reel(noyau::cosinus(lire_reel("A", texte_a)?)),
        Operation::Arctangente => reel(noyau::arctangente(lire_reel("A", texte_a)?)?),
        Operation::Pi => reel(noyau::approx_pi(reglages.iterations_pi)),
    };

    Ok(texte)
}

/* ------------------------ Calcul en arrière-plan (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
pub use tache::TacheFond;

#[cfg(not(target_arch = "wasm32"))]
mod tache {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc::{self, Receiver, TryRecvError};
    use std::sync::Arc;

    use tracing::{debug, info, warn};

    use calculatrice_primitive::config::Reglages;
    use calculatrice_primitive::noyau::SerieLeibniz;

    use super::{executer, formater_reel, ErreurOperation, Operation};

    /// Itérations de Leibniz entre deux lectures du drapeau d’arrêt.
    const TRANCHE_PI: u64 = 100_000;

    /// Une opération sur un fil dédié ; résultat récupéré par sondage.
    ///
    /// Abandonner la tâche (drop) lève le drapeau d’arrêt : π s’interrompt à la
    /// tranche suivante, les opérations entières finissent puis sont ignorées.
    #[derive(Debug)]
    pub struct TacheFond {
        operation: Operation,
        recepteur: Receiver<Result<String, ErreurOperation>>,
        arret: Arc<AtomicBool>,
    }

    impl TacheFond {
        pub fn lancer(
            op: Operation,
            texte_a: &str,
            texte_b: &str,
            reglages: &Reglages,
        ) -> Result<Self, ErreurOperation> {
            let (emetteur, recepteur) = mpsc::channel();
            let arret = Arc::new(AtomicBool::new(false));

            let drapeau = Arc::clone(&arret);
            let texte_a = texte_a.to_owned();
            let texte_b = texte_b.to_owned();
            let reglages = reglages.clone();

            std::thread::Builder::new()
                .name(format!("calcul-{}", op.nom()))
                .spawn(move || {
                    let issue = match op {
                        Operation::Pi => match pi_interruptible(reglages.iterations_pi, &drapeau) {
                            Some(v) => Ok(formater_reel(v, reglages.decimales)),
                            None => {
                                debug!("π : calcul abandonné");
                                return;
                            }
                        },
                        _ => executer(op, &texte_a, &texte_b, &reglages),
                    };
                    // le récepteur a pu disparaître (AC pendant le calcul)
                    let _ = emetteur.send(issue);
                })
                .map_err(|e| {
                    warn!(operation = op.nom(), erreur = %e, "impossible de lancer le fil de calcul");
                    ErreurOperation::Inattendue { operation: op.nom() }
                })?;

            info!(operation = op.nom(), "calcul lancé en arrière-plan");
            Ok(Self {
                operation: op,
                recepteur,
                arret,
            })
        }

        pub fn operation(&self) -> Operation {
            self.operation
        }

        /// None tant que le calcul tourne.
        pub fn sonder(&self) -> Option<Result<String, ErreurOperation>> {
            match self.recepteur.try_recv() {
                Ok(issue) => {
                    info!(operation = self.operation.nom(), "calcul terminé");
                    Some(issue)
                }
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!(
                        operation = self.operation.nom(),
                        "le fil de calcul s’est arrêté sans résultat"
                    );
                    Some(Err(ErreurOperation::Inattendue {
                        operation: self.operation.nom(),
                    }))
                }
            }
        }

        /// Attente bloquante (tests).
        #[cfg(test)]
        pub fn attendre(&self) -> Result<String, ErreurOperation> {
            self.recepteur
                .recv()
                .map_err(|_| ErreurOperation::Inattendue {
                    operation: self.operation.nom(),
                })?
        }

        #[cfg(test)]
        pub fn drapeau_arret(&self) -> Arc<AtomicBool> {
            Arc::clone(&self.arret)
        }
    }

    impl Drop for TacheFond {
        fn drop(&mut self) {
            self.arret.store(true, Ordering::Relaxed);
        }
    }

    /// Même f64 que `approx_pi(iterations)` ; None si l’arrêt est demandé.
    pub(super) fn pi_interruptible(iterations: u64, arret: &AtomicBool) -> Option<f64> {
        let mut serie = SerieLeibniz::new();
        while serie.faites() < iterations {
            if arret.load(Ordering::Relaxed) {
                return None;
            }
            serie.avancer((iterations - serie.faites()).min(TRANCHE_PI));
        }
        Some(serie.valeur())
    }
}

/* ------------------------ Actions de la vue ------------------------ */

impl AppCalc {
    /// Bouton d’opération : calcule puis dépose résultat OU erreur.
    ///
    /// Natif : le calcul part en arrière-plan, `sonder_tache` dépose l’issue.
    /// Ignoré si un calcul est déjà en cours.
    pub fn declencher(&mut self, op: Operation) {
        #[cfg(not(target_arch = "wasm32"))]
        self.lancer_tache(op);

        #[cfg(target_arch = "wasm32")]
        {
            let issue = executer(op, &self.operande_a, &self.operande_b, &self.reglages);
            self.deposer(op, issue);
        }
    }

    fn deposer(&mut self, op: Operation, issue: Result<String, ErreurOperation>) {
        match issue {
            Ok(texte) => self.set_resultat(op, texte),
            Err(e) => {
                debug!(operation = op.nom(), erreur = %e, "opération refusée");
                self.set_erreur(e.to_string());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn lancer_tache(&mut self, op: Operation) {
        if self.tache.is_some() {
            return;
        }
        match TacheFond::lancer(op, &self.operande_a, &self.operande_b, &self.reglages) {
            Ok(t) => {
                self.erreur.clear();
                self.tache = Some(t);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// À appeler à chaque frame. Vrai si un calcul est encore en cours.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn sonder_tache(&mut self) -> bool {
        let (op, issue) = match &self.tache {
            None => return false,
            Some(t) => match t.sonder() {
                None => return true,
                Some(issue) => (t.operation(), issue),
            },
        };

        self.tache = None;
        self.deposer(op, issue);
        false
    }
}
