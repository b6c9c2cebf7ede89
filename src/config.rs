//! Réglages de la calculatrice (fichier JSON optionnel + variables d’environnement).
//!
//! Ordre de priorité :
//! 1. `CALCULATRICE_ITERATIONS_PI` (remplace `iterations_pi`)
//! 2. fichier `$CALCULATRICE_REGLAGES`, sinon `calculatrice.json` (répertoire courant)
//! 3. valeurs par défaut
//!
//! Le noyau n’en dépend pas : seuls la vue et le contrôleur lisent ces réglages.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Itérations de Leibniz pour le bouton π.
pub const ITERATIONS_PI_APP: u64 = 500_000;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 17;

pub const FICHIER_REGLAGES: &str = "calculatrice.json";
pub const VAR_REGLAGES: &str = "CALCULATRICE_REGLAGES";
pub const VAR_ITERATIONS_PI: &str = "CALCULATRICE_ITERATIONS_PI";

#[derive(Error, Debug)]
pub enum ErreurReglages {
    #[error("lecture de {} impossible : {source}", .chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages {origine} mal formés : {source}")]
    Format {
        origine: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("réglage invalide : {0}")]
    Invalide(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reglages {
    /// Itérations de la série de Leibniz (>= 1).
    pub iterations_pi: u64,
    /// Décimales fixes pour les résultats réels ; None = représentation la plus courte.
    pub decimales: Option<usize>,
    /// Directive EnvFilter utilisée si RUST_LOG est absent.
    pub filtre_journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            iterations_pi: ITERATIONS_PI_APP,
            decimales: None,
            filtre_journal: "info".to_string(),
        }
    }
}

impl Reglages {
    /// Charge depuis l’environnement du processus.
    pub fn charger() -> Result<Self, ErreurReglages> {
        let chemin = std::env::var_os(VAR_REGLAGES).map(PathBuf::from);
        let iterations = std::env::var(VAR_ITERATIONS_PI).ok();
        Self::charger_depuis(chemin, iterations)
    }

    /// Variante testable de `charger`.
    ///
    /// Un chemin explicite doit exister ; le fichier par défaut est facultatif.
    pub fn charger_depuis(
        chemin: Option<PathBuf>,
        iterations_env: Option<String>,
    ) -> Result<Self, ErreurReglages> {
        let base = match chemin {
            Some(c) => Self::depuis_fichier(&c)?,
            None => {
                let defaut = Path::new(FICHIER_REGLAGES);
                if defaut.exists() {
                    Self::depuis_fichier(defaut)?
                } else {
                    Self::default()
                }
            }
        };

        base.avec_iterations_env(iterations_env)?.valider()
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurReglages> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_json(&texte, &chemin.display().to_string())
    }

    pub fn depuis_json(texte: &str, origine: &str) -> Result<Self, ErreurReglages> {
        serde_json::from_str(texte).map_err(|source| ErreurReglages::Format {
            origine: origine.to_string(),
            source,
        })
    }

    fn avec_iterations_env(mut self, valeur: Option<String>) -> Result<Self, ErreurReglages> {
        if let Some(v) = valeur {
            self.iterations_pi = v.trim().parse().map_err(|_| {
                ErreurReglages::Invalide(format!(
                    "{VAR_ITERATIONS_PI}={v:?} n’est pas un entier >= 1"
                ))
            })?;
        }
        Ok(self)
    }

    /// Refuse 0 itération ; borne les décimales à DECIMALES_MAX.
    pub fn valider(mut self) -> Result<Self, ErreurReglages> {
        if self.iterations_pi == 0 {
            return Err(ErreurReglages::Invalide(
                "iterations_pi doit être >= 1".into(),
            ));
        }
        self.decimales = self.decimales.map(|d| d.min(DECIMALES_MAX));
        Ok(self)
    }
}
