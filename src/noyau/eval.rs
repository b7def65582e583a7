//! Noyau — évaluation (pipeline réel)
//!
//! entrée -> jetons -> RPN -> valeur
//!
//! Chaque appel repart de zéro (aucun cache) ; le registre et les policies
//! sont construits une fois puis seulement lus.

use std::fmt;
use std::sync::OnceLock;

use super::erreur::{ErreurCalcul, Result};
use super::jetons::{format_jetons, tokenize};
use super::nombre::Nombre;
use super::operateurs::Registre;
use super::policies::{policies_standard, Policy};
use super::rpn::{eval_rpn, to_rpn};

/// Trace lisible d’une évaluation (pour l’UI).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Évaluateur configuré : un registre d’opérateurs + des policies ordonnées.
#[derive(Clone)]
pub struct Calculatrice {
    registre: Registre,
    policies: Vec<Policy>,
}

impl fmt::Debug for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculatrice")
            .field("registre", &self.registre)
            .field("policies", &self.policies.len())
            .finish()
    }
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::standard()
    }
}

impl Calculatrice {
    pub fn new(registre: Registre, policies: Vec<Policy>) -> Self {
        Self { registre, policies }
    }

    /// + - * / ^ et garde division par zéro.
    pub fn standard() -> Self {
        Self::new(Registre::standard(), policies_standard())
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn evaluer(&self, expr_str: &str) -> Result<Nombre> {
        self.evaluer_avec_demarche(expr_str).map(|(v, _)| v)
    }

    /// Comme `evaluer`, mais retourne aussi jetons + RPN.
    pub fn evaluer_avec_demarche(&self, expr_str: &str) -> Result<(Nombre, Demarche)> {
        let s = expr_str.trim();
        if s.is_empty() {
            return Err(ErreurCalcul::EntreeVide);
        }

        // 1) Jetons
        let jetons = tokenize(s)?;

        // 2) RPN
        let rpn = to_rpn(&jetons, &self.registre)?;

        // 3) Valeur
        let valeur = eval_rpn(&rpn, &self.registre, &self.policies)?;

        let d = Demarche {
            jetons: format_jetons(&jetons),
            rpn: format_jetons(&rpn),
        };
        Ok((valeur, d))
    }
}

static STANDARD: OnceLock<Calculatrice> = OnceLock::new();

/// API publique : évalue une expression avec la calculatrice standard.
pub fn eval_expression(expr_str: &str) -> Result<Nombre> {
    STANDARD.get_or_init(Calculatrice::standard).evaluer(expr_str)
}
