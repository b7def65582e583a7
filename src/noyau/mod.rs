//! Noyau de calcul
//!
//! Organisation interne :
//! - nombre.rs     : Nombre (rationnel exact) + lecture/affichage décimal + ^ / sqrt
//! - erreur.rs     : ErreurCalcul
//! - jetons.rs     : tokenisation (moins unaire compris)
//! - operateurs.rs : registre symbole -> priorité, associativité, calcul
//! - policies.rs   : gardes avant opérateur (division par zéro)
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - eval.rs       : pipeline complet + Calculatrice

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod nombre;
pub mod operateurs;
pub mod policies;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_expression, Calculatrice, Demarche};
pub use nombre::{format_nombre, format_nombre_decimales, Nombre, DECIMALES_AFFICHAGE};
