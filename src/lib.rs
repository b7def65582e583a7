//! Calculatrice EZO : évaluateur d’expressions infixes (jetons -> RPN -> valeur)
//! en rationnels exacts, plus la boucle console qui l’utilise.

pub mod console;
pub mod noyau;

pub use noyau::{eval_expression, Calculatrice, ErreurCalcul, Nombre};
