// src/noyau/policies.rs
//
// Gardes exécutées avant chaque opérateur binaire, dans l’ordre d’enregistrement.
// Fonctions pures : (symbole, gauche, droite) -> Ok ou erreur descriptive.

use num_traits::Zero;

use super::erreur::{ErreurCalcul, Result};
use super::nombre::Nombre;

pub type Policy = fn(char, &Nombre, &Nombre) -> Result<()>;

/// '/' avec un diviseur nul => DivisionParZero (avant tout calcul).
pub fn division_par_zero(operateur: char, _gauche: &Nombre, droite: &Nombre) -> Result<()> {
    if operateur == '/' && droite.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(())
}

pub fn policies_standard() -> Vec<Policy> {
    vec![division_par_zero as Policy]
}

/// Exécute toutes les policies ; s’arrête à la première qui refuse.
pub fn verifier(policies: &[Policy], operateur: char, gauche: &Nombre, droite: &Nombre) -> Result<()> {
    policies
        .iter()
        .try_for_each(|policy| policy(operateur, gauche, droite))
}
