// src/noyau/operateurs.rs
//
// Table fermée des opérateurs binaires : symbole -> (priorité, associativité, calcul).
// Le registre est construit une fois puis partagé en lecture seule.

use std::collections::HashMap;
use std::fmt;

use num_traits::Zero;

use super::erreur::{ErreurCalcul, Result};
use super::nombre::{puissance, Nombre};

pub type FnOperateur = fn(&Nombre, &Nombre) -> Result<Nombre>;

#[derive(Clone, Copy)]
pub struct SpecOperateur {
    pub symbole: char,
    /// Plus haut = lie plus fort.
    pub priorite: u8,
    pub assoc_droite: bool,
    pub appliquer: FnOperateur,
}

impl fmt::Debug for SpecOperateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecOperateur")
            .field("symbole", &self.symbole)
            .field("priorite", &self.priorite)
            .field("assoc_droite", &self.assoc_droite)
            .finish_non_exhaustive()
    }
}

fn addition(a: &Nombre, b: &Nombre) -> Result<Nombre> {
    Ok(a + b)
}

fn soustraction(a: &Nombre, b: &Nombre) -> Result<Nombre> {
    Ok(a - b)
}

fn multiplication(a: &Nombre, b: &Nombre) -> Result<Nombre> {
    Ok(a * b)
}

fn division(a: &Nombre, b: &Nombre) -> Result<Nombre> {
    // La policy arrête déjà ce cas ; ici on refuse quand même (Ratio / 0 panique).
    if b.is_zero() {
        return Err(ErreurCalcul::DivisionParZero);
    }
    Ok(a / b)
}

pub const OPERATEURS_STANDARD: [SpecOperateur; 5] = [
    SpecOperateur {
        symbole: '+',
        priorite: 1,
        assoc_droite: false,
        appliquer: addition,
    },
    SpecOperateur {
        symbole: '-',
        priorite: 1,
        assoc_droite: false,
        appliquer: soustraction,
    },
    SpecOperateur {
        symbole: '*',
        priorite: 2,
        assoc_droite: false,
        appliquer: multiplication,
    },
    SpecOperateur {
        symbole: '/',
        priorite: 2,
        assoc_droite: false,
        appliquer: division,
    },
    SpecOperateur {
        symbole: '^',
        priorite: 3,
        assoc_droite: true,
        appliquer: puissance,
    },
];

#[derive(Clone, Debug, Default)]
pub struct Registre {
    table: HashMap<char, SpecOperateur>,
}

impl Registre {
    pub fn vide() -> Self {
        Self::default()
    }

    /// + - * / ^
    pub fn standard() -> Self {
        OPERATEURS_STANDARD
            .iter()
            .fold(Self::vide(), |reg, spec| reg.avec(*spec))
    }

    /// Ajoute (ou remplace) l’entrée de `spec.symbole` : une clé = un opérateur.
    pub fn avec(mut self, spec: SpecOperateur) -> Self {
        self.table.insert(spec.symbole, spec);
        self
    }

    pub fn get(&self, symbole: char) -> Option<&SpecOperateur> {
        self.table.get(&symbole)
    }

    /// Comme `get`, mais absent => OperateurInconnu.
    pub fn spec(&self, symbole: char) -> Result<&SpecOperateur> {
        self.get(symbole)
            .ok_or_else(|| ErreurCalcul::OperateurInconnu(symbole.to_string()))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
