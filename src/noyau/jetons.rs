// src/noyau/jetons.rs

use super::erreur::{ErreurCalcul, Result};
use super::nombre::{format_nombre, parse_decimal, Nombre};

const OPERATEURS_SUPPORTES: &str = "+-*/^";

/// Jeton typé. Seul `Num` porte une valeur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(Nombre),
    Op(char),
    LPar,
    RPar,

    // Nom lu en minuscules ; validé seulement à l’évaluation (sqrt, …)
    Fonction(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreTok {
    Nombre,
    Operateur,
    ParentheseGauche,
    ParentheseDroite,
    Fonction,
}

impl Tok {
    pub fn genre(&self) -> GenreTok {
        match self {
            Tok::Num(_) => GenreTok::Nombre,
            Tok::Op(_) => GenreTok::Operateur,
            Tok::LPar => GenreTok::ParentheseGauche,
            Tok::RPar => GenreTok::ParentheseDroite,
            Tok::Fonction(_) => GenreTok::Fonction,
        }
    }

    /// Texte littéral (forme décimale canonique pour un nombre).
    pub fn texte(&self) -> String {
        match self {
            Tok::Num(r) => format_nombre(r),
            Tok::Op(c) => c.to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Fonction(nom) => nom.clone(),
        }
    }

    pub fn valeur(&self) -> Option<&Nombre> {
        match self {
            Tok::Num(r) => Some(r),
            _ => None,
        }
    }
}

/// '-' est un signe (et non une soustraction) en début d’entrée,
/// après un opérateur, une '(' ou un nom de fonction.
fn est_moins_unaire(c: char, out: &[Tok]) -> bool {
    c == '-'
        && matches!(
            out.last(),
            None | Some(Tok::Op(_)) | Some(Tok::LPar) | Some(Tok::Fonction(_))
        )
}

/// Lit la plus longue suite [0-9] avec au plus un '.' à partir de `i`.
/// Retourne (valeur, position suivante) ; valeur None si suite vide ou illisible.
fn lire_nombre(chars: &[char], mut i: usize) -> (Option<Nombre>, usize) {
    let start = i;
    let mut point_vu = false;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() {
            i += 1;
        } else if c == '.' && !point_vu {
            point_vu = true;
            i += 1;
        } else {
            break;
        }
    }

    let lu: String = chars[start..i].iter().collect();
    (parse_decimal(&lu), i)
}

/// Tokenize une chaîne en jetons (un seul passage, sans retour arrière).
/// Supporte:
/// - nombres décimaux (12, 1.5, .5, 5.)
/// - opérateurs + - * / ^, moins unaire collé au nombre qui suit (-5, 3*-2)
/// - parenthèses ( )
/// - noms de fonctions alphabétiques (normalisés en minuscules)
///
/// Particularité conservée : "1.2.3" donne 1.2 puis .3 (la lecture reprend au second point).
pub fn tokenize(s: &str) -> Result<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        if OPERATEURS_SUPPORTES.contains(c) {
            if est_moins_unaire(c, &out) {
                i += 1;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }

                let (valeur, suivant) = lire_nombre(&chars, i);
                let v = valeur.ok_or_else(|| {
                    ErreurCalcul::EntreeMalformee("Un nombre négatif est mal formé.".into())
                })?;
                out.push(Tok::Num(-v));
                i = suivant;
                continue;
            }

            out.push(Tok::Op(c));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (valeur, suivant) = lire_nombre(&chars, i);
            let v = valeur.ok_or_else(|| ErreurCalcul::EntreeMalformee("Nombre mal formé.".into()))?;
            out.push(Tok::Num(v));
            i = suivant;
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Fonction(word.to_lowercase()));
            continue;
        }

        return Err(ErreurCalcul::EntreeMalformee(format!(
            "Caractère invalide: '{c}'."
        )));
    }

    log::debug!("jetons: {}", format_jetons(&out));
    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::texte)
        .collect::<Vec<_>>()
        .join(" ")
}
