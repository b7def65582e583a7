// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix) selon priorité/associativité du registre
// - Puis évaluer la RPN avec une pile de valeurs
//
// Règles:
// - Fonction : empilée, sortie après la ')' qui ferme son argument
//   (ou dès qu’un opérateur la rencontre au sommet de la pile).
// - Égalité de priorité : '<=' pour un opérateur associatif à gauche, '<' à droite
//   => "2^3^2" = 2^(3^2), "8-3-2" = (8-3)-2.

use super::erreur::{ErreurCalcul, Result};
use super::jetons::{format_jetons, Tok};
use super::nombre::{racine_carree, Nombre};
use super::operateurs::Registre;
use super::policies::{verifier, Policy};

/// Sort les opérateurs du sommet tant que `op` le demande.
fn traiter_operateur(
    op: char,
    registre: &Registre,
    ops: &mut Vec<Tok>,
    out: &mut Vec<Tok>,
) -> Result<()> {
    let courant = registre.spec(op)?;

    while let Some(top) = ops.last() {
        let doit_pop = match top {
            // fonction au sommet : toujours sortie
            Tok::Fonction(_) => true,
            Tok::Op(s) => {
                let sommet = registre.spec(*s)?;
                if courant.assoc_droite {
                    courant.priorite < sommet.priorite
                } else {
                    courant.priorite <= sommet.priorite
                }
            }
            _ => false,
        };

        if !doit_pop {
            break;
        }
        if let Some(t) = ops.pop() {
            out.push(t);
        }
    }

    ops.push(Tok::Op(op));
    Ok(())
}

/// Dépile jusqu’à '(' ; puis sort la fonction éventuelle qui la précède.
fn traiter_parenthese_droite(ops: &mut Vec<Tok>, out: &mut Vec<Tok>) -> Result<()> {
    loop {
        match ops.pop() {
            None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
            Some(Tok::LPar) => break,
            Some(t) => out.push(t),
        }
    }

    if matches!(ops.last(), Some(Tok::Fonction(_))) {
        if let Some(f) = ops.pop() {
            out.push(f);
        }
    }
    Ok(())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction("sqrt"), LPar, Num(16), RPar, Op('+'), Num(2)]
///   rpn:    [Num(16), Fonction("sqrt"), Num(2), Op('+')]
pub fn to_rpn(tokens: &[Tok], registre: &Registre) -> Result<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),
            Tok::Fonction(_) | Tok::LPar => ops.push(tok),
            Tok::Op(op) => traiter_operateur(op, registre, &mut ops, &mut out)?,
            Tok::RPar => traiter_parenthese_droite(&mut ops, &mut out)?,
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar | Tok::RPar) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    log::debug!("rpn: {}", format_jetons(&out));
    Ok(out)
}

fn appliquer_fonction(nom: &str, x: &Nombre) -> Result<Nombre> {
    match nom {
        "sqrt" => racine_carree(x),
        _ => Err(ErreurCalcul::FonctionInconnue(nom.to_string())),
    }
}

/// Évalue une RPN : une seule passe, une pile de valeurs.
/// - Op : droite puis gauche dépilées, policies (dans l’ordre), puis calcul du registre.
/// - Fonction : un argument.
/// - Fin : exactement une valeur, sinon ExpressionInvalide.
pub fn eval_rpn(rpn: &[Tok], registre: &Registre, policies: &[Policy]) -> Result<Nombre> {
    let mut st: Vec<Nombre> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::Fonction(nom) => {
                let x = st.pop().ok_or_else(|| {
                    ErreurCalcul::OperandeManquant(format!("la fonction '{nom}'"))
                })?;
                let v = appliquer_fonction(nom, &x)?;
                log::trace!("{nom}({x}) = {v}");
                st.push(v);
            }

            Tok::Op(op) => {
                if st.len() < 2 {
                    return Err(ErreurCalcul::OperandeManquant(format!(
                        "l'opérateur '{op}'"
                    )));
                }
                let (Some(droite), Some(gauche)) = (st.pop(), st.pop()) else {
                    return Err(ErreurCalcul::ExpressionInvalide);
                };

                verifier(policies, *op, &gauche, &droite)?;
                let spec = registre.spec(*op)?;
                let v = (spec.appliquer)(&gauche, &droite)?;
                log::trace!("{gauche} {op} {droite} = {v}");
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}
