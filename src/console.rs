// src/console.rs
//
// Boucle console : lit une expression par ligne, affiche "= valeur" ou "Erreur: message".
// Une erreur d’évaluation n’arrête jamais la boucle ; seuls EOF, "exit" et "q" y mettent fin.

use std::io::{self, BufRead, Write};

use crate::noyau::{format_nombre, Calculatrice};

const INVITE: &str = "> ";

/// Ce qu’une ligne demande à la boucle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reponse {
    Quitter,
    Afficher(String),
}

/// Traite une ligne saisie (sans E/S).
pub fn traiter_ligne(calc: &Calculatrice, ligne: &str) -> Reponse {
    let entree = ligne.trim();

    if entree.is_empty() {
        return Reponse::Afficher("Expression vide.".into());
    }
    if entree.eq_ignore_ascii_case("exit") || entree.eq_ignore_ascii_case("q") {
        return Reponse::Quitter;
    }

    match calc.evaluer(entree) {
        Ok(v) => Reponse::Afficher(format!("= {}", format_nombre(&v))),
        Err(e) => {
            log::warn!("évaluation refusée pour {entree:?}: {e}");
            Reponse::Afficher(format!("Erreur: {e}"))
        }
    }
}

/// Boucle complète sur `entree` / `sortie` (stdin/stdout en pratique).
pub fn boucle<R: BufRead, W: Write>(
    calc: &Calculatrice,
    mut entree: R,
    mut sortie: W,
) -> io::Result<()> {
    writeln!(sortie, " -> Calculatrice EZO\n")?;
    writeln!(sortie, "Entrez votre calcul et appuyez sur Entrée.")?;
    writeln!(sortie, "Tapez 'exit' ou 'q' pour quitter.\n")?;

    let mut ligne = String::new();
    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        ligne.clear();
        if entree.read_line(&mut ligne)? == 0 {
            // EOF
            writeln!(sortie)?;
            break;
        }

        match traiter_ligne(calc, &ligne) {
            Reponse::Quitter => break,
            Reponse::Afficher(texte) => writeln!(sortie, "{texte}\n")?,
        }
    }

    log::info!("fin de la boucle console");
    Ok(())
}
