// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Toute erreur arrête l’évaluation en cours : jamais de résultat partiel,
// jamais de panique. L’hôte (console / UI) affiche le message et continue.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Entrée vide ou seulement des espaces (refusée avant la tokenisation).
    #[error("L'expression ne peut pas être vide.")]
    EntreeVide,

    /// Caractère non reconnu, littéral numérique illisible, moins unaire mal formé.
    #[error("{0}")]
    EntreeMalformee(String),

    #[error("Parenthèses déséquilibrées.")]
    ParenthesesDesequilibrees,

    /// Opérateur ou fonction exécuté avec trop peu de valeurs sur la pile.
    #[error("Argument manquant pour {0}.")]
    OperandeManquant(String),

    #[error("Opérateur inconnu: {0}")]
    OperateurInconnu(String),

    #[error("Fonction inconnue: {0}")]
    FonctionInconnue(String),

    /// La pile finale ne contient pas exactement une valeur.
    #[error("Expression invalide.")]
    ExpressionInvalide,

    #[error("Division par zéro interdite.")]
    DivisionParZero,

    /// Erreur de domaine (ex: sqrt d’un négatif, 0 ^ -1).
    #[error("{0}")]
    HorsDomaine(String),
}

pub type Result<T, E = ErreurCalcul> = std::result::Result<T, E>;
