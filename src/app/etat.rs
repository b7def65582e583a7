//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/CLR/AC).
//! L’évaluation elle-même reste dans le noyau ; ici on ne fait que déposer ses sorties.

use calculatrice_ezo::noyau::{format_nombre_decimales, Calculatrice, Demarche, Nombre, DECIMALES_AFFICHAGE};

/// Garde-fou : on borne la précision d’affichage.
pub const DECIMALES_MAX: usize = 60;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub valeur: Option<Nombre>, // dernier résultat (gardé pour ré-afficher si décimales change)
    pub resultat: String,       // affichage décimal de `valeur`
    pub erreur: String,

    pub demarche: Demarche,

    // --- paramètres ---
    pub decimales: usize,

    // Construite une fois au lancement.
    pub calc: Calculatrice,

    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            valeur: None,
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            decimales: DECIMALES_AFFICHAGE,
            calc: Calculatrice::standard(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + décimales par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.decimales = DECIMALES_AFFICHAGE;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.valeur = None;
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    /// On CONSERVE le dernier résultat (pas d’écran vidé sur une faute) ; la démarche est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, valeur: Nombre, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = format_nombre_decimales(&valeur, self.decimales);
        self.valeur = Some(valeur);
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite les décimales, puis ré-affiche le dernier résultat.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
        if let Some(v) = &self.valeur {
            self.resultat = format_nombre_decimales(v, self.decimales);
        }
        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche ou l’erreur.
    pub fn evaluer_entree(&mut self) {
        match self.calc.evaluer_avec_demarche(&self.entree) {
            Ok((valeur, demarche)) => self.set_resultat(valeur, demarche),
            Err(e) => {
                log::warn!("évaluation refusée pour {:?}: {e}", self.entree);
                self.set_erreur(e.to_string());
            }
        }
    }
}
