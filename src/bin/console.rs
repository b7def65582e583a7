// src/bin/console.rs
//
// Calculatrice EZO — point d’entrée console (stdin/stdout).
// Journal : RUST_LOG (par défaut "warn").

use std::io;

use anyhow::Result;
use calculatrice_ezo::console::boucle;
use calculatrice_ezo::Calculatrice;
use env_logger::Env;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // Registre + policies : construits une fois, partagés par toutes les évaluations.
    let calc = Calculatrice::standard();
    log::debug!("calculatrice prête: {calc:?}");

    boucle(&calc, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
