// src/noyau/nombre.rs
//
// Nombre décimal du noyau = rationnel exact (BigRational).
// - Tout littéral base 10 est représenté exactement ("0.1" = 1/10).
// - + - * / sont exacts.
// - ^ (exposant non entier ou trop grand) et sqrt (non carré parfait) passent par f64 :
//   perte de précision attendue, le résultat binaire est reconverti exactement.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::{ErreurCalcul, Result};

pub type Nombre = BigRational;

/// Précision d’affichage par défaut (chiffres après la virgule).
pub const DECIMALES_AFFICHAGE: usize = 28;

/// Taille max (en bits) d’une puissance entière calculée exactement ;
/// au-delà on passe par f64 (évite des entiers géants).
pub const PUISSANCE_EXACTE_MAX_BITS: u64 = 1 << 20;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lit un littéral "123", "1.5", ".5" ou "5." (au plus un point).
/// None si vide, point seul, ou caractère hors [0-9.].
pub fn parse_decimal(s: &str) -> Option<Nombre> {
    let (ent, frac) = s.split_once('.').unwrap_or((s, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(BigRational::new(n, pow10(frac.len())))
}

/// Forme décimale canonique (DECIMALES_AFFICHAGE chiffres max).
pub fn format_nombre(r: &Nombre) -> String {
    format_nombre_decimales(r, DECIMALES_AFFICHAGE)
}

/// Forme décimale arrondie à `decimales` chiffres (demi vers l’infini),
/// zéros finaux retirés : 5/2 -> "2.5", 1/3 -> "0.333…3", 14 -> "14".
pub fn format_nombre_decimales(r: &Nombre, decimales: usize) -> String {
    let neg = r.is_negative();
    let abs = r.abs();

    let scale = pow10(decimales);
    let deux = BigInt::from(2);

    // floor((2·n·10^k + d) / 2d) = arrondi de n/d·10^k
    let num = abs.numer() * &scale * &deux + abs.denom();
    let den = abs.denom() * &deux;
    let scaled = num / den;

    if scaled.is_zero() {
        return "0".to_string();
    }

    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let mut frac = String::new();
    if decimales > 0 {
        frac = frac_part.to_str_radix(10);
        while frac.len() < decimales {
            frac.insert(0, '0');
        }
        while frac.ends_with('0') {
            frac.pop();
        }
    }

    let signe = if neg { "-" } else { "" };
    if frac.is_empty() {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}

fn vers_f64(r: &Nombre) -> Result<f64> {
    r.to_f64()
        .filter(|f| f.is_finite())
        .ok_or_else(|| ErreurCalcul::HorsDomaine("nombre hors de portée du calcul flottant.".into()))
}

fn depuis_f64(f: f64) -> Option<Nombre> {
    if !f.is_finite() {
        return None;
    }
    BigRational::from_float(f)
}

/// base ^ exposant.
/// Exact si l’exposant est entier et le résultat raisonnable, sinon via f64.
pub fn puissance(base: &Nombre, exposant: &Nombre) -> Result<Nombre> {
    if exposant.is_integer() {
        let bits = base.numer().bits().max(base.denom().bits());
        let n = exposant
            .to_integer()
            .to_i32()
            .filter(|n| bits.saturating_mul(u64::from(n.unsigned_abs())) <= PUISSANCE_EXACTE_MAX_BITS);

        if let Some(n) = n {
            if base.is_zero() && n < 0 {
                return Err(ErreurCalcul::HorsDomaine(
                    "zéro élevé à une puissance négative.".into(),
                ));
            }
            return Ok(base.pow(n));
        }
    }

    let r = vers_f64(base)?.powf(vers_f64(exposant)?);
    depuis_f64(r).ok_or_else(|| {
        ErreurCalcul::HorsDomaine(format!(
            "puissance non représentable: {} ^ {}",
            format_nombre(base),
            format_nombre(exposant)
        ))
    })
}

/// Racine carrée : exacte sur un carré parfait rationnel, sinon via f64.
pub fn racine_carree(x: &Nombre) -> Result<Nombre> {
    if x.is_negative() {
        return Err(ErreurCalcul::HorsDomaine("sqrt sur nombre négatif.".into()));
    }

    let (n, d) = (x.numer(), x.denom());
    let (rn, rd) = (n.sqrt(), d.sqrt());
    if &(&rn * &rn) == n && &(&rd * &rd) == d {
        return Ok(BigRational::new(rn, rd));
    }

    let r = vers_f64(x)?.sqrt();
    depuis_f64(r).ok_or_else(|| {
        ErreurCalcul::HorsDomaine(format!("sqrt non représentable: {}", format_nombre(x)))
    })
}
