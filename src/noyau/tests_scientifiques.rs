//! Tests scientifiques (campagne) : propriétés attendues du pipeline complet.
//!
//! - arithmétique + - * / : exacte (rationnels), comparée à des valeurs écrites à la main
//! - ^ et sqrt hors cas exacts : passage par f64, comparés avec une tolérance
//! - erreurs : chaque famille est identifiable par sa variante

use num_traits::ToPrimitive;

use super::erreur::ErreurCalcul;
use super::nombre::{format_nombre, parse_decimal, Nombre};
use super::{eval_expression, Calculatrice};

const EPS: f64 = 1e-9;

fn eval_ok(expr: &str) -> Nombre {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_exact_eq(expr: &str, attendu: &str) {
    assert_eq!(format_nombre(&eval_ok(expr)), attendu, "expr={expr:?}");
}

fn assert_approx(expr: &str, attendu: f64) {
    let f = eval_ok(expr)
        .to_f64()
        .unwrap_or_else(|| panic!("expr={expr:?} non convertible"));
    assert!(
        (f - attendu).abs() < EPS,
        "expr={expr:?} obtenu={f} attendu={attendu}"
    );
}

fn assert_err(expr: &str, attendu: ErreurCalcul) {
    assert_eq!(eval_expression(expr), Err(attendu), "expr={expr:?}");
}

fn assert_hors_domaine(expr: &str) {
    assert!(
        matches!(eval_expression(expr), Err(ErreurCalcul::HorsDomaine(_))),
        "expr={expr:?}"
    );
}

/* ------------------------ Priorités ------------------------ */

#[test]
fn sci_priorites_usuelles() {
    assert_exact_eq("2+3*4", "14");
    assert_exact_eq("(2+3)*4", "20");
    assert_exact_eq("10-4-3", "3");
    assert_exact_eq("100/10/5", "2");
    assert_exact_eq("2*3+4*5", "26");
    assert_exact_eq("2*(3+4)*5", "70");
    assert_exact_eq("((((7))))", "7");
    assert_exact_eq("1 - 2 + 3", "2");
}

#[test]
fn sci_puissance_associative_a_droite() {
    assert_exact_eq("2^3^2", "512");
    assert_exact_eq("(2^3)^2", "64");
    assert_exact_eq("2^-1", "0.5");
    assert_exact_eq("-2^2", "4"); // le signe est collé au littéral
    assert_exact_eq("2*3^2", "18");
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire_quatre_contextes() {
    assert_exact_eq("-5+3", "-2");
    assert_exact_eq("3*-2", "-6");
    assert_exact_eq("(-2)^2", "4");
    assert_exact_eq("5--3", "8");
    assert_exact_eq("- 4 * 2", "-8");

    // après une fonction : l’argument devient -4 avant sqrt
    assert_hors_domaine("sqrt(-4)");
    assert_hors_domaine("sqrt -4");
}

/* ------------------------ sqrt / ^ ------------------------ */

#[test]
fn sci_sqrt() {
    assert_exact_eq("sqrt(16)+2", "6");
    assert_exact_eq("sqrt(0.25)", "0.5");
    assert_exact_eq("sqrt(9/4)", "1.5");
    assert_exact_eq("SQRT(sqrt(81))", "3");
    assert_approx("sqrt(2)", std::f64::consts::SQRT_2);
    assert_approx("sqrt(2)^2", 2.0);
}

#[test]
fn sci_puissance_approchee() {
    assert_approx("2^0.5", std::f64::consts::SQRT_2);
    assert_approx("27^(1/3)", 3.0);
    assert_approx("10^-0.5*10^0.5", 1.0);
    assert_hors_domaine("(-8)^(1/3)");
    assert_hors_domaine("0^-1");
}

/* ------------------------ Décimaux ------------------------ */

#[test]
fn sci_decimaux_sans_artefacts() {
    assert_exact_eq("0.1+0.2", "0.3");
    assert_exact_eq("1.1*1.1", "1.21");
    assert_exact_eq(".5+5.", "5.5");
    assert_exact_eq("1/3*3", "1");
    assert_exact_eq("1/3", &format!("0.{}", "3".repeat(28)));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_err("5/0", ErreurCalcul::DivisionParZero);
    assert_err("5/(3-3)", ErreurCalcul::DivisionParZero);
    assert_err("0/0", ErreurCalcul::DivisionParZero);
    assert_err("1/0.0", ErreurCalcul::DivisionParZero);
}

#[test]
fn sci_parentheses_desequilibrees() {
    assert_err("(2+3", ErreurCalcul::ParenthesesDesequilibrees);
    assert_err("2+3)", ErreurCalcul::ParenthesesDesequilibrees);
    assert_err("sqrt(4", ErreurCalcul::ParenthesesDesequilibrees);
}

#[test]
fn sci_familles_d_erreurs() {
    assert_err("", ErreurCalcul::EntreeVide);
    assert_err("2 3", ErreurCalcul::ExpressionInvalide);
    assert_err("abs(2)", ErreurCalcul::FonctionInconnue("abs".into()));
    assert!(matches!(
        eval_expression("2 # 3"),
        Err(ErreurCalcul::EntreeMalformee(_))
    ));
    assert!(matches!(
        eval_expression("2 *"),
        Err(ErreurCalcul::OperandeManquant(_))
    ));
}

#[test]
fn sci_double_point_particularite() {
    // "1.2.3" => 1.2 puis .3 : deux nombres sans opérateur
    assert_err("1.2.3", ErreurCalcul::ExpressionInvalide);
    // 1.2 .3 2 * => la pile finale garde 1.2 et 0.6
    assert_err("1.2.3*2", ErreurCalcul::ExpressionInvalide);
    // la lecture reprend sur un '.' isolé
    assert!(matches!(
        eval_expression("1.2.+3"),
        Err(ErreurCalcul::EntreeMalformee(_))
    ));
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_reevaluation_identique() {
    let calc = Calculatrice::standard();
    for expr in ["2^3^2", "sqrt(2)", "1/3", "2^0.5", "-5+3*(2-7)/4"] {
        let premier = calc.evaluer(expr).unwrap();
        for _ in 0..20 {
            assert_eq!(calc.evaluer(expr).unwrap(), premier, "expr={expr:?}");
            assert_eq!(eval_expression(expr).unwrap(), premier, "expr={expr:?}");
        }
    }
}

#[test]
fn sci_partage_entre_threads() {
    let calc = Calculatrice::standard();
    let attendu = calc.evaluer("(1+2)^3/9").unwrap();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..50 {
                    assert_eq!(calc.evaluer("(1+2)^3/9").unwrap(), attendu);
                }
            });
        }
    });

    assert_eq!(attendu, parse_decimal("3").unwrap());
}
