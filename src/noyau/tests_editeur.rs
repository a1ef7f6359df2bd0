//! Campagne éditeur + évaluation : les propriétés observables de l'écran,
//! jouées au niveau du noyau (séquence d'appuis -> entrée -> résultat).
//!
//! Notes :
//! - `tape` part d'une entrée vide avec le résultat de base "0".
//! - Les assertions repassent par `evaluer` pour vérifier que les entrées
//!   produites par l'éditeur sont bien des expressions évaluables.

use super::editeur::appliquer;
use super::evaluation::{evaluer, ERREUR};
use super::touches::Touche;

fn tape_avec(resultat: &str, libelles: &[&str]) -> String {
    let mut entree = String::new();
    for libelle in libelles {
        entree = appliquer(&entree, &Touche::depuis_libelle(libelle), resultat);
    }
    entree
}

fn tape(libelles: &[&str]) -> String {
    tape_avec("0", libelles)
}

fn tape_et_evalue(libelles: &[&str]) -> String {
    evaluer(&tape(libelles))
}

#[test]
fn campagne_arithmetique_de_base() {
    assert_eq!(tape_et_evalue(&["2", "+", "2"]), "4");
    assert_eq!(tape_et_evalue(&["1", "0", "×", "5"]), "50");
    assert_eq!(tape_et_evalue(&["9", "÷", "2"]), "4.5");
    assert_eq!(tape_et_evalue(&["7", "−", "1", "0"]), "-3");
}

#[test]
fn campagne_priorites_et_parentheses() {
    assert_eq!(tape_et_evalue(&["2", "+", "3", "×", "4"]), "14");
    assert_eq!(tape_et_evalue(&["(", "2", "+", "3", ")", "×", "4"]), "20");
}

#[test]
fn campagne_pourcent() {
    assert_eq!(tape_et_evalue(&["5", "0", "%"]), "0.5");

    // dernier nombre seulement, jamais l'expression entière
    let entree = tape(&["3", "+", "4", "%"]);
    assert_eq!(entree, "3+(4/100)");
    assert_eq!(evaluer(&entree), "3.04");
}

#[test]
fn campagne_signe() {
    assert_eq!(tape_et_evalue(&["5", "±", "+", "8"]), "3");
    // double bascule : retour au point de départ
    assert_eq!(tape(&["5", "±", "±"]), "5");
}

#[test]
fn campagne_multiplication_implicite_evaluable() {
    let deux_pi = tape(&["2", "π"]);
    assert_eq!(deux_pi, "2×π");
    assert!(evaluer(&deux_pi).starts_with("6.283185307"));

    // (2+3)(4) -> (2+3)×(4)
    assert_eq!(tape_et_evalue(&["(", "2", "+", "3", ")", "(", "4", ")"]), "20");
}

#[test]
fn campagne_racine_et_puissances() {
    assert_eq!(tape(&["1", "6", "√"]), "sqrt(16)");
    assert_eq!(tape_et_evalue(&["1", "6", "√"]), "4");
    assert_eq!(tape_et_evalue(&["2", "xʸ", "1", "0"]), "1024");
    assert_eq!(tape_et_evalue(&["1", "2", "x²"]), "144");
}

#[test]
fn campagne_enchainement() {
    // un "=" réussi vide l'entrée ; l'opérateur suivant repart du résultat
    let entree = tape_avec("7", &["+", "3"]);
    assert_eq!(entree, "7+3");
    assert_eq!(evaluer(&entree), "10");
}

#[test]
fn campagne_erreurs_locales() {
    assert_eq!(tape_et_evalue(&["5", "÷", "0"]), ERREUR);
    // parenthèse ouverte non refermée
    assert_eq!(tape_et_evalue(&["(", "2", "+", "3"]), ERREUR);
    // entrée vide
    assert_eq!(tape_et_evalue(&[]), ERREUR);
}

#[test]
fn campagne_bruit_flottant() {
    assert_eq!(tape_et_evalue(&["0", ".", "1", "+", "0", ".", "2"]), "0.3");
}
