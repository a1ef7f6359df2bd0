// src/noyau/evaluation.rs
//
// Évaluation + mise en forme du résultat
// --------------------------------------
// L'analyse de l'expression est déléguée à meval (boîte noire), avec pi
// et e liés dans le contexte. Ici on ne fait que :
// 1) normaliser les glyphes d'affichage vers la forme ASCII évaluable
// 2) déléguer
// 3) mettre en forme le f64 obtenu (ou rendre le marqueur d'erreur)
//
// Rien ne traverse cette frontière : toute défaillance devient ERREUR et
// l'entrée reste éditable.

use thiserror::Error;
use tracing::{debug, warn};

/// Marqueur d'erreur affiché à la place d'un résultat.
pub const ERREUR: &str = "Erreur";

/// Résultat de base (écran vierge, après effacement).
pub const ZERO: &str = "0";

/// Taxonomie interne des échecs. L'écran affiche le même marqueur pour
/// les deux classes (choix assumé, comme la source) ; seuls les journaux
/// les distinguent.
#[derive(Debug, Error)]
pub enum ErreurEval {
    #[error("expression invalide : {0}")]
    Syntaxe(#[from] meval::Error),
    #[error("résultat non fini")]
    NonFini,
}

/// Remplace les glyphes d'affichage par leurs équivalents évaluables.
fn normaliser(entree: &str) -> String {
    entree
        .replace('×', "*")
        .replace('÷', "/")
        .replace('−', "-")
        .replace('π', "pi")
}

/// Contexte d'évaluation : constantes liées explicitement.
fn contexte() -> meval::Context<'static> {
    let mut ctx = meval::Context::new();
    ctx.var("pi", std::f64::consts::PI)
        .var("e", std::f64::consts::E);
    ctx
}

/// Évalue l'entrée en nombre, sans mise en forme.
///
/// Erreurs : syntaxe/jeton inconnu (via meval) ou résultat non fini
/// (division par zéro et consorts).
pub fn evaluer_nombre(entree: &str) -> Result<f64, ErreurEval> {
    let expr: meval::Expr = normaliser(entree).parse()?;
    let valeur = expr.eval_with_context(contexte())?;
    if !valeur.is_finite() {
        return Err(ErreurEval::NonFini);
    }
    Ok(valeur)
}

/// Contrat écran : évalue et met en forme. Ne panique jamais ; toute
/// défaillance devient le marqueur ERREUR.
pub fn evaluer(entree: &str) -> String {
    match evaluer_nombre(entree) {
        Ok(valeur) => {
            debug!(entree, valeur, "évaluation réussie");
            formater(valeur)
        }
        Err(e) => {
            warn!(entree, erreur = %e, "évaluation échouée");
            ERREUR.to_string()
        }
    }
}

/* ------------------------ Mise en forme ------------------------ */

/// Mise en forme canonique d'un résultat :
/// - non fini -> marqueur d'erreur
/// - très grand / très petit -> notation exponentielle, 10 chiffres
///   significatifs, zéros de fin retirés de la mantisse
/// - sinon arrondi à 10 décimales, zéros de fin (et point orphelin)
///   retirés : la plus courte écriture décimale exacte à cet arrondi
pub fn formater(valeur: f64) -> String {
    if !valeur.is_finite() {
        return ERREUR.to_string();
    }

    let abs = valeur.abs();
    if valeur != 0.0 && (abs >= 1e21 || abs < 1e-6) {
        return formater_exponentiel(valeur);
    }

    let texte = format!("{valeur:.10}");
    texte
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// 10 chiffres significatifs : 1 avant le point + 9 décimales de
/// mantisse, puis zéros de fin retirés ("1.000000000e30" -> "1e30").
fn formater_exponentiel(valeur: f64) -> String {
    let texte = format!("{valeur:.9e}");
    match texte.split_once('e') {
        Some((mantisse, exposant)) => {
            let mantisse = mantisse.trim_end_matches('0').trim_end_matches('.');
            format!("{mantisse}e{exposant}")
        }
        None => texte,
    }
}
