// src/noyau/editeur.rs
//
// Éditeur d'expression — un appui, une nouvelle entrée
// ----------------------------------------------------
// Contrat : appliquer(entree, touche, dernier_resultat) -> nouvelle entrée.
// Fonction pure de ses arguments ; `dernier_resultat` ne sert qu'à
// l'enchaînement (opérateur sur entrée vide).
//
// Contrats tenus sur l'entrée :
// - jamais deux opérateurs binaires consécutifs (le dernier écrase)
// - au plus un '.' par nombre
// - les réécritures "dernier nombre" (±, %, √) ne touchent que le dernier
//   nombre ; sans nombre final, l'appui est sans effet
//
// Les réécritures sont volontairement textuelles (pas d'AST) : le motif
// "dernier nombre" est ancré en fin d'entrée et ne regarde jamais plus
// loin. Généraliser changerait le comportement observable.

use lazy_static::lazy_static;
use regex::Regex;

use super::evaluation::{ERREUR, ZERO};
use super::touches::{est_operateur, valeur_terminee, Touche};

lazy_static! {
    /// Dernier nombre de l'entrée : partie entière optionnelle, point
    /// optionnel, chiffres finaux. Ancré en fin de chaîne.
    static ref NOMBRE_FINAL: Regex = Regex::new(r"(\d*\.?\d+)$").unwrap();

    /// Nombre négatif parenthésé final : "(-n)".
    static ref NEGATIF_FINAL: Regex = Regex::new(r"\(-(\d*\.?\d+)\)$").unwrap();
}

/// Applique un appui à l'entrée courante.
///
/// Les touches d'écran (=, C, AC, DEL, panneau, mode d'angle) ne passent
/// pas par ici ; si on les reçoit quand même, l'entrée reste inchangée,
/// comme pour les touches réservées.
pub fn appliquer(entree: &str, touche: &Touche, dernier_resultat: &str) -> String {
    match touche {
        Touche::Chiffre(c) => format!("{entree}{c}"),
        Touche::Point => apposer_point(entree),
        Touche::Operateur(op) => apposer_operateur(entree, *op, dernier_resultat),
        Touche::Signe => basculer_signe(entree),
        Touche::Pourcent => convertir_pourcent(entree),
        Touche::ParentheseOuvrante => inserer_valeur(entree, "("),
        Touche::ParentheseFermante => format!("{entree})"),
        Touche::Constante(symbole) => inserer_valeur(entree, &symbole.to_string()),
        Touche::Racine => apposer_racine(entree),
        Touche::Carre => apposer_si_valeur(entree, "^2"),
        Touche::Puissance => apposer_si_valeur(entree, "^"),
        _ => entree.to_string(),
    }
}

/// DEL : retire le dernier jeton.
/// "sqrt(" part d'un coup (comme le backspace à jetons) ; sinon un seul
/// caractère.
pub fn retirer_dernier(entree: &str) -> String {
    if let Some(reste) = entree.strip_suffix("sqrt(") {
        return reste.to_string();
    }
    let mut nouvelle = entree.to_string();
    nouvelle.pop();
    nouvelle
}

/* ------------------------ Point décimal ------------------------ */

/// Un seul point par nombre : sans effet si le nombre final en a déjà un
/// (ou si l'entrée se termine déjà par un point).
fn apposer_point(entree: &str) -> String {
    if entree.ends_with('.') {
        return entree.to_string();
    }
    if let Some(m) = NOMBRE_FINAL.find(entree) {
        if m.as_str().contains('.') {
            return entree.to_string();
        }
    }
    format!("{entree}.")
}

/* ------------------------ Opérateurs binaires ------------------------ */

/// + − × ÷ :
/// - entrée vide + résultat exploitable -> enchaînement depuis le résultat
/// - entrée vide sinon -> pas d'opérateur en tête, appui ignoré
/// - opérateur final -> remplacé (le dernier gagne)
/// - sinon -> apposé
fn apposer_operateur(entree: &str, op: char, dernier_resultat: &str) -> String {
    if entree.is_empty() {
        // enchaînement seulement après une évaluation réussie non nulle
        if dernier_resultat != ZERO && dernier_resultat != ERREUR {
            return format!("{dernier_resultat}{op}");
        }
        return String::new();
    }

    if let Some(dernier) = entree.chars().last() {
        if est_operateur(dernier) {
            let tronc = &entree[..entree.len() - dernier.len_utf8()];
            return format!("{tronc}{op}");
        }
    }

    format!("{entree}{op}")
}

/* ------------------------ Signe ------------------------ */

/// ± : déballe "(-n)" final, sinon emballe le nombre final en "(-n)",
/// sinon amorce un littéral négatif sur entrée vide. Double appui = retour
/// au point de départ.
fn basculer_signe(entree: &str) -> String {
    if let Some(caps) = NEGATIF_FINAL.captures(entree) {
        let tout = &caps[0];
        let nombre = &caps[1];
        let tronc = &entree[..entree.len() - tout.len()];
        return format!("{tronc}{nombre}");
    }

    if let Some(m) = NOMBRE_FINAL.find(entree) {
        return format!("{}(-{})", &entree[..m.start()], m.as_str());
    }

    if entree.is_empty() {
        return "(-".to_string();
    }

    entree.to_string()
}

/* ------------------------ Pourcentage ------------------------ */

/// % : réécrit seulement le dernier nombre, n -> (n/100).
/// "3+4" devient "3+(4/100)", jamais "(3+4)/100".
fn convertir_pourcent(entree: &str) -> String {
    match NOMBRE_FINAL.find(entree) {
        Some(m) => format!("{}({}/100)", &entree[..m.start()], m.as_str()),
        None => entree.to_string(),
    }
}

/* ------------------------ Valeurs et fonctions ------------------------ */

/// Insère un jeton qui ouvre une valeur ("(", "π", "e", "sqrt(").
/// Multiplication implicite si l'entrée se termine par une valeur
/// complète : "2" puis π donne "2×π".
fn inserer_valeur(entree: &str, jeton: &str) -> String {
    match entree.chars().last() {
        Some(c) if valeur_terminee(c) => format!("{entree}×{jeton}"),
        _ => format!("{entree}{jeton}"),
    }
}

/// √ : réécrit le nombre final en sqrt(n) ; sans nombre final, insère
/// "sqrt(" comme toute ouverture de valeur (donc "×sqrt(" derrière une
/// parenthèse fermante).
fn apposer_racine(entree: &str) -> String {
    match NOMBRE_FINAL.find(entree) {
        Some(m) => format!("{}sqrt({})", &entree[..m.start()], m.as_str()),
        None => inserer_valeur(entree, "sqrt("),
    }
}

/// x² / xʸ : suffixe apposé seulement derrière une valeur complète,
/// sinon sans effet (rien à élever).
fn apposer_si_valeur(entree: &str, suffixe: &str) -> String {
    match entree.chars().last() {
        Some(c) if valeur_terminee(c) => format!("{entree}{suffixe}"),
        _ => entree.to_string(),
    }
}
