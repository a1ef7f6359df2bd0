// src/noyau/touches.rs

/// Libellé du bouton qui ouvre/ferme le panneau secondaire.
pub const LIB_PANNEAU: &str = "fx";

/// Libellé du bouton de bascule degrés/radians.
pub const LIB_MODE_ANGLE: &str = "rad";

/// Une touche de l'écran, identifiée uniquement par son libellé.
///
/// Les variantes d'édition passent par l'éditeur ; `Egal`, `Effacer`,
/// `EffacerTout`, `Retour`, `Panneau` et `ModeAngle` sont traitées au
/// niveau écran (etat.rs).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    /// Opérateur binaire, glyphe d'affichage : '+', '−', '×' ou '÷'.
    Operateur(char),
    Egal,
    /// C : entrée vidée + résultat remis à "0".
    Effacer,
    /// AC : comme C, plus retour au mode d'angle par défaut.
    EffacerTout,
    /// DEL : retire le dernier jeton de l'entrée.
    Retour,
    Signe,
    Pourcent,
    ParentheseOuvrante,
    ParentheseFermante,
    /// 'π' ou 'e'.
    Constante(char),
    Racine,
    Carre,
    Puissance,
    Panneau,
    ModeAngle,
    /// Trig/log/1/x/x! (et tout libellé inconnu) : réservée, sans effet.
    Reservee,
}

impl Touche {
    /// Traduit un libellé de bouton en touche.
    ///
    /// Tout libellé non reconnu devient `Reservee` : un appui inconnu ne
    /// doit jamais corrompre l'entrée, ni faire échouer l'écran.
    pub fn depuis_libelle(libelle: &str) -> Touche {
        let mut cars = libelle.chars();
        if let (Some(c), None) = (cars.next(), cars.next()) {
            if c.is_ascii_digit() {
                return Touche::Chiffre(c);
            }
        }

        match libelle {
            "." => Touche::Point,
            "+" => Touche::Operateur('+'),
            "−" => Touche::Operateur('−'),
            "×" => Touche::Operateur('×'),
            "÷" => Touche::Operateur('÷'),
            "=" => Touche::Egal,
            "C" => Touche::Effacer,
            "AC" => Touche::EffacerTout,
            "DEL" => Touche::Retour,
            "±" => Touche::Signe,
            "%" => Touche::Pourcent,
            "(" => Touche::ParentheseOuvrante,
            ")" => Touche::ParentheseFermante,
            "π" => Touche::Constante('π'),
            "e" => Touche::Constante('e'),
            "√" => Touche::Racine,
            "x²" => Touche::Carre,
            "xʸ" => Touche::Puissance,
            LIB_PANNEAU => Touche::Panneau,
            LIB_MODE_ANGLE => Touche::ModeAngle,
            _ => Touche::Reservee,
        }
    }
}

/// Vrai si `c` est un opérateur binaire de l'entrée (glyphes + '^').
///
/// Le '-' ASCII n'en fait pas partie : il n'apparaît que comme signe
/// unaire dans les réécritures "(-n)".
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '−' | '×' | '÷' | '^')
}

/// Vrai si `c` termine une valeur complète : chiffre, ')' ou constante.
/// C'est le test du côté gauche de la multiplication implicite.
pub fn valeur_terminee(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ')' | 'π' | 'e')
}
