//! src/app/etat.rs
//!
//! État de l'écran (sans vue, sans analyse d'expression).
//!
//! Rôle : porter l'entrée en cours, le dernier résultat affiché, l'état
//! écran (édition/erreur) et l'état de vue (panneau, mode d'angle), et
//! router chaque appui vers le noyau.
//!
//! Contrats :
//! - Aucun rendu ici (pas d'egui).
//! - Chaque appui est traité entièrement, dans l'ordre reçu.
//! - L'état de vue est une structure explicite à transitions pures,
//!   jamais un global ambiant.

use tracing::debug;

use crate::noyau::evaluation::{ERREUR, ZERO};
use crate::noyau::touches::Touche;
use crate::noyau::{editeur, evaluer};

/// Mode d'angle : bascule d'interface, sans effet sur l'évaluation tant
/// que les touches trigonométriques restent réservées.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Libellé court affiché sur le bouton de bascule.
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

/// État de vue, passé tel quel à la couche de rendu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EtatVue {
    pub panneau_ouvert: bool,
    pub mode_angle: ModeAngle,
}

impl EtatVue {
    pub fn basculer_panneau(self) -> Self {
        Self {
            panneau_ouvert: !self.panneau_ouvert,
            ..self
        }
    }

    pub fn basculer_angle(self) -> Self {
        Self {
            mode_angle: self.mode_angle.bascule(),
            ..self
        }
    }

    pub fn reinitialiser_angle(self) -> Self {
        Self {
            mode_angle: ModeAngle::default(),
            ..self
        }
    }
}

/// États de l'écran : édition normale, ou erreur après un "=" raté.
/// Pas d'état terminal : l'écran vit tant que l'hôte le garde.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EtatEcran {
    #[default]
    Edition,
    Erreur,
}

#[derive(Clone, Debug)]
pub struct EcranCalc {
    /// Expression en cours de saisie.
    pub entree: String,

    /// Dernier résultat affiché ("0" au départ, ERREUR après un échec).
    pub resultat: String,

    pub etat: EtatEcran,
    pub vue: EtatVue,
}

impl Default for EcranCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: ZERO.to_string(),
            etat: EtatEcran::default(),
            vue: EtatVue::default(),
        }
    }
}

impl EcranCalc {
    /// Point d'entrée unique : route un appui identifié par son libellé.
    pub fn appuyer(&mut self, libelle: &str) {
        let touche = Touche::depuis_libelle(libelle);
        debug!(libelle, ?touche, "appui");

        match touche {
            Touche::Egal => self.evaluer_entree(),
            Touche::Effacer => self.effacer(),
            Touche::EffacerTout => self.effacer_tout(),
            Touche::Retour => self.entree = editeur::retirer_dernier(&self.entree),
            Touche::Panneau => self.vue = self.vue.basculer_panneau(),
            Touche::ModeAngle => self.vue = self.vue.basculer_angle(),
            autre => self.entree = editeur::appliquer(&self.entree, &autre, &self.resultat),
        }
    }

    /// "=" : dépose le résultat. En cas de succès l'entrée est vidée (le
    /// prochain opérateur enchaînera depuis le résultat) ; en cas d'échec
    /// l'entrée reste intacte pour correction, et "=" peut être retenté
    /// tel quel.
    fn evaluer_entree(&mut self) {
        let resultat = evaluer(&self.entree);
        if resultat == ERREUR {
            self.resultat = resultat;
            self.etat = EtatEcran::Erreur;
        } else {
            self.resultat = resultat;
            self.entree.clear();
            self.etat = EtatEcran::Edition;
        }
    }

    /// C : entrée vidée, résultat remis à zéro, retour en édition.
    fn effacer(&mut self) {
        self.entree.clear();
        self.resultat = ZERO.to_string();
        self.etat = EtatEcran::Edition;
    }

    /// AC : C, plus retour au mode d'angle par défaut.
    fn effacer_tout(&mut self) {
        self.effacer();
        self.vue = self.vue.reinitialiser_angle();
    }
}
