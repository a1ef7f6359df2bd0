//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - touches.rs    : libellés -> Touche (classification des appuis)
//! - editeur.rs    : machine d'édition (appui -> nouvelle entrée)
//! - evaluation.rs : normalisation + délégation meval + mise en forme

pub mod editeur;
pub mod evaluation;
pub mod touches;

#[cfg(test)]
mod tests_editeur;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use evaluation::evaluer;
