// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events;     // Gestion des événements clavier
pub mod dashboard;  // Rendu de l'interface principale
pub mod panels;     // Projection des données en lignes affichables
pub mod eye_widget; // Dessin de l'œil et des paupières

// Re-exports pour simplifier les imports
pub use dashboard::render;
pub use events::{Event, EventHandler};
