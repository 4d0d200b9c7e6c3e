// ============================================================================
// SeiWatch - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;    // État de l'application
pub mod config; // Constantes et chemins
pub mod eye;    // Clignement de l'œil (scheduler, driver, paupières)
pub mod models; // Structures de données et données d'exemple
pub mod risk;   // Score de risque et priorités
pub mod ui;     // Interface utilisateur
