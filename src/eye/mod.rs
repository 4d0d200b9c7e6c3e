// ============================================================================
// Module : eye
// ============================================================================
// L'œil animé du tableau de bord : clignement aléatoire et paupières
// ============================================================================

pub mod scheduler; // Machine à états du clignement (temps injecté)
pub mod driver;    // Exécution du scheduler sur les timers tokio
pub mod eyelid;    // Animation ease-in-out des paupières

pub use driver::BlinkHandle;
pub use eyelid::Eyelid;
pub use scheduler::{BlinkScheduler, BlinkState, BlinkTransition, DelaySource, RandomDelay};
