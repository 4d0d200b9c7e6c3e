// ============================================================================
// Module : models
// ============================================================================
// Structures de données affichées par le tableau de bord
// ============================================================================

pub mod amount;         // Montants affichés et stablecoins
pub mod transaction;    // Ligne du flux de transactions
pub mod whale_alert;    // Alerte baleine
pub mod wallet_balance; // Soldes d'un portefeuille surveillé
pub mod sample;         // Données d'exemple (constantes)

// Re-export des structures principales pour simplifier les imports
pub use amount::{DisplayAmount, Stablecoin};
pub use transaction::Transaction;
pub use whale_alert::{AlertKind, WhaleAlert};
pub use wallet_balance::WalletBalance;
