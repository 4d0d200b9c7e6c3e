// ============================================================================
// Structure : WalletBalance
// ============================================================================
// Soldes d'un portefeuille surveillé, un champ par stablecoin
// ============================================================================

use crate::models::Stablecoin;

/// Soldes d'un portefeuille surveillé
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalletBalance {
    /// Adresse du portefeuille (ex: "0xMonitor1...")
    pub address: &'static str,

    /// Soldes formatés, sans symbole (ex: "1,234,567")
    pub usdc: &'static str,
    pub usdt: &'static str,
    pub dai: &'static str,
}

impl WalletBalance {
    /// Solde affiché pour un stablecoin donné
    pub fn balance(&self, coin: Stablecoin) -> &'static str {
        match coin {
            Stablecoin::Usdc => self.usdc,
            Stablecoin::Usdt => self.usdt,
            Stablecoin::Dai => self.dai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_by_coin() {
        let wallet = WalletBalance {
            address: "0xMonitor2...",
            usdc: "500,000",
            usdt: "1,500,000",
            dai: "250,000",
        };

        let balances: Vec<&str> = Stablecoin::ALL.iter().map(|c| wallet.balance(*c)).collect();
        assert_eq!(balances, vec!["500,000", "1,500,000", "250,000"]);
    }
}
