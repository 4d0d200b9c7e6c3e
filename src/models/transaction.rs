// ============================================================================
// Structure : Transaction
// ============================================================================
// Une ligne du flux de transactions. Tous les champs sont des chaînes prêtes
// à l'affichage (fragments de hash, montants formatés, temps relatif).
//
// CONCEPT RUST : &'static str
// - Les données d'exemple sont des constantes compilées dans le binaire
// - Pas besoin de String (pas d'allocation, pas de propriétaire)
// ============================================================================

use anyhow::Result;

use crate::models::{DisplayAmount, Stablecoin};

/// Transaction stablecoin observée
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    /// Hash de la transaction (ex: "0x1a2b...")
    pub id: &'static str,

    /// Adresse émettrice
    pub from: &'static str,

    /// Adresse destinataire
    pub to: &'static str,

    /// Montant formaté (ex: "10,000 USDC")
    pub amount: &'static str,

    pub stablecoin: Stablecoin,

    /// Temps relatif (ex: "2s ago")
    pub time: &'static str,
}

impl Transaction {
    /// Valeur numérique du montant affiché
    pub fn parsed_amount(&self) -> Result<DisplayAmount> {
        self.amount.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_amount_matches_tag() {
        let tx = Transaction {
            id: "0x1a2b...",
            from: "0xabc...",
            to: "0xdef...",
            amount: "10,000 USDC",
            stablecoin: Stablecoin::Usdc,
            time: "2s ago",
        };

        let amount = tx.parsed_amount().unwrap();
        assert_eq!(amount.value, 10_000.0);
        assert_eq!(amount.coin, tx.stablecoin);
    }
}
