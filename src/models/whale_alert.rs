// ============================================================================
// Structure : WhaleAlert
// ============================================================================
// Alerte "baleine" : mouvement de gros montant sur une adresse surveillée
// ============================================================================

use anyhow::Result;

use crate::models::DisplayAmount;
use crate::risk::{EventKind, Priority, RiskIndicators};

/// Type d'alerte, tel qu'affiché dans la carte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    LargeTransferOut,
    SignificantInflow,
    LiquidityPoolDeposit,
}

impl AlertKind {
    /// Libellé affiché (ex: "Large Transfer Out")
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::LargeTransferOut => "Large Transfer Out",
            AlertKind::SignificantInflow => "Significant Inflow",
            AlertKind::LiquidityPoolDeposit => "Liquidity Pool Deposit",
        }
    }

    /// Catégorie d'événement utilisée par le calcul de risque
    ///
    /// Un dépôt en pool de liquidité n'est ni un gros transfert ni un pic de
    /// volume : il ne rapporte pas de points de type d'événement.
    pub fn event_kind(&self) -> Option<EventKind> {
        match self {
            AlertKind::LargeTransferOut => Some(EventKind::LargeTransaction),
            AlertKind::SignificantInflow => Some(EventKind::HighVolume),
            AlertKind::LiquidityPoolDeposit => None,
        }
    }
}

/// Alerte baleine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhaleAlert {
    pub id: u32,

    /// Adresse concernée (ex: "0xWhale1...")
    pub address: &'static str,

    pub kind: AlertKind,

    /// Montant formaté (ex: "5,000,000 USDC")
    pub amount: &'static str,

    /// Temps relatif (ex: "5m ago")
    pub time: &'static str,
}

impl WhaleAlert {
    /// Valeur numérique du montant affiché
    pub fn parsed_amount(&self) -> Result<DisplayAmount> {
        self.amount.parse()
    }

    /// Indicateurs de risque de l'alerte
    ///
    /// Une alerte isolée : le volume du portefeuille est le montant lui-même.
    pub fn risk_indicators(&self) -> Result<RiskIndicators> {
        let amount = self.parsed_amount()?;
        Ok(RiskIndicators {
            transaction_size: amount.value,
            wallet_volume: amount.value,
            event_kind: self.kind.event_kind(),
            ..RiskIndicators::default()
        })
    }

    /// Priorité calculée de l'alerte
    pub fn priority(&self) -> Result<Priority> {
        Ok(self.risk_indicators()?.priority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(kind: AlertKind, amount: &'static str) -> WhaleAlert {
        WhaleAlert {
            id: 1,
            address: "0xWhale1...",
            kind,
            amount,
            time: "5m ago",
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(AlertKind::LargeTransferOut.label(), "Large Transfer Out");
        assert_eq!(AlertKind::SignificantInflow.label(), "Significant Inflow");
        assert_eq!(AlertKind::LiquidityPoolDeposit.label(), "Liquidity Pool Deposit");
    }

    #[test]
    fn test_priority() {
        // 3 (taille) + 2 (volume) + 1 (gros transfert) = 6
        let a = alert(AlertKind::LargeTransferOut, "5,000,000 USDC");
        assert_eq!(a.priority().unwrap(), Priority::Critical);

        // 3 + 2, pas de points de type
        let a = alert(AlertKind::LiquidityPoolDeposit, "1,500,000 DAI");
        assert_eq!(a.priority().unwrap(), Priority::High);

        // 1 (taille > 50k) + 2 (pic de volume)
        let a = alert(AlertKind::SignificantInflow, "60,000 USDT");
        assert_eq!(a.priority().unwrap(), Priority::Medium);
    }

    #[test]
    fn test_priority_bad_amount() {
        let a = alert(AlertKind::LargeTransferOut, "beaucoup");
        assert!(a.priority().is_err());
    }
}
