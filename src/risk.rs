// ============================================================================
// Module : risk
// ============================================================================
// Score de risque additif et priorité d'un événement.
//
// Chaque facteur ajoute 0 à 3 points selon des paliers ; la somme donne la
// priorité (Low, Medium, High, Critical) et l'intervalle de re-vérification
// recommandé.
// ============================================================================

use std::fmt;
use std::time::Duration;

use tracing::trace;

/// Catégorie d'événement baleine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Une seule transaction au-dessus du seuil
    LargeTransaction,

    /// Volume cumulé d'un portefeuille au-dessus du seuil
    HighVolume,
}

/// Priorité d'un événement
///
/// CONCEPT RUST : derive(PartialOrd, Ord)
/// - L'ordre des variants définit l'ordre de comparaison
/// - Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Priorité correspondant à un score
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 6 => Priority::Critical,
            s if s >= 4 => Priority::High,
            s if s >= 2 => Priority::Medium,
            _ => Priority::Low,
        }
    }

    /// Intervalle de re-vérification recommandé
    pub fn recheck_interval(&self) -> Duration {
        match self {
            Priority::Critical => Duration::from_secs(5),
            Priority::High => Duration::from_secs(15),
            Priority::Medium => Duration::from_secs(60),
            Priority::Low => Duration::from_secs(300),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Indicateurs utilisés pour le calcul du score
///
/// Les champs absents valent 0 (voir `Default`), ce qui n'ajoute aucun point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RiskIndicators {
    pub transaction_size: f64,
    pub wallet_volume: f64,
    /// Variation de solde (signée)
    pub balance_change: f64,
    /// Variation de solde relative (0.2 = 20%, signée)
    pub balance_percentage: f64,
    pub event_kind: Option<EventKind>,
    pub concurrent_events: u32,
    pub combined_risk_score: u32,
}

/// Points pour une valeur comparée à trois paliers décroissants (strictement supérieur)
fn tiered(value: f64, tiers: [f64; 3]) -> u32 {
    if value > tiers[0] {
        3
    } else if value > tiers[1] {
        2
    } else if value > tiers[2] {
        1
    } else {
        0
    }
}

impl RiskIndicators {
    /// Score additif de tous les facteurs
    pub fn score(&self) -> u32 {
        let mut score = 0;

        score += tiered(self.transaction_size, [1_000_000.0, 100_000.0, 50_000.0]);
        score += tiered(self.wallet_volume, [5_000_000.0, 1_000_000.0, 500_000.0]);
        score += tiered(self.balance_change.abs(), [1_000_000.0, 50_000.0, 10_000.0]);
        score += tiered(self.balance_percentage.abs(), [0.50, 0.20, 0.10]);

        score += match self.event_kind {
            Some(EventKind::LargeTransaction) => 1,
            Some(EventKind::HighVolume) => 2,
            None => 0,
        };

        score += match self.concurrent_events {
            n if n > 3 => 3,
            n if n > 1 => 1,
            _ => 0,
        };

        score += tiered(f64::from(self.combined_risk_score), [7.0, 5.0, 3.0]);

        trace!(score, indicators = ?self, "Risk score computed");
        score
    }

    pub fn priority(&self) -> Priority {
        Priority::from_score(self.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_indicators() {
        let indicators = RiskIndicators::default();
        assert_eq!(indicators.score(), 0);
        assert_eq!(indicators.priority(), Priority::Low);
    }

    #[test]
    fn test_thresholds_are_strict() {
        // 50 000 pile ne franchit pas le palier "> 50 000"
        let indicators = RiskIndicators {
            transaction_size: 50_000.0,
            ..Default::default()
        };
        assert_eq!(indicators.score(), 0);

        let indicators = RiskIndicators {
            transaction_size: 50_001.0,
            ..Default::default()
        };
        assert_eq!(indicators.score(), 1);
    }

    #[test]
    fn test_negative_changes_use_absolute_value() {
        let indicators = RiskIndicators {
            balance_change: -2_000_000.0,
            balance_percentage: -0.6,
            ..Default::default()
        };
        assert_eq!(indicators.score(), 6);
        assert_eq!(indicators.priority(), Priority::Critical);
    }

    #[test]
    fn test_concurrent_and_combined() {
        let indicators = RiskIndicators {
            concurrent_events: 2,
            combined_risk_score: 6,
            ..Default::default()
        };
        // 1 + 2
        assert_eq!(indicators.score(), 3);
        assert_eq!(indicators.priority(), Priority::Medium);
    }

    #[test]
    fn test_priority_from_score() {
        assert_eq!(Priority::from_score(0), Priority::Low);
        assert_eq!(Priority::from_score(1), Priority::Low);
        assert_eq!(Priority::from_score(2), Priority::Medium);
        assert_eq!(Priority::from_score(4), Priority::High);
        assert_eq!(Priority::from_score(6), Priority::Critical);
        assert_eq!(Priority::from_score(20), Priority::Critical);
        assert!(Priority::Critical > Priority::Low);
    }

    #[test]
    fn test_recheck_interval() {
        assert_eq!(Priority::Critical.recheck_interval(), Duration::from_secs(5));
        assert_eq!(Priority::Low.recheck_interval(), Duration::from_secs(300));
    }
}
