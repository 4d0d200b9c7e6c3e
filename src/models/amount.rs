// ============================================================================
// Montants affichés : "10,000 USDC", "5,000,000 USDT", ...
// ============================================================================
// Les enregistrements d'exemple stockent leurs montants sous forme de texte
// prêt à l'affichage. Pour calculer une priorité de risque on a besoin de la
// valeur numérique : ce module fait la conversion inverse.
//
// CONCEPTS RUST :
// 1. FromStr : parsing idiomatique via str::parse()
// 2. anyhow::bail! / Context : erreurs descriptives sans type dédié
// ============================================================================

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Stablecoins suivis par le moniteur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stablecoin {
    Usdc,
    Usdt,
    Dai,
}

impl Stablecoin {
    /// Tous les stablecoins, dans l'ordre des colonnes du panneau des soldes
    pub const ALL: [Stablecoin; 3] = [Stablecoin::Usdc, Stablecoin::Usdt, Stablecoin::Dai];

    /// Symbole affiché (ex: "USDC")
    pub fn symbol(&self) -> &'static str {
        match self {
            Stablecoin::Usdc => "USDC",
            Stablecoin::Usdt => "USDT",
            Stablecoin::Dai => "DAI",
        }
    }
}

impl fmt::Display for Stablecoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Stablecoin {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "USDC" => Ok(Stablecoin::Usdc),
            "USDT" => Ok(Stablecoin::Usdt),
            "DAI" => Ok(Stablecoin::Dai),
            other => bail!("Stablecoin inconnu : {}", other),
        }
    }
}

/// Montant parsé depuis sa forme affichée
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAmount {
    /// Valeur en unités entières du token (pas en plus petite unité)
    pub value: f64,

    pub coin: Stablecoin,
}

impl FromStr for DisplayAmount {
    type Err = anyhow::Error;

    /// Parse "1,500,000 DAI" : un nombre avec séparateurs de milliers,
    /// un espace, puis le symbole
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();

        let (Some(number), Some(symbol), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Montant mal formé : {:?} (attendu \"<nombre> <symbole>\")", s);
        };

        let value = parse_grouped_number(number)
            .with_context(|| format!("Montant mal formé : {:?}", s))?;
        let coin = symbol.parse()?;

        Ok(Self { value, coin })
    }
}

/// Parse un nombre avec virgules comme séparateurs de milliers ("1,234,567")
///
/// Les virgules sont simplement ignorées : l'affichage d'exemple n'utilise
/// jamais de partie décimale avec virgule.
pub fn parse_grouped_number(s: &str) -> Result<f64> {
    let digits: String = s.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        bail!("Nombre vide");
    }

    let value: f64 = digits
        .parse()
        .with_context(|| format!("Nombre invalide : {:?}", s))?;

    if value.is_sign_negative() || !value.is_finite() {
        bail!("Nombre hors limites : {:?}", s);
    }

    Ok(value)
}
