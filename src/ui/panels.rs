// ============================================================================
// Panneaux : projection des données en lignes affichables
// ============================================================================
// Fonctions pures : données constantes → cellules de texte. Le rendu ratatui
// (dashboard.rs) ne fait que poser ces cellules dans des widgets.
//
// Règle de troncature : les N premiers caractères suivis de "...", toujours,
// même si la chaîne est plus courte que N.
// ============================================================================

use crate::app::{App, Panel};
use crate::models::{Stablecoin, Transaction, WalletBalance, WhaleAlert};
use crate::risk::Priority;

/// Caractères conservés pour un hash ou une adresse du flux de transactions
pub const TX_TRUNCATE: usize = 8;

/// Caractères conservés pour une adresse baleine ou un portefeuille
pub const ADDRESS_TRUNCATE: usize = 12;

/// En-têtes du flux de transactions
pub const TRANSACTION_HEADERS: [&str; 5] = ["Tx Hash", "From", "To", "Amount", "Time"];

/// En-têtes des soldes
pub const BALANCE_HEADERS: [&str; 4] = ["Wallet Address", "USDC", "USDT", "DAI"];

/// Les `n` premiers caractères (pas octets) suivis de "..."
pub fn truncate_display(s: &str, n: usize) -> String {
    let prefix: String = s.chars().take(n).collect();
    format!("{}...", prefix)
}

/// Ligne du flux de transactions : une cellule par colonne
pub fn transaction_row(tx: &Transaction) -> [String; 5] {
    [
        truncate_display(tx.id, TX_TRUNCATE),
        truncate_display(tx.from, TX_TRUNCATE),
        truncate_display(tx.to, TX_TRUNCATE),
        tx.amount.to_string(),
        tx.time.to_string(),
    ]
}

/// Ligne des soldes : adresse puis un solde par stablecoin
pub fn balance_row(wallet: &WalletBalance) -> [String; 4] {
    let [usdc, usdt, dai] = Stablecoin::ALL.map(|coin| wallet.balance(coin).to_string());
    [truncate_display(wallet.address, ADDRESS_TRUNCATE), usdc, usdt, dai]
}

/// Carte d'alerte baleine
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCard {
    /// "<type>: "
    pub kind: String,

    /// Montant affiché tel quel
    pub amount: String,

    /// Adresse tronquée
    pub address: String,

    pub time: String,

    /// None si le montant n'a pas pu être interprété
    pub priority: Option<Priority>,
}

pub fn alert_card(alert: &WhaleAlert) -> AlertCard {
    AlertCard {
        kind: format!("{}: ", alert.kind.label()),
        amount: alert.amount.to_string(),
        address: truncate_display(alert.address, ADDRESS_TRUNCATE),
        time: alert.time.to_string(),
        priority: alert.priority().ok(),
    }
}

/// Paires (libellé, valeur) du détail de la ligne sélectionnée
///
/// Valeurs complètes, sans troncature. Vide si le panneau n'a pas de ligne.
pub fn detail_fields(app: &App) -> Vec<(&'static str, String)> {
    let panel = app.focused_panel;
    let index = app.selected_index(panel);

    match panel {
        Panel::Transactions => app
            .transactions
            .get(index)
            .map(|tx| {
                vec![
                    ("Tx Hash", tx.id.to_string()),
                    ("From", tx.from.to_string()),
                    ("To", tx.to.to_string()),
                    ("Amount", tx.amount.to_string()),
                    ("Stablecoin", tx.stablecoin.to_string()),
                    ("Time", tx.time.to_string()),
                ]
            })
            .unwrap_or_default(),

        Panel::WhaleAlerts => app
            .whale_alerts
            .get(index)
            .map(|alert| {
                let (priority, recheck) = match alert.priority() {
                    Ok(p) => (p.to_string(), format!("every {}s", p.recheck_interval().as_secs())),
                    Err(e) => (format!("unavailable ({})", e), "-".to_string()),
                };
                vec![
                    ("Type", alert.kind.label().to_string()),
                    ("Amount", alert.amount.to_string()),
                    ("Address", alert.address.to_string()),
                    ("Time", alert.time.to_string()),
                    ("Priority", priority),
                    ("Recheck", recheck),
                ]
            })
            .unwrap_or_default(),

        Panel::Balances => app
            .wallet_balances
            .get(index)
            .map(|wallet| {
                vec![
                    ("Address", wallet.address.to_string()),
                    ("USDC", wallet.usdc.to_string()),
                    ("USDT", wallet.usdt.to_string()),
                    ("DAI", wallet.dai.to_string()),
                ]
            })
            .unwrap_or_default(),
    }
}

/// Titre du panneau
pub fn panel_title(panel: Panel) -> &'static str {
    match panel {
        Panel::Transactions => "Live Transaction Feed",
        Panel::WhaleAlerts => "Whale Activity Alerts",
        Panel::Balances => "Monitored Wallet Balances",
    }
}

/// Badge affiché à droite du titre
pub fn panel_badge(panel: Panel) -> Option<&'static str> {
    match panel {
        Panel::Transactions => Some("Real-time"),
        Panel::WhaleAlerts => Some("High Impact"),
        Panel::Balances => None,
    }
}
