// ============================================================================
// Données d'exemple
// ============================================================================
// Constantes compilées qui remplacent de vraies données on-chain. Aucune
// source de données n'est branchée : le tableau de bord les affiche telles
// quelles, dans cet ordre.
// ============================================================================

use crate::models::{AlertKind, Stablecoin, Transaction, WalletBalance, WhaleAlert};

/// Flux de transactions
pub const TRANSACTIONS: [Transaction; 5] = [
    Transaction {
        id: "0x1a2b...",
        from: "0xabc...",
        to: "0xdef...",
        amount: "10,000 USDC",
        stablecoin: Stablecoin::Usdc,
        time: "2s ago",
    },
    Transaction {
        id: "0x3c4d...",
        from: "0xghi...",
        to: "0xjkl...",
        amount: "5,000 USDT",
        stablecoin: Stablecoin::Usdt,
        time: "15s ago",
    },
    Transaction {
        id: "0x5e6f...",
        from: "0xmnp...",
        to: "0xqrst...",
        amount: "25,000 USDC",
        stablecoin: Stablecoin::Usdc,
        time: "30s ago",
    },
    Transaction {
        id: "0x7g8h...",
        from: "0xuvw...",
        to: "0xxyz...",
        amount: "1,000 DAI",
        stablecoin: Stablecoin::Dai,
        time: "1m ago",
    },
    Transaction {
        id: "0x9i0j...",
        from: "0x123...",
        to: "0x456...",
        amount: "50,000 USDT",
        stablecoin: Stablecoin::Usdt,
        time: "2m ago",
    },
];

/// Alertes baleines
pub const WHALE_ALERTS: [WhaleAlert; 3] = [
    WhaleAlert {
        id: 1,
        address: "0xWhale1...",
        kind: AlertKind::LargeTransferOut,
        amount: "5,000,000 USDC",
        time: "5m ago",
    },
    WhaleAlert {
        id: 2,
        address: "0xWhale2...",
        kind: AlertKind::SignificantInflow,
        amount: "2,000,000 USDT",
        time: "10m ago",
    },
    WhaleAlert {
        id: 3,
        address: "0xWhale3...",
        kind: AlertKind::LiquidityPoolDeposit,
        amount: "1,500,000 DAI",
        time: "15m ago",
    },
];

/// Portefeuilles surveillés
pub const WALLET_BALANCES: [WalletBalance; 3] = [
    WalletBalance {
        address: "0xMonitor1...",
        usdc: "1,234,567",
        usdt: "876,543",
        dai: "0",
    },
    WalletBalance {
        address: "0xMonitor2...",
        usdc: "500,000",
        usdt: "1,500,000",
        dai: "250,000",
    },
    WalletBalance {
        address: "0xMonitor3...",
        usdc: "0",
        usdt: "900,000",
        dai: "1,100,000",
    },
];
