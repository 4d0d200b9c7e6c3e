// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// PATTERN : "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
//
// Les données affichées sont des constantes (&'static [T]) : l'état ne
// contient que la navigation, la confirmation de quit et l'œil.
// ============================================================================

use std::time::Duration;

use crate::eye::Eyelid;
use crate::models::sample::{TRANSACTIONS, WALLET_BALANCES, WHALE_ALERTS};
use crate::models::{Transaction, WalletBalance, WhaleAlert};

// ============================================================================
// Enum : Screen
// ============================================================================

/// Écrans de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Vue principale : œil + trois panneaux
    Dashboard,

    /// Détail de l'enregistrement sélectionné (popup par-dessus le dashboard)
    Detail,
}

// ============================================================================
// Enum : Panel
// ============================================================================
// CONCEPT : Cycle d'états
// - Tab : Transactions → WhaleAlerts → Balances → Transactions
// - Shift-Tab : sens inverse
// ============================================================================

/// Panneaux du tableau de bord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Transactions,
    WhaleAlerts,
    Balances,
}

impl Panel {
    /// Tous les panneaux, dans l'ordre d'affichage
    pub const ALL: [Panel; 3] = [Panel::Transactions, Panel::WhaleAlerts, Panel::Balances];

    /// Panneau suivant (boucle)
    pub fn next(&self) -> Self {
        match self {
            Panel::Transactions => Panel::WhaleAlerts,
            Panel::WhaleAlerts => Panel::Balances,
            Panel::Balances => Panel::Transactions,
        }
    }

    /// Panneau précédent (boucle)
    pub fn previous(&self) -> Self {
        match self {
            Panel::Transactions => Panel::Balances,
            Panel::WhaleAlerts => Panel::Transactions,
            Panel::Balances => Panel::WhaleAlerts,
        }
    }

    fn index(&self) -> usize {
        match self {
            Panel::Transactions => 0,
            Panel::WhaleAlerts => 1,
            Panel::Balances => 2,
        }
    }
}

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Écran actuellement affiché
    pub current_screen: Screen,

    /// Panneau qui reçoit la navigation ↑↓
    pub focused_panel: Panel,

    /// Ligne sélectionnée dans chaque panneau (indexé par Panel::index)
    selected: [usize; 3],

    /// Two-step quit : première pression de 'q' → true, deuxième → quit
    pub confirm_quit: bool,

    pub transactions: &'static [Transaction],
    pub whale_alerts: &'static [WhaleAlert],
    pub wallet_balances: &'static [WalletBalance],

    /// Animation des paupières de l'œil
    pub eyelid: Eyelid,

    /// Temps écoulé depuis le démarrage, mis à jour à chaque tick
    pub now: Duration,

    /// Heure locale affichée dans le header ("HH:MM:SS"), vide avant le premier tick
    pub clock: String,
}

impl App {
    /// Crée l'application avec les données d'exemple
    pub fn new() -> Self {
        Self::with_data(&TRANSACTIONS, &WHALE_ALERTS, &WALLET_BALANCES)
    }

    /// Crée l'application avec des données données
    pub fn with_data(
        transactions: &'static [Transaction],
        whale_alerts: &'static [WhaleAlert],
        wallet_balances: &'static [WalletBalance],
    ) -> Self {
        Self {
            running: true,
            current_screen: Screen::Dashboard,
            focused_panel: Panel::Transactions,
            selected: [0; 3],
            confirm_quit: false,
            transactions,
            whale_alerts,
            wallet_balances,
            eyelid: Eyelid::new(),
            now: Duration::ZERO,
            clock: String::new(),
        }
    }

    /// Quitte l'application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    ///
    /// Avance l'horloge et donne à l'œil le dernier état du clignement.
    /// L'heure locale est lue ici : le rendu ne dépend que de l'état de App.
    pub fn tick(&mut self, now: Duration, eye_closed: bool) {
        self.now = now;
        self.clock = chrono::Local::now().format("%H:%M:%S").to_string();
        self.eyelid.set_closed(eye_closed, now);
    }

    /// Recouvrement courant des paupières (0 = ouvert, 1 = fermé)
    pub fn eye_coverage(&self) -> f64 {
        self.eyelid.coverage(self.now)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Nombre de lignes d'un panneau
    pub fn panel_len(&self, panel: Panel) -> usize {
        match panel {
            Panel::Transactions => self.transactions.len(),
            Panel::WhaleAlerts => self.whale_alerts.len(),
            Panel::Balances => self.wallet_balances.len(),
        }
    }

    /// Ligne sélectionnée d'un panneau
    pub fn selected_index(&self, panel: Panel) -> usize {
        self.selected[panel.index()]
    }

    pub fn focus_next(&mut self) {
        self.focused_panel = self.focused_panel.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused_panel = self.focused_panel.previous();
    }

    /// Remonte d'une ligne dans le panneau actif (bloqué à 0)
    pub fn navigate_up(&mut self) {
        let slot = &mut self.selected[self.focused_panel.index()];
        *slot = slot.saturating_sub(1);
    }

    /// Descend d'une ligne dans le panneau actif (bloqué à la dernière)
    pub fn navigate_down(&mut self) {
        let max_index = self.panel_len(self.focused_panel).saturating_sub(1);
        let slot = &mut self.selected[self.focused_panel.index()];
        *slot = (*slot + 1).min(max_index);
    }

    // ========================================================================
    // Écrans
    // ========================================================================

    /// Ouvre le détail de la ligne sélectionnée (si le panneau n'est pas vide)
    pub fn show_detail(&mut self) {
        if self.panel_len(self.focused_panel) > 0 {
            self.current_screen = Screen::Detail;
        }
    }

    /// Retourne au dashboard
    pub fn show_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
    }

    pub fn is_on_dashboard(&self) -> bool {
        self.current_screen == Screen::Dashboard
    }

    pub fn is_on_detail(&self) -> bool {
        self.current_screen == Screen::Detail
    }

    // ========================================================================
    // Quit Confirmation
    // ========================================================================

    /// Première pression de 'q' : attend une seconde pression
    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    /// Annule la demande de quit
    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_creation() {
        let app = App::new();
        assert!(app.is_running());
        assert!(app.is_on_dashboard());
        assert_eq!(app.focused_panel, Panel::Transactions);
        assert_eq!(app.panel_len(Panel::Transactions), 5);
        assert_eq!(app.panel_len(Panel::WhaleAlerts), 3);
        assert_eq!(app.panel_len(Panel::Balances), 3);
        assert_eq!(app.eye_coverage(), 0.0);
    }

    #[test]
    fn test_app_quit() {
        let mut app = App::new();
        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());

        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());
        assert!(app.is_running());

        app.quit();
        assert!(!app.is_running());
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = App::new();
        for panel in Panel::ALL.iter() {
            assert_eq!(app.focused_panel, *panel);
            app.focus_next();
        }
        assert_eq!(app.focused_panel, Panel::Transactions);

        app.focus_previous();
        assert_eq!(app.focused_panel, Panel::Balances);
    }

    #[test]
    fn test_navigation_is_clamped_per_panel() {
        let mut app = App::new();

        for _ in 0..10 {
            app.navigate_down();
        }
        assert_eq!(app.selected_index(Panel::Transactions), 4);

        // Chaque panneau garde sa propre sélection
        app.focus_next();
        assert_eq!(app.selected_index(Panel::WhaleAlerts), 0);
        app.navigate_down();
        app.navigate_down();
        app.navigate_down();
        assert_eq!(app.selected_index(Panel::WhaleAlerts), 2);

        app.navigate_up();
        assert_eq!(app.selected_index(Panel::WhaleAlerts), 1);
        app.navigate_up();
        app.navigate_up();
        assert_eq!(app.selected_index(Panel::WhaleAlerts), 0);

        assert_eq!(app.selected_index(Panel::Transactions), 4);
    }

    #[test]
    fn test_detail_requires_rows() {
        let mut app = App::with_data(&[], &WHALE_ALERTS, &WALLET_BALANCES);
        app.show_detail();
        assert!(app.is_on_dashboard());

        app.focus_next();
        app.show_detail();
        assert!(app.is_on_detail());

        app.show_dashboard();
        assert!(app.is_on_dashboard());
    }

    #[test]
    fn test_tick_sets_clock() {
        let mut app = App::new();
        assert!(app.clock.is_empty());

        app.tick(Duration::ZERO, false);
        assert_eq!(app.clock.len(), 8);
        assert_eq!(app.clock.matches(':').count(), 2);
    }

    #[test]
    fn test_tick_drives_eyelid() {
        let mut app = App::new();
        app.tick(Duration::from_millis(1000), true);
        assert_eq!(app.eye_coverage(), 0.0);

        app.tick(Duration::from_millis(1300), true);
        assert_eq!(app.eye_coverage(), 1.0);

        app.tick(Duration::from_millis(1600), false);
        app.tick(Duration::from_millis(1900), false);
        assert_eq!(app.eye_coverage(), 0.0);
    }
}
