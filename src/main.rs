// ============================================================================
// SeiWatch - Sei Stablecoin Monitor
// ============================================================================
// Tableau de bord TUI : un œil animé qui cligne au hasard, et trois panneaux
// (flux de transactions, alertes baleines, soldes surveillés) remplis avec
// des données d'exemple.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : boucle qui gère événements, mise à jour et rendering
// 3. Runtime tokio possédé par main : les timers du clignement tournent
//    dans une tâche, l'UI lit leur état via un channel watch
// ============================================================================

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use seiwatch::app::App;
use seiwatch::config::{self, APP_NAME, DEFAULT_LOG_FILTER, TICK_RATE};
use seiwatch::eye::{BlinkHandle, BlinkScheduler, RandomDelay};
use seiwatch::ui::{events::EventHandler, render};

// ============================================================================
// Initialisation du logging
// ============================================================================
// Les println! ne fonctionnent pas une fois le TUI lancé : on log vers un
// fichier, avec rotation quotidienne.
// ============================================================================

/// Initialise le système de logging vers fichier
///
/// Les logs sont écrits dans `config::log_dir()` :
/// - `$SEIWATCH_LOG_DIR` si défini
/// - Linux : ~/.local/share/seiwatch/logs/seiwatch.log
/// - macOS : ~/Library/Application Support/seiwatch/logs/seiwatch.log
///
/// # Utilisation
/// ```bash
/// tail -f ~/.local/share/seiwatch/logs/seiwatch.log.*
/// RUST_LOG=seiwatch=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = config::log_dir();

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Échec de la création du répertoire de logs {:?}", log_dir))?;

    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, &log_dir, format!("{}.log", APP_NAME));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_thread_ids(true) // La tâche de clignement tourne sur un autre thread
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .try_init()
        .context("Un subscriber tracing est déjà installé")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Si l'init échoue, on prévient et on continue sans logs
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {:#}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("SeiWatch starting up");

    // Runtime multi-thread : la tâche de clignement tourne pendant que le
    // thread principal est bloqué dans la boucle d'événements
    let runtime = tokio::runtime::Runtime::new().context("Échec de la création du runtime tokio")?;

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    // spawn() a besoin d'un contexte tokio : enter() le fournit au thread courant
    let mut blink = {
        let _guard = runtime.enter();
        BlinkHandle::spawn(BlinkScheduler::new(RandomDelay::standard()))
    };

    let mut app = App::new();
    let events = EventHandler::new(TICK_RATE);

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events, &blink);

    // Arrête les timers du clignement avant de détruire le runtime
    runtime.block_on(blink.stop());

    debug!("Restoring terminal");
    let restored = restore_terminal(&mut terminal);

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    finish(result, restored)
}

/// Combine l'erreur de la boucle et celle de la restauration du terminal
///
/// L'erreur de la boucle passe en premier : c'est la cause, la restauration
/// n'est qu'une conséquence. Un échec de restauration seul est renvoyé tel quel.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            error!(error = ?restore_err, "Failed to restore terminal");
            Err(e.context(format!("restauration du terminal échouée aussi : {:#}", restore_err)))
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored,
    }
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   1. UPDATE : horloge + état du clignement
//   2. RENDER : dessine l'interface
//   3. INPUT : attend un événement (au plus TICK_RATE)
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    blink: &BlinkHandle,
) -> Result<()> {
    let origin = Instant::now();

    while app.is_running() {
        app.tick(origin.elapsed(), blink.is_blinking());

        terminal
            .draw(|frame| render(frame, app))
            .context("Échec du rendu")?;

        match events.next() {
            Ok(event) => handle_event(app, event),
            Err(e) => warn!(error = ?e, "Failed to read terminal event"),
        }
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
///
/// Guards (if) : la même touche n'a pas le même effet selon l'écran.
fn handle_event(app: &mut App, event: seiwatch::ui::events::Event) {
    use seiwatch::ui::events::{
        is_down_event, is_enter_event, is_escape_event, is_next_panel_event,
        is_previous_panel_event, is_quit_event, is_space_event, is_up_event, Event,
    };

    match event {
        Event::Key(_) if is_quit_event(&event) => {
            // Two-step : première pression → confirmation, deuxième → quit
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        // ESC ou SPACE : ferme le détail
        Event::Key(_) if (is_escape_event(&event) || is_space_event(&event)) && app.is_on_detail() => {
            app.cancel_quit();
            debug!("User closed detail view");
            app.show_dashboard();
        }

        // Shift-Tab avant Tab : certains terminaux envoient Tab + SHIFT
        Event::Key(_) if is_previous_panel_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.focus_previous();
            debug!(panel = ?app.focused_panel, "User focused previous panel");
        }
        Event::Key(_) if is_next_panel_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.focus_next();
            debug!(panel = ?app.focused_panel, "User focused next panel");
        }

        Event::Key(_) if is_up_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.navigate_up();
        }
        Event::Key(_) if is_down_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            app.navigate_down();
        }

        Event::Key(_) if is_enter_event(&event) && app.is_on_dashboard() => {
            app.cancel_quit();
            info!(
                panel = ?app.focused_panel,
                index = app.selected_index(app.focused_panel),
                "User opened detail view"
            );
            app.show_detail();
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation si active
            app.cancel_quit();
        }

        Event::Tick => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI (raw mode + alternate screen)
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Échec de l'activation du raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Échec de l'entrée dans l'alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Échec de la création du terminal")
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Échec de la désactivation du raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Échec de la sortie de l'alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_finish_keeps_loop_error_when_restore_fails() {
        let err = finish(Err(anyhow!("draw failed")), Err(anyhow!("raw mode"))).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("draw failed"), "{}", message);
        assert!(message.contains("raw mode"), "{}", message);
    }

    #[test]
    fn test_finish_reports_restore_failure_alone() {
        let err = finish(Ok(()), Err(anyhow!("raw mode"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_finish_keeps_loop_error() {
        let err = finish(Err(anyhow!("draw failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }
}
