// ============================================================================
// Blink Driver : le scheduler branché sur les timers tokio
// ============================================================================
// Une tâche tokio possède le scheduler, dort jusqu'à la prochaine échéance,
// le fait avancer et publie l'état sur un channel watch.
//
// CONCEPTS RUST :
// 1. tokio::sync::watch : dernière valeur publiée, lue sans bloquer par l'UI
// 2. tokio::select! : attendre le timer OU la demande d'arrêt
// 3. oneshot : signal d'arrêt à usage unique
// ============================================================================

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, instrument};

use super::scheduler::{BlinkScheduler, DelaySource};

/// Poignée sur la tâche de clignement
///
/// Lâcher la poignée sans appeler `stop()` arrête aussi la tâche : le
/// signal d'arrêt est envoyé quand l'émetteur oneshot est détruit.
#[derive(Debug)]
pub struct BlinkHandle {
    state_rx: watch::Receiver<bool>,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl BlinkHandle {
    /// Démarre le scheduler dans une nouvelle tâche du runtime courant
    ///
    /// Doit être appelé depuis un contexte tokio (runtime.enter() ou async).
    pub fn spawn<D>(scheduler: BlinkScheduler<D>) -> Self
    where
        D: DelaySource + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(false);
        let (stop_tx, stop_rx) = oneshot::channel();

        let task = tokio::spawn(run(scheduler, state_tx, stop_rx));

        Self {
            state_rx,
            stop_tx: Some(stop_tx),
            task: Some(task),
        }
    }

    /// Dernier état publié (true = paupières fermées)
    pub fn is_blinking(&self) -> bool {
        *self.state_rx.borrow()
    }

    /// Nouveau récepteur, pour attendre les changements d'état
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state_rx.clone()
    }

    /// Arrête la tâche et attend sa fin
    ///
    /// Après le retour, plus aucun timer n'est armé et l'état publié ne
    /// change plus. Idempotent.
    pub async fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // Err : la tâche est déjà terminée, rien à signaler
            let _ = stop_tx.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

/// Boucle de la tâche
#[instrument(skip_all)]
async fn run<D: DelaySource>(
    mut scheduler: BlinkScheduler<D>,
    state_tx: watch::Sender<bool>,
    mut stop_rx: oneshot::Receiver<()>,
) {
    let origin = Instant::now();
    scheduler.start(origin.elapsed());
    publish(&state_tx, scheduler.is_blinking());
    info!("Blink driver running");

    while let Some(deadline) = scheduler.next_deadline() {
        tokio::select! {
            // biased : l'arrêt est toujours vu avant une échéance prête en même temps
            biased;

            // Arrêt explicite ou poignée détruite
            _ = &mut stop_rx => break,

            _ = sleep_until(origin + deadline) => {
                for transition in scheduler.advance(origin.elapsed()) {
                    debug!(at = ?transition.at, state = ?transition.state, "Eye blink state changed");
                }
                publish(&state_tx, scheduler.is_blinking());
            }
        }
    }

    scheduler.stop();
    info!("Blink driver stopped");
}

/// Publie l'état seulement s'il a changé : les récepteurs ne sont réveillés
/// que par de vraies transitions. Fonctionne même sans récepteur.
fn publish(state_tx: &watch::Sender<bool>, blinking: bool) {
    state_tx.send_if_modified(|current| {
        if *current == blinking {
            false
        } else {
            *current = blinking;
            true
        }
    });
}
