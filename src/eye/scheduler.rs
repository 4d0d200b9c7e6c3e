// ============================================================================
// Blink Scheduler : machine à états du clignement
// ============================================================================
// Deux états : Open et Closed. Un timer récurrent ferme les paupières à
// intervalle aléatoire ; un timer ponctuel les rouvre 300 ms plus tard.
//
// Le scheduler ne dort jamais lui-même : il connaît ses prochaines échéances
// et l'appelant le fait avancer dans le temps avec advance(now). Le même code
// sert donc au driver tokio (temps réel) et aux tests (temps simulé).
//
// CONCEPTS RUST :
// 1. Trait + générique : la source d'aléatoire est injectée (DelaySource)
// 2. Option<Duration> : un timer armé ou non
// 3. Impl de trait pour les closures (FnMut) : sources ad hoc dans les tests
// ============================================================================

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::{BLINK_DURATION, BLINK_MAX_DELAY, BLINK_MIN_DELAY};

/// Écart minimal entre deux clignements : un délai nul ferait boucler advance()
const MIN_BLINK_INTERVAL: Duration = Duration::from_millis(1);

// ============================================================================
// Source des délais
// ============================================================================

/// Fournit le délai avant chaque clignement
pub trait DelaySource {
    /// Délai entre ce clignement et le suivant
    fn next_delay(&mut self) -> Duration;
}

/// Toute closure `FnMut() -> Duration` est une source de délais
impl<F> DelaySource for F
where
    F: FnMut() -> Duration,
{
    fn next_delay(&mut self) -> Duration {
        self()
    }
}

/// Délais tirés uniformément dans [min, max)
#[derive(Debug, Clone)]
pub struct RandomDelay<R> {
    rng: R,
    min: Duration,
    max: Duration,
}

impl RandomDelay<StdRng> {
    /// Délais entre 3000 et 8000 ms, générateur initialisé par l'OS
    ///
    /// StdRng plutôt que ThreadRng : le scheduler doit pouvoir être déplacé
    /// dans une tâche tokio (Send).
    pub fn standard() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomDelay<R> {
    /// Délais entre 3000 et 8000 ms avec un générateur donné
    pub fn new(rng: R) -> Self {
        Self::with_range(rng, BLINK_MIN_DELAY, BLINK_MAX_DELAY)
    }

    /// Délais dans [min, max). Si max <= min, le délai vaut toujours min.
    pub fn with_range(rng: R, min: Duration, max: Duration) -> Self {
        Self { rng, min, max }
    }
}

impl<R: Rng> DelaySource for RandomDelay<R> {
    fn next_delay(&mut self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        // Tirage à la milliseconde, comme l'unité de temps du scheduler
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(min..max))
    }
}

// ============================================================================
// États et transitions
// ============================================================================

/// État des paupières
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkState {
    #[default]
    Open,
    Closed,
}

/// Changement d'état daté
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTransition {
    /// Instant prévu de l'échéance (pas l'instant où advance() l'a traitée)
    pub at: Duration,
    pub state: BlinkState,
}

// ============================================================================
// Scheduler
// ============================================================================

/// Pilote du clignement
///
/// Le temps est une `Duration` depuis une origine choisie par l'appelant.
#[derive(Debug)]
pub struct BlinkScheduler<D> {
    delays: D,
    state: BlinkState,
    blink_duration: Duration,

    /// Prochain clignement (timer récurrent)
    next_blink: Option<Duration>,

    /// Réouverture du clignement en cours (timer ponctuel)
    reopen_at: Option<Duration>,
}

impl<D: DelaySource> BlinkScheduler<D> {
    /// Crée un scheduler inactif, paupières ouvertes
    pub fn new(delays: D) -> Self {
        Self {
            delays,
            state: BlinkState::Open,
            blink_duration: BLINK_DURATION,
            next_blink: None,
            reopen_at: None,
        }
    }

    /// Active le scheduler : paupières ouvertes, premier clignement armé
    ///
    /// Redémarrer un scheduler actif réarme les timers depuis `now`.
    pub fn start(&mut self, now: Duration) {
        self.state = BlinkState::Open;
        self.reopen_at = None;

        let delay = self.next_interval();
        self.next_blink = Some(now + delay);
        debug!(?delay, "Blink scheduler started");
    }

    /// Désactive le scheduler : annule le timer récurrent ET la réouverture
    /// éventuellement en attente. L'état courant n'est plus modifié.
    pub fn stop(&mut self) {
        if self.is_active() {
            debug!(state = ?self.state, "Blink scheduler stopped");
        }
        self.next_blink = None;
        self.reopen_at = None;
    }

    /// Vrai tant qu'au moins un timer est armé
    pub fn is_active(&self) -> bool {
        self.next_blink.is_some() || self.reopen_at.is_some()
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Vrai pendant un clignement (paupières fermées)
    pub fn is_blinking(&self) -> bool {
        self.state == BlinkState::Closed
    }

    /// Prochaine échéance, tous timers confondus
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.next_blink, self.reopen_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn next_interval(&mut self) -> Duration {
        self.delays.next_delay().max(MIN_BLINK_INTERVAL)
    }

    /// Traite toutes les échéances passées (<= now), dans l'ordre chronologique
    ///
    /// Retourne les transitions effectuées. Une échéance de réouverture et un
    /// clignement au même instant : la réouverture passe d'abord.
    pub fn advance(&mut self, now: Duration) -> Vec<BlinkTransition> {
        let mut transitions = Vec::new();

        while let Some(deadline) = self.next_deadline().filter(|d| *d <= now) {
            if self.reopen_at == Some(deadline) {
                self.reopen_at = None;
                self.state = BlinkState::Open;
            } else {
                // Clignement : ferme, arme la réouverture, réarme le récurrent
                self.state = BlinkState::Closed;
                self.reopen_at = Some(deadline + self.blink_duration);
                self.next_blink = Some(deadline + self.next_interval());
            }

            trace!(at = ?deadline, state = ?self.state, "Blink transition");
            transitions.push(BlinkTransition {
                at: deadline,
                state: self.state,
            });
        }

        transitions
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Source qui rejoue une séquence fixe (puis répète la dernière valeur)
    fn sequence(values: &[u64]) -> impl FnMut() -> Duration {
        let values = values.to_vec();
        let mut index = 0;
        move || {
            let value = values[index.min(values.len() - 1)];
            index += 1;
            ms(value)
        }
    }

    #[test]
    fn test_initial_state() {
        let scheduler = BlinkScheduler::new(sequence(&[4000]));
        assert!(!scheduler.is_blinking());
        assert!(!scheduler.is_active());
        assert_eq!(scheduler.next_deadline(), None);
    }

    #[test]
    fn test_start_arms_first_blink() {
        let mut scheduler = BlinkScheduler::new(sequence(&[4000]));
        scheduler.start(ms(100));

        assert!(!scheduler.is_blinking());
        assert_eq!(scheduler.next_deadline(), Some(ms(4100)));
        assert!(scheduler.advance(ms(4099)).is_empty());
    }

    #[test]
    fn test_one_cycle() {
        let mut scheduler = BlinkScheduler::new(sequence(&[3000, 5000]));
        scheduler.start(ms(0));

        let t = scheduler.advance(ms(3000));
        assert_eq!(t, vec![BlinkTransition { at: ms(3000), state: BlinkState::Closed }]);
        assert!(scheduler.is_blinking());

        // Encore fermé juste avant la fin du clignement
        assert!(scheduler.advance(ms(3299)).is_empty());
        assert!(scheduler.is_blinking());

        let t = scheduler.advance(ms(3300));
        assert_eq!(t, vec![BlinkTransition { at: ms(3300), state: BlinkState::Open }]);
        assert!(!scheduler.is_blinking());

        // Espacement mesuré d'un clignement à l'autre
        assert_eq!(scheduler.next_deadline(), Some(ms(8000)));
    }

    #[test]
    fn test_advance_catches_up_in_order() {
        let mut scheduler = BlinkScheduler::new(sequence(&[3000]));
        scheduler.start(ms(0));

        let states: Vec<(u64, BlinkState)> = scheduler
            .advance(ms(9500))
            .iter()
            .map(|t| (t.at.as_millis() as u64, t.state))
            .collect();

        assert_eq!(
            states,
            vec![
                (3000, BlinkState::Closed),
                (3300, BlinkState::Open),
                (6000, BlinkState::Closed),
                (6300, BlinkState::Open),
                (9000, BlinkState::Closed),
                (9300, BlinkState::Open),
            ]
        );
    }

    #[test]
    fn test_stop_cancels_both_timers() {
        let mut scheduler = BlinkScheduler::new(sequence(&[3000]));
        scheduler.start(ms(0));
        scheduler.advance(ms(3100));
        assert!(scheduler.is_blinking());

        // Arrêt au milieu d'un clignement : la réouverture est annulée aussi
        scheduler.stop();
        assert!(!scheduler.is_active());
        assert_eq!(scheduler.next_deadline(), None);
        assert!(scheduler.advance(ms(60_000)).is_empty());
        assert_eq!(scheduler.state(), BlinkState::Closed);
    }

    #[test]
    fn test_restart_reopens() {
        let mut scheduler = BlinkScheduler::new(sequence(&[3000]));
        scheduler.start(ms(0));
        scheduler.advance(ms(3100));
        scheduler.stop();

        scheduler.start(ms(10_000));
        assert!(!scheduler.is_blinking());
        assert_eq!(scheduler.next_deadline(), Some(ms(13_000)));
    }

    #[test]
    fn test_random_delay_bounds() {
        let mut delays = RandomDelay::new(StdRng::seed_from_u64(7));
        for _ in 0..10_000 {
            let d = delays.next_delay();
            assert!(d >= BLINK_MIN_DELAY && d < BLINK_MAX_DELAY, "{:?}", d);
        }
    }

    #[test]
    fn test_random_delay_degenerate_range() {
        let mut delays = RandomDelay::with_range(StdRng::seed_from_u64(1), ms(500), ms(500));
        assert_eq!(delays.next_delay(), ms(500));
    }

    #[test]
    fn test_zero_delay_still_advances() {
        let delays = RandomDelay::with_range(StdRng::seed_from_u64(1), ms(0), ms(0));
        let mut scheduler = BlinkScheduler::new(delays);
        scheduler.start(ms(0));

        // Au plus un clignement par milliseconde
        let transitions = scheduler.advance(ms(10));
        let fires = transitions
            .iter()
            .filter(|t| t.state == BlinkState::Closed)
            .count();
        assert_eq!(fires, 10);
        assert!(transitions.iter().all(|t| t.at <= ms(10)));
        assert_eq!(scheduler.next_deadline(), Some(ms(11)));
    }

    /// Simule de nombreux cycles et vérifie les bornes de temps et la
    /// cohérence de l'état à chaque transition
    #[test]
    fn test_simulated_cycles_timing() {
        let mut scheduler = BlinkScheduler::new(RandomDelay::new(StdRng::seed_from_u64(42)));
        scheduler.start(ms(0));
        assert!(!scheduler.is_blinking());

        let mut transitions = Vec::new();
        let mut now = ms(0);
        while transitions.len() < 2_000 {
            // Pas irréguliers pour couvrir le rattrapage de plusieurs échéances
            now += ms(1_234);
            transitions.extend(scheduler.advance(now));
        }

        // Alternance stricte Closed, Open, Closed, Open...
        for (i, t) in transitions.iter().enumerate() {
            let expected = if i % 2 == 0 { BlinkState::Closed } else { BlinkState::Open };
            assert_eq!(t.state, expected, "transition {}", i);
        }

        let closes: Vec<Duration> = transitions.iter().step_by(2).map(|t| t.at).collect();
        let opens: Vec<Duration> = transitions.iter().skip(1).step_by(2).map(|t| t.at).collect();

        // Premier clignement après le délai initial
        assert!(closes[0] >= BLINK_MIN_DELAY && closes[0] < BLINK_MAX_DELAY);

        // Fermeture d'exactement 300 ms
        for (close, open) in closes.iter().zip(opens.iter()) {
            assert_eq!(*open - *close, BLINK_DURATION);
        }

        // Délai entre deux clignements dans [3000, 8000)
        for pair in closes.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap >= BLINK_MIN_DELAY && gap < BLINK_MAX_DELAY, "{:?}", gap);
        }
    }
}
