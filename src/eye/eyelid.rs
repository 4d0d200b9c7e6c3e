// ============================================================================
// Animation des paupières
// ============================================================================
// Traduit l'état booléen du clignement en un taux de recouvrement animé :
// 0.0 = œil grand ouvert, 1.0 = paupières complètement fermées.
//
// La transition dure 300 ms et suit une courbe ease-in-out (smoothstep).
// Un changement de cible en cours de route repart du recouvrement courant,
// il n'y a donc jamais de saut visuel.
// ============================================================================

use std::time::Duration;

use crate::config::EYELID_TRANSITION;

/// Courbe ease-in-out : 3t² - 2t³, t borné à [0, 1]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Paupières animées
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eyelid {
    closed: bool,
    from: f64,
    started_at: Duration,
    transition: Duration,
}

impl Eyelid {
    /// Paupières ouvertes, au repos
    pub fn new() -> Self {
        Self {
            closed: false,
            from: 0.0,
            started_at: Duration::ZERO,
            transition: EYELID_TRANSITION,
        }
    }

    /// Change la cible à l'instant `now` (ignoré si la cible ne change pas)
    pub fn set_closed(&mut self, closed: bool, now: Duration) {
        if closed == self.closed {
            return;
        }
        self.from = self.coverage(now);
        self.closed = closed;
        self.started_at = now;
    }

    /// Recouvrement à l'instant `now`, dans [0, 1]
    pub fn coverage(&self, now: Duration) -> f64 {
        let target = self.target();

        if self.transition.is_zero() {
            return target;
        }

        let elapsed = now.saturating_sub(self.started_at);
        let progress = elapsed.as_secs_f64() / self.transition.as_secs_f64();
        self.from + (target - self.from) * ease_in_out(progress)
    }

    fn target(&self) -> f64 {
        if self.closed {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for Eyelid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_ease_in_out() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(-3.0), 0.0);
        assert_eq!(ease_in_out(7.0), 1.0);
        // Départ et arrivée lents
        assert!(ease_in_out(0.1) < 0.1);
        assert!(ease_in_out(0.9) > 0.9);
    }

    #[test]
    fn test_open_at_rest() {
        let lid = Eyelid::new();
        assert_eq!(lid.coverage(ms(0)), 0.0);
        assert_eq!(lid.coverage(ms(10_000)), 0.0);
    }

    #[test]
    fn test_close_transition_is_monotonic() {
        let mut lid = Eyelid::new();
        lid.set_closed(true, ms(1000));

        let mut previous = lid.coverage(ms(1000));
        assert_eq!(previous, 0.0);
        for step in 1..=30 {
            let c = lid.coverage(ms(1000 + step * 10));
            assert!(c >= previous);
            previous = c;
        }
        assert_eq!(lid.coverage(ms(1300)), 1.0);
        assert_eq!(lid.coverage(ms(5000)), 1.0);
    }

    #[test]
    fn test_retarget_mid_transition_has_no_jump() {
        let mut lid = Eyelid::new();
        lid.set_closed(true, ms(0));
        let halfway = lid.coverage(ms(150));

        lid.set_closed(false, ms(150));
        assert_eq!(lid.coverage(ms(150)), halfway);
        assert_eq!(lid.coverage(ms(450)), 0.0);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut lid = Eyelid::new();
        lid.set_closed(true, ms(0));
        lid.set_closed(true, ms(200));
        assert_eq!(lid.coverage(ms(300)), 1.0);
    }
}
