// src/timer.rs
//
// Cuenta atrás por pregunta. El tiempo lo pone quien llama (en la UI es
// `ctx.input(|i| i.time)`, que funciona igual en nativo y en WASM).

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    started_at: f64,
    limit: f64,
}

impl Countdown {
    pub fn new(now: f64, limit_secs: f64) -> Self {
        Self {
            started_at: now,
            limit: limit_secs.max(0.0),
        }
    }

    pub fn restart(&mut self, now: f64) {
        self.started_at = now;
    }

    pub fn remaining(&self, now: f64) -> f64 {
        (self.limit - (now - self.started_at)).max(0.0)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.remaining(now) <= 0.0
    }

    /// Fracción restante en [0, 1], para la barra de progreso.
    pub fn fraction_left(&self, now: f64) -> f32 {
        if self.limit <= 0.0 {
            return 0.0;
        }
        (self.remaining(now) / self.limit).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_expires() {
        let c = Countdown::new(10.0, 15.0);
        assert_eq!(c.remaining(10.0), 15.0);
        assert_eq!(c.remaining(20.0), 5.0);
        assert!(!c.is_expired(24.9));
        assert!(c.is_expired(25.0));
        assert_eq!(c.remaining(100.0), 0.0);
    }

    #[test]
    fn restart_resets_the_window() {
        let mut c = Countdown::new(0.0, 10.0);
        assert!(c.is_expired(12.0));
        c.restart(12.0);
        assert!(!c.is_expired(12.0));
        assert_eq!(c.fraction_left(17.0), 0.5);
    }

    #[test]
    fn zero_limit_is_always_expired() {
        let c = Countdown::new(0.0, 0.0);
        assert!(c.is_expired(0.0));
        assert_eq!(c.fraction_left(0.0), 0.0);
    }
}
