//! Render generation counter.
//!
//! The interaction controller bumps the generation whenever the desired view
//! changes. A render records the generation it started under and stays current
//! only while the counter still holds that value.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::actions::cancellation::CancelToken;

#[derive(Debug, Default)]
pub struct RenderGeneration {
    value: AtomicU64,
}

impl RenderGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }

    /// Advances the counter and returns the new generation.
    pub fn bump(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.current() == generation
    }

    /// A cancel token that fires once the counter moves past `started_at`.
    #[must_use]
    pub fn token(&self, started_at: u64) -> GenerationToken<'_> {
        GenerationToken {
            generation: self,
            started_at,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationToken<'a> {
    generation: &'a RenderGeneration,
    started_at: u64,
}

impl CancelToken for GenerationToken<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        !self.generation.is_current(self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn starts_at_zero() {
        assert_eq!(RenderGeneration::new().current(), 0);
    }

    #[test]
    fn bump_returns_new_value() {
        let generation = RenderGeneration::new();

        assert_eq!(generation.bump(), 1);
        assert_eq!(generation.bump(), 2);
        assert_eq!(generation.current(), 2);
    }

    #[test]
    fn token_is_live_until_bumped() {
        let generation = RenderGeneration::new();
        generation.bump();
        let token = generation.token(generation.current());

        assert!(!token.is_cancelled());

        generation.bump();

        assert!(token.is_cancelled());
    }

    #[test]
    fn stale_token_is_cancelled_immediately() {
        let generation = RenderGeneration::new();
        let token = generation.token(5);

        for _ in 0..6 {
            generation.bump();
        }

        assert!(generation.is_current(6));
        assert!(token.is_cancelled());
    }

    #[test]
    fn concurrent_bumps_are_monotonic() {
        let generation = Arc::new(RenderGeneration::new());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generation = Arc::clone(&generation);
                thread::spawn(move || {
                    let mut last = 0;
                    for _ in 0..1000 {
                        let next = generation.bump();
                        assert!(next > last);
                        last = next;
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(generation.current(), 4000);
    }
}
