//! Interval hooks for screens that poll the backend or run a countdown.
//!
//! Intervals belong to the effect that created them and are cancelled when
//! the effect is torn down. Futures spawned from a tick check [`Alive`]
//! before touching component state, so a response that lands after the
//! screen is gone is dropped.
use gloo_timers::callback::Interval;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Liveness flag shared between a screen and the futures it spawns.
#[derive(Clone, Debug)]
pub struct Alive(Rc<Cell<bool>>);

impl Alive {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn kill(&self) {
        self.0.set(false);
    }
}

impl Default for Alive {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl PartialEq for Alive {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Flag that flips to dead when the calling component unmounts.
#[hook]
pub fn use_alive() -> Alive {
    let alive = (*use_memo((), |_| Alive::default())).clone();
    {
        let alive = alive.clone();
        use_effect_with((), move |_| move || alive.kill());
    }
    alive
}

/// Run `tick` every `period_ms` milliseconds while the component is mounted.
///
/// A period of `0` stops the interval. The latest `tick` passed in is the one
/// that fires, so it may capture fresh state on every render.
#[hook]
pub fn use_interval<F>(period_ms: u32, tick: F)
where
    F: Fn() + 'static,
{
    let latest = use_mut_ref(|| -> Rc<dyn Fn()> { Rc::new(|| {}) });
    *latest.borrow_mut() = Rc::new(tick);

    use_effect_with(period_ms, move |period| {
        let interval = (*period > 0).then(|| {
            Interval::new(*period, move || {
                let tick = latest.borrow().clone();
                (*tick)();
            })
        });
        move || drop(interval)
    });
}

#[cfg(test)]
mod tests {
    use super::Alive;

    #[test]
    fn alive_flag_is_shared_between_clones() {
        let alive = Alive::default();
        let spawned = alive.clone();
        assert!(spawned.is_alive());
        alive.kill();
        assert!(!spawned.is_alive());
        assert_eq!(alive, spawned);
        assert_ne!(alive, Alive::default());
    }
}
