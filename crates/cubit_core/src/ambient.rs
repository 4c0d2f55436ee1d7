//! Per-thread ambient provider
//!
//! Call sites that do not carry a provider handle (buffer randomization,
//! [`DiceTerm::roll_ambient`](crate::dice::DiceTerm::roll_ambient)) borrow
//! the current thread's instance through [`with_random`]. Each thread
//! lazily builds its own instance from a process-wide factory on first use
//! and drops it when the thread exits; no instance is ever shared between
//! threads, so nothing here takes a lock.
//!
//! Prefer passing a `&mut dyn RandomProvider` explicitly. The ambient slot
//! is a convenience with explicit hooks for injection
//! ([`replace_thread_random`]) and reset ([`reset_thread_random`]).

use std::cell::RefCell;

use once_cell::sync::OnceCell;

use crate::error::RandomError;
use crate::random::{PlatformRandom, RandomProvider};

/// Builds a fresh provider for a thread that has none yet.
///
/// Called once per materializing thread, possibly from several threads at
/// the same time.
pub type RandomFactory = Box<dyn Fn() -> Box<dyn RandomProvider> + Send + Sync>;

static FACTORY: OnceCell<RandomFactory> = OnceCell::new();

thread_local! {
    static THREAD_RANDOM: RefCell<Option<Box<dyn RandomProvider>>> = const { RefCell::new(None) };
}

/// Install the process-wide factory. Call once at startup.
///
/// Fails with [`RandomError::FactoryAlreadySet`] if a factory was already
/// installed, or if any thread has already materialized a provider (which
/// latches the default factory). Threads that materialized before this call
/// keep their instance.
pub fn set_factory<F>(factory: F) -> Result<(), RandomError>
where
    F: Fn() -> Box<dyn RandomProvider> + Send + Sync + 'static,
{
    FACTORY.set(Box::new(factory)).map_err(|_| {
        tracing::warn!("ambient random factory already set; keeping the existing one");
        RandomError::FactoryAlreadySet
    })?;
    tracing::info!("installed ambient random factory");
    Ok(())
}

/// Run `f` against this thread's provider, creating it on first use.
///
/// # Panics
/// Panics if called re-entrantly from inside `f` on the same thread.
pub fn with_random<R>(f: impl FnOnce(&mut dyn RandomProvider) -> R) -> R {
    THREAD_RANDOM.with(|slot| {
        let mut slot = slot.borrow_mut();
        let rng = slot.get_or_insert_with(|| {
            tracing::trace!(thread = ?std::thread::current().id(), "materializing thread random provider");
            (factory())()
        });
        f(&mut **rng)
    })
}

/// Install `provider` as this thread's instance, returning the previous one.
pub fn replace_thread_random(
    provider: Box<dyn RandomProvider>,
) -> Option<Box<dyn RandomProvider>> {
    THREAD_RANDOM.with(|slot| slot.borrow_mut().replace(provider))
}

/// Drop this thread's instance; the next access rebuilds it via the factory.
pub fn reset_thread_random() {
    let previous = THREAD_RANDOM.with(|slot| slot.borrow_mut().take());
    drop(previous);
}

fn factory() -> &'static RandomFactory {
    FACTORY.get_or_init(|| Box::new(default_provider) as RandomFactory)
}

fn default_provider() -> Box<dyn RandomProvider> {
    Box::new(PlatformRandom::from_entropy())
}
