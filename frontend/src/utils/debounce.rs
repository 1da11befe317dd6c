use std::{
    cell::Cell,
    future::Future,
    pin::Pin,
    rc::{Rc, Weak},
    time::Duration,
};

pub type LocalFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Scheduling primitives the debouncer needs from its event loop.
pub trait Timer {
    /// Resolves once `delay` has elapsed, counted from this call.
    fn sleep(&self, delay: Duration) -> LocalFuture;
    fn spawn(&self, task: LocalFuture);
}

/// `setTimeout`-backed timer for the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, delay: Duration) -> LocalFuture {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(millis))
    }

    fn spawn(&self, task: LocalFuture) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

struct Inner<A> {
    delay: Duration,
    generation: Cell<u64>,
    func: Box<dyn Fn(A) -> LocalFuture>,
    timer: Box<dyn Timer>,
}

/// Collapses bursts of calls into a single delayed call carrying the last
/// argument. Dropping every handle cancels whatever is still pending.
pub struct Debounced<A> {
    inner: Rc<Inner<A>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new<T, F, Fut>(delay: Duration, timer: T, func: F) -> Self
    where
        T: Timer + 'static,
        F: Fn(A) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        Self {
            inner: Rc::new(Inner {
                delay,
                generation: Cell::new(0),
                func: Box::new(move |arg| Box::pin(func(arg))),
                timer: Box::new(timer),
            }),
        }
    }

    /// Schedules `func(arg)` after the delay, superseding any pending call.
    pub fn call(&self, arg: A) {
        let generation = self.bump();
        let sleep = self.inner.timer.sleep(self.inner.delay);
        let weak: Weak<Inner<A>> = Rc::downgrade(&self.inner);
        self.inner.timer.spawn(Box::pin(async move {
            sleep.await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.generation.get() != generation {
                return;
            }
            let call = (inner.func)(arg);
            drop(inner);
            call.await;
        }));
    }

    /// Drops the pending call, if any.
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(next);
        next
    }
}

/// Tokio-driven timer for host tests; needs a `LocalSet`.
#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(all(test, not(target_arch = "wasm32")))]
impl Timer for TokioTimer {
    fn sleep(&self, delay: Duration) -> LocalFuture {
        Box::pin(tokio::time::sleep(delay))
    }

    fn spawn(&self, task: LocalFuture) {
        tokio::task::spawn_local(task);
    }
}
