use gloo_timers::callback::Timeout;

/// A scheduled continuation. Dropping it cancels the continuation if it has
/// not run yet.
pub struct DeferredTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl DeferredTask {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> DeferredTask;
}

/// Browser timer backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> DeferredTask {
        let timeout = Timeout::new(delay_ms, task);
        DeferredTask::new(move || {
            timeout.cancel();
        })
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Slot = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    /// Queues tasks until the test calls [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Vec<(u32, Slot)>>>,
    }

    impl ManualScheduler {
        pub fn scheduled(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn delays(&self) -> Vec<u32> {
            self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        /// Runs every queued task that was not cancelled. Returns how many ran.
        pub fn advance(&self) -> usize {
            let queued: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            let mut ran = 0;
            for (_, slot) in queued {
                let task = slot.borrow_mut().take();
                if let Some(task) = task {
                    task();
                    ran += 1;
                }
            }
            ran
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> DeferredTask {
            let slot: Slot = Rc::new(RefCell::new(Some(task)));
            self.queue.borrow_mut().push((delay_ms, slot.clone()));
            DeferredTask::new(move || {
                slot.borrow_mut().take();
            })
        }
    }
}
