//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch actions that should re-enter the middleware chain,
//! it uses the Dispatcher. Actions dispatched here are queued and processed by the
//! store, in order, right after the action currently being handled.
//!
//! Middleware that needs to await the catalog hands the work to [`Dispatcher::spawn`].
//! The task's resulting action is queued like any other, and the store counts the task
//! as in flight until that action arrives.

use crate::actions::Action;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// An action on its way to the store
#[derive(Debug)]
pub(crate) struct Envelope {
    pub action: Action,
    /// Set on the action a spawned task resolved with
    pub completes_task: bool,
}

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: UnboundedSender<Envelope>,
    in_flight: Arc<AtomicUsize>,
}

impl Dispatcher {
    pub(crate) fn new(action_tx: UnboundedSender<Envelope>) -> Self {
        Self {
            action_tx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Dispatch an action to be processed through the middleware chain
    pub fn dispatch(&self, action: Action) {
        self.send(Envelope {
            action,
            completes_task: false,
        });
    }

    /// Run `task` on the runtime and dispatch the action it resolves with
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = Action> + Send + 'static,
    {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let dispatcher = self.clone();
        tokio::spawn(async move {
            let action = task.await;
            dispatcher.send(Envelope {
                action,
                completes_task: true,
            });
        });
    }

    /// Number of spawned tasks whose action has not been processed yet
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub(crate) fn task_finished(&self) {
        let _ = self
            .in_flight
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    fn send(&self, envelope: Envelope) {
        if let Err(e) = self.action_tx.send(envelope) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
