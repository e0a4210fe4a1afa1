use crate::actions::Action;
use crate::dispatcher::{Dispatcher, Envelope};
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Store - holds application state and manages the Redux loop
///
/// All transitions happen on the thread that owns the store, one action at
/// a time. Async work only ever comes back as another action.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: UnboundedReceiver<Envelope>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action, then everything middleware queued in response
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.drain();
    }

    /// Process the next queued or completed action, waiting for a spawned
    /// task if nothing is queued
    ///
    /// Returns false once nothing is queued and nothing is in flight.
    pub async fn step(&mut self) -> bool {
        if let Ok(envelope) = self.action_rx.try_recv() {
            self.accept(envelope);
            return true;
        }
        if self.dispatcher.in_flight() == 0 {
            return false;
        }
        match self.action_rx.recv().await {
            Some(envelope) => {
                self.accept(envelope);
                true
            }
            None => false,
        }
    }

    /// Keep processing until every spawned fetch has settled
    pub async fn run_until_idle(&mut self) {
        while self.step().await {}
    }

    fn drain(&mut self) {
        while let Ok(envelope) = self.action_rx.try_recv() {
            self.accept(envelope);
        }
    }

    fn accept(&mut self, envelope: Envelope) {
        if envelope.completes_task {
            self.dispatcher.task_finished();
        }
        self.process(envelope.action);
    }

    /// Pass an action through the middleware chain and the reducer
    fn process(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(std::mem::take(&mut self.state), &action);
        }
    }
}
