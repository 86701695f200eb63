//! State dispatcher for pub-sub pattern

use anyhow::Result;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

use crate::grid_state_container::GridStateContainer;
use crate::state::events::GridEvent;
use crate::ui::layout_sequencer::TableLayout;

/// Trait for components that receive the recomputed layout
pub trait LayoutSubscriber {
    /// Handle a freshly computed layout after `event` was applied
    fn on_layout_changed(&mut self, event: &GridEvent, layout: &TableLayout);

    /// Get subscriber name for debugging
    fn name(&self) -> &str;
}

/// Applies intents to a grid one at a time and hands the resulting layout
/// to every subscriber
pub struct StateDispatcher {
    /// Weak reference to the grid (to avoid circular references)
    grid: Weak<RefCell<GridStateContainer>>,

    /// List of subscribers
    subscribers: Vec<Box<dyn LayoutSubscriber>>,

    /// Event history for debugging
    event_history: Vec<GridEvent>,

    /// Maximum event history size
    max_history: usize,
}

impl Default for StateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl StateDispatcher {
    pub fn new() -> Self {
        Self {
            grid: Weak::new(),
            subscribers: Vec::new(),
            event_history: Vec::new(),
            max_history: 100,
        }
    }

    /// Set the grid this dispatcher coordinates
    pub fn set_grid(&mut self, grid: &Rc<RefCell<GridStateContainer>>) {
        self.grid = Rc::downgrade(grid);
    }

    /// Add a subscriber
    pub fn subscribe(&mut self, subscriber: Box<dyn LayoutSubscriber>) {
        info!("StateDispatcher: Adding subscriber: {}", subscriber.name());
        self.subscribers.push(subscriber);
    }

    /// Dispatch an intent. Returns whether the grid state changed; a
    /// dropped grid is logged and reported as unchanged.
    pub fn dispatch(&mut self, event: GridEvent) -> Result<bool> {
        debug!("StateDispatcher: Dispatching event: {:?}", event);

        // Record event in history
        self.event_history.push(event.clone());
        if self.event_history.len() > self.max_history {
            self.event_history.remove(0);
        }

        let grid_rc = match self.grid.upgrade() {
            Some(g) => g,
            None => {
                warn!("StateDispatcher: Grid reference lost!");
                return Ok(false);
            }
        };

        // Apply fully before anyone sees the layout
        let changed = grid_rc.borrow_mut().apply(&event)?;

        let grid = grid_rc.borrow();
        for subscriber in &mut self.subscribers {
            debug!(
                "StateDispatcher: Notifying subscriber: {}",
                subscriber.name()
            );
            subscriber.on_layout_changed(&event, grid.layout());
        }

        Ok(changed)
    }

    /// Get event history for debugging
    pub fn get_event_history(&self) -> &[GridEvent] {
        &self.event_history
    }
}
