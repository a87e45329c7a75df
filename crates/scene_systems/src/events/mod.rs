//! Per-scene event dispatcher
//! Key principles:
//! - Events are named, arguments are key-value (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Queuing support (immediate + deferred delivery)

use std::collections::HashMap;

/// Variant for type-safe event arguments
#[derive(Debug, Clone, PartialEq)]
pub enum EventArg {
    /// Boolean flag
    Flag(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Number(f64),
    /// Position coordinates
    Position(f32, f32),
    /// Free text
    Text(String),
}

/// Named event with key-value arguments
#[derive(Debug, Clone)]
pub struct SceneEvent {
    /// Event name
    pub name: String,
    /// Timestamp when the event was created (milliseconds)
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl SceneEvent {
    /// Create a new event with the given name and timestamp
    pub fn new(name: impl Into<String>, timestamp: f64) -> Self {
        Self {
            name: name.into(),
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &SceneEvent) -> bool;
}

impl<F> EventHandler for F
where
    F: FnMut(&SceneEvent) -> bool,
{
    fn on_event(&mut self, event: &SceneEvent) -> bool {
        self(event)
    }
}

/// Event dispatcher scoped to one scene
pub struct EventDispatcher {
    scene: String,
    immediate_queue: Vec<SceneEvent>,
    deferred_queue: Vec<(f64, SceneEvent)>,
    handlers: HashMap<String, Vec<Box<dyn EventHandler>>>,
    current_time: f64,
}

impl EventDispatcher {
    /// Create a new empty dispatcher for the scene `scene`
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            immediate_queue: Vec::new(),
            deferred_queue: Vec::new(),
            handlers: HashMap::new(),
            current_time: 0.0,
        }
    }

    /// Key of the owning scene
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Update current time (milliseconds)
    pub fn update_time(&mut self, time: f64) {
        self.current_time = time;
    }

    /// Register a handler for events named `name`
    pub fn on(&mut self, name: impl Into<String>, handler: impl EventHandler + 'static) {
        self.handlers
            .entry(name.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Number of handlers registered for `name`
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }

    /// Queue an event for delivery on the next dispatch
    pub fn emit(&mut self, event: SceneEvent) {
        self.immediate_queue.push(event);
    }

    /// Post event for deferred delivery at specified time
    pub fn post(&mut self, delivery_time: f64, event: SceneEvent) {
        self.deferred_queue.push((delivery_time, event));
    }

    /// Number of events waiting for delivery
    pub fn pending(&self) -> usize {
        self.immediate_queue.len() + self.deferred_queue.len()
    }

    /// Dispatch all pending events
    /// Processes immediate queue first, then due deferred events.
    /// Returns how many events were delivered.
    pub fn dispatch(&mut self) -> usize {
        let mut delivered = 0;

        let immediate = std::mem::take(&mut self.immediate_queue);
        for event in immediate {
            self.dispatch_event(&event);
            delivered += 1;
        }

        let now = self.current_time;
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.deferred_queue)
            .into_iter()
            .partition(|(time, _)| *time <= now);
        self.deferred_queue = waiting;

        for (_, event) in due {
            self.dispatch_event(&event);
            delivered += 1;
        }

        delivered
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &SceneEvent) {
        if let Some(handlers) = self.handlers.get_mut(&event.name) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    log::trace!("[{}] event '{}' consumed", self.scene, event.name);
                    break;
                }
            }
        }
    }

    /// Clear all queued events
    pub fn clear(&mut self) {
        self.immediate_queue.clear();
        self.deferred_queue.clear();
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("scene", &self.scene)
            .field("pending", &self.pending())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
