//! Deferred event queue for decoupled UI communication.
//!
//! Widgets emit events while drawing; the main window drains them with
//! `poll()` after the UI pass and dispatches by concrete type. Blocking work
//! (native dialogs) therefore never runs inside a widget closure.

use std::any::Any;
use std::sync::{Arc, Mutex};
use log::warn;

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 1000;

/// Marker trait for events. Events must be Send + Sync + 'static.
pub trait Event: Any + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

type Queue = Arc<Mutex<Vec<BoxedEvent>>>;

fn push(queue: &Queue, event: BoxedEvent) {
    let mut queue = queue.lock().unwrap_or_else(|e| e.into_inner());
    if queue.len() >= MAX_QUEUE_SIZE {
        let evict_count = queue.len() / 2;
        warn!("Event queue full ({} events), evicting oldest {}", queue.len(), evict_count);
        queue.drain(0..evict_count);
    }
    queue.push(event);
}

/// Owner of the event queue. Cloning shares the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Queue,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit<E: Event>(&self, event: E) {
        push(&self.queue, Box::new(event));
    }

    pub fn emit_boxed(&self, event: BoxedEvent) {
        push(&self.queue, event);
    }

    /// Take all events queued since the last poll, oldest first.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// Get an emitter handle for passing to UI components.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            queue: Arc::clone(&self.queue),
        }
    }

    pub fn queue_len(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Emit-only handle for widgets.
#[derive(Clone)]
pub struct EventEmitter {
    queue: Queue,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("queue_len", &self.queue.lock().map(|q| q.len()).unwrap_or(0))
            .finish()
    }
}

impl EventEmitter {
    pub fn emit<E: Event>(&self, event: E) {
        push(&self.queue, Box::new(event));
    }
}

/// Downcast a queued event to its concrete type.
///
/// The explicit `**event` deref matters: `Box<dyn Event>` itself satisfies the
/// blanket impl, and calling `as_any()` on the box would yield the box's
/// `TypeId`, so every downcast would fail.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestEvent {
        value: i32,
    }

    #[derive(Clone, Debug)]
    struct OtherEvent;

    #[test]
    fn test_emit_queues_for_poll() {
        let bus = EventBus::new();

        bus.emit(TestEvent { value: 1 });
        bus.emit(OtherEvent);
        bus.emit(TestEvent { value: 2 });

        let events = bus.poll();
        assert_eq!(events.len(), 3);
        let values: Vec<i32> = events
            .iter()
            .filter_map(downcast_event::<TestEvent>)
            .map(|e| e.value)
            .collect();
        assert_eq!(values, vec![1, 2]);

        // Queue is empty after poll
        assert_eq!(bus.poll().len(), 0);
    }

    #[test]
    fn test_emitter_shares_queue() {
        let bus = EventBus::new();
        let emitter = bus.emitter();

        emitter.emit(TestEvent { value: 42 });
        assert_eq!(bus.queue_len(), 1);

        let events = bus.poll();
        assert_eq!(downcast_event::<TestEvent>(&events[0]).map(|e| e.value), Some(42));
        assert!(downcast_event::<OtherEvent>(&events[0]).is_none());
    }

    #[test]
    fn test_boxed_emit_keeps_concrete_type() {
        let bus = EventBus::new();
        bus.emit_boxed(Box::new(TestEvent { value: 7 }));

        let events = bus.poll();
        assert_eq!((*events[0]).type_name(), std::any::type_name::<TestEvent>());
        assert_eq!(downcast_event::<TestEvent>(&events[0]).map(|e| e.value), Some(7));
    }

    #[test]
    fn test_queue_evicts_oldest_half_when_full() {
        let bus = EventBus::new();
        for value in 0..MAX_QUEUE_SIZE as i32 {
            bus.emit(TestEvent { value });
        }
        bus.emit(TestEvent { value: -1 });

        let events = bus.poll();
        assert_eq!(events.len(), MAX_QUEUE_SIZE / 2 + 1);
        let first = downcast_event::<TestEvent>(&events[0]).map(|e| e.value);
        assert_eq!(first, Some((MAX_QUEUE_SIZE / 2) as i32));
        let last = downcast_event::<TestEvent>(events.last().unwrap()).map(|e| e.value);
        assert_eq!(last, Some(-1));
    }
}
