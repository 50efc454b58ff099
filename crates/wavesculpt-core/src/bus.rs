//! Typed publish/subscribe for effect-parameter changes.
//!
//! One bus per application instance. Delivery is synchronous: `publish` calls
//! every handler subscribed to the event's topic at that moment, once, and
//! keeps nothing for later subscribers.

use crate::params::{ParamEvent, Topic};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

type Handler = Rc<RefCell<dyn FnMut(&ParamEvent)>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    handler: Handler,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    topics: FnvHashMap<Topic, SmallVec<[Subscriber; 2]>>,
}

impl BusInner {
    fn contains(&self, id: SubscriptionId) -> bool {
        self.topics.values().any(|subs| subs.iter().any(|s| s.id == id))
    }
}

/// Cheap to clone; clones share the same subscriber table.
#[derive(Clone, Default)]
pub struct ParamBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ParamBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, topic: Topic, handler: F) -> SubscriptionId
    where
        F: FnMut(&ParamEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        let handler: Handler = Rc::new(RefCell::new(handler));
        inner
            .topics
            .entry(topic)
            .or_default()
            .push(Subscriber { id, handler });
        log::debug!("[bus] subscribe {} -> {:?}", topic.name(), id);
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        for subs in inner.topics.values_mut() {
            if let Some(pos) = subs.iter().position(|s| s.id == id) {
                subs.remove(pos);
                log::debug!("[bus] unsubscribe {:?}", id);
                return true;
            }
        }
        false
    }

    /// Deliver `event` and return how many handlers ran.
    ///
    /// Handlers may publish or (un)subscribe from inside the callback. A
    /// handler unsubscribed by an earlier one in the same round is skipped,
    /// and a handler is never re-entered by its own nested publish.
    pub fn publish(&self, event: ParamEvent) -> usize {
        let targets: SmallVec<[(SubscriptionId, Handler); 4]> = {
            let inner = self.inner.borrow();
            match inner.topics.get(&event.topic()) {
                Some(subs) => subs.iter().map(|s| (s.id, s.handler.clone())).collect(),
                None => SmallVec::new(),
            }
        };
        let mut delivered = 0;
        for (id, handler) in targets {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            let Ok(mut h) = handler.try_borrow_mut() else {
                log::debug!("[bus] skip re-entrant delivery to {:?}", id);
                continue;
            };
            (&mut *h)(&event);
            delivered += 1;
        }
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().topics.values().map(|s| s.len()).sum()
    }

    pub fn topic_subscribers(&self, topic: Topic) -> usize {
        self.inner
            .borrow()
            .topics
            .get(&topic)
            .map_or(0, |s| s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(bus: &ParamBus, topic: Topic) -> (SubscriptionId, Rc<RefCell<Vec<f32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = bus.subscribe(topic, move |ev| sink.borrow_mut().push(ev.value()));
        (id, seen)
    }

    #[test]
    fn delivers_only_to_matching_topic() {
        let bus = ParamBus::new();
        let (_, chorus) = recorder(&bus, Topic::ChorusChange);
        let (_, delay) = recorder(&bus, Topic::DelayChange);
        assert_eq!(bus.publish(ParamEvent::chorus(0.5)), 1);
        assert_eq!(*chorus.borrow(), vec![0.5]);
        assert!(delay.borrow().is_empty());
    }

    #[test]
    fn late_subscriber_sees_no_replay() {
        let bus = ParamBus::new();
        assert_eq!(bus.publish(ParamEvent::phaser(0.9)), 0);
        let (_, seen) = recorder(&bus, Topic::PhaserChange);
        assert!(seen.borrow().is_empty());
        bus.publish(ParamEvent::phaser(0.2));
        assert_eq!(*seen.borrow(), vec![0.2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = ParamBus::new();
        let (id, seen) = recorder(&bus, Topic::DelayChange);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(ParamEvent::delay(1.0));
        assert!(seen.borrow().is_empty());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn nested_publish_does_not_reenter_handler() {
        let bus = ParamBus::new();
        let calls = Rc::new(RefCell::new(0));
        let (bus2, calls2) = (bus.clone(), calls.clone());
        bus.subscribe(Topic::ChorusChange, move |_| {
            *calls2.borrow_mut() += 1;
            bus2.publish(ParamEvent::chorus(0.1));
        });
        assert_eq!(bus.publish(ParamEvent::chorus(0.7)), 1);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn handler_removed_mid_round_is_skipped() {
        let bus = ParamBus::new();
        let victim = Rc::new(RefCell::new(None::<SubscriptionId>));
        let (bus2, victim2) = (bus.clone(), victim.clone());
        bus.subscribe(Topic::DelayChange, move |_| {
            if let Some(id) = victim2.borrow_mut().take() {
                bus2.unsubscribe(id);
            }
        });
        let (id, seen) = recorder(&bus, Topic::DelayChange);
        *victim.borrow_mut() = Some(id);
        assert_eq!(bus.publish(ParamEvent::delay(0.3)), 1);
        assert!(seen.borrow().is_empty());
    }
}
