//! Event System
//!
//! The simulation never talks to audio or logging directly. It records
//! what happened during a frame in an `EventQueue`, and the frame loop
//! drains the queue afterwards:
//! 1. Collision pass bounces the player → sends `Bounce`
//! 2. Main loop drains `Bounce` → plays the jump sound
//! 3. Main loop drains `GameOver` → logs the final score

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    #[cfg(test)]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Things the simulation reports to the outside world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player bounced off the platform at this index
    Bounce { platform: usize },
    /// Platform at this index left the view and went back to the top
    Recycled { platform: usize, score: u32 },
    /// Player fell below the view
    GameOver { score: u32 },
    /// A retry started a new round
    Reset,
}

impl GameEvent {
    /// Events that carry a one-shot sound cue
    pub fn plays_jump_sound(&self) -> bool {
        matches!(self, GameEvent::Bounce { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_send_and_drain() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());

        queue.send(GameEvent::Bounce { platform: 3 });
        queue.send(GameEvent::GameOver { score: 9 });
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().filter(|e| e.plays_jump_sound()).count(), 1);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![GameEvent::Bounce { platform: 3 }, GameEvent::GameOver { score: 9 }]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_discards() {
        let mut queue: EventQueue<GameEvent> = EventQueue::default();
        queue.send(GameEvent::Reset);
        queue.clear();
        assert_eq!(queue.len(), 0);
    }
}
