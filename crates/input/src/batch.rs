//! Per-tick event batch.

use arrayvec::ArrayVec;

use crate::map::map_key_number;
use crate::types::InputEvent;

/// Upper bound on events delivered in one tick. Extra presses are dropped.
pub const MAX_EVENTS_PER_TICK: usize = 8;

/// Ordered input events for one tick, stack-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    events: ArrayVec<InputEvent, MAX_EVENTS_PER_TICK>,
    dropped: u32,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a batch from the key numbers pressed during a matrix scan.
    ///
    /// ```
    /// use mono_tetris_input::TickInput;
    /// use mono_tetris_input::types::InputEvent;
    ///
    /// let input = TickInput::from_key_numbers([3, 0, 1]);
    /// assert_eq!(input.as_slice(), &[InputEvent::Left, InputEvent::Rotate]);
    /// ```
    pub fn from_key_numbers(keys: impl IntoIterator<Item = u8>) -> Self {
        let mut input = Self::new();
        for event in keys.into_iter().filter_map(map_key_number) {
            input.push(event);
        }
        input
    }

    /// Append an event. Returns false if the batch was full.
    pub fn push(&mut self, event: InputEvent) -> bool {
        match self.events.try_push(event) {
            Ok(()) => true,
            Err(_) => {
                self.dropped = self.dropped.saturating_add(1);
                false
            }
        }
    }

    pub fn as_slice(&self) -> &[InputEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events rejected because the batch was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Empty the batch for the next tick.
    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }
}
