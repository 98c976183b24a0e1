// World id allocation

/// Identifier shared by actors and floor items
pub type WorldId = i32;

/// First id handed out in a round
pub const FIRST_ID: WorldId = WorldId::MIN;

/// Monotonic id counter for everything spawned into a round.
///
/// Actors and items draw from the same counter, so an id is unique across
/// both. Named allocations (`Bot_<id>`, `Item_<id>`) also consume an id.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: WorldId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: FIRST_ID }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> WorldId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Take the next id and format a name with it
    pub fn next_name(&mut self, prefix: &str) -> (WorldId, String) {
        let id = self.next_id();
        (id, format!("{prefix}_{id}"))
    }

    /// Peek at the id that will be handed out next
    pub fn peek(&self) -> WorldId {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_starts_at_min() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), i32::MIN);
        assert_eq!(ids.next_id(), i32::MIN + 1);
    }

    #[test]
    fn test_ids_never_repeat() {
        let mut ids = IdAllocator::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id()));
        }
    }

    #[test]
    fn test_named_allocation_consumes_id() {
        let mut ids = IdAllocator::new();
        let (id, name) = ids.next_name("Bot");
        assert_eq!(id, FIRST_ID);
        assert_eq!(name, format!("Bot_{}", FIRST_ID));
        assert_eq!(ids.peek(), FIRST_ID + 1);
    }
}
