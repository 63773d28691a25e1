use std::collections::BTreeMap;
use std::time::Duration;

/// Delayed delivery of an event back to whoever owns the state machine.
///
/// The browser implementation wraps `setTimeout`; [`VirtualScheduler`] keeps a
/// virtual clock so tests can fast-forward instead of sleeping.
pub trait Scheduler<E> {
    type Handle;

    fn schedule(&mut self, delay: Duration, event: E) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// Scheduler driven by hand. Time only moves when [`VirtualScheduler::advance`]
/// or [`VirtualScheduler::next_due`] is called.
#[derive(Debug)]
pub struct VirtualScheduler<E> {
    now: Duration,
    next_id: u64,
    // (due, id) keeps insertion order for tasks due at the same instant
    queue: BTreeMap<(Duration, TaskId), E>,
}

impl<E> Default for VirtualScheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }
}

impl<E> VirtualScheduler<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pops the earliest task due no later than `deadline`, moving the clock to
    /// its due time. Returns `None` (and leaves the clock alone) when nothing is
    /// due before the deadline.
    pub fn next_due(&mut self, deadline: Duration) -> Option<E> {
        let key = *self.queue.keys().next()?;
        if key.0 > deadline {
            return None;
        }
        let event = self.queue.remove(&key)?;
        self.now = self.now.max(key.0);
        Some(event)
    }

    /// Moves the clock forward by `by`, handing every due event to `fire` in due
    /// order. `fire` may schedule further tasks through the scheduler it is
    /// given; those fire within the same call if they fall inside the window.
    pub fn advance<F>(&mut self, by: Duration, mut fire: F)
    where
        F: FnMut(E, &mut Self),
    {
        let deadline = self.now + by;
        while let Some(event) = self.next_due(deadline) {
            fire(event, self);
        }
        self.now = deadline;
    }
}

impl<E> Scheduler<E> for VirtualScheduler<E> {
    type Handle = TaskId;

    fn schedule(&mut self, delay: Duration, event: E) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.queue.insert((self.now + delay, id), event);
        id
    }

    fn cancel(&mut self, handle: TaskId) {
        self.queue.retain(|(_, id), _| *id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut clock = VirtualScheduler::new();
        clock.schedule(Duration::from_millis(300), "late");
        clock.schedule(Duration::from_millis(100), "early");
        clock.schedule(Duration::from_millis(100), "early-second");

        let mut fired = Vec::new();
        clock.advance(Duration::from_millis(1000), |e, _| fired.push(e));

        assert_eq!(fired, vec!["early", "early-second", "late"]);
        assert_eq!(clock.now(), Duration::from_millis(1000));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut clock = VirtualScheduler::new();
        clock.schedule(Duration::from_millis(500), ());

        let mut count = 0;
        clock.advance(Duration::from_millis(499), |_, _| count += 1);
        assert_eq!(count, 0);
        clock.advance(Duration::from_millis(1), |_, _| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut clock = VirtualScheduler::new();
        let id = clock.schedule(Duration::from_millis(10), 1);
        clock.schedule(Duration::from_millis(20), 2);
        clock.cancel(id);

        let mut fired = Vec::new();
        clock.advance(Duration::from_secs(1), |e, _| fired.push(e));
        assert_eq!(fired, vec![2]);
    }

    #[test]
    fn chained_tasks_are_relative_to_fire_time() {
        let mut clock = VirtualScheduler::new();
        clock.schedule(Duration::from_millis(100), 0u32);

        let mut fired_at = Vec::new();
        clock.advance(Duration::from_millis(250), |n, clock| {
            fired_at.push((n, clock.now()));
            if n < 5 {
                clock.schedule(Duration::from_millis(100), n + 1);
            }
        });

        assert_eq!(
            fired_at,
            vec![
                (0, Duration::from_millis(100)),
                (1, Duration::from_millis(200)),
            ]
        );
        assert_eq!(clock.pending(), 1);
    }
}
