//! Playback: a forward-only cursor over a trace, driven by a cooperative
//! tick clock
//!
//! Two pieces:
//! - [`PlaybackSession`]: the state machine. `tick()` yields exactly one
//!   frame per call while running and reports completion exactly once. It
//!   takes no clock at all, so tests call it directly.
//! - [`TickClock`]: decides *when* the UI loop should call `tick()`. It
//!   takes the current time as a parameter rather than reading one, so tests
//!   drive it with synthetic instants.
//!
//! Everything here is single-threaded and cooperative: the UI loop owns both
//! pieces, consults the session state before the clock, and calls `tick()`
//! at most once per poll, so ticks never overlap and a reset is effective
//! immediately.

use crate::trace::{Frame, Trace};
use std::time::{Duration, Instant};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// Loaded but not started, or explicitly reset.
    Idle,
    /// Ticks advance the cursor.
    Running,
    /// Cursor frozen; `resume` continues where it left off.
    Paused,
    /// The trace ran out, or a search hit ended the run early.
    Completed,
}

/// What a single tick produced.
#[derive(Debug, PartialEq, Eq)]
pub enum TickEvent<'a> {
    /// The next frame to draw; playback continues.
    Advanced(&'a Frame),
    /// A search-hit frame to draw; playback completed on this same tick.
    Matched(&'a Frame),
    /// No frame remained; playback completed without drawing.
    Finished,
}

/// Owns one trace and a cursor into it.
///
/// The trace is immutable once loaded; only `tick`, `start`, and `reset`
/// move the cursor. A session is created per run and replaced wholesale on
/// reset/regenerate/new start rather than reloaded.
#[derive(Debug)]
pub struct PlaybackSession {
    trace: Trace,
    cursor: usize,
    interval: Duration,
    state: PlayerState,
}

impl PlaybackSession {
    pub fn new(trace: Trace, interval: Duration) -> Self {
        PlaybackSession {
            trace,
            cursor: 0,
            interval,
            state: PlayerState::Idle,
        }
    }

    /// Arm playback from the first frame.
    ///
    /// A no-op while already running (the guard against double starts) and
    /// for an empty trace. From `Paused` or `Completed` this rewinds and
    /// starts over. Returns whether the session armed.
    pub fn start(&mut self) -> bool {
        if self.state == PlayerState::Running || self.trace.is_empty() {
            return false;
        }
        self.cursor = 0;
        self.state = PlayerState::Running;
        true
    }

    /// Freeze the cursor. Only meaningful while running.
    pub fn pause(&mut self) {
        if self.state == PlayerState::Running {
            self.state = PlayerState::Paused;
        }
    }

    /// Continue from where `pause` left off.
    pub fn resume(&mut self) {
        if self.state == PlayerState::Paused {
            self.state = PlayerState::Running;
        }
    }

    /// Back to `Idle` with the cursor at 0. After this no tick yields
    /// anything until the next `start`.
    pub fn reset(&mut self) {
        self.state = PlayerState::Idle;
        self.cursor = 0;
    }

    /// Change the tick period. Takes effect when the UI loop next consults
    /// [`interval`](Self::interval); the current tick is unaffected.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayerState::Running
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlayerState::Completed
    }

    /// Frames already consumed; equals the trace length once exhausted.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The most recently yielded frame, for redrawing between ticks (while
    /// paused, or after completion). `None` before the first tick.
    pub fn last_frame(&self) -> Option<&Frame> {
        if self.cursor == 0 {
            None
        } else {
            self.trace.get(self.cursor - 1)
        }
    }

    /// Advance playback by exactly one frame.
    ///
    /// Yields `None` unless running. A frame carrying a match index
    /// completes the session on the same tick ([`TickEvent::Matched`]); an
    /// exhausted trace completes it without a frame
    /// ([`TickEvent::Finished`]). Either way the completion event occurs at
    /// most once per start.
    pub fn tick(&mut self) -> Option<TickEvent<'_>> {
        if self.state != PlayerState::Running {
            return None;
        }

        match self.trace.get(self.cursor) {
            Some(frame) => {
                self.cursor += 1;
                if frame.match_index.is_some() {
                    self.state = PlayerState::Completed;
                    Some(TickEvent::Matched(frame))
                } else {
                    Some(TickEvent::Advanced(frame))
                }
            }
            None => {
                self.state = PlayerState::Completed;
                Some(TickEvent::Finished)
            }
        }
    }
}

/// Cooperative tick scheduler.
///
/// `due` fires at most once per elapsed interval and re-arms itself on
/// firing. The current time and the interval are parameters — the clock
/// holds no timer of its own, which is what makes the playback loop
/// testable: tests pass synthetic instants, and the production loop passes
/// `Instant::now()` and the session's current interval (so an interval
/// change is picked up on the very next poll).
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last: Instant,
}

impl TickClock {
    pub fn new(now: Instant) -> Self {
        TickClock { last: now }
    }

    /// True once a full interval has elapsed since the last fire (or the
    /// last re-arm); re-arms on firing.
    pub fn due(&mut self, now: Instant, interval: Duration) -> bool {
        if now.duration_since(self.last) >= interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Restart the phase: the next fire comes one full interval after `now`.
    /// Called on start and resume so the first frame is not drawn early.
    pub fn rearm(&mut self, now: Instant) {
        self.last = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::TraceBuilder;
    use crate::tracer::Algorithm;

    /// Three comparison frames and a terminal frame, as a sort would emit.
    fn plain_trace() -> Trace {
        let values = [3, 1, 2];
        let mut builder = TraceBuilder::new();
        builder.comparison(&values, &[0, 1]);
        builder.comparison(&values, &[1, 2]);
        builder.comparison(&values, &[0, 2]);
        Trace::new(Algorithm::BubbleSort, None, builder.finish(&values))
    }

    /// One probe then a hit frame, as a search would emit.
    fn hit_trace() -> Trace {
        let values = [5, 9];
        let mut builder = TraceBuilder::new();
        builder.comparison(&values, &[0]);
        builder.comparison(&values, &[1]);
        builder.matched(&values, 1);
        Trace::new(Algorithm::LinearSearch, Some(9), builder.into_frames())
    }

    fn empty_trace() -> Trace {
        Trace::new(Algorithm::BubbleSort, None, Vec::new())
    }

    #[test]
    fn test_ticks_walk_the_trace_in_order() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        let expected: Vec<Frame> = session.trace().frames().to_vec();
        assert!(session.start());

        for (i, want) in expected.iter().enumerate() {
            match session.tick() {
                Some(TickEvent::Advanced(frame)) => assert_eq!(frame, want),
                other => panic!("Expected Advanced at {}, got {:?}", i, other),
            }
        }

        assert_eq!(session.tick(), Some(TickEvent::Finished));
        assert!(session.is_complete());
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        session.start();
        while let Some(event) = session.tick() {
            if event == TickEvent::Finished {
                break;
            }
        }
        assert_eq!(session.tick(), None);
        assert_eq!(session.tick(), None);
        assert_eq!(session.cursor(), session.trace().len());
    }

    #[test]
    fn test_match_completes_on_the_same_tick() {
        let mut session = PlaybackSession::new(hit_trace(), Duration::from_millis(200));
        session.start();

        assert!(matches!(session.tick(), Some(TickEvent::Advanced(_))));
        assert!(matches!(session.tick(), Some(TickEvent::Advanced(_))));
        match session.tick() {
            Some(TickEvent::Matched(frame)) => assert_eq!(frame.match_index, Some(1)),
            other => panic!("Expected Matched, got {:?}", other),
        }
        assert!(session.is_complete());
        // No trailing Finished after an early stop.
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn test_start_while_running_is_a_no_op() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        assert!(session.start());
        session.tick();
        session.tick();
        assert!(!session.start());
        assert_eq!(session.cursor(), 2);
        assert!(session.is_running());
    }

    #[test]
    fn test_start_requires_a_nonempty_trace() {
        let mut session = PlaybackSession::new(empty_trace(), Duration::from_millis(200));
        assert!(!session.start());
        assert_eq!(session.state(), PlayerState::Idle);
        assert_eq!(session.tick(), None);
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        session.start();
        session.tick();
        session.pause();
        assert_eq!(session.state(), PlayerState::Paused);
        assert_eq!(session.tick(), None);
        assert_eq!(session.cursor(), 1);

        session.resume();
        assert!(matches!(session.tick(), Some(TickEvent::Advanced(_))));
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_reset_cancels_playback() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        session.start();
        session.tick();
        session.reset();

        assert_eq!(session.state(), PlayerState::Idle);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.tick(), None);
        assert!(session.last_frame().is_none());
    }

    #[test]
    fn test_restart_after_completion_rewinds() {
        let mut session = PlaybackSession::new(hit_trace(), Duration::from_millis(200));
        session.start();
        while session.tick().is_some() {}
        assert!(session.is_complete());

        assert!(session.start());
        assert_eq!(session.cursor(), 0);
        assert!(matches!(session.tick(), Some(TickEvent::Advanced(_))));
    }

    #[test]
    fn test_last_frame_tracks_the_cursor() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        session.start();
        assert!(session.last_frame().is_none());

        session.tick();
        let last = session.last_frame().expect("one frame consumed");
        assert_eq!(last, session.trace().get(0).expect("frame 0 exists"));
    }

    #[test]
    fn test_set_interval_is_visible_immediately() {
        let mut session = PlaybackSession::new(plain_trace(), Duration::from_millis(200));
        session.start();
        session.set_interval(Duration::from_millis(50));
        assert_eq!(session.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_clock_not_due_before_one_interval() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(100);
        let mut clock = TickClock::new(t0);

        assert!(!clock.due(t0, interval));
        assert!(!clock.due(t0 + Duration::from_millis(99), interval));
        assert!(clock.due(t0 + Duration::from_millis(100), interval));
    }

    #[test]
    fn test_clock_fires_once_per_interval() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(100);
        let mut clock = TickClock::new(t0);

        assert!(clock.due(t0 + Duration::from_millis(150), interval));
        // Re-armed at the fire: 50ms later is not a full interval yet.
        assert!(!clock.due(t0 + Duration::from_millis(200), interval));
        assert!(clock.due(t0 + Duration::from_millis(250), interval));
    }

    #[test]
    fn test_rearm_delays_the_next_fire() {
        let t0 = Instant::now();
        let interval = Duration::from_millis(100);
        let mut clock = TickClock::new(t0);

        clock.rearm(t0 + Duration::from_millis(90));
        assert!(!clock.due(t0 + Duration::from_millis(100), interval));
        assert!(clock.due(t0 + Duration::from_millis(190), interval));
    }

    #[test]
    fn test_clock_honors_interval_changes_between_polls() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(t0);

        assert!(!clock.due(t0 + Duration::from_millis(80), Duration::from_millis(100)));
        // The loop reads the interval each poll; a shortened one applies now.
        assert!(clock.due(t0 + Duration::from_millis(80), Duration::from_millis(50)));
    }
}
