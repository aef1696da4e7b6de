//! Counter reveal: a timed sequence of ascending display values.
//!
//! A [`CounterSpec`] describes one reveal (label, target, total duration).
//! [`play`] validates the spec and hands back a finite [`FrameSequence`]
//! iterator of exactly `target + 1` frames valued `0..=target`. [`run`]
//! drives that sequence against a [`FrameSink`] with a fixed inter-frame
//! delay of `duration / max(target, 1)` seconds; the sleep inside it is
//! the only suspension point in the crate. Playback is blocking and runs
//! to completion — there is no cancellation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Input for one reveal. Constructed per invocation, consumed by a single
/// pass, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub label: String,
    pub target: i64,
    pub duration_secs: f64,
}

impl CounterSpec {
    pub fn new(label: impl Into<String>, target: i64, duration_secs: f64) -> Self {
        Self {
            label: label.into(),
            target,
            duration_secs,
        }
    }

    /// Reject nonsensical specs before any frame is produced.
    pub fn validate(&self) -> Result<()> {
        if self.target < 0 {
            return Err(FolioError::InvalidSpec(format!(
                "target must be non-negative, got {}",
                self.target
            )));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(FolioError::InvalidSpec(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }

    /// Delay between consecutive frames. The `max(target, 1)` divisor
    /// guards the zero-target case, which plays as a single immediate
    /// frame.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let steps = self.target.max(1) as f64;
        Duration::from_secs_f64((self.duration_secs / steps).max(0.0))
    }
}

/// One display state of a counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub value: u64,
    pub label: String,
}

/// Lifecycle of one reveal. `Done` is reached exactly once; the sequence
/// is not reusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Running(u64),
    Done,
}

/// Finite, lazily-consumed iterator over the frames of one reveal.
#[derive(Debug)]
pub struct FrameSequence {
    label: String,
    target: u64,
    state: CounterState,
}

impl FrameSequence {
    #[must_use]
    pub const fn state(&self) -> CounterState {
        self.state
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        match self.state {
            CounterState::Idle => self.target as usize + 1,
            CounterState::Running(i) => (self.target - i) as usize,
            CounterState::Done => 0,
        }
    }
}

impl Iterator for FrameSequence {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let value = match self.state {
            CounterState::Idle => 0,
            CounterState::Running(i) if i < self.target => i + 1,
            CounterState::Running(_) => {
                self.state = CounterState::Done;
                return None;
            }
            CounterState::Done => return None,
        };
        self.state = CounterState::Running(value);
        Some(Frame {
            value,
            label: self.label.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for FrameSequence {}

/// Validate the spec and construct a fresh frame sequence.
///
/// A failed validation produces zero frames.
pub fn play(spec: &CounterSpec) -> Result<FrameSequence> {
    spec.validate()?;
    Ok(FrameSequence {
        label: spec.label.clone(),
        target: spec.target as u64,
        state: CounterState::Idle,
    })
}

/// Consumer of reveal frames.
pub trait FrameSink {
    fn frame(&mut self, frame: &Frame) -> Result<()>;
}

/// Sink that records every frame. Used for non-interactive output and in
/// tests.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub frames: Vec<Frame>,
}

impl FrameSink for CollectSink {
    fn frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Blocking playback: frame 0 lands immediately, every later frame after
/// one interval. Total wall time for target N over duration D is exactly
/// D.
pub fn run<S: FrameSink>(spec: &CounterSpec, sink: &mut S) -> Result<()> {
    let interval = spec.interval();
    let mut frames = play(spec)?;

    if let Some(first) = frames.next() {
        sink.frame(&first)?;
    }
    for frame in frames {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
        sink.frame(&frame)?;
    }
    Ok(())
}
