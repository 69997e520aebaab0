//! Recorded head-pose playback
//!
//! A trace is JSON lines, one orientation sample per frame:
//! `{"face_detected": true, "pitch": 2.0, "yaw": 41.5, "roll": -1.0}`
//! Blank lines and lines starting with `#` are skipped.

use std::io::BufRead;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::core::capture::{FrameSource, OrientationSignal};
use crate::types::OrientationReading;
use crate::{QuizError, Result};

/// Frame source that replays a recorded trace at a fixed frame interval.
/// Running off the end of the trace is an acquisition failure.
#[derive(Debug)]
pub struct TraceReplay {
    samples: Vec<OrientationReading>,
    position: usize,
    frame_interval: Duration,
}

impl TraceReplay {
    pub fn new(samples: Vec<OrientationReading>, frame_interval: Duration) -> Self {
        Self {
            samples,
            position: 0,
            frame_interval,
        }
    }

    /// Parse a trace from any buffered reader
    pub fn from_reader<R: BufRead>(reader: R, frame_interval: Duration) -> Result<Self> {
        let mut samples = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let sample: OrientationReading = serde_json::from_str(line)
                .map_err(|e| QuizError::InvalidTrace { line: i + 1, reason: e.to_string() })?;
            samples.push(sample);
        }
        Ok(Self::new(samples, frame_interval))
    }

    /// Open a trace file
    pub fn load(path: impl AsRef<Path>, frame_interval: Duration) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let replay = Self::from_reader(std::io::BufReader::new(file), frame_interval)?;
        info!("loaded {} trace frames from {}", replay.len(), path.display());
        Ok(replay)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FrameSource for TraceReplay {
    type Frame = OrientationReading;

    fn read_frame(&mut self) -> Option<OrientationReading> {
        let sample = *self.samples.get(self.position)?;
        if self.position > 0 && !self.frame_interval.is_zero() {
            std::thread::sleep(self.frame_interval);
        }
        self.position += 1;
        Some(sample)
    }
}

impl Drop for TraceReplay {
    fn drop(&mut self) {
        debug!("trace replay closed after {} frames", self.position);
    }
}

/// Orientation signal for recorded frames: the frame already is the reading
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordedPose;

impl OrientationSignal<OrientationReading> for RecordedPose {
    fn process(&mut self, frame: &mut OrientationReading) -> OrientationReading {
        *frame
    }
}
