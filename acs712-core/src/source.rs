//! Scripted analog source
//!
//! Replays a fixed sequence of raw readings. Used by the crate's own tests
//! and handy for bench-testing code built on top of the driver without a
//! sensor attached.

use crate::{errors::SensorResult, traits::AnalogSource};

/// Analog source that returns `script[0]`, `script[1]`, ... and starts over
/// at the end
///
/// An empty script reads as a constant 0.
#[derive(Debug, Clone)]
pub struct ScriptedSource<'a> {
    script: &'a [u16],
    cursor: usize,
    reads: usize,
    last_channel: Option<u8>,
}

impl<'a> ScriptedSource<'a> {
    /// Replay `script` from its first reading
    pub fn new(script: &'a [u16]) -> Self {
        Self {
            script,
            cursor: 0,
            reads: 0,
            last_channel: None,
        }
    }

    /// Total conversions served so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Channel of the most recent read
    pub fn last_channel(&self) -> Option<u8> {
        self.last_channel
    }

    /// Restart the script from its first reading and clear the counters
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.reads = 0;
        self.last_channel = None;
    }
}

impl AnalogSource for ScriptedSource<'_> {
    type Channel = u8;

    fn read(&mut self, channel: u8) -> SensorResult<u16> {
        self.reads += 1;
        self.last_channel = Some(channel);

        if self.script.is_empty() {
            return Ok(0);
        }

        let value = self.script[self.cursor];
        self.cursor = (self.cursor + 1) % self.script.len();
        Ok(value)
    }
}
