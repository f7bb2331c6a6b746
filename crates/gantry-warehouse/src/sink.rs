// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Shipment Log Sinks
//!
//! The controller reports every package state transition as a
//! [`ShipmentEvent`] to an append-only sink. Sinks receive events in exactly
//! the order the controller emits them and must not reorder or drop them.
//!
//! Sink failures are fire-and-forget with respect to warehouse consistency:
//! the controller counts the failure and keeps its in-memory state as the
//! source of truth. Durable sinks (databases, files) live outside this crate;
//! the implementations here cover testing, console inspection, and the
//! zero-overhead default.

use gantry_model::event::ShipmentEvent;

/// Error reported by a sink that failed to append an event.
///
/// The message is free-form; the controller never inspects it beyond
/// logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    message: String,
}

impl SinkError {
    /// Creates a new sink error with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SinkError {}

/// An append-only consumer of shipment events.
pub trait ShipmentLogSink {
    /// Appends one event to the log.
    ///
    /// Implementations must preserve the order of calls. A returned error
    /// is reported by the controller but never unwinds the state transition
    /// that produced the event.
    fn append(&mut self, event: &ShipmentEvent) -> Result<(), SinkError>;
}

/// A sink that records every event in memory, in emission order.
///
/// Intended for tests and snapshot inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogSink {
    events: Vec<ShipmentEvent>,
}

impl MemoryLogSink {
    /// Creates an empty memory sink.
    #[inline]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in emission order.
    #[inline]
    pub fn events(&self) -> &[ShipmentEvent] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if no event was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ShipmentLogSink for MemoryLogSink {
    #[inline]
    fn append(&mut self, event: &ShipmentEvent) -> Result<(), SinkError> {
        self.events.push(*event);
        Ok(())
    }
}

/// A sink that prints every event to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogSink;

impl ConsoleLogSink {
    /// Creates a new console sink.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl ShipmentLogSink for ConsoleLogSink {
    fn append(&mut self, event: &ShipmentEvent) -> Result<(), SinkError> {
        println!("{}", event);
        Ok(())
    }
}

/// A sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOperationLogSink;

impl NoOperationLogSink {
    /// Creates a new no-operation sink.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl ShipmentLogSink for NoOperationLogSink {
    #[inline]
    fn append(&mut self, _event: &ShipmentEvent) -> Result<(), SinkError> {
        Ok(())
    }
}
