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

//! # Gantry Model
//!
//! **The Core Domain Model for the Gantry Warehouse Allocation Core.**
//!
//! This crate defines the fundamental data structures used to represent
//! storage bins, packages, and the events that tie them together. It serves
//! as the data interchange layer between warehouse initialization (seed
//! input) and the coordination and loading engines (`gantry_warehouse`,
//! `gantry_loader`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **operation**:
//!
//! * **`ids`**: Strongly-typed identifiers (`BinId`, `PackageId`) to prevent
//!   logical identifier mixing.
//! * **`bin`** / **`bin_index`**: The per-bin record and the capacity-sorted
//!   index answering best-fit queries in `O(log N)`.
//! * **`package`**: Package attributes and the lifecycle state machine.
//! * **`event`**: Load events (rollback bookkeeping) and shipment events
//!   (the external log record).
//! * **`seed`**: Bulk initialization input validated before the first query.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Identifiers are distinct types. You cannot
//!     accidentally use a `PackageId` to address a bin.
//! 2.  **Fail-Fast**: Seed loading and every mutation validate their inputs
//!     eagerly so the coordination layer never observes a bin whose usage
//!     exceeds its capacity.
//! 3.  **Determinism**: Ordered structures break ties by identifier, so
//!     repeated queries over identical state return identical answers.

pub mod bin;
pub mod bin_index;
pub mod error;
pub mod event;
pub mod ids;
pub mod package;
pub mod seed;
