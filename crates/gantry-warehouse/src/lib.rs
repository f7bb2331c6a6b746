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

//! # Gantry Warehouse
//!
//! **The Coordination Layer of the Gantry Warehouse Allocation Core.**
//!
//! This crate ties the domain model (`gantry_model`) and the truck loading
//! engine (`gantry_loader`) together behind a single facade, the
//! [`controller::WarehouseController`]. The controller owns all mutable
//! warehouse state and serializes every operation, so compound mutations
//! (find a bin, then reserve it; select a load, then commit it) are atomic
//! with respect to other callers.
//!
//! ## Architecture
//!
//! * **`controller`**: The facade. Receives packages, assigns bins by best
//!   fit, selects and commits truck loads, reverses them, and departs the
//!   staged truck.
//! * **`intake`**: The FIFO queue of packages awaiting bin assignment.
//! * **`ledger`**: The authoritative package registry, indexed both by
//!   dense identifier and by tracking number.
//! * **`history`**: The LIFO stack of committed load events that makes
//!   loads reversible.
//! * **`sink`**: The append-only shipment log abstraction and its built-in
//!   implementations.
//! * **`report`** / **`status`**: Owned result types returned to callers;
//!   none of them borrow the controller.
//! * **`error`**: The unified error type of the coordination layer.
//!
//! ## Design Philosophy
//!
//! 1.  **One Writer**: All state lives behind the controller's `&mut self`
//!     entry points. There is no interior mutability and no partial commit.
//! 2.  **Explicit Outcomes**: A package that fits nowhere is requeued or
//!     escalated, never dropped; an empty rollback history is an error,
//!     never a silent no-op.
//! 3.  **Logging Never Blocks Work**: Shipment log sinks are observers.
//!     A failing sink is counted and logged while the state transition it
//!     describes stands.
//!
//! ## Example
//!
//! ```
//! use gantry_model::seed::default_seed;
//! use gantry_warehouse::controller::WarehouseController;
//! use gantry_warehouse::sink::MemoryLogSink;
//!
//! let mut warehouse = WarehouseController::new(default_seed(), MemoryLogSink::new())
//!     .expect("the default seed is valid");
//!
//! warehouse.receive_package(1042, 12).unwrap();
//! warehouse.drain_intake().unwrap();
//!
//! let report = warehouse.load_truck(100).unwrap();
//! assert_eq!(report.loaded(), &[1042]);
//!
//! let departure = warehouse.depart_truck().unwrap();
//! assert_eq!(departure.num_shipped(), 1);
//! ```

pub mod controller;
pub mod error;
pub mod history;
pub mod intake;
pub mod ledger;
pub mod report;
pub mod sink;
pub mod status;
