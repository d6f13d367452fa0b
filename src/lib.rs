//! # Classic Design Patterns Catalog
//!
//! Runnable examples for the classic object-oriented patterns, one binary
//! per pattern:
//!
//! - Strategy (duck simulator): `cargo run --bin p1_strategy`
//! - Observer (weather station): `cargo run --bin p2_observer`
//! - Decorator (coffee shop orders): `cargo run --bin p3_decorator`
//! - Factory Method (pizza stores): `cargo run --bin p4_factory_method`
//! - Abstract Factory (pizza ingredients): `cargo run --bin p5_abstract_factory`
//! - Singleton (chocolate boiler): `cargo run --bin p6_singleton`
//! - Single Responsibility Principle (journal): `cargo run --bin p7_srp`
//!
//! The library half of the crate is [`lazy::LazySingleton`], the lazy
//! thread-safe single-instance slot the singleton examples are built on.

pub mod lazy;
