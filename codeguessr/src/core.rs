// src/core.rs
pub mod highlight;
pub mod ignore;
pub mod round;
pub mod scanner;
pub mod session;
pub mod store;
