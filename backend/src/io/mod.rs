//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! ## Supported Operations
//!
//! - **POST /stations**, **GET /stations**, **GET /stations/{id}**, **DELETE /stations/{id}**
//! - **POST /lines**, **GET /lines**, **GET /lines/{id}**, **PUT /lines/{id}**, **DELETE /lines/{id}**

pub mod rest;

pub use rest::*;
