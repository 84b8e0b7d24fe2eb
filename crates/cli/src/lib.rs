//! Console front end for the gym: configuration, services, and the
//! role-specific menus driven over a line-oriented console.

pub mod auth;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod services;
pub mod startup;
pub mod tables;
