#![no_std]

pub mod clock;
pub mod config;
pub mod events;
pub mod sensors;
