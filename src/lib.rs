pub mod cards;
pub mod cfr;
pub mod cli;
pub mod config;
pub mod dealer;
pub mod display;
pub mod error;
pub mod evaluate;
pub mod game;
pub mod report;
pub mod trainer;
pub mod walker;
