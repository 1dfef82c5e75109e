//! Guessing strategies for playing against the referee
//!
//! This module contains the automated guesser side of the game.

pub mod frequency;
pub mod minimax;
pub mod strategy;

pub use strategy::{FrequencyStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
