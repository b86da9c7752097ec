//! Value bets on unsettled soccer matches, found by comparing each match's quoted odds with an
//! archive of settled matches. The nearest settled matches vote on every wager in the catalog;
//! wagers whose empirical probability beats the quoted odds are staked by the Kelly criterion.

pub mod archive;
pub mod catalog;
pub mod cleanse;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod features;
pub mod file;
pub mod linear;
pub mod print;
pub mod selection;
pub mod similarity;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
