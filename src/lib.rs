//! woeiv: Weight of Evidence / Information Value scoring library
//!
//! A library for measuring how predictive each column of a tabular dataset
//! is of a binary target, using equal-width binning and WoE/IV statistics.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
