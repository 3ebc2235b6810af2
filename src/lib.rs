//! Team-centric analytics over English Premier League match records.
//! Expands home/away fixtures into per-team rows, narrows them by result, splits a season into
//! Early, Mid and Late thirds, and derives KPIs with season-over-season deltas.

pub mod aggregate;
pub mod dashboard;
pub mod data;
pub mod domain;
pub mod export;
pub mod filter;
pub mod kpi;
pub mod period;
pub mod perspective;
pub mod print;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
