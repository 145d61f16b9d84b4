// Budgeted selection: one knapsack engine, two domain front ends.
//
// ads.rs buys ads under a budget (cost = ad cost, value = reach);
// cover.rs fills the front page (cost = post size, value = benefit).

pub mod ads;
pub mod cover;
pub mod knapsack;

pub use ads::{allocate_ads, AdAllocation};
pub use cover::{optimize_cover, CoverPlan};
pub use knapsack::{select, Selection};
