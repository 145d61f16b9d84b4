// Ad allocation: maximize total reach without going over budget.

use serde::Serialize;
use tracing::info;

use super::knapsack;
use crate::model::Ad;

/// Which ads to buy for a budget, and the reach they add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdAllocation {
    pub budget: i64,
    pub max_reach: i64,
    /// Chosen ads in catalogue order
    pub ads: Vec<Ad>,
}

impl AdAllocation {
    pub fn total_cost(&self) -> u64 {
        self.ads.iter().map(|ad| u64::from(ad.cost)).sum()
    }

    /// Budget left after buying the chosen ads.
    pub fn remaining(&self) -> i64 {
        self.budget.max(0) - self.total_cost() as i64
    }
}

/// Choose the ads that reach the most users for `budget`.
pub fn allocate_ads(ads: &[Ad], budget: i64) -> AdAllocation {
    let selection = knapsack::select(
        ads,
        budget,
        |ad| u64::from(ad.cost),
        |ad| i64::from(ad.reach),
    );

    info!(
        budget,
        candidates = ads.len(),
        chosen = selection.indices.len(),
        reach = selection.value,
        "Allocated ad budget"
    );

    AdAllocation {
        budget,
        max_reach: selection.value,
        ads: selection.items(ads).into_iter().cloned().collect(),
    }
}
