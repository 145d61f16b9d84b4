// Budgeted selector: the 0/1 knapsack shared by ad allocation and cover
// optimization.
//
// table[i][c] holds the best value reachable with the first i items and
// capacity c:
//
//   table[i][c] = max(table[i-1][c], value_i + table[i-1][c - cost_i])   if cost_i <= c
//   table[i][c] = table[i-1][c]                                           otherwise
//
// The chosen subset is recovered by walking back from table[n][capacity]:
// item i was taken exactly when table[i][c] differs from table[i-1][c].
// O(n * capacity) time and space, with capacity first cut down to the total
// cost of the items that could fit.

use tracing::debug;

/// The optimum found by `select`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// Best total value
    pub value: i64,
    /// Total cost of the chosen items (never above the capacity)
    pub cost: u64,
    /// Indices of the chosen items, in input order
    pub indices: Vec<usize>,
}

impl Selection {
    /// Borrow the chosen items out of the slice that was passed to `select`.
    pub fn items<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.indices.iter().filter_map(|&i| items.get(i)).collect()
    }
}

/// Pick the subset of `items` with the highest total value whose total cost
/// fits in `capacity`.
///
/// `cost_of` and `value_of` extract the two numbers from an item. A negative
/// capacity is treated as zero. Items with non-positive value are never
/// chosen because they cannot raise the total.
pub fn select<T, C, V>(items: &[T], capacity: i64, cost_of: C, value_of: V) -> Selection
where
    C: Fn(&T) -> u64,
    V: Fn(&T) -> i64,
{
    let n = items.len();
    if n == 0 {
        return Selection::default();
    }

    let costs: Vec<u64> = items.iter().map(&cost_of).collect();
    let values: Vec<i64> = items.iter().map(&value_of).collect();
    let capacity = table_width(&costs, capacity);

    debug!(items = n, capacity, "Filling knapsack table");

    let mut table = vec![vec![0i64; capacity + 1]; n + 1];
    for i in 1..=n {
        let (previous, current) = table.split_at_mut(i);
        let previous = &previous[i - 1];
        let current = &mut current[0];
        let value = values[i - 1];

        for c in 0..=capacity {
            current[c] = match fits(costs[i - 1], c) {
                Some(cost) => previous[c].max(value + previous[c - cost]),
                None => previous[c],
            };
        }
    }

    let mut indices = Vec::new();
    let mut remaining = capacity;
    for i in (1..=n).rev() {
        if table[i][remaining] != table[i - 1][remaining] {
            indices.push(i - 1);
            // The item was only taken if it fit, so this cannot underflow.
            remaining -= fits(costs[i - 1], remaining).unwrap_or(0);
        }
    }
    indices.reverse();

    Selection {
        value: table[n][capacity],
        cost: indices.iter().map(|&i| costs[i]).sum(),
        indices,
    }
}

/// Table columns needed for `capacity`: never more than the combined cost
/// of the items that fit on their own, since any extra budget stays unused.
fn table_width(costs: &[u64], capacity: i64) -> usize {
    let capacity = u64::try_from(capacity).unwrap_or(0);
    let reachable = costs
        .iter()
        .filter(|&&cost| cost <= capacity)
        .fold(0u64, |total, &cost| total.saturating_add(cost));
    usize::try_from(capacity.min(reachable)).unwrap_or(usize::MAX)
}

/// The cost as a table offset, if it fits in capacity `c`.
fn fits(cost: u64, c: usize) -> Option<usize> {
    usize::try_from(cost).ok().filter(|&cost| cost <= c)
}
