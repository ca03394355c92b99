//! Delay-cost scoring and the allocation total order.
//!
//! One pure ranking function replaces the family of ad hoc comparators
//! this problem tends to accumulate: every fill pass ranks the pool by
//! [`allocation_order`], and every selected batch is arranged by
//! [`delivery_order`] before loading.
//!
//! # Score Convention
//! **Higher cost = selected earlier.** The score estimates the cost of
//! delaying an item further, so items that have waited longer, travel
//! farther, or carry higher priority rank first.

use std::cmp::Ordering;

use crate::models::{MailItem, Tick};

/// Clock reading carried into a ranking pass.
///
/// The host owns the clock; a fill observes one consistent tick value
/// for its whole ranking pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationContext {
    /// Current simulation tick.
    pub now: Tick,
}

impl AllocationContext {
    /// Creates a context at the given tick.
    pub fn at_tick(now: Tick) -> Self {
        Self { now }
    }
}

/// Estimated cost of delaying an item further.
///
/// `estimate^1.1 * (1 + sqrt(priority))`, where the delivery-time
/// estimate is `wait + destination + 1`: ticks waited since intake,
/// plus destination distance, plus one tick because transit always
/// takes at least one tick. The `+1` also keeps the estimate positive
/// when an item arrives on the current tick, and the wait saturates at
/// zero if the host clock reads behind the arrival stamp.
pub fn delay_cost(item: &MailItem, ctx: &AllocationContext) -> f64 {
    let estimate = (item.wait_ticks(ctx.now) + item.destination as Tick + 1) as f64;
    estimate.powf(1.1) * (1.0 + f64::from(item.priority).sqrt())
}

/// The total order used to rank the pool at fill time.
///
/// Descending [`delay_cost`], then descending priority, then ascending
/// arrival, then ascending weight, then ascending id. The id leg makes
/// the order total: two distinct items never compare equal, so a fill
/// over identical inputs always selects the same set.
pub fn allocation_order(a: &MailItem, b: &MailItem, ctx: &AllocationContext) -> Ordering {
    delay_cost(b, ctx)
        .partial_cmp(&delay_cost(a, ctx))
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.arrival.cmp(&b.arrival))
        .then_with(|| a.weight.cmp(&b.weight))
        .then_with(|| a.id.cmp(&b.id))
}

/// The physical riding order inside a selected batch.
///
/// Ascending destination, ties by [`allocation_order`]. Loading a
/// batch in reverse of this order makes a LIFO carrier pop a
/// monotonically non-decreasing destination sequence. A pure function
/// of item attributes, so the loaded sequence never depends on pool
/// insertion order.
pub fn delivery_order(a: &MailItem, b: &MailItem, ctx: &AllocationContext) -> Ordering {
    a.destination
        .cmp(&b.destination)
        .then_with(|| allocation_order(a, b, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, weight: u32, destination: u32, arrival: Tick) -> MailItem {
        MailItem::new(id, weight, destination, arrival)
    }

    #[test]
    fn test_delay_cost_ordinary() {
        // wait 10, dest 5 → estimate 16; priority 0 → multiplier 1.
        let a = item("A", 500, 5, 0);
        let ctx = AllocationContext::at_tick(10);
        let expected = 16f64.powf(1.1);
        assert!((delay_cost(&a, &ctx) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_delay_cost_priority_multiplier() {
        // priority 100 → multiplier 1 + sqrt(100) = 11.
        let p = item("P", 500, 5, 0).with_priority(100);
        let o = item("O", 500, 5, 0);
        let ctx = AllocationContext::at_tick(10);
        assert!((delay_cost(&p, &ctx) - 11.0 * delay_cost(&o, &ctx)).abs() < 1e-9);
    }

    #[test]
    fn test_delay_cost_clock_behind_arrival() {
        // Arrival stamp ahead of the clock: wait saturates, estimate
        // stays at destination + 1.
        let a = item("A", 500, 3, 50);
        let ctx = AllocationContext::at_tick(10);
        let expected = 4f64.powf(1.1);
        assert!((delay_cost(&a, &ctx) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_higher_cost_ranks_first() {
        let far = item("far", 500, 8, 0);
        let near = item("near", 500, 1, 0);
        let ctx = AllocationContext::at_tick(5);
        assert_eq!(allocation_order(&far, &near, &ctx), Ordering::Less);
        assert_eq!(allocation_order(&near, &far, &ctx), Ordering::Greater);
    }

    #[test]
    fn test_tie_breaks_in_documented_order() {
        let ctx = AllocationContext::at_tick(10);

        // Same cost shape, different priority: larger priority first.
        // (Equal cost requires engineered inputs; exercise each leg on
        // pairs identical in all earlier keys instead.)
        let early = item("A", 500, 5, 2);
        let late = item("B", 500, 5, 2);
        // Identical in cost, priority, arrival, weight: id decides.
        assert_eq!(allocation_order(&early, &late, &ctx), Ordering::Less);

        let light = item("A", 400, 5, 2);
        let heavy = item("B", 600, 5, 2);
        // Same estimate and priority but different weight: the weight
        // leg only fires when costs tie, which they do here (weight
        // does not enter the score).
        assert_eq!(allocation_order(&light, &heavy, &ctx), Ordering::Less);

        let first = item("A", 500, 5, 1);
        let second = item("B", 500, 6, 0);
        // Different costs: cost dominates regardless of arrival.
        let expected = delay_cost(&second, &ctx)
            .partial_cmp(&delay_cost(&first, &ctx))
            .unwrap();
        assert_eq!(allocation_order(&first, &second, &ctx), expected);
    }

    #[test]
    fn test_priority_leg_on_cost_tie() {
        let ctx = AllocationContext::at_tick(0);
        // Costs differ (priority enters the score), so the priority
        // item wins on cost alone; the dedicated priority leg guards
        // against float coincidences.
        let p = item("P", 500, 5, 0).with_priority(10);
        let o = item("O", 500, 5, 0);
        assert_eq!(allocation_order(&p, &o, &ctx), Ordering::Less);
    }

    #[test]
    fn test_delivery_order_by_destination() {
        let ctx = AllocationContext::at_tick(10);
        let low = item("A", 500, 2, 0);
        let high = item("B", 500, 7, 0);
        assert_eq!(delivery_order(&low, &high, &ctx), Ordering::Less);
        assert_eq!(delivery_order(&high, &low, &ctx), Ordering::Greater);
    }

    #[test]
    fn test_delivery_order_same_destination_is_total() {
        let ctx = AllocationContext::at_tick(10);
        let a = item("A", 500, 4, 0);
        let b = item("B", 500, 4, 0);
        assert_eq!(delivery_order(&a, &b, &ctx), Ordering::Less);
    }
}
