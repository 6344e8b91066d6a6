use crate::models::IngredientCostRecord;

/// Usable percentage left after trim and cooking losses.
///
/// Negative or NaN losses count as zero.
pub fn yield_pct(trim_loss_pct: f64, cooking_loss_pct: f64) -> f64 {
    100.0 - trim_loss_pct.max(0.0) - cooking_loss_pct.max(0.0)
}

impl IngredientCostRecord {
    /// AP to EP costing. EP cost is clamped to zero when nothing usable remains.
    pub fn new(ap_cost: f64, trim_loss_pct: f64, cooking_loss_pct: f64) -> Self {
        let yield_pct = yield_pct(trim_loss_pct, cooking_loss_pct);
        let ep_cost = if yield_pct > 0.0 {
            ap_cost / (yield_pct / 100.0)
        } else {
            0.0
        };

        Self {
            ap_cost,
            trim_loss_pct,
            cooking_loss_pct,
            yield_pct,
            ep_cost,
        }
    }
}

/// Edible-portion cost for an as-purchased cost and its losses.
pub fn compute_ep_cost(ap_cost: f64, trim_loss_pct: f64, cooking_loss_pct: f64) -> f64 {
    IngredientCostRecord::new(ap_cost, trim_loss_pct, cooking_loss_pct).ep_cost
}

/// Cost of one recipe line: quantity times EP cost.
pub fn compute_line_cost(
    quantity: f64,
    ap_cost: f64,
    trim_loss_pct: f64,
    cooking_loss_pct: f64,
) -> f64 {
    quantity * compute_ep_cost(ap_cost, trim_loss_pct, cooking_loss_pct)
}
