pub mod calculator;
pub mod constants;
pub mod recipe;
pub mod units;
pub mod volume;
pub mod yields;

pub use calculator::{compute_dual_unit_costs, compute_unit_costs};
pub use constants::*;
pub use recipe::{cost_recipe, cost_recipe_with, summarize_lines};
pub use units::{classify_unit, normalize_unit, resolve_unit, MeasureUnit, UnitDomain};
pub use volume::{compute_volume_costs, VolumeCosting};
pub use yields::{compute_ep_cost, compute_line_cost, yield_pct};
