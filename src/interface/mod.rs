pub mod prompts;
pub mod render;

pub use prompts::{confirm_match, prompt_new_ingredient, prompt_yes_no};
pub use render::{
    display_dual_unit_costs, display_ep_cost, display_ingredient_list, display_recipe_cost,
    display_recipe_list, display_unit_costs, display_volume_costs, format_currency,
};
