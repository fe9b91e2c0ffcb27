pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_batch_size, prompt_grams, prompt_oil, prompt_recipe, prompt_yes_no,
    SessionAction,
};
pub use render::{
    display_formulation, display_recipe_card, formulation_json, print_formulation, print_oils,
    print_recipes, write_formulation_csv,
};
