use super::*;

#[test]
fn meal_categories_are_breakfast_lunch_dinner() {
    assert_eq!(MEAL_CATEGORIES, ["Breakfast", "Lunch", "Dinner"]);
}

#[test]
fn listing_heading_names_the_recipe_list() {
    assert_eq!(Section::Recipes.heading(), "Recipe List");
}
