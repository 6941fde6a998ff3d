use crate::models::{Ingredient, MealCategory, Recipe};

/// Every starter recipe is sized for ten servings.
fn recipe(
    id: &str,
    name: &str,
    category: MealCategory,
    ingredients: Vec<Ingredient>,
    instructions: &str,
    prep_time: &str,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category,
        servings: 10,
        ingredients,
        instructions: Some(instructions.to_string()),
        prep_time: Some(prep_time.to_string()),
    }
}

/// Built-in recipe catalog seeded into a fresh store.
pub fn starter_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "r1",
            "Scrambled Eggs & Bacon",
            MealCategory::Breakfast,
            vec![
                Ingredient::new("Eggs", 20.0, "eggs", 6.00),
                Ingredient::new("Bacon", 2.0, "lbs", 12.00),
                Ingredient::new("Butter", 0.25, "lb", 1.50),
                Ingredient::new("Toast bread", 20.0, "slices", 3.00),
            ],
            "1. Cook bacon in large skillet until crispy\n2. Remove bacon and cook scrambled eggs in bacon fat\n3. Toast bread\n4. Serve hot with butter",
            "20 mins",
        ),
        recipe(
            "r2",
            "Pancakes with Syrup",
            MealCategory::Breakfast,
            vec![
                Ingredient::new("Pancake mix", 3.0, "cups", 4.00),
                Ingredient::new("Eggs", 6.0, "eggs", 2.00),
                Ingredient::new("Milk", 2.0, "cups", 1.50),
                Ingredient::new("Syrup", 2.0, "cups", 6.00),
                Ingredient::new("Butter", 0.5, "lb", 3.00),
            ],
            "1. Mix pancake mix, eggs, and milk\n2. Heat griddle with butter\n3. Pour 1/4 cup batter per pancake\n4. Flip when bubbles form\n5. Serve with butter and syrup",
            "30 mins",
        ),
        recipe(
            "r3",
            "Oatmeal & Fruit",
            MealCategory::Breakfast,
            vec![
                Ingredient::new("Rolled oats", 5.0, "cups", 4.00),
                Ingredient::new("Milk", 4.0, "cups", 3.00),
                Ingredient::new("Mixed dried fruit", 2.0, "cups", 5.00),
                Ingredient::new("Brown sugar", 0.5, "cups", 1.00),
            ],
            "1. Cook oats with milk until soft\n2. Stir in fruit and sugar\n3. Serve warm",
            "10 mins",
        ),
        recipe(
            "r4",
            "Walking Tacos",
            MealCategory::Lunch,
            vec![
                Ingredient::new("Ground beef", 3.0, "lbs", 15.00),
                Ingredient::new("Taco seasoning", 3.0, "packets", 3.00),
                Ingredient::new("Doritos bags", 10.0, "bags", 12.00),
                Ingredient::new("Shredded cheese", 2.0, "lbs", 8.00),
                Ingredient::new("Lettuce", 1.0, "head", 2.00),
                Ingredient::new("Tomatoes", 4.0, "tomatoes", 3.00),
                Ingredient::new("Sour cream", 1.0, "container", 3.00),
            ],
            "1. Brown ground beef and drain fat\n2. Add taco seasoning with water per packet\n3. Chop lettuce and tomatoes\n4. Open Doritos bags\n5. Let scouts add beef and toppings to their bag",
            "25 mins",
        ),
        recipe(
            "r5",
            "Hot Dogs & Chips",
            MealCategory::Lunch,
            vec![
                Ingredient::new("Hot dogs", 20.0, "hot dogs", 8.00),
                Ingredient::new("Hot dog buns", 20.0, "buns", 6.00),
                Ingredient::new("Chips", 2.0, "bags", 8.00),
                Ingredient::new("Ketchup", 1.0, "bottle", 3.00),
                Ingredient::new("Mustard", 1.0, "bottle", 3.00),
            ],
            "1. Boil water in large pot\n2. Add hot dogs and cook 5-7 minutes\n3. Warm buns if desired\n4. Serve with condiments and chips",
            "15 mins",
        ),
        recipe(
            "r6",
            "BLT Sandwiches",
            MealCategory::Lunch,
            vec![
                Ingredient::new("Bread slices", 20.0, "slices", 3.00),
                Ingredient::new("Bacon", 2.0, "lbs", 12.00),
                Ingredient::new("Lettuce", 2.0, "heads", 4.00),
                Ingredient::new("Tomatoes", 4.0, "tomatoes", 3.00),
                Ingredient::new("Mayonnaise", 1.0, "jar", 3.00),
            ],
            "1. Cook bacon until crispy\n2. Assemble sandwiches with lettuce and tomato\n3. Serve",
            "20 mins",
        ),
        recipe(
            "r7",
            "Spaghetti with Meat Sauce",
            MealCategory::Dinner,
            vec![
                Ingredient::new("Spaghetti pasta", 2.0, "lbs", 4.00),
                Ingredient::new("Ground beef", 2.0, "lbs", 10.00),
                Ingredient::new("Pasta sauce", 3.0, "jars", 9.00),
                Ingredient::new("Garlic bread", 2.0, "loaves", 6.00),
                Ingredient::new("Parmesan cheese", 1.0, "container", 4.00),
            ],
            "1. Boil large pot of salted water\n2. Brown ground beef and drain\n3. Add pasta sauce to beef and simmer\n4. Cook spaghetti until al dente\n5. Warm garlic bread\n6. Serve pasta with sauce and cheese",
            "35 mins",
        ),
        recipe(
            "r8",
            "Campfire Chili",
            MealCategory::Dinner,
            vec![
                Ingredient::new("Ground beef", 3.0, "lbs", 15.00),
                Ingredient::new("Kidney beans", 4.0, "cans", 4.00),
                Ingredient::new("Diced tomatoes", 4.0, "cans", 4.00),
                Ingredient::new("Chili seasoning", 3.0, "packets", 3.00),
                Ingredient::new("Onion", 2.0, "onions", 2.00),
                Ingredient::new("Shredded cheese", 1.0, "lb", 4.00),
                Ingredient::new("Tortilla chips", 2.0, "bags", 6.00),
            ],
            "1. Brown ground beef with diced onions\n2. Add beans, tomatoes, and seasoning\n3. Simmer for 20-30 minutes\n4. Serve in bowls with cheese and chips",
            "45 mins",
        ),
        recipe(
            "r9",
            "Foil Packet Chicken & Vegetables",
            MealCategory::Dinner,
            vec![
                Ingredient::new("Chicken breasts", 10.0, "breasts", 20.00),
                Ingredient::new("Potatoes", 5.0, "lbs", 5.00),
                Ingredient::new("Carrots", 2.0, "lbs", 3.00),
                Ingredient::new("Onions", 3.0, "onions", 3.00),
                Ingredient::new("Italian dressing", 1.0, "bottle", 3.00),
                Ingredient::new("Aluminum foil", 1.0, "roll", 5.00),
            ],
            "1. Cut vegetables into chunks\n2. Place chicken and veggies on foil\n3. Drizzle with Italian dressing\n4. Seal foil packets\n5. Cook on campfire coals for 25-30 mins\n6. Check chicken is fully cooked",
            "40 mins",
        ),
        recipe(
            "r10",
            "S'mores",
            MealCategory::Snack,
            vec![
                Ingredient::new("Graham crackers", 2.0, "boxes", 6.00),
                Ingredient::new("Marshmallows", 2.0, "bags", 6.00),
                Ingredient::new("Chocolate bars", 10.0, "bars", 15.00),
            ],
            "1. Roast marshmallows over campfire\n2. Place between graham crackers with chocolate\n3. Enjoy!",
            "10 mins",
        ),
        recipe(
            "r11",
            "PB&J Sandwiches",
            MealCategory::Snack,
            vec![
                Ingredient::new("Bread slices", 20.0, "slices", 3.00),
                Ingredient::new("Peanut butter", 1.0, "jar", 3.00),
                Ingredient::new("Jam", 1.0, "jar", 3.00),
            ],
            "1. Spread peanut butter and jam on bread\n2. Cut and serve",
            "5 mins",
        ),
        recipe(
            "r12",
            "Campfire Tin Pie",
            MealCategory::Dessert,
            vec![
                Ingredient::new("Pie filling (canned)", 2.0, "cans", 6.00),
                Ingredient::new("Crescent roll dough", 2.0, "tubes", 4.00),
                Ingredient::new("Butter", 0.25, "lb", 1.50),
            ],
            "1. Line aluminum tin with crescent dough\n2. Add pie filling\n3. Top with crescent dough\n4. Cover with foil and place on coals\n5. Cook 15-20 minutes",
            "30 mins",
        ),
    ]
}
