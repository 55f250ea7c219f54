use crate::model::{Difficulty, FoodRecommendation, RecommendationKind, RestaurantInfo};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The fixed list served by [`crate::services::MockLookup`].
pub fn mock_recommendations() -> Vec<FoodRecommendation> {
    vec![
        FoodRecommendation {
            id: "1".into(),
            name: "Comforting Mac and Cheese".into(),
            description: "A warm, creamy comfort food perfect for when you need a pick-me-up".into(),
            image: "https://images.unsplash.com/photo-1543339494-b94cdb3f0b45?w=400&h=300&fit=crop".into(),
            kind: RecommendationKind::Recipe,
            preparation_time: 25,
            difficulty: Difficulty::Easy,
            dietary_tags: strings(&["vegetarian", "comfort"]),
            mood_tags: strings(&["sad", "stressed", "nostalgic"]),
            rating: 4.5,
            ingredients: Some(strings(&["Macaroni", "Cheddar cheese", "Milk", "Butter", "Flour"])),
            instructions: Some(strings(&[
                "Cook macaroni according to package directions",
                "Make cheese sauce with butter, flour, milk, and cheese",
                "Combine and bake until bubbly",
            ])),
            restaurant_info: None,
        },
        FoodRecommendation {
            id: "2".into(),
            name: "Energizing Smoothie Bowl".into(),
            description: "Fresh fruits and nuts to boost your energy and mood".into(),
            image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400&h=300&fit=crop".into(),
            kind: RecommendationKind::Recipe,
            preparation_time: 10,
            difficulty: Difficulty::Easy,
            dietary_tags: strings(&["vegan", "gluten-free", "healthy"]),
            mood_tags: strings(&["energetic", "happy", "calm"]),
            rating: 4.8,
            ingredients: Some(strings(&["Banana", "Berries", "Almond milk", "Chia seeds", "Granola"])),
            instructions: Some(strings(&[
                "Blend fruits with almond milk",
                "Top with granola and seeds",
                "Serve immediately",
            ])),
            restaurant_info: None,
        },
        FoodRecommendation {
            id: "3".into(),
            name: "Cozy Coffee Shop".into(),
            description: "A warm, inviting space perfect for reflection and comfort".into(),
            image: "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=400&h=300&fit=crop".into(),
            kind: RecommendationKind::Restaurant,
            preparation_time: 0,
            difficulty: Difficulty::Easy,
            dietary_tags: strings(&["coffee", "pastries", "comfort"]),
            mood_tags: strings(&["calm", "nostalgic", "romantic"]),
            rating: 4.6,
            ingredients: None,
            instructions: None,
            restaurant_info: Some(RestaurantInfo {
                name: "The Cozy Corner".into(),
                address: "123 Main St, Downtown".into(),
                rating: 4.6,
                price_range: "$$".into(),
            }),
        },
    ]
}
