use moodfood::catalog::{mock_recommendations, CatalogError, MoodCatalog, MoodCategory};
use moodfood::model::{MoodId, RecommendationKind};

#[test]
fn test_builtin_catalog() {
    let catalog = MoodCatalog::builtin();
    assert_eq!(catalog.len(), 12);

    let happy = catalog.get(&MoodId::new("happy")).unwrap();
    assert_eq!(happy.name, "Happy");
    assert_eq!(happy.icon, "😊");
    assert_eq!(happy.intensity, None);

    assert!(catalog.get(&MoodId::new("grumpy")).is_none());

    let ids: Vec<&str> = catalog.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids[..3], ["happy", "sad", "stressed"]);
}

#[test]
fn test_categories() {
    let catalog = MoodCatalog::builtin();
    assert_eq!(catalog.by_category(MoodCategory::Positive).len(), 7);
    assert_eq!(catalog.by_category(MoodCategory::Negative).len(), 4);

    let neutral: Vec<&str> = catalog
        .by_category(MoodCategory::Neutral)
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(neutral, vec!["nostalgic"]);
}

#[test]
fn test_json_catalog() {
    let json = r#"[
        { "id": "cozy", "name": "Cozy", "color": "bg-accent-calm", "icon": "🧣", "description": "Wrapped up warm", "intensity": 4 },
        { "id": "sad", "name": "Sad", "color": "bg-accent-sad", "icon": "😢", "description": "Down" }
    ]"#;
    let catalog = MoodCatalog::from_json_str(json).unwrap();
    assert_eq!(catalog.len(), 2);
    // Reference data is never pre-stamped.
    assert_eq!(catalog.get(&MoodId::new("cozy")).unwrap().intensity, None);
    assert_eq!(MoodCategory::of(&MoodId::new("cozy")), MoodCategory::Neutral);
}

#[test]
fn test_json_catalog_rejects_duplicates_and_empty() {
    let json = r#"[
        { "id": "sad", "name": "Sad", "color": "", "icon": "", "description": "" },
        { "id": "sad", "name": "Also sad", "color": "", "icon": "", "description": "" }
    ]"#;
    assert!(matches!(MoodCatalog::from_json_str(json), Err(CatalogError::DuplicateId(id)) if id.as_str() == "sad"));
    assert!(matches!(MoodCatalog::from_json_str("[]"), Err(CatalogError::Empty)));
    assert!(matches!(MoodCatalog::from_json_str("{"), Err(CatalogError::Parse(_))));
}

#[test]
fn test_mock_dataset_shape() {
    let items = mock_recommendations();
    assert_eq!(items.len(), 3);

    let recipes: Vec<_> = items.iter().filter(|i| i.kind == RecommendationKind::Recipe).collect();
    assert_eq!(recipes.len(), 2);
    assert!(recipes.iter().all(|r| r.ingredients.is_some() && r.instructions.is_some()));

    let shop = &items[2];
    assert_eq!(shop.kind, RecommendationKind::Restaurant);
    assert_eq!(shop.preparation_time, 0);
    assert_eq!(shop.restaurant_info.as_ref().map(|r| r.price_range.as_str()), Some("$$"));

    // Serialized with the source field names.
    let json = serde_json::to_value(&items[0]).unwrap();
    assert_eq!(json["type"], "recipe");
    assert_eq!(json["preparationTime"], 25);
    assert!(json.get("restaurantInfo").is_none());
}
