//! Behavioural properties of the filter engine over realistic collections.
//!
//! Collections are parsed from the same JSON shape the catalog persists so
//! legacy ingredient entries go through the normal normalization path.

use cocktail_core::{Collection, FilterCriteria, MatchMode, Recipe};

fn collection_from_json(json: &str) -> Collection {
    serde_json::from_str(json).expect("Failed to parse collection")
}

fn catalog() -> Collection {
    collection_from_json(
        r#"[
        {"id": 1, "nombre": "Mojito", "familia": "Clásicos", "tipo": "Refrescante", "puntaje": 8.5,
         "ingredientes": [{"nombre": "Ron blanco"}, {"nombre": "Menta"}]},
        {"id": 2, "nombre": "Margarita", "familia": "Clásicos", "tipo": "Aperitivo", "puntaje": 9.0,
         "ingredientes": [{"nombre": "Tequila"}]},
        {"id": 5, "nombre": "Cuba Libre", "familia": "Clásicos", "tipo": "Refrescante", "puntaje": 7.5,
         "ingredientes": ["Ron blanco", "Cola", "Lima"]},
        {"id": 3, "nombre": "Paloma", "familia": "Modernos", "tipo": "Refrescante", "puntaje": 6.0,
         "ingredientes": [{"cantidad": 2, "unidad": "oz", "nombre": "Tequila"}, "Soda", "Lima"]}
    ]"#,
    )
}

fn ids(recipes: &[&Recipe]) -> Vec<u64> {
    recipes.iter().map(|r| r.id.0).collect()
}

#[test]
fn test_neutral_criteria_is_identity() {
    let collection = catalog();
    let criteria = FilterCriteria::new()
        .in_family("all")
        .of_kind("all")
        .with_search("")
        .with_min_score(0.0);

    assert_eq!(ids(&criteria.apply(&collection)), vec![1, 2, 5, 3]);
}

#[test]
fn test_below_threshold_always_excluded() {
    let collection = catalog();
    let variants = vec![
        FilterCriteria::new(),
        FilterCriteria::new().in_family("Modernos"),
        FilterCriteria::new().with_ingredient("Tequila"),
        FilterCriteria::new()
            .with_ingredient("Tequila")
            .with_ingredient("Soda")
            .with_ingredient("Lima")
            .with_match_mode(MatchMode::Strict),
        FilterCriteria::new().with_search("pal"),
    ];

    for criteria in variants {
        let criteria = criteria.with_min_score(6.5);
        let result = criteria.apply(&collection);
        assert!(
            result.iter().all(|r| r.score >= 6.5),
            "criteria {:?} let a low-scoring recipe through",
            criteria
        );
        assert!(!ids(&result).contains(&3));
    }
}

#[test]
fn test_strict_superset_does_not_match_but_equal_set_does() {
    let collection = catalog();

    let subset = FilterCriteria::new()
        .with_ingredient("Ron blanco")
        .with_ingredient("Lima")
        .with_match_mode(MatchMode::Strict);
    // Cuba Libre also uses Cola: a superset of the selection.
    assert!(subset.apply(&collection).is_empty());

    let exact = subset.with_ingredient("Cola");
    assert_eq!(ids(&exact.apply(&collection)), vec![5]);
}

#[test]
fn test_strict_selection_order_is_irrelevant() {
    let collection = catalog();
    let criteria = FilterCriteria::new()
        .with_ingredient("Menta")
        .with_ingredient("Ron blanco")
        .with_match_mode(MatchMode::Strict);
    assert_eq!(ids(&criteria.apply(&collection)), vec![1]);
}

#[test]
fn test_flexible_single_shared_ingredient_matches() {
    let collection = catalog();
    let criteria = FilterCriteria::new()
        .with_ingredient("Menta")
        .with_ingredient("Granadina");
    assert_eq!(ids(&criteria.apply(&collection)), vec![1]);

    let criteria = FilterCriteria::new().with_ingredient("Lima");
    assert_eq!(ids(&criteria.apply(&collection)), vec![5, 3]);
}

#[test]
fn test_family_and_threshold_scenario() {
    let collection = collection_from_json(
        r#"[
        {"id": 1, "nombre": "Mojito", "familia": "Clásicos", "tipo": "Refrescante", "puntaje": 8.5,
         "ingredientes": [{"nombre": "Ron blanco"}, {"nombre": "Menta"}]},
        {"id": 2, "nombre": "Margarita", "familia": "Clásicos", "tipo": "Aperitivo", "puntaje": 9.0,
         "ingredientes": [{"nombre": "Tequila"}]}
    ]"#,
    );
    let criteria = FilterCriteria::new().in_family("Clásicos").with_min_score(9.0);

    let result = criteria.apply(&collection);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Margarita");
}

#[test]
fn test_legacy_ingredient_compares_by_name() {
    let collection = collection_from_json(
        r#"[{"id": 1, "nombre": "Gimlet", "familia": "Clásicos", "tipo": "Aperitivo",
             "puntaje": 7, "ingredientes": ["Gin", "Lima"]}]"#,
    );
    let recipe = collection.get(cocktail_core::RecipeId(1)).unwrap();
    assert_eq!(recipe.ingredients[1].quantity, 1.0);
    assert_eq!(recipe.ingredients[1].unit.as_str(), "oz");

    let criteria = FilterCriteria::new()
        .with_ingredient("Gin")
        .with_ingredient("Lima")
        .with_match_mode(MatchMode::Strict);
    assert_eq!(criteria.apply(&collection).len(), 1);
}
