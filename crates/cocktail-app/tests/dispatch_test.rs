//! End-to-end tests for the catalog runtime: startup fallbacks, dispatch,
//! and persistence through real stores.

use cocktail_app::{Action, AppConfig, Catalog, Change, Notice};
use cocktail_core::{
    Error, KeyValueStore, MatchMode, RecipeDraft, RecipeId, Selection, VocabularyOrigin,
};
use cocktail_store::{
    CollectionStore, FileKeyValueStore, LoadOrigin, MemoryKeyValueStore, StaticSource,
};

const CONFIG: &str = r#"{
    "ingredientes": ["Ron blanco", "Tequila", "Lima", "Menta"],
    "tipos": ["Aperitivo", "Refrescante"],
    "familias": ["Clásicos", "Tropicales"]
}"#;

const SEED: &str = r#"[
    {"id": 1, "nombre": "Mojito", "tipo": "Refrescante", "familia": "Clásicos", "puntaje": 8.5,
     "ingredientes": ["Ron blanco", "Lima", "Menta"]},
    {"id": 2, "nombre": "Margarita", "tipo": "Aperitivo", "familia": "Clásicos", "puntaje": 9,
     "ingredientes": [{"cantidad": 2, "unidad": "oz", "nombre": "Tequila"},
                      {"cantidad": 1, "unidad": "oz", "nombre": "Lima"}]},
    {"id": 5, "nombre": "Daiquiri", "tipo": "Refrescante", "familia": "Tropicales", "puntaje": 7,
     "ingredientes": ["Ron blanco", "Lima"]}
]"#;

async fn seeded_catalog() -> Catalog<MemoryKeyValueStore> {
    Catalog::start(
        &StaticSource::new("config.json", CONFIG),
        &StaticSource::new("cocktails.json", SEED),
        CollectionStore::new(MemoryKeyValueStore::new()),
    )
    .await
}

fn names(catalog: &Catalog<impl KeyValueStore>) -> Vec<String> {
    catalog
        .state()
        .visible_recipes()
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

// =============================================================================
// STARTUP
// =============================================================================

#[tokio::test]
async fn test_startup_from_documents() {
    let catalog = seeded_catalog().await;

    assert_eq!(catalog.load_origin(), LoadOrigin::Seed);
    assert_eq!(catalog.state().vocabulary_origin(), VocabularyOrigin::Document);
    assert_eq!(catalog.state().vocabulary().families, vec!["Clásicos", "Tropicales"]);
    assert_eq!(
        catalog.state().index().ingredients,
        vec!["Lima", "Menta", "Ron blanco", "Tequila"]
    );
    assert_eq!(names(&catalog), vec!["Mojito", "Margarita", "Daiquiri"]);
}

#[tokio::test]
async fn test_startup_with_everything_unavailable() {
    let catalog = Catalog::start(
        &StaticSource::unavailable("config.json", "HTTP error! status: 404"),
        &StaticSource::unavailable("cocktails.json", "HTTP error! status: 404"),
        CollectionStore::new(MemoryKeyValueStore::new()),
    )
    .await;

    assert_eq!(catalog.state().vocabulary_origin(), VocabularyOrigin::BuiltIn);
    assert_eq!(catalog.state().vocabulary().ingredients.len(), 11);
    assert_eq!(catalog.load_origin(), LoadOrigin::BuiltIn);
    assert_eq!(names(&catalog), vec!["Mojito Clásico", "Margarita"]);
}

#[tokio::test]
async fn test_open_from_config_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let seed_path = dir.path().join("cocktails.json");
    std::fs::write(&config_path, CONFIG).unwrap();
    std::fs::write(&seed_path, SEED).unwrap();

    let config = AppConfig {
        config_source: config_path.display().to_string(),
        seed_source: seed_path.display().to_string(),
        data_dir: dir.path().join("data"),
        storage_key: "bar".to_string(),
        ..AppConfig::default()
    };

    let mut catalog = Catalog::open(&config).await.unwrap();
    assert_eq!(catalog.load_origin(), LoadOrigin::Seed);
    assert!(dir.path().join("data").join("bar.json").exists());

    catalog
        .dispatch(Action::CreateRecipe(RecipeDraft::new("Cuba Libre").with_score(7.5)))
        .await
        .unwrap();

    let reopened = Catalog::open(&config).await.unwrap();
    assert_eq!(reopened.load_origin(), LoadOrigin::Storage);
    assert_eq!(reopened.state().collection(), catalog.state().collection());
}

#[tokio::test]
async fn test_stored_collection_with_odd_unit_survives_next_save() {
    let stored = r#"[
        {"id": 1, "nombre": "Mojito", "tipo": "Refrescante", "familia": "Clásicos", "puntaje": 8.5},
        {"id": 2, "nombre": "Sour", "tipo": "Aperitivo", "familia": "Clásicos", "puntaje": 8,
         "ingredientes": [{"cantidad": 6, "unidad": "cl", "nombre": "Pisco"}]},
        {"id": 3, "nombre": "Zombie", "tipo": "Refrescante", "familia": "Tropicales", "puntaje": 7}
    ]"#;
    let mut catalog = Catalog::start(
        &StaticSource::new("config.json", CONFIG),
        &StaticSource::new("cocktails.json", SEED),
        CollectionStore::new(MemoryKeyValueStore::new().with_entry("cocktails", stored)),
    )
    .await;

    assert_eq!(catalog.load_origin(), LoadOrigin::Storage);
    assert_eq!(names(&catalog), vec!["Mojito", "Sour", "Zombie"]);

    let dispatched = catalog
        .dispatch(Action::CreateRecipe(RecipeDraft::new("Nuevo")))
        .await
        .unwrap();
    assert_eq!(dispatched.change, Some(Change::Created(RecipeId(4))));

    let saved = catalog.store().backend().get("cocktails").await.unwrap().unwrap();
    for name in ["Mojito", "Sour", "Zombie", "Nuevo"] {
        assert!(saved.contains(name), "{} missing from storage", name);
    }
}

// =============================================================================
// COLLECTION ACTIONS
// =============================================================================

#[tokio::test]
async fn test_create_assigns_max_plus_one() {
    let mut catalog = seeded_catalog().await;

    let dispatched = catalog
        .dispatch(Action::CreateRecipe(RecipeDraft::new("Negroni").with_score(8.0)))
        .await
        .unwrap();

    assert_eq!(dispatched.change, Some(Change::Created(RecipeId(6))));
    assert!(dispatched.notices.is_empty());
}

#[tokio::test]
async fn test_create_after_deleting_everything_starts_at_one() {
    let mut catalog = seeded_catalog().await;
    for id in [1, 2, 5] {
        catalog
            .dispatch(Action::DeleteRecipe {
                id: RecipeId(id),
                confirmed: true,
            })
            .await
            .unwrap();
    }
    assert!(catalog.state().collection().is_empty());
    assert!(catalog.state().index().families.is_empty());

    let dispatched = catalog
        .dispatch(Action::CreateRecipe(RecipeDraft::new("Paloma")))
        .await
        .unwrap();
    assert_eq!(dispatched.change, Some(Change::Created(RecipeId(1))));
}

#[tokio::test]
async fn test_mutations_are_persisted() {
    let mut catalog = seeded_catalog().await;
    let draft = catalog
        .state()
        .recipe(RecipeId(2))
        .unwrap()
        .to_draft()
        .with_score(9.5);

    catalog
        .dispatch(Action::UpdateRecipe {
            id: RecipeId(2),
            draft,
        })
        .await
        .unwrap();

    let stored = catalog.store().backend().get("cocktails").await.unwrap().unwrap();
    assert!(stored.contains("9.5"));
    assert!(stored.contains("\"cantidad\""));
}

#[tokio::test]
async fn test_unconfirmed_delete_is_noop() {
    let mut catalog = seeded_catalog().await;
    let dispatched = catalog
        .dispatch(Action::DeleteRecipe {
            id: RecipeId(1),
            confirmed: false,
        })
        .await
        .unwrap();

    assert_eq!(dispatched.change, None);
    assert_eq!(catalog.state().collection().len(), 3);
}

#[tokio::test]
async fn test_update_unknown_id_is_noop() {
    let mut catalog = seeded_catalog().await;
    let before = catalog.state().collection().clone();

    let dispatched = catalog
        .dispatch(Action::UpdateRecipe {
            id: RecipeId(99),
            draft: RecipeDraft::new("Nope"),
        })
        .await
        .unwrap();

    assert_eq!(dispatched.change, None);
    assert_eq!(catalog.state().collection(), &before);
}

#[tokio::test]
async fn test_invalid_score_rejected() {
    let mut catalog = seeded_catalog().await;
    let result = catalog
        .dispatch(Action::CreateRecipe(RecipeDraft::new("Overproof").with_score(11.0)))
        .await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert_eq!(catalog.state().collection().len(), 3);
}

#[tokio::test]
async fn test_save_failure_reported_and_change_kept() {
    // Quota smaller than any serialized collection.
    let mut catalog = Catalog::start(
        &StaticSource::new("config.json", CONFIG),
        &StaticSource::new("cocktails.json", SEED),
        CollectionStore::new(MemoryKeyValueStore::new().with_quota(16)),
    )
    .await;
    assert_eq!(catalog.load_origin(), LoadOrigin::Seed);

    let dispatched = catalog
        .dispatch(Action::CreateRecipe(
            RecipeDraft::new("Zombie").with_family("Tiki").with_score(6.0),
        ))
        .await
        .unwrap();

    assert_eq!(dispatched.change, Some(Change::Created(RecipeId(6))));
    assert_eq!(dispatched.notices.len(), 1);
    assert!(matches!(dispatched.notices[0], Notice::SaveFailed(_)));
    assert!(catalog.state().collection().contains(RecipeId(6)));
    assert!(catalog.state().index().families.contains(&"Tiki".to_string()));
    assert_eq!(catalog.store().backend().get("cocktails").await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_write_failure_is_notice() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory should be.
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut catalog = Catalog::start(
        &StaticSource::new("config.json", CONFIG),
        &StaticSource::unavailable("cocktails.json", "offline"),
        CollectionStore::new(FileKeyValueStore::new(&blocker)),
    )
    .await;

    let dispatched = catalog
        .dispatch(Action::CreateRecipe(RecipeDraft::new("Sidecar")))
        .await
        .unwrap();
    assert!(matches!(dispatched.notices.as_slice(), [Notice::SaveFailed(_)]));
    assert_eq!(catalog.state().collection().len(), 3);
}

// =============================================================================
// FILTER ACTIONS
// =============================================================================

#[tokio::test]
async fn test_family_and_score_filters() {
    let mut catalog = seeded_catalog().await;
    catalog
        .dispatch(Action::SelectFamily(Selection::only("Clásicos")))
        .await
        .unwrap();
    catalog.dispatch(Action::SetMinScore(9.0)).await.unwrap();

    assert_eq!(names(&catalog), vec!["Margarita"]);
    assert_eq!(catalog.state().result_summary(), "1 cóctel encontrado");
}

#[tokio::test]
async fn test_ingredient_match_modes() {
    let mut catalog = seeded_catalog().await;
    catalog
        .dispatch(Action::ToggleIngredient("Ron blanco".to_string()))
        .await
        .unwrap();
    catalog
        .dispatch(Action::ToggleIngredient("Lima".to_string()))
        .await
        .unwrap();

    // Flexible: any shared ingredient.
    assert_eq!(names(&catalog), vec!["Mojito", "Margarita", "Daiquiri"]);

    // Strict: exactly the selected set.
    catalog
        .dispatch(Action::SetMatchMode(MatchMode::Strict))
        .await
        .unwrap();
    assert_eq!(names(&catalog), vec!["Daiquiri"]);

    // Toggling again unselects.
    catalog
        .dispatch(Action::ToggleIngredient("Ron blanco".to_string()))
        .await
        .unwrap();
    assert!(names(&catalog).is_empty());
}

#[tokio::test]
async fn test_clear_filters_keeps_panel_open() {
    let mut catalog = seeded_catalog().await;
    catalog.dispatch(Action::ToggleFilterPanel).await.unwrap();
    catalog
        .dispatch(Action::SetSearch("MOJ".to_string()))
        .await
        .unwrap();
    catalog
        .dispatch(Action::SelectType(Selection::only("Refrescante")))
        .await
        .unwrap();
    assert_eq!(names(&catalog), vec!["Mojito"]);

    let dispatched = catalog.dispatch(Action::ClearFilters).await.unwrap();
    assert_eq!(dispatched.change, None);
    assert!(catalog.state().criteria().show_panel);
    assert_eq!(catalog.state().visible_ids().len(), 3);
}

#[tokio::test]
async fn test_new_recipe_visible_only_if_it_matches() {
    let mut catalog = seeded_catalog().await;
    catalog
        .dispatch(Action::SelectFamily(Selection::only("Tropicales")))
        .await
        .unwrap();
    catalog
        .dispatch(Action::CreateRecipe(
            RecipeDraft::new("Piña Colada").with_family("Tropicales"),
        ))
        .await
        .unwrap();
    catalog
        .dispatch(Action::CreateRecipe(
            RecipeDraft::new("Gimlet").with_family("Clásicos"),
        ))
        .await
        .unwrap();

    assert_eq!(names(&catalog), vec!["Daiquiri", "Piña Colada"]);
}
