//! Built-in recipes used when neither storage nor the seed document
//! provides a collection.

use cocktail_core::{Collection, ImageRef, IngredientLine, RecipeDraft, RecipeId, Unit};

/// The two-recipe collection the catalog starts from when offline.
pub fn builtin_collection() -> Collection {
    let mojito = RecipeDraft::new("Mojito Clásico")
        .with_kind("Refrescante")
        .with_family("Clásicos")
        .with_score(8.5)
        .with_description(
            "El cóctel cubano más famoso del mundo, refrescante y aromático con menta fresca.",
        )
        .with_ingredient(IngredientLine::new(2.0, Unit::Ounce, "Ron blanco"))
        .with_ingredient(IngredientLine::new(10.0, Unit::Drop, "Menta fresca"))
        .with_ingredient(IngredientLine::new(1.0, Unit::Tablespoon, "Azúcar"))
        .with_ingredient(IngredientLine::new(0.5, Unit::Ounce, "Lima"))
        .with_ingredient(IngredientLine::new(4.0, Unit::Ounce, "Agua con gas"))
        .with_step("Machacar suavemente las hojas de menta con azúcar en el fondo del vaso")
        .with_step("Agregar el jugo de lima fresca")
        .with_step("Llenar el vaso con hielo picado")
        .with_step("Añadir el ron blanco y mezclar suavemente")
        .with_step("Completar con agua con gas")
        .with_step("Decorar con una ramita de menta fresca")
        .with_difficulty("Fácil")
        .with_time("5 min")
        .with_image(ImageRef::External("/mojito-cocktail.png".to_string()));

    let margarita = RecipeDraft::new("Margarita")
        .with_kind("Aperitivo")
        .with_family("Clásicos")
        .with_score(9.0)
        .with_description(
            "El cóctel mexicano por excelencia, perfecto equilibrio entre tequila, lima y triple sec.",
        )
        .with_ingredient(IngredientLine::new(2.0, Unit::Ounce, "Tequila"))
        .with_ingredient(IngredientLine::new(1.0, Unit::Ounce, "Triple sec"))
        .with_ingredient(IngredientLine::new(1.0, Unit::Ounce, "Jugo de lima"))
        .with_ingredient(IngredientLine::new(1.0, Unit::Pinch, "Sal"))
        .with_ingredient(IngredientLine::new(1.0, Unit::Cup, "Hielo"))
        .with_step("Escarchar el borde del vaso con sal")
        .with_step("En una coctelera, agregar tequila, triple sec y jugo de lima")
        .with_step("Llenar la coctelera con hielo y agitar vigorosamente")
        .with_step("Colar en el vaso preparado con hielo fresco")
        .with_step("Decorar con una rodaja de lima")
        .with_difficulty("Fácil")
        .with_time("3 min")
        .with_image(ImageRef::External(
            "/margarita-cocktail-with-salt-rim-and-lime.jpg".to_string(),
        ));

    Collection::from_recipes(vec![
        mojito.into_recipe(RecipeId(1)),
        margarita.into_recipe(RecipeId(2)),
    ])
}
