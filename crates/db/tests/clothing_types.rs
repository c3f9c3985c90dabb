//! Integration tests for the clothing type catalog.

use pressing_db::repositories::ClothingTypeRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalog_is_seeded_with_defaults(pool: PgPool) {
    let types = ClothingTypeRepo::list(&pool).await.unwrap();
    let ids: Vec<_> = types.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["chemise", "costume", "pantalon"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_duplicate_id_keeps_existing_name(pool: PgPool) {
    let added = ClothingTypeRepo::add(&pool, "manteau", "Manteau").await.unwrap();
    assert_eq!(added.name, "Manteau");

    let again = ClothingTypeRepo::add(&pool, "manteau", "MANTEAU").await.unwrap();
    assert_eq!(again.name, "Manteau");
    assert_eq!(ClothingTypeRepo::list(&pool).await.unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_and_delete(pool: PgPool) {
    let renamed = ClothingTypeRepo::rename(&pool, "chemise", "Chemise homme")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.id, "chemise");
    assert_eq!(renamed.name, "Chemise homme");

    assert!(ClothingTypeRepo::rename(&pool, "inconnu", "X")
        .await
        .unwrap()
        .is_none());

    assert!(ClothingTypeRepo::delete(&pool, "chemise").await.unwrap());
    assert!(!ClothingTypeRepo::delete(&pool, "chemise").await.unwrap());
    let types = ClothingTypeRepo::list(&pool).await.unwrap();
    assert!(types.iter().all(|t| t.id != "chemise"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reset_restores_defaults(pool: PgPool) {
    ClothingTypeRepo::add(&pool, "manteau", "Manteau").await.unwrap();
    ClothingTypeRepo::delete(&pool, "costume").await.unwrap();

    let types = ClothingTypeRepo::reset(&pool).await.unwrap();
    let ids: Vec<_> = types.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["chemise", "costume", "pantalon"]);
}
