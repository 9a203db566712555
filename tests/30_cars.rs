mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn car_is_read_back_denormalized() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let (_, model_id, color_id) = common::seed_parents(server).await?;

    let body = json!({ "model_id": model_id, "color_id": color_id, "year": 2021, "vin": common::unique_vin() });
    let (status, car) = common::post(server, "/cars", body).await?;
    assert_eq!(status, StatusCode::CREATED, "{}", car);
    assert_eq!(car["model_name"], "Model S");
    assert_eq!(car["hex_code"], "#112233");
    assert!(car["brand_name"].is_string());

    let (status, fetched) = common::get(server, &format!("/cars/{}", car["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, car);
    Ok(())
}

#[tokio::test]
async fn car_with_unknown_model_is_client_error() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let (_, _, color_id) = common::seed_parents(server).await?;

    let body = json!({ "model_id": i32::MAX, "color_id": color_id, "year": 2021, "vin": common::unique_vin() });
    let (status, reply) = common::post(server, "/cars", body).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["error"], "Referenced model or color does not exist");
    Ok(())
}

#[tokio::test]
async fn duplicate_vin_is_conflict() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let (_, model_id, color_id) = common::seed_parents(server).await?;
    let body = json!({ "model_id": model_id, "color_id": color_id, "year": 2010, "vin": common::unique_vin() });

    let (status, _) = common::post(server, "/cars", body.clone()).await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, reply) = common::post(server, "/cars", body).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(reply["error"], "Car with this VIN already exists");
    Ok(())
}

#[tokio::test]
async fn color_in_use_cannot_be_deleted() -> Result<()> {
    let Some(server) = common::ensure_server().await? else {
        return Ok(());
    };
    let (_, model_id, color_id) = common::seed_parents(server).await?;
    let body = json!({ "model_id": model_id, "color_id": color_id, "year": 1999, "vin": common::unique_vin() });
    let (_, car) = common::post(server, "/cars", body).await?;

    let color_path = format!("/car-colors/{}", color_id);
    let (status, _) = common::delete(server, &color_path).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, deleted) = common::delete(server, &format!("/cars/{}", car["id"])).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, car);

    let (status, _) = common::delete(server, &color_path).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
