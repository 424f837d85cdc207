//! API Client Integration Tests
//!
//! Runs `DummyJsonClient` against a local axum server serving canned JSON.

#[cfg(test)]
mod tests {
    use crate::api::{ApiConfig, ApiError, DummyJsonClient, ProductSource};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::routing::get;
    use axum::Router;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    const PRODUCTS_JSON: &str = r#"{
        "products": [
            { "id": 1, "title": "Essence Mascara Lash Princess", "brand": "Essence", "price": 9.99, "discountPercentage": 7.17, "rating": 4.94, "thumbnail": "https://cdn.example/1.png" },
            { "id": 2, "title": "Eyeshadow Palette with Mirror", "brand": "Glamour Beauty", "price": 19.99, "discountPercentage": 5.5, "rating": 3.28, "thumbnail": "https://cdn.example/2.png" },
            { "id": 16, "title": "Apple", "price": 1.99, "discountPercentage": 12.62, "rating": 4.19, "thumbnail": "https://cdn.example/16.png" }
        ],
        "total": 194,
        "skip": 0,
        "limit": 3
    }"#;

    const DETAIL_JSON: &str = r#"{
        "id": 1,
        "title": "Essence Mascara Lash Princess",
        "description": "A popular mascara.",
        "category": "beauty",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "brand": "Essence",
        "sku": "RCH45Q1A",
        "weight": 2,
        "dimensions": { "width": 23.17, "height": 14.43, "depth": 28.01 },
        "warrantyInformation": "1 month warranty",
        "shippingInformation": "Ships in 1 month",
        "availabilityStatus": "Low Stock",
        "reviews": [
            { "rating": 2, "comment": "Very unhappy with my purchase!", "reviewerName": "John Doe", "reviewerEmail": "john.doe@x.dummyjson.com" }
        ],
        "returnPolicy": "30 days return policy",
        "minimumOrderQuantity": 24,
        "thumbnail": "https://cdn.example/1.png"
    }"#;

    async fn product_by_id(Path(id): Path<u32>) -> Response {
        if id == 1 {
            DETAIL_JSON.into_response()
        } else {
            let body = format!(r#"{{"message":"Product with id '{}' not found"}}"#, id);
            (StatusCode::NOT_FOUND, body).into_response()
        }
    }

    async fn serve(router: Router) -> DummyJsonClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test server");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Test server failed");
        });
        DummyJsonClient::new(&ApiConfig::with_base_url(format!("http://{}", addr)))
    }

    async fn catalog_server() -> DummyJsonClient {
        let router = Router::new()
            .route("/products", get(|| async { PRODUCTS_JSON }))
            .route("/products/{id}", get(product_by_id));
        serve(router).await
    }

    #[tokio::test]
    async fn test_list_products_keeps_api_order() {
        let client = catalog_server().await;

        let products = client.list_products().await.expect("List failed");

        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 16]);
        assert_eq!(products[1].brand.as_deref(), Some("Glamour Beauty"));
        assert!(products[2].brand.is_none());
    }

    #[tokio::test]
    async fn test_fetch_page_reads_envelope() {
        let client = catalog_server().await;

        let page = client.fetch_page().await.expect("Page failed");
        assert_eq!(page.total, 194);
        assert_eq!(page.limit, 3);
        assert_eq!(page.products.len(), 3);
    }

    #[tokio::test]
    async fn test_get_product_decodes_detail() {
        let client = catalog_server().await;

        let detail = client.get_product(1).await.expect("Get failed");
        assert_eq!(detail.category, "beauty");
        assert_eq!(detail.return_policy, "30 days return policy");
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].comment, "Very unhappy with my purchase!");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let client = catalog_server().await;

        let err = client.get_product(999).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_server_error_on_collection() {
        let router = Router::new().route(
            "/products",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = serve(router).await;

        let err = client.list_products().await.unwrap_err();
        match err {
            ApiError::Status { status, url } => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert!(url.ends_with("/products"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let router = Router::new().route("/products", get(|| async { "<html>not json</html>" }));
        let client = serve(router).await;

        let err = client.list_products().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = DummyJsonClient::new(&ApiConfig::with_base_url(format!("http://{}", addr)));
        let err = client.get_product(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }

    #[tokio::test]
    async fn test_usable_as_trait_object() {
        let client = catalog_server().await;
        let source: Arc<dyn ProductSource> = Arc::new(client);

        let products = source.list_products().await.unwrap();
        let first = source.get_product(products[0].id).await.unwrap();
        assert_eq!(first.summary(), products[0]);
    }
}
