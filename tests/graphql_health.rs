use async_graphql::Request;
use eshaman_service::schema::create_schema;

#[tokio::test]
async fn health_resolves_ok() {
    let schema = create_schema();
    let resp = schema.execute(Request::new("{ health }")).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    let data = resp.data.into_json().unwrap();
    assert_eq!(data["health"], "OK");
}

#[tokio::test]
async fn health_is_idempotent() {
    let schema = create_schema();
    let first = schema.execute(Request::new("{ health }")).await;
    let second = schema.execute(Request::new("{ health }")).await;
    assert!(first.errors.is_empty(), "errors: {:?}", first.errors);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[tokio::test]
async fn unknown_field_yields_error_envelope() {
    let schema = create_schema();
    let resp = schema.execute(Request::new("{ nope }")).await;
    assert!(!resp.errors.is_empty(), "expected validation error");
}
