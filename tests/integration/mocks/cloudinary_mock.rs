use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate, Times,
};

/// 构造 Cloudinary tag listing 响应
///
/// 每个 public_id 生成一个 jpg 资源
pub fn listing_body(public_ids: &[&str]) -> serde_json::Value {
    let resources: Vec<serde_json::Value> = public_ids
        .iter()
        .enumerate()
        .map(|(idx, public_id)| {
            serde_json::json!({
                "public_id": public_id,
                "version": 1_700_000_000 + idx as u64,
                "format": "jpg",
                "width": 1200,
                "height": 800,
                "type": "upload",
                "created_at": "2024-03-01T10:00:00Z"
            })
        })
        .collect();

    serde_json::json!({
        "resources": resources,
        "updated_at": "2024-03-02T00:00:00Z"
    })
}

/// 在 `list_path` 上挂载 listing mock
///
/// # 参数
/// - `latency_ms`: 响应延迟(毫秒)
/// - `expected_calls`: 期望调用次数, MockServer drop 时校验
pub async fn setup_listing_mock(
    server: &MockServer,
    list_path: &str,
    body: serde_json::Value,
    latency_ms: u64,
    expected_calls: impl Into<Times>,
) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(latency_ms))
                .set_body_json(body),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// 返回固定状态码和原始 body 的 mock
pub async fn setup_status_mock(server: &MockServer, list_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "application/json"))
        .mount(server)
        .await;
}
