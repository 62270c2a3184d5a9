use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const RELAY_PATH: &str = "/api/v1.0/email/send";

/// 设置邮件中继 mock 服务器
///
/// # 参数
/// - `status`: 返回状态码
/// - `body`: 返回的文本 body
pub async fn setup_relay_mock(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RELAY_PATH))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;

    mock_server
}
