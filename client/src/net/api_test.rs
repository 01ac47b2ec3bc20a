use super::*;

#[test]
fn authorization_value_uses_bearer_scheme() {
    assert_eq!(authorization_value("abc123"), "Bearer abc123");
}

#[test]
fn default_transport_targets_default_base_url() {
    let transport = BrowserTransport::default();
    assert_eq!(transport.config, ApiConfig::default());
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_transport_reports_unavailable() {
    use inventory::transport::Method;

    let request = ApiRequest { method: Method::Get, path: "/inventory", bearer: None, body: None };
    let result = BrowserTransport::default().send(request).await;
    assert_eq!(result, Err(TransportError::new(UNAVAILABLE)));
}
